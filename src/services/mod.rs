// src/services/mod.rs

pub mod course_detail;
pub mod dashboard;
pub mod feedback;
pub mod ranking;
