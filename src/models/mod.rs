// src/models/mod.rs

pub mod course;
pub mod dashboard;
pub mod feedback;
pub mod score;
pub mod student;
