// src/services/ranking.rs

/// Rank of a subject within a population, plus the population mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMetric {
    /// 1-based competition rank.
    pub rank: usize,
    /// Unrounded mean of the population.
    pub average: f64,
}

impl RankedMetric {
    /// The average as presented to callers.
    pub fn rounded_average(&self) -> f64 {
        round2(self.average)
    }
}

/// Arithmetic mean, 0 for an empty population.
pub fn average(population: &[f64]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().sum::<f64>() / population.len() as f64
}

/// Competition rank: one more than the number of strictly greater entries.
/// Ties share a rank, and the subject is expected to be in the population.
pub fn rank(population: &[f64], subject: f64) -> usize {
    population.iter().filter(|p| **p > subject).count() + 1
}

pub fn rank_and_average(population: &[f64], subject: f64) -> RankedMetric {
    RankedMetric {
        rank: rank(population, subject),
        average: average(population),
    }
}

/// Rounds to 2 decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
