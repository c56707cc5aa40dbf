//! Benchmark parameter types.

use std::fmt;

/// Parameters for a coloring benchmark run.
#[derive(Clone, Debug)]
pub struct ColoringBenchParams {
    /// Number of candidates in the timeline.
    pub candidate_count: usize,
    /// Candidate count above which the engine maps hues proportionally.
    pub threshold: usize,
}

impl fmt::Display for ColoringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},threshold={}", self.candidate_count, self.threshold)
    }
}
