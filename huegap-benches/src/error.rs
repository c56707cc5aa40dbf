//! Benchmark setup error type.
//!
//! Setup helpers propagate failures with `?` instead of panicking inside the
//! generator.

use huegap_core::ColoringError;

use crate::timeline::TimelineError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic timeline generation failed.
    #[error("synthetic timeline generation failed: {0}")]
    Timeline(#[from] TimelineError),
    /// Engine configuration was rejected.
    #[error("engine configuration failed: {0}")]
    Coloring(#[from] ColoringError),
}
