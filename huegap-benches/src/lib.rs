//! Benchmark support crate for huegap.
//!
//! Provides a seeded synthetic timeline generator and parameter types used by
//! the Criterion coloring benchmarks.

pub mod error;
pub mod params;
pub mod timeline;
