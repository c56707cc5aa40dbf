//! Support library for the huegap CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! exercise them without forking a subprocess.

pub mod cli;
pub mod logging;
