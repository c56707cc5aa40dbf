//! Command-line interface orchestration for huegap.
//!
//! The `color` command reads tab-separated co-occurrence, candidate and
//! release files, runs the coloring engine and renders one hue per candidate.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, ColorCommand, Command, ExecutionSummary, render_summary, run_cli,
};
pub use input::{InputError, parse_candidates, parse_edges, parse_releases};

#[cfg(test)]
mod test_helpers;
