//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write temporary input files and assert error handling.
//! These helpers keep the cases short.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_color;
use super::{CliError, ColorCommand};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// `color` command over `edges` with every other option at its default.
pub(super) fn color_command(edges: PathBuf) -> ColorCommand {
    ColorCommand {
        edges,
        candidates: None,
        releases: None,
        threshold: 75,
        release_edge_cost: 10,
        color_deficiency: None,
    }
}

pub(super) fn run_color_expecting_error(cmd: ColorCommand, panic_msg: &str) -> CliError {
    match run_color(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
