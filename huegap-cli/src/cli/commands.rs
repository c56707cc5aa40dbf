//! Command implementations and argument parsing for the huegap CLI.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use huegap_core::{
    CandidateColor, CandidateId, ColorDeficiency, ColoringEngineBuilder, ColoringError,
    ColoringErrorCode, DEFAULT_PROPORTIONAL_THRESHOLD, DEFAULT_RELEASE_EDGE_COST, EdgeWeights,
    PairingStrategy, ReleaseMembership,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, parse_candidates, parse_edges, parse_releases};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "huegap",
    about = "Assign well separated hues to candidates that share a timeline."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Colour every candidate from a co-occurrence table.
    Color(ColorCommand),
}

/// Options accepted by the `color` command.
#[derive(Debug, Args, Clone)]
pub struct ColorCommand {
    /// Tab-separated `candidate<TAB>candidate<TAB>weight` file.
    pub edges: PathBuf,

    /// File listing one candidate per line. Defaults to every candidate named
    /// in the edge and release files.
    #[arg(long)]
    pub candidates: Option<PathBuf>,

    /// Tab-separated `candidate<TAB>release` file.
    #[arg(long)]
    pub releases: Option<PathBuf>,

    /// Candidate count above which hues follow positions proportionally.
    #[arg(long, default_value_t = DEFAULT_PROPORTIONAL_THRESHOLD)]
    pub threshold: usize,

    /// Weight given to pairs that share a release.
    #[arg(long = "release-edge-cost", default_value_t = DEFAULT_RELEASE_EDGE_COST)]
    pub release_edge_cost: u64,

    /// Compress hues for `protanopia`, `deuteranopia` or `tritanopia`.
    #[arg(long = "color-deficiency")]
    pub color_deficiency: Option<ColorDeficiency>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An input file was malformed.
    #[error("invalid input in `{path}`: {source}")]
    Input {
        /// File being parsed.
        path: PathBuf,
        /// Line-level failure.
        #[source]
        source: InputError,
    },
    /// Engine configuration was rejected.
    #[error(transparent)]
    Core(#[from] ColoringError),
}

impl CliError {
    /// Stable core error code behind this failure, if any.
    #[must_use]
    pub fn code(&self) -> Option<ColoringErrorCode> {
        match self {
            Self::Core(core) => Some(core.code()),
            Self::Input { source, .. } => source.coloring_error().map(ColoringError::code),
            Self::Io { .. } => None,
        }
    }
}

/// Summarises the outcome of the `color` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Strategy chosen for the candidate count.
    pub strategy: PairingStrategy,
    /// Colours sorted by hue, then identifier.
    pub colors: Vec<CandidateColor>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or parsed, or the engine
/// configuration is invalid.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use huegap_cli::cli::{Cli, ColorCommand, Command, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a\tb\t5\nb\tc\t3\n")?;
/// let cli = Cli {
///     command: Command::Color(ColorCommand {
///         edges: file.path().to_path_buf(),
///         candidates: None,
///         releases: None,
///         threshold: 75,
///         release_edge_cost: 10,
///         color_deficiency: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.colors.len(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Color(color) => {
            Span::current().record("command", field::display("color"));
            run_color(color)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        threshold = command.threshold,
        release_edge_cost = command.release_edge_cost,
        deficiency = field::Empty,
    ),
)]
pub(super) fn run_color(command: ColorCommand) -> Result<ExecutionSummary, CliError> {
    let engine = ColoringEngineBuilder::new()
        .with_proportional_threshold(command.threshold)
        .with_release_edge_cost(command.release_edge_cost)
        .with_color_deficiency(command.color_deficiency)
        .build()?;
    if let Some(mode) = command.color_deficiency {
        Span::current().record("deficiency", field::display(mode));
    }

    let weights = read_input(&command.edges, "edges", parse_edges)?;
    let releases = match &command.releases {
        Some(path) => read_input(path, "releases", parse_releases)?,
        None => ReleaseMembership::new(),
    };
    let candidates = match &command.candidates {
        Some(path) => read_input(path, "candidates", parse_candidates)?,
        None => implied_candidates(&weights, &releases),
    };

    let outcome = engine.color(&candidates, &weights, &releases);
    let strategy = outcome.strategy();
    let colors = outcome.into_sorted_colors();
    info!(
        candidates = candidates.len(),
        strategy = strategy.as_str(),
        "command completed"
    );
    Ok(ExecutionSummary { strategy, colors })
}

#[instrument(name = "cli.read_input", err, skip(parse), fields(path = field::Empty))]
pub(super) fn read_input<T>(
    path: &Path,
    kind: &'static str,
    parse: fn(BufReader<File>) -> Result<T, InputError>,
) -> Result<T, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(file)).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Every candidate named by an edge or a release membership.
pub(super) fn implied_candidates(
    weights: &EdgeWeights,
    releases: &ReleaseMembership,
) -> BTreeSet<CandidateId> {
    let mut candidates = BTreeSet::new();
    for (key, _) in weights {
        candidates.insert(key.first().clone());
        candidates.insert(key.second().clone());
    }
    for (candidate, _) in releases.memberships() {
        candidates.insert(candidate.clone());
    }
    candidates
}

/// Renders `summary` to `writer` as a two-line header followed by one
/// `candidate<TAB>hue` line per candidate.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use huegap_cli::cli::{ExecutionSummary, render_summary};
/// # use huegap_core::{CandidateColor, PairingStrategy};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     strategy: PairingStrategy::EvenlySpaced,
///     colors: vec![
///         CandidateColor::new("a".into(), 0.0),
///         CandidateColor::new("b".into(), 180.0),
///     ],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "candidates: 2\nstrategy: evenly-spaced\na\t0.000\nb\t180.000\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "candidates: {}", summary.colors.len())?;
    writeln!(writer, "strategy: {}", summary.strategy)?;
    for color in &summary.colors {
        writeln!(writer, "{}\t{:.3}", color.candidate(), color.hue())?;
    }
    Ok(())
}
