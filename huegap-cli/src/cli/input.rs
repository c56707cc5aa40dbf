//! Tab-separated input parsing for the `color` command.
//!
//! Every format shares the same framing: UTF-8 lines, blank lines and lines
//! starting with `#` ignored, fields separated by a single tab and trimmed.

use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::num::ParseIntError;

use huegap_core::{CandidateId, ColoringError, EdgeKey, EdgeWeights, ReleaseMembership};
use thiserror::Error;
use tracing::debug;

/// Errors raised while decoding an input file. Line numbers are 1-based.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the failure happened.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A record did not have the expected number of fields.
    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A field was empty after trimming.
    #[error("line {line}: field {column} is empty")]
    EmptyField {
        /// Offending line.
        line: usize,
        /// 1-based field position.
        column: usize,
    },
    /// An edge weight was not a non-negative integer.
    #[error("line {line}: invalid weight `{raw}`: {source}")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Raw weight text.
        raw: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// An edge was rejected by the core, for example a self loop.
    #[error("line {line}: {source}")]
    Edge {
        /// Offending line.
        line: usize,
        /// Core validation failure.
        #[source]
        source: ColoringError,
    },
}

impl InputError {
    /// Core error wrapped by this failure, if any.
    #[must_use]
    pub const fn coloring_error(&self) -> Option<&ColoringError> {
        match self {
            Self::Edge { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn read_records<R, F>(reader: R, expected: usize, mut visit: F) -> Result<(), InputError>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<(), InputError>,
{
    for (offset, raw) in reader.lines().enumerate() {
        let line = offset + 1;
        let text = raw.map_err(|source| InputError::Read { line, source })?;
        let content = text.trim_start();
        if content.trim_end().is_empty() || content.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = text.split('\t').map(str::trim).collect();
        if fields.len() != expected {
            return Err(InputError::FieldCount {
                line,
                expected,
                found: fields.len(),
            });
        }
        if let Some(position) = fields.iter().position(|field| field.is_empty()) {
            return Err(InputError::EmptyField {
                line,
                column: position + 1,
            });
        }
        visit(line, &fields)?;
    }
    Ok(())
}

/// Parses `candidate<TAB>candidate<TAB>weight` records.
///
/// Repeated pairs accumulate, in either order. Zero weights are ignored.
///
/// # Errors
/// Returns [`InputError`] for malformed records, unparsable weights and self
/// loops.
///
/// # Examples
/// ```
/// use huegap_cli::cli::parse_edges;
///
/// let weights = parse_edges("# pairs\na\tb\t2\nb\ta\t3\n".as_bytes())?;
/// assert_eq!(weights.get(&"a".into(), &"b".into()), Some(5));
/// # Ok::<(), huegap_cli::cli::InputError>(())
/// ```
pub fn parse_edges<R: BufRead>(reader: R) -> Result<EdgeWeights, InputError> {
    let mut weights = EdgeWeights::new();
    read_records(reader, 3, |line, fields| {
        let &[a, b, raw_weight] = fields else {
            return Err(InputError::FieldCount {
                line,
                expected: 3,
                found: fields.len(),
            });
        };
        let weight: u64 = raw_weight
            .parse()
            .map_err(|source| InputError::InvalidWeight {
                line,
                raw: raw_weight.to_owned(),
                source,
            })?;
        let key = EdgeKey::new(a.into(), b.into())
            .map_err(|source| InputError::Edge { line, source })?;
        if weight == 0 {
            debug!(line, edge = %key, "skipping zero weight edge");
            return Ok(());
        }
        weights.accumulate(key, weight);
        Ok(())
    })?;
    Ok(weights)
}

/// Parses one candidate identifier per line.
///
/// # Errors
/// Returns [`InputError`] when a line holds more than one field.
pub fn parse_candidates<R: BufRead>(reader: R) -> Result<BTreeSet<CandidateId>, InputError> {
    let mut candidates = BTreeSet::new();
    read_records(reader, 1, |_, fields| {
        candidates.extend(fields.iter().copied().map(CandidateId::from));
        Ok(())
    })?;
    Ok(candidates)
}

/// Parses `candidate<TAB>release` records.
///
/// # Errors
/// Returns [`InputError`] for malformed records.
pub fn parse_releases<R: BufRead>(reader: R) -> Result<ReleaseMembership, InputError> {
    let mut releases = ReleaseMembership::new();
    read_records(reader, 2, |line, fields| {
        let &[candidate, release] = fields else {
            return Err(InputError::FieldCount {
                line,
                expected: 2,
                found: fields.len(),
            });
        };
        if !releases.insert(candidate.into(), release.into()) {
            debug!(line, candidate, release, "duplicate release membership");
        }
        Ok(())
    })?;
    Ok(releases)
}
