//! Edge model: candidate identifiers, structural edge keys, the legacy string
//! key codec, and the coloured-candidate pairing.
//!
//! Edge keys are normalised so that `first < second`. Looking up the weight of
//! `(a, b)` and `(b, a)` therefore hits the same entry, and release edges
//! overwrite co-occurrence weights no matter which direction either source
//! named the pair in.

use std::{cmp::Ordering, fmt, str::FromStr, sync::Arc};

use crate::error::{ColoringError, Result};

/// Separator used by the legacy string edge key codec.
///
/// Identifiers must not contain this character.
pub const EDGE_KEY_SEPARATOR: char = '\n';

macro_rules! define_identifier {
    ($(#[$meta:meta])* $Name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $Name(Arc<str>);

        impl $Name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $Name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $Name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_identifier! {
    /// Opaque identifier of a candidate that needs a colour.
    ///
    /// # Examples
    /// ```
    /// use huegap_core::CandidateId;
    ///
    /// let id = CandidateId::new("release-42");
    /// assert_eq!(id.as_str(), "release-42");
    /// ```
    CandidateId
}

define_identifier! {
    /// Opaque identifier of a release group candidates can belong to.
    ReleaseId
}

/// Joins two identifiers into a legacy string edge key.
///
/// The key is order-sensitive: `make_edge_key(a, b) != make_edge_key(b, a)`.
/// Prefer [`EdgeKey`], which is normalised.
///
/// # Examples
/// ```
/// use huegap_core::{make_edge_key, parse_edge_key};
///
/// let key = make_edge_key("a", "b");
/// assert_eq!(key, "a\nb");
/// let (first, second) = parse_edge_key(&key)?;
/// assert_eq!((first.as_str(), second.as_str()), ("a", "b"));
/// # Ok::<(), huegap_core::ColoringError>(())
/// ```
#[must_use]
pub fn make_edge_key(first: &str, second: &str) -> String {
    let mut key = String::with_capacity(first.len() + second.len() + 1);
    key.push_str(first);
    key.push(EDGE_KEY_SEPARATOR);
    key.push_str(second);
    key
}

/// Splits a legacy string edge key back into its two identifiers, preserving
/// the order they were joined in.
///
/// # Errors
/// Returns [`ColoringError::MissingSeparator`] when the separator is absent,
/// [`ColoringError::ExtraSeparator`] when it occurs more than once, and
/// [`ColoringError::EmptyCandidate`] when either side is empty.
pub fn parse_edge_key(key: &str) -> Result<(CandidateId, CandidateId)> {
    let mut parts = key.split(EDGE_KEY_SEPARATOR);
    let (Some(first), Some(second)) = (parts.next(), parts.next()) else {
        return Err(ColoringError::MissingSeparator {
            key: Arc::from(key),
        });
    };
    if parts.next().is_some() {
        return Err(ColoringError::ExtraSeparator {
            key: Arc::from(key),
        });
    }
    if first.is_empty() || second.is_empty() {
        return Err(ColoringError::EmptyCandidate {
            key: Arc::from(key),
        });
    }
    Ok((CandidateId::from(first), CandidateId::from(second)))
}

/// Unordered pair of distinct candidates, stored with `first < second`.
///
/// # Examples
/// ```
/// use huegap_core::{CandidateId, EdgeKey};
///
/// let forward = EdgeKey::new("b".into(), "a".into())?;
/// let backward = EdgeKey::new("a".into(), "b".into())?;
/// assert_eq!(forward, backward);
/// assert_eq!(forward.first(), &CandidateId::from("a"));
/// # Ok::<(), huegap_core::ColoringError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    first: CandidateId,
    second: CandidateId,
}

impl EdgeKey {
    /// Builds a normalised key for the pair.
    ///
    /// # Errors
    /// Returns [`ColoringError::SelfLoop`] when both identifiers are equal.
    pub fn new(a: CandidateId, b: CandidateId) -> Result<Self> {
        match a.cmp(&b) {
            Ordering::Less => Ok(Self {
                first: a,
                second: b,
            }),
            Ordering::Greater => Ok(Self {
                first: b,
                second: a,
            }),
            Ordering::Equal => Err(ColoringError::SelfLoop {
                candidate: a.0,
            }),
        }
    }

    /// Returns the lexicographically smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first(&self) -> &CandidateId { &self.first }

    /// Returns the lexicographically larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second(&self) -> &CandidateId { &self.second }

    /// Returns whether `candidate` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, candidate: &CandidateId) -> bool {
        &self.first == candidate || &self.second == candidate
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{EDGE_KEY_SEPARATOR}{}", self.first, self.second)
    }
}

impl FromStr for EdgeKey {
    type Err = ColoringError;

    fn from_str(key: &str) -> Result<Self> {
        let (a, b) = parse_edge_key(key)?;
        Self::new(a, b)
    }
}

/// Weighted undirected edge between two candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateEdge {
    key: EdgeKey,
    occurrences: u64,
}

impl CandidateEdge {
    /// Creates an edge from a key and its co-occurrence weight.
    #[must_use]
    pub const fn new(key: EdgeKey, occurrences: u64) -> Self {
        Self { key, occurrences }
    }

    /// Returns the normalised endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn key(&self) -> &EdgeKey { &self.key }

    /// Returns how often the pair co-occurs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn occurrences(&self) -> u64 { self.occurrences }
}

/// Processing priority: heavier edges first, ties broken by ascending key.
impl Ord for CandidateEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .occurrences
            .cmp(&self.occurrences)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for CandidateEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A candidate paired with a hue (or, before hue mapping, a colour index).
///
/// Ordered by hue ascending, then identifier ascending.
///
/// # Examples
/// ```
/// use huegap_core::CandidateColor;
///
/// let mut colors = vec![
///     CandidateColor::new("b".into(), 10.0),
///     CandidateColor::new("a".into(), 10.0),
///     CandidateColor::new("c".into(), 5.0),
/// ];
/// colors.sort();
/// let order: Vec<_> = colors.iter().map(|c| c.candidate().as_str()).collect();
/// assert_eq!(order, ["c", "a", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct CandidateColor {
    candidate: CandidateId,
    hue: f64,
}

impl CandidateColor {
    /// Pairs `candidate` with `hue`.
    #[must_use]
    pub const fn new(candidate: CandidateId, hue: f64) -> Self {
        Self { candidate, hue }
    }

    /// Returns the coloured candidate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidate(&self) -> &CandidateId { &self.candidate }

    /// Returns the hue in degrees.
    #[must_use]
    #[rustfmt::skip]
    pub const fn hue(&self) -> f64 { self.hue }

    /// Compares by hue, then by identifier.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.hue
            .total_cmp(&other.hue)
            .then_with(|| self.candidate.cmp(&other.candidate))
    }
}

impl PartialEq for CandidateColor {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for CandidateColor {}

impl Ord for CandidateColor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for CandidateColor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::ColoringErrorCode;

    fn key(a: &str, b: &str) -> EdgeKey {
        EdgeKey::new(a.into(), b.into()).expect("distinct endpoints")
    }

    #[rstest]
    #[case::plain("a", "b")]
    #[case::spaces("canary release", "stable")]
    #[case::unicode("候补", "β")]
    fn string_keys_round_trip_in_insertion_order(#[case] first: &str, #[case] second: &str) {
        let encoded = make_edge_key(first, second);
        let (a, b) = parse_edge_key(&encoded).expect("key must decode");
        assert_eq!(a.as_str(), first);
        assert_eq!(b.as_str(), second);
    }

    #[test]
    fn string_keys_are_order_sensitive() {
        assert_ne!(make_edge_key("a", "b"), make_edge_key("b", "a"));
    }

    #[rstest]
    #[case::no_separator("ab", ColoringErrorCode::MissingSeparator)]
    #[case::empty("", ColoringErrorCode::MissingSeparator)]
    #[case::embedded("a\nb\nc", ColoringErrorCode::ExtraSeparator)]
    #[case::empty_left("\nb", ColoringErrorCode::EmptyCandidate)]
    #[case::empty_right("a\n", ColoringErrorCode::EmptyCandidate)]
    fn malformed_string_keys_fail_fast(#[case] raw: &str, #[case] expected: ColoringErrorCode) {
        let err = parse_edge_key(raw).expect_err("malformed key must fail");
        assert_eq!(err.code(), expected);
    }

    #[test]
    fn edge_key_normalises_order() {
        let k = key("zeta", "alpha");
        assert_eq!(k.first().as_str(), "alpha");
        assert_eq!(k.second().as_str(), "zeta");
        assert_eq!(k, key("alpha", "zeta"));
        assert!(k.contains(&"zeta".into()));
        assert!(!k.contains(&"beta".into()));
    }

    #[test]
    fn edge_key_rejects_self_loops() {
        let err = EdgeKey::new("a".into(), "a".into()).expect_err("self loop must fail");
        assert!(matches!(err, ColoringError::SelfLoop { ref candidate } if &**candidate == "a"));
    }

    #[test]
    fn edge_key_parses_from_either_direction() {
        let forward: EdgeKey = "b\na".parse().expect("key must parse");
        assert_eq!(forward, key("a", "b"));
        assert_eq!(forward.to_string(), "a\nb");
    }

    #[test]
    fn candidate_edges_order_heaviest_first_then_by_key() {
        let mut edges = vec![
            CandidateEdge::new(key("c", "d"), 3),
            CandidateEdge::new(key("a", "b"), 3),
            CandidateEdge::new(key("x", "y"), 9),
        ];
        edges.sort();
        let order: Vec<u64> = edges.iter().map(CandidateEdge::occurrences).collect();
        assert_eq!(order, vec![9, 3, 3]);
        assert_eq!(edges.get(1).map(|e| e.key().first().as_str()), Some("a"));
    }

    #[test]
    fn candidate_colors_tie_break_on_identifier() {
        let a = CandidateColor::new("a".into(), 1.5);
        let b = CandidateColor::new("b".into(), 1.5);
        let c = CandidateColor::new("c".into(), 0.5);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(c.compare(&a), Ordering::Less);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }
}
