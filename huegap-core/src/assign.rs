//! Colour index assignment.
//!
//! Edges are visited heaviest first. Each endpoint that has no index yet is
//! placed in the middle of the widest gap left on the circular scale `[0, N)`
//! by its already-placed neighbours, so the strongest co-occurring pairs get
//! first pick of well separated positions.

use std::collections::{BTreeMap, BTreeSet, btree_map};

use tracing::{debug, instrument};

use crate::{edge::CandidateId, graph::CandidateGraph};

/// Real-valued position of every candidate on the circular scale `[0, N)`.
///
/// Positions are not hues; see [`crate::HueMapper`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorIndex {
    positions: BTreeMap<CandidateId, f64>,
    candidate_count: usize,
}

impl ColorIndex {
    /// Returns the position assigned to `candidate`.
    #[must_use]
    pub fn get(&self, candidate: &CandidateId) -> Option<f64> {
        self.positions.get(candidate).copied()
    }

    /// Size `N` of the circular scale, equal to the candidate set size.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidate_count(&self) -> usize { self.candidate_count }

    /// Number of candidates holding a position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether no candidate holds a position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates positions in ascending candidate order.
    pub fn iter(&self) -> btree_map::Iter<'_, CandidateId, f64> {
        self.positions.iter()
    }

    fn contains(&self, candidate: &CandidateId) -> bool {
        self.positions.contains_key(candidate)
    }
}

impl<'a> IntoIterator for &'a ColorIndex {
    type Item = (&'a CandidateId, &'a f64);
    type IntoIter = btree_map::Iter<'a, CandidateId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Assigns a position to every member of `candidates`.
///
/// Candidates without edges are placed at `0`. Equal edge weights are visited
/// in ascending key order and, within an edge, the smaller identifier is
/// placed first, so results are reproducible.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use huegap_core::{
///     CandidateGraph, CandidateId, EdgeKey, EdgeWeights, ReleaseMembership, assign_color_indices,
/// };
///
/// let candidates: BTreeSet<CandidateId> = ["a", "b"].into_iter().map(CandidateId::from).collect();
/// let weights: EdgeWeights = [(EdgeKey::new("a".into(), "b".into())?, 1)].into_iter().collect();
/// let graph = CandidateGraph::build(&candidates, &weights, &ReleaseMembership::new(), 10);
///
/// let index = assign_color_indices(&graph, &candidates);
/// assert_eq!(index.get(&"a".into()), Some(0.0));
/// assert_eq!(index.get(&"b".into()), Some(1.0));
/// # Ok::<(), huegap_core::ColoringError>(())
/// ```
#[instrument(
    name = "core.assign_indices",
    skip_all,
    fields(candidates = candidates.len(), edges = graph.weights().len()),
)]
#[must_use]
pub fn assign_color_indices(
    graph: &CandidateGraph,
    candidates: &BTreeSet<CandidateId>,
) -> ColorIndex {
    let mut index = ColorIndex {
        positions: BTreeMap::new(),
        candidate_count: candidates.len(),
    };
    if candidates.is_empty() {
        return index;
    }

    let mut isolated = 0_usize;
    for candidate in candidates {
        if !graph.contains(candidate) {
            index.positions.insert(candidate.clone(), 0.0);
            isolated += 1;
        }
    }

    for edge in graph.weights().by_priority() {
        for endpoint in [edge.key().first(), edge.key().second()] {
            if !index.contains(endpoint) {
                let position = select_color_index(graph, &index, endpoint);
                index.positions.insert(endpoint.clone(), position);
            }
        }
    }

    debug!(isolated, assigned = index.len(), "color indices assigned");
    index
}

fn select_color_index(graph: &CandidateGraph, index: &ColorIndex, candidate: &CandidateId) -> f64 {
    let neighbour_positions: Vec<f64> = graph
        .neighbours(candidate)
        .filter_map(|neighbour| index.get(neighbour))
        .collect();
    widest_gap_midpoint(neighbour_positions, index.candidate_count)
}

/// Returns the midpoint of the widest gap between `positions` on the circular
/// scale `[0, candidate_count)`, or `0` when `positions` is empty.
///
/// Linear gaps between consecutive sorted positions are scanned first; the
/// first widest one wins. The wrap-around gap from the largest position back
/// to the smallest replaces it only when strictly wider.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "Positions live on a real-valued circular scale."
)]
pub(crate) fn widest_gap_midpoint(mut positions: Vec<f64>, candidate_count: usize) -> f64 {
    positions.sort_unstable_by(f64::total_cmp);
    let (Some(&smallest), Some(&largest)) = (positions.first(), positions.last()) else {
        return 0.0;
    };
    let scale = candidate_count as f64;

    let mut widest = 0.0;
    let mut answer = -1.0;
    for pair in positions.windows(2) {
        if let &[low, high] = pair {
            let gap = high - low;
            if gap > widest {
                widest = gap;
                answer = (low + high) / 2.0;
            }
        }
    }

    if smallest + scale - largest > widest {
        answer = (largest + smallest + scale) / 2.0;
        if answer >= scale {
            answer -= scale;
        }
    }
    answer
}
