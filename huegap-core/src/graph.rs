//! Candidate graph construction from co-occurrence weights and release
//! membership.
//!
//! Adjacency is symmetric by construction: every edge, observed or synthetic,
//! is inserted in both directions.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::{
    edge::{CandidateId, EdgeKey},
    release::ReleaseMembership,
    weights::EdgeWeights,
};

/// Adjacency structure and merged weight table for one coloring run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateGraph {
    adjacency: BTreeMap<CandidateId, BTreeSet<CandidateId>>,
    weights: EdgeWeights,
}

impl CandidateGraph {
    /// Builds the graph restricted to `candidates`.
    ///
    /// Co-occurrence edges are copied first. Every pair of candidates sharing a
    /// release then receives an edge whose weight is set to
    /// `release_edge_cost`, overwriting any observed co-occurrence weight for
    /// that pair. Edges touching a candidate outside `candidates` are skipped,
    /// and a zero `release_edge_cost` adds no release edges at all.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use huegap_core::{CandidateGraph, CandidateId, EdgeKey, EdgeWeights, ReleaseMembership};
    ///
    /// let candidates: BTreeSet<CandidateId> = ["a", "b", "c"].into_iter().map(CandidateId::from).collect();
    /// let weights: EdgeWeights = [(EdgeKey::new("a".into(), "b".into())?, 5)].into_iter().collect();
    /// let releases: ReleaseMembership = [("b", "r1"), ("c", "r1")].into_iter().collect();
    ///
    /// let graph = CandidateGraph::build(&candidates, &weights, &releases, 10);
    /// assert_eq!(graph.neighbours(&"b".into()).count(), 2);
    /// assert_eq!(graph.weights().get(&"c".into(), &"b".into()), Some(10));
    /// # Ok::<(), huegap_core::ColoringError>(())
    /// ```
    #[instrument(
        name = "core.build_graph",
        skip_all,
        fields(
            candidates = candidates.len(),
            edges = edge_weights.len(),
            memberships = releases.len(),
        ),
    )]
    #[must_use]
    pub fn build(
        candidates: &BTreeSet<CandidateId>,
        edge_weights: &EdgeWeights,
        releases: &ReleaseMembership,
        release_edge_cost: u64,
    ) -> Self {
        let mut graph = Self::default();
        graph.add_co_occurrence_edges(candidates, edge_weights);
        graph.add_release_edges(candidates, releases, release_edge_cost);
        debug!(
            nodes = graph.adjacency.len(),
            edges = graph.weights.len(),
            "candidate graph built"
        );
        graph
    }

    fn add_co_occurrence_edges(
        &mut self,
        candidates: &BTreeSet<CandidateId>,
        edge_weights: &EdgeWeights,
    ) {
        for (key, weight) in edge_weights {
            if !candidates.contains(key.first()) || !candidates.contains(key.second()) {
                debug!(edge = %key, "skipping edge outside the candidate set");
                continue;
            }
            self.link(key);
            self.weights.insert(key.clone(), *weight);
        }
    }

    fn add_release_edges(
        &mut self,
        candidates: &BTreeSet<CandidateId>,
        releases: &ReleaseMembership,
        release_edge_cost: u64,
    ) {
        if release_edge_cost == 0 {
            debug!("release edge cost is zero, skipping release edges");
            return;
        }
        for (candidate, release) in releases.memberships() {
            if !candidates.contains(candidate) {
                continue;
            }
            for other in releases.members(release) {
                if other == candidate || !candidates.contains(other) {
                    continue;
                }
                let Ok(key) = EdgeKey::new(candidate.clone(), other.clone()) else {
                    continue;
                };
                self.link(&key);
                self.weights.insert(key, release_edge_cost);
            }
        }
    }

    fn link(&mut self, key: &EdgeKey) {
        self.adjacency
            .entry(key.first().clone())
            .or_default()
            .insert(key.second().clone());
        self.adjacency
            .entry(key.second().clone())
            .or_default()
            .insert(key.first().clone());
    }

    /// Returns whether `candidate` has at least one edge.
    #[must_use]
    pub fn contains(&self, candidate: &CandidateId) -> bool {
        self.adjacency.contains_key(candidate)
    }

    /// Iterates the neighbours of `candidate` in ascending order.
    pub fn neighbours(&self, candidate: &CandidateId) -> impl Iterator<Item = &CandidateId> {
        self.adjacency.get(candidate).into_iter().flatten()
    }

    /// Returns the merged weight table.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weights(&self) -> &EdgeWeights { &self.weights }

    /// Number of candidates with at least one edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Checks that `b` neighbours `a` exactly when `a` neighbours `b`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(node, neighbours)| {
            neighbours.iter().all(|neighbour| {
                self.adjacency
                    .get(neighbour)
                    .is_some_and(|back| back.contains(node))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::{fixture, rstest};

    fn key(a: &str, b: &str) -> EdgeKey {
        EdgeKey::new(a.into(), b.into()).expect("distinct endpoints")
    }

    fn ids(names: &[&str]) -> BTreeSet<CandidateId> {
        names.iter().copied().map(CandidateId::from).collect()
    }

    #[fixture]
    fn candidates() -> BTreeSet<CandidateId> {
        ids(&["a", "b", "c", "d"])
    }

    #[rstest]
    fn co_occurrence_edges_link_both_directions(candidates: BTreeSet<CandidateId>) {
        let weights: EdgeWeights = [(key("a", "b"), 5), (key("c", "b"), 3)]
            .into_iter()
            .collect();
        let graph = CandidateGraph::build(&candidates, &weights, &ReleaseMembership::new(), 10);

        let b: Vec<&str> = graph
            .neighbours(&"b".into())
            .map(CandidateId::as_str)
            .collect();
        assert_eq!(b, vec!["a", "c"]);
        assert_eq!(graph.neighbours(&"a".into()).count(), 1);
        assert!(!graph.contains(&"d".into()));
        assert!(graph.is_symmetric());
        assert_eq!(graph.weights().get(&"b".into(), &"c".into()), Some(3));
    }

    #[rstest]
    fn release_edges_are_synthesised_with_fixed_weight(candidates: BTreeSet<CandidateId>) {
        let releases: ReleaseMembership = [("x", "r0"), ("a", "r1"), ("d", "r1")]
            .into_iter()
            .collect();
        let graph = CandidateGraph::build(&candidates, &EdgeWeights::new(), &releases, 10);

        assert_eq!(graph.weights().get(&"a".into(), &"d".into()), Some(10));
        assert!(graph.is_symmetric());
        assert_eq!(graph.node_count(), 2);
    }

    #[rstest]
    fn release_edges_overwrite_observed_weights(candidates: BTreeSet<CandidateId>) {
        // Release weight replaces, rather than adds to, the observed count.
        let weights: EdgeWeights = [(key("d", "a"), 42)].into_iter().collect();
        let releases: ReleaseMembership = [("a", "r1"), ("d", "r1")].into_iter().collect();
        let graph = CandidateGraph::build(&candidates, &weights, &releases, 10);

        assert_eq!(graph.weights().get(&"a".into(), &"d".into()), Some(10));
        assert_eq!(graph.weights().len(), 1);
    }

    #[rstest]
    fn candidates_outside_the_set_are_skipped(candidates: BTreeSet<CandidateId>) {
        let weights: EdgeWeights = [(key("a", "ghost"), 9), (key("a", "b"), 1)]
            .into_iter()
            .collect();
        let releases: ReleaseMembership = [("ghost", "r1"), ("c", "r1"), ("phantom", "r2")]
            .into_iter()
            .collect();
        let graph = CandidateGraph::build(&candidates, &weights, &releases, 10);

        assert!(!graph.contains(&"ghost".into()));
        assert!(!graph.contains(&"c".into()));
        assert_eq!(graph.weights().len(), 1);
    }

    #[test]
    fn empty_inputs_build_an_empty_graph() {
        let graph = CandidateGraph::build(
            &BTreeSet::new(),
            &EdgeWeights::new(),
            &ReleaseMembership::new(),
            10,
        );
        assert_eq!(graph, CandidateGraph::default());
        assert!(graph.is_symmetric());
    }
}
