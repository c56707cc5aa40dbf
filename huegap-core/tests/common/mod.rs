use std::collections::BTreeSet;

use huegap_core::{CandidateId, EdgeKey, EdgeWeights, ReleaseMembership};

/// Candidate set, co-occurrence weights and release membership for one run.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub candidates: BTreeSet<CandidateId>,
    pub weights: EdgeWeights,
    pub releases: ReleaseMembership,
}

impl Timeline {
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            candidates: names.iter().copied().map(CandidateId::from).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn edge(mut self, a: &str, b: &str, weight: u64) -> Self {
        let key = EdgeKey::new(a.into(), b.into()).expect("test edges join distinct candidates");
        self.weights.insert(key, weight);
        self
    }

    #[must_use]
    pub fn release(mut self, candidate: &str, release: &str) -> Self {
        self.releases.insert(candidate.into(), release.into());
        self
    }
}

/// `A-B:5, B-C:3` over `{A, B, C}`.
#[must_use]
pub fn chain() -> Timeline {
    Timeline::new(&["A", "B", "C"])
        .edge("A", "B", 5)
        .edge("B", "C", 3)
}

/// Hues as `(candidate, hue)` pairs in outcome order.
#[must_use]
pub fn hue_pairs(colors: &[huegap_core::CandidateColor]) -> Vec<(String, f64)> {
    colors
        .iter()
        .map(|color| (color.candidate().to_string(), color.hue()))
        .collect()
}
