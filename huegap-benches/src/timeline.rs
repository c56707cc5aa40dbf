//! Seeded synthetic release timelines.
//!
//! Each candidate gains a fixed number of co-occurrence edges to random
//! partners, and a handful of releases group random candidates together. The
//! same configuration always yields the same timeline.

use std::collections::BTreeSet;

use huegap_core::{CandidateId, ColoringError, EdgeKey, EdgeWeights, ReleaseId, ReleaseMembership};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while generating a synthetic timeline.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// Fewer than two candidates were requested, so no pair exists.
    #[error("candidate count must be at least two, got {got}")]
    TooFewCandidates {
        /// Requested candidate count.
        got: usize,
    },
    /// The maximum edge weight was zero.
    #[error("maximum edge weight must be greater than zero")]
    ZeroWeight,
    /// A release was asked to hold more candidates than exist.
    #[error("release size ({release_size}) must not exceed candidate count ({candidate_count})")]
    ReleaseTooLarge {
        /// Candidates per release.
        release_size: usize,
        /// Candidates in the timeline.
        candidate_count: usize,
    },
    /// The core rejected a generated edge.
    #[error("generated edge was rejected: {0}")]
    Edge(#[from] ColoringError),
}

/// Shape of a synthetic timeline.
#[derive(Clone, Debug)]
pub struct TimelineConfig {
    /// Number of candidates.
    pub candidate_count: usize,
    /// Co-occurrence edges drawn per candidate.
    pub edges_per_candidate: usize,
    /// Largest weight a single draw contributes.
    pub max_weight: u64,
    /// Number of releases.
    pub release_count: usize,
    /// Candidates drawn into each release.
    pub release_size: usize,
    /// Random number generator seed.
    pub seed: u64,
}

impl TimelineConfig {
    /// A sparse timeline with four edges per candidate and small releases.
    #[must_use]
    pub const fn sparse(candidate_count: usize, seed: u64) -> Self {
        Self {
            candidate_count,
            edges_per_candidate: 4,
            max_weight: 20,
            release_count: 8,
            release_size: 3,
            seed,
        }
    }
}

/// Candidates, co-occurrence weights and release memberships for one run.
#[derive(Clone, Debug)]
pub struct SyntheticTimeline {
    /// Every generated candidate.
    pub candidates: BTreeSet<CandidateId>,
    /// Accumulated co-occurrence weights.
    pub weights: EdgeWeights,
    /// Release memberships.
    pub releases: ReleaseMembership,
}

impl SyntheticTimeline {
    /// Generates a timeline from `config`.
    ///
    /// # Errors
    /// Returns [`TimelineError`] when the configuration is invalid.
    pub fn generate(config: &TimelineConfig) -> Result<Self, TimelineError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let ids: Vec<CandidateId> = (0..config.candidate_count)
            .map(|index| CandidateId::new(format!("c{index:05}")))
            .collect();

        let mut weights = EdgeWeights::new();
        for (index, id) in ids.iter().enumerate() {
            for _ in 0..config.edges_per_candidate {
                let Some(partner) = random_partner(&mut rng, &ids, index) else {
                    continue;
                };
                let key = EdgeKey::new(id.clone(), partner.clone())?;
                weights.accumulate(key, rng.gen_range(1..=config.max_weight));
            }
        }

        let mut releases = ReleaseMembership::new();
        for release in 0..config.release_count {
            let release_id = ReleaseId::new(format!("r{release}"));
            let picked = rand::seq::index::sample(&mut rng, ids.len(), config.release_size);
            for slot in picked {
                if let Some(candidate) = ids.get(slot) {
                    releases.insert(candidate.clone(), release_id.clone());
                }
            }
        }

        Ok(Self {
            candidates: ids.into_iter().collect(),
            weights,
            releases,
        })
    }
}

const fn validate(config: &TimelineConfig) -> Result<(), TimelineError> {
    if config.candidate_count < 2 {
        return Err(TimelineError::TooFewCandidates {
            got: config.candidate_count,
        });
    }
    if config.max_weight == 0 {
        return Err(TimelineError::ZeroWeight);
    }
    if config.release_size > config.candidate_count {
        return Err(TimelineError::ReleaseTooLarge {
            release_size: config.release_size,
            candidate_count: config.candidate_count,
        });
    }
    Ok(())
}

/// Draws a partner distinct from `ids[index]`. Needs at least two ids.
fn random_partner<'a>(
    rng: &mut SmallRng,
    ids: &'a [CandidateId],
    index: usize,
) -> Option<&'a CandidateId> {
    let draw = rng.gen_range(0..ids.len().saturating_sub(1));
    let slot = if draw >= index { draw + 1 } else { draw };
    ids.get(slot)
}
