//! Coloring orchestration.
//!
//! Provides the [`ColoringEngine`] entry point. Each call builds its own graph
//! and index; the engine only holds configuration.

use std::collections::BTreeSet;

use tracing::{Span, field, info, instrument, warn};

use crate::{
    assign::{ColorIndex, assign_color_indices},
    edge::{CandidateColor, CandidateId},
    graph::CandidateGraph,
    hue::{ColorDeficiency, HueMapper, HueShifts, PairingStrategy},
    release::ReleaseMembership,
    sink::{CandidateSink, save_colors},
    weights::EdgeWeights,
};

/// Result of one coloring run.
#[derive(Clone, Debug, PartialEq)]
pub struct ColoringOutcome {
    index: ColorIndex,
    strategy: PairingStrategy,
    colors: Vec<CandidateColor>,
}

impl ColoringOutcome {
    /// Positions assigned on the circular scale.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(&self) -> &ColorIndex { &self.index }

    /// Pairing strategy selected for the candidate count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> PairingStrategy { self.strategy }

    /// One colour per candidate. Order follows the pairing strategy and is not
    /// otherwise guaranteed.
    #[must_use]
    #[rustfmt::skip]
    pub fn colors(&self) -> &[CandidateColor] { &self.colors }

    /// Consumes the outcome, returning the colours sorted by hue then
    /// identifier.
    #[must_use]
    pub fn into_sorted_colors(mut self) -> Vec<CandidateColor> {
        self.colors.sort_unstable();
        self.colors
    }
}

/// Entry point for coloring a candidate set.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use huegap_core::{CandidateId, ColoringEngineBuilder, EdgeKey, EdgeWeights, ReleaseMembership};
///
/// let engine = ColoringEngineBuilder::new().build()?;
/// let candidates: BTreeSet<CandidateId> = ["a", "b", "c"].into_iter().map(CandidateId::from).collect();
/// let weights: EdgeWeights = [
///     (EdgeKey::new("a".into(), "b".into())?, 5),
///     (EdgeKey::new("b".into(), "c".into())?, 3),
/// ]
/// .into_iter()
/// .collect();
///
/// let outcome = engine.color(&candidates, &weights, &ReleaseMembership::new());
/// let hues: Vec<(&str, f64)> = outcome
///     .colors()
///     .iter()
///     .map(|c| (c.candidate().as_str(), c.hue()))
///     .collect();
/// assert_eq!(hues, vec![("a", 0.0), ("c", 120.0), ("b", 240.0)]);
/// # Ok::<(), huegap_core::ColoringError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ColoringEngine {
    proportional_threshold: usize,
    release_edge_cost: u64,
    color_deficiency: Option<ColorDeficiency>,
    hue_shifts: HueShifts,
}

impl ColoringEngine {
    pub(crate) const fn new(
        proportional_threshold: usize,
        release_edge_cost: u64,
        color_deficiency: Option<ColorDeficiency>,
        hue_shifts: HueShifts,
    ) -> Self {
        Self {
            proportional_threshold,
            release_edge_cost,
            color_deficiency,
            hue_shifts,
        }
    }

    /// Returns the candidate count above which hues are mapped proportionally.
    #[must_use]
    #[rustfmt::skip]
    pub const fn proportional_threshold(&self) -> usize { self.proportional_threshold }

    /// Returns the weight given to release edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn release_edge_cost(&self) -> u64 { self.release_edge_cost }

    /// Returns the configured colour-deficiency mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn color_deficiency(&self) -> Option<ColorDeficiency> { self.color_deficiency }

    /// Returns the hue shift table.
    #[must_use]
    #[rustfmt::skip]
    pub const fn hue_shifts(&self) -> HueShifts { self.hue_shifts }

    /// Colours every member of `candidates`.
    ///
    /// Builds the candidate graph from `edge_weights` and `releases`, assigns
    /// circular positions heaviest edge first, then converts positions to hues
    /// with the strategy chosen for the candidate count. An empty candidate set
    /// yields an empty outcome.
    #[instrument(
        name = "core.color",
        skip_all,
        fields(
            candidates = candidates.len(),
            edges = edge_weights.len(),
            strategy = field::Empty,
            deficiency = self.color_deficiency.map_or("none", ColorDeficiency::as_str),
        ),
    )]
    #[must_use]
    pub fn color(
        &self,
        candidates: &BTreeSet<CandidateId>,
        edge_weights: &EdgeWeights,
        releases: &ReleaseMembership,
    ) -> ColoringOutcome {
        let strategy = PairingStrategy::for_count(candidates.len(), self.proportional_threshold);
        Span::current().record("strategy", strategy.as_str());

        if candidates.is_empty() {
            warn!("candidate set is empty, nothing to color");
            return ColoringOutcome {
                index: ColorIndex::default(),
                strategy,
                colors: Vec::new(),
            };
        }

        let graph = CandidateGraph::build(candidates, edge_weights, releases, self.release_edge_cost);
        let index = assign_color_indices(&graph, candidates);
        let colors = self
            .mapper(index.candidate_count(), self.color_deficiency)
            .pair(&index, strategy);
        info!(colored = colors.len(), "coloring completed");

        ColoringOutcome {
            index,
            strategy,
            colors,
        }
    }

    /// Runs [`Self::color`] and registers every colour with `sink`.
    ///
    /// # Examples
    /// ```
    /// use std::collections::{BTreeMap, BTreeSet};
    ///
    /// use huegap_core::{CandidateId, ColoringEngineBuilder, EdgeWeights, ReleaseMembership};
    ///
    /// let engine = ColoringEngineBuilder::new().build()?;
    /// let candidates: BTreeSet<CandidateId> = ["x", "y"].into_iter().map(CandidateId::from).collect();
    /// let releases: ReleaseMembership = [("x", "r1"), ("y", "r1")].into_iter().collect();
    ///
    /// let mut store: BTreeMap<CandidateId, f64> = BTreeMap::new();
    /// let outcome = engine.color_into(&candidates, &EdgeWeights::new(), &releases, &mut store);
    /// assert_eq!(outcome.colors().len(), store.len());
    /// assert_eq!(store.get(&"x".into()), Some(&0.0));
    /// assert_eq!(store.get(&"y".into()), Some(&180.0));
    /// # Ok::<(), huegap_core::ColoringError>(())
    /// ```
    #[must_use]
    pub fn color_into<S: CandidateSink + ?Sized>(
        &self,
        candidates: &BTreeSet<CandidateId>,
        edge_weights: &EdgeWeights,
        releases: &ReleaseMembership,
        sink: &mut S,
    ) -> ColoringOutcome {
        let outcome = self.color(candidates, edge_weights, releases);
        save_colors(outcome.colors(), sink);
        outcome
    }

    /// Re-maps an existing index under another colour-deficiency mode.
    ///
    /// The graph and positions are reused as-is; only hue mapping runs again,
    /// with the strategy implied by the index's candidate count.
    #[instrument(
        name = "core.repaint",
        skip_all,
        fields(
            candidates = index.candidate_count(),
            deficiency = deficiency.map_or("none", ColorDeficiency::as_str),
        ),
    )]
    #[must_use]
    pub fn repaint(
        &self,
        index: &ColorIndex,
        deficiency: Option<ColorDeficiency>,
    ) -> Vec<CandidateColor> {
        let strategy =
            PairingStrategy::for_count(index.candidate_count(), self.proportional_threshold);
        self.mapper(index.candidate_count(), deficiency)
            .pair(index, strategy)
    }

    const fn mapper(&self, candidate_count: usize, deficiency: Option<ColorDeficiency>) -> HueMapper {
        HueMapper::new(candidate_count, deficiency, self.hue_shifts)
    }
}
