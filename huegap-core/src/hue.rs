//! Conversion of colour indices into hues.
//!
//! Two pairing strategies exist. Small candidate sets are ranked by index and
//! given evenly spaced hues; large sets map each index straight onto the hue
//! wheel.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    assign::ColorIndex,
    edge::CandidateColor,
    error::{ColoringError, Result},
};

/// Candidate count above which hues are mapped proportionally.
pub const DEFAULT_PROPORTIONAL_THRESHOLD: usize = 75;

const FULL_TURN: f64 = 360.0;
const DEFICIENT_ARC: f64 = 120.0;

/// Colour-vision deficiency the palette is adapted for.
///
/// # Examples
/// ```
/// use huegap_core::ColorDeficiency;
///
/// let mode: ColorDeficiency = "Deuteranopia".parse()?;
/// assert_eq!(mode, ColorDeficiency::Deuteranopia);
/// assert!("achromatopsia".parse::<ColorDeficiency>().is_err());
/// # Ok::<(), huegap_core::ColoringError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorDeficiency {
    /// Reduced red sensitivity.
    Protanopia,
    /// Reduced green sensitivity.
    Deuteranopia,
    /// Reduced blue sensitivity.
    Tritanopia,
}

impl ColorDeficiency {
    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for ColorDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorDeficiency {
    type Err = ColoringError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "protanopia" => Ok(Self::Protanopia),
            "deuteranopia" => Ok(Self::Deuteranopia),
            "tritanopia" => Ok(Self::Tritanopia),
            _ => Err(ColoringError::UnknownColorDeficiency {
                provided: Arc::from(raw),
            }),
        }
    }
}

/// Rotation, in degrees, applied to the compressed 120° arc for each
/// colour-deficiency mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueShifts {
    /// Shift used for [`ColorDeficiency::Protanopia`].
    pub protanopia: f64,
    /// Shift used for [`ColorDeficiency::Deuteranopia`].
    pub deuteranopia: f64,
    /// Shift used for [`ColorDeficiency::Tritanopia`].
    pub tritanopia: f64,
}

impl Default for HueShifts {
    fn default() -> Self {
        Self {
            protanopia: 120.0,
            deuteranopia: 240.0,
            tritanopia: 0.0,
        }
    }
}

impl HueShifts {
    /// Returns the shift for `mode`.
    #[must_use]
    pub const fn shift(&self, mode: ColorDeficiency) -> f64 {
        match mode {
            ColorDeficiency::Protanopia => self.protanopia,
            ColorDeficiency::Deuteranopia => self.deuteranopia,
            ColorDeficiency::Tritanopia => self.tritanopia,
        }
    }

    /// Checks every shift is finite.
    ///
    /// # Errors
    /// Returns [`ColoringError::NonFiniteHueShift`] naming the first offending
    /// mode.
    pub fn validate(&self) -> Result<()> {
        for mode in [
            ColorDeficiency::Protanopia,
            ColorDeficiency::Deuteranopia,
            ColorDeficiency::Tritanopia,
        ] {
            let shift = self.shift(mode);
            if !shift.is_finite() {
                return Err(ColoringError::NonFiniteHueShift {
                    mode: mode.as_str(),
                    shift,
                });
            }
        }
        Ok(())
    }
}

/// How ranked candidates are paired with hues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairingStrategy {
    /// Rank candidates by index and hand out `N` evenly spaced hues in rank
    /// order. Only relative order of the indices survives.
    EvenlySpaced,
    /// Map each index straight through [`HueMapper::hue_for_index`].
    Proportional,
}

impl PairingStrategy {
    /// Picks [`Self::Proportional`] when `candidate_count` exceeds `threshold`.
    ///
    /// # Examples
    /// ```
    /// use huegap_core::PairingStrategy;
    ///
    /// assert_eq!(PairingStrategy::for_count(75, 75), PairingStrategy::EvenlySpaced);
    /// assert_eq!(PairingStrategy::for_count(76, 75), PairingStrategy::Proportional);
    /// ```
    #[must_use]
    pub const fn for_count(candidate_count: usize, threshold: usize) -> Self {
        if candidate_count > threshold {
            Self::Proportional
        } else {
            Self::EvenlySpaced
        }
    }

    /// Returns the kebab-case name of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EvenlySpaced => "evenly-spaced",
            Self::Proportional => "proportional",
        }
    }
}

impl fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps positions on `[0, N)` to hues in `[0, 360)`.
///
/// # Examples
/// ```
/// use huegap_core::{ColorDeficiency, HueMapper, HueShifts};
///
/// let plain = HueMapper::new(4, None, HueShifts::default());
/// assert_eq!(plain.hue_for_index(1.0), 90.0);
///
/// let protan = HueMapper::new(4, Some(ColorDeficiency::Protanopia), HueShifts::default());
/// assert_eq!(protan.hue_for_index(1.0), 150.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueMapper {
    candidate_count: usize,
    deficiency: Option<ColorDeficiency>,
    shifts: HueShifts,
}

impl HueMapper {
    /// Creates a mapper for a scale of `candidate_count` positions.
    #[must_use]
    pub const fn new(
        candidate_count: usize,
        deficiency: Option<ColorDeficiency>,
        shifts: HueShifts,
    ) -> Self {
        Self {
            candidate_count,
            deficiency,
            shifts,
        }
    }

    /// Returns the hue for position `index`.
    ///
    /// Without a deficiency mode this is `360 * index / N`. With one, the
    /// position is compressed onto a 120° arc and rotated by the mode's shift,
    /// modulo 360. An empty scale maps everything to `0`.
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "Hue mapping scales positions onto degrees."
    )]
    #[must_use]
    pub fn hue_for_index(&self, index: f64) -> f64 {
        if self.candidate_count == 0 {
            return 0.0;
        }
        let count = self.candidate_count as f64;
        let hue = match self.deficiency {
            None => FULL_TURN * index / count,
            Some(mode) => DEFICIENT_ARC * index / count + self.shifts.shift(mode),
        };
        normalise_hue(hue)
    }

    /// Returns the `N` evenly spaced hues for ranks `0..N`.
    #[expect(clippy::cast_precision_loss, reason = "Ranks are small counts.")]
    #[must_use]
    pub fn assignable_hues(&self) -> Vec<f64> {
        (0..self.candidate_count)
            .map(|rank| self.hue_for_index(rank as f64))
            .collect()
    }

    /// Pairs every indexed candidate with a hue according to `strategy`.
    ///
    /// [`PairingStrategy::EvenlySpaced`] returns colours in rank order;
    /// [`PairingStrategy::Proportional`] returns them in candidate order.
    #[must_use]
    pub fn pair(&self, index: &ColorIndex, strategy: PairingStrategy) -> Vec<CandidateColor> {
        if self.candidate_count == 0 {
            return Vec::new();
        }
        match strategy {
            PairingStrategy::EvenlySpaced => self.pair_evenly_spaced(index),
            PairingStrategy::Proportional => self.pair_proportional(index),
        }
    }

    fn pair_evenly_spaced(&self, index: &ColorIndex) -> Vec<CandidateColor> {
        let mut ranked: Vec<CandidateColor> = index
            .iter()
            .map(|(candidate, position)| CandidateColor::new(candidate.clone(), *position))
            .collect();
        ranked.sort_unstable();
        ranked
            .into_iter()
            .zip(self.assignable_hues())
            .map(|(ranked_candidate, hue)| {
                CandidateColor::new(ranked_candidate.candidate().clone(), hue)
            })
            .collect()
    }

    fn pair_proportional(&self, index: &ColorIndex) -> Vec<CandidateColor> {
        index
            .iter()
            .map(|(candidate, position)| {
                CandidateColor::new(candidate.clone(), self.hue_for_index(*position))
            })
            .collect()
    }
}

/// Folds `hue` into `[0, 360)`.
fn normalise_hue(hue: f64) -> f64 {
    let folded = hue.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if folded >= FULL_TURN { 0.0 } else { folded }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use rstest::rstest;

    use crate::{
        assign::assign_color_indices,
        edge::{CandidateId, EdgeKey},
        graph::CandidateGraph,
        release::ReleaseMembership,
        weights::EdgeWeights,
    };

    #[expect(clippy::float_arithmetic, reason = "Tolerance check on hues.")]
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn chain_index() -> ColorIndex {
        let candidates: BTreeSet<CandidateId> =
            ["a", "b", "c"].into_iter().map(CandidateId::from).collect();
        let weights: EdgeWeights = [
            (EdgeKey::new("a".into(), "b".into()).expect("distinct"), 5),
            (EdgeKey::new("b".into(), "c".into()).expect("distinct"), 3),
        ]
        .into_iter()
        .collect();
        let graph = CandidateGraph::build(&candidates, &weights, &ReleaseMembership::new(), 10);
        assign_color_indices(&graph, &candidates)
    }

    #[rstest]
    #[case("protanopia", ColorDeficiency::Protanopia)]
    #[case("DEUTERANOPIA", ColorDeficiency::Deuteranopia)]
    #[case(" tritanopia ", ColorDeficiency::Tritanopia)]
    fn deficiency_parses_known_modes(#[case] raw: &str, #[case] expected: ColorDeficiency) {
        assert_eq!(raw.parse::<ColorDeficiency>().expect("mode must parse"), expected);
    }

    #[test]
    fn deficiency_rejects_unknown_modes() {
        let err = "monochrome"
            .parse::<ColorDeficiency>()
            .expect_err("unknown mode must fail");
        assert!(matches!(
            err,
            ColoringError::UnknownColorDeficiency { ref provided } if &**provided == "monochrome"
        ));
    }

    #[rstest]
    #[case::plain(None, 2.0, 180.0)]
    #[case::protanopia(Some(ColorDeficiency::Protanopia), 2.0, 180.0)]
    #[case::deuteranopia(Some(ColorDeficiency::Deuteranopia), 3.0, 330.0)]
    #[case::tritanopia(Some(ColorDeficiency::Tritanopia), 3.0, 90.0)]
    fn hue_for_index_applies_mode(
        #[case] deficiency: Option<ColorDeficiency>,
        #[case] index: f64,
        #[case] expected: f64,
    ) {
        let mapper = HueMapper::new(4, deficiency, HueShifts::default());
        assert!(close(mapper.hue_for_index(index), expected));
    }

    #[test]
    fn custom_shifts_wrap_past_a_full_turn() {
        let shifts = HueShifts {
            deuteranopia: 300.0,
            ..HueShifts::default()
        };
        let mapper = HueMapper::new(4, Some(ColorDeficiency::Deuteranopia), shifts);
        // 120 * 3 / 4 + 300 = 390 -> 30
        assert!(close(mapper.hue_for_index(3.0), 30.0));
    }

    #[test]
    fn empty_scale_maps_to_zero() {
        let mapper = HueMapper::new(0, None, HueShifts::default());
        assert!(close(mapper.hue_for_index(3.0), 0.0));
        assert!(mapper.assignable_hues().is_empty());
        assert!(mapper.pair(&ColorIndex::default(), PairingStrategy::EvenlySpaced).is_empty());
    }

    #[test]
    fn shift_validation_rejects_nan() {
        let shifts = HueShifts {
            tritanopia: f64::NAN,
            ..HueShifts::default()
        };
        let err = shifts.validate().expect_err("NaN shift must fail");
        assert!(matches!(
            err,
            ColoringError::NonFiniteHueShift { mode: "tritanopia", .. }
        ));
        assert!(HueShifts::default().validate().is_ok());
    }

    #[test]
    fn evenly_spaced_pairs_by_rank_with_identifier_tie_break() {
        // Indices a=0, b=1.5, c=0 rank as a, c, b.
        let mapper = HueMapper::new(3, None, HueShifts::default());
        let colors = mapper.pair(&chain_index(), PairingStrategy::EvenlySpaced);
        let pairs: Vec<(&str, f64)> = colors
            .iter()
            .map(|c| (c.candidate().as_str(), c.hue()))
            .collect();
        assert_eq!(pairs, vec![("a", 0.0), ("c", 120.0), ("b", 240.0)]);
    }

    #[test]
    fn proportional_pairs_use_raw_positions() {
        let mapper = HueMapper::new(3, None, HueShifts::default());
        let colors = mapper.pair(&chain_index(), PairingStrategy::Proportional);
        let pairs: Vec<(&str, f64)> = colors
            .iter()
            .map(|c| (c.candidate().as_str(), c.hue()))
            .collect();
        assert_eq!(pairs, vec![("a", 0.0), ("b", 180.0), ("c", 0.0)]);
    }

    #[test]
    fn strategy_names_are_stable() {
        assert_eq!(PairingStrategy::EvenlySpaced.to_string(), "evenly-spaced");
        assert_eq!(PairingStrategy::Proportional.to_string(), "proportional");
    }
}
