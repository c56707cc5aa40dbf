//! Builder utilities for configuring the coloring engine.
//!
//! Validates configuration once so [`ColoringEngine`] runs never fail.

use crate::{
    Result,
    engine::ColoringEngine,
    error::ColoringError,
    hue::{ColorDeficiency, DEFAULT_PROPORTIONAL_THRESHOLD, HueShifts},
};

/// Weight given to synthetic edges between candidates sharing a release.
pub const DEFAULT_RELEASE_EDGE_COST: u64 = 10;

/// Configures and constructs [`ColoringEngine`] instances.
///
/// # Examples
/// ```
/// use huegap_core::{ColorDeficiency, ColoringEngineBuilder};
///
/// let engine = ColoringEngineBuilder::new()
///     .with_proportional_threshold(20)
///     .with_color_deficiency(Some(ColorDeficiency::Tritanopia))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.proportional_threshold(), 20);
/// assert_eq!(engine.color_deficiency(), Some(ColorDeficiency::Tritanopia));
/// ```
#[derive(Debug, Clone)]
pub struct ColoringEngineBuilder {
    proportional_threshold: usize,
    release_edge_cost: u64,
    color_deficiency: Option<ColorDeficiency>,
    hue_shifts: HueShifts,
}

impl Default for ColoringEngineBuilder {
    fn default() -> Self {
        Self {
            proportional_threshold: DEFAULT_PROPORTIONAL_THRESHOLD,
            release_edge_cost: DEFAULT_RELEASE_EDGE_COST,
            color_deficiency: None,
            hue_shifts: HueShifts::default(),
        }
    }
}

impl ColoringEngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use huegap_core::ColoringEngineBuilder;
    ///
    /// let builder = ColoringEngineBuilder::new();
    /// assert_eq!(builder.proportional_threshold(), 75);
    /// assert_eq!(builder.release_edge_cost(), 10);
    /// assert_eq!(builder.color_deficiency(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the candidate count above which hues are mapped
    /// proportionally instead of evenly spaced.
    #[must_use]
    pub const fn with_proportional_threshold(mut self, threshold: usize) -> Self {
        self.proportional_threshold = threshold;
        self
    }

    /// Returns the configured proportional threshold.
    #[must_use]
    pub const fn proportional_threshold(&self) -> usize {
        self.proportional_threshold
    }

    /// Overrides the weight given to release edges.
    #[must_use]
    pub const fn with_release_edge_cost(mut self, cost: u64) -> Self {
        self.release_edge_cost = cost;
        self
    }

    /// Returns the configured release edge cost.
    #[must_use]
    pub const fn release_edge_cost(&self) -> u64 {
        self.release_edge_cost
    }

    /// Selects the colour-deficiency mode, or `None` for the full hue wheel.
    #[must_use]
    pub const fn with_color_deficiency(mut self, deficiency: Option<ColorDeficiency>) -> Self {
        self.color_deficiency = deficiency;
        self
    }

    /// Returns the configured colour-deficiency mode.
    #[must_use]
    pub const fn color_deficiency(&self) -> Option<ColorDeficiency> {
        self.color_deficiency
    }

    /// Replaces the per-mode hue shift table.
    #[must_use]
    pub const fn with_hue_shifts(mut self, shifts: HueShifts) -> Self {
        self.hue_shifts = shifts;
        self
    }

    /// Returns the configured hue shift table.
    #[must_use]
    pub const fn hue_shifts(&self) -> HueShifts {
        self.hue_shifts
    }

    /// Validates the configuration and constructs a [`ColoringEngine`].
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidReleaseEdgeCost`] when the release edge
    /// cost is zero and [`ColoringError::NonFiniteHueShift`] when a shift is
    /// NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use huegap_core::{ColoringEngineBuilder, ColoringError};
    ///
    /// let err = ColoringEngineBuilder::new()
    ///     .with_release_edge_cost(0)
    ///     .build()
    ///     .expect_err("zero cost is rejected");
    /// assert!(matches!(err, ColoringError::InvalidReleaseEdgeCost { got: 0 }));
    /// ```
    pub fn build(self) -> Result<ColoringEngine> {
        if self.release_edge_cost == 0 {
            return Err(ColoringError::InvalidReleaseEdgeCost {
                got: self.release_edge_cost,
            });
        }
        self.hue_shifts.validate()?;

        Ok(ColoringEngine::new(
            self.proportional_threshold,
            self.release_edge_cost,
            self.color_deficiency,
            self.hue_shifts,
        ))
    }
}
