//! Destination for finished candidate colours.

use std::collections::BTreeMap;

use crate::edge::{CandidateColor, CandidateId};

/// External store that records the hue chosen for each candidate.
///
/// Called exactly once per coloured candidate.
pub trait CandidateSink {
    /// Registers `hue` (degrees) for `candidate`.
    fn add_candidate(&mut self, hue: f64, candidate: &CandidateId);
}

impl CandidateSink for Vec<CandidateColor> {
    fn add_candidate(&mut self, hue: f64, candidate: &CandidateId) {
        self.push(CandidateColor::new(candidate.clone(), hue));
    }
}

impl CandidateSink for BTreeMap<CandidateId, f64> {
    fn add_candidate(&mut self, hue: f64, candidate: &CandidateId) {
        self.insert(candidate.clone(), hue);
    }
}

/// Adapts a closure into a [`CandidateSink`].
///
/// # Examples
/// ```
/// use huegap_core::{CandidateColor, CandidateSink, SinkFn, save_colors};
///
/// let mut seen = Vec::new();
/// let mut sink = SinkFn(|hue: f64, candidate: &huegap_core::CandidateId| {
///     seen.push(format!("{candidate}={hue}"));
/// });
/// save_colors(&[CandidateColor::new("a".into(), 90.0)], &mut sink);
/// assert_eq!(seen, ["a=90"]);
/// ```
#[derive(Debug)]
pub struct SinkFn<F>(pub F);

impl<F> CandidateSink for SinkFn<F>
where
    F: FnMut(f64, &CandidateId),
{
    fn add_candidate(&mut self, hue: f64, candidate: &CandidateId) {
        (self.0)(hue, candidate);
    }
}

impl<S: CandidateSink + ?Sized> CandidateSink for &mut S {
    fn add_candidate(&mut self, hue: f64, candidate: &CandidateId) {
        (**self).add_candidate(hue, candidate);
    }
}

/// Forwards every colour to `sink`, in slice order.
pub fn save_colors<S: CandidateSink + ?Sized>(colors: &[CandidateColor], sink: &mut S) {
    for color in colors {
        sink.add_candidate(color.hue(), color.candidate());
    }
}
