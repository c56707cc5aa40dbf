//! Tests for coloring error types and edge key validation.

use std::sync::Arc;

use huegap_core::{ColoringError, ColoringErrorCode, EdgeKey, EdgeWeights, make_edge_key};
use rstest::rstest;

#[rstest]
#[case(
    ColoringError::MissingSeparator { key: Arc::from("ab") },
    ColoringErrorCode::MissingSeparator,
    "HUEGAP_MISSING_SEPARATOR",
)]
#[case(
    ColoringError::ExtraSeparator { key: Arc::from("a\nb\nc") },
    ColoringErrorCode::ExtraSeparator,
    "HUEGAP_EXTRA_SEPARATOR",
)]
#[case(
    ColoringError::EmptyCandidate { key: Arc::from("\nb") },
    ColoringErrorCode::EmptyCandidate,
    "HUEGAP_EMPTY_CANDIDATE",
)]
#[case(
    ColoringError::SelfLoop { candidate: Arc::from("a") },
    ColoringErrorCode::SelfLoop,
    "HUEGAP_SELF_LOOP",
)]
#[case(
    ColoringError::UnknownColorDeficiency { provided: Arc::from("mono") },
    ColoringErrorCode::UnknownColorDeficiency,
    "HUEGAP_UNKNOWN_COLOR_DEFICIENCY",
)]
#[case(
    ColoringError::InvalidReleaseEdgeCost { got: 0 },
    ColoringErrorCode::InvalidReleaseEdgeCost,
    "HUEGAP_INVALID_RELEASE_EDGE_COST",
)]
#[case(
    ColoringError::NonFiniteHueShift { mode: "tritanopia", shift: f64::NAN },
    ColoringErrorCode::NonFiniteHueShift,
    "HUEGAP_NON_FINITE_HUE_SHIFT",
)]
fn returns_expected_coloring_code(
    #[case] error: ColoringError,
    #[case] expected: ColoringErrorCode,
    #[case] rendered: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), rendered);
    assert_eq!(expected.to_string(), rendered);
}

#[rstest]
#[case::missing("solo", ColoringErrorCode::MissingSeparator)]
#[case::extra("a\nb\nc", ColoringErrorCode::ExtraSeparator)]
#[case::empty_left("\nb", ColoringErrorCode::EmptyCandidate)]
#[case::empty_right("a\n", ColoringErrorCode::EmptyCandidate)]
#[case::self_loop("a\na", ColoringErrorCode::SelfLoop)]
fn legacy_table_decoding_fails_fast(#[case] key: &str, #[case] expected: ColoringErrorCode) {
    let entries = [(make_edge_key("x", "y"), 1_u64), (key.to_owned(), 2)];
    let err = EdgeWeights::from_keyed(entries.iter().map(|(k, w)| (k.as_str(), *w)))
        .expect_err("malformed key must be rejected");
    assert_eq!(err.code(), expected);
}

#[rstest]
fn self_loops_are_rejected_structurally() {
    let err = EdgeKey::new("same".into(), "same".into()).expect_err("self loop must fail");
    assert_eq!(err.code(), ColoringErrorCode::SelfLoop);
    assert_eq!(err.to_string(), "edge connects candidate `same` to itself");
}
