//! Error types for the huegap core library.
//!
//! Structural input problems (malformed edge keys, unknown colour-deficiency
//! modes, invalid engine configuration) are reported through
//! [`ColoringError`]. Numeric edge cases such as empty candidate sets are not
//! errors and never surface here.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when decoding inputs or configuring the engine.
///
/// Not `Eq`: [`ColoringError::NonFiniteHueShift`] carries the rejected `f64`.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColoringError {
    /// A string edge key did not contain the separator.
    #[error("edge key {key:?} does not contain a separator")]
    MissingSeparator {
        /// The key that failed to decode.
        key: Arc<str>,
    },
    /// A string edge key contained the separator more than once, which means
    /// one of the identifiers embeds it.
    #[error("edge key {key:?} contains more than one separator")]
    ExtraSeparator {
        /// The key that failed to decode.
        key: Arc<str>,
    },
    /// One side of a string edge key was empty.
    #[error("edge key {key:?} has an empty candidate identifier")]
    EmptyCandidate {
        /// The key that failed to decode.
        key: Arc<str>,
    },
    /// An edge connected a candidate to itself.
    #[error("edge connects candidate `{candidate}` to itself")]
    SelfLoop {
        /// The candidate named on both ends of the edge.
        candidate: Arc<str>,
    },
    /// A colour-deficiency mode string was not recognised.
    #[error(
        "unknown color deficiency `{provided}`; expected `protanopia`, `deuteranopia` or `tritanopia`"
    )]
    UnknownColorDeficiency {
        /// Raw value supplied by the caller.
        provided: Arc<str>,
    },
    /// The synthetic weight given to release edges must be positive.
    #[error("release_edge_cost must be at least 1 (got {got})")]
    InvalidReleaseEdgeCost {
        /// The rejected cost.
        got: u64,
    },
    /// A hue shift table entry was NaN or infinite.
    #[error("hue shift for {mode} must be finite (got {shift})")]
    NonFiniteHueShift {
        /// Mode whose shift was rejected.
        mode: &'static str,
        /// The rejected shift in degrees.
        shift: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`ColoringError`] variants.
    enum ColoringErrorCode for ColoringError {
        /// A string edge key did not contain the separator.
        MissingSeparator => MissingSeparator { .. } => "HUEGAP_MISSING_SEPARATOR",
        /// A string edge key contained the separator more than once.
        ExtraSeparator => ExtraSeparator { .. } => "HUEGAP_EXTRA_SEPARATOR",
        /// One side of a string edge key was empty.
        EmptyCandidate => EmptyCandidate { .. } => "HUEGAP_EMPTY_CANDIDATE",
        /// An edge connected a candidate to itself.
        SelfLoop => SelfLoop { .. } => "HUEGAP_SELF_LOOP",
        /// A colour-deficiency mode string was not recognised.
        UnknownColorDeficiency => UnknownColorDeficiency { .. } => "HUEGAP_UNKNOWN_COLOR_DEFICIENCY",
        /// The configured release edge cost was zero.
        InvalidReleaseEdgeCost => InvalidReleaseEdgeCost { .. } => "HUEGAP_INVALID_RELEASE_EDGE_COST",
        /// A hue shift table entry was NaN or infinite.
        NonFiniteHueShift => NonFiniteHueShift { .. } => "HUEGAP_NON_FINITE_HUE_SHIFT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ColoringError>;
