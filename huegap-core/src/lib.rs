//! Huegap core library.
//!
//! Assigns well separated hues to candidates that co-occur on a shared
//! timeline. Heavily co-occurring pairs are placed first, each on the widest
//! free arc left by its already-coloured neighbours.

mod assign;
mod builder;
mod edge;
mod engine;
mod error;
mod graph;
mod hue;
mod release;
mod sink;
mod weights;

pub use crate::{
    assign::{ColorIndex, assign_color_indices},
    builder::{ColoringEngineBuilder, DEFAULT_RELEASE_EDGE_COST},
    edge::{
        CandidateColor, CandidateEdge, CandidateId, EDGE_KEY_SEPARATOR, EdgeKey, ReleaseId,
        make_edge_key, parse_edge_key,
    },
    engine::{ColoringEngine, ColoringOutcome},
    error::{ColoringError, ColoringErrorCode, Result},
    graph::CandidateGraph,
    hue::{
        ColorDeficiency, DEFAULT_PROPORTIONAL_THRESHOLD, HueMapper, HueShifts, PairingStrategy,
    },
    release::ReleaseMembership,
    sink::{CandidateSink, SinkFn, save_colors},
    weights::EdgeWeights,
};
