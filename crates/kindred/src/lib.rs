#![forbid(unsafe_code)]

//! `kindred` is a headless family-tree engine.
//!
//! It keeps a graph of people whose relationships are stored redundantly
//! on both endpoints (parents/children mirrored, spouses symmetric),
//! restores that invariant after every mutation, and turns snapshots into
//! a renderable generation-by-generation layout.
//!
//! The semantic model lives in [`kindred_core`]; the layered layout solver
//! is re-exported under [`solver`].

pub use kindred_core::*;

/// The underlying layered-graph layout solver, for callers that want to
/// lay out their own graphs with the same engine the tree layout uses.
pub mod solver {
    pub use banyan::{EdgeLabel, Graph, GraphConfig, NodeLabel, layout};
}
