#![forbid(unsafe_code)]

//! Family-tree semantic core.
//!
//! Two responsibilities:
//! - the relationship consistency engine: every mutation restores the
//!   mirrored parent/child and symmetric spouse bookings across the store
//!   (see [`sync`]);
//! - the hierarchical layout transform: collapse people into couple-level
//!   clusters, lay the cluster DAG out by generation, and expand back to
//!   per-person coordinates plus render edges (see [`layout`]).
//!
//! Storage, HTTP and painting live outside; the core only sees the
//! [`store::PersonStore`] surface and immutable people snapshots.

pub mod cluster;
pub mod edges;
pub mod error;
pub mod layout;
pub mod person;
pub mod store;
pub mod sync;
pub mod tree;

pub use cluster::{Cluster, build_clusters, union_id};
pub use edges::{EdgeKind, RenderEdge, project_edges};
pub use error::{Error, Result};
pub use layout::{LayoutNode, PersonCard, TreeLayout, compute_tree_layout};
pub use person::{Gender, NewPerson, Person, PersonFields, PersonId, RelationshipSet};
pub use store::{InMemoryPersonStore, PersonStore, RelationshipField};
pub use tree::FamilyTree;

#[cfg(test)]
mod tests;
