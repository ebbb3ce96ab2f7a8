//! Render-edge projection.
//!
//! Relationships are double-booked on both endpoints, so the projector
//! reads one direction only: parent→child edges come from `children`
//! arrays, and each spouse pair is emitted once, from its
//! lexicographically smaller side. Ids that resolve to no known person are
//! dropped.

use crate::person::Person;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    ParentChild,
    Spouse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

pub fn project_edges(people: &[Person]) -> Vec<RenderEdge> {
    let known: FxHashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
    let mut edges: Vec<RenderEdge> = Vec::new();

    for person in people {
        for child_id in &person.children {
            if !known.contains(child_id.as_str()) {
                continue;
            }
            edges.push(RenderEdge {
                id: format!("e-{}-{}", person.id, child_id),
                source: person.id.clone(),
                target: child_id.clone(),
                kind: EdgeKind::ParentChild,
            });
        }
        for spouse_id in &person.spouse {
            // Canonical ordering dedupes the symmetric spouse booking.
            if person.id.as_str() >= spouse_id.as_str() {
                continue;
            }
            if !known.contains(spouse_id.as_str()) {
                continue;
            }
            edges.push(RenderEdge {
                id: format!("e-{}-{}", person.id, spouse_id),
                source: person.id.clone(),
                target: spouse_id.clone(),
                kind: EdgeKind::Spouse,
            });
        }
    }

    edges
}
