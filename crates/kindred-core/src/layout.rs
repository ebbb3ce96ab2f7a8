//! Hierarchical tree layout transform.
//!
//! Collapses the person-level graph into clusters (couples become one
//! "union" node), lays the cluster DAG out top-to-bottom with `banyan`,
//! then expands cluster positions back into per-person top-left anchors
//! with deterministic left/right spouse placement.
//!
//! Pure function over a snapshot: no I/O, no store access, safe to
//! memoize keyed by the snapshot's content.

use crate::cluster::{Cluster, build_clusters};
use crate::edges::{RenderEdge, project_edges};
use crate::person::{Gender, Person, PersonId};
use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Card footprint on the rendered tree, in logical pixels.
pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 125.0;
/// Horizontal gap between the two members of a union cluster.
pub const UNION_GAP: f64 = 80.0;
/// Gap between sibling clusters in a rank / between ranks.
pub const NODE_SEP: f64 = 50.0;
pub const RANK_SEP: f64 = 80.0;

const UNION_WIDTH: f64 = NODE_WIDTH * 2.0 + UNION_GAP;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCard {
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// One positioned person. `x`/`y` are the top-left anchor of the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: PersonId,
    pub x: f64,
    pub y: f64,
    pub data: PersonCard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<RenderEdge>,
}

/// Computes the renderable tree for a snapshot of people.
pub fn compute_tree_layout(people: &[Person]) -> TreeLayout {
    if people.is_empty() {
        return TreeLayout::default();
    }

    let (clusters, cluster_of) = build_clusters(people);
    debug!(
        people = people.len(),
        clusters = clusters.len(),
        "built layout clusters"
    );

    let mut g = banyan::Graph::new(banyan::GraphConfig {
        nodesep: NODE_SEP,
        ranksep: RANK_SEP,
    });

    for cluster in &clusters {
        let width = if cluster.is_union() {
            UNION_WIDTH
        } else {
            NODE_WIDTH
        };
        g.set_node(cluster.id(), banyan::NodeLabel::sized(width, NODE_HEIGHT));
    }

    for (parent, child) in project_cluster_edges(people, &cluster_of) {
        g.set_edge(parent, child, banyan::EdgeLabel::default());
    }

    banyan::layout(&mut g);

    // Union membership decides left/right, not the spouse arrays: a
    // one-sided booking still forms a union, and its second member has
    // no back-reference to consult.
    let right_of: FxHashSet<&str> = clusters
        .iter()
        .filter_map(|c| match c {
            Cluster::Union { right, .. } => Some(right.as_str()),
            Cluster::Single { .. } => None,
        })
        .collect();

    let mut nodes: Vec<LayoutNode> = Vec::with_capacity(people.len());
    for person in people {
        let Some(cluster_id) = cluster_of.get(&person.id) else {
            continue;
        };
        let Some(label) = g.node(cluster_id) else {
            continue;
        };
        let (Some(cx), Some(cy)) = (label.x, label.y) else {
            continue;
        };

        // banyan yields cluster centers; anchors are top-left. The
        // smaller id sits left, at the cluster anchor; the other spouse
        // sits one card plus the union gap to the right.
        let anchor_x = cx - label.width / 2.0;
        let anchor_y = cy - label.height / 2.0;
        let x = if right_of.contains(person.id.as_str()) {
            anchor_x + NODE_WIDTH + UNION_GAP
        } else {
            anchor_x
        };

        nodes.push(LayoutNode {
            id: person.id.clone(),
            x,
            y: anchor_y,
            data: PersonCard {
                name: person.name.clone(),
                gender: person.gender,
                birth_date: person.birth_date,
                death_date: person.death_date,
                avatar: person.avatar.clone(),
            },
        });
    }

    TreeLayout {
        nodes,
        edges: project_edges(people),
    }
}

/// Projects parent->child links through the cluster map, deduped in first
/// occurrence order. Links to unknown people resolve to no cluster and
/// drop out; self-loops (a spouse also recorded as their partner's
/// parent) collapse inside one cluster and are dropped too.
fn project_cluster_edges(
    people: &[Person],
    cluster_of: &FxHashMap<PersonId, String>,
) -> Vec<(String, String)> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for person in people {
        let Some(parent_cluster) = cluster_of.get(&person.id) else {
            continue;
        };
        for child_id in &person.children {
            let Some(child_cluster) = cluster_of.get(child_id) else {
                continue;
            };
            if parent_cluster == child_cluster {
                warn!(
                    parent = %person.id,
                    child = %child_id,
                    "dropping intra-cluster parent link"
                );
                continue;
            }
            let edge = (parent_cluster.clone(), child_cluster.clone());
            if seen.insert(edge.clone()) {
                out.push(edge);
            }
        }
    }
    out
}

/// The cluster DAG edges the layout runs on (exposed for diagnostics and
/// tests).
pub fn cluster_edges(people: &[Person]) -> Vec<(String, String)> {
    let (_, cluster_of) = build_clusters(people);
    project_cluster_edges(people, &cluster_of)
}
