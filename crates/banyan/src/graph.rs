//! Directed graph container used by the layout pipeline.
//!
//! Nodes are keyed by string id and kept in insertion order so repeated runs
//! over the same input produce identical layouts. Single edges only; setting
//! an edge that already exists replaces its label.

use crate::{EdgeLabel, GraphConfig, NodeLabel};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
struct NodeEntry {
    id: String,
    label: NodeLabel,
}

#[derive(Debug, Clone)]
struct EdgeEntry {
    v_ix: usize,
    w_ix: usize,
    label: EdgeLabel,
}

#[derive(Debug, Default)]
pub struct Graph {
    config: GraphConfig,

    nodes: Vec<NodeEntry>,
    node_index: FxHashMap<String, usize>,

    // Edge slots are tombstoned on removal so node indices stay stable.
    edges: Vec<Option<EdgeEntry>>,
    edge_index: FxHashMap<(usize, usize), usize>,
    out: Vec<Vec<usize>>,
    in_: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: NodeLabel) {
        let id = id.into();
        match self.node_index.get(&id) {
            Some(&ix) => self.nodes[ix].label = label,
            None => {
                let ix = self.nodes.len();
                self.node_index.insert(id.clone(), ix);
                self.nodes.push(NodeEntry { id, label });
                self.out.push(Vec::new());
                self.in_.push(Vec::new());
            }
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: &str) -> Option<&NodeLabel> {
        self.node_index.get(id).map(|&ix| &self.nodes[ix].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeLabel> {
        self.node_index
            .get(id)
            .copied()
            .map(|ix| &mut self.nodes[ix].label)
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Adds the edge `v -> w`, creating endpoints with default labels when
    /// missing. Replaces the label of an existing edge.
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>, label: EdgeLabel) {
        let v = v.into();
        let w = w.into();
        if !self.has_node(&v) {
            self.set_node(v.clone(), NodeLabel::default());
        }
        if !self.has_node(&w) {
            self.set_node(w.clone(), NodeLabel::default());
        }
        let v_ix = self.node_index[&v];
        let w_ix = self.node_index[&w];

        match self.edge_index.get(&(v_ix, w_ix)) {
            Some(&e_ix) => {
                if let Some(entry) = self.edges[e_ix].as_mut() {
                    entry.label = label;
                }
            }
            None => {
                let e_ix = self.edges.len();
                self.edges.push(Some(EdgeEntry { v_ix, w_ix, label }));
                self.edge_index.insert((v_ix, w_ix), e_ix);
                self.out[v_ix].push(e_ix);
                self.in_[w_ix].push(e_ix);
            }
        }
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge(v, w).is_some()
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&EdgeLabel> {
        let v_ix = *self.node_index.get(v)?;
        let w_ix = *self.node_index.get(w)?;
        let e_ix = *self.edge_index.get(&(v_ix, w_ix))?;
        self.edges[e_ix].as_ref().map(|e| &e.label)
    }

    pub fn remove_edge(&mut self, v: &str, w: &str) -> bool {
        let (Some(&v_ix), Some(&w_ix)) = (self.node_index.get(v), self.node_index.get(w)) else {
            return false;
        };
        let Some(e_ix) = self.edge_index.remove(&(v_ix, w_ix)) else {
            return false;
        };
        self.edges[e_ix] = None;
        self.out[v_ix].retain(|&ix| ix != e_ix);
        self.in_[w_ix].retain(|&ix| ix != e_ix);
        true
    }

    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// Live edges as `(v, w)` pairs in insertion order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .flatten()
            .map(|e| (self.nodes[e.v_ix].id.clone(), self.nodes[e.w_ix].id.clone()))
            .collect()
    }

    pub fn out_edges(&self, v: &str) -> Vec<(String, String)> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.out[v_ix]
            .iter()
            .filter_map(|&e_ix| self.edges[e_ix].as_ref())
            .map(|e| (self.nodes[e.v_ix].id.clone(), self.nodes[e.w_ix].id.clone()))
            .collect()
    }

    pub fn successors(&self, v: &str) -> Vec<String> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.out[v_ix]
            .iter()
            .filter_map(|&e_ix| self.edges[e_ix].as_ref())
            .map(|e| self.nodes[e.w_ix].id.clone())
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<String> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.in_[v_ix]
            .iter()
            .filter_map(|&e_ix| self.edges[e_ix].as_ref())
            .map(|e| self.nodes[e.v_ix].id.clone())
            .collect()
    }

    /// Nodes with no incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<String> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(ix, _)| self.in_[*ix].is_empty())
            .map(|(_, n)| n.id.clone())
            .collect()
    }
}
