//! Shared helpers for the layout stages.

use crate::graph::Graph;
use std::collections::BTreeMap;

/// Nodes grouped by rank, each layer sorted by `order` (falling back to
/// insertion order for unordered nodes).
pub fn build_layer_matrix(g: &Graph) -> Vec<Vec<String>> {
    let mut max_rank: i32 = i32::MIN;
    let mut ranks: BTreeMap<i32, Vec<(usize, String)>> = BTreeMap::new();
    for (ix, v) in g.node_ids().into_iter().enumerate() {
        let Some(node) = g.node(&v) else { continue };
        let Some(rank) = node.rank else { continue };
        let order = node.order.unwrap_or(ix);
        ranks.entry(rank).or_default().push((order, v));
        max_rank = max_rank.max(rank);
    }

    if max_rank == i32::MIN {
        return Vec::new();
    }

    let mut out: Vec<Vec<String>> = Vec::with_capacity((max_rank + 1).max(0) as usize);
    for rank in 0..=max_rank {
        let mut entries = ranks.remove(&rank).unwrap_or_default();
        entries.sort_by_key(|(o, _)| *o);
        out.push(entries.into_iter().map(|(_, v)| v).collect());
    }
    out
}
