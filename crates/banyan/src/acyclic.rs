//! Break cycles by dropping a feedback arc set (FAS).
//!
//! Back-edges are removed rather than reversed: a layered family graph
//! with a cycle is corrupt data, and the offending link should vanish
//! from the layout rather than re-orient a generation. Self-loops are
//! dropped unconditionally.

use crate::graph::Graph;
use std::collections::BTreeSet;

pub fn run(g: &mut Graph) {
    let mut drop_list: Vec<(String, String)> = Vec::new();
    for (v, w) in g.edges() {
        if v == w {
            drop_list.push((v, w));
        }
    }
    drop_list.extend(dfs_fas(g));

    for (v, w) in drop_list {
        let _ = g.remove_edge(&v, &w);
    }
}

/// DFS feedback arc set over nodes in insertion order.
fn dfs_fas(g: &Graph) -> Vec<(String, String)> {
    let mut fas: Vec<(String, String)> = Vec::new();
    let mut stack: BTreeSet<String> = BTreeSet::new();
    let mut visited: BTreeSet<String> = BTreeSet::new();

    fn dfs(
        g: &Graph,
        v: &str,
        visited: &mut BTreeSet<String>,
        stack: &mut BTreeSet<String>,
        fas: &mut Vec<(String, String)>,
    ) {
        if !visited.insert(v.to_string()) {
            return;
        }
        stack.insert(v.to_string());
        for (ev, ew) in g.out_edges(v) {
            if ev == ew {
                continue;
            }
            if stack.contains(&ew) {
                fas.push((ev, ew));
            } else {
                dfs(g, &ew, visited, stack, fas);
            }
        }
        stack.remove(v);
    }

    for v in g.node_ids() {
        dfs(g, &v, &mut visited, &mut stack, &mut fas);
    }
    fas
}
