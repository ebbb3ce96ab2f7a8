//! Longest-path ranking.
//!
//! Assigns each node a rank equal to its longest-path distance from a root
//! (a node with no incoming edges), then shifts ranks so the minimum is 0.
//! The input must be acyclic; `acyclic::run` guarantees that.

use crate::graph::Graph;
use rustc_hash::FxHashMap as HashMap;

pub fn rank(g: &mut Graph) {
    longest_path(g);
    normalize_ranks(g);
}

fn longest_path(g: &mut Graph) {
    fn dfs(v: &str, g: &mut Graph, visited: &mut HashMap<String, i32>) -> i32 {
        if let Some(&rank) = visited.get(v) {
            return rank;
        }

        let mut rank: Option<i32> = None;
        for (_, w) in g.out_edges(v) {
            let minlen: i32 = g.edge(v, &w).map(|lbl| lbl.minlen as i32).unwrap_or(1);
            let candidate = dfs(&w, g, visited) - minlen;
            rank = Some(match rank {
                Some(current) => current.min(candidate),
                None => candidate,
            });
        }

        let rank = rank.unwrap_or(0);
        if let Some(label) = g.node_mut(v) {
            label.rank = Some(rank);
        }
        visited.insert(v.to_string(), rank);
        rank
    }

    let sources = g.sources();
    let mut visited: HashMap<String, i32> = HashMap::default();
    for v in sources {
        dfs(&v, g, &mut visited);
    }
    // In a DAG every node is reachable from some source, but be defensive
    // about nodes left unranked by malformed input.
    for v in g.node_ids() {
        if g.node(&v).is_some_and(|n| n.rank.is_none()) {
            dfs(&v, g, &mut visited);
        }
    }
}

fn normalize_ranks(g: &mut Graph) {
    let mut min_rank: i32 = i32::MAX;
    for v in g.node_ids() {
        if let Some(rank) = g.node(&v).and_then(|n| n.rank) {
            min_rank = min_rank.min(rank);
        }
    }
    if min_rank == i32::MAX {
        return;
    }
    for v in g.node_ids() {
        if let Some(n) = g.node_mut(&v) {
            if let Some(rank) = n.rank {
                n.rank = Some(rank - min_rank);
            }
        }
    }
}
