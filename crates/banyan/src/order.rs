//! Crossing reduction.
//!
//! Starts from a DFS order and refines it with alternating down/up
//! barycenter sweeps, keeping the layering with the fewest crossings.
//! Ties and neighbor-less nodes keep their current position, so the result
//! is deterministic for a given insertion order.

use crate::graph::Graph;
use rustc_hash::FxHashMap as HashMap;

const MAX_SWEEPS: usize = 4;

pub fn run(g: &mut Graph) {
    let mut layering = init_order(g);
    if layering.is_empty() {
        return;
    }

    let mut best = layering.clone();
    let mut best_cc = cross_count(g, &best);

    for i in 0..MAX_SWEEPS {
        sweep(g, &mut layering, i % 2 == 0);
        let cc = cross_count(g, &layering);
        if cc < best_cc {
            best_cc = cc;
            best = layering.clone();
        }
        if best_cc == 0 {
            break;
        }
    }

    for layer in &best {
        for (i, v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.order = Some(i);
            }
        }
    }
}

/// Initial order: DFS from the sources, appending each node to its rank's
/// layer the first time it is reached.
fn init_order(g: &Graph) -> Vec<Vec<String>> {
    let mut max_rank: i32 = i32::MIN;
    for v in g.node_ids() {
        if let Some(rank) = g.node(&v).and_then(|n| n.rank) {
            max_rank = max_rank.max(rank);
        }
    }
    if max_rank == i32::MIN {
        return Vec::new();
    }

    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank + 1).max(0) as usize];
    let mut visited: HashMap<String, bool> = HashMap::default();

    fn dfs(g: &Graph, v: &str, visited: &mut HashMap<String, bool>, layers: &mut [Vec<String>]) {
        if visited.get(v).copied().unwrap_or(false) {
            return;
        }
        visited.insert(v.to_string(), true);

        if let Some(rank) = g.node(v).and_then(|n| n.rank) {
            if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
                layer.push(v.to_string());
            }
        }
        for w in g.successors(v) {
            dfs(g, &w, visited, layers);
        }
    }

    for v in g.node_ids() {
        dfs(g, &v, &mut visited, &mut layers);
    }
    layers
}

/// One barycenter pass. `downward` fixes each layer and reorders the one
/// below it by predecessor barycenters; otherwise the sweep runs bottom-up
/// over successors.
fn sweep(g: &Graph, layering: &mut [Vec<String>], downward: bool) {
    if downward {
        for r in 1..layering.len() {
            let fixed = position_map(&layering[r - 1]);
            reorder(g, &mut layering[r], &fixed, true);
        }
    } else {
        for r in (0..layering.len().saturating_sub(1)).rev() {
            let fixed = position_map(&layering[r + 1]);
            reorder(g, &mut layering[r], &fixed, false);
        }
    }
}

fn position_map(layer: &[String]) -> HashMap<String, usize> {
    layer
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect()
}

fn reorder(g: &Graph, layer: &mut Vec<String>, fixed: &HashMap<String, usize>, use_preds: bool) {
    let entries: Vec<(f64, String)> = layer
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let neighbors = if use_preds {
                g.predecessors(v)
            } else {
                g.successors(v)
            };

            let mut sum: f64 = 0.0;
            let mut weight: f64 = 0.0;
            for u in neighbors {
                let Some(&pos) = fixed.get(&u) else {
                    continue;
                };
                let w = if use_preds {
                    g.edge(&u, v).map(|lbl| lbl.weight).unwrap_or(1.0)
                } else {
                    g.edge(v, &u).map(|lbl| lbl.weight).unwrap_or(1.0)
                };
                sum += w * pos as f64;
                weight += w;
            }

            // Neighbor-less nodes keep their current slot.
            let barycenter = if weight > 0.0 {
                sum / weight
            } else {
                i as f64
            };
            (barycenter, v.clone())
        })
        .collect();

    let mut indices: Vec<usize> = (0..entries.len()).collect();
    indices.sort_by(|&a, &b| {
        entries[a]
            .0
            .partial_cmp(&entries[b].0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    *layer = indices.into_iter().map(|i| entries[i].1.clone()).collect();
}

/// Number of edge crossings between adjacent layers.
pub fn cross_count(g: &Graph, layering: &[Vec<String>]) -> usize {
    let mut count = 0usize;
    for pair in layering.windows(2) {
        let north = position_map(&pair[0]);
        let south = position_map(&pair[1]);

        let mut spans: Vec<(usize, usize)> = Vec::new();
        for (v, w) in g.edges() {
            let (Some(&np), Some(&sp)) = (north.get(&v), south.get(&w)) else {
                continue;
            };
            spans.push((np, sp));
        }
        spans.sort_unstable();

        for (i, &(_, s1)) in spans.iter().enumerate() {
            for &(_, s2) in &spans[i + 1..] {
                if s2 < s1 {
                    count += 1;
                }
            }
        }
    }
    count
}
