//! Coordinate assignment.
//!
//! Ranks are stacked top-to-bottom with `ranksep` between them; within a
//! rank, nodes are packed left-to-right with `nodesep` gaps and each layer
//! is centered under the widest one. Coordinates are node centers.

use crate::graph::Graph;
use crate::util;

pub fn run(g: &mut Graph) {
    let layering = util::build_layer_matrix(g);
    if layering.is_empty() {
        return;
    }

    assign_y(g, &layering);
    assign_x(g, &layering);
}

fn assign_y(g: &mut Graph, layering: &[Vec<String>]) {
    let ranksep = g.config().ranksep;
    let mut prev_y: f64 = 0.0;

    for layer in layering {
        let max_height = layer
            .iter()
            .filter_map(|v| g.node(v))
            .map(|n| n.height)
            .fold(0.0_f64, f64::max);

        let y = prev_y + max_height / 2.0;
        for v in layer {
            if let Some(n) = g.node_mut(v) {
                n.y = Some(y);
            }
        }
        prev_y += max_height + ranksep;
    }
}

fn assign_x(g: &mut Graph, layering: &[Vec<String>]) {
    let nodesep = g.config().nodesep;

    let layer_widths: Vec<f64> = layering
        .iter()
        .map(|layer| {
            let total: f64 = layer.iter().filter_map(|v| g.node(v)).map(|n| n.width).sum();
            total + layer.len().saturating_sub(1) as f64 * nodesep
        })
        .collect();
    let max_width = layer_widths.iter().copied().fold(0.0_f64, f64::max);

    for (layer, width) in layering.iter().zip(&layer_widths) {
        let mut cursor = (max_width - width) / 2.0;
        let xs: Vec<(String, f64)> = layer
            .iter()
            .map(|v| {
                let width = g.node(v).map(|n| n.width).unwrap_or(0.0);
                let x = cursor + width / 2.0;
                cursor += width + nodesep;
                (v.clone(), x)
            })
            .collect();
        for (v, x) in xs {
            if let Some(n) = g.node_mut(&v) {
                n.x = Some(x);
            }
        }
    }
}
