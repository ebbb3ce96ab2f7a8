use banyan::graph::Graph;
use banyan::{EdgeLabel, GraphConfig, rank};

fn gansner_graph() -> Graph {
    let mut g = Graph::new(GraphConfig::default());
    for path in [
        &["a", "b", "c", "d", "h"][..],
        &["a", "e", "g", "h"][..],
        &["a", "f", "g"][..],
    ] {
        for pair in path.windows(2) {
            g.set_edge(pair[0], pair[1], EdgeLabel::default());
        }
    }
    g
}

fn assert_respects_minlen(g: &Graph) {
    for (v, w) in g.edges() {
        let v_rank = g.node(&v).unwrap().rank.unwrap();
        let w_rank = g.node(&w).unwrap().rank.unwrap();
        let minlen = g.edge(&v, &w).unwrap().minlen as i32;
        assert!(
            w_rank - v_rank >= minlen,
            "edge {v} -> {w} violates minlen {minlen}: {w_rank} - {v_rank}"
        );
    }
}

#[test]
fn rank_respects_the_minlen_attribute() {
    let mut g = gansner_graph();
    rank::rank(&mut g);
    assert_respects_minlen(&g);
}

#[test]
fn rank_starts_roots_at_zero() {
    let mut g = gansner_graph();
    rank::rank(&mut g);
    assert_eq!(g.node("a").unwrap().rank, Some(0));
    let min = g
        .node_ids()
        .iter()
        .filter_map(|v| g.node(v).and_then(|n| n.rank))
        .min()
        .unwrap();
    assert_eq!(min, 0);
}

#[test]
fn rank_uses_longest_path_distance() {
    // c is reachable via a->c (1 edge) and a->b->c (2 edges); longest path wins.
    let mut g = Graph::new(GraphConfig::default());
    g.set_edge("a", "b", EdgeLabel::default());
    g.set_edge("b", "c", EdgeLabel::default());
    g.set_edge("a", "c", EdgeLabel::default());
    rank::rank(&mut g);
    assert_eq!(g.node("a").unwrap().rank, Some(0));
    assert_eq!(g.node("b").unwrap().rank, Some(1));
    assert_eq!(g.node("c").unwrap().rank, Some(2));
}

#[test]
fn rank_places_disconnected_roots_at_zero() {
    let mut g = Graph::new(GraphConfig::default());
    g.set_edge("a", "b", EdgeLabel::default());
    g.set_edge("c", "d", EdgeLabel::default());
    rank::rank(&mut g);
    assert_eq!(g.node("a").unwrap().rank, Some(0));
    assert_eq!(g.node("c").unwrap().rank, Some(0));
    assert_eq!(g.node("b").unwrap().rank, Some(1));
    assert_eq!(g.node("d").unwrap().rank, Some(1));
}

#[test]
fn rank_honors_minlen_greater_than_one() {
    let mut g = Graph::new(GraphConfig::default());
    g.set_edge(
        "a",
        "b",
        EdgeLabel {
            minlen: 3,
            ..Default::default()
        },
    );
    rank::rank(&mut g);
    assert_respects_minlen(&g);
    assert_eq!(g.node("b").unwrap().rank, Some(3));
}
