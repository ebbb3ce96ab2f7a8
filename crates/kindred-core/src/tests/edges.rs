use crate::*;

use super::{person, with_children, with_parents, with_spouse};

#[test]
fn children_arrays_yield_parent_child_edges() {
    let people = vec![
        with_children(person("a"), &["c"]),
        with_children(person("b"), &["c"]),
        with_parents(person("c"), &["a", "b"]),
    ];
    let edges = edges::project_edges(&people);

    assert_eq!(
        edges,
        vec![
            RenderEdge {
                id: "e-a-c".into(),
                source: "a".into(),
                target: "c".into(),
                kind: EdgeKind::ParentChild,
            },
            RenderEdge {
                id: "e-b-c".into(),
                source: "b".into(),
                target: "c".into(),
                kind: EdgeKind::ParentChild,
            },
        ]
    );
}

#[test]
fn spouse_pair_emits_exactly_one_edge() {
    let people = vec![
        with_spouse(person("b"), &["a"]),
        with_spouse(person("a"), &["b"]),
    ];
    let edges = edges::project_edges(&people);

    // Emitted from the smaller side only, regardless of input order.
    assert_eq!(
        edges,
        vec![RenderEdge {
            id: "e-a-b".into(),
            source: "a".into(),
            target: "b".into(),
            kind: EdgeKind::Spouse,
        }]
    );
}

#[test]
fn edges_to_unknown_people_are_dropped() {
    let people = vec![with_spouse(
        with_children(person("a"), &["ghost-child"]),
        &["zz-ghost"],
    )];
    assert!(edges::project_edges(&people).is_empty());
}

#[test]
fn parents_arrays_are_not_read() {
    // A one-sided parents booking produces no edge; projection reads the
    // children direction only.
    let people = vec![person("a"), with_parents(person("c"), &["a"])];
    assert!(edges::project_edges(&people).is_empty());
}

#[test]
fn mixed_graph_keeps_input_order() {
    let people = vec![
        with_spouse(with_children(person("a"), &["c"]), &["b"]),
        with_spouse(with_children(person("b"), &["c"]), &["a"]),
        with_parents(person("c"), &["a", "b"]),
    ];
    let ids: Vec<String> = edges::project_edges(&people)
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec!["e-a-c", "e-a-b", "e-b-c"]);
}
