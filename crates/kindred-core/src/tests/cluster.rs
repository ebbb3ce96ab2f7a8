use crate::*;

use super::{person, with_spouse};

#[test]
fn union_id_is_order_independent() {
    assert_eq!(cluster::union_id("x", "y"), "union-x-y");
    assert_eq!(cluster::union_id("y", "x"), "union-x-y");
}

#[test]
fn mutual_spouses_collapse_into_one_union() {
    // Scenario 1: a and b reference each other as spouse.
    let people = vec![
        with_spouse(person("a"), &["b"]),
        with_spouse(person("b"), &["a"]),
    ];
    let (clusters, cluster_of) = cluster::build_clusters(&people);

    assert_eq!(
        clusters,
        vec![Cluster::Union {
            left: "a".into(),
            right: "b".into(),
        }]
    );
    assert_eq!(cluster_of["a"], "union-a-b");
    assert_eq!(cluster_of["b"], "union-a-b");
}

#[test]
fn cluster_id_is_stable_under_input_order() {
    let forward = vec![
        with_spouse(person("a"), &["b"]),
        with_spouse(person("b"), &["a"]),
    ];
    let reversed = vec![
        with_spouse(person("b"), &["a"]),
        with_spouse(person("a"), &["b"]),
    ];
    let (fwd, _) = cluster::build_clusters(&forward);
    let (rev, _) = cluster::build_clusters(&reversed);
    assert_eq!(fwd[0].id(), rev[0].id());
    assert_eq!(fwd[0].id(), "union-a-b");
}

#[test]
fn dangling_spouse_id_degrades_to_single() {
    // Scenario 5: the referenced spouse is not in the input set.
    let people = vec![with_spouse(person("a"), &["ghost"])];
    let (clusters, cluster_of) = cluster::build_clusters(&people);

    assert_eq!(clusters, vec![Cluster::Single { member: "a".into() }]);
    assert_eq!(cluster_of["a"], "a");
    assert!(!cluster_of.contains_key("ghost"));
}

#[test]
fn unmarried_people_stand_alone() {
    let people = vec![person("a"), person("b")];
    let (clusters, _) = cluster::build_clusters(&people);
    assert_eq!(clusters.len(), 2);
    assert!(clusters.iter().all(|c| !c.is_union()));
}

#[test]
fn only_first_listed_spouse_forms_a_union() {
    let people = vec![
        with_spouse(person("a"), &["b", "c"]),
        with_spouse(person("b"), &["a"]),
        with_spouse(person("c"), &["a"]),
    ];
    let (clusters, cluster_of) = cluster::build_clusters(&people);

    // a pairs with b; c's first spouse a is already assigned, so c stands
    // alone rather than forming a second union.
    assert_eq!(clusters.len(), 2);
    assert_eq!(cluster_of["a"], "union-a-b");
    assert_eq!(cluster_of["b"], "union-a-b");
    assert_eq!(cluster_of["c"], "c");
}

#[test]
fn every_person_lands_in_exactly_one_cluster() {
    let people = vec![
        with_spouse(person("d"), &["c"]),
        with_spouse(person("c"), &["d"]),
        person("e"),
        with_spouse(person("a"), &["b"]),
        with_spouse(person("b"), &["a"]),
    ];
    let (clusters, cluster_of) = cluster::build_clusters(&people);

    assert_eq!(cluster_of.len(), people.len());
    let mut seats = 0;
    for c in &clusters {
        seats += if c.is_union() { 2 } else { 1 };
    }
    assert_eq!(seats, people.len());
}

#[test]
fn rebuild_is_idempotent() {
    let people = vec![
        with_spouse(person("a"), &["b"]),
        with_spouse(person("b"), &["a"]),
        person("c"),
    ];
    let first = cluster::build_clusters(&people);
    let second = cluster::build_clusters(&people);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}
