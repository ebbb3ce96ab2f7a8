use crate::*;

mod cluster;
mod edges;

/// Bare person with empty relationship arrays.
pub(crate) fn person(id: &str) -> Person {
    Person {
        id: id.to_string(),
        name: id.to_uppercase(),
        gender: Gender::Female,
        birth_date: None,
        death_date: None,
        avatar: None,
        parents: Vec::new(),
        children: Vec::new(),
        spouse: Vec::new(),
    }
}

pub(crate) fn with_spouse(mut p: Person, spouse: &[&str]) -> Person {
    p.spouse = spouse.iter().map(|s| s.to_string()).collect();
    p
}

pub(crate) fn with_children(mut p: Person, children: &[&str]) -> Person {
    p.children = children.iter().map(|s| s.to_string()).collect();
    p
}

pub(crate) fn with_parents(mut p: Person, parents: &[&str]) -> Person {
    p.parents = parents.iter().map(|s| s.to_string()).collect();
    p
}

/// Seeds a store with bare people.
pub(crate) fn seeded_store(ids: &[&str]) -> InMemoryPersonStore {
    let mut store = InMemoryPersonStore::new();
    for id in ids {
        store.create(NewPerson {
            id: Some(id.to_string()),
            name: id.to_uppercase(),
            gender: Gender::Male,
            birth_date: None,
            death_date: None,
            avatar: None,
            relationships: RelationshipSet::default(),
        });
    }
    store
}

/// Asserts the global symmetry invariant over the whole store.
pub(crate) fn assert_symmetric(store: &InMemoryPersonStore) {
    let people = store.find_all();
    let by_id: std::collections::BTreeMap<&str, &Person> =
        people.iter().map(|p| (p.id.as_str(), p)).collect();

    for a in &people {
        for b_id in &a.children {
            if let Some(b) = by_id.get(b_id.as_str()) {
                assert!(
                    b.parents.contains(&a.id),
                    "{} lists child {} but is not mirrored in its parents",
                    a.id,
                    b_id
                );
            }
        }
        for b_id in &a.parents {
            if let Some(b) = by_id.get(b_id.as_str()) {
                assert!(
                    b.children.contains(&a.id),
                    "{} lists parent {} but is not mirrored in its children",
                    a.id,
                    b_id
                );
            }
        }
        for b_id in &a.spouse {
            if let Some(b) = by_id.get(b_id.as_str()) {
                assert!(
                    b.spouse.contains(&a.id),
                    "{} lists spouse {} but the booking is one-sided",
                    a.id,
                    b_id
                );
            }
        }
    }
}
