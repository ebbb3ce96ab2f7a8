//! Owned family-tree facade.
//!
//! Bundles an in-memory store with the sync engine and the layout
//! transform. Controllers that bring their own storage can skip this and
//! call the free functions in `sync` / `layout` against any `PersonStore`.

use crate::layout::{TreeLayout, compute_tree_layout};
use crate::person::{NewPerson, Person, PersonFields, RelationshipSet};
use crate::store::{InMemoryPersonStore, PersonStore};
use crate::sync;
use crate::Result;

#[derive(Debug, Default, Clone)]
pub struct FamilyTree {
    store: InMemoryPersonStore,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a tree from an existing snapshot without running sync; the
    /// snapshot is trusted to be consistent (e.g. a previous export).
    pub fn from_snapshot(people: Vec<Person>) -> Self {
        let mut store = InMemoryPersonStore::new();
        for person in people {
            store.create(NewPerson {
                id: Some(person.id.clone()),
                name: person.name.clone(),
                gender: person.gender,
                birth_date: person.birth_date,
                death_date: person.death_date,
                avatar: person.avatar.clone(),
                relationships: person.relationships(),
            });
        }
        Self { store }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn person(&self, id: &str) -> Option<Person> {
        self.store.find_by_id(id)
    }

    pub fn people(&self) -> Vec<Person> {
        self.store.find_all()
    }

    pub fn people_by_ids(&self, ids: &[String]) -> Vec<Person> {
        self.store.find_by_ids(ids)
    }

    pub fn create_person(&mut self, new: NewPerson) -> Result<Person> {
        sync::create_person(&mut self.store, new)
    }

    pub fn update_person(
        &mut self,
        id: &str,
        fields: &PersonFields,
        set: &RelationshipSet,
    ) -> Result<Person> {
        sync::update_person(&mut self.store, id, fields, set)
    }

    pub fn apply_relationships(&mut self, id: &str, set: &RelationshipSet) -> Result<Person> {
        sync::apply_relationships(&mut self.store, id, set)
    }

    pub fn detach_person(&mut self, id: &str) -> Result<()> {
        sync::detach_person(&mut self.store, id)
    }

    /// Lays out the current snapshot.
    pub fn compute_layout(&self) -> TreeLayout {
        compute_tree_layout(&self.store.find_all())
    }
}
