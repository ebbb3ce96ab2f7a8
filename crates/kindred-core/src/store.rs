//! Person storage.
//!
//! The core treats storage as an opaque id-keyed table of `Person` records
//! (arena-style: all cross-references go through ids, never through shared
//! ownership). `PersonStore` is the collaborator surface the sync and
//! layout code consumes; `InMemoryPersonStore` is the bundled
//! implementation, backed by an insertion-ordered map so snapshots and
//! layouts are deterministic.

use crate::person::{NewPerson, Person, PersonFields, PersonId};
use indexmap::IndexMap;

/// Which relationship array a bulk mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipField {
    Parents,
    Children,
    Spouse,
}

impl RelationshipField {
    fn of<'a>(&self, person: &'a mut Person) -> &'a mut Vec<PersonId> {
        match self {
            RelationshipField::Parents => &mut person.parents,
            RelationshipField::Children => &mut person.children,
            RelationshipField::Spouse => &mut person.spouse,
        }
    }
}

pub trait PersonStore {
    fn find_all(&self) -> Vec<Person>;
    fn find_by_ids(&self, ids: &[PersonId]) -> Vec<Person>;
    fn find_by_id(&self, id: &str) -> Option<Person>;

    /// Creates the record, assigning a fresh id when the request carries
    /// none. Returns the stored person.
    fn create(&mut self, new: NewPerson) -> Person;

    /// Replaces scalar fields on an existing record. Unknown ids are a
    /// no-op (validation is the caller's concern).
    fn update_fields(&mut self, id: &str, fields: &PersonFields);

    /// Replaces one relationship array on an existing record.
    fn replace_relationship_array(&mut self, id: &str, field: RelationshipField, ids: Vec<PersonId>);

    fn delete(&mut self, id: &str) -> bool;

    /// Set-union add of `value` to `field` on every record in `ids`.
    /// Ids that resolve to no record are silently skipped.
    fn bulk_add_to_relationship_array(
        &mut self,
        ids: &[PersonId],
        field: RelationshipField,
        value: &str,
    );

    /// Removes `id` from the parents, children and spouse arrays of every
    /// record in the store (the global Detach pull).
    fn bulk_remove_from_all_relationship_arrays(&mut self, id: &str);
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPersonStore {
    people: IndexMap<PersonId, Person>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl PersonStore for InMemoryPersonStore {
    fn find_all(&self) -> Vec<Person> {
        self.people.values().cloned().collect()
    }

    fn find_by_ids(&self, ids: &[PersonId]) -> Vec<Person> {
        ids.iter()
            .filter_map(|id| self.people.get(id).cloned())
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Person> {
        self.people.get(id).cloned()
    }

    fn create(&mut self, new: NewPerson) -> Person {
        let id = new
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let person = Person {
            id: id.clone(),
            name: new.name,
            gender: new.gender,
            birth_date: new.birth_date,
            death_date: new.death_date,
            avatar: new.avatar,
            parents: new.relationships.parents,
            children: new.relationships.children,
            spouse: new.relationships.spouse,
        };
        self.people.insert(id, person.clone());
        person
    }

    fn update_fields(&mut self, id: &str, fields: &PersonFields) {
        let Some(person) = self.people.get_mut(id) else {
            return;
        };
        if let Some(name) = &fields.name {
            person.name = name.clone();
        }
        if let Some(gender) = fields.gender {
            person.gender = gender;
        }
        person.birth_date = fields.birth_date;
        person.death_date = fields.death_date;
        if let Some(avatar) = &fields.avatar {
            person.avatar = Some(avatar.clone());
        }
    }

    fn replace_relationship_array(
        &mut self,
        id: &str,
        field: RelationshipField,
        ids: Vec<PersonId>,
    ) {
        if let Some(person) = self.people.get_mut(id) {
            *field.of(person) = ids;
        }
    }

    fn delete(&mut self, id: &str) -> bool {
        // shift_remove keeps the remaining insertion order intact.
        self.people.shift_remove(id).is_some()
    }

    fn bulk_add_to_relationship_array(
        &mut self,
        ids: &[PersonId],
        field: RelationshipField,
        value: &str,
    ) {
        for id in ids {
            let Some(person) = self.people.get_mut(id) else {
                continue;
            };
            let array = field.of(person);
            if !array.iter().any(|existing| existing == value) {
                array.push(value.to_string());
            }
        }
    }

    fn bulk_remove_from_all_relationship_arrays(&mut self, id: &str) {
        for person in self.people.values_mut() {
            person.parents.retain(|p| p != id);
            person.children.retain(|c| c != id);
            person.spouse.retain(|s| s != id);
        }
    }
}
