//! Relationship consistency engine.
//!
//! Relationships are stored redundantly on both endpoints: a parent-child
//! link is mirrored in the parent's `children` and the child's `parents`,
//! and spouse links are symmetric. Every mutation here restores the
//! global invariant with a two-phase Detach → Attach pass:
//!
//! 1. Detach: unconditionally pull the subject's id out of every other
//!    record's relationship arrays.
//! 2. Attach: mirror the subject's new sets onto the referenced records
//!    with set-union adds.
//!
//! Both phases are idempotent (removing an absent id and re-adding a
//! present one are no-ops), so an interrupted pass can simply be retried.
//! Ids referencing unknown people are ignored; id validation belongs to
//! the caller, not here.

use crate::person::{NewPerson, Person, PersonFields, RelationshipSet};
use crate::store::{PersonStore, RelationshipField};
use crate::{Error, Result};
use tracing::debug;

/// Replaces `id`'s relationship sets and restores bidirectional
/// consistency across the store.
pub fn apply_relationships(
    store: &mut dyn PersonStore,
    id: &str,
    set: &RelationshipSet,
) -> Result<Person> {
    if store.find_by_id(id).is_none() {
        return Err(Error::PersonNotFound { id: id.to_string() });
    }
    let set = set.normalized(id)?;

    debug!(
        person = id,
        parents = set.parents.len(),
        children = set.children.len(),
        spouse = set.spouse.len(),
        "applying relationship sets"
    );

    detach(store, id);
    store.replace_relationship_array(id, RelationshipField::Parents, set.parents.clone());
    store.replace_relationship_array(id, RelationshipField::Children, set.children.clone());
    store.replace_relationship_array(id, RelationshipField::Spouse, set.spouse.clone());
    attach(store, id, &set);

    store
        .find_by_id(id)
        .ok_or_else(|| Error::PersonNotFound { id: id.to_string() })
}

/// Creates a person and mirrors the requested relationships onto the
/// referenced records.
pub fn create_person(store: &mut dyn PersonStore, new: NewPerson) -> Result<Person> {
    if let Some(id) = &new.id {
        new.relationships.normalized(id)?;
    }

    let person = store.create(new);
    // With a generated id the request cannot self-reference; normalize
    // again now that the id is known to dedupe the stored arrays.
    let set = person.relationships().normalized(&person.id)?;
    store.replace_relationship_array(&person.id, RelationshipField::Parents, set.parents.clone());
    store.replace_relationship_array(&person.id, RelationshipField::Children, set.children.clone());
    store.replace_relationship_array(&person.id, RelationshipField::Spouse, set.spouse.clone());
    attach(store, &person.id, &set);

    debug!(person = %person.id, "created person");
    store.find_by_id(&person.id).ok_or_else(|| Error::PersonNotFound {
        id: person.id.clone(),
    })
}

/// Edits scalar fields and replaces the relationship sets in one unit of
/// work: detach, update, re-attach.
pub fn update_person(
    store: &mut dyn PersonStore,
    id: &str,
    fields: &PersonFields,
    set: &RelationshipSet,
) -> Result<Person> {
    if store.find_by_id(id).is_none() {
        return Err(Error::PersonNotFound { id: id.to_string() });
    }
    store.update_fields(id, fields);
    apply_relationships(store, id, set)
}

/// Deletes a person: global detach, then drop the record itself.
pub fn detach_person(store: &mut dyn PersonStore, id: &str) -> Result<()> {
    if store.find_by_id(id).is_none() {
        return Err(Error::PersonNotFound { id: id.to_string() });
    }
    detach(store, id);
    store.delete(id);
    debug!(person = id, "detached and removed person");
    Ok(())
}

fn detach(store: &mut dyn PersonStore, id: &str) {
    store.bulk_remove_from_all_relationship_arrays(id);
}

fn attach(store: &mut dyn PersonStore, id: &str, set: &RelationshipSet) {
    // Mirror each direction: my parents gain me as a child, my children
    // gain me as a parent, my spouses gain me as a spouse.
    store.bulk_add_to_relationship_array(&set.parents, RelationshipField::Children, id);
    store.bulk_add_to_relationship_array(&set.children, RelationshipField::Parents, id);
    store.bulk_add_to_relationship_array(&set.spouse, RelationshipField::Spouse, id);
}
