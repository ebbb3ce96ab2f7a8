//! Person records and the relationship sets that hang off them.
//!
//! Relationship arrays carry set semantics (no duplicates, never the
//! person's own id) but preserve input order: `spouse[0]` decides which
//! spouse a person clusters with during layout.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Person ids are opaque strings; generated ones are v4 uuids.
pub type PersonId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub parents: Vec<PersonId>,
    #[serde(default)]
    pub children: Vec<PersonId>,
    #[serde(default)]
    pub spouse: Vec<PersonId>,
}

impl Person {
    pub fn relationships(&self) -> RelationshipSet {
        RelationshipSet {
            parents: self.parents.clone(),
            children: self.children.clone(),
            spouse: self.spouse.clone(),
        }
    }
}

/// The full desired relationship state of one person. Mutations replace
/// these wholesale; there is no incremental patching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSet {
    #[serde(default)]
    pub parents: Vec<PersonId>,
    #[serde(default)]
    pub children: Vec<PersonId>,
    #[serde(default)]
    pub spouse: Vec<PersonId>,
}

impl RelationshipSet {
    /// Dedupes each array (first occurrence wins) and rejects `subject`
    /// appearing in any of them.
    pub fn normalized(&self, subject: &str) -> Result<RelationshipSet> {
        Ok(RelationshipSet {
            parents: normalize_ids(&self.parents, subject, "parents")?,
            children: normalize_ids(&self.children, subject, "children")?,
            spouse: normalize_ids(&self.spouse, subject, "spouse")?,
        })
    }
}

fn normalize_ids(ids: &[PersonId], subject: &str, field: &'static str) -> Result<Vec<PersonId>> {
    let mut out: Vec<PersonId> = Vec::with_capacity(ids.len());
    for id in ids {
        if id == subject {
            return Err(Error::SelfReference {
                id: subject.to_string(),
                field,
            });
        }
        if !out.iter().any(|seen| seen == id) {
            out.push(id.clone());
        }
    }
    Ok(out)
}

/// Construction request for a new person. An explicit id may be supplied
/// (e.g. by tests or an import); otherwise the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub relationships: RelationshipSet,
}

/// Scalar (non-relationship) fields replaced by an edit. `None` leaves the
/// current value untouched, matching the original update semantics; dates
/// are always replaced because clearing them is a legal edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
