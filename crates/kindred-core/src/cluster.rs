//! Layout clusters.
//!
//! A cluster is the unit the hierarchical layout positions: either one
//! person, or a married couple collapsed into a single "union" node so
//! spouses end up side by side in the same generation.

use crate::person::{Person, PersonId};
use rustc_hash::FxHashMap;

/// Canonical, order-independent id for a couple: the lexicographically
/// smaller person id always comes first.
pub fn union_id(a: &str, b: &str) -> String {
    if a < b {
        format!("union-{a}-{b}")
    } else {
        format!("union-{b}-{a}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cluster {
    Single {
        member: PersonId,
    },
    /// Two mutual spouses; `left < right` lexicographically.
    Union {
        left: PersonId,
        right: PersonId,
    },
}

impl Cluster {
    pub fn id(&self) -> String {
        match self {
            Cluster::Single { member } => member.clone(),
            Cluster::Union { left, right } => union_id(left, right),
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Cluster::Union { .. })
    }
}

/// Groups `people` into clusters.
///
/// Single pass in input order: a person not yet assigned pairs with their
/// first-listed spouse when that spouse is a known person, otherwise they
/// stand alone. Dangling spouse ids (absent from `people`) are treated as
/// "no spouse". Re-running on the same input yields identical cluster ids.
pub fn build_clusters(people: &[Person]) -> (Vec<Cluster>, FxHashMap<PersonId, String>) {
    let known: FxHashMap<&str, &Person> =
        people.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut cluster_of: FxHashMap<PersonId, String> = FxHashMap::default();

    for person in people {
        if cluster_of.contains_key(&person.id) {
            continue;
        }

        // The spouse must be a known, still-unassigned person; otherwise
        // this person stands alone (dangling ids and already-paired
        // spouses both degrade to a single cluster).
        let spouse_id = person.spouse.first().filter(|s| {
            s.as_str() != person.id
                && known.contains_key(s.as_str())
                && !cluster_of.contains_key(s.as_str())
        });

        match spouse_id {
            Some(spouse_id) => {
                let cluster = if person.id < *spouse_id {
                    Cluster::Union {
                        left: person.id.clone(),
                        right: spouse_id.clone(),
                    }
                } else {
                    Cluster::Union {
                        left: spouse_id.clone(),
                        right: person.id.clone(),
                    }
                };
                let id = cluster.id();
                cluster_of.insert(person.id.clone(), id.clone());
                cluster_of.insert(spouse_id.clone(), id);
                clusters.push(cluster);
            }
            None => {
                cluster_of.insert(person.id.clone(), person.id.clone());
                clusters.push(Cluster::Single {
                    member: person.id.clone(),
                });
            }
        }
    }

    (clusters, cluster_of)
}
