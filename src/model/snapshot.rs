// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON wire format for whole-tree import/export.
//!
//! Import always replaces the model wholesale; a snapshot that fails
//! validation is rejected with a descriptive reason and the current tree is
//! left untouched. Dangling parent/spouse references are deliberately NOT
//! rejected here — they are skipped at layout/render time instead, so
//! partially-deleted exports keep loading.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::PersonId;
use super::person::{Gender, Person, PersonError};
use super::spouse::SpousePair;
use super::tree::FamilyTree;

/// Wholesale import/export record for a family tree.
///
/// Field shapes match the historical browser export: `people` keyed by
/// decimal-string id, `order` as the insertion sequence, and an optional
/// `next_id` (older exports omitted it; it is recovered as `max(id) + 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub people: BTreeMap<String, PersonRecord>,
    #[serde(default)]
    pub spouses: Vec<(String, String)>,
    pub order: Vec<String>,
    #[serde(default)]
    pub next_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub parents: Vec<String>,
}

impl TreeSnapshot {
    pub fn from_tree(tree: &FamilyTree) -> Self {
        let people = tree
            .people()
            .iter()
            .map(|(person_id, person)| {
                (
                    person_id.to_string(),
                    PersonRecord {
                        id: person_id.to_string(),
                        name: person.name().to_owned(),
                        photo: person.photo().to_owned(),
                        gender: person.gender().code().to_owned(),
                        parents: person.parents().iter().map(PersonId::to_string).collect(),
                    },
                )
            })
            .collect();
        let spouses = tree
            .spouses()
            .iter()
            .map(|pair| {
                let (lo, hi) = pair.members();
                (lo.to_string(), hi.to_string())
            })
            .collect();
        let order = tree.order().iter().map(PersonId::to_string).collect();
        Self {
            people,
            spouses,
            order,
            next_id: Some(tree.next_id()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|err| SnapshotError::Json {
            reason: err.to_string(),
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("snapshot is plain JSON data")
    }

    /// Validates the snapshot and builds the tree it describes.
    pub fn into_tree(self) -> Result<FamilyTree, SnapshotError> {
        let mut people = BTreeMap::new();
        for (key, record) in &self.people {
            let key_id = parse_id(key)?;
            let record_id = parse_id(&record.id)?;
            if key_id != record_id {
                return Err(SnapshotError::KeyMismatch {
                    key: key_id,
                    id: record_id,
                });
            }
            let mut parents = Vec::with_capacity(record.parents.len());
            for raw in &record.parents {
                parents.push(parse_id(raw)?);
            }
            let person = Person::new(
                key_id,
                &record.name,
                &record.photo,
                Gender::parse(&record.gender),
                &parents,
            )
            .map_err(|reason| SnapshotError::InvalidParents {
                person_id: key_id,
                reason,
            })?;
            people.insert(key_id, person);
        }

        let mut order = Vec::with_capacity(self.order.len());
        let mut seen = BTreeSet::new();
        for raw in &self.order {
            let person_id = parse_id(raw)?;
            if !seen.insert(person_id) {
                return Err(SnapshotError::DuplicateOrderEntry { person_id });
            }
            if !people.contains_key(&person_id) {
                return Err(SnapshotError::UnknownOrderEntry { person_id });
            }
            order.push(person_id);
        }
        for &person_id in people.keys() {
            if !seen.contains(&person_id) {
                return Err(SnapshotError::MissingOrderEntry { person_id });
            }
        }

        let mut spouses = BTreeSet::new();
        for (raw_a, raw_b) in &self.spouses {
            let a = parse_id(raw_a)?;
            let b = parse_id(raw_b)?;
            let pair = SpousePair::new(a, b)
                .map_err(|_| SnapshotError::SelfSpouse { person_id: a })?;
            spouses.insert(pair);
        }

        let max_id = people.keys().map(|id| id.value()).max().unwrap_or(0);
        let next_id = match self.next_id {
            Some(value) if value > max_id => value,
            _ => max_id + 1,
        };

        Ok(FamilyTree::from_parts(people, order, spouses, next_id))
    }
}

fn parse_id(raw: &str) -> Result<PersonId, SnapshotError> {
    raw.parse().map_err(|_| SnapshotError::InvalidId {
        raw: raw.to_owned(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    Json { reason: String },
    InvalidId { raw: String },
    KeyMismatch { key: PersonId, id: PersonId },
    InvalidParents { person_id: PersonId, reason: PersonError },
    DuplicateOrderEntry { person_id: PersonId },
    UnknownOrderEntry { person_id: PersonId },
    MissingOrderEntry { person_id: PersonId },
    SelfSpouse { person_id: PersonId },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { reason } => write!(f, "invalid snapshot JSON: {reason}"),
            Self::InvalidId { raw } => write!(f, "invalid person id '{raw}'"),
            Self::KeyMismatch { key, id } => {
                write!(f, "people entry keyed {key} carries id {id}")
            }
            Self::InvalidParents { person_id, reason } => {
                write!(f, "invalid parents for person {person_id}: {reason}")
            }
            Self::DuplicateOrderEntry { person_id } => {
                write!(f, "person {person_id} appears twice in order")
            }
            Self::UnknownOrderEntry { person_id } => {
                write!(f, "order references unknown person {person_id}")
            }
            Self::MissingOrderEntry { person_id } => {
                write!(f, "person {person_id} is missing from order")
            }
            Self::SelfSpouse { person_id } => {
                write!(f, "person {person_id} cannot be their own spouse")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
