// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use super::ids::PersonId;
use super::person::Person;
use super::spouse::SpousePair;

/// The family graph: people, their parent references, and spouse pairs.
///
/// `order` preserves insertion order and is what makes layout deterministic;
/// every iteration that affects geometry walks `order`, not the key-sorted
/// people map. The parent relation is assumed acyclic by callers, but nothing
/// here enforces that; the layering engine degrades gracefully on cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyTree {
    people: BTreeMap<PersonId, Person>,
    order: Vec<PersonId>,
    spouses: BTreeSet<SpousePair>,
    next_id: u64,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            people: BTreeMap::new(),
            order: Vec::new(),
            spouses: BTreeSet::new(),
            next_id: 1,
        }
    }

    pub(crate) fn from_parts(
        people: BTreeMap<PersonId, Person>,
        order: Vec<PersonId>,
        spouses: BTreeSet<SpousePair>,
        next_id: u64,
    ) -> Self {
        Self {
            people,
            order,
            spouses,
            next_id,
        }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn contains(&self, person_id: PersonId) -> bool {
        self.people.contains_key(&person_id)
    }

    pub fn person(&self, person_id: PersonId) -> Option<&Person> {
        self.people.get(&person_id)
    }

    pub(crate) fn person_mut(&mut self, person_id: PersonId) -> Option<&mut Person> {
        self.people.get_mut(&person_id)
    }

    pub fn people(&self) -> &BTreeMap<PersonId, Person> {
        &self.people
    }

    pub fn order(&self) -> &[PersonId] {
        &self.order
    }

    pub fn spouses(&self) -> &BTreeSet<SpousePair> {
        &self.spouses
    }

    /// Ids of everyone listing `person_id` as a parent, in insertion order.
    pub fn children_of(&self, person_id: PersonId) -> Vec<PersonId> {
        self.order
            .iter()
            .copied()
            .filter(|&child_id| {
                self.people
                    .get(&child_id)
                    .is_some_and(|child| child.parents().contains(&person_id))
            })
            .collect()
    }

    /// Spouse partners of `person_id`, in normalized pair order.
    pub fn partners_of(&self, person_id: PersonId) -> Vec<PersonId> {
        self.spouses
            .iter()
            .filter_map(|pair| pair.partner_of(person_id))
            .collect()
    }

    /// Value the id counter will issue next; exposed for snapshot export.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn allocate_id(&mut self) -> PersonId {
        let id = PersonId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn insert_person(&mut self, person: Person) {
        let person_id = person.id();
        debug_assert!(!self.people.contains_key(&person_id), "duplicate insert");
        self.order.push(person_id);
        self.people.insert(person_id, person);
    }

    /// Removes a person and every reference to them: insertion order, spouse
    /// pairs, and other people's parent lists.
    pub(crate) fn remove_person(&mut self, person_id: PersonId) -> Option<Person> {
        let removed = self.people.remove(&person_id)?;
        self.order.retain(|&other| other != person_id);
        self.spouses.retain(|pair| !pair.contains(person_id));
        for person in self.people.values_mut() {
            person.remove_parent(person_id);
        }
        Some(removed)
    }

    /// Returns false if the pair was already linked.
    pub(crate) fn link_spouses(&mut self, pair: SpousePair) -> bool {
        self.spouses.insert(pair)
    }

    /// Returns false if the pair was not linked.
    pub(crate) fn unlink_spouses(&mut self, pair: &SpousePair) -> bool {
        self.spouses.remove(pair)
    }
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}
