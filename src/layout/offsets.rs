// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{FamilyTree, PersonId};

/// Manual displacement of one node, in world units, on top of its computed
/// slot. Zero by default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// Per-person manual offsets.
///
/// Offsets are user intent: they survive full layout recomputation and are
/// never baked into base positions. The only thing that clears one is
/// deleting its person (or replacing the tree with a snapshot that no longer
/// contains them).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetMap {
    offsets: BTreeMap<PersonId, Offset>,
}

impl OffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset for a person; zero if never dragged.
    pub fn get(&self, person_id: PersonId) -> Offset {
        self.offsets.get(&person_id).copied().unwrap_or_default()
    }

    /// Accumulates a displacement, creating a zero entry first if needed.
    pub fn nudge(&mut self, person_id: PersonId, dx: f64, dy: f64) {
        let entry = self.offsets.entry(person_id).or_default();
        entry.dx += dx;
        entry.dy += dy;
    }

    pub fn set(&mut self, person_id: PersonId, offset: Offset) {
        self.offsets.insert(person_id, offset);
    }

    pub fn remove(&mut self, person_id: PersonId) -> Option<Offset> {
        self.offsets.remove(&person_id)
    }

    /// Drops offsets for people no longer in the tree.
    pub fn retain_people(&mut self, tree: &FamilyTree) {
        self.offsets.retain(|person_id, _| tree.contains(*person_id));
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero() {
        let offsets = OffsetMap::new();
        assert_eq!(offsets.get(PersonId::new(1)), Offset::default());
        assert!(offsets.is_empty());
    }

    #[test]
    fn nudge_accumulates() {
        let mut offsets = OffsetMap::new();
        let id = PersonId::new(1);
        offsets.nudge(id, 2.0, -1.0);
        offsets.nudge(id, 0.5, 1.0);
        assert_eq!(offsets.get(id), Offset { dx: 2.5, dy: 0.0 });
        assert_eq!(offsets.len(), 1);
    }

    #[test]
    fn nudging_one_person_never_touches_another() {
        let mut offsets = OffsetMap::new();
        offsets.nudge(PersonId::new(1), 3.0, 3.0);
        assert_eq!(offsets.get(PersonId::new(2)), Offset::default());
    }

    #[test]
    fn remove_clears_the_entry() {
        let mut offsets = OffsetMap::new();
        let id = PersonId::new(1);
        offsets.nudge(id, 1.0, 1.0);
        assert!(offsets.remove(id).is_some());
        assert_eq!(offsets.get(id), Offset::default());
    }
}
