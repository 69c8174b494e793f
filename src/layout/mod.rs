// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layered layout for the family graph.
//!
//! Depths come from the layering engine; within a level, spouses are paired
//! into couple units, units are placed at fixed slot spacing, and a second
//! pass pulls every child to the mean x of its placed parents. The result is
//! deterministic for a given insertion order and idempotent for an unchanged
//! tree.

pub mod depth;
pub mod offsets;

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{FamilyTree, PersonId};

pub use depth::compute_depths;
pub use offsets::{Offset, OffsetMap};

/// Horizontal distance between unit centers within a generation row.
pub const SLOT_GAP: f64 = 48.0;
/// Center-to-center distance between the two members of a couple unit.
pub const COUPLE_GAP: f64 = 24.0;
/// Vertical distance between generation rows.
pub const LEVEL_GAP: f64 = 9.0;

/// Center of a node card in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Base positions for every person, recomputed in full on each graph change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: BTreeMap<PersonId, Position>,
}

impl Layout {
    pub fn positions(&self) -> &BTreeMap<PersonId, Position> {
        &self.positions
    }

    pub fn position(&self, person_id: PersonId) -> Option<Position> {
        self.positions.get(&person_id).copied()
    }

    /// Base position plus the person's manual offset.
    pub fn final_position(&self, person_id: PersonId, offsets: &OffsetMap) -> Option<Position> {
        let base = self.position(person_id)?;
        let offset = offsets.get(person_id);
        Some(Position {
            x: base.x + offset.dx,
            y: base.y + offset.dy,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

enum LevelUnit {
    Single(PersonId),
    Couple(PersonId, PersonId),
}

pub fn layout_tree(tree: &FamilyTree) -> Layout {
    let depths = compute_depths(tree);

    let mut levels = BTreeMap::<usize, Vec<PersonId>>::new();
    for &person_id in tree.order() {
        levels.entry(depths[&person_id]).or_default().push(person_id);
    }

    let mut positions = BTreeMap::<PersonId, Position>::new();
    for (&level, members) in &levels {
        let y = level as f64 * LEVEL_GAP;
        let units = pair_level_units(tree, members, &depths, level);
        for (slot, unit) in units.iter().enumerate() {
            let center = slot as f64 * SLOT_GAP;
            match *unit {
                LevelUnit::Single(person_id) => {
                    positions.insert(person_id, Position { x: center, y });
                }
                LevelUnit::Couple(left, right) => {
                    positions.insert(
                        left,
                        Position {
                            x: center - COUPLE_GAP / 2.0,
                            y,
                        },
                    );
                    positions.insert(
                        right,
                        Position {
                            x: center + COUPLE_GAP / 2.0,
                            y,
                        },
                    );
                }
            }
        }
    }

    // Second pass: center each child on the mean x of its placed parents.
    // Walks insertion order, so a re-centered parent earlier in the order
    // already contributes its final x.
    for &person_id in tree.order() {
        let person = tree.person(person_id).expect("order entries resolve");
        if person.parents().is_empty() {
            continue;
        }
        let xs = person
            .parents()
            .iter()
            .filter_map(|parent_id| positions.get(parent_id).map(|p| p.x))
            .collect::<Vec<_>>();
        if xs.is_empty() {
            continue;
        }
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        if let Some(position) = positions.get_mut(&person_id) {
            position.x = mean;
        }
    }

    // Normalize so every x is >= 0.
    let min_x = positions.values().map(|p| p.x).fold(0.0_f64, f64::min);
    if min_x < 0.0 {
        for position in positions.values_mut() {
            position.x -= min_x;
        }
    }

    Layout { positions }
}

/// Greedily pairs each not-yet-placed person with a spouse on the same level;
/// the earlier-ordered member of a couple takes the left seat.
fn pair_level_units(
    tree: &FamilyTree,
    members: &[PersonId],
    depths: &BTreeMap<PersonId, usize>,
    level: usize,
) -> Vec<LevelUnit> {
    let mut placed = BTreeSet::<PersonId>::new();
    let mut units = Vec::new();
    for &person_id in members {
        if placed.contains(&person_id) {
            continue;
        }
        placed.insert(person_id);
        let partner = tree
            .spouses()
            .iter()
            .filter_map(|pair| pair.partner_of(person_id))
            .find(|candidate| {
                !placed.contains(candidate) && depths.get(candidate) == Some(&level)
            });
        match partner {
            Some(partner) => {
                placed.insert(partner);
                units.push(LevelUnit::Couple(person_id, partner));
            }
            None => units.push(LevelUnit::Single(person_id)),
        }
    }
    units
}
