// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, VecDeque};

use crate::model::{FamilyTree, PersonId};

/// Computes each person's generation depth from the parent graph.
///
/// Kahn-style topological propagation: people with no parents sit at depth 0,
/// everyone else at `1 + max(depth(parent))`. The in-degree counts the raw
/// parent list, so a person with an unresolvable or cyclic parent chain is
/// never released by the queue; such people are pinned to depth 0 at the end
/// instead of failing. That keeps malformed input renderable at the cost of a
/// visually misplaced node.
pub fn compute_depths(tree: &FamilyTree) -> BTreeMap<PersonId, usize> {
    let mut indegree = BTreeMap::<PersonId, usize>::new();
    let mut children = BTreeMap::<PersonId, Vec<PersonId>>::new();
    for &person_id in tree.order() {
        let person = tree.person(person_id).expect("order entries resolve");
        indegree.insert(person_id, person.parents().len());
        children.insert(person_id, Vec::new());
    }
    for &person_id in tree.order() {
        let person = tree.person(person_id).expect("order entries resolve");
        for &parent_id in person.parents() {
            if let Some(list) = children.get_mut(&parent_id) {
                list.push(person_id);
            }
        }
    }

    let mut depth = BTreeMap::<PersonId, usize>::new();
    let mut queue = VecDeque::new();
    for &person_id in tree.order() {
        if indegree[&person_id] == 0 {
            depth.insert(person_id, 0);
            queue.push_back(person_id);
        }
    }

    while let Some(u) = queue.pop_front() {
        let parent_depth = *depth.get(&u).unwrap_or(&0);
        for &v in &children[&u] {
            let entry = depth.entry(v).or_insert(0);
            *entry = (*entry).max(parent_depth + 1);
            let remaining = indegree.get_mut(&v).expect("child is a known person");
            *remaining -= 1;
            if *remaining == 0 {
                queue.push_back(v);
            }
        }
    }

    for &person_id in tree.order() {
        depth.entry(person_id).or_insert(0);
    }

    depth
}
