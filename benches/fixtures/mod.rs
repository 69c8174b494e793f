// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use parentela::layout::OffsetMap;
use parentela::model::{FamilyTree, Gender, PersonId};
use parentela::ops::{apply_op, Op, OpOutcome};

fn add(
    tree: &mut FamilyTree,
    offsets: &mut OffsetMap,
    name: String,
    parents: (Option<PersonId>, Option<PersonId>),
    spouse: Option<PersonId>,
) -> PersonId {
    let outcome = apply_op(
        tree,
        offsets,
        Op::AddPerson {
            name,
            photo: String::new(),
            gender: Gender::Unspecified,
            parent_a: parents.0,
            parent_b: parents.1,
            spouse,
        },
    )
    .expect("fixture person");
    match outcome {
        OpOutcome::Added { person_id } => person_id,
        other => panic!("unexpected outcome {other:?}"),
    }
}

/// Builds `generations` generations starting from `couples` founding couples;
/// every couple has two children and children pair up into the next row of
/// couples, so the generation width stays constant.
pub fn build_family(generations: usize, couples: usize) -> FamilyTree {
    assert!(generations >= 1 && couples >= 1, "degenerate fixture");

    let mut tree = FamilyTree::new();
    let mut offsets = OffsetMap::new();

    let mut row: Vec<(PersonId, PersonId)> = (0..couples)
        .map(|i| {
            let a = add(&mut tree, &mut offsets, format!("g0c{i}a"), (None, None), None);
            let b = add(&mut tree, &mut offsets, format!("g0c{i}b"), (None, None), Some(a));
            (a, b)
        })
        .collect();

    for generation in 1..generations {
        let mut children = Vec::with_capacity(row.len() * 2);
        for (i, &(father, mother)) in row.iter().enumerate() {
            for suffix in ["a", "b"] {
                children.push(add(
                    &mut tree,
                    &mut offsets,
                    format!("g{generation}c{i}{suffix}"),
                    (Some(father), Some(mother)),
                    None,
                ));
            }
        }
        row = children
            .chunks_exact(2)
            .map(|pair| {
                apply_op(
                    &mut tree,
                    &mut offsets,
                    Op::LinkSpouses {
                        a: pair[0],
                        b: pair[1],
                    },
                )
                .expect("fixture marriage");
                (pair[0], pair[1])
            })
            .collect();
    }

    tree
}
