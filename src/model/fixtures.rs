// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PersonId;
use super::person::{Gender, Person};
use super::spouse::SpousePair;
use super::tree::FamilyTree;

fn add(tree: &mut FamilyTree, name: &str, gender: Gender, parents: &[PersonId]) -> PersonId {
    let id = tree.allocate_id();
    let person = Person::new(id, name, "", gender, parents).expect("demo person");
    tree.insert_person(person);
    id
}

fn marry(tree: &mut FamilyTree, a: PersonId, b: PersonId) {
    tree.link_spouses(SpousePair::new(a, b).expect("demo pair"));
}

/// Built-in three-generation demo family.
pub(crate) fn demo_tree() -> FamilyTree {
    let mut tree = FamilyTree::new();

    let giuseppe = add(&mut tree, "Giuseppe (nonno)", Gender::Male, &[]);
    let anna = add(&mut tree, "Anna (nonna)", Gender::Female, &[]);
    let marco = add(&mut tree, "Marco (padre)", Gender::Male, &[giuseppe, anna]);
    let lucia = add(&mut tree, "Lucia (madre)", Gender::Female, &[]);
    let _renato = add(&mut tree, "Renato (tu)", Gender::Male, &[marco, lucia]);

    marry(&mut tree, giuseppe, anna);
    marry(&mut tree, marco, lucia);

    tree
}
