// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutating operations on the family tree.
//!
//! Every mutation goes through [`apply_op`], which validates the whole
//! operation before touching the tree. A failed apply leaves both the tree
//! and the offset map exactly as they were.

use std::fmt;

use crate::layout::OffsetMap;
use crate::model::person::parent_list;
use crate::model::{
    FamilyTree, Gender, Person, PersonError, PersonId, SnapshotError, SpousePair, TreeSnapshot,
};

/// One mutation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    AddPerson {
        name: String,
        photo: String,
        gender: Gender,
        parent_a: Option<PersonId>,
        parent_b: Option<PersonId>,
        spouse: Option<PersonId>,
    },
    UpdatePerson {
        person_id: PersonId,
        patch: PersonPatch,
    },
    RemovePerson {
        person_id: PersonId,
    },
    LinkSpouses {
        a: PersonId,
        b: PersonId,
    },
    UnlinkSpouses {
        a: PersonId,
        b: PersonId,
    },
    ReplaceTree {
        snapshot: TreeSnapshot,
    },
}

/// Partial update for one person; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<Gender>,
    pub parents: Option<Vec<PersonId>>,
}

/// What a successful apply did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    Added { person_id: PersonId },
    Updated { person_id: PersonId },
    Removed { person_id: PersonId },
    Linked,
    Unlinked,
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    UnknownPerson { person_id: PersonId },
    InvalidPerson { reason: PersonError },
    SelfParent { person_id: PersonId },
    SelfSpouse { person_id: PersonId },
    AlreadyLinked { a: PersonId, b: PersonId },
    NotLinked { a: PersonId, b: PersonId },
    InvalidSnapshot { reason: SnapshotError },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPerson { person_id } => write!(f, "no person with id {person_id}"),
            Self::InvalidPerson { reason } => write!(f, "{reason}"),
            Self::SelfParent { person_id } => {
                write!(f, "person {person_id} cannot be their own parent")
            }
            Self::SelfSpouse { person_id } => {
                write!(f, "person {person_id} cannot be their own spouse")
            }
            Self::AlreadyLinked { a, b } => write!(f, "{a} and {b} are already spouses"),
            Self::NotLinked { a, b } => write!(f, "{a} and {b} are not spouses"),
            Self::InvalidSnapshot { reason } => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Applies one operation, keeping the offset map consistent with the tree.
pub fn apply_op(
    tree: &mut FamilyTree,
    offsets: &mut OffsetMap,
    op: Op,
) -> Result<OpOutcome, ApplyError> {
    match op {
        Op::AddPerson {
            name,
            photo,
            gender,
            parent_a,
            parent_b,
            spouse,
        } => {
            let parents: Vec<PersonId> =
                parent_a.into_iter().chain(parent_b).collect();
            for &parent_id in &parents {
                require_person(tree, parent_id)?;
            }
            // surfaces a duplicate-parent error before the id is allocated
            parent_list(&parents).map_err(|reason| ApplyError::InvalidPerson { reason })?;
            if let Some(spouse_id) = spouse {
                require_person(tree, spouse_id)?;
            }

            let person_id = tree.allocate_id();
            let person = Person::new(person_id, name, photo, gender, &parents)
                .map_err(|reason| ApplyError::InvalidPerson { reason })?;
            tree.insert_person(person);
            if let Some(spouse_id) = spouse {
                let pair = SpousePair::new(person_id, spouse_id)
                    .map_err(|_| ApplyError::SelfSpouse { person_id })?;
                tree.link_spouses(pair);
            }
            Ok(OpOutcome::Added { person_id })
        }
        Op::UpdatePerson { person_id, patch } => {
            require_person(tree, person_id)?;
            let parents = match &patch.parents {
                Some(raw) => {
                    if raw.contains(&person_id) {
                        return Err(ApplyError::SelfParent { person_id });
                    }
                    for &parent_id in raw {
                        require_person(tree, parent_id)?;
                    }
                    Some(
                        parent_list(raw)
                            .map_err(|reason| ApplyError::InvalidPerson { reason })?,
                    )
                }
                None => None,
            };

            let person = tree.person_mut(person_id).expect("checked above");
            if let Some(name) = &patch.name {
                person.set_name(name);
            }
            if let Some(photo) = &patch.photo {
                person.set_photo(photo);
            }
            if let Some(gender) = patch.gender {
                person.set_gender(gender);
            }
            if let Some(parents) = parents {
                person.set_parents(parents);
            }
            Ok(OpOutcome::Updated { person_id })
        }
        Op::RemovePerson { person_id } => {
            if tree.remove_person(person_id).is_none() {
                return Err(ApplyError::UnknownPerson { person_id });
            }
            offsets.remove(person_id);
            Ok(OpOutcome::Removed { person_id })
        }
        Op::LinkSpouses { a, b } => {
            require_person(tree, a)?;
            require_person(tree, b)?;
            let pair = SpousePair::new(a, b).map_err(|_| ApplyError::SelfSpouse { person_id: a })?;
            if !tree.link_spouses(pair) {
                return Err(ApplyError::AlreadyLinked { a, b });
            }
            Ok(OpOutcome::Linked)
        }
        Op::UnlinkSpouses { a, b } => {
            require_person(tree, a)?;
            require_person(tree, b)?;
            let pair = SpousePair::new(a, b).map_err(|_| ApplyError::SelfSpouse { person_id: a })?;
            if !tree.unlink_spouses(&pair) {
                return Err(ApplyError::NotLinked { a, b });
            }
            Ok(OpOutcome::Unlinked)
        }
        Op::ReplaceTree { snapshot } => {
            let replacement = snapshot
                .into_tree()
                .map_err(|reason| ApplyError::InvalidSnapshot { reason })?;
            *tree = replacement;
            offsets.retain_people(tree);
            Ok(OpOutcome::Replaced)
        }
    }
}

fn require_person(tree: &FamilyTree, person_id: PersonId) -> Result<(), ApplyError> {
    if tree.contains(person_id) {
        Ok(())
    } else {
        Err(ApplyError::UnknownPerson { person_id })
    }
}
