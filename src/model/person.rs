// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::ids::PersonId;

/// Gender marker as carried by the snapshot format (`"M"`, `"F"`, or `""`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Snapshot code for this gender.
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unspecified => "",
        }
    }

    /// Parses a snapshot code; anything but `"M"`/`"F"` is `Unspecified`.
    pub fn parse(code: &str) -> Self {
        match code {
            "M" => Self::Male,
            "F" => Self::Female,
            _ => Self::Unspecified,
        }
    }

    /// One-cell symbol for diagram cards.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Male => Some('♂'),
            Self::Female => Some('♀'),
            Self::Unspecified => None,
        }
    }
}

/// Parent references of one person; at most two, always distinct.
pub type ParentList = SmallVec<[PersonId; 2]>;

/// Validates a raw parent sequence into a [`ParentList`].
pub(crate) fn parent_list(parents: &[PersonId]) -> Result<ParentList, PersonError> {
    let mut list = ParentList::new();
    for &parent_id in parents {
        if list.contains(&parent_id) {
            return Err(PersonError::DuplicateParent { parent_id });
        }
        if list.len() == 2 {
            return Err(PersonError::TooManyParents {
                count: parents.len(),
            });
        }
        list.push(parent_id);
    }
    Ok(list)
}

/// One person in the tree.
///
/// A person's existence is independent of having any parent or spouse; the
/// `photo` field is an opaque string (usually a URL or `data:` URL) that the
/// core never interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    photo: String,
    gender: Gender,
    parents: ParentList,
}

impl Person {
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        photo: impl Into<String>,
        gender: Gender,
        parents: &[PersonId],
    ) -> Result<Self, PersonError> {
        Ok(Self {
            id,
            name: name.into().trim().to_owned(),
            photo: photo.into().trim().to_owned(),
            gender,
            parents: parent_list(parents)?,
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn parents(&self) -> &[PersonId] {
        &self.parents
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_owned();
    }

    pub(crate) fn set_photo(&mut self, photo: &str) {
        self.photo = photo.trim().to_owned();
    }

    pub(crate) fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub(crate) fn set_parents(&mut self, parents: ParentList) {
        self.parents = parents;
    }

    pub(crate) fn remove_parent(&mut self, parent_id: PersonId) {
        self.parents.retain(|&mut p| p != parent_id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    DuplicateParent { parent_id: PersonId },
    TooManyParents { count: usize },
}

impl fmt::Display for PersonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateParent { parent_id } => {
                write!(f, "parent {parent_id} listed more than once")
            }
            Self::TooManyParents { count } => {
                write!(f, "a person has at most 2 parents (got {count})")
            }
        }
    }
}

impl std::error::Error for PersonError {}
