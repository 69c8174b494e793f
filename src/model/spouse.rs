// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::PersonId;

/// An unordered spouse pair, normalized so `(a, b)` and `(b, a)` compare equal.
///
/// The pair never relates a person to itself; normalization happens at
/// construction so a `BTreeSet<SpousePair>` cannot hold duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpousePair {
    lo: PersonId,
    hi: PersonId,
}

impl SpousePair {
    pub fn new(a: PersonId, b: PersonId) -> Result<Self, SpousePairError> {
        if a == b {
            return Err(SpousePairError::SelfPair { person_id: a });
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { lo, hi })
    }

    /// Both members, smaller id first.
    pub fn members(self) -> (PersonId, PersonId) {
        (self.lo, self.hi)
    }

    pub fn contains(self, person_id: PersonId) -> bool {
        self.lo == person_id || self.hi == person_id
    }

    /// The other member, if `person_id` is part of this pair.
    pub fn partner_of(self, person_id: PersonId) -> Option<PersonId> {
        if self.lo == person_id {
            Some(self.hi)
        } else if self.hi == person_id {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl fmt::Display for SpousePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpousePairError {
    SelfPair { person_id: PersonId },
}

impl fmt::Display for SpousePairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfPair { person_id } => {
                write!(f, "person {person_id} cannot be their own spouse")
            }
        }
    }
}

impl std::error::Error for SpousePairError {}
