// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Identifier of a person within a family tree.
///
/// Ids are issued by the tree's monotonic counter, are never reused within a
/// session, and are immutable once assigned. The JSON snapshot format carries
/// them as decimal strings (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(u64);

impl PersonId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = ParsePersonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePersonIdError::Empty);
        }
        s.parse::<u64>()
            .map(PersonId)
            .map_err(|_| ParsePersonIdError::NotANumber { raw: s.to_owned() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePersonIdError {
    Empty,
    NotANumber { raw: String },
}

impl fmt::Display for ParsePersonIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "person id must not be empty"),
            Self::NotANumber { raw } => write!(f, "person id '{raw}' is not a decimal number"),
        }
    }
}

impl std::error::Error for ParsePersonIdError {}
