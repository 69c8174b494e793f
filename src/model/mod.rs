// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A family tree holds people (with 0–2 parent references each) and an
//! unordered spouse-pair set; snapshots are the JSON wire shape used for
//! wholesale import/export.

pub(crate) mod fixtures;
pub mod ids;
pub mod person;
pub mod photo;
pub mod snapshot;
pub mod spouse;
pub mod tree;

pub use ids::{ParsePersonIdError, PersonId};
pub use person::{Gender, ParentList, Person, PersonError};
pub use snapshot::{PersonRecord, SnapshotError, TreeSnapshot};
pub use spouse::{SpousePair, SpousePairError};
pub use tree::FamilyTree;
