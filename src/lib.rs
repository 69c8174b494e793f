// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parentela — interactive family-tree diagram TUI.
//!
//! The pipeline is model → layout → scene → render: mutations go through
//! `ops`, derived geometry lives in `layout` and `scene`, and the `tui` shell
//! wires pointer and keyboard input into a `workspace::Workspace`.

pub mod layout;
pub mod model;
pub mod ops;
pub mod render;
pub mod scene;
pub mod tui;
pub mod view;
pub mod workspace;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
