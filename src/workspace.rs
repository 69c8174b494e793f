// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One editing session: the tree plus all of its derived and viewing state.
//!
//! The workspace owns everything a session needs and is passed around
//! explicitly; there is no global state. The layout is recomputed eagerly
//! after every successful mutation so reads never observe a stale layout.

use crate::layout::{layout_tree, Layout, OffsetMap};
use crate::model::{fixtures, FamilyTree, SnapshotError, TreeSnapshot};
use crate::ops::{apply_op, ApplyError, Op, OpOutcome};
use crate::scene::Scene;
use crate::view::Transform;

pub struct Workspace {
    tree: FamilyTree,
    layout: Layout,
    offsets: OffsetMap,
    transform: Transform,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_tree(FamilyTree::new())
    }

    /// A small three-generation starter tree.
    pub fn demo() -> Self {
        Self::with_tree(fixtures::demo_tree())
    }

    pub fn from_snapshot(snapshot: TreeSnapshot) -> Result<Self, SnapshotError> {
        Ok(Self::with_tree(snapshot.into_tree()?))
    }

    fn with_tree(tree: FamilyTree) -> Self {
        let layout = layout_tree(&tree);
        Self {
            tree,
            layout,
            offsets: OffsetMap::new(),
            transform: Transform::new(),
        }
    }

    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn offsets(&self) -> &OffsetMap {
        &self.offsets
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable viewing state, borrowed together for pointer dispatch.
    pub fn view_state_mut(&mut self) -> (&mut Transform, &mut OffsetMap) {
        (&mut self.transform, &mut self.offsets)
    }

    /// Applies one operation and relayouts on success. Offsets are only
    /// pruned, never rewritten, so untouched people keep their drags.
    pub fn apply(&mut self, op: Op) -> Result<OpOutcome, ApplyError> {
        let outcome = apply_op(&mut self.tree, &mut self.offsets, op)?;
        self.layout = layout_tree(&self.tree);
        Ok(outcome)
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.tree, &self.layout, &self.offsets)
    }

    pub fn fit_to_view(&mut self, viewport_w: f64, viewport_h: f64) {
        if let Some(bounds) = self.scene().bounds() {
            self.transform.fit_to_bounds(bounds, viewport_w, viewport_h);
        }
    }

    pub fn reset_view(&mut self) {
        self.transform.reset();
    }

    /// Runs `host_print` against a temporarily fitted view, then restores
    /// the interactive transform.
    pub fn print_with<R>(
        &mut self,
        viewport_w: f64,
        viewport_h: f64,
        host_print: impl FnOnce(&Scene, &Transform) -> R,
    ) -> R {
        let saved = self.transform;
        self.fit_to_view(viewport_w, viewport_h);
        let result = host_print(&self.scene(), &self.transform);
        self.transform = saved;
        result
    }

    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::from_tree(&self.tree)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
