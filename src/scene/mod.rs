// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The scene: node cards and routed links at final world positions.
//!
//! `Scene::build` is the pure compute step — no side effects, no display
//! surface. The paint step (`crate::render`) only reads its output.

pub mod geometry;
pub mod links;

use std::collections::BTreeMap;

use crate::layout::{Layout, OffsetMap};
use crate::model::{FamilyTree, Gender, PersonId};

pub use geometry::{Point, Rect};
pub use links::{route_links, Link, LinkKind};

/// Node card width in world units.
pub const NODE_W: f64 = 21.0;
/// Node card height in world units.
pub const NODE_H: f64 = 5.0;

/// One node card at its final (base + offset) position.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub person_id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub has_photo: bool,
    pub rect: Rect,
}

/// Everything the painter needs, in paint order (nodes follow `order`).
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    links: Vec<Link>,
}

impl Scene {
    pub fn build(tree: &FamilyTree, layout: &Layout, offsets: &OffsetMap) -> Self {
        let mut rects = BTreeMap::<PersonId, Rect>::new();
        let mut nodes = Vec::with_capacity(tree.len());
        for &person_id in tree.order() {
            let Some(position) = layout.final_position(person_id, offsets) else {
                continue;
            };
            let person = tree.person(person_id).expect("order entries resolve");
            let rect = Rect::from_center(Point::new(position.x, position.y), NODE_W, NODE_H);
            rects.insert(person_id, rect);
            nodes.push(SceneNode {
                person_id,
                name: person.name().to_owned(),
                gender: person.gender(),
                has_photo: !person.photo().is_empty(),
                rect,
            });
        }
        let links = route_links(tree, &rects);
        Self { nodes, links }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node(&self, person_id: PersonId) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.person_id == person_id)
    }

    /// Bounding box of all node cards; `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        let mut nodes = self.nodes.iter();
        let first = nodes.next()?.rect;
        Some(nodes.fold(first, |acc, node| acc.union(&node.rect)))
    }

    /// Topmost node under a world point. Later nodes paint over earlier ones,
    /// so the search runs back-to-front.
    pub fn hit_test(&self, world: Point) -> Option<PersonId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.rect.contains(world))
            .map(|node| node.person_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_tree;
    use crate::model::{Gender, Person};

    fn add(tree: &mut FamilyTree, name: &str, parents: &[PersonId]) -> PersonId {
        let id = tree.allocate_id();
        let person = Person::new(id, name, "", Gender::Unspecified, parents).expect("person");
        tree.insert_person(person);
        id
    }

    fn scene_for(tree: &FamilyTree, offsets: &OffsetMap) -> Scene {
        Scene::build(tree, &layout_tree(tree), offsets)
    }

    #[test]
    fn nodes_follow_insertion_order() {
        let mut tree = FamilyTree::new();
        let a = add(&mut tree, "A", &[]);
        let b = add(&mut tree, "B", &[]);
        let scene = scene_for(&tree, &OffsetMap::new());
        let ids = scene.nodes().iter().map(|n| n.person_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn offsets_shift_cards_without_touching_layout() {
        let mut tree = FamilyTree::new();
        let a = add(&mut tree, "A", &[]);
        let layout = layout_tree(&tree);
        let mut offsets = OffsetMap::new();
        offsets.nudge(a, 10.0, 4.0);
        let plain = Scene::build(&tree, &layout, &OffsetMap::new());
        let shifted = Scene::build(&tree, &layout, &offsets);
        let before = plain.node(a).expect("node").rect;
        let after = shifted.node(a).expect("node").rect;
        assert_eq!(after.x, before.x + 10.0);
        assert_eq!(after.y, before.y + 4.0);
    }

    #[test]
    fn hit_test_prefers_topmost_card() {
        let mut tree = FamilyTree::new();
        let a = add(&mut tree, "A", &[]);
        let b = add(&mut tree, "B", &[]);
        // drag B exactly onto A
        let mut offsets = OffsetMap::new();
        let layout = layout_tree(&tree);
        let pa = layout.position(a).expect("a");
        let pb = layout.position(b).expect("b");
        offsets.nudge(b, pa.x - pb.x, pa.y - pb.y);
        let scene = Scene::build(&tree, &layout, &offsets);
        let center = scene.node(a).expect("node").rect.center();
        assert_eq!(scene.hit_test(center), Some(b));
    }

    #[test]
    fn hit_test_misses_background() {
        let mut tree = FamilyTree::new();
        let _a = add(&mut tree, "A", &[]);
        let scene = scene_for(&tree, &OffsetMap::new());
        assert_eq!(scene.hit_test(Point::new(-100.0, -100.0)), None);
    }

    #[test]
    fn bounds_cover_all_cards() {
        let mut tree = FamilyTree::new();
        let a = add(&mut tree, "A", &[]);
        let b = add(&mut tree, "B", &[]);
        let scene = scene_for(&tree, &OffsetMap::new());
        let bounds = scene.bounds().expect("bounds");
        for node in scene.nodes() {
            assert!(bounds.contains(node.rect.center()));
        }
        let _ = (a, b);
    }

    #[test]
    fn empty_scene_has_no_bounds() {
        let tree = FamilyTree::new();
        let scene = scene_for(&tree, &OffsetMap::new());
        assert!(scene.bounds().is_none());
        assert!(scene.nodes().is_empty());
        assert!(scene.links().is_empty());
    }
}
