// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edge routing from final node rectangles.
//!
//! Every unresolvable reference (a parent or spouse id with no rectangle) is
//! skipped silently; partially-imported or partially-deleted graphs must keep
//! rendering.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::{FamilyTree, PersonId, SpousePair};

use super::geometry::{Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum LinkKind {
    /// One parent to one child, bottom-center to top-center.
    ParentChild { parent: PersonId, child: PersonId },
    /// Both parents are a registered spouse pair; the child hangs off the
    /// midpoint of their spousal connector instead of getting two edges.
    FamilyJoint {
        parent_a: PersonId,
        parent_b: PersonId,
        child: PersonId,
    },
    /// Horizontal connector between the facing edges of a registered pair.
    Spouse { a: PersonId, b: PersonId },
    /// Cosmetic connector between two x-adjacent children of the same
    /// parent set.
    Sibling { left: PersonId, right: PersonId },
}

/// A renderable connector: an orthogonal polyline in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub kind: LinkKind,
    pub points: Vec<Point>,
}

pub fn route_links(tree: &FamilyTree, rects: &BTreeMap<PersonId, Rect>) -> Vec<Link> {
    let mut links = Vec::new();
    route_spouse_links(tree, rects, &mut links);
    route_parent_links(tree, rects, &mut links);
    route_sibling_links(tree, rects, &mut links);
    links
}

fn route_spouse_links(tree: &FamilyTree, rects: &BTreeMap<PersonId, Rect>, out: &mut Vec<Link>) {
    for pair in tree.spouses() {
        let (a, b) = pair.members();
        let (Some(rect_a), Some(rect_b)) = (rects.get(&a), rects.get(&b)) else {
            continue;
        };
        let (left, right) = if rect_a.center().x <= rect_b.center().x {
            (rect_a, rect_b)
        } else {
            (rect_b, rect_a)
        };
        out.push(Link {
            kind: LinkKind::Spouse { a, b },
            points: vec![left.right_center(), right.left_center()],
        });
    }
}

fn route_parent_links(tree: &FamilyTree, rects: &BTreeMap<PersonId, Rect>, out: &mut Vec<Link>) {
    for &child in tree.order() {
        let Some(child_rect) = rects.get(&child) else {
            continue;
        };
        let person = tree.person(child).expect("order entries resolve");
        let parents = person.parents();

        // Family-joint routing wins whenever both parents are present,
        // spouse-linked, and resolvable.
        if let [parent_a, parent_b] = parents {
            if let Ok(pair) = SpousePair::new(*parent_a, *parent_b) {
                if tree.spouses().contains(&pair) {
                    if let (Some(rect_a), Some(rect_b)) =
                        (rects.get(parent_a), rects.get(parent_b))
                    {
                        let joint = spousal_midpoint(rect_a, rect_b);
                        out.push(Link {
                            kind: LinkKind::FamilyJoint {
                                parent_a: *parent_a,
                                parent_b: *parent_b,
                                child,
                            },
                            points: elbow(joint, child_rect.top_center()),
                        });
                        continue;
                    }
                }
            }
        }

        for &parent in parents {
            let Some(parent_rect) = rects.get(&parent) else {
                continue;
            };
            out.push(Link {
                kind: LinkKind::ParentChild { parent, child },
                points: elbow(parent_rect.bottom_center(), child_rect.top_center()),
            });
        }
    }
}

fn route_sibling_links(tree: &FamilyTree, rects: &BTreeMap<PersonId, Rect>, out: &mut Vec<Link>) {
    let mut groups = BTreeMap::<Vec<PersonId>, Vec<PersonId>>::new();
    for &person_id in tree.order() {
        if !rects.contains_key(&person_id) {
            continue;
        }
        let person = tree.person(person_id).expect("order entries resolve");
        if person.parents().is_empty() {
            continue;
        }
        let mut key = person.parents().to_vec();
        key.sort();
        groups.entry(key).or_default().push(person_id);
    }

    for (_, mut members) in groups {
        if members.len() < 2 {
            continue;
        }
        members.sort_by(|a, b| {
            let ax = rects[a].center().x;
            let bx = rects[b].center().x;
            ax.partial_cmp(&bx).unwrap_or(Ordering::Equal).then(a.cmp(b))
        });
        // adjacent pairs only, not all-pairs
        for window in members.windows(2) {
            let (left, right) = (window[0], window[1]);
            out.push(Link {
                kind: LinkKind::Sibling { left, right },
                points: vec![rects[&left].right_center(), rects[&right].left_center()],
            });
        }
    }
}

/// Midpoint of the spousal connector between two parent boxes.
fn spousal_midpoint(rect_a: &Rect, rect_b: &Rect) -> Point {
    let ca = rect_a.center();
    let cb = rect_b.center();
    Point::new((ca.x + cb.x) / 2.0, (ca.y + cb.y) / 2.0)
}

/// Orthogonal polyline from `from` down to `to` with a horizontal jog at the
/// vertical midpoint; collapses to a straight segment when already aligned.
fn elbow(from: Point, to: Point) -> Vec<Point> {
    if (from.x - to.x).abs() < 1e-9 {
        return vec![from, to];
    }
    let mid_y = (from.y + to.y) / 2.0;
    vec![
        from,
        Point::new(from.x, mid_y),
        Point::new(to.x, mid_y),
        to,
    ]
}
