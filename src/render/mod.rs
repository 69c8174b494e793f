// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode text painter for the scene.
//!
//! World coordinates go through the viewing transform and land on a character
//! grid; anything outside the viewport is clipped, never an error, because a
//! panned or zoomed view routinely pushes content off-screen. Links paint
//! first, node cards second, so cards cover the connectors running under them.

use crate::scene::{LinkKind, Point, Scene, SceneNode};
use crate::view::Transform;

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

/// Spouse links read as a double bar, sibling links as a dashed run.
pub const SPOUSE_LINK: char = '═';
pub const SIBLING_LINK: char = '┈';

/// Marker painted when a card is too small for a legible border.
pub const COMPACT_NODE: char = '▪';

/// Smallest cell footprint that still gets a bordered card; at minimum zoom a
/// card spans 3 rows, which is border-on-border with no readable interior.
const MIN_CARD_W: i64 = 5;
const MIN_CARD_H: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        _ => UNICODE_BOX_CROSS,
    }
}

/// A clipped character grid addressed in signed cell coordinates.
///
/// Collision behavior is deterministic: non-box characters overwrite (last
/// writer wins) and box-drawing characters merge into junctions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width.saturating_mul(height);
        Self {
            width,
            height,
            cells: vec![' '; len],
            box_edges: vec![BoxEdges::NONE; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes one cell; off-grid coordinates are silently dropped.
    pub fn set(&mut self, x: i64, y: i64, ch: char) {
        let Some(idx) = self.index_of(x, y) else {
            return;
        };
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        let idx = self.index_of(x, y)?;
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            Some(self.cells[idx])
        } else {
            Some(box_char_from_edges(edges))
        }
    }

    /// Writes `text` left-to-right from `(x, y)`, clipping at both edges.
    pub fn put_str(&mut self, x: i64, y: i64, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as i64, y, ch);
        }
    }

    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, ch: char) {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in min_x..=max_x {
            self.set(x, y, ch);
        }
    }

    pub fn vline(&mut self, x: i64, y0: i64, y1: i64) {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in min_y..=max_y {
            self.set(x, y, UNICODE_BOX_VERTICAL);
        }
    }

    /// Finished lines, trailing spaces trimmed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let mut line = String::with_capacity(self.width);
                for x in 0..self.width {
                    line.push(self.get(x as i64, y as i64).expect("in bounds"));
                }
                line.trim_end_matches(' ').to_owned()
            })
            .collect()
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

/// Paints the scene through `transform` onto a `width` x `height` grid.
pub fn render_scene(
    scene: &Scene,
    transform: &Transform,
    width: usize,
    height: usize,
) -> Vec<String> {
    let mut canvas = TextCanvas::new(width, height);
    for link in scene.links() {
        paint_link(&mut canvas, transform, link.kind.clone(), &link.points);
    }
    for node in scene.nodes() {
        paint_node(&mut canvas, transform, node);
    }
    canvas.lines()
}

fn cell(transform: &Transform, world: Point) -> (i64, i64) {
    let screen = transform.to_screen(world);
    (screen.x.round() as i64, screen.y.round() as i64)
}

fn paint_link(canvas: &mut TextCanvas, transform: &Transform, kind: LinkKind, points: &[Point]) {
    let flat = match kind {
        LinkKind::Spouse { .. } => Some(SPOUSE_LINK),
        LinkKind::Sibling { .. } => Some(SIBLING_LINK),
        LinkKind::ParentChild { .. } | LinkKind::FamilyJoint { .. } => None,
    };
    for pair in points.windows(2) {
        let (x0, y0) = cell(transform, pair[0]);
        let (x1, y1) = cell(transform, pair[1]);
        match flat {
            Some(ch) => canvas.hline(x0, x1, y0, ch),
            None if y0 == y1 => canvas.hline(x0, x1, y0, UNICODE_BOX_HORIZONTAL),
            None => canvas.vline(x0, y0, y1),
        }
    }
}

fn paint_node(canvas: &mut TextCanvas, transform: &Transform, node: &SceneNode) {
    let (x0, y0) = cell(transform, Point::new(node.rect.x, node.rect.y));
    let (x1, y1) = cell(transform, Point::new(node.rect.right(), node.rect.bottom()));
    let w = x1 - x0 + 1;
    let h = y1 - y0 + 1;

    if w < MIN_CARD_W || h < MIN_CARD_H {
        let (cx, cy) = cell(transform, node.rect.center());
        canvas.set(cx, cy, COMPACT_NODE);
        return;
    }

    // clear the interior so links underneath do not bleed through
    for y in (y0 + 1)..y1 {
        canvas.hline(x0 + 1, x1 - 1, y, ' ');
    }
    canvas.hline(x0 + 1, x1 - 1, y0, UNICODE_BOX_HORIZONTAL);
    canvas.hline(x0 + 1, x1 - 1, y1, UNICODE_BOX_HORIZONTAL);
    canvas.vline(x0, y0 + 1, y1 - 1);
    canvas.vline(x1, y0 + 1, y1 - 1);
    canvas.set(x0, y0, UNICODE_BOX_TOP_LEFT);
    canvas.set(x1, y0, UNICODE_BOX_TOP_RIGHT);
    canvas.set(x0, y1, UNICODE_BOX_BOTTOM_LEFT);
    canvas.set(x1, y1, UNICODE_BOX_BOTTOM_RIGHT);

    let inner = (w - 2) as usize;
    canvas.put_str(x0 + 1, y0 + 1, &truncate_with_ellipsis(node.name.trim(), inner));
    if h >= 4 {
        let mut meta = format!("#{}", node.person_id);
        if let Some(symbol) = node.gender.symbol() {
            meta.push(' ');
            meta.push(symbol);
        }
        if node.has_photo {
            meta.push_str(" ◉");
        }
        canvas.put_str(x0 + 1, y0 + 2, &truncate_with_ellipsis(&meta, inner));
    }
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    if max_len == 1 {
        return "…".to_owned();
    }
    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}
