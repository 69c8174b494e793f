// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::scene::{Point, Rect};

/// Zoom scale bounds; out-of-range values are clamped, never rejected.
pub const K_MIN: f64 = 0.4;
pub const K_MAX: f64 = 2.2;

/// Zoom rate per wheel notch: `k' = k * exp(-delta * WHEEL_ZOOM_RATE)`, so
/// symmetric wheel input is exactly reversible (away from the clamp bounds).
pub const WHEEL_ZOOM_RATE: f64 = 0.1;

/// World-unit margin added around content by fit-to-bounds.
pub const FIT_MARGIN: f64 = 2.0;

// Home translation leaves the first card (centered at the world origin,
// so extending half a card into negative coordinates) fully on screen.
const DEFAULT_X: f64 = 12.0;
const DEFAULT_Y: f64 = 4.0;

/// Pan translation plus zoom scale: `screen = world * k + (x, y)`.
///
/// Lives for the whole session; mutated by pan/zoom/fit/reset and never
/// destroyed. `k` stays within `[K_MIN, K_MAX]` after every operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            y: DEFAULT_Y,
            k: 1.0,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_world(&self, screen: Point) -> Point {
        Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
    }

    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.k + self.x, world.y * self.k + self.y)
    }

    /// Translates by a screen-space delta; zoom leaves pan deltas untouched.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Zooms around `cursor` (screen coordinates): the world point under the
    /// cursor stays fixed. Positive `wheel_delta` zooms out, negative in.
    pub fn zoom_at(&mut self, cursor: Point, wheel_delta: f64) {
        let k = clamp_scale(self.k * (-wheel_delta * WHEEL_ZOOM_RATE).exp());
        let anchor = self.to_world(cursor);
        self.k = k;
        self.x = cursor.x - anchor.x * k;
        self.y = cursor.y - anchor.y * k;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scales and centers so `bounds` (plus margin) fills the viewport.
    /// No-ops on a degenerate viewport or content box.
    pub fn fit_to_bounds(&mut self, bounds: Rect, viewport_w: f64, viewport_h: f64) {
        let content = bounds.expand(FIT_MARGIN);
        if content.w <= 0.0 || content.h <= 0.0 || viewport_w <= 0.0 || viewport_h <= 0.0 {
            return;
        }
        let k = clamp_scale((viewport_w / content.w).min(viewport_h / content.h));
        let center = content.center();
        self.k = k;
        self.x = viewport_w / 2.0 - center.x * k;
        self.y = viewport_h / 2.0 - center.y * k;
    }
}

fn clamp_scale(k: f64) -> f64 {
    k.clamp(K_MIN, K_MAX)
}
