// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A point in world or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Point, w: f64, h: f64) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y)
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.bottom())
    }

    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.h / 2.0)
    }

    pub fn right_center(&self) -> Point {
        Point::new(self.right(), self.y + self.h / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.w + 2.0 * margin,
            self.h + 2.0 * margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        let rect = Rect::from_center(Point::new(10.0, 10.0), 4.0, 2.0);
        assert_eq!(rect.x, 8.0);
        assert_eq!(rect.y, 9.0);
        assert_eq!(rect.top_center(), Point::new(10.0, 9.0));
        assert_eq!(rect.bottom_center(), Point::new(10.0, 11.0));
        assert_eq!(rect.left_center(), Point::new(8.0, 10.0));
        assert_eq!(rect.right_center(), Point::new(12.0, 10.0));
        assert_eq!(rect.center(), Point::new(10.0, 10.0));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(4.0, 2.0)));
        assert!(!rect.contains(Point::new(4.1, 1.0)));
    }

    #[test]
    fn union_and_expand() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, -1.0, 2.0, 2.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, -1.0, 7.0, 3.0));
        assert_eq!(u.expand(1.0), Rect::new(-1.0, -2.0, 9.0, 5.0));
    }
}
