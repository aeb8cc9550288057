// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers and the quadrant classifier.
//!
//! Points and rectangles are plain [`kurbo::Point`] and [`kurbo::Rect`] values.
//! The predicates here pin down the exact edge semantics the tree relies on,
//! independent of Kurbo's own helpers:
//!
//! - [`rect_contains`] is half-open: `x0 <= x < x1` and `y0 <= y < y1`.
//! - [`rects_intersect`] is closed: rectangles that only touch along an edge or a
//!   corner still intersect.
//!
//! Coordinates follow the usual screen convention where `y` grows downward, so
//! "north" is the half with smaller `y`.

use kurbo::{Point, Rect};

/// One of the four sub-regions a rectangle is split into at its midpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// West of the vertical midline, north of the horizontal one.
    NorthWest,
    /// East of the vertical midline, north of the horizontal one.
    NorthEast,
    /// West of the vertical midline, south of the horizontal one.
    SouthWest,
    /// East of the vertical midline, south of the horizontal one.
    SouthEast,
}

impl Quadrant {
    /// All quadrants, in child-slot order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Classify `point` against the midpoint of `rect`.
    ///
    /// A coordinate equal to the midpoint goes to the higher-coordinate side on
    /// both axes (east and south). The point does not need to lie inside `rect`.
    pub fn of(point: Point, rect: &Rect) -> Self {
        let east = point.x >= mid_x(rect);
        let south = point.y >= mid_y(rect);
        match (east, south) {
            (false, false) => Self::NorthWest,
            (true, false) => Self::NorthEast,
            (false, true) => Self::SouthWest,
            (true, true) => Self::SouthEast,
        }
    }

    /// The sub-rectangle of `rect` covered by this quadrant.
    ///
    /// The four results tile `rect` exactly and share its midlines, so a point
    /// classified by [`Quadrant::of`] is contained in the matching sub-rectangle
    /// whenever it is contained in `rect`.
    pub fn rect(self, rect: &Rect) -> Rect {
        let mx = mid_x(rect);
        let my = mid_y(rect);
        match self {
            Self::NorthWest => Rect::new(rect.x0, rect.y0, mx, my),
            Self::NorthEast => Rect::new(mx, rect.y0, rect.x1, my),
            Self::SouthWest => Rect::new(rect.x0, my, mx, rect.y1),
            Self::SouthEast => Rect::new(mx, my, rect.x1, rect.y1),
        }
    }

    /// Child-slot index of this quadrant.
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }
}

/// Horizontal midline of `rect`.
///
/// Halves are summed rather than the extent so that finite bounds never overflow.
#[inline]
pub fn mid_x(rect: &Rect) -> f64 {
    0.5 * rect.x0 + 0.5 * rect.x1
}

/// Vertical midline of `rect`.
#[inline]
pub fn mid_y(rect: &Rect) -> f64 {
    0.5 * rect.y0 + 0.5 * rect.y1
}

/// Whether `rect` contains `point`, treating the max edges as exclusive.
///
/// NaN coordinates are never contained.
#[inline]
pub fn rect_contains(rect: &Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x < rect.x1 && rect.y0 <= point.y && point.y < rect.y1
}

/// Whether two rectangles overlap or touch.
///
/// Only a strict separation on either axis makes them disjoint.
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    !(a.x0 > b.x1 || b.x0 > a.x1 || a.y0 > b.y1 || b.y0 > a.y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect_contains(&r, Point::new(0.0, 0.0)));
        assert!(rect_contains(&r, Point::new(5.0, 5.0)));
        assert!(!rect_contains(&r, Point::new(10.0, 5.0)));
        assert!(!rect_contains(&r, Point::new(5.0, 10.0)));
        assert!(!rect_contains(&r, Point::new(-1.0, 5.0)));
        assert!(!rect_contains(&r, Point::new(f64::NAN, 5.0)));
    }

    #[test]
    fn intersect_counts_touching_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!rects_intersect(&r, &Rect::new(5.0, 11.0, 7.0, 13.0)));
        assert!(!rects_intersect(&r, &Rect::new(11.0, 5.0, 13.0, 7.0)));
        assert!(rects_intersect(&r, &Rect::new(5.0, 10.0, 7.0, 12.0)));
        assert!(rects_intersect(&r, &Rect::new(10.0, 10.0, 12.0, 12.0)));
        assert!(rects_intersect(&r, &Rect::new(5.0, 5.0, 7.0, 7.0)));
        assert!(rects_intersect(&r, &Rect::new(5.0, 5.0, 25.0, 25.0)));
        assert!(rects_intersect(&Rect::new(5.0, 5.0, 7.0, 7.0), &r));
    }

    #[test]
    fn midpoint_ties_go_east_and_south() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Quadrant::of(Point::new(50.0, 50.0), &r), Quadrant::SouthEast);
        assert_eq!(Quadrant::of(Point::new(50.0, 49.0), &r), Quadrant::NorthEast);
        assert_eq!(Quadrant::of(Point::new(49.0, 50.0), &r), Quadrant::SouthWest);
        assert_eq!(Quadrant::of(Point::new(10.0, 10.0), &r), Quadrant::NorthWest);
    }

    #[test]
    fn quadrant_rects_tile_the_parent() {
        let r = Rect::new(0.0, 0.0, 100.0, 60.0);
        assert_eq!(Quadrant::NorthWest.rect(&r), Rect::new(0.0, 0.0, 50.0, 30.0));
        assert_eq!(Quadrant::NorthEast.rect(&r), Rect::new(50.0, 0.0, 100.0, 30.0));
        assert_eq!(Quadrant::SouthWest.rect(&r), Rect::new(0.0, 30.0, 50.0, 60.0));
        assert_eq!(Quadrant::SouthEast.rect(&r), Rect::new(50.0, 30.0, 100.0, 60.0));
    }

    #[test]
    fn classified_points_land_in_their_quadrant_rect() {
        let r = Rect::new(-3.0, 7.5, 12.25, 19.0);
        let samples = [
            Point::new(-3.0, 7.5),
            Point::new(4.625, 13.25),
            Point::new(4.624, 13.24),
            Point::new(12.2, 18.9),
            Point::new(-2.9, 18.99),
        ];
        for p in samples {
            let q = Quadrant::of(p, &r);
            assert!(rect_contains(&q.rect(&r), p), "{p:?} should be inside {q:?}");
        }
    }

    #[test]
    fn slot_indices_follow_all_order() {
        for (i, q) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }
}
