// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rejection reasons reported by [`QuadTree::try_insert`](crate::QuadTree::try_insert).

use kurbo::Point;
use thiserror::Error;

/// Why a point was not added to the tree.
///
/// No rejection mutates the tree.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum InsertError {
    /// The point lies outside the tree's bounds (or has a NaN coordinate).
    #[error("point {0:?} lies outside the indexed bounds")]
    OutOfBounds(Point),

    /// An equal point is already stored.
    #[error("point {0:?} is already stored")]
    Duplicate(Point),

    /// The node the point belongs to is full and its bounds cannot be split into
    /// smaller quadrants, as happens with infinite bounds.
    #[error("no room for point {0:?}: its node is full and cannot be subdivided")]
    Unsplittable(Point),
}

impl InsertError {
    /// The point that was rejected.
    pub fn point(&self) -> Point {
        match *self {
            Self::OutOfBounds(p) | Self::Duplicate(p) | Self::Unsplittable(p) => p,
        }
    }
}
