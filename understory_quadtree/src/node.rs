// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: a bounded bucket of points plus up to four owned children.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::Quadrant;

/// Maximum number of points a node holds directly.
///
/// Inserting into a full node that has no child for the point's quadrant creates
/// that child instead of growing the node.
pub const MAX_POINTS: usize = 2;

/// Owning slot for a child subtree.
pub(crate) type Slot = Option<Box<Node>>;

/// One bucket of the quadtree.
///
/// A node is a leaf when none of its four child slots is occupied. This is
/// computed on demand by [`Node::is_leaf`] and never stored.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) bounds: Rect,
    pub(crate) points: Vec<Point>,
    pub(crate) children: [Slot; 4],
}

impl Node {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            points: Vec::with_capacity(MAX_POINTS),
            children: [None, None, None, None],
        }
    }

    /// The rectangle this node is responsible for.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Points stored directly in this node (not in its children), in no particular order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The child covering `quadrant`, if one has been created.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children[quadrant.index()].as_deref()
    }

    /// Occupied child slots with their quadrant, in [`Quadrant::ALL`] order.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &Self)> + '_ {
        Quadrant::ALL
            .into_iter()
            .filter_map(|q| self.child(q).map(|c| (q, c)))
    }

    /// Whether all four child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Number of points stored in this node and all of its descendants.
    pub fn subtree_len(&self) -> usize {
        self.points.len()
            + self
                .children
                .iter()
                .flatten()
                .map(|c| c.subtree_len())
                .sum::<usize>()
    }
}
