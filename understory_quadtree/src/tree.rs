// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree container: insertion with lazy splits, erase with compaction, and queries.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::error::InsertError;
use crate::node::{MAX_POINTS, Node, Slot};
use crate::traverse::{self, Order, Visit};
use crate::types::{Quadrant, rect_contains, rects_intersect};

/// A region quadtree over distinct points inside fixed bounds.
///
/// Each node stores up to [`MAX_POINTS`] points directly. A child is created for a
/// quadrant only when a full node receives another point for that quadrant, and leaf
/// children are folded back into their parent on erase whenever the combined points
/// fit in the parent.
#[derive(Clone)]
pub struct QuadTree {
    root: Node,
    len: usize,
}

impl core::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds)
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish_non_exhaustive()
    }
}

/// What an erase step tells the frame above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Erased {
    /// The point was not reachable from this node.
    Missing,
    /// The point was removed somewhere at or below this node.
    Removed {
        /// This node is now a leaf and should be offered to its parent for merging.
        merge_up: bool,
    },
}

impl QuadTree {
    /// Create an empty tree indexing `bounds`.
    ///
    /// The bounds are used as given; a rectangle with negative width or height
    /// contains no points, so every insert is rejected. Use [`Rect::abs`] to
    /// normalize corner-ordered input.
    ///
    /// Infinite bounds are accepted, but an axis that spans an infinite range
    /// cannot be halved. Nodes whose quadrants would not shrink hold at most
    /// [`MAX_POINTS`] points, and further inserts there fail with
    /// [`InsertError::Unsplittable`].
    pub fn new(bounds: Rect) -> Self {
        Self {
            root: Node::new(bounds),
            len: 0,
        }
    }

    /// Create a tree and insert `points` in order, skipping rejected ones.
    pub fn from_points(bounds: Rect, points: impl IntoIterator<Item = Point>) -> Self {
        let mut tree = Self::new(bounds);
        tree.extend(points);
        tree
    }

    /// The rectangle indexed by this tree.
    pub fn bounds(&self) -> Rect {
        self.root.bounds
    }

    /// The root node, which always exists and covers [`QuadTree::bounds`].
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `point`, returning `true` if it was added.
    ///
    /// Points outside the bounds, points already present, and points that have no
    /// room under non-finite bounds are ignored. Use [`QuadTree::try_insert`] to
    /// tell these apart.
    pub fn insert(&mut self, point: Point) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insert `point`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - [`InsertError::OutOfBounds`] if the point is not inside [`QuadTree::bounds`].
    /// - [`InsertError::Duplicate`] if an equal point is already stored.
    /// - [`InsertError::Unsplittable`] if the point's node is full and its bounds
    ///   cannot be subdivided, which only happens for non-finite bounds.
    ///
    /// The tree is unchanged in every case.
    pub fn try_insert(&mut self, point: Point) -> Result<(), InsertError> {
        insert_at(&mut self.root, point)?;
        self.len += 1;
        Ok(())
    }

    /// Whether an equal point is stored.
    pub fn contains(&self, point: Point) -> bool {
        let mut node = &self.root;
        loop {
            if !rect_contains(&node.bounds, point) {
                return false;
            }
            match node.child(Quadrant::of(point, &node.bounds)) {
                Some(child) => node = child,
                None => return node.points.contains(&point),
            }
        }
    }

    /// Remove `point`, returning `true` if it was present.
    ///
    /// After the removal, leaf nodes along the search path are merged into their
    /// parent when the combined points fit in one node. The root is never merged away.
    pub fn remove(&mut self, point: Point) -> bool {
        match erase_at(&mut self.root, false, point) {
            Erased::Missing => false,
            Erased::Removed { .. } => {
                self.len -= 1;
                true
            }
        }
    }

    /// Remove every point contained in `rect`, returning how many were removed.
    pub fn remove_in(&mut self, rect: Rect) -> usize {
        self.query_rect(rect)
            .into_iter()
            .filter(|p| self.remove(*p))
            .count()
    }

    /// All stored points contained in `rect` (half-open, like [`rect_contains`]).
    ///
    /// Nodes are visited breadth-first and a child is only entered when its bounds
    /// intersect `rect`. The result has no particular order.
    pub fn query_rect(&self, rect: Rect) -> Vec<Point> {
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(&self.root);
        while let Some(node) = queue.pop_front() {
            out.extend(node.points.iter().copied().filter(|p| rect_contains(&rect, *p)));
            queue.extend(
                node.children
                    .iter()
                    .flatten()
                    .filter(|c| rects_intersect(&c.bounds, &rect))
                    .map(|c| &**c),
            );
        }
        out
    }

    /// Iterate over every stored point, in no particular order.
    pub fn points(&self) -> Points<'_> {
        Points {
            stack: self.root.children.iter().flatten().map(|c| &**c).collect(),
            current: self.root.points.iter(),
        }
    }

    /// Visit every node with read-only access, along with its depth (root is 0).
    pub fn for_each_node<F>(&self, order: Order, mut f: F)
    where
        F: FnMut(&Node, usize),
    {
        traverse::for_each(&self.root, 0, order, &mut f);
    }

    /// Visit every node in `order`, letting the visitor prune subtrees.
    ///
    /// A visitor that calls [`Visit::prune`] drops the visited node and its
    /// descendants; pruning the root empties it but keeps its bounds. Pruned points
    /// are subtracted from [`QuadTree::len`]. No compaction runs afterwards.
    pub fn traverse<F>(&mut self, order: Order, mut f: F)
    where
        F: FnMut(&mut Visit<'_>),
    {
        let pruned = traverse::walk_root(&mut self.root, order, &mut f);
        self.len -= pruned;
    }

    /// Remove every point and child node; the root and its bounds are kept.
    pub fn clear(&mut self) {
        self.traverse(Order::Post, |v| v.prune());
        debug_assert_eq!(self.len, 0, "clear must account for every point");
        tracing::debug!(bounds = ?self.root.bounds, "cleared quadtree");
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.for_each_node(Order::Pre, |_, _| n += 1);
        n
    }

    /// Depth of the deepest node; a tree with only a root has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.for_each_node(Order::Pre, |_, d| deepest = deepest.max(d));
        deepest
    }
}

impl Extend<Point> for QuadTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            let _ = self.insert(p);
        }
    }
}

/// Iterator over every point in a [`QuadTree`], returned by [`QuadTree::points`].
#[derive(Clone, Debug)]
pub struct Points<'a> {
    stack: Vec<&'a Node>,
    current: core::slice::Iter<'a, Point>,
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(p) = self.current.next() {
                return Some(*p);
            }
            let node = self.stack.pop()?;
            self.stack.extend(node.children.iter().flatten().map(|c| &**c));
            self.current = node.points.iter();
        }
    }
}

fn insert_at(node: &mut Node, point: Point) -> Result<(), InsertError> {
    if !rect_contains(&node.bounds, point) {
        return Err(InsertError::OutOfBounds(point));
    }
    let quadrant = Quadrant::of(point, &node.bounds);
    if let Some(child) = node.children[quadrant.index()].as_deref_mut() {
        return insert_at(child, point);
    }
    if node.points.contains(&point) {
        return Err(InsertError::Duplicate(point));
    }
    if node.points.len() < MAX_POINTS {
        node.points.push(point);
        return Ok(());
    }

    // Full and no child for this quadrant yet: split it off and hand over the
    // points that belong to it. Non-finite bounds can yield a quadrant that is no
    // smaller than the node, or that has NaN edges; neither can take the point.
    let child_bounds = quadrant.rect(&node.bounds);
    if child_bounds == node.bounds || !rect_contains(&child_bounds, point) {
        tracing::debug!(bounds = ?node.bounds, ?point, "node cannot be subdivided");
        return Err(InsertError::Unsplittable(point));
    }
    let mut child = Box::new(Node::new(child_bounds));
    node.points.retain(|p| {
        if rect_contains(&child.bounds, *p) {
            child.points.push(*p);
            false
        } else {
            true
        }
    });
    tracing::trace!(
        ?quadrant,
        bounds = ?child.bounds,
        moved = child.points.len(),
        "split node"
    );
    // A failed insert leaves `child` as it was built, so the split can be undone.
    if let Err(err) = insert_at(&mut child, point) {
        node.points.extend(child.points);
        return Err(err);
    }
    node.children[quadrant.index()] = Some(child);
    Ok(())
}

/// Erase `point` from the subtree at `node`.
///
/// `has_parent` is false only for the root, which must never ask to be merged.
fn erase_at(node: &mut Node, has_parent: bool, point: Point) -> Erased {
    if !rect_contains(&node.bounds, point) {
        return Erased::Missing;
    }
    let quadrant = Quadrant::of(point, &node.bounds);
    let slot = quadrant.index();

    if let Some(child) = node.children[slot].as_deref_mut() {
        let Erased::Removed { merge_up } = erase_at(child, true, point) else {
            return Erased::Missing;
        };
        if merge_up {
            try_merge(&mut node.children[slot], &mut node.points);
        }
        return match node.children[slot].as_deref() {
            None => Erased::Removed {
                merge_up: has_parent && node.is_leaf(),
            },
            Some(child) => {
                if child.is_leaf() {
                    try_merge(&mut node.children[slot], &mut node.points);
                }
                Erased::Removed { merge_up: false }
            }
        };
    }

    let Some(pos) = node.points.iter().position(|p| *p == point) else {
        return Erased::Missing;
    };
    let _ = node.points.swap_remove(pos);

    if node.is_leaf() {
        return Erased::Removed {
            merge_up: has_parent,
        };
    }
    for child in &mut node.children {
        if child.as_deref().is_some_and(Node::is_leaf) {
            try_merge(child, &mut node.points);
        }
    }
    Erased::Removed { merge_up: false }
}

/// Fold the leaf in `slot` into `parent_points` if they fit together in one node,
/// emptying the slot. Otherwise both are left untouched.
fn try_merge(slot: &mut Slot, parent_points: &mut Vec<Point>) {
    let Some(child) = slot.as_deref() else {
        return;
    };
    debug_assert!(child.is_leaf(), "only leaf nodes can be merged");
    if child.points.len() + parent_points.len() > MAX_POINTS {
        return;
    }
    if let Some(child) = slot.take() {
        tracing::trace!(
            bounds = ?child.bounds,
            moved = child.points.len(),
            "merged leaf into parent"
        );
        parent_points.extend(child.points);
    }
}
