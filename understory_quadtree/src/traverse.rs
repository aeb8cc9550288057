// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first traversal over the node slots of a tree.
//!
//! The mutating walk hands each visitor a [`Visit`] for the node in the current
//! slot. A visitor that calls [`Visit::prune`] asks the walker to empty that slot
//! once the visitor returns, dropping the whole subtree. The root has no slot of
//! its own, so pruning it clears its points and children in place instead.

use kurbo::Rect;

use crate::node::{Node, Slot};

/// Order in which [`QuadTree::traverse`](crate::QuadTree::traverse) visits nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Visit a node before any of its children.
    #[default]
    Pre,
    /// Visit a node after all of its children.
    Post,
}

/// A node being visited by a mutating traversal.
#[derive(Debug)]
pub struct Visit<'a> {
    node: &'a Node,
    depth: usize,
    prune: bool,
}

impl<'a> Visit<'a> {
    fn new(node: &'a Node, depth: usize) -> Self {
        Self {
            node,
            depth,
            prune: false,
        }
    }

    /// The node in the visited slot.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Bounds of the visited node.
    pub fn bounds(&self) -> Rect {
        self.node.bounds
    }

    /// Distance from the root; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this visit is at the root.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Drop the visited node and everything below it once the visitor returns.
    ///
    /// In pre-order the pruned node's children are not visited.
    pub fn prune(&mut self) {
        self.prune = true;
    }
}

/// Walk `root` and its descendants, returning how many points were pruned.
pub(crate) fn walk_root<F>(root: &mut Node, order: Order, f: &mut F) -> usize
where
    F: FnMut(&mut Visit<'_>),
{
    let mut pruned = 0;
    if order == Order::Pre && visit(root, 0, f) {
        return clear_in_place(root);
    }
    for slot in &mut root.children {
        pruned += walk_slot(slot, 1, order, f);
    }
    if order == Order::Post && visit(root, 0, f) {
        pruned += clear_in_place(root);
    }
    pruned
}

fn walk_slot<F>(slot: &mut Slot, depth: usize, order: Order, f: &mut F) -> usize
where
    F: FnMut(&mut Visit<'_>),
{
    let Some(node) = slot.as_deref_mut() else {
        return 0;
    };
    if order == Order::Pre && visit(node, depth, f) {
        return detach(slot);
    }
    let mut pruned = 0;
    for child in &mut node.children {
        pruned += walk_slot(child, depth + 1, order, f);
    }
    if order == Order::Post && visit(node, depth, f) {
        pruned += detach(slot);
    }
    pruned
}

/// Run the visitor on `node`; returns whether it asked for a prune.
fn visit<F>(node: &Node, depth: usize, f: &mut F) -> bool
where
    F: FnMut(&mut Visit<'_>),
{
    let mut v = Visit::new(node, depth);
    f(&mut v);
    v.prune
}

fn detach(slot: &mut Slot) -> usize {
    let dropped = slot.take().map_or(0, |node| node.subtree_len());
    tracing::debug!(dropped, "pruned subtree");
    dropped
}

fn clear_in_place(root: &mut Node) -> usize {
    let dropped = root.subtree_len();
    root.points.clear();
    root.children = [None, None, None, None];
    tracing::debug!(dropped, "pruned root contents");
    dropped
}

/// Walk a tree without mutation, passing each node and its depth to `f`.
pub(crate) fn for_each<F>(node: &Node, depth: usize, order: Order, f: &mut F)
where
    F: FnMut(&Node, usize),
{
    if order == Order::Pre {
        f(node, depth);
    }
    for child in node.children.iter().flatten() {
        for_each(child, depth + 1, order, f);
    }
    if order == Order::Post {
        f(node, depth);
    }
}
