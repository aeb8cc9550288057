// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Quadtree: a dynamic region quadtree over 2D points.
//!
//! Understory Quadtree indexes distinct [`kurbo::Point`]s inside a fixed bounding
//! [`kurbo::Rect`].
//!
//! - Insert, remove, and test membership of points.
//! - Query every point inside an axis-aligned rectangle.
//! - Walk the node structure in pre- or post-order, for example to draw debug overlays.
//!
//! Nodes hold at most [`MAX_POINTS`] points directly. A node only grows a child for a
//! quadrant when it is full and receives another point for that quadrant, so sparse
//! regions stay shallow. Removing points folds leaf children back into their parent
//! whenever their combined points fit in one node.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::{Order, QuadTree};
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! tree.extend([
//!     Point::new(10.0, 10.0),
//!     Point::new(20.0, 20.0),
//!     Point::new(80.0, 80.0),
//! ]);
//! assert_eq!(tree.len(), 3);
//! assert!(tree.contains(Point::new(80.0, 80.0)));
//!
//! // Points outside the bounds are ignored.
//! assert!(!tree.insert(Point::new(150.0, 10.0)));
//!
//! // Rectangle queries are half-open like `Rect` containment.
//! let hits = tree.query_rect(Rect::new(0.0, 0.0, 20.0, 20.0));
//! assert_eq!(hits, [Point::new(10.0, 10.0)]);
//!
//! // Draw every node's bounds.
//! tree.for_each_node(Order::Post, |node, depth| {
//!     let _ = (node.bounds(), node.points(), depth);
//! });
//! ```
//!
//! ## Geometry
//!
//! Containment is half-open (`x0 <= x < x1`), and rectangles that only touch still
//! intersect; see [`types`]. `y` grows downward, so [`Quadrant::NorthWest`] is the
//! top-left quarter. A coordinate on a midline belongs to the east or south side.
//!
//! ### Float semantics
//!
//! Point equality is exact. Points with NaN coordinates are never contained and so are
//! never stored. Bounds are used as given; normalize them with [`kurbo::Rect::abs`]
//! if they may be corner-ordered. Infinite bounds work, but a node whose quadrants
//! would not shrink refuses points beyond [`MAX_POINTS`] with
//! [`InsertError::Unsplittable`].
//!
//! ## Logging
//!
//! Splits, merges and pruning emit [`tracing`] events at `trace`/`debug` level.
//! No subscriber is installed by this crate.

#![no_std]

extern crate alloc;

pub mod error;
pub mod node;
pub mod traverse;
pub mod tree;
pub mod types;

pub use error::InsertError;
pub use node::{MAX_POINTS, Node};
pub use traverse::{Order, Visit};
pub use tree::{Points, QuadTree};
pub use types::{Quadrant, rect_contains, rects_intersect};
