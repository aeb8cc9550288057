// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Fill a node past capacity, watch a quadrant split off, then erase points until
//! the child folds back into the root.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example quadtree_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Order, QuadTree};

fn dump(tree: &QuadTree) {
    tree.for_each_node(Order::Pre, |node, depth| {
        let r = node.bounds();
        println!(
            "{:indent$}[{}, {}) x [{}, {}) points={:?}",
            "",
            r.x0,
            r.x1,
            r.y0,
            r.y1,
            node.points(),
            indent = depth * 2
        );
    });
    println!("len={} nodes={}", tree.len(), tree.node_count());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    tree.extend([Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
    dump(&tree);

    // The root is full, so the south-east quadrant gets its own node.
    tree.extend([Point::new(80.0, 80.0), Point::new(90.0, 90.0)]);
    dump(&tree);

    // One point left in the child: 1 + 2 does not fit in the root yet.
    assert!(tree.remove(Point::new(80.0, 80.0)), "80,80 was inserted");
    dump(&tree);

    // Empty child folds back into the root.
    assert!(tree.remove(Point::new(90.0, 90.0)), "90,90 was inserted");
    dump(&tree);
    assert!(tree.root().is_leaf(), "root should be a leaf again");
}
