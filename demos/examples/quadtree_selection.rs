// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle selection over a scatter of points.
//!
//! Mimics an editor session: points are dropped into a canvas, a selection is
//! dragged between two corners, the selected points are highlighted and then
//! deleted. Each frame is rendered as a small character grid.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_selection`

use kurbo::{Point, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Order, QuadTree};

const W: usize = 48;
const H: usize = 24;

/// Grid cell holding canvas coordinate `v`, clamped to `0..len`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the coordinate is floored and clamped to the grid first"
)]
fn cell(v: f64, len: usize) -> usize {
    v.floor().clamp(0.0, len.saturating_sub(1) as f64) as usize
}

fn render(tree: &QuadTree, selected: &[Point]) {
    let mut grid = vec![vec![' '; W]; H];
    // Node outlines first, points on top.
    tree.for_each_node(Order::Post, |node, _| {
        let r = node.bounds();
        let (x0, y0) = (cell(r.x0, W), cell(r.y0, H));
        // Max edges are exclusive; draw them on the last cell inside.
        let x1 = cell(r.x1 - 1.0, W).max(x0);
        let y1 = cell(r.y1 - 1.0, H).max(y0);
        for x in x0..=x1 {
            grid[y0][x] = '-';
            grid[y1][x] = '-';
        }
        for row in grid.iter_mut().take(y1 + 1).skip(y0) {
            row[x0] = '|';
            row[x1] = '|';
        }
    });
    for p in tree.points() {
        grid[cell(p.y, H)][cell(p.x, W)] = 'o';
    }
    for p in selected {
        grid[cell(p.y, H)][cell(p.x, W)] = '#';
    }
    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let canvas = Rect::new(0.0, 0.0, W as f64, H as f64);
    let clicks = [
        (3.0, 2.0),
        (40.0, 5.0),
        (30.0, 20.0),
        (33.0, 18.0),
        (35.0, 21.0),
        (10.0, 15.0),
        (44.0, 22.0),
        (26.0, 13.0),
        (5.0, 20.0),
        (60.0, 3.0),
    ];
    let mut tree = QuadTree::new(canvas);
    for (x, y) in clicks {
        if let Err(err) = tree.try_insert(Point::new(x, y)) {
            info!(%err, "click ignored");
        }
    }
    info!(points = tree.len(), nodes = tree.node_count(), "canvas ready");
    render(&tree, &[]);

    // Drag from bottom-right to top-left; corners are normalized like a mouse drag.
    let drag = Rect::from_points(Point::new(46.0, 23.0), Point::new(25.0, 12.0));
    let selected = tree.query_rect(drag);
    info!(selected = selected.len(), ?drag, "selection");
    render(&tree, &selected);

    let removed = tree.remove_in(drag);
    info!(removed, points = tree.len(), nodes = tree.node_count(), "deleted selection");
    render(&tree, &[]);
}
