// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_quadtree::QuadTree;

const WORLD: Rect = Rect::new(0.0, 0.0, 2000.0, 2000.0);

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.random_range(0.0..2000.0), rng.random_range(0.0..2000.0)))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.random_range(spread..2000.0 - spread);
        let cy = rng.random_range(spread..2000.0 - spread);
        for _ in 0..per_cluster {
            let dx = rng.random_range(-0.5..0.5) * spread;
            let dy = rng.random_range(-0.5..0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000_usize, 10_000] {
        let uniform = gen_uniform_points(n);
        let clustered = gen_clustered_points(n / 100, 100, 20.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::new(WORLD),
                |mut tree| {
                    tree.extend(uniform.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("clustered_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::new(WORLD),
                |mut tree| {
                    tree.extend(clustered.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let points = gen_uniform_points(10_000);
    let tree = QuadTree::from_points(WORLD, points.iter().copied());
    group.bench_function("query_rect_400", |b| {
        b.iter(|| {
            let hits = tree.query_rect(Rect::new(100.0, 100.0, 500.0, 500.0));
            black_box(hits.len());
        })
    });
    group.bench_function("contains_all", |b| {
        b.iter(|| {
            let found = points.iter().filter(|p| tree.contains(**p)).count();
            black_box(found);
        })
    });
    group.finish();
}

fn bench_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_erase");
    let points = gen_uniform_points(10_000);
    let tree = QuadTree::from_points(WORLD, points.iter().copied());
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("remove_all", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for p in &points {
                    let _ = tree.remove(*p);
                }
                black_box(tree.node_count());
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("remove_in_window", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| black_box(tree.remove_in(Rect::new(500.0, 500.0, 1500.0, 1500.0))),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query, bench_erase);
criterion_main!(benches);
