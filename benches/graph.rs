//! Benchmarks for graph construction and algorithms.
//!
//! The grid graph used here keeps degrees small but forces real traversal
//! work; the Dijkstra benchmark exercises the O(V) selection scan.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use trellis::graph::Graph;

/// Builds an undirected `side` x `side` grid with unit weights.
fn grid(side: i32) -> Graph<(i32, i32)> {
    let mut graph = Graph::undirected();
    for x in 0..side {
        for y in 0..side {
            if x + 1 < side {
                graph.add_edge((x, y), (x + 1, y));
            }
            if y + 1 < side {
                graph.add_edge((x, y), (x, y + 1));
            }
        }
    }
    graph
}

fn bench_build_grid(c: &mut Criterion) {
    c.bench_function("graph_build_grid_32", |b| {
        b.iter(|| black_box(grid(black_box(32))));
    });
}

fn bench_bfs_full(c: &mut Criterion) {
    let graph = grid(32);
    c.bench_function("graph_bfs_grid_32", |b| {
        b.iter(|| {
            let mut visited = 0u32;
            graph.bfs(&(0, 0), |_| {
                visited += 1;
                true
            });
            black_box(visited)
        });
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = grid(32);
    c.bench_function("graph_shortest_path_corner_to_corner", |b| {
        b.iter(|| black_box(graph.shortest_path(black_box(&(0, 0)), black_box(&(31, 31)))));
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = grid(16);
    c.bench_function("graph_dijkstra_grid_16", |b| {
        b.iter(|| black_box(graph.dijkstra(black_box(&(0, 0)))));
    });
}

fn bench_topological_sort(c: &mut Criterion) {
    let mut dag: Graph<i32> = Graph::directed();
    for i in 0..500 {
        dag.add_edge(i, i + 1);
        if i + 7 <= 500 {
            dag.add_edge(i, i + 7);
        }
    }
    c.bench_function("graph_topological_sort_chain", |b| {
        b.iter(|| black_box(dag.topological_sort()));
    });
}

criterion_group!(
    benches,
    bench_build_grid,
    bench_bfs_full,
    bench_shortest_path,
    bench_dijkstra,
    bench_topological_sort
);
criterion_main!(benches);
