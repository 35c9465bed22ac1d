//! Benchmarks for the shortest-path search.
//!
//! - The six-node demonstration graph
//! - Square grids with uniform weights (many equal-distance ties)
//! - Dense random-ish graphs with varied weights (many stale queue entries)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shortpath::prelude::*;
use std::hint::black_box;

/// Undirected `side x side` grid, every edge weight 1.
fn grid(side: usize) -> (NodeArena<usize>, Graph) {
    let mut nodes = NodeArena::with_capacity(side * side);
    let ids: Vec<NodeId> = (0..side * side).map(|i| nodes.add_node(i)).collect();

    for row in 0..side {
        for col in 0..side {
            let here = ids[row * side + col];
            if col + 1 < side {
                nodes.connect(here, ids[row * side + col + 1], 1).unwrap();
            }
            if row + 1 < side {
                nodes.connect(here, ids[(row + 1) * side + col], 1).unwrap();
            }
        }
    }

    (nodes, ids.into_iter().collect())
}

/// Directed graph where every node links to `fanout` others with weights from
/// a fixed linear congruential sequence.
fn dense(count: usize, fanout: usize) -> (NodeArena<usize>, Graph) {
    let mut nodes = NodeArena::with_capacity(count);
    let ids: Vec<NodeId> = (0..count).map(|i| nodes.add_node(i)).collect();

    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        state >> 33
    };

    for &from in &ids {
        for _ in 0..fanout {
            let to = ids[(next() as usize) % count];
            let weight = (next() % 100) as Weight;
            nodes.add_edge(from, to, weight).unwrap();
        }
    }

    (nodes, ids.into_iter().collect())
}

fn bench_classic(c: &mut Criterion) {
    let demo = shortpath::demo::classic().unwrap();

    c.bench_function("dijkstra_classic", |b| {
        b.iter(|| {
            let distances = demo.run().unwrap();
            black_box(distances)
        });
    });
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");
    for side in [8usize, 32, 64] {
        let (nodes, graph) = grid(side);
        let start = graph.vertices()[0];

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let distances = dijkstra(black_box(&nodes), &graph, start).unwrap();
                black_box(distances)
            });
        });
    }
    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_dense");
    for count in [100usize, 1_000] {
        let (nodes, graph) = dense(count, 16);
        let start = graph.vertices()[0];

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let distances = dijkstra(black_box(&nodes), &graph, start).unwrap();
                black_box(distances)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classic, bench_grid, bench_dense);
criterion_main!(benches);
