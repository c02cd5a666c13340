use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meridian::collections::{DisjointSet, MinQueue};
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

// Baseline without rank or path compression.
struct NaiveDisjointSet {
    parent: Vec<RefCell<usize>>,
}

impl NaiveDisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(RefCell::new).collect(),
        }
    }

    fn find(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = *self.parent[root].borrow();
            if parent == root {
                return root;
            }
            root = parent;
        }
    }

    fn union(&self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        *self.parent[ra].borrow_mut() = rb;
        true
    }
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint Set");

    const N: usize = 10_000;
    const OPS: usize = 100_000;

    group.bench_function("DisjointSet", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::with_singletons(N);
            for i in 0..OPS {
                ds.union((i * 7) % N, (i * 13) % N);
                black_box(ds.find((i * 17) % N));
            }
            black_box(ds.set_count())
        })
    });

    group.bench_function("NaiveDisjointSet", |b| {
        b.iter(|| {
            let ds = NaiveDisjointSet::new(N);
            for i in 0..OPS {
                ds.union((i * 7) % N, (i * 13) % N);
                black_box(ds.find((i * 17) % N));
            }
        })
    });

    group.finish();
}

fn bench_min_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("Min Queue");

    const N: u64 = 50_000;

    group.bench_function("MinQueue", |b| {
        b.iter(|| {
            let mut q = MinQueue::with_capacity(N as usize);
            for i in 0..N {
                q.push((i * 2_654_435_761) % 1_000_003, i);
            }
            while let Some(item) = q.pop() {
                black_box(item);
            }
        })
    });

    group.bench_function("std BinaryHeap<Reverse>", |b| {
        b.iter(|| {
            let mut q = BinaryHeap::with_capacity(N as usize);
            for i in 0..N {
                q.push(Reverse(((i * 2_654_435_761) % 1_000_003, i)));
            }
            while let Some(item) = q.pop() {
                black_box(item);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set, bench_min_queue);
criterion_main!(benches);
