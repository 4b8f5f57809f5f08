// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use waypost_index::{Backend, Index, IndexGeneric, Resolve};

#[derive(Clone, Copy, Debug)]
struct Threshold(f64);

impl Resolve<f64, ()> for Threshold {
    fn resolve(&self, _: &()) -> f64 {
        self.0
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Evenly spaced thresholds, like section anchors down a long page.
fn gen_sections(count: usize, spacing: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 * spacing).collect()
}

/// Random thresholds in `[0, height)`, inserted out of order.
fn gen_random(count: usize, height: f64) -> Vec<f64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_f64() * height).collect()
}

fn gen_positions(count: usize, height: f64) -> Vec<f64> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count).map(|_| rng.next_f64() * height).collect()
}

fn filled<B: Backend<f64>>(
    mut idx: IndexGeneric<f64, Threshold, B>,
    values: &[f64],
) -> IndexGeneric<f64, Threshold, B> {
    for &v in values {
        let _ = idx.insert(Threshold(v));
    }
    let _ = idx.reorder(&());
    idx
}

fn bench_floor(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor");
    for &n in &[16usize, 256, 4096] {
        let height = n as f64 * 400.0;
        let positions = gen_positions(1024, height);
        group.throughput(Throughput::Elements(positions.len() as u64));

        let layouts = [
            ("sections", gen_sections(n, 400.0)),
            ("random", gen_random(n, height)),
        ];
        for (label, values) in layouts {
            let linear = filled(Index::new(), &values);
            group.bench_function(format!("linear_{label}_n{n}"), |b| {
                b.iter(|| {
                    for &p in &positions {
                        black_box(linear.floor(p, &()));
                    }
                })
            });

            let sorted = filled(Index::with_sorted(), &values);
            group.bench_function(format!("sorted_{label}_n{n}"), |b| {
                b.iter(|| {
                    for &p in &positions {
                        black_box(sorted.floor(p, &()));
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_insert_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reorder");
    for &n in &[256usize, 4096] {
        let values = gen_random(n, n as f64 * 400.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("linear_n{n}"), |b| {
            b.iter_batched(
                Index::<f64, Threshold>::new,
                |idx| black_box(filled(idx, &values).len()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("sorted_n{n}"), |b| {
            b.iter_batched(
                Index::<f64, Threshold>::with_sorted,
                |idx| black_box(filled(idx, &values).len()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_unplaced(c: &mut Criterion) {
    // New entries in the sorted backend are scanned linearly until the next reorder.
    let mut group = c.benchmark_group("sorted_unplaced");
    let n = 4096;
    let height = n as f64 * 400.0;
    let positions = gen_positions(1024, height);
    for &pending in &[0usize, 16, 256] {
        let mut idx = filled(Index::with_sorted(), &gen_sections(n, 400.0));
        for v in gen_random(pending, height) {
            let _ = idx.insert(Threshold(v));
        }
        group.bench_function(format!("pending_{pending}"), |b| {
            b.iter(|| {
                for &p in &positions {
                    black_box(idx.floor(p, &()));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_floor, bench_insert_reorder, bench_unplaced);
criterion_main!(benches);
