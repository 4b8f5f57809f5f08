// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use waypost_index::Backend;
use waypost_scroll::{Dispatcher, DispatcherGeneric, PageLayout, Signal, ValueSource};

const SECTION: f64 = 600.0;

fn page(sections: usize) -> PageLayout<usize> {
    let mut page = PageLayout::new(Size::new(1280.0, sections as f64 * SECTION));
    for i in 0..sections {
        let top = i as f64 * SECTION;
        page.place(i, Rect::new(0.0, top, 1280.0, top + SECTION));
    }
    page
}

fn register<B: Backend<f64>>(d: &mut DispatcherGeneric<usize, B>, sections: usize) {
    for i in 0..sections {
        let _ = d.add_with_offset(ValueSource::tracked(i), -80.0, || {});
    }
}

/// Scroll through the whole page in small steps and back.
fn sweep<B: Backend<f64>>(d: &mut DispatcherGeneric<usize, B>, page: &mut PageLayout<usize>) {
    let end = page.document().height;
    let mut top = 0.0;
    while top < end {
        page.scroll_to(top);
        black_box(d.handle(Signal::SCROLL, &*page));
        top += 37.0;
    }
    while top > 0.0 {
        top -= 37.0;
        page.scroll_to(top);
        black_box(d.handle(Signal::SCROLL, &*page));
    }
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_sweep");
    for &n in &[8usize, 64, 512] {
        let steps = (2.0 * n as f64 * SECTION / 37.0) as u64;
        group.throughput(Throughput::Elements(steps));

        let mut layout = page(n);
        let mut linear = Dispatcher::new();
        register(&mut linear, n);
        let _ = linear.handle(Signal::LOAD, &layout);
        group.bench_function(format!("linear_n{n}"), |b| {
            b.iter(|| sweep(&mut linear, &mut layout))
        });

        let mut layout = page(n);
        let mut sorted = Dispatcher::sorted();
        register(&mut sorted, n);
        let _ = sorted.handle(Signal::LOAD, &layout);
        group.bench_function(format!("sorted_n{n}"), |b| {
            b.iter(|| sweep(&mut sorted, &mut layout))
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_resize");
    for &n in &[64usize, 512] {
        let layout = page(n);

        let mut linear = Dispatcher::new();
        register(&mut linear, n);
        group.bench_function(format!("linear_n{n}"), |b| {
            b.iter(|| black_box(linear.handle(Signal::RESIZE, &layout)))
        });

        let mut sorted = Dispatcher::sorted();
        register(&mut sorted, n);
        group.bench_function(format!("sorted_n{n}"), |b| {
            b.iter(|| black_box(sorted.handle(Signal::RESIZE, &layout)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_resize);
criterion_main!(benches);
