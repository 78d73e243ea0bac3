// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_drag_select::gesture::GestureRouter;
use understory_drag_select::types::{ElementGeometry, NoAncestors, PointerEvent};

fn gen_grid(n: usize, cell: f64) -> Vec<(u32, ElementGeometry)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push((
                (y * n + x) as u32,
                ElementGeometry::new(Rect::new(x0, y0, x0 + cell * 0.8, y0 + cell * 0.8)),
            ));
        }
    }
    out
}

// A diagonal drag sampled every pixel, so most moves repeat the last target.
fn diagonal(len: usize) -> Vec<PointerEvent> {
    let mut out = Vec::with_capacity(len + 2);
    out.push(PointerEvent::start(Point::new(1.0, 1.0)));
    for i in 1..=len {
        let t = i as f64;
        out.push(PointerEvent::moved(Point::new(1.0 + t, 1.0 + t)));
    }
    out.push(PointerEvent::end(Point::new(1.0 + len as f64, 1.0 + len as f64)));
    out
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_stream");
    for &n in &[8usize, 32] {
        let grid = gen_grid(n, 10.0);
        let events = diagonal(n * 10);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(format!("diagonal_n{}", n), |b| {
            b.iter_batched(
                GestureRouter::<u32>::new,
                |mut router| {
                    let mut root = NoAncestors;
                    for &ev in &events {
                        black_box(router.on_process_event(&grid, &mut root, ev));
                    }
                    black_box(router.handler().store().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stream);
criterion_main!(benches);
