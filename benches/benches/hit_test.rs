// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_drag_select::geometry::{candidates, find_target};
use understory_drag_select::types::ElementGeometry;

fn gen_grid(n: usize, cell: f64, rotation: f64) -> Vec<(u32, ElementGeometry)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            let g = ElementGeometry::new(Rect::new(x0, y0, x0 + cell * 0.8, y0 + cell * 0.8))
                .with_rotation(rotation);
            out.push(((y * n + x) as u32, g));
        }
    }
    out
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

// Cards scattered over a board, each with a smaller badge translated on top.
fn gen_overlapping(count: usize, board: f64) -> Vec<(u32, ElementGeometry)> {
    let mut out = Vec::with_capacity(count * 2);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for i in 0..count {
        let x0 = rng.next_f64() * board;
        let y0 = rng.next_f64() * board;
        let angle = (rng.next_f64() - 0.5) * 30.0;
        out.push((
            (i * 2) as u32,
            ElementGeometry::new(Rect::new(x0, y0, x0 + 80.0, y0 + 60.0)).with_rotation(angle),
        ));
        out.push((
            (i * 2 + 1) as u32,
            ElementGeometry::new(Rect::new(0.0, 0.0, 20.0, 20.0))
                .with_translation(Vec2::new(x0 + 30.0, y0 + 20.0))
                .with_rotation(-angle),
        ));
    }
    out
}

fn bench_find_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_target");
    for &n in &[8usize, 16, 32] {
        group.throughput(Throughput::Elements((n * n) as u64));
        let upright = gen_grid(n, 10.0, 0.0);
        group.bench_function(format!("grid_upright_n{}", n), |b| {
            b.iter(|| black_box(find_target(&upright, black_box(Point::new(43.0, 57.0)))));
        });
        let rotated = gen_grid(n, 10.0, 30.0);
        group.bench_function(format!("grid_rotated_n{}", n), |b| {
            b.iter(|| black_box(find_target(&rotated, black_box(Point::new(43.0, 57.0)))));
        });
    }
    let cards = gen_overlapping(200, 1000.0);
    group.throughput(Throughput::Elements(cards.len() as u64));
    group.bench_function("overlapping_cards", |b| {
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        b.iter(|| {
            let pt = Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0);
            black_box(find_target(&cards, pt))
        });
    });
    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");
    let cards = gen_overlapping(200, 1000.0);
    group.throughput(Throughput::Elements(cards.len() as u64));
    group.bench_function("overlapping_cards", |b| {
        let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
        b.iter(|| {
            let pt = Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0);
            black_box(candidates(&cards, pt).len())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_find_target, bench_candidates);
criterion_main!(benches);
