// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag select across a grid, then across overlapping rotated cards.
//!
//! Run:
//! - `cargo run -p understory_drag_select_demos --example drag_select_basics`

use kurbo::{Point, Rect, Vec2};
use understory_drag_select::geometry::candidates;
use understory_drag_select::gesture::GestureRouter;
use understory_drag_select::types::{ElementGeometry, NoAncestors, PointerEvent};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct TileId(u32);

fn grid(cols: u32, rows: u32, size: f64, gap: f64) -> Vec<(TileId, ElementGeometry)> {
    let mut out = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let x0 = f64::from(col) * (size + gap);
            let y0 = f64::from(row) * (size + gap);
            out.push((
                TileId(row * cols + col),
                ElementGeometry::new(Rect::new(x0, y0, x0 + size, y0 + size)),
            ));
        }
    }
    out
}

fn drag(
    router: &mut GestureRouter<TileId>,
    children: &[(TileId, ElementGeometry)],
    from: Point,
    to: Point,
    steps: u32,
) {
    let mut root = NoAncestors;
    router.on_process_event(children, &mut root, PointerEvent::start(from));
    for i in 1..=steps {
        let pt = from.lerp(to, f64::from(i) / f64::from(steps));
        router.on_process_event(children, &mut root, PointerEvent::moved(pt));
    }
    router.on_process_event(children, &mut root, PointerEvent::end(to));
}

fn main() {
    // 3×3 grid of 40px tiles with 10px gutters.
    let tiles = grid(3, 3, 40.0, 10.0);
    let mut router: GestureRouter<TileId> = GestureRouter::new();

    drag(
        &mut router,
        &tiles,
        Point::new(20.0, 20.0),
        Point::new(120.0, 120.0),
        10,
    );
    let selected: Vec<_> = router.handler().store().iter().collect();
    println!("== Diagonal drag ==\n  selected {:?}", selected);
    assert_eq!(selected, vec![TileId(0), TileId(4), TileId(8)]);

    // Dragging back over the same diagonal toggles them off again.
    drag(
        &mut router,
        &tiles,
        Point::new(120.0, 120.0),
        Point::new(20.0, 20.0),
        10,
    );
    println!(
        "== Reverse drag ==\n  selected {:?}",
        router.handler().store().as_slice()
    );
    assert!(router.handler().store().is_empty());

    // A large card with a small rotated badge on top of it.
    let cards = vec![
        (
            TileId(100),
            ElementGeometry::new(Rect::new(0.0, 0.0, 200.0, 120.0)),
        ),
        (
            TileId(101),
            ElementGeometry::new(Rect::new(0.0, 0.0, 60.0, 20.0))
                .with_translation(Vec2::new(70.0, 50.0))
                .with_rotation(45.0),
        ),
    ];
    let badge_center = Point::new(100.0, 60.0);
    let hits = candidates(&cards, badge_center);
    println!("== Candidates at badge center ==\n  {:?}", hits);
    assert_eq!(hits.len(), 2);

    drag(
        &mut router,
        &cards,
        badge_center,
        Point::new(10.0, 10.0),
        4,
    );
    println!(
        "== Badge then card ==\n  selected {:?}",
        router.handler().store().as_slice()
    );
    assert_eq!(
        router.handler().store().as_slice(),
        &[TileId(101), TileId(100)]
    );
}
