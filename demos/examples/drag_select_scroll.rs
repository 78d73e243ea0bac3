// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll arbitration inside a scrolling list, with trace output.
//!
//! A drag that starts on an item claims the gesture from every enclosing scroller. A
//! drag that starts on empty space is handed back to the scroller.
//!
//! Run:
//! - `cargo run -p understory_drag_select_demos --example drag_select_scroll`

use std::io::Write;

use kurbo::Rect;
use understory_drag_select::gesture::{GestureRouter, RouterOptions};
use understory_drag_select::trace::{
    DedupEvent, DispatchEvent, HitTestEvent, InterceptEvent, RejectEvent, TraceSink, Tracer,
};
use understory_drag_select::types::{
    Ancestor, ElementGeometry, EventPhase, PointerEvent, Target,
};

/// Writes one trace line per routing decision.
struct PrettyPrintSink<W: Write> {
    writer: W,
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_hit_test(&mut self, e: &HitTestEvent) {
        let _ = writeln!(
            self.writer,
            "[hit] {:?} at ({:.1}, {:.1}) -> {:?}",
            e.phase, e.position.x, e.position.y, e.index,
        );
    }

    fn on_dispatch(&mut self, e: &DispatchEvent) {
        let _ = writeln!(self.writer, "[dispatch] {:?} index={:?}", e.phase, e.index);
    }

    fn on_dedup(&mut self, e: &DedupEvent) {
        let _ = writeln!(self.writer, "[dedup] {:?} index={}", e.phase, e.index);
    }

    fn on_intercept(&mut self, e: &InterceptEvent) {
        let verb = if e.allowed { "release" } else { "claim" };
        let _ = writeln!(self.writer, "[{verb}] ancestors={}", e.ancestors);
    }

    fn on_reject(&mut self, e: &RejectEvent) {
        let _ = writeln!(
            self.writer,
            "[reject] start at ({:.1}, {:.1}) left to scroller",
            e.position.x, e.position.y,
        );
    }
}

#[derive(Debug)]
struct Container {
    name: &'static str,
    scrolls: bool,
    intercept_allowed: bool,
}

impl Ancestor for Container {
    fn is_scrollable(&self) -> bool {
        self.scrolls
    }

    fn set_intercept_allowed(&mut self, allowed: bool) {
        self.intercept_allowed = allowed;
    }
}

fn main() {
    // A single column of rows, 200 wide, 30 tall, 10 apart.
    let rows: Vec<(u32, ElementGeometry)> = (0..5)
        .map(|i| {
            let y0 = f64::from(i) * 40.0;
            (i, ElementGeometry::new(Rect::new(0.0, y0, 200.0, y0 + 30.0)))
        })
        .collect();

    let mut ancestors = vec![
        Container {
            name: "list",
            scrolls: true,
            intercept_allowed: true,
        },
        Container {
            name: "page",
            scrolls: true,
            intercept_allowed: true,
        },
    ];

    let mut sink = PrettyPrintSink {
        writer: std::io::stdout(),
    };
    let mut picked = Vec::new();
    let mut router = GestureRouter::with_handler(
        RouterOptions::default(),
        |t: Option<Target<u32>>, _phase: EventPhase| {
            if let Some(t) = t {
                picked.push(t.handle);
            }
        },
    );

    println!("== Drag starting on a row ==");
    {
        let mut tracer = Tracer::new(&mut sink);
        let mut send = |ev| router.on_process_event_traced(&rows, &mut ancestors, ev, &mut tracer);
        assert!(send(PointerEvent::start((50.0, 10.0))));
        assert!(send(PointerEvent::moved((50.0, 20.0))));
        assert!(send(PointerEvent::moved((50.0, 35.0))));
        assert!(send(PointerEvent::moved((50.0, 50.0))));
        assert!(send(PointerEvent::moved((50.0, 95.0))));
    }
    for a in &ancestors {
        println!("  {} intercept_allowed={}", a.name, a.intercept_allowed);
        assert!(!a.intercept_allowed);
    }
    {
        let mut tracer = Tracer::new(&mut sink);
        router.on_process_event_traced(
            &rows,
            &mut ancestors,
            PointerEvent::end((50.0, 95.0)),
            &mut tracer,
        );
    }
    assert!(ancestors.iter().all(|a| a.intercept_allowed));

    println!("== Drag starting in the gutter ==");
    let handled = {
        let mut tracer = Tracer::new(&mut sink);
        router.on_process_event_traced(
            &rows,
            &mut ancestors,
            PointerEvent::start((50.0, 35.0)),
            &mut tracer,
        )
    };
    // The host stops feeding this gesture to the router and scrolls instead.
    println!("  handled={handled}");
    assert!(!handled);
    assert!(ancestors.iter().all(|a| a.intercept_allowed));

    drop(router);
    println!("== Picked rows ==\n  {:?}", picked);
    assert_eq!(picked, vec![0, 1, 2]);
}
