// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag Select: slide-to-select gesture routing for sibling elements.
//!
//! ## Overview
//!
//! Drag a pointer across a container of selectable elements and every distinct element it
//! passes over is processed once (toggled, by default). Lingering on an element does not
//! re-fire; leaving it and coming back does.
//!
//! Elements may be translated, rotated, and may overlap. The hit test undoes each
//! element's rotation around its translated center, and among overlapping hits the
//! smallest element wins, so small items drawn over large ones stay reachable.
//!
//! This crate does not own a view tree. The host exposes its children and ancestors
//! through the [`Children`](crate::types::Children) and
//! [`AncestorChain`](crate::types::AncestorChain) capabilities, re-queried on every event.
//!
//! ## Modules
//!
//! - [`geometry`]: rotation-aware hit testing and smallest-area target selection.
//! - [`gesture`]: the per-gesture state machine, deduplication, and scroll arbitration.
//! - [`select`]: selection toggling, the router's default behavior.
//! - [`trace`]: optional diagnostics sink.
//! - [`types`]: geometry snapshots, pointer events, gesture state, host capabilities.
//!
//! ## Scroll arbitration
//!
//! A selection surface inside a scroller has to decide, at first contact, whether the
//! drag is a selection or a scroll. If the pointer starts on an element, the
//! [`GestureRouter`](crate::gesture::GestureRouter) claims the gesture and tells every
//! ancestor to stop intercepting. If it starts on empty space, the router returns `false`
//! and the host lets the scroller have the rest of the gesture.
//!
//! ## Workflow
//!
//! 1) Implement [`Children`](crate::types::Children) over your toolkit's child list,
//!    or pass a slice of `(handle, ElementGeometry)` pairs.
//! 2) Implement [`Ancestor`](crate::types::Ancestor) for your scroll containers, or use
//!    [`NoAncestors`](crate::types::NoAncestors) at the root.
//! 3) Forward every pointer event to
//!    [`GestureRouter::on_process_event`](crate::gesture::GestureRouter::on_process_event)
//!    and honor its return value.
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_drag_select::gesture::{GestureRouter, RouterOptions};
//! use understory_drag_select::types::{
//!     Ancestor, ElementGeometry, EventPhase, PointerEvent, Target,
//! };
//!
//! struct Scroller {
//!     intercept: bool,
//! }
//!
//! impl Ancestor for Scroller {
//!     fn is_scrollable(&self) -> bool {
//!         true
//!     }
//!     fn set_intercept_allowed(&mut self, allowed: bool) {
//!         self.intercept = allowed;
//!     }
//! }
//!
//! let cards = vec![
//!     ('a', ElementGeometry::new(Rect::new(0.0, 0.0, 50.0, 50.0))),
//!     ('b', ElementGeometry::new(Rect::new(0.0, 0.0, 50.0, 50.0))
//!         .with_translation(Vec2::new(60.0, 0.0))
//!         .with_rotation(15.0)),
//! ];
//! let mut ancestors = vec![Scroller { intercept: true }];
//! let mut seen = Vec::new();
//! let mut router = GestureRouter::with_handler(
//!     RouterOptions::default(),
//!     |t: Option<Target<char>>, phase: EventPhase| seen.push((t.map(|t| t.handle), phase)),
//! );
//!
//! assert!(router.on_process_event(&cards, &mut ancestors, PointerEvent::start((25.0, 25.0))));
//! assert!(!ancestors[0].intercept);
//! assert!(router.on_process_event(&cards, &mut ancestors, PointerEvent::moved((85.0, 25.0))));
//! assert!(router.on_process_event(&cards, &mut ancestors, PointerEvent::end((85.0, 25.0))));
//! assert!(ancestors[0].intercept);
//! drop(router);
//!
//! assert_eq!(
//!     seen,
//!     [
//!         (Some('a'), EventPhase::Start),
//!         (Some('b'), EventPhase::Move),
//!         (None, EventPhase::End),
//!     ]
//! );
//! ```
//!
//! ## Crate features
//!
//! - `std` (enabled by default): Enables `std` support in Kurbo.
//! - `libm`: Uses `libm` for Kurbo's float math on `no_std` targets.
//! - `trace` (disabled by default): Enables [`Tracer`](crate::trace::Tracer) method
//!   bodies (one branch per call site).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;
pub mod gesture;
pub mod select;
pub mod trace;
pub mod types;
