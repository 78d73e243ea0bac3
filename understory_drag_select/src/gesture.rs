// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture router: turns a pointer stream into one callback per newly entered element.
//!
//! ## Overview
//!
//! Feed every pointer event of a gesture to [`GestureRouter::on_process_event`] together
//! with the container's current [`Children`] and [`AncestorChain`]. The router hit-tests
//! with [`find_target`](crate::geometry::find_target), remembers the last element it
//! processed, and calls its [`ProcessHandler`] only when the pointer enters a different
//! element. Leaving every element forgets the last one, so coming back fires again.
//!
//! ## Scroll arbitration
//!
//! When the immediate parent scrolls, or [`RouterOptions::parent_may_scroll`] is set, a
//! start event decides who owns the gesture:
//!
//! - Start over an element: the router claims the gesture and forbids interception on
//!   every ancestor, not just the parent.
//! - Start over empty space: the router returns `false` and the host should treat the
//!   gesture as a scroll. The router does not re-evaluate on later moves; a caller that
//!   got `false` must stop delivering this gesture's events until the next start.
//!
//! The end event always returns `true`, re-allows interception on every ancestor, and
//! calls the handler with no target.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_drag_select::gesture::GestureRouter;
//! use understory_drag_select::types::{ElementGeometry, NoAncestors, PointerEvent};
//!
//! let children = [
//!     (1_u32, ElementGeometry::new(Rect::new(0.0, 0.0, 100.0, 100.0))),
//!     (2_u32, ElementGeometry::new(Rect::new(40.0, 40.0, 60.0, 60.0))),
//! ];
//! let mut router = GestureRouter::new();
//! let mut root = NoAncestors;
//! for ev in [
//!     PointerEvent::start((50.0, 50.0)),
//!     PointerEvent::moved((52.0, 50.0)),
//!     PointerEvent::moved((10.0, 10.0)),
//!     PointerEvent::end((10.0, 10.0)),
//! ] {
//!     assert!(router.on_process_event(&children, &mut root, ev));
//! }
//! assert_eq!(router.handler().store().as_slice(), &[2, 1]);
//! ```

use core::cell::OnceCell;

use crate::geometry::find_target;
use crate::select::{SelectionSet, ToggleSelection};
use crate::trace::{DedupEvent, DispatchEvent, HitTestEvent, InterceptEvent, RejectEvent, Tracer};
use crate::types::{
    Ancestor, AncestorChain, Children, EventPhase, GesturePhase, GestureState, PointerEvent,
    Target,
};

/// Receives the router's process callbacks.
///
/// Called with `Some(target)` when the pointer enters an element on a start or move
/// event, and once with `None` on [`EventPhase::End`].
pub trait ProcessHandler<H> {
    /// Handle one transition.
    fn process(&mut self, target: Option<Target<H>>, phase: EventPhase);
}

impl<H, F> ProcessHandler<H> for F
where
    F: FnMut(Option<Target<H>>, EventPhase),
{
    #[inline]
    fn process(&mut self, target: Option<Target<H>>, phase: EventPhase) {
        self(target, phase);
    }
}

/// Router configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterOptions {
    /// The enclosing chain might scroll even if the immediate parent does not report it.
    pub parent_may_scroll: bool,
}

/// Drag-select router for one container and one pointer.
///
/// ## Usage
///
/// - Construct with [`GestureRouter::new`] to toggle entered elements in a
///   [`SelectionSet`], or with [`GestureRouter::with_handler`] to supply your own
///   [`ProcessHandler`] (any `FnMut(Option<Target<H>>, EventPhase)` works).
/// - Call [`GestureRouter::on_process_event`] for every pointer event, in order.
/// - Multi-pointer input needs one router per pointer.
pub struct GestureRouter<H, P = ToggleSelection<SelectionSet<H>>> {
    pub(crate) options: RouterOptions,
    pub(crate) state: GestureState<H>,
    pub(crate) handler: P,
}

impl<H: core::fmt::Debug, P> core::fmt::Debug for GestureRouter<H, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GestureRouter")
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<H: Copy + Eq> GestureRouter<H> {
    /// Create a router that toggles entered elements in a [`SelectionSet`].
    pub fn new() -> Self {
        Self::with_handler(RouterOptions::default(), ToggleSelection::default())
    }
}

impl<H: Copy + Eq> Default for GestureRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Eq, P: ProcessHandler<H>> GestureRouter<H, P> {
    /// Create a router with explicit options and handler.
    pub fn with_handler(options: RouterOptions, handler: P) -> Self {
        Self {
            options,
            state: GestureState::default(),
            handler,
        }
    }

    /// Declare whether the enclosing chain might scroll.
    pub fn set_parent_may_scroll(&mut self, may_scroll: bool) {
        self.options.parent_may_scroll = may_scroll;
    }

    /// Current options.
    pub fn options(&self) -> RouterOptions {
        self.options
    }

    /// Current per-gesture state.
    pub fn state(&self) -> &GestureState<H> {
        &self.state
    }

    /// The most recently processed element, if the pointer has not left it.
    pub fn last_target(&self) -> Option<H> {
        self.state.last_target
    }

    /// Whether the current gesture has claimed its ancestors.
    pub fn is_claimed(&self) -> bool {
        self.state.claimed
    }

    /// The process handler.
    pub fn handler(&self) -> &P {
        &self.handler
    }

    /// The process handler, mutably.
    pub fn handler_mut(&mut self) -> &mut P {
        &mut self.handler
    }

    /// Consume the router, returning its handler.
    pub fn into_handler(self) -> P {
        self.handler
    }

    /// Abandon the current gesture without calling the handler.
    ///
    /// Re-allows interception up the chain if this gesture had claimed it.
    pub fn reset<A: AncestorChain + ?Sized>(&mut self, ancestors: &mut A) {
        self.reset_traced(ancestors, &mut Tracer::none());
    }

    fn reset_traced<A: AncestorChain + ?Sized>(
        &mut self,
        ancestors: &mut A,
        tracer: &mut Tracer<'_>,
    ) {
        if self.state.claimed {
            set_intercept_allowed(ancestors, true, tracer);
        }
        self.state = GestureState::default();
    }

    /// Process one pointer event.
    ///
    /// Returns `true` when the router consumed the event, `false` when the host should
    /// let an ancestor scroll instead (see the module docs).
    pub fn on_process_event<C, A>(
        &mut self,
        children: &C,
        ancestors: &mut A,
        event: PointerEvent,
    ) -> bool
    where
        C: Children<Handle = H> + ?Sized,
        A: AncestorChain + ?Sized,
    {
        self.on_process_event_traced(children, ancestors, event, &mut Tracer::none())
    }

    /// [`on_process_event`](Self::on_process_event) with diagnostics.
    pub fn on_process_event_traced<C, A>(
        &mut self,
        children: &C,
        ancestors: &mut A,
        event: PointerEvent,
        tracer: &mut Tracer<'_>,
    ) -> bool
    where
        C: Children<Handle = H> + ?Sized,
        A: AncestorChain + ?Sized,
    {
        let PointerEvent { phase, position } = event;

        if phase == EventPhase::End {
            self.state = GestureState::default();
            set_intercept_allowed(ancestors, true, tracer);
            self.handler.process(None, EventPhase::End);
            tracer.dispatch(&DispatchEvent { phase, index: None });
            return true;
        }

        if phase == EventPhase::Start {
            // A new gesture starts clean even if the previous one never saw its end.
            self.reset_traced(ancestors, tracer);
        }
        self.state.phase = GesturePhase::Tracking;

        // Hit-test at most once, and not before the scroll guard needs it.
        let resolved = OnceCell::new();
        let target = || *resolved.get_or_init(|| find_target(children, position));

        if (ancestors.parent_scrollable() || self.options.parent_may_scroll)
            && phase == EventPhase::Start
        {
            if target().is_some() {
                self.state.claimed = true;
                set_intercept_allowed(ancestors, false, tracer);
            } else {
                self.state = GestureState::default();
                tracer.hit_test(&HitTestEvent {
                    phase,
                    position,
                    index: None,
                });
                tracer.reject(&RejectEvent { position });
                return false;
            }
        }

        let hit = target();
        tracer.hit_test(&HitTestEvent {
            phase,
            position,
            index: hit.map(|t| t.index),
        });
        match hit {
            Some(t) if self.state.last_target == Some(t.handle) => {
                tracer.dedup(&DedupEvent {
                    phase,
                    index: t.index,
                });
            }
            Some(t) => {
                self.handler.process(Some(t), phase);
                self.state.last_target = Some(t.handle);
                tracer.dispatch(&DispatchEvent {
                    phase,
                    index: Some(t.index),
                });
            }
            None => self.state.last_target = None,
        }
        true
    }
}

fn set_intercept_allowed<A: AncestorChain + ?Sized>(
    ancestors: &mut A,
    allowed: bool,
    tracer: &mut Tracer<'_>,
) {
    let mut count = 0;
    ancestors.for_each_ancestor(&mut |a: &mut dyn Ancestor| {
        a.set_intercept_allowed(allowed);
        count += 1;
    });
    tracer.intercept(&InterceptEvent {
        allowed,
        ancestors: count,
    });
}
