// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for gesture routing.
//!
//! [`TraceSink`] has one method per routing decision; every body defaults to a no-op, so
//! implement only what you need.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. Without the `trace` feature every
//! `Tracer` method compiles to nothing. With it, each method is a single `Option` branch
//! before dispatching.

use kurbo::Point;

use crate::types::EventPhase;

/// Emitted after a start or move event resolves its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTestEvent {
    /// Phase of the event that triggered the hit test.
    pub phase: EventPhase,
    /// Pointer position, container-local.
    pub position: Point,
    /// Child index of the winner, if any.
    pub index: Option<usize>,
}

/// Emitted each time the process handler is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchEvent {
    /// Phase passed to the handler.
    pub phase: EventPhase,
    /// Child index of the processed element; `None` for the end-of-gesture call.
    pub index: Option<usize>,
}

/// Emitted when a hit is suppressed because it repeats the last processed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DedupEvent {
    /// Phase of the suppressed event.
    pub phase: EventPhase,
    /// Child index of the repeated element.
    pub index: usize,
}

/// Emitted after interception flags are pushed up the ancestor chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterceptEvent {
    /// `false` when claiming the gesture, `true` when releasing it.
    pub allowed: bool,
    /// How many ancestors were updated.
    pub ancestors: usize,
}

/// Emitted when a start event misses under a scrollable ancestor and the gesture is
/// handed back to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RejectEvent {
    /// Pointer position of the rejected start.
    pub position: Point,
}

/// Receiver for routing diagnostics.
pub trait TraceSink {
    /// A start or move event was hit-tested.
    fn on_hit_test(&mut self, e: &HitTestEvent) {
        _ = e;
    }
    /// The process handler was invoked.
    fn on_dispatch(&mut self, e: &DispatchEvent) {
        _ = e;
    }
    /// A repeat hit on the last target was suppressed.
    fn on_dedup(&mut self, e: &DedupEvent) {
        _ = e;
    }
    /// Interception flags were pushed up the ancestor chain.
    fn on_intercept(&mut self, e: &InterceptEvent) {
        _ = e;
    }
    /// The gesture was rejected in favor of ancestor scrolling.
    fn on_reject(&mut self, e: &RejectEvent) {
        _ = e;
    }
}

/// Zero-cost handle to an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`HitTestEvent`].
    #[inline]
    pub fn hit_test(&mut self, e: &HitTestEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_hit_test(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DispatchEvent`].
    #[inline]
    pub fn dispatch(&mut self, e: &DispatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_dispatch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DedupEvent`].
    #[inline]
    pub fn dedup(&mut self, e: &DedupEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_dedup(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InterceptEvent`].
    #[inline]
    pub fn intercept(&mut self, e: &InterceptEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_intercept(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RejectEvent`].
    #[inline]
    pub fn reject(&mut self, e: &RejectEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reject(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        hits: usize,
        rejects: usize,
    }

    impl TraceSink for Counting {
        fn on_hit_test(&mut self, _e: &HitTestEvent) {
            self.hits += 1;
        }
        fn on_reject(&mut self, _e: &RejectEvent) {
            self.rejects += 1;
        }
    }

    #[test]
    fn tracer_forwards_only_when_enabled() {
        let mut sink = Counting::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.hit_test(&HitTestEvent {
                phase: EventPhase::Move,
                position: Point::ORIGIN,
                index: Some(0),
            });
            tracer.reject(&RejectEvent {
                position: Point::ORIGIN,
            });
            // Unimplemented sink methods fall back to no-ops.
            tracer.dedup(&DedupEvent {
                phase: EventPhase::Move,
                index: 0,
            });
        }
        let expected = usize::from(cfg!(feature = "trace"));
        assert_eq!(sink.hits, expected);
        assert_eq!(sink.rejects, expected);
    }

    #[test]
    fn none_tracer_discards() {
        let mut tracer = Tracer::none();
        tracer.intercept(&InterceptEvent {
            allowed: true,
            ancestors: 3,
        });
    }
}
