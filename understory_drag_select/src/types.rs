// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: element geometry, pointer events, gesture state, and the host capabilities
//! the router consumes.
//!
//! ## Overview
//!
//! The host owns the view tree. This crate only sees it through two narrow capabilities:
//!
//! - [`Children`]: an ordered, indexable list of sibling elements, each with an opaque
//!   identity handle and a fresh [`ElementGeometry`] snapshot.
//! - [`AncestorChain`]: the containers enclosing the selection surface, which may scroll
//!   and can be told to stop intercepting pointer events.
//!
//! Both are re-queried on every event; nothing here caches host geometry.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

bitflags::bitflags! {
    /// Element flags controlling participation in drag selection.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is shown on screen.
        const VISIBLE  = 0b0000_0001;
        /// Element may be picked by the drag-select hit test.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// A snapshot of one child element's geometry, in container-local coordinates.
///
/// `bounds` is the axis-aligned, pre-rotation layout box and does not include
/// `translation`. Rotation is in degrees, clockwise on screen (y points down), around
/// the element's translated center.
///
/// Precondition: all coordinates are finite. NaN or infinite geometry makes the
/// containment test meaningless and must be filtered out by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementGeometry {
    /// Untransformed layout bounds.
    pub bounds: Rect,
    /// Translation offset applied on top of `bounds`.
    pub translation: Vec2,
    /// Clockwise rotation in degrees.
    pub rotation_degrees: f64,
    /// Visibility and pickability.
    pub flags: ElementFlags,
}

impl ElementGeometry {
    /// Unrotated, untranslated, visible and pickable geometry for `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            translation: Vec2::ZERO,
            rotation_degrees: 0.0,
            flags: ElementFlags::default(),
        }
    }

    /// Replace the translation offset.
    #[must_use]
    pub fn with_translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    /// Replace the rotation, in clockwise degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotation_degrees: f64) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the element is shown.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE)
    }

    /// Whether the element is both shown and pickable.
    pub fn is_pickable(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE | ElementFlags::PICKABLE)
    }

    /// Rotation pivot: the center of `bounds` shifted by `translation`.
    pub fn center(&self) -> Point {
        self.bounds.center() + self.translation
    }

    /// Area of the untransformed `bounds`. Used to rank overlapping hits.
    pub fn area(&self) -> f64 {
        self.bounds.area()
    }

    /// Containment test for a point already expressed in the element's unrotated frame.
    ///
    /// Both ends of each interval are inclusive, unlike [`Rect::contains`].
    pub fn contains_local(&self, pt: Point) -> bool {
        let p = pt - self.translation;
        let b = self.bounds;
        p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1
    }
}

/// The single element a pointer position resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target<H> {
    /// Position among the container's children at resolution time.
    pub index: usize,
    /// Host identity of the element.
    pub handle: H,
}

/// A hit recorded during resolution, before the smallest-area winner is picked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<H> {
    /// Position among the container's children.
    pub index: usize,
    /// Host identity of the element.
    pub handle: H,
    /// Area of the element's untransformed bounds.
    pub area: f64,
}

impl<H> From<Candidate<H>> for Target<H> {
    fn from(c: Candidate<H>) -> Self {
        Self {
            index: c.index,
            handle: c.handle,
        }
    }
}

/// Phase of a pointer event within one gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventPhase {
    /// First contact.
    Start,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted or the gesture otherwise terminated.
    End,
}

/// A pointer event in container-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Where in the gesture this event falls.
    pub phase: EventPhase,
    /// Pointer position.
    pub position: Point,
}

impl PointerEvent {
    /// A [`EventPhase::Start`] event at `position`.
    pub fn start(position: impl Into<Point>) -> Self {
        Self {
            phase: EventPhase::Start,
            position: position.into(),
        }
    }

    /// A [`EventPhase::Move`] event at `position`.
    pub fn moved(position: impl Into<Point>) -> Self {
        Self {
            phase: EventPhase::Move,
            position: position.into(),
        }
    }

    /// An [`EventPhase::End`] event at `position`.
    pub fn end(position: impl Into<Point>) -> Self {
        Self {
            phase: EventPhase::End,
            position: position.into(),
        }
    }
}

/// Whether a gesture is in progress.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum GesturePhase {
    /// No gesture, or the last one ended or was released.
    #[default]
    Idle,
    /// Start or move events are being processed.
    Tracking,
}

/// Per-gesture state owned by one [`GestureRouter`](crate::gesture::GestureRouter).
///
/// `last_target` is compared by handle identity only. If the host removes or replaces an
/// element between events, its stale handle simply stops matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GestureState<H> {
    pub(crate) last_target: Option<H>,
    pub(crate) claimed: bool,
    pub(crate) phase: GesturePhase,
}

impl<H> Default for GestureState<H> {
    fn default() -> Self {
        Self {
            last_target: None,
            claimed: false,
            phase: GesturePhase::Idle,
        }
    }
}

impl<H: Copy> GestureState<H> {
    /// The most recently processed element, if the pointer is still over it.
    pub fn last_target(&self) -> Option<H> {
        self.last_target
    }

    /// Whether this gesture has told its ancestors to stop intercepting.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }
}

/// Ordered sibling elements of a selection container.
///
/// Implement this over your toolkit's child list. Each call must reflect the current
/// layout; the router never caches the result across events.
///
/// `Handle` is an opaque identity, not an index: indices shift when children are added
/// or removed, handles must not. Generational ids work well because stale handles never
/// alias a different live element.
pub trait Children {
    /// Identity of an element.
    type Handle: Copy + Eq;
    /// Number of children.
    fn child_count(&self) -> usize;
    /// Identity and fresh geometry of the child at `index` (`index < child_count()`).
    fn child_at(&self, index: usize) -> (Self::Handle, ElementGeometry);
}

impl<H: Copy + Eq> Children for [(H, ElementGeometry)] {
    type Handle = H;

    #[inline]
    fn child_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn child_at(&self, index: usize) -> (H, ElementGeometry) {
        self[index]
    }
}

impl<H: Copy + Eq, const N: usize> Children for [(H, ElementGeometry); N] {
    type Handle = H;

    #[inline]
    fn child_count(&self) -> usize {
        N
    }

    #[inline]
    fn child_at(&self, index: usize) -> (H, ElementGeometry) {
        self[index]
    }
}

impl<H: Copy + Eq> Children for Vec<(H, ElementGeometry)> {
    type Handle = H;

    #[inline]
    fn child_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn child_at(&self, index: usize) -> (H, ElementGeometry) {
        self[index]
    }
}

/// One enclosing container of the selection surface.
pub trait Ancestor {
    /// Whether this container scrolls in response to drags.
    fn is_scrollable(&self) -> bool;
    /// Allow (`true`) or forbid (`false`) this container from intercepting the
    /// current pointer stream.
    fn set_intercept_allowed(&mut self, allowed: bool);
}

/// The chain of containers enclosing the selection surface, innermost first.
pub trait AncestorChain {
    /// Runtime scrollability of the immediate parent.
    fn parent_scrollable(&self) -> bool;
    /// Visit every ancestor, from the immediate parent outward.
    fn for_each_ancestor(&mut self, f: &mut dyn FnMut(&mut dyn Ancestor));
}

/// An empty ancestor chain, for a selection surface at the root.
///
/// Never scrollable; interception requests go nowhere.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoAncestors;

impl AncestorChain for NoAncestors {
    #[inline]
    fn parent_scrollable(&self) -> bool {
        false
    }

    #[inline]
    fn for_each_ancestor(&mut self, _f: &mut dyn FnMut(&mut dyn Ancestor)) {}
}

impl<A: Ancestor> AncestorChain for [A] {
    fn parent_scrollable(&self) -> bool {
        self.first().is_some_and(A::is_scrollable)
    }

    fn for_each_ancestor(&mut self, f: &mut dyn FnMut(&mut dyn Ancestor)) {
        for a in self.iter_mut() {
            f(a);
        }
    }
}

impl<A: Ancestor> AncestorChain for Vec<A> {
    fn parent_scrollable(&self) -> bool {
        self.as_slice().parent_scrollable()
    }

    fn for_each_ancestor(&mut self, f: &mut dyn FnMut(&mut dyn Ancestor)) {
        self.as_mut_slice().for_each_ancestor(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_visible_and_pickable() {
        let g = ElementGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(g.is_visible());
        assert!(g.is_pickable());
        let hidden = g.with_flags(ElementFlags::PICKABLE);
        assert!(!hidden.is_visible());
        assert!(!hidden.is_pickable());
        let inert = g.with_flags(ElementFlags::VISIBLE);
        assert!(inert.is_visible());
        assert!(!inert.is_pickable());
    }

    #[test]
    fn center_includes_translation() {
        let g = ElementGeometry::new(Rect::new(0.0, 0.0, 10.0, 20.0))
            .with_translation(Vec2::new(5.0, -5.0));
        assert_eq!(g.center(), Point::new(10.0, 5.0));
        // Area ignores translation and rotation.
        assert_eq!(g.with_rotation(30.0).area(), 200.0);
    }

    #[test]
    fn contains_local_is_inclusive() {
        let g = ElementGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(g.contains_local(Point::new(0.0, 0.0)));
        assert!(g.contains_local(Point::new(10.0, 10.0)));
        assert!(g.contains_local(Point::new(10.0, 0.0)));
        assert!(!g.contains_local(Point::new(10.01, 5.0)));
        assert!(!g.contains_local(Point::new(5.0, -0.01)));
    }

    #[test]
    fn contains_local_subtracts_translation() {
        let g = ElementGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_translation(Vec2::new(100.0, 0.0));
        assert!(g.contains_local(Point::new(105.0, 5.0)));
        assert!(!g.contains_local(Point::new(5.0, 5.0)));
    }

    fn handles<C: Children + ?Sized>(children: &C) -> alloc::vec::Vec<C::Handle> {
        (0..children.child_count())
            .map(|i| children.child_at(i).0)
            .collect()
    }

    #[test]
    fn slices_arrays_and_vecs_are_children() {
        let g = ElementGeometry::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        let array = [('a', g), ('b', g)];
        assert_eq!(handles(&array), ['a', 'b']);
        assert_eq!(handles(&array[1..]), ['b']);
        let list = alloc::vec![(7_u32, g)];
        assert_eq!(handles(&list), [7]);
        assert_eq!(list.child_at(0).1, g);
    }

    struct Stub(bool);
    impl Ancestor for Stub {
        fn is_scrollable(&self) -> bool {
            self.0
        }
        fn set_intercept_allowed(&mut self, _allowed: bool) {}
    }

    #[test]
    fn slice_chain_checks_only_immediate_parent() {
        let chain = [Stub(false), Stub(true)];
        assert!(!chain[..].parent_scrollable());
        let chain = alloc::vec![Stub(true), Stub(false)];
        assert!(chain.parent_scrollable());
        let empty: [Stub; 0] = [];
        assert!(!empty[..].parent_scrollable());
        assert!(!NoAncestors.parent_scrollable());
    }
}
