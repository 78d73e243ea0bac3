// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection toggling: the default behavior of a drag-select gesture.
//!
//! [`GestureRouter::new`](crate::gesture::GestureRouter::new) installs a
//! [`ToggleSelection`] over a [`SelectionSet`], so each element the pointer enters flips
//! in or out of the set. Hosts that keep the flag on their own elements can implement
//! [`Selectable`] or [`SelectionStore`] instead.

use alloc::vec::Vec;

use crate::gesture::ProcessHandler;
use crate::types::{EventPhase, Target};

/// An element carrying a boolean selected flag.
pub trait Selectable {
    /// Current flag.
    fn is_selected(&self) -> bool;
    /// Overwrite the flag.
    fn set_selected(&mut self, selected: bool);
    /// Flip the flag.
    fn toggle_selected(&mut self) {
        let next = !self.is_selected();
        self.set_selected(next);
    }
}

impl Selectable for bool {
    fn is_selected(&self) -> bool {
        *self
    }

    fn set_selected(&mut self, selected: bool) {
        *self = selected;
    }
}

/// Flip `element`'s selected flag.
pub fn toggle_selected<E: Selectable + ?Sized>(element: &mut E) {
    element.toggle_selected();
}

/// Storage keyed by element handle that can toggle selection.
pub trait SelectionStore<H> {
    /// Flip `handle`'s selection; returns whether it is now selected.
    fn toggle(&mut self, handle: H) -> bool;
}

/// Selected handles in the order they were first selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSet<H> {
    selected: Vec<H>,
}

impl<H> Default for SelectionSet<H> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
        }
    }
}

impl<H: Copy + Eq> SelectionSet<H> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `handle` is selected.
    pub fn contains(&self, handle: H) -> bool {
        self.selected.contains(&handle)
    }

    /// Number of selected handles.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected handles, oldest first.
    pub fn as_slice(&self) -> &[H] {
        &self.selected
    }

    /// Iterate selected handles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = H> + '_ {
        self.selected.iter().copied()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl<H: Copy + Eq> SelectionStore<H> for SelectionSet<H> {
    fn toggle(&mut self, handle: H) -> bool {
        if let Some(i) = self.selected.iter().position(|&h| h == handle) {
            self.selected.remove(i);
            false
        } else {
            self.selected.push(handle);
            true
        }
    }
}

/// [`ProcessHandler`] that toggles each processed element in a [`SelectionStore`].
///
/// The end-of-gesture call carries no target and is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleSelection<S> {
    store: S,
}

impl<S> ToggleSelection<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying store, mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<H, S: SelectionStore<H>> ProcessHandler<H> for ToggleSelection<S> {
    fn process(&mut self, target: Option<Target<H>>, _phase: EventPhase) {
        if let Some(t) = target {
            self.store.toggle(t.handle);
        }
    }
}
