// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing: which single child lies under a pointer position.
//!
//! ## Overview
//!
//! For each visible, pickable child the pointer is rotated back into the child's own
//! unrotated frame (around the child's translated center) and tested against its bounds,
//! inclusive on every edge. Among all hits the smallest untransformed area wins, so a
//! small element drawn over a large one stays selectable. Equal areas resolve to the
//! first child in iteration order.
//!
//! A rotation of exactly `0.0` skips the transform, so unrotated elements hit-test
//! identically to a plain rectangle check.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_drag_select::geometry::find_target;
//! use understory_drag_select::types::ElementGeometry;
//!
//! let children = [
//!     ("backdrop", ElementGeometry::new(Rect::new(0.0, 0.0, 100.0, 100.0))),
//!     ("badge", ElementGeometry::new(Rect::new(40.0, 40.0, 60.0, 60.0))),
//! ];
//! let hit = find_target(&children, Point::new(50.0, 50.0)).unwrap();
//! assert_eq!((hit.index, hit.handle), (1, "badge"));
//! let hit = find_target(&children, Point::new(10.0, 10.0)).unwrap();
//! assert_eq!((hit.index, hit.handle), (0, "backdrop"));
//! assert!(find_target(&children, Point::new(150.0, 10.0)).is_none());
//! ```

use alloc::vec::Vec;

use core::f64::consts::PI;

use kurbo::{Point, Vec2};

use crate::types::{Candidate, Children, ElementGeometry, Target};

/// Rotate `pt` around `center` by `-rotation_degrees`, undoing a clockwise on-screen
/// rotation (y down).
///
/// Returns `pt` unchanged when `rotation_degrees == 0.0`.
pub fn unrotate(pt: Point, center: Point, rotation_degrees: f64) -> Point {
    if rotation_degrees == 0.0 {
        return pt;
    }
    let Vec2 { x: cos, y: sin } = Vec2::from_angle(rotation_degrees * PI / 180.0);
    let d = pt - center;
    Point::new(
        d.x * cos + d.y * sin + center.x,
        -d.x * sin + d.y * cos + center.y,
    )
}

/// Whether `pt` lands on the element described by `geometry`.
///
/// Hidden or unpickable elements never hit.
pub fn hit_test(geometry: &ElementGeometry, pt: Point) -> bool {
    if !geometry.is_pickable() {
        return false;
    }
    let local = unrotate(pt, geometry.center(), geometry.rotation_degrees);
    geometry.contains_local(local)
}

/// All children under `pt`, in iteration order.
pub fn candidates<C>(children: &C, pt: Point) -> Vec<Candidate<C::Handle>>
where
    C: Children + ?Sized,
{
    (0..children.child_count())
        .filter_map(|index| {
            let (handle, geometry) = children.child_at(index);
            hit_test(&geometry, pt).then(|| Candidate {
                index,
                handle,
                area: geometry.area(),
            })
        })
        .collect()
}

/// The single child under `pt`, if any.
///
/// Smallest untransformed area wins; ties keep the earliest child.
pub fn find_target<C>(children: &C, pt: Point) -> Option<Target<C::Handle>>
where
    C: Children + ?Sized,
{
    // Single pass without allocation; `candidates` is the listing equivalent.
    let mut best: Option<Candidate<C::Handle>> = None;
    for index in 0..children.child_count() {
        let (handle, geometry) = children.child_at(index);
        if !hit_test(&geometry, pt) {
            continue;
        }
        let area = geometry.area();
        match best {
            Some(b) if b.area <= area => {}
            _ => {
                best = Some(Candidate {
                    index,
                    handle,
                    area,
                });
            }
        }
    }
    best.map(Target::from)
}
