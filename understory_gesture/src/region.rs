// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region handles: anything that can report its current bounding rectangle.
//!
//! Trackers never keep a rectangle past the event that asked for it. Layout
//! may change between two events, so bounds are queried again every time.
//!
//! ```
//! use kurbo::Rect;
//! use understory_gesture::region::{Region, SharedRegion};
//!
//! let area = SharedRegion::new();
//! assert_eq!(area.bounds(), None);
//!
//! // The host lays the region out; every clone sees the new bounds.
//! let seen_by_tracker = area.clone();
//! area.set_bounds(Some(Rect::new(0.0, 0.0, 200.0, 100.0)));
//! assert_eq!(seen_by_tracker.bounds(), Some(Rect::new(0.0, 0.0, 200.0, 100.0)));
//! ```

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Rect;

/// A UI region that can be asked for its current bounds in client coordinates.
pub trait Region {
    /// Current bounding rectangle, or `None` if the region is not laid out.
    fn bounds(&self) -> Option<Rect>;
}

impl Region for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Region for Option<Rect> {
    fn bounds(&self) -> Option<Rect> {
        *self
    }
}

impl Region for Cell<Option<Rect>> {
    fn bounds(&self) -> Option<Rect> {
        self.get()
    }
}

impl<R: Region + ?Sized> Region for &R {
    fn bounds(&self) -> Option<Rect> {
        (**self).bounds()
    }
}

impl<R: Region + ?Sized> Region for Rc<R> {
    fn bounds(&self) -> Option<Rect> {
        (**self).bounds()
    }
}

/// A cloneable region handle whose bounds the host updates in place.
///
/// All clones share the same cell, so a tracker holding a clone observes
/// layout changes made through any other clone.
#[derive(Clone, Debug, Default)]
pub struct SharedRegion(Rc<Cell<Option<Rect>>>);

impl SharedRegion {
    /// Creates a region that is not laid out yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region that is already laid out at `rect`.
    #[must_use]
    pub fn with_bounds(rect: Rect) -> Self {
        Self(Rc::new(Cell::new(Some(rect))))
    }

    /// Replaces the bounds; `None` marks the region as unmounted.
    pub fn set_bounds(&self, rect: Option<Rect>) {
        self.0.set(rect);
    }

    /// Returns `true` if both handles refer to the same region.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Region for SharedRegion {
    fn bounds(&self) -> Option<Rect> {
        self.0.get()
    }
}
