// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events as delivered by the host, and the per-event [`Response`].

use kurbo::Point;
use smallvec::SmallVec;

use crate::host::EventKinds;

/// Touch points of one touch event, in client coordinates.
pub type Touches = SmallVec<[Point; 4]>;

/// A pointer (mouse, pen) event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in client coordinates.
    pub position: Point,
}

/// A touch event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// Touch points still on the surface after this event.
    pub touches: Touches,
    /// Touch points that changed in this event (for `TouchEnd`, the lifted ones).
    pub changed: Touches,
}

impl TouchEvent {
    /// Builds a touch event from the active and changed point lists.
    pub fn new(
        touches: impl IntoIterator<Item = Point>,
        changed: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            touches: touches.into_iter().collect(),
            changed: changed.into_iter().collect(),
        }
    }

    /// The first active touch, if exactly `count` touches are active.
    #[must_use]
    pub fn primary_with_count(&self, count: usize) -> Option<Point> {
        if self.touches.len() == count {
            self.touches.first().copied()
        } else {
            None
        }
    }
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position in client coordinates.
    pub position: Point,
    /// Vertical wheel delta; positive scrolls content up (wheel pulled towards the user).
    pub delta_y: f64,
    /// Event time in milliseconds on the host's monotonic clock.
    pub time_ms: f64,
}

/// One input notification from the host.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down.
    PointerDown(PointerEvent),
    /// The pointer moved.
    PointerMove(PointerEvent),
    /// A pointer button was released.
    PointerUp(PointerEvent),
    /// The pointer left the host surface.
    PointerLeave(PointerEvent),
    /// Touch contact started.
    TouchStart(TouchEvent),
    /// Touch points moved.
    TouchMove(TouchEvent),
    /// Touch contact ended.
    TouchEnd(TouchEvent),
    /// The platform cancelled the touch sequence.
    TouchCancel(TouchEvent),
    /// The wheel turned.
    Wheel(WheelEvent),
    /// The window or an observed region changed size.
    Resize,
}

impl InputEvent {
    /// `PointerDown` at `(x, y)`.
    #[must_use]
    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown(PointerEvent {
            position: Point::new(x, y),
        })
    }

    /// `PointerMove` to `(x, y)`.
    #[must_use]
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove(PointerEvent {
            position: Point::new(x, y),
        })
    }

    /// `PointerUp` at `(x, y)`.
    #[must_use]
    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp(PointerEvent {
            position: Point::new(x, y),
        })
    }

    /// `PointerLeave` at `(x, y)`.
    #[must_use]
    pub fn pointer_leave(x: f64, y: f64) -> Self {
        Self::PointerLeave(PointerEvent {
            position: Point::new(x, y),
        })
    }

    /// `Wheel` at `(x, y)` with the given vertical delta and timestamp.
    #[must_use]
    pub fn wheel(x: f64, y: f64, delta_y: f64, time_ms: f64) -> Self {
        Self::Wheel(WheelEvent {
            position: Point::new(x, y),
            delta_y,
            time_ms,
        })
    }

    /// The [`EventKinds`] flag this event belongs to.
    #[must_use]
    pub fn kind(&self) -> EventKinds {
        match self {
            Self::PointerDown(_) => EventKinds::POINTER_DOWN,
            Self::PointerMove(_) => EventKinds::POINTER_MOVE,
            Self::PointerUp(_) => EventKinds::POINTER_UP,
            Self::PointerLeave(_) => EventKinds::POINTER_LEAVE,
            Self::TouchStart(_) => EventKinds::TOUCH_START,
            Self::TouchMove(_) => EventKinds::TOUCH_MOVE,
            Self::TouchEnd(_) => EventKinds::TOUCH_END,
            Self::TouchCancel(_) => EventKinds::TOUCH_CANCEL,
            Self::Wheel(_) => EventKinds::WHEEL,
            Self::Resize => EventKinds::RESIZE,
        }
    }
}

/// What a tracker did with one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// The event was interpreted as part of the tracker's gesture.
    pub consumed: bool,
    /// The output snapshot differs (by value) from the one before the event.
    pub changed: bool,
    /// The host should suppress its native action for this event.
    pub prevent_default: bool,
}

impl Response {
    /// The event was not used.
    pub const IGNORED: Self = Self {
        consumed: false,
        changed: false,
        prevent_default: false,
    };

    /// Combines responses from trackers that saw the same event.
    pub fn merge(self, other: Self) -> Self {
        Self {
            consumed: self.consumed || other.consumed,
            changed: self.changed || other.changed,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}
