// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-adjust: turn a one-axis drag into incremental adjustments.
//!
//! ## Usage
//!
//! 1) A pointer down (or a touch start with exactly
//!    [`DragAdjustConfig::touch_count`] fingers) inside the region starts the gesture.
//! 2) Every move while active emits the movement since the previous move,
//!    scaled by `1 / (2 · sensitivity)`. Dragging up (vertical) or right
//!    (horizontal) is positive.
//! 3) Pointer up, pointer leave, or touch end/cancel ends the gesture and
//!    zeroes the delta.
//!
//! A drag that is held still stays active with a zero delta.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_gesture::InputEvent;
//! use understory_gesture::drag_adjust::{DragAdjustConfig, DragAdjustTracker};
//!
//! let area = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let mut adjust = DragAdjustTracker::new(area, DragAdjustConfig::default());
//!
//! let _ = adjust.handle(&InputEvent::pointer_down(50.0, 100.0));
//! let _ = adjust.handle(&InputEvent::pointer_move(50.0, 80.0));
//! assert!((adjust.output().delta - 0.1).abs() < 1e-12);
//!
//! let _ = adjust.handle(&InputEvent::pointer_move(50.0, 80.0));
//! assert_eq!(adjust.output().delta, 0.0);
//! assert!(adjust.output().is_active);
//! ```

use alloc::rc::Rc;

use kurbo::Point;
use understory_gesture_math::is_point_in_rect;

use crate::event::{InputEvent, Response};
use crate::host::{Attachment, EventHost, EventKinds};
use crate::region::Region;

/// Drag axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Up/down; dragging up is positive.
    #[default]
    Vertical,
    /// Left/right; dragging right is positive.
    Horizontal,
}

impl Axis {
    /// The coordinate of `p` along this axis.
    #[must_use]
    pub fn coordinate(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.y,
            Self::Horizontal => p.x,
        }
    }

    /// Converts a raw coordinate change into an adjustment.
    #[must_use]
    pub fn adjustment(self, moved: f64, sensitivity: f64) -> f64 {
        let signed = match self {
            // Screen y grows downwards.
            Self::Vertical => -moved,
            Self::Horizontal => moved,
        };
        signed / (sensitivity * 2.0)
    }
}

/// Drag-to-adjust settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAdjustConfig {
    /// Which coordinate drives the adjustment.
    pub axis: Axis,
    /// Divisor applied to movement; larger is less responsive.
    pub sensitivity: f64,
    /// Exact number of fingers a touch gesture must use.
    pub touch_count: usize,
}

impl Default for DragAdjustConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            sensitivity: 100.0,
            touch_count: 2,
        }
    }
}

impl DragAdjustConfig {
    /// Sets the axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the sensitivity divisor.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the required touch count.
    #[must_use]
    pub fn with_touch_count(mut self, touch_count: usize) -> Self {
        self.touch_count = touch_count;
        self
    }
}

/// Snapshot of a [`DragAdjustTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragAdjustOutput {
    /// Adjustment produced by the latest move; `0.0` between moves and when idle.
    pub delta: f64,
    /// A gesture is in progress, even if it is not moving.
    pub is_active: bool,
}

/// Last coordinate of an in-progress one-axis drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct AxisDrag {
    last: Option<f64>,
}

impl AxisDrag {
    fn start(&mut self, coordinate: f64) {
        self.last = Some(coordinate);
    }

    /// Movement since the previous call, or `None` when not dragging.
    fn update(&mut self, coordinate: f64) -> Option<f64> {
        let last = self.last?;
        self.last = Some(coordinate);
        Some(coordinate - last)
    }

    fn end(&mut self) {
        self.last = None;
    }

    fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

/// Tracks drag-to-adjust gestures over a region.
#[derive(Debug)]
pub struct DragAdjustTracker<R> {
    region: R,
    config: DragAdjustConfig,
    drag: AxisDrag,
    delta: f64,
    attachment: Attachment,
}

impl<R: Region> DragAdjustTracker<R> {
    /// Event kinds this tracker listens for.
    pub const INTERESTS: EventKinds = EventKinds::POINTER.union(EventKinds::TOUCH);

    /// Creates an idle tracker over `region`.
    pub fn new(region: R, config: DragAdjustConfig) -> Self {
        Self {
            region,
            config,
            drag: AxisDrag::default(),
            delta: 0.0,
            attachment: Attachment::default(),
        }
    }

    /// The tracked region.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Replaces the tracked region, renewing the host subscription if attached.
    pub fn set_region(&mut self, region: R) {
        self.region = region;
        self.attachment.renew();
    }

    /// Current settings.
    pub fn config(&self) -> DragAdjustConfig {
        self.config
    }

    /// Replaces the settings and ends any gesture in progress.
    pub fn set_config(&mut self, config: DragAdjustConfig) {
        self.config = config;
        self.stop();
        self.attachment.renew();
    }

    /// Registers for pointer and touch events with `host`.
    pub fn attach(&mut self, host: Rc<dyn EventHost>) {
        self.attachment.attach(host, Self::INTERESTS);
    }

    /// Releases the host registration and ends any gesture in progress.
    pub fn detach(&mut self) {
        self.attachment.detach();
        self.stop();
    }

    /// Whether a host registration is held.
    pub fn is_attached(&self) -> bool {
        self.attachment.is_attached()
    }

    /// Current snapshot.
    pub fn output(&self) -> DragAdjustOutput {
        DragAdjustOutput {
            delta: self.delta,
            is_active: self.drag.is_dragging(),
        }
    }

    /// Feeds one event.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        let before = self.output();
        let consumed = match event {
            InputEvent::PointerDown(p) => self.start(p.position),
            InputEvent::TouchStart(t) => match t.primary_with_count(self.config.touch_count) {
                Some(p) => self.start(p),
                None => {
                    log::debug!(
                        "drag-adjust ignores touch start with {} touches",
                        t.touches.len()
                    );
                    false
                }
            },
            InputEvent::PointerMove(p) => self.moved(p.position),
            InputEvent::TouchMove(t) => match t.primary_with_count(self.config.touch_count) {
                Some(p) => self.moved(p),
                None => false,
            },
            InputEvent::PointerUp(_)
            | InputEvent::PointerLeave(_)
            | InputEvent::TouchEnd(_)
            | InputEvent::TouchCancel(_) => self.stop(),
            InputEvent::Wheel(_) | InputEvent::Resize => false,
        };
        Response {
            consumed,
            changed: self.output() != before,
            prevent_default: false,
        }
    }

    fn start(&mut self, position: Point) -> bool {
        let bounds = self.region.bounds();
        if bounds.is_none() {
            log::debug!("drag-adjust region has no bounds, ignoring gesture start");
        }
        if !is_point_in_rect(position, bounds) {
            return false;
        }
        self.drag.start(self.config.axis.coordinate(position));
        self.delta = 0.0;
        log::trace!("drag-adjust started at {position:?}");
        true
    }

    fn moved(&mut self, position: Point) -> bool {
        let coordinate = self.config.axis.coordinate(position);
        match self.drag.update(coordinate) {
            Some(moved) => {
                self.delta = self.config.axis.adjustment(moved, self.config.sensitivity);
                true
            }
            None => false,
        }
    }

    fn stop(&mut self) -> bool {
        let was_active = self.drag.is_dragging();
        self.drag.end();
        self.delta = 0.0;
        if was_active {
            log::trace!("drag-adjust ended");
        }
        was_active
    }
}
