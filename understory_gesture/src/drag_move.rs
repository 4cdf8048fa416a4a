// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-move: an absolute position inside a drag area.
//!
//! Two regions take part:
//! - the **drag area**, whose top-left corner is the origin of the reported
//!   position, and
//! - the **target**, the element being moved (a knob, a thumb).
//!
//! Hover flags are recomputed on every pointer move from fresh bounds, not
//! from which element the host considers the event target, since other
//! elements may be stacked above the regions.
//!
//! Gesture start rules:
//! - with [`DragMoveConfig::require_start_on_target`] (the default), only a
//!   press on the target starts a drag;
//! - otherwise a press anywhere on the drag area or the target starts one.
//!
//! Touch gestures count only while exactly one finger is down.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_gesture::InputEvent;
//! use understory_gesture::drag_move::{DragMoveConfig, DragMoveTracker};
//!
//! let area = Rect::new(100.0, 100.0, 300.0, 200.0);
//! let knob = Rect::new(190.0, 140.0, 210.0, 160.0);
//! let mut tracker = DragMoveTracker::new(area, knob, DragMoveConfig::default());
//!
//! // Centre of the drag area until the first gesture.
//! assert_eq!(tracker.output().position, Some(Point::new(100.0, 50.0)));
//!
//! let _ = tracker.handle(&InputEvent::pointer_down(200.0, 150.0));
//! let _ = tracker.handle(&InputEvent::pointer_move(250.0, 120.0));
//! assert_eq!(tracker.output().position, Some(Point::new(150.0, 20.0)));
//! ```

use alloc::rc::Rc;

use kurbo::{Point, Rect};
use understory_gesture_math::{is_point_in_rect, rect_center_local};

use crate::event::{InputEvent, Response, TouchEvent};
use crate::host::{Attachment, EventHost, EventKinds};
use crate::region::Region;

/// Drag-to-move settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragMoveConfig {
    /// Only a press on the target starts a drag.
    pub require_start_on_target: bool,
}

impl Default for DragMoveConfig {
    fn default() -> Self {
        Self {
            require_start_on_target: true,
        }
    }
}

impl DragMoveConfig {
    /// Sets [`DragMoveConfig::require_start_on_target`].
    #[must_use]
    pub fn with_require_start_on_target(mut self, require: bool) -> Self {
        self.require_start_on_target = require;
        self
    }
}

/// Snapshot of a [`DragMoveTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragMoveOutput {
    /// A drag is in progress.
    pub is_dragging: bool,
    /// The last known pointer position is over the target.
    pub is_on_target: bool,
    /// The last known pointer position is over the drag area.
    pub is_on_drag_area: bool,
    /// The drag in progress started on the target.
    pub is_start_drag_on_target: bool,
    /// Position relative to the drag area's top-left corner; `None` until the
    /// drag area has been laid out.
    pub position: Option<Point>,
}

/// Tracks drag-to-move gestures and hover state over a drag area and a target.
#[derive(Debug)]
pub struct DragMoveTracker<R> {
    drag_area: R,
    target: R,
    config: DragMoveConfig,
    state: DragMoveOutput,
    attachment: Attachment,
}

impl<R: Region> DragMoveTracker<R> {
    /// Event kinds this tracker listens for.
    pub const INTERESTS: EventKinds = EventKinds::POINTER.union(EventKinds::TOUCH);

    /// Creates an idle tracker.
    pub fn new(drag_area: R, target: R, config: DragMoveConfig) -> Self {
        let mut tracker = Self {
            drag_area,
            target,
            config,
            state: DragMoveOutput::default(),
            attachment: Attachment::default(),
        };
        tracker.ensure_initial_position();
        tracker
    }

    /// The drag area.
    pub fn drag_area(&self) -> &R {
        &self.drag_area
    }

    /// The target.
    pub fn target(&self) -> &R {
        &self.target
    }

    /// Replaces both regions, ending any drag and renewing the host
    /// subscription if attached.
    pub fn set_regions(&mut self, drag_area: R, target: R) {
        self.drag_area = drag_area;
        self.target = target;
        self.state.is_dragging = false;
        self.state.is_start_drag_on_target = false;
        self.ensure_initial_position();
        self.attachment.renew();
    }

    /// Current settings.
    pub fn config(&self) -> DragMoveConfig {
        self.config
    }

    /// Replaces the settings; takes effect from the next gesture start.
    pub fn set_config(&mut self, config: DragMoveConfig) {
        self.config = config;
    }

    /// Registers for pointer and touch events with `host`.
    pub fn attach(&mut self, host: Rc<dyn EventHost>) {
        self.attachment.attach(host, Self::INTERESTS);
        self.ensure_initial_position();
    }

    /// Releases the host registration and ends any drag.
    pub fn detach(&mut self) {
        self.attachment.detach();
        self.state.is_dragging = false;
        self.state.is_start_drag_on_target = false;
    }

    /// Whether a host registration is held.
    pub fn is_attached(&self) -> bool {
        self.attachment.is_attached()
    }

    /// Current snapshot.
    pub fn output(&self) -> DragMoveOutput {
        self.state
    }

    /// Overwrites the reported position, e.g. to seed it from a stored value.
    pub fn set_position(&mut self, position: Option<Point>) {
        self.state.position = position;
    }

    /// Feeds one event.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        let before = self.state;
        self.ensure_initial_position();
        let consumed = match event {
            InputEvent::PointerDown(p) => self.start(p.position),
            InputEvent::TouchStart(t) => match t.primary_with_count(1) {
                Some(p) => self.start(p),
                None => {
                    log::debug!(
                        "drag-move ignores touch start with {} touches",
                        t.touches.len()
                    );
                    false
                }
            },
            InputEvent::PointerMove(p) => self.moved(p.position),
            InputEvent::TouchMove(t) => match t.primary_with_count(1) {
                Some(p) => self.moved(p),
                None => false,
            },
            InputEvent::PointerUp(p) | InputEvent::PointerLeave(p) => self.end(Some(p.position)),
            InputEvent::TouchEnd(t) | InputEvent::TouchCancel(t) => self.end(end_point(t)),
            InputEvent::Wheel(_) | InputEvent::Resize => false,
        };
        Response {
            consumed,
            changed: self.state != before,
            prevent_default: false,
        }
    }

    fn ensure_initial_position(&mut self) {
        if self.state.position.is_none() {
            self.state.position = self.drag_area.bounds().map(rect_center_local);
        }
    }

    fn hover(&mut self, position: Point, area: Option<Rect>) {
        self.state.is_on_target = is_point_in_rect(position, self.target.bounds());
        self.state.is_on_drag_area = is_point_in_rect(position, area);
    }

    fn start(&mut self, position: Point) -> bool {
        let Some(area) = self.drag_area.bounds() else {
            log::debug!("drag area has no bounds, ignoring gesture start");
            return false;
        };
        self.hover(position, Some(area));
        let allowed = if self.config.require_start_on_target {
            self.state.is_on_target
        } else {
            self.state.is_on_target || self.state.is_on_drag_area
        };
        if !allowed {
            return false;
        }
        self.state.is_dragging = true;
        self.state.is_start_drag_on_target = self.state.is_on_target;
        self.state.position = Some(relative_to(position, area));
        log::trace!(
            "drag-move started at {position:?} (on target: {})",
            self.state.is_on_target
        );
        true
    }

    fn moved(&mut self, position: Point) -> bool {
        let area = self.drag_area.bounds();
        self.hover(position, area);
        if !self.state.is_dragging {
            return false;
        }
        if self.state.is_start_drag_on_target || !self.config.require_start_on_target {
            match area {
                Some(area) => self.state.position = Some(relative_to(position, area)),
                None => log::debug!("drag area lost its bounds mid-drag, keeping position"),
            }
        }
        true
    }

    fn end(&mut self, position: Option<Point>) -> bool {
        let was_dragging = self.state.is_dragging;
        self.state.is_dragging = false;
        self.state.is_start_drag_on_target = false;
        if let Some(position) = position {
            let area = self.drag_area.bounds();
            self.hover(position, area);
        }
        if was_dragging {
            log::trace!("drag-move ended");
        }
        was_dragging
    }
}

fn relative_to(position: Point, area: Rect) -> Point {
    (position - area.origin()).to_point()
}

fn end_point(touch: &TouchEvent) -> Option<Point> {
    touch.changed.first().copied()
}
