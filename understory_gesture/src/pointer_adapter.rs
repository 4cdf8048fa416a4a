// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from [`ui_events`] pointer events to [`InputEvent`]s.
//!
//! `ui_events` reports each finger as its own pointer, while the trackers
//! gate touch gestures on the full list of fingers currently down. A
//! [`PointerAdapter`] keeps that list, keyed by pointer id, and also remembers
//! the last mouse or pen position so that `Leave` and `Cancel` (which carry no
//! position) can still end a drag where it was last seen.
//!
//! Scroll deltas are converted to logical pixels with the sign flipped, so a
//! wheel rolled away from the user yields a negative
//! [`WheelEvent::delta_y`](crate::event::WheelEvent::delta_y), and event
//! times are converted from nanoseconds to milliseconds.
//!
//! ```
//! use kurbo::Rect;
//! use understory_gesture::pointer_adapter::PointerAdapter;
//! use understory_gesture::slider::{Slider, SliderConfig};
//! # use ui_events::pointer::PointerEvent;
//! # fn next_event() -> Option<PointerEvent> { None }
//!
//! let track = Rect::new(0.0, 0.0, 20.0, 200.0);
//! let thumb = Rect::new(0.0, 0.0, 20.0, 20.0);
//! let mut slider = Slider::new(track, thumb, SliderConfig::default(), 0.0);
//! let mut adapter = PointerAdapter::default();
//!
//! while let Some(event) = next_event() {
//!     if let Some(input) = adapter.translate(&event) {
//!         let _ = slider.handle(&input);
//!     }
//! }
//! ```

use kurbo::Point;
use smallvec::SmallVec;
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerId, PointerInfo, PointerScrollEvent, PointerType};

use crate::event::{InputEvent, TouchEvent, WheelEvent};

const NANOS_PER_MS: f64 = 1_000_000.0;

/// Sizes used to turn line and page scroll deltas into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerAdapterConfig {
    /// Pixels per scrolled line.
    pub line_height: f64,
    /// Pixels per scrolled page.
    pub page_height: f64,
}

impl Default for PointerAdapterConfig {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            page_height: 800.0,
        }
    }
}

/// Translates [`PointerEvent`]s into [`InputEvent`]s.
#[derive(Clone, Debug, Default)]
pub struct PointerAdapter {
    config: PointerAdapterConfig,
    last_position: Option<Point>,
    touches: SmallVec<[(Option<PointerId>, Point); 4]>,
}

impl PointerAdapter {
    /// Creates an adapter with the given scroll sizes.
    pub fn new(config: PointerAdapterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current settings.
    pub fn config(&self) -> PointerAdapterConfig {
        self.config
    }

    /// Number of touch pointers currently down.
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Translates one event.
    ///
    /// Returns `None` for events no tracker reacts to (enter, platform
    /// gestures) and for touch moves or ends from pointers that never went down.
    pub fn translate(&mut self, event: &PointerEvent) -> Option<InputEvent> {
        match event {
            PointerEvent::Down(e) => {
                let position = e.state.logical_point();
                if is_touch(&e.pointer) {
                    let id = e.pointer.pointer_id;
                    self.touches.retain(|(down, _)| *down != id);
                    self.touches.push((id, position));
                    Some(InputEvent::TouchStart(self.touch_event(position)))
                } else {
                    self.last_position = Some(position);
                    Some(InputEvent::pointer_down(position.x, position.y))
                }
            }
            PointerEvent::Move(e) => {
                let position = e.current.logical_point();
                if is_touch(&e.pointer) {
                    let id = e.pointer.pointer_id;
                    let (_, down) = self.touches.iter_mut().find(|(down, _)| *down == id)?;
                    *down = position;
                    Some(InputEvent::TouchMove(self.touch_event(position)))
                } else {
                    self.last_position = Some(position);
                    Some(InputEvent::pointer_move(position.x, position.y))
                }
            }
            PointerEvent::Up(e) => {
                let position = e.state.logical_point();
                if is_touch(&e.pointer) {
                    self.lift(e.pointer.pointer_id)?;
                    Some(InputEvent::TouchEnd(self.touch_event(position)))
                } else {
                    self.last_position = Some(position);
                    Some(InputEvent::pointer_up(position.x, position.y))
                }
            }
            PointerEvent::Cancel(info) => {
                if is_touch(info) {
                    let position = self.lift(info.pointer_id)?;
                    Some(InputEvent::TouchCancel(self.touch_event(position)))
                } else {
                    self.leave()
                }
            }
            PointerEvent::Leave(info) => {
                if is_touch(info) {
                    None
                } else {
                    self.leave()
                }
            }
            PointerEvent::Scroll(e) => Some(InputEvent::Wheel(self.wheel_event(e))),
            PointerEvent::Enter(_) | PointerEvent::Gesture(_) => None,
        }
    }

    fn leave(&self) -> Option<InputEvent> {
        let position = self.last_position?;
        Some(InputEvent::pointer_leave(position.x, position.y))
    }

    /// Removes a touch pointer, returning its last position.
    fn lift(&mut self, id: Option<PointerId>) -> Option<Point> {
        let index = self.touches.iter().position(|(down, _)| *down == id)?;
        Some(self.touches.remove(index).1)
    }

    fn touch_event(&self, changed: Point) -> TouchEvent {
        TouchEvent::new(self.touches.iter().map(|(_, p)| *p), [changed])
    }

    fn wheel_event(&self, e: &PointerScrollEvent) -> WheelEvent {
        let dy = match &e.delta {
            ScrollDelta::PixelDelta(pos) => pos.to_logical::<f64>(e.state.scale_factor).y,
            ScrollDelta::LineDelta(_, y) => f64::from(*y) * self.config.line_height,
            ScrollDelta::PageDelta(_, y) => f64::from(*y) * self.config.page_height,
        };
        let time_ms = e.state.time as f64 / NANOS_PER_MS;
        WheelEvent {
            position: e.state.logical_point(),
            delta_y: -dy,
            time_ms,
        }
    }
}

fn is_touch(pointer: &PointerInfo) -> bool {
    pointer.pointer_type == PointerType::Touch
}
