// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear slider: a bounded value driven by the wheel and by dragging.
//!
//! Wheel samples accumulate into the value. While a drag is in progress the
//! value follows the pointer along the drag area (top or left is
//! `min_value`). Either way the value is clamped to
//! `[min_value, max_value]`.

use alloc::rc::Rc;

use crate::drag_move::{DragMoveConfig, DragMoveTracker};
use crate::event::{InputEvent, Response};
use crate::host::EventHost;
use crate::region::Region;
use crate::wheel::{WheelConfig, WheelTracker};

/// Slider settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lowest value.
    pub min_value: f64,
    /// Highest value.
    pub max_value: f64,
    /// Starting value.
    pub initial_value: f64,
    /// Wheel sensitivity divisor.
    pub sensitivity: f64,
    /// Map the drag area's height (`true`) or width (`false`).
    pub is_vertical: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            initial_value: 0.0,
            sensitivity: 100.0,
            is_vertical: true,
        }
    }
}

impl SliderConfig {
    /// Sets the value range.
    #[must_use]
    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets the starting value.
    #[must_use]
    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    /// Sets the wheel sensitivity.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the drag axis.
    #[must_use]
    pub fn with_vertical(mut self, is_vertical: bool) -> Self {
        self.is_vertical = is_vertical;
        self
    }

    fn clamp(&self, value: f64) -> f64 {
        value.max(self.min_value).min(self.max_value)
    }
}

/// Snapshot of a [`Slider`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderOutput {
    /// Current value.
    pub value: f64,
    /// The wheel is turning or a drag is in progress.
    pub is_adjusting: bool,
    /// The pointer is over the thumb.
    pub is_on_target: bool,
    /// The pointer is over the track.
    pub is_on_drag_area: bool,
}

/// A slider over a track (the drag area) and a thumb (the target).
///
/// ```
/// use kurbo::Rect;
/// use understory_gesture::InputEvent;
/// use understory_gesture::slider::{Slider, SliderConfig};
///
/// let track = Rect::new(0.0, 0.0, 200.0, 20.0);
/// let thumb = Rect::new(0.0, 0.0, 20.0, 20.0);
/// let config = SliderConfig::default().with_vertical(false);
/// let mut slider = Slider::new(track, thumb, config, 0.0);
///
/// let _ = slider.handle(&InputEvent::pointer_down(150.0, 10.0));
/// assert_eq!(slider.output().value, 0.75);
/// ```
#[derive(Debug)]
pub struct Slider<R> {
    wheel: WheelTracker<R>,
    drag: DragMoveTracker<R>,
    config: SliderConfig,
    value: f64,
}

impl<R: Region + Clone> Slider<R> {
    /// Creates a slider at `config.initial_value`.
    ///
    /// `now_ms` seeds the wheel tracker's clock.
    pub fn new(track: R, thumb: R, config: SliderConfig, now_ms: f64) -> Self {
        let wheel = WheelTracker::new(
            track.clone(),
            WheelConfig::default().with_sensitivity(config.sensitivity),
            now_ms,
        );
        let drag = DragMoveTracker::new(
            track,
            thumb,
            DragMoveConfig::default().with_require_start_on_target(false),
        );
        Self {
            wheel,
            drag,
            config,
            value: config.clamp(config.initial_value),
        }
    }

    /// Current settings.
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    /// Current snapshot.
    pub fn output(&self) -> SliderOutput {
        let drag = self.drag.output();
        SliderOutput {
            value: self.value,
            is_adjusting: self.wheel.output().is_active || drag.is_dragging,
            is_on_target: drag.is_on_target,
            is_on_drag_area: drag.is_on_drag_area,
        }
    }

    /// Overwrites the value, clamped to the range.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.config.clamp(value);
    }

    /// Registers both modalities with `host`.
    pub fn attach(&mut self, host: Rc<dyn EventHost>) {
        self.wheel.attach(host.clone());
        self.drag.attach(host);
    }

    /// Releases every host registration.
    pub fn detach(&mut self) {
        self.wheel.detach();
        self.drag.detach();
    }

    /// Whether the slider holds host registrations.
    pub fn is_attached(&self) -> bool {
        self.wheel.is_attached()
    }

    /// Replaces the track and thumb, renewing subscriptions if attached.
    pub fn set_regions(&mut self, track: R, thumb: R) {
        self.wheel.set_region(track.clone());
        self.drag.set_regions(track, thumb);
    }

    /// When the host should call [`Slider::on_timer`] next.
    pub fn next_deadline(&self) -> Option<f64> {
        self.wheel.next_deadline()
    }

    /// Delivers a timer tick to the wheel modality.
    pub fn on_timer(&mut self, now_ms: f64) -> Response {
        let before = self.output();
        let wheel = self.wheel.on_timer(now_ms);
        Response {
            changed: self.output() != before,
            ..wheel
        }
    }

    /// Feeds one event.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        let before = self.output();
        let wheel = self.wheel.handle(event);
        let drag = self.drag.handle(event);

        if wheel.consumed {
            self.value = self.config.clamp(self.value + self.wheel.output().delta);
        }
        let moved = self.drag.output();
        if drag.consumed && moved.is_dragging {
            match (moved.position, self.drag.drag_area().bounds()) {
                (Some(position), Some(track)) => {
                    let fraction = if self.config.is_vertical {
                        position.y / track.height()
                    } else {
                        position.x / track.width()
                    };
                    let span = self.config.max_value - self.config.min_value;
                    let value = self.config.min_value + fraction * span;
                    if value.is_finite() {
                        self.value = self.config.clamp(value);
                    } else {
                        log::debug!("slider track has no extent, keeping value");
                    }
                }
                _ => log::debug!("slider track has no bounds, keeping value"),
            }
        }

        let merged = wheel.merge(drag);
        Response {
            changed: self.output() != before,
            ..merged
        }
    }
}
