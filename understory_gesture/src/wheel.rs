// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel velocity: how fast the wheel is turning over a region.
//!
//! Each wheel event inside the region produces a sample
//! `-delta_y / elapsed_ms / sensitivity`, where `elapsed_ms` is the time since
//! the previous accepted wheel event (or since the tracker was created). The
//! faster the wheel turns, the larger the magnitude. After
//! [`QUIESCENCE_MS`](crate::timer::QUIESCENCE_MS) without wheel events the
//! delta falls back to zero.
//!
//! ```
//! use kurbo::Rect;
//! use understory_gesture::InputEvent;
//! use understory_gesture::wheel::{WheelConfig, WheelTracker};
//!
//! let area = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut wheel = WheelTracker::new(area, WheelConfig::default(), 0.0);
//!
//! let r = wheel.handle(&InputEvent::wheel(50.0, 50.0, -100.0, 50.0));
//! assert!(r.prevent_default);
//! assert!((wheel.output().delta - 0.02).abs() < 1e-12);
//!
//! assert_eq!(wheel.next_deadline(), Some(250.0));
//! let _ = wheel.on_timer(250.0);
//! assert!(!wheel.output().is_active);
//! ```

use alloc::rc::Rc;

use understory_gesture_math::is_point_in_rect;

use crate::event::{InputEvent, Response};
use crate::host::{Attachment, EventHost, EventKinds};
use crate::region::Region;
use crate::timer::QuiescenceTimer;

/// Wheel tracker settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Divisor applied to every sample; larger is less responsive.
    pub sensitivity: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self { sensitivity: 100.0 }
    }
}

impl WheelConfig {
    /// Sets the sensitivity divisor.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }
}

/// Snapshot of a [`WheelTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelOutput {
    /// Latest velocity sample; `0.0` when idle.
    pub delta: f64,
    /// `delta != 0.0`.
    pub is_active: bool,
}

/// Converts wheel events over a region into a decaying velocity.
#[derive(Debug)]
pub struct WheelTracker<R> {
    region: R,
    config: WheelConfig,
    last_event_ms: f64,
    delta: f64,
    reset: QuiescenceTimer,
    attachment: Attachment,
}

impl<R: Region> WheelTracker<R> {
    /// Event kinds this tracker listens for.
    pub const INTERESTS: EventKinds = EventKinds::WHEEL;

    /// Creates an idle tracker over `region`.
    ///
    /// `now_ms` stands in for the previous wheel event when the first one arrives.
    pub fn new(region: R, config: WheelConfig, now_ms: f64) -> Self {
        Self {
            region,
            config,
            last_event_ms: now_ms,
            delta: 0.0,
            reset: QuiescenceTimer::default(),
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
    pub fn config(&self) -> WheelConfig {
        self.config
    }

    /// Replaces the settings; takes effect from the next wheel event.
    pub fn set_config(&mut self, config: WheelConfig) {
        self.config = config;
    }

    /// Registers for wheel events with `host`, replacing any earlier registration.
    pub fn attach(&mut self, host: Rc<dyn EventHost>) {
        self.attachment.attach(host, Self::INTERESTS);
    }

    /// Releases the host registration and cancels any pending reset.
    pub fn detach(&mut self) {
        self.attachment.detach();
        self.reset.cancel();
    }

    /// Whether a host registration is held.
    pub fn is_attached(&self) -> bool {
        self.attachment.is_attached()
    }

    /// Current snapshot.
    pub fn output(&self) -> WheelOutput {
        WheelOutput {
            delta: self.delta,
            is_active: self.delta != 0.0,
        }
    }

    /// When the host should call [`WheelTracker::on_timer`] next.
    pub fn next_deadline(&self) -> Option<f64> {
        self.reset.deadline()
    }

    /// Feeds one event. Only wheel events over the region are used.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        let InputEvent::Wheel(wheel) = event else {
            return Response::IGNORED;
        };
        // The pointer may be over an element stacked above the region, so the
        // event target cannot be trusted; test against fresh bounds instead.
        if !is_point_in_rect(wheel.position, self.region.bounds()) {
            return Response::IGNORED;
        }

        let before = self.output();
        let elapsed = wheel.time_ms - self.last_event_ms;
        self.delta = if elapsed > 0.0 && elapsed.is_finite() {
            -wheel.delta_y / elapsed / self.config.sensitivity
        } else {
            log::debug!("wheel event {elapsed} ms after the previous one, sampling zero");
            0.0
        };
        if !self.delta.is_finite() {
            self.delta = 0.0;
        }
        self.last_event_ms = wheel.time_ms;
        self.reset.schedule(wheel.time_ms);

        Response {
            consumed: true,
            changed: self.output() != before,
            prevent_default: true,
        }
    }

    /// Delivers a timer tick; resets the delta once the quiescence deadline passes.
    pub fn on_timer(&mut self, now_ms: f64) -> Response {
        if !self.reset.fire(now_ms) {
            return Response::IGNORED;
        }
        let before = self.output();
        self.delta = 0.0;
        log::trace!("wheel idle, velocity reset");
        Response {
            consumed: false,
            changed: self.output() != before,
            prevent_default: false,
        }
    }
}
