// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation: knobs and dials driven by three input modalities at once.
//!
//! A [`RotateEngine`] owns a drag-to-move tracker, a wheel tracker and a
//! drag-to-adjust tracker over the same drag area, and folds their outputs
//! into one continuous [`Rotation`]:
//!
//! - while the target is being dragged, the angle follows the pointer around
//!   the rotation origin;
//! - otherwise each wheel sample and each drag-adjust step taken by an event
//!   is added to the current angle.
//!
//! Crossing angle zero is tracked as a full turn, so the total angle keeps
//! growing (or shrinking) across rotations. An optional [`RotationRange`]
//! clamps the total angle and, for [`RotationRange::Value`], maps it onto a
//! numeric value.
//!
//! ## Origin
//!
//! Pointer angles are measured around [`Origin`], in drag-area coordinates.
//! [`Origin::Auto`] (the default) and [`Origin::Dynamic`] are re-evaluated on
//! [`InputEvent::Resize`]; the engine asks the host for a resize observer on
//! the drag area while attached. [`Origin::Fixed`] never changes.
//!
//! ## Minimal example
//!
//! ```
//! use core::f64::consts::PI;
//! use kurbo::Rect;
//! use understory_gesture::InputEvent;
//! use understory_gesture::rotate::{RotateConfig, RotateEngine};
//!
//! let area = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let knob = Rect::new(190.0, 90.0, 200.0, 110.0);
//! let mut engine = RotateEngine::new(area, knob, RotateConfig::default(), 0.0);
//!
//! // Grab the knob at angle 0 and drag it a quarter turn around the centre.
//! let _ = engine.handle(&InputEvent::pointer_down(195.0, 100.0));
//! let _ = engine.handle(&InputEvent::pointer_move(100.0, 190.0));
//! let out = engine.output();
//! assert!(out.is_rotating);
//! assert!((out.angle - PI / 2.0).abs() < 1e-9);
//! assert_eq!(out.full_rotations, 0);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::f64::consts::FRAC_PI_2;
use core::fmt;

use kurbo::Point;
use understory_gesture_math::{
    AngleInterval, Rotation, ValueMapping, point_equals, point_to_angle, rect_center_local,
};

use crate::drag_adjust::{Axis, DragAdjustConfig, DragAdjustTracker};
use crate::drag_move::{DragMoveConfig, DragMoveTracker};
use crate::event::{InputEvent, Response};
use crate::host::{EventHost, ResizeHost, Subscription};
use crate::region::Region;
use crate::wheel::{WheelConfig, WheelTracker};

/// Bounds on the total angle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RotationRange {
    /// No bounds; the engine is a plain turn counter.
    #[default]
    Unbounded,
    /// Clamp the total angle to `[min, max]` (wrapping when `max <= min`).
    Angle {
        /// Lower angle in radians.
        min: f64,
        /// Upper angle in radians.
        max: f64,
    },
    /// Clamp to the mapping's angle interval and report a mapped value.
    Value(ValueMapping),
}

impl RotationRange {
    fn interval(&self) -> AngleInterval {
        match self {
            Self::Unbounded => AngleInterval::UNBOUNDED,
            Self::Angle { min, max } => AngleInterval::new(*min, *max),
            Self::Value(mapping) => mapping.angle_interval(),
        }
    }

    fn mapping(&self) -> Option<ValueMapping> {
        match self {
            Self::Value(mapping) => Some(*mapping),
            _ => None,
        }
    }
}

/// Starting point of the rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Initial {
    /// A total angle in radians.
    Angle(f64),
    /// A value, converted through the [`RotationRange::Value`] mapping.
    Value(f64),
}

impl Default for Initial {
    fn default() -> Self {
        Self::Angle(0.0)
    }
}

/// Centre of rotation, in drag-area coordinates.
#[derive(Default)]
pub enum Origin {
    /// The centre of the drag area, tracked across resizes.
    #[default]
    Auto,
    /// A fixed point.
    Fixed(Point),
    /// Evaluated on attach and on every resize; `None` means `(0, 0)`.
    Dynamic(Box<dyn Fn() -> Option<Point>>),
}

impl Origin {
    fn tracks_resize(&self) -> bool {
        !matches!(self, Self::Fixed(_))
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Fixed(p) => f.debug_tuple("Fixed").field(p).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Rotation engine settings.
#[derive(Debug)]
pub struct RotateConfig {
    /// Bounds and optional value mapping.
    pub range: RotationRange,
    /// Starting angle or value.
    pub initial: Initial,
    /// Centre of rotation.
    pub origin: Origin,
    /// Sensitivity of the wheel and drag-adjust modalities.
    pub sensitivity: f64,
    /// Finger count for touch drag-adjust.
    pub touch_count: usize,
    /// Only a press on the target starts a pointer rotation.
    pub require_start_on_target: bool,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            range: RotationRange::Unbounded,
            initial: Initial::default(),
            origin: Origin::Auto,
            sensitivity: 100.0,
            touch_count: 2,
            require_start_on_target: true,
        }
    }
}

impl RotateConfig {
    /// A dial: `min_value` at a quarter turn, `max_value` one full turn later,
    /// starting at `value`.
    #[must_use]
    pub fn dial(min_value: f64, max_value: f64, value: f64) -> Self {
        let mapping = ValueMapping::new(min_value, max_value, FRAC_PI_2, 5.0 * FRAC_PI_2);
        Self::default()
            .with_range(RotationRange::Value(mapping))
            .with_initial(Initial::Value(value))
    }

    /// Sets the range.
    #[must_use]
    pub fn with_range(mut self, range: RotationRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the initial angle or value.
    #[must_use]
    pub fn with_initial(mut self, initial: Initial) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the wheel and drag-adjust sensitivity.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the drag-adjust touch count.
    #[must_use]
    pub fn with_touch_count(mut self, touch_count: usize) -> Self {
        self.touch_count = touch_count;
        self
    }

    /// Sets whether pointer rotation must start on the target.
    #[must_use]
    pub fn with_require_start_on_target(mut self, require: bool) -> Self {
        self.require_start_on_target = require;
        self
    }
}

bitflags::bitflags! {
    /// Input modalities currently driving a rotation.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ActiveInputs: u8 {
        /// The target is being dragged around the origin.
        const DRAG = 1 << 0;
        /// The wheel is turning.
        const WHEEL = 1 << 1;
        /// A drag-to-adjust gesture is in progress.
        const ADJUST = 1 << 2;
    }
}

/// Snapshot of a [`RotateEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotateOutput {
    /// Any modality is active.
    pub is_rotating: bool,
    /// Which modalities are active.
    pub active: ActiveInputs,
    /// The pointer is over the target.
    pub is_on_target: bool,
    /// Angle in `[0, 2π)`.
    pub angle: f64,
    /// Signed count of full turns.
    pub full_rotations: i64,
    /// `angle + 2π · full_rotations`.
    pub total_angle: f64,
    /// Mapped value, with [`RotationRange::Value`].
    pub value: Option<f64>,
}

/// Combines drag, wheel and drag-adjust input into a continuous rotation.
pub struct RotateEngine<R> {
    drag: DragMoveTracker<R>,
    wheel: WheelTracker<R>,
    adjust: DragAdjustTracker<R>,
    rotation: Rotation,
    interval: AngleInterval,
    mapping: Option<ValueMapping>,
    origin_source: Origin,
    origin: Point,
    host: Option<Rc<dyn ResizeHost<R>>>,
    resize: Option<Subscription>,
}

impl<R: fmt::Debug> fmt::Debug for RotateEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotateEngine")
            .field("drag", &self.drag)
            .field("wheel", &self.wheel)
            .field("adjust", &self.adjust)
            .field("rotation", &self.rotation)
            .field("interval", &self.interval)
            .field("mapping", &self.mapping)
            .field("origin_source", &self.origin_source)
            .field("origin", &self.origin)
            .field("resize", &self.resize)
            .finish_non_exhaustive()
    }
}

impl<R: Region + Clone> RotateEngine<R> {
    /// Creates an idle engine.
    ///
    /// `now_ms` seeds the wheel tracker's clock.
    pub fn new(drag_area: R, target: R, config: RotateConfig, now_ms: f64) -> Self {
        let RotateConfig {
            range,
            initial,
            origin,
            sensitivity,
            touch_count,
            require_start_on_target,
        } = config;

        let interval = range.interval();
        let mapping = range.mapping();
        let start = match initial {
            Initial::Angle(angle) => angle,
            Initial::Value(value) => match mapping {
                Some(mapping) => mapping.value_to_angle(value),
                None => {
                    log::debug!("initial value {value} without a value range, using it as an angle");
                    value
                }
            },
        };

        let wheel = WheelTracker::new(
            drag_area.clone(),
            WheelConfig::default().with_sensitivity(sensitivity),
            now_ms,
        );
        let adjust = DragAdjustTracker::new(
            drag_area.clone(),
            DragAdjustConfig::default()
                .with_axis(Axis::Vertical)
                .with_sensitivity(sensitivity)
                .with_touch_count(touch_count),
        );
        let drag = DragMoveTracker::new(
            drag_area,
            target,
            DragMoveConfig::default().with_require_start_on_target(require_start_on_target),
        );

        let mut engine = Self {
            drag,
            wheel,
            adjust,
            rotation: Rotation::new(start).clamped(&interval),
            interval,
            mapping,
            origin_source: origin,
            origin: Point::ZERO,
            host: None,
            resize: None,
        };
        engine.origin = engine.resolve_origin();
        engine
    }

    /// Current snapshot.
    pub fn output(&self) -> RotateOutput {
        let mut active = ActiveInputs::empty();
        active.set(ActiveInputs::DRAG, self.drag.output().is_dragging);
        active.set(ActiveInputs::WHEEL, self.wheel.output().is_active);
        active.set(ActiveInputs::ADJUST, self.adjust.output().is_active);
        let total_angle = self.rotation.total_angle();
        RotateOutput {
            is_rotating: !active.is_empty(),
            active,
            is_on_target: self.drag.output().is_on_target,
            angle: self.rotation.angle(),
            full_rotations: self.rotation.full_rotations(),
            total_angle,
            value: self.mapping.map(|m| m.angle_to_value(total_angle)),
        }
    }

    /// The current rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The origin pointer angles are currently measured around.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Overwrites the total angle, clamped to the configured range.
    pub fn set_total_angle(&mut self, total_angle: f64) {
        self.rotation = Rotation::new(total_angle).clamped(&self.interval);
    }

    /// Overwrites the value through the value mapping.
    ///
    /// Returns `false`, leaving the rotation alone, without a value mapping.
    pub fn set_value(&mut self, value: f64) -> bool {
        match self.mapping {
            Some(mapping) => {
                self.set_total_angle(mapping.value_to_angle(value));
                true
            }
            None => false,
        }
    }

    /// Registers every modality with `host`, plus a resize observer on the
    /// drag area when the origin tracks layout.
    pub fn attach(&mut self, host: Rc<dyn ResizeHost<R>>) {
        let events: Rc<dyn EventHost> = host.clone();
        self.drag.attach(events.clone());
        self.wheel.attach(events.clone());
        self.adjust.attach(events);
        self.host = Some(host);
        self.subscribe_resize();
        self.refresh_origin();
    }

    /// Releases every host registration and ends any gesture in progress.
    pub fn detach(&mut self) {
        self.drag.detach();
        self.wheel.detach();
        self.adjust.detach();
        self.resize = None;
        self.host = None;
    }

    /// Whether the engine holds host registrations.
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Replaces the drag area and target, renewing every subscription.
    pub fn set_regions(&mut self, drag_area: R, target: R) {
        self.wheel.set_region(drag_area.clone());
        self.adjust.set_region(drag_area.clone());
        self.drag.set_regions(drag_area, target);
        self.subscribe_resize();
        self.refresh_origin();
    }

    /// Replaces the origin source, re-subscribing to resizes as needed.
    pub fn set_origin(&mut self, origin: Origin) {
        self.origin_source = origin;
        self.subscribe_resize();
        self.refresh_origin();
    }

    /// When the host should call [`RotateEngine::on_timer`] next.
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

    /// Feeds one event to every modality and updates the rotation.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        let before = self.output();
        let drag = self.drag.handle(event);
        let wheel = self.wheel.handle(event);
        let adjust = self.adjust.handle(event);
        let origin_changed = matches!(event, InputEvent::Resize) && self.refresh_origin();

        let candidate = if self.drag.output().is_dragging && (drag.consumed || origin_changed) {
            let position = self.drag.output().position.unwrap_or(Point::ZERO);
            Some(point_to_angle(position, self.origin))
        } else if wheel.consumed || adjust.consumed {
            let mut step = 0.0;
            if wheel.consumed {
                step += self.wheel.output().delta;
            }
            if adjust.consumed {
                step += self.adjust.output().delta;
            }
            Some(self.rotation.angle() + step)
        } else {
            None
        };

        if let Some(candidate) = candidate {
            let turns = self.rotation.full_rotations();
            self.rotation = self.rotation.advance(candidate).clamped(&self.interval);
            if self.rotation.full_rotations() != turns {
                log::trace!(
                    "rotation crossed zero: {turns} -> {} turns",
                    self.rotation.full_rotations()
                );
            }
        }

        let merged = drag.merge(wheel).merge(adjust);
        Response {
            consumed: merged.consumed || origin_changed,
            changed: self.output() != before,
            prevent_default: merged.prevent_default,
        }
    }

    fn subscribe_resize(&mut self) {
        self.resize = None;
        if !self.origin_source.tracks_resize() {
            return;
        }
        if let Some(host) = &self.host {
            self.resize = Some(Subscription::observe_resize(host, self.drag.drag_area()));
        }
    }

    fn resolve_origin(&self) -> Point {
        match &self.origin_source {
            Origin::Auto => self
                .drag
                .drag_area()
                .bounds()
                .map(rect_center_local)
                .unwrap_or(Point::ZERO),
            Origin::Fixed(point) => *point,
            Origin::Dynamic(origin) => origin().unwrap_or(Point::ZERO),
        }
    }

    /// Re-evaluates the origin; returns whether it moved.
    fn refresh_origin(&mut self) -> bool {
        let next = self.resolve_origin();
        if point_equals(Some(next), Some(self.origin)) {
            return false;
        }
        log::trace!("rotation origin moved from {:?} to {next:?}", self.origin);
        self.origin = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TouchEvent;
    use crate::host::EventKinds;
    use crate::host::tests::LogHost;
    use crate::region::SharedRegion;
    use core::cell::Cell;
    use core::f64::consts::{PI, TAU};
    use kurbo::Rect;
    use understory_gesture_math::angle_to_point;

    const EPS: f64 = 1e-9;

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    fn knob() -> Rect {
        Rect::new(190.0, 90.0, 200.0, 110.0)
    }

    fn engine(config: RotateConfig) -> RotateEngine<Rect> {
        RotateEngine::new(area(), knob(), config, 0.0)
    }

    /// Moves the pointer to `angle` on a circle of radius 90 around the area centre.
    fn drag_to(engine: &mut RotateEngine<Rect>, angle: f64) -> Response {
        let p = angle_to_point(angle, Point::new(100.0, 100.0), 90.0);
        engine.handle(&InputEvent::pointer_move(p.x, p.y))
    }

    #[test]
    fn initial_state_is_at_rest() {
        let e = engine(RotateConfig::default().with_initial(Initial::Angle(1.0)));
        let out = e.output();
        assert!(!out.is_rotating);
        assert_eq!(out.active, ActiveInputs::empty());
        assert_eq!(out.total_angle, 1.0);
        assert_eq!(out.value, None);
        assert_eq!(e.origin(), Point::new(100.0, 100.0));
    }

    #[test]
    fn idle_pointer_moves_only_update_hover() {
        let mut e = engine(RotateConfig::default());
        let r = e.handle(&InputEvent::pointer_move(150.0, 150.0));
        assert!(!r.consumed);
        let r = e.handle(&InputEvent::pointer_move(195.0, 100.0));
        assert!(!r.consumed && r.changed);
        let out = e.output();
        assert!(out.is_on_target);
        assert!(!out.is_rotating);
        assert_eq!(out.active, ActiveInputs::empty());
        assert_eq!(out.total_angle, 0.0);

        let _ = e.handle(&InputEvent::pointer_move(150.0, 50.0));
        let out = e.output();
        assert!(!out.is_on_target && !out.is_rotating);
        assert_eq!(out.total_angle, 0.0);
    }

    #[test]
    fn dragging_the_knob_counts_turns() {
        let mut e = engine(RotateConfig::default());
        let r = e.handle(&InputEvent::pointer_down(195.0, 100.0));
        assert!(r.consumed);
        assert_eq!(e.output().active, ActiveInputs::DRAG | ActiveInputs::ADJUST);

        for step in 1..=8 {
            let _ = drag_to(&mut e, f64::from(step) * TAU / 8.0 + 0.01);
        }
        let out = e.output();
        assert_eq!(out.full_rotations, 1);
        assert!((out.angle - 0.01).abs() < 1e-6);
        assert!((out.total_angle - (TAU + 0.01)).abs() < 1e-6);

        // And back again.
        for step in (0..8).rev() {
            let _ = drag_to(&mut e, f64::from(step) * TAU / 8.0 - 0.01);
        }
        assert_eq!(e.output().full_rotations, -1);

        let r = e.handle(&InputEvent::pointer_up(0.0, 0.0));
        assert!(r.changed);
        assert!(!e.output().is_rotating);
    }

    #[test]
    fn press_off_target_adjusts_instead() {
        let mut e = engine(RotateConfig::default());
        let _ = e.handle(&InputEvent::pointer_down(50.0, 100.0));
        assert_eq!(e.output().active, ActiveInputs::ADJUST);

        let _ = e.handle(&InputEvent::pointer_move(50.0, 80.0));
        assert!((e.output().total_angle - 0.1).abs() < EPS);
        let _ = e.handle(&InputEvent::pointer_move(50.0, 60.0));
        assert!((e.output().total_angle - 0.2).abs() < EPS);

        // Held still: no further change.
        let r = e.handle(&InputEvent::pointer_move(50.0, 60.0));
        assert!(!r.changed);
    }

    #[test]
    fn adjusting_backwards_past_zero_removes_a_turn() {
        let mut e = engine(RotateConfig::default().with_initial(Initial::Angle(0.05)));
        let _ = e.handle(&InputEvent::pointer_down(50.0, 100.0));
        let _ = e.handle(&InputEvent::pointer_move(50.0, 120.0));
        let out = e.output();
        assert_eq!(out.full_rotations, -1);
        assert!((out.total_angle + 0.05).abs() < EPS);
        assert!((out.angle - (TAU - 0.05)).abs() < EPS);
    }

    #[test]
    fn wheel_samples_rotate_and_reset() {
        let mut e = engine(RotateConfig::default());
        let r = e.handle(&InputEvent::wheel(100.0, 100.0, -100.0, 50.0));
        assert!(r.prevent_default && r.changed);
        let out = e.output();
        assert_eq!(out.active, ActiveInputs::WHEEL);
        assert!((out.total_angle - 0.02).abs() < EPS);

        // An identical sample is applied again.
        let _ = e.handle(&InputEvent::wheel(100.0, 100.0, -100.0, 100.0));
        assert!((e.output().total_angle - 0.04).abs() < EPS);

        assert_eq!(e.next_deadline(), Some(300.0));
        let r = e.on_timer(300.0);
        assert!(r.changed);
        let out = e.output();
        assert!(!out.is_rotating);
        assert!((out.total_angle - 0.04).abs() < EPS);
    }

    #[test]
    fn wheel_outside_drag_area_is_ignored() {
        let mut e = engine(RotateConfig::default());
        assert_eq!(
            e.handle(&InputEvent::wheel(300.0, 100.0, -100.0, 50.0)),
            Response::IGNORED
        );
    }

    #[test]
    fn angle_range_clamps() {
        let config = RotateConfig::default().with_range(RotationRange::Angle { min: 0.0, max: PI });
        let mut e = engine(config);
        let _ = e.handle(&InputEvent::pointer_down(195.0, 100.0));
        let _ = drag_to(&mut e, PI / 2.0);
        assert!((e.output().total_angle - PI / 2.0).abs() < 1e-6);
        let _ = drag_to(&mut e, 0.9 * PI);
        let _ = drag_to(&mut e, 1.2 * PI);
        assert!((e.output().total_angle - PI).abs() < EPS);
    }

    #[test]
    fn initial_angle_is_clamped() {
        let config = RotateConfig::default()
            .with_range(RotationRange::Angle { min: 1.0, max: 2.0 })
            .with_initial(Initial::Angle(5.0));
        assert_eq!(engine(config).output().total_angle, 2.0);
    }

    #[test]
    fn dial_maps_value_onto_a_turn() {
        let e = engine(RotateConfig::dial(0.0, 100.0, 50.0));
        let out = e.output();
        assert!((out.total_angle - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((out.value.unwrap_or(f64::NAN) - 50.0).abs() < EPS);
        assert!((out.angle - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn dial_clamps_at_both_ends() {
        let mut e = engine(RotateConfig::dial(0.0, 1.0, 0.0));
        let _ = e.handle(&InputEvent::pointer_down(50.0, 100.0));
        let _ = e.handle(&InputEvent::pointer_move(50.0, 150.0));
        assert!((e.output().value.unwrap_or(f64::NAN)).abs() < EPS);

        assert!(e.set_value(2.0));
        assert!((e.output().value.unwrap_or(f64::NAN) - 1.0).abs() < EPS);
        assert!((e.output().total_angle - 5.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn initial_value_without_mapping_is_an_angle() {
        let mut e = engine(RotateConfig::default().with_initial(Initial::Value(0.5)));
        assert_eq!(e.output().total_angle, 0.5);
        assert!(!e.set_value(1.0));
    }

    #[test]
    fn two_finger_drag_adjusts() {
        let mut e = engine(RotateConfig::default());
        let down = TouchEvent::new([Point::new(50.0, 100.0), Point::new(60.0, 100.0)], []);
        let moved = TouchEvent::new([Point::new(50.0, 80.0), Point::new(60.0, 80.0)], []);
        let _ = e.handle(&InputEvent::TouchStart(down));
        let _ = e.handle(&InputEvent::TouchMove(moved));
        assert!((e.output().total_angle - 0.1).abs() < EPS);
    }

    #[test]
    fn fixed_origin_never_subscribes_to_resize() {
        let host = Rc::new(LogHost::default());
        let config = RotateConfig::default().with_origin(Origin::Fixed(Point::new(10.0, 10.0)));
        let mut e = engine(config);
        e.attach(host.clone());
        assert!(!host.live_kinds().contains(EventKinds::RESIZE));
        assert_eq!(host.live.borrow().len(), 3);
        assert_eq!(e.origin(), Point::new(10.0, 10.0));

        e.set_origin(Origin::Auto);
        assert!(host.live_kinds().contains(EventKinds::RESIZE));
        assert_eq!(host.live.borrow().len(), 4);
        assert_eq!(e.origin(), Point::new(100.0, 100.0));

        e.detach();
        assert!(host.live.borrow().is_empty());
    }

    #[test]
    fn resize_moves_auto_origin() {
        let area = SharedRegion::with_bounds(Rect::new(0.0, 0.0, 200.0, 200.0));
        let knob = SharedRegion::with_bounds(Rect::new(0.0, 0.0, 1.0, 1.0));
        let mut e = RotateEngine::new(area.clone(), knob, RotateConfig::default(), 0.0);
        assert_eq!(e.origin(), Point::new(100.0, 100.0));

        area.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
        let r = e.handle(&InputEvent::Resize);
        assert!(r.consumed);
        assert_eq!(e.origin(), Point::new(50.0, 25.0));

        // Unchanged layout: nothing to do.
        assert_eq!(e.handle(&InputEvent::Resize), Response::IGNORED);
    }

    #[test]
    fn dynamic_origin_is_reevaluated_on_resize() {
        let source = Rc::new(Cell::new(Some(Point::new(5.0, 5.0))));
        let read = source.clone();
        let config = RotateConfig::default().with_origin(Origin::Dynamic(Box::new(move || read.get())));
        let mut e = engine(config);
        assert_eq!(e.origin(), Point::new(5.0, 5.0));

        source.set(None);
        let _ = e.handle(&InputEvent::Resize);
        assert_eq!(e.origin(), Point::ZERO);
    }

    #[test]
    fn resize_during_drag_recomputes_angle() {
        let area = SharedRegion::with_bounds(area());
        let knob = SharedRegion::with_bounds(knob());
        let mut e = RotateEngine::new(area.clone(), knob, RotateConfig::default(), 0.0);
        let _ = e.handle(&InputEvent::pointer_down(195.0, 100.0));
        assert!(e.output().total_angle.abs() < EPS);

        // The centre moves below the pointer: the pointer is now straight up.
        area.set_bounds(Some(Rect::new(0.0, 0.0, 390.0, 400.0)));
        let r = e.handle(&InputEvent::Resize);
        assert!(r.changed);
        assert!((e.output().angle - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn region_observer_is_used_when_available() {
        let host = Rc::new(LogHost::with_observer());
        let mut e = engine(RotateConfig::default());
        e.attach(host.clone());
        assert_eq!(host.live.borrow().len(), 4);
        assert!(!host.live_kinds().contains(EventKinds::RESIZE));
        drop(e);
        assert!(host.live.borrow().is_empty());
    }
}
