// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: headless trackers for sliders, knobs, and dials.
//!
//! This crate turns raw pointer, touch, and wheel input into continuous
//! values. It owns no event loop and draws nothing: a host forwards
//! [`InputEvent`]s to a tracker's `handle` method and re-renders when the
//! returned [`Response`] says the output changed.
//!
//! - [`wheel`]: Wheel velocity over a region, reset after a quiet period
//! - [`drag_adjust`]: One-axis drags as incremental adjustments
//! - [`drag_move`]: Absolute position inside a drag area, with hover flags
//! - [`rotate`]: Drag, wheel, and drag-adjust combined into a turn-counting rotation
//! - [`slider`]: Wheel and drag combined into a bounded linear value
//! - `pointer_adapter`: Translation from `ui_events` pointer events (feature `ui_events_adapter`)
//!
//! ## Host integration
//!
//! Regions are queried through the [`region::Region`] trait every time a
//! tracker needs geometry, so layout changes between events are always seen.
//! Event subscriptions are acquired through [`host::EventHost`] when a
//! tracker is attached and released when it is detached or dropped.
//!
//! The wheel tracker needs a timer. It reports its next deadline through
//! `next_deadline`, and the host calls `on_timer` once that time has passed.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_gesture::InputEvent;
//! use understory_gesture::slider::{Slider, SliderConfig};
//!
//! let track = Rect::new(0.0, 0.0, 100.0, 200.0);
//! let thumb = Rect::new(0.0, 0.0, 100.0, 10.0);
//! let mut slider = Slider::new(track, thumb, SliderConfig::default(), 0.0);
//!
//! // Spin the wheel over the track.
//! let r = slider.handle(&InputEvent::wheel(50.0, 50.0, -100.0, 50.0));
//! assert!(r.changed && r.prevent_default);
//! assert!((slider.output().value - 0.02).abs() < 1e-12);
//!
//! // After 200 ms of silence the slider is no longer adjusting.
//! let deadline = slider.next_deadline().unwrap();
//! let _ = slider.on_timer(deadline);
//! assert!(!slider.output().is_adjusting);
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo with the standard library
//! - `libm`: Use `libm` for float functions in `no_std` builds
//! - `ui_events_adapter` (default): Translate `ui_events` pointer events into [`InputEvent`]s
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod drag_adjust;
pub mod drag_move;
pub mod event;
pub mod host;
#[cfg(feature = "ui_events_adapter")]
pub mod pointer_adapter;
pub mod region;
pub mod rotate;
pub mod slider;
pub mod timer;
pub mod wheel;

pub use event::{InputEvent, Response};
