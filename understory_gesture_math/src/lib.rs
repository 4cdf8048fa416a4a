// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture_math --heading-base-level=0

//! Understory Gesture Math: pure helpers for turning pointer geometry into values.
//!
//! This crate holds the stateless half of knob, dial, and slider interactions:
//!
//! - Angle normalization into `[0, 2π)` and conversion between angles and
//!   points on a circle.
//! - Linear mapping between angles and a bounded numeric value, including the
//!   wrap policy for ranges that cross `2π`.
//! - Point and rectangle predicates that tolerate "not laid out yet".
//! - [`Rotation`], an unwrapped angle that counts full turns as the pointer
//!   crosses the `0`/`2π` boundary.
//!
//! Angles are in radians. Angle `0` points along `+x` and angles grow towards
//! `+y`, which in screen coordinates (y down) is clockwise.
//!
//! ## Angles and points
//!
//! ```rust
//! use core::f64::consts::TAU;
//! use kurbo::Point;
//! use understory_gesture_math::{angle_to_point, normalized_angle, point_to_angle};
//!
//! let origin = Point::new(10.0, 10.0);
//! let p = angle_to_point(TAU / 4.0, origin, 5.0);
//! assert!((p.x - 10.0).abs() < 1e-9 && (p.y - 15.0).abs() < 1e-9);
//! assert!((point_to_angle(p, origin) - TAU / 4.0).abs() < 1e-9);
//! assert!((normalized_angle(-TAU / 4.0) - 3.0 * TAU / 4.0).abs() < 1e-9);
//! ```
//!
//! ## Values
//!
//! ```rust
//! use core::f64::consts::TAU;
//! use understory_gesture_math::ValueMapping;
//!
//! // Degrees on a full circle.
//! let degrees = ValueMapping::new(0.0, 360.0, 0.0, TAU);
//! assert_eq!(degrees.angle_to_value(TAU / 4.0), 90.0);
//! assert_eq!(degrees.value_to_angle(180.0), TAU / 2.0);
//! ```
//!
//! ## Counting turns
//!
//! ```rust
//! use understory_gesture_math::Rotation;
//!
//! let rotation = Rotation::new(6.0);
//! // Stepping from just below 2π to just above 0 is a forward turn.
//! let rotation = rotation.advance(0.3);
//! assert_eq!(rotation.full_rotations(), 1);
//! assert!((rotation.angle() - 0.3).abs() < 1e-12);
//!
//! // And stepping back across the boundary undoes it.
//! let rotation = rotation.advance(6.0);
//! assert_eq!(rotation.full_rotations(), 0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod angle;
mod geometry;
mod mapping;
mod rotation;

pub use angle::{angle_to_point, normalized_angle, point_to_angle};
pub use geometry::{is_point_in_rect, point_equals, rect_center_local};
pub use mapping::{AngleInterval, MappingError, ValueMapping, angle_to_value, value_to_angle};
pub use rotation::Rotation;
