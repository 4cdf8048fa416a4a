// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Reduces an angle in radians, possibly negative, into `[0, 2π)`.
///
/// Non-finite inputs propagate (`NaN` in, `NaN` out).
#[must_use]
pub fn normalized_angle(angle: f64) -> f64 {
    let rem = angle % TAU;
    // `rem + TAU` can round up to exactly `TAU` for tiny negative remainders.
    (if rem < 0.0 { rem + TAU } else { rem }) % TAU
}

/// Returns the point at `angle` on the circle centred on `origin` with the given radius.
///
/// `angle_to_point(0.0, o, r)` is `o + (r, 0)`.
#[must_use]
pub fn angle_to_point(angle: f64, origin: Point, radius: f64) -> Point {
    let angle = angle % TAU;
    Point::new(
        angle.cos() * radius + origin.x,
        angle.sin() * radius + origin.y,
    )
}

/// Returns the angle in `[0, 2π)` of the vector from `origin` to `point`.
///
/// A point equal to the origin yields `0`.
#[must_use]
pub fn point_to_angle(point: Point, origin: Point) -> f64 {
    let rad = (point.y - origin.y).atan2(point.x - origin.x);
    if rad < 0.0 { rad + TAU } else { rad }
}
