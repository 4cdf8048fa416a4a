// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Compares two optional points.
///
/// Two absent points are equal; an absent point never equals a present one.
#[must_use]
pub fn point_equals(point: Option<Point>, other: Option<Point>) -> bool {
    match (point, other) {
        (None, None) => true,
        (Some(a), Some(b)) => a.x == b.x && a.y == b.y,
        _ => false,
    }
}

/// Returns `true` if `point` lies inside `rect`, edges included.
///
/// An absent rectangle (a region that is not laid out) contains nothing.
#[must_use]
pub fn is_point_in_rect(point: Point, rect: Option<Rect>) -> bool {
    rect.is_some_and(|r| r.x0 <= point.x && r.x1 >= point.x && r.y0 <= point.y && r.y1 >= point.y)
}

/// Centre of `rect` expressed in the rectangle's own frame, i.e. `(width / 2, height / 2)`.
#[must_use]
pub fn rect_center_local(rect: Rect) -> Point {
    Point::new(rect.width() / 2.0, rect.height() / 2.0)
}
