// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{AngleInterval, normalized_angle};

/// An unwrapped angle: a normalized angle plus a signed count of full turns.
///
/// The total angle is the only stored quantity; [`Rotation::angle`] and
/// [`Rotation::full_rotations`] are derived from it so that
/// `total_angle == angle + 2π · full_rotations` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    total: f64,
}

impl Rotation {
    /// Creates a rotation with the given total angle in radians.
    #[must_use]
    pub const fn new(total_angle: f64) -> Self {
        Self { total: total_angle }
    }

    /// The unwrapped angle in radians.
    #[must_use]
    pub const fn total_angle(&self) -> f64 {
        self.total
    }

    /// The angle reduced into `[0, 2π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        normalized_angle(self.total)
    }

    /// `floor(total_angle / 2π)`: negative after turning backwards past zero.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "turn counts are far below i64::MAX for any finite gesture"
    )]
    pub fn full_rotations(&self) -> i64 {
        (self.total / TAU).floor() as i64
    }

    /// Moves to a new normalized angle, counting a turn when the step crosses zero.
    ///
    /// The step is taken to be the shorter way around: a candidate more than
    /// half a turn "behind" the current angle is read as a forward step. A
    /// forward step that wraps (candidate below the current angle) adds a
    /// turn; a backward step that wraps removes one.
    #[must_use]
    pub fn advance(self, candidate: f64) -> Self {
        let angle = self.angle();
        let candidate = normalized_angle(candidate);
        let forward = (angle - candidate + TAU) % TAU > 0.5 * TAU;
        let mut turns = (self.total / TAU).floor();
        if forward && candidate < angle {
            turns += 1.0;
        } else if !forward && candidate > angle {
            turns -= 1.0;
        }
        Self::new(candidate + TAU * turns)
    }

    /// Returns this rotation with its total angle clamped into `interval`.
    #[must_use]
    pub fn clamped(self, interval: &AngleInterval) -> Self {
        Self::new(interval.clamp(self.total))
    }
}
