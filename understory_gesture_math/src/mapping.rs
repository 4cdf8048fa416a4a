// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear mapping between angles and bounded values.

use core::f64::consts::TAU;
use core::fmt;

/// Maps an angle in radians onto a value.
///
/// `min_angle` maps to `min_value` and `max_angle` to `max_value`. When
/// `max_angle <= min_angle` the range is taken to wrap past `2π`: the minimum
/// angle is advanced by one full turn before mapping.
///
/// `min_value == max_value` is fine here; it is the inverse,
/// [`value_to_angle`], that divides by the value span.
#[must_use]
pub fn angle_to_value(
    angle: f64,
    min_value: f64,
    max_value: f64,
    min_angle: f64,
    max_angle: f64,
) -> f64 {
    let min_angle = wrapped_min_angle(min_angle, max_angle);
    min_value + ((max_value - min_value) / (max_angle - min_angle)) * (angle - min_angle)
}

/// Maps a value onto an angle in radians.
///
/// This is the plain linear map with no wrap correction, so for wrapping
/// ranges (`max_angle <= min_angle`) it is not the inverse of
/// [`angle_to_value`].
///
/// Callers must not pass `min_value == max_value`.
#[must_use]
pub fn value_to_angle(
    value: f64,
    min_value: f64,
    max_value: f64,
    min_angle: f64,
    max_angle: f64,
) -> f64 {
    min_angle + ((max_angle - min_angle) / (max_value - min_value)) * (value - min_value)
}

fn wrapped_min_angle(min_angle: f64, max_angle: f64) -> f64 {
    if max_angle <= min_angle {
        min_angle + TAU
    } else {
        min_angle
    }
}

/// Error returned by [`ValueMapping::try_new`] for unusable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MappingError {
    /// `min_value` and `max_value` are equal, so no angle can be derived from a value.
    EmptyValueRange {
        /// The value both ends of the range share.
        value: f64,
    },
    /// One of the parameters is `NaN` or infinite.
    NonFinite,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValueRange { value } => {
                write!(f, "value range is empty: min and max are both {value}")
            }
            Self::NonFinite => f.write_str("value mapping parameters must be finite"),
        }
    }
}

impl core::error::Error for MappingError {}

/// A value range attached to an angle range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueMapping {
    /// Value at `min_angle`.
    pub min_value: f64,
    /// Value at `max_angle`.
    pub max_value: f64,
    /// Angle, in radians, that corresponds to `min_value`.
    pub min_angle: f64,
    /// Angle, in radians, that corresponds to `max_value`.
    pub max_angle: f64,
}

impl ValueMapping {
    /// Creates a mapping without validation.
    ///
    /// `min_value` must differ from `max_value`; use [`ValueMapping::try_new`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(min_value: f64, max_value: f64, min_angle: f64, max_angle: f64) -> Self {
        Self {
            min_value,
            max_value,
            min_angle,
            max_angle,
        }
    }

    /// Creates a mapping, rejecting an empty value range or non-finite parameters.
    pub fn try_new(
        min_value: f64,
        max_value: f64,
        min_angle: f64,
        max_angle: f64,
    ) -> Result<Self, MappingError> {
        let all_finite = [min_value, max_value, min_angle, max_angle]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(MappingError::NonFinite);
        }
        if min_value == max_value {
            return Err(MappingError::EmptyValueRange { value: min_value });
        }
        Ok(Self::new(min_value, max_value, min_angle, max_angle))
    }

    /// See [`angle_to_value`].
    #[must_use]
    pub fn angle_to_value(&self, angle: f64) -> f64 {
        angle_to_value(
            angle,
            self.min_value,
            self.max_value,
            self.min_angle,
            self.max_angle,
        )
    }

    /// See [`value_to_angle`].
    #[must_use]
    pub fn value_to_angle(&self, value: f64) -> f64 {
        value_to_angle(
            value,
            self.min_value,
            self.max_value,
            self.min_angle,
            self.max_angle,
        )
    }

    /// The interval of total angles that maps into the value range.
    #[must_use]
    pub fn angle_interval(&self) -> AngleInterval {
        AngleInterval::new(self.min_angle, self.max_angle)
    }
}

/// A closed interval of total (unwrapped) angles used to bound a rotation.
///
/// Built from a `(min, max)` pair with the same wrap policy as
/// [`angle_to_value`]: if `max <= min`, the interval runs from `max` to
/// `min + 2π`, which is exactly the stretch that `angle_to_value` sends into
/// the value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleInterval {
    lo: f64,
    hi: f64,
}

impl AngleInterval {
    /// An interval that never clamps.
    pub const UNBOUNDED: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Builds the interval for a `(min, max)` angle pair.
    #[must_use]
    pub fn new(min_angle: f64, max_angle: f64) -> Self {
        if max_angle <= min_angle {
            Self {
                lo: max_angle,
                hi: min_angle + TAU,
            }
        } else {
            Self {
                lo: min_angle,
                hi: max_angle,
            }
        }
    }

    /// Lower end.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper end.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Clamps `angle` into the interval.
    ///
    /// Unlike [`f64::clamp`] this never panics, even for `NaN` ends.
    #[must_use]
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.max(self.lo).min(self.hi)
    }
}
