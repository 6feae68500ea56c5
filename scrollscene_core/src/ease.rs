// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! The `power` family follows the usual web-animation naming: `Power1` is
//! quadratic and `Power2` cubic. Every curve maps 0 to 0 and 1 to 1.

/// An easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic, accelerating.
    Power1In,
    /// Quadratic, decelerating.
    #[default]
    Power1Out,
    /// Quadratic, accelerating then decelerating.
    Power1InOut,
    /// Cubic, accelerating.
    Power2In,
    /// Cubic, decelerating.
    Power2Out,
    /// Cubic, accelerating then decelerating.
    Power2InOut,
}

impl Ease {
    /// Applies the curve to `t`, which is clamped to `0.0..=1.0` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power1In => t * t,
            Self::Power1Out => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::Power2In => t * t * t,
            Self::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
