// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a scene does as its progress moves.
//!
//! An [`Action`] is either a continuous [`Tween`] of inline style properties
//! (optionally along a [motion path](crate::motion)) or a discrete
//! [`ClassToggle`]. Actions are plain data; [`Action::validate`] runs at
//! registration so that a malformed action never reaches the mapper.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ease::Ease;
use crate::error::SceneError;
use crate::motion::MotionSpec;

/// An inline style property that can be tweened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    /// `left`, in pixels.
    Left,
    /// `top`, in pixels.
    Top,
    /// `opacity`, unitless.
    Opacity,
}

/// One interpolated property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyTween {
    /// Which property.
    pub property: TweenProperty,
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
}

impl PropertyTween {
    /// Interpolates at eased progress `t`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

/// Continuous interpolation of style properties on every element matching
/// `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    /// Selector of the animated elements.
    pub target: String,
    /// Interpolated properties.
    pub properties: Vec<PropertyTween>,
    /// Optional motion along an SVG path.
    pub motion: Option<MotionSpec>,
    /// Easing applied to progress before interpolation.
    pub ease: Ease,
}

impl Tween {
    /// Starts a tween on `target` with the default ease.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            properties: Vec::new(),
            motion: None,
            ease: Ease::default(),
        }
    }

    /// Adds an interpolated property.
    #[must_use]
    pub fn animate(mut self, property: TweenProperty, from: f64, to: f64) -> Self {
        self.properties.push(PropertyTween { property, from, to });
        self
    }

    /// Fades and slides vertically into place: `top` from `rise` to 0 and
    /// `opacity` from 0 to 1.
    #[must_use]
    pub fn rise_in(self, rise: f64) -> Self {
        self.animate(TweenProperty::Top, rise, 0.0)
            .animate(TweenProperty::Opacity, 0.0, 1.0)
    }

    /// Fades and slides horizontally into place: `left` from `shift` to 0
    /// and `opacity` from 0 to 1.
    #[must_use]
    pub fn slide_in(self, shift: f64) -> Self {
        self.animate(TweenProperty::Left, shift, 0.0)
            .animate(TweenProperty::Opacity, 0.0, 1.0)
    }

    /// Moves the target along a path.
    #[must_use]
    pub fn along(mut self, motion: MotionSpec) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Progress interval in which a class is applied.
///
/// The window is half-open, `[start, end)`, except that an `end` of 1.0 or
/// more also includes progress 1.0 so that "from here to the end" windows
/// stay applied once the scene completes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassWindow {
    /// First progress value with the class applied.
    pub start: f64,
    /// First progress value past the window.
    pub end: f64,
}

impl ClassWindow {
    /// Applies the class from `threshold` through the end of the scene.
    #[must_use]
    pub const fn from_threshold(threshold: f64) -> Self {
        Self {
            start: threshold,
            end: 1.0,
        }
    }

    /// Applies the class while progress is in `[start, end)`.
    #[must_use]
    pub const fn between(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `progress` lies in the window.
    #[must_use]
    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.start && (progress < self.end || (self.end >= 1.0 && progress >= 1.0))
    }
}

/// Discrete CSS class application on every element matching `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassToggle {
    /// Selector of the toggled elements.
    pub target: String,
    /// Class name, without the leading dot.
    pub class: String,
    /// When the class is present.
    pub window: ClassWindow,
}

impl ClassToggle {
    /// Toggles `class` on `target` within `window`.
    #[must_use]
    pub fn new(target: impl Into<String>, class: impl Into<String>, window: ClassWindow) -> Self {
        Self {
            target: target.into(),
            class: class.into(),
            window,
        }
    }
}

/// What a scene does with its progress.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Continuous style interpolation.
    Tween(Tween),
    /// Threshold-based class application.
    ClassToggle(ClassToggle),
}

impl Action {
    /// Selector of the elements this action writes to.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Tween(t) => &t.target,
            Self::ClassToggle(c) => &c.target,
        }
    }

    /// Checks that the action can produce output.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.target().trim().is_empty() {
            return Err(SceneError::InvalidAction {
                reason: "empty target selector",
            });
        }
        match self {
            Self::Tween(tween) => {
                if tween.properties.is_empty() && tween.motion.is_none() {
                    return Err(SceneError::InvalidAction {
                        reason: "tween has no properties and no motion path",
                    });
                }
                if tween
                    .properties
                    .iter()
                    .any(|p| !p.from.is_finite() || !p.to.is_finite())
                {
                    return Err(SceneError::InvalidAction {
                        reason: "tween endpoint is not finite",
                    });
                }
                if let Some(motion) = &tween.motion
                    && !motion.is_valid()
                {
                    return Err(SceneError::InvalidAction {
                        reason: "motion path is malformed",
                    });
                }
            }
            Self::ClassToggle(toggle) => {
                if toggle.class.trim().is_empty() || toggle.class.contains(char::is_whitespace) {
                    return Err(SceneError::InvalidAction {
                        reason: "class name must be a single non-empty token",
                    });
                }
                let w = toggle.window;
                if !w.start.is_finite() || w.end.is_nan() || w.start >= w.end {
                    return Err(SceneError::InvalidAction {
                        reason: "class window must satisfy start < end",
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<Tween> for Action {
    fn from(tween: Tween) -> Self {
        Self::Tween(tween)
    }
}

impl From<ClassToggle> for Action {
    fn from(toggle: ClassToggle) -> Self {
        Self::ClassToggle(toggle)
    }
}
