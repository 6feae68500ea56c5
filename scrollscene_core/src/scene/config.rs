// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative scene descriptions.

use alloc::string::String;

use kurbo::Rect;

use crate::action::{Action, ClassToggle, Tween};
use crate::document::Document;
use crate::error::SceneError;
use crate::viewport::{Responsive, ViewportClass};

/// A scroll distance that may depend on measured geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum Length {
    /// A fixed number of pixels.
    Px(f64),
    /// A multiple of the trigger element's height.
    TriggerHeight(f64),
    /// A multiple of another element's height.
    ElementHeight {
        /// Selector of the measured element (first match).
        selector: String,
        /// Multiplier.
        factor: f64,
    },
}

impl Length {
    /// A fixed pixel length.
    #[must_use]
    pub const fn px(px: f64) -> Self {
        Self::Px(px)
    }

    /// A multiple of the trigger element's height.
    #[must_use]
    pub const fn trigger_height(factor: f64) -> Self {
        Self::TriggerHeight(factor)
    }

    /// A multiple of the height of the first element matching `selector`.
    #[must_use]
    pub fn element_height(selector: impl Into<String>, factor: f64) -> Self {
        Self::ElementHeight {
            selector: selector.into(),
            factor,
        }
    }

    /// Returns `true` if the length is derived from layout.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        !matches!(self, Self::Px(_))
    }

    /// Resolves the length against the trigger's document rectangle.
    pub fn resolve(&self, trigger: Rect, doc: &mut dyn Document) -> Result<f64, SceneError> {
        match self {
            Self::Px(px) => Ok(*px),
            Self::TriggerHeight(factor) => Ok(trigger.height() * factor),
            Self::ElementHeight { selector, factor } => {
                let element = doc.query_all(selector).first().copied().ok_or_else(|| {
                    SceneError::MissingTarget {
                        selector: selector.clone(),
                    }
                })?;
                let rect = doc
                    .bounding_rect(element)
                    .ok_or_else(|| SceneError::LayoutNotReady {
                        selector: selector.clone(),
                    })?;
                Ok(rect.height() * factor)
            }
        }
    }

    fn factor(&self) -> f64 {
        match self {
            Self::Px(v) | Self::TriggerHeight(v) | Self::ElementHeight { factor: v, .. } => *v,
        }
    }
}

/// Switches a scene to a longer duration once the reader is well into it.
///
/// While scrolling forward past `extend_above` the duration becomes
/// `extended`; while scrolling back below `restore_below` it returns to the
/// scene's regular duration. `restore_below` above `extend_above` gives the
/// switch hysteresis so it cannot oscillate at a single offset.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationExtension {
    /// Duration while extended.
    pub extended: Length,
    /// Forward progress beyond which the scene extends.
    pub extend_above: f64,
    /// Reverse progress below which the scene restores.
    pub restore_below: f64,
}

/// Everything needed to register a scroll scene.
///
/// All parameters except the trigger are [`Responsive`], so one spec covers
/// every viewport class. Plain values convert into per-class tables.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSpec {
    /// Selector of the trigger element (first match).
    pub trigger: String,
    /// Activation line as a fraction of the viewport height, `0.0..=1.0`.
    pub trigger_hook: Responsive<f64>,
    /// Distance subtracted from the trigger's top when placing the window.
    pub offset: Responsive<Length>,
    /// Scroll distance over which progress advances 0 → 1.
    pub duration: Responsive<Length>,
    /// What progress drives.
    pub action: Responsive<Action>,
    /// Optional duration switch.
    pub extension: Responsive<Option<DurationExtension>>,
    /// Classes on which the scene is active. Disabled scenes stay registered
    /// but produce no output.
    pub enabled: Responsive<bool>,
}

impl SceneSpec {
    /// Starts a spec with a centered trigger hook, no offset and a duration
    /// equal to the trigger's height.
    #[must_use]
    pub fn new(trigger: impl Into<String>, action: impl Into<Responsive<Action>>) -> Self {
        Self {
            trigger: trigger.into(),
            trigger_hook: Responsive::all(0.5),
            offset: Responsive::all(Length::Px(0.0)),
            duration: Responsive::all(Length::TriggerHeight(1.0)),
            action: action.into(),
            extension: Responsive::all(None),
            enabled: Responsive::all(true),
        }
    }

    /// Sets the trigger hook.
    #[must_use]
    pub fn trigger_hook(mut self, hook: impl Into<Responsive<f64>>) -> Self {
        self.trigger_hook = hook.into();
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<Responsive<Length>>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn duration(mut self, duration: impl Into<Responsive<Length>>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Adds a duration extension.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<Responsive<Option<DurationExtension>>>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Restricts the classes on which the scene runs.
    #[must_use]
    pub fn enabled(mut self, enabled: impl Into<Responsive<bool>>) -> Self {
        self.enabled = enabled.into();
        self
    }

    /// Checks every per-class parameter that can be checked without layout.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.trigger.trim().is_empty() {
            return Err(SceneError::MissingTrigger {
                selector: self.trigger.clone(),
            });
        }
        for class in ViewportClass::ALL {
            let hook = *self.trigger_hook.get(class);
            if !(0.0..=1.0).contains(&hook) {
                return Err(SceneError::InvalidTriggerHook { hook });
            }
            if !self.offset.get(class).factor().is_finite() {
                return Err(SceneError::InvalidAction {
                    reason: "offset is not finite",
                });
            }
            validate_duration(self.duration.get(class))?;
            if let Some(ext) = self.extension.get(class) {
                validate_duration(&ext.extended)?;
                if !(ext.extend_above.is_finite() && ext.restore_below.is_finite()) {
                    return Err(SceneError::InvalidAction {
                        reason: "extension thresholds are not finite",
                    });
                }
            }
            self.action.get(class).validate()?;
        }
        Ok(())
    }
}

fn validate_duration(length: &Length) -> Result<(), SceneError> {
    let factor = length.factor();
    if !factor.is_finite() || factor <= 0.0 {
        return Err(SceneError::InvalidDuration { duration: factor });
    }
    Ok(())
}

impl From<Tween> for Responsive<Action> {
    fn from(tween: Tween) -> Self {
        Self::all(Action::Tween(tween))
    }
}

impl From<ClassToggle> for Responsive<Action> {
    fn from(toggle: ClassToggle) -> Self {
        Self::all(Action::ClassToggle(toggle))
    }
}
