// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene errors.
//!
//! Nothing in the animation path is fatal. A [`SceneError`] is either a
//! configuration mistake (the scene is skipped and the error is reported
//! through the [trace sink](crate::trace::TraceSink)) or a transient layout
//! condition (the scene is retried on a later frame).

use alloc::string::String;

/// How the controller reacts to a [`SceneError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The scene description is wrong for this page. Skip the scene.
    Configuration,
    /// Layout was not ready. Retry on the next frame.
    Transient,
}

/// Errors raised while registering or measuring a scene.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// The trigger selector matched nothing.
    #[error("trigger element `{selector}` not found")]
    MissingTrigger {
        /// Selector that failed to resolve.
        selector: String,
    },
    /// An action, marker or list selector matched nothing.
    #[error("target element `{selector}` not found")]
    MissingTarget {
        /// Selector that failed to resolve.
        selector: String,
    },
    /// Trigger hook outside `0.0..=1.0`.
    #[error("trigger hook {hook} is outside 0.0..=1.0")]
    InvalidTriggerHook {
        /// Offending value.
        hook: f64,
    },
    /// A duration resolved to zero, a negative or a non-finite value.
    #[error("scene duration must be positive, got {duration}")]
    InvalidDuration {
        /// Offending value.
        duration: f64,
    },
    /// The action cannot produce any output.
    #[error("invalid action: {reason}")]
    InvalidAction {
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The element exists but has no usable geometry yet.
    #[error("layout for `{selector}` is not ready")]
    LayoutNotReady {
        /// Selector whose geometry was unavailable.
        selector: String,
    },
}

impl SceneError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LayoutNotReady { .. } => ErrorKind::Transient,
            Self::MissingTrigger { .. }
            | Self::MissingTarget { .. }
            | Self::InvalidTriggerHook { .. }
            | Self::InvalidDuration { .. }
            | Self::InvalidAction { .. } => ErrorKind::Configuration,
        }
    }

    /// Returns `true` if retrying later may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}
