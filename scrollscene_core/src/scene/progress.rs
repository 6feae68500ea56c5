// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-position to progress mapping.

/// Which way the page moved since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Scrolling down the page.
    Forward,
    /// Scrolling back up.
    Reverse,
    /// No movement (e.g. a resize-only frame).
    #[default]
    Paused,
}

impl ScrollDirection {
    /// Derives the direction from two consecutive scroll offsets.
    #[must_use]
    pub fn from_offsets(previous: f64, current: f64) -> Self {
        if current > previous {
            Self::Forward
        } else if current < previous {
            Self::Reverse
        } else {
            Self::Paused
        }
    }
}

/// The scroll range over which a scene's progress advances from 0 to 1.
///
/// ```text
/// start    = element_top - offset - viewport_height * trigger_hook
/// progress = clamp((scroll_y - start) / duration, 0, 1)
/// ```
///
/// `element_top` is the trigger element's top edge in document coordinates;
/// `trigger_hook` places the activation line as a fraction of the viewport
/// height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationWindow {
    /// Scroll offset at which progress is 0.
    pub start: f64,
    /// Scroll distance over which progress advances to 1. Always positive.
    pub duration: f64,
}

impl ActivationWindow {
    /// Computes the window for a measured trigger element.
    ///
    /// Returns `None` if `duration` is not positive or any input is not
    /// finite; such a scene has no defined progress.
    #[must_use]
    pub fn new(
        element_top: f64,
        viewport_height: f64,
        trigger_hook: f64,
        offset: f64,
        duration: f64,
    ) -> Option<Self> {
        let start = element_top - offset - viewport_height * trigger_hook;
        (start.is_finite() && duration.is_finite() && duration > 0.0)
            .then_some(Self { start, duration })
    }

    /// Scroll offset at which progress reaches 1.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Progress at `scroll_y`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let raw = (scroll_y - self.start) / self.duration;
        if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
    }
}
