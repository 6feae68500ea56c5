// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven looping timelines.
//!
//! Not every animation on a page follows the scroll position. A
//! [`LoopingTimeline`] derives progress from elapsed host time instead and
//! feeds it through the same [mapper](crate::mapper) as scroll scenes:
//!
//! ```text
//! cycle     = duration + repeat_delay
//! iteration = floor(elapsed / cycle)
//! local     = min(elapsed - iteration * cycle, duration)
//! progress  = local / duration            (reversed on odd iterations with yoyo)
//! ```
//!
//! During the repeat delay the timeline holds the value it reached at the end
//! of the iteration.

use alloc::vec::Vec;

use crate::action::Action;
use crate::changes::{AppliedTranslations, FrameChanges};
use crate::document::Document;
use crate::error::SceneError;
use crate::mapper::{MapperState, ResolvedAction};
use crate::time::{Duration, HostTime};

/// Handle to a timeline registered with the
/// [`AnimationController`](crate::controller::AnimationController).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineId(pub(crate) u32);

/// How often a timeline plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Play once, then repeat this many more times.
    Count(u32),
    /// Loop forever.
    Infinite,
}

/// Description of a looping timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineSpec {
    /// Actions driven by the timeline's progress, in order.
    pub actions: Vec<Action>,
    /// Length of one iteration.
    pub duration: Duration,
    /// Repetition policy.
    pub repeat: Repeat,
    /// Pause between iterations.
    pub repeat_delay: Duration,
    /// Play every other iteration backwards.
    pub yoyo: bool,
}

impl TimelineSpec {
    /// Plays `action` once over `duration`.
    #[must_use]
    pub fn new(duration: Duration, action: impl Into<Action>) -> Self {
        Self {
            actions: alloc::vec![action.into()],
            duration,
            repeat: Repeat::Count(0),
            repeat_delay: Duration::ZERO,
            yoyo: false,
        }
    }

    /// Adds another action driven by the same progress.
    #[must_use]
    pub fn and(mut self, action: impl Into<Action>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Sets the repetition policy.
    #[must_use]
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the pause between iterations.
    #[must_use]
    pub fn repeat_delay(mut self, delay: Duration) -> Self {
        self.repeat_delay = delay;
        self
    }

    /// Enables yoyo playback.
    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Checks the spec.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.duration.is_zero() {
            return Err(SceneError::InvalidDuration { duration: 0.0 });
        }
        if self.actions.is_empty() {
            return Err(SceneError::InvalidAction {
                reason: "timeline has no actions",
            });
        }
        self.actions.iter().try_for_each(Action::validate)
    }

    /// Progress at `elapsed` since the start, and whether the timeline has
    /// finished.
    #[must_use]
    pub fn progress_at(&self, elapsed: Duration) -> (f64, bool) {
        let duration = self.duration.ticks().max(1);
        let cycle = duration.saturating_add(self.repeat_delay.ticks());
        let mut iteration = elapsed.ticks() / cycle;
        let mut local = elapsed.ticks() % cycle;
        let mut finished = false;
        if let Repeat::Count(extra) = self.repeat
            && iteration > u64::from(extra)
        {
            iteration = u64::from(extra);
            local = duration;
            finished = true;
        }
        let p = local.min(duration) as f64 / duration as f64;
        let reversed = self.yoyo && iteration % 2 == 1;
        (if reversed { 1.0 - p } else { p }, finished)
    }
}

/// A [`TimelineSpec`] bound to elements and a start time.
#[derive(Clone, Debug)]
pub struct LoopingTimeline {
    spec: TimelineSpec,
    resolved: Option<Vec<ResolvedAction>>,
    states: Vec<MapperState>,
    started: Option<HostTime>,
    last_progress: Option<f64>,
    finished: bool,
}

impl LoopingTimeline {
    /// Creates a stopped, unresolved timeline.
    ///
    /// # Errors
    ///
    /// Returns the spec's validation error.
    pub fn new(spec: TimelineSpec) -> Result<Self, SceneError> {
        spec.validate()?;
        let states = alloc::vec![MapperState::default(); spec.actions.len()];
        Ok(Self {
            spec,
            resolved: None,
            states,
            started: None,
            last_progress: None,
            finished: false,
        })
    }

    /// The timeline's description.
    #[must_use]
    pub fn spec(&self) -> &TimelineSpec {
        &self.spec
    }

    /// Binds every action to elements. All-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns the first failing action's error; the timeline stays
    /// unresolved.
    pub fn resolve(
        &mut self,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
    ) -> Result<(), SceneError> {
        let resolved = self
            .spec
            .actions
            .iter()
            .map(|a| ResolvedAction::resolve(a, doc, applied))
            .collect::<Result<Vec<_>, _>>()?;
        self.resolved = Some(resolved);
        self.last_progress = None;
        Ok(())
    }

    /// Drops the element bindings so that the next frame resolves again,
    /// e.g. after a resize moved the motion path.
    pub fn invalidate(&mut self) {
        self.resolved = None;
    }

    /// Returns `true` if element bindings are current.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Starts (or restarts) playback at `now`.
    pub fn start(&mut self, now: HostTime) {
        self.started = Some(now);
        self.finished = false;
        self.last_progress = None;
    }

    /// Returns `true` if the timeline has started and not finished.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started.is_some() && !self.finished
    }

    /// Returns `true` once a counted timeline has played its last iteration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Last progress handed to the mapper.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.last_progress
    }

    /// Advances to `now`, appending output to `changes`.
    pub fn tick(&mut self, now: HostTime, changes: &mut FrameChanges) {
        let (Some(started), Some(resolved)) = (self.started, self.resolved.as_ref()) else {
            return;
        };
        if self.finished {
            return;
        }
        let (progress, finished) = self.spec.progress_at(now.saturating_duration_since(started));
        self.finished = finished;
        if self.last_progress == Some(progress) {
            return;
        }
        for (action, state) in resolved.iter().zip(&mut self.states) {
            action.apply(progress, state, changes);
        }
        self.last_progress = Some(progress);
    }
}
