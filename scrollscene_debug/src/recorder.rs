// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps an owned copy of every
//! event it receives, in order. Borrowed fields (selectors, errors) are
//! cloned so the recording outlives the frame that produced it.

use scrollscene_core::error::SceneError;
use scrollscene_core::scene::SceneId;
use scrollscene_core::trace::{
    FrameSummary, ProgressEvent, SceneDeferredEvent, SceneMeasuredEvent, SceneRegisteredEvent,
    SceneSkippedEvent, TraceSink, ViewportChangedEvent,
};
use scrollscene_core::viewport::ViewportClass;

/// A recorded trace event.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`SceneRegisteredEvent`].
    SceneRegistered {
        /// The new scene.
        scene: SceneId,
        /// Trigger selector.
        trigger: String,
        /// Viewport class at registration.
        class: ViewportClass,
    },
    /// A [`SceneSkippedEvent`].
    SceneSkipped {
        /// The scene, if it had already been registered.
        scene: Option<SceneId>,
        /// Trigger selector.
        trigger: String,
        /// Why it was skipped.
        error: SceneError,
    },
    /// A [`SceneMeasuredEvent`].
    SceneMeasured(SceneMeasuredEvent),
    /// A [`SceneDeferredEvent`].
    SceneDeferred {
        /// Which scene.
        scene: SceneId,
        /// Failed attempts so far.
        attempt: u32,
        /// Whether the scene gave up.
        gave_up: bool,
        /// The transient error.
        error: SceneError,
    },
    /// A [`ViewportChangedEvent`].
    ViewportChanged(ViewportChangedEvent),
    /// A [`ProgressEvent`].
    Progress(ProgressEvent),
    /// A [`FrameSummary`].
    FrameSummary(FrameSummary),
}

/// A [`TraceSink`] that records every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of frame summaries recorded.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::FrameSummary(_)))
            .count()
    }

    /// Every error carried by a skipped or deferred scene, oldest first.
    pub fn errors(&self) -> impl Iterator<Item = &SceneError> + '_ {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::SceneSkipped { error, .. }
            | RecordedEvent::SceneDeferred { error, .. } => Some(error),
            _ => None,
        })
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_scene_registered(&mut self, e: &SceneRegisteredEvent<'_>) {
        self.events.push(RecordedEvent::SceneRegistered {
            scene: e.scene,
            trigger: e.trigger.to_owned(),
            class: e.class,
        });
    }

    fn on_scene_skipped(&mut self, e: &SceneSkippedEvent<'_>) {
        self.events.push(RecordedEvent::SceneSkipped {
            scene: e.scene,
            trigger: e.trigger.to_owned(),
            error: e.error.clone(),
        });
    }

    fn on_scene_measured(&mut self, e: &SceneMeasuredEvent) {
        self.events.push(RecordedEvent::SceneMeasured(*e));
    }

    fn on_scene_deferred(&mut self, e: &SceneDeferredEvent<'_>) {
        self.events.push(RecordedEvent::SceneDeferred {
            scene: e.scene,
            attempt: e.attempt,
            gave_up: e.gave_up,
            error: e.error.clone(),
        });
    }

    fn on_viewport_changed(&mut self, e: &ViewportChangedEvent) {
        self.events.push(RecordedEvent::ViewportChanged(*e));
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        self.events.push(RecordedEvent::Progress(*e));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.events.push(RecordedEvent::FrameSummary(*s));
    }
}
