// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! registry and controller call as scenes are registered, measured and
//! evaluated. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Configuration errors are reported here and nowhere else: a scene that
//! fails to register produces a [`SceneSkippedEvent`] and the page carries on.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates per-scene [`ProgressEvent`]s and
//!   the corresponding `TraceSink` method.

use crate::error::SceneError;
use crate::scene::{ScrollDirection, SceneId};
use crate::time::HostTime;
use crate::viewport::{ViewportClass, ViewportSize};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a scene is accepted by the registry.
#[derive(Clone, Copy, Debug)]
pub struct SceneRegisteredEvent<'a> {
    /// The new scene.
    pub scene: SceneId,
    /// Trigger selector.
    pub trigger: &'a str,
    /// Viewport class at registration.
    pub class: ViewportClass,
}

/// Emitted when a scene is skipped because of a configuration error.
#[derive(Clone, Copy, Debug)]
pub struct SceneSkippedEvent<'a> {
    /// The scene, if it had already been registered.
    pub scene: Option<SceneId>,
    /// Trigger selector.
    pub trigger: &'a str,
    /// Why it was skipped.
    pub error: &'a SceneError,
}

/// Emitted after a scene's activation window is (re)computed.
#[derive(Clone, Copy, Debug)]
pub struct SceneMeasuredEvent {
    /// Which scene.
    pub scene: SceneId,
    /// Scroll offset at which progress is 0.
    pub start: f64,
    /// Scroll distance to progress 1.
    pub duration: f64,
    /// Whether the duration extension is in effect.
    pub extended: bool,
}

/// Emitted when measuring or resolving hit a transient error.
#[derive(Clone, Copy, Debug)]
pub struct SceneDeferredEvent<'a> {
    /// Which scene.
    pub scene: SceneId,
    /// Failed attempts so far.
    pub attempt: u32,
    /// Whether the scene gave up and went inert.
    pub gave_up: bool,
    /// The transient error.
    pub error: &'a SceneError,
}

/// Emitted when a resize moves the page into another viewport class.
#[derive(Clone, Copy, Debug)]
pub struct ViewportChangedEvent {
    /// Class before the resize.
    pub previous: ViewportClass,
    /// Class after the resize.
    pub current: ViewportClass,
    /// New window size.
    pub size: ViewportSize,
}

/// A per-scene progress change.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct ProgressEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// Which scene.
    pub scene: SceneId,
    /// New progress.
    pub progress: f64,
    /// Scroll direction of the frame.
    pub direction: ScrollDirection,
}

/// Per-frame summary.
#[derive(Clone, Copy, Debug)]
pub struct FrameSummary {
    /// Frame counter.
    pub frame_index: u64,
    /// Host time of the frame.
    pub now: HostTime,
    /// Scroll offset read this frame.
    pub scroll_y: f64,
    /// Scroll direction relative to the previous evaluated frame.
    pub direction: ScrollDirection,
    /// Scroll/resize events folded into this frame beyond the first.
    pub coalesced: u32,
    /// Scenes whose progress changed.
    pub scenes_updated: u32,
    /// Class mutations produced.
    pub class_changes: u32,
    /// Style assignments produced.
    pub style_changes: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the registry and controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a scene is registered.
    fn on_scene_registered(&mut self, e: &SceneRegisteredEvent<'_>) {
        _ = e;
    }

    /// Called when a scene is skipped.
    fn on_scene_skipped(&mut self, e: &SceneSkippedEvent<'_>) {
        _ = e;
    }

    /// Called when a scene is measured.
    fn on_scene_measured(&mut self, e: &SceneMeasuredEvent) {
        _ = e;
    }

    /// Called when a scene is deferred.
    fn on_scene_deferred(&mut self, e: &SceneDeferredEvent<'_>) {
        _ = e;
    }

    /// Called when the viewport class changes.
    fn on_viewport_changed(&mut self, e: &ViewportChangedEvent) {
        _ = e;
    }

    /// Called with per-scene progress (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_progress(&mut self, e: &ProgressEvent) {
        _ = e;
    }

    /// Called once per evaluated frame.
    fn on_frame_summary(&mut self, s: &FrameSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SceneRegisteredEvent`].
    #[inline]
    pub fn scene_registered(&mut self, e: &SceneRegisteredEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scene_registered(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SceneSkippedEvent`].
    #[inline]
    pub fn scene_skipped(&mut self, e: &SceneSkippedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scene_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SceneMeasuredEvent`].
    #[inline]
    pub fn scene_measured(&mut self, e: &SceneMeasuredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scene_measured(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SceneDeferredEvent`].
    #[inline]
    pub fn scene_deferred(&mut self, e: &SceneDeferredEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scene_deferred(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ViewportChangedEvent`].
    #[inline]
    pub fn viewport_changed(&mut self, e: &ViewportChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_viewport_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ProgressEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn progress(&mut self, e: &ProgressEvent) {
        if let Some(s) = &mut self.sink {
            s.on_progress(e);
        }
    }

    /// Emits a [`FrameSummary`].
    #[inline]
    pub fn frame_summary(&mut self, s: &FrameSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_frame_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
