// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host times
//! are printed in milliseconds.

use std::io::Write;

use scrollscene_core::time::HostTime;
use scrollscene_core::trace::{
    FrameSummary, ProgressEvent, SceneDeferredEvent, SceneMeasuredEvent, SceneRegisteredEvent,
    SceneSkippedEvent, TraceSink, ViewportChangedEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    progress: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            progress: false,
        }
    }

    /// Also prints per-scene progress lines. These are off by default since
    /// every scroll frame produces one per moving scene.
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Returns the destination.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.ticks() as f64 / 1000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_scene_registered(&mut self, e: &SceneRegisteredEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[scene] {:?} registered trigger={} class={}",
            e.scene, e.trigger, e.class,
        );
    }

    fn on_scene_skipped(&mut self, e: &SceneSkippedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[scene] SKIPPED trigger={} ({:?}): {}",
            e.trigger,
            e.error.kind(),
            e.error,
        );
    }

    fn on_scene_measured(&mut self, e: &SceneMeasuredEvent) {
        let extended = if e.extended { " extended" } else { "" };
        let _ = writeln!(
            self.writer,
            "[measure] {:?} start={:.1} duration={:.1}{extended}",
            e.scene, e.start, e.duration,
        );
    }

    fn on_scene_deferred(&mut self, e: &SceneDeferredEvent<'_>) {
        let state = if e.gave_up { "STALLED" } else { "retrying" };
        let _ = writeln!(
            self.writer,
            "[defer] {:?} attempt={} {state}: {}",
            e.scene, e.attempt, e.error,
        );
    }

    fn on_viewport_changed(&mut self, e: &ViewportChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[viewport] {} -> {} ({}x{})",
            e.previous, e.current, e.size.width, e.size.height,
        );
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        if !self.progress {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[progress] frame={} {:?} p={:.4} {:?}",
            e.frame_index, e.scene, e.progress, e.direction,
        );
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        let _ = writeln!(
            self.writer,
            "[frame] {} at {:.1}ms scroll={:.1} {:?} coalesced={} scenes={} classes={} styles={}",
            s.frame_index,
            ms(s.now),
            s.scroll_y,
            s.direction,
            s.coalesced,
            s.scenes_updated,
            s.class_changes,
            s.style_changes,
        );
    }
}
