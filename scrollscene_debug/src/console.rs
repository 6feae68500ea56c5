// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console output.
//!
//! [`ConsoleSink`] formats events like [`PrettyPrintSink`] and sends each line
//! to `console.log`. Skipped and stalled scenes go to `console.warn` so
//! configuration mistakes stand out in devtools.

use scrollscene_core::trace::{
    FrameSummary, ProgressEvent, SceneDeferredEvent, SceneMeasuredEvent, SceneRegisteredEvent,
    SceneSkippedEvent, TraceSink, ViewportChangedEvent,
};
use wasm_bindgen::JsValue;

use crate::pretty::PrettyPrintSink;

/// A [`TraceSink`] that writes to the browser console.
#[derive(Debug)]
pub struct ConsoleSink {
    inner: PrettyPrintSink<Vec<u8>>,
    frames: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Creates a sink that logs scene lifecycle events only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: PrettyPrintSink::with_writer(Vec::new()),
            frames: false,
        }
    }

    /// Also logs a summary line per frame.
    #[must_use]
    pub fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }

    fn flush(&mut self, warn: bool) {
        let buf = self.inner.writer_mut();
        let text = String::from_utf8_lossy(buf).into_owned();
        for line in text.lines() {
            let line = JsValue::from_str(line);
            if warn {
                web_sys::console::warn_1(&line);
            } else {
                web_sys::console::log_1(&line);
            }
        }
        buf.clear();
    }
}

impl TraceSink for ConsoleSink {
    fn on_scene_registered(&mut self, e: &SceneRegisteredEvent<'_>) {
        self.inner.on_scene_registered(e);
        self.flush(false);
    }

    fn on_scene_skipped(&mut self, e: &SceneSkippedEvent<'_>) {
        self.inner.on_scene_skipped(e);
        self.flush(true);
    }

    fn on_scene_measured(&mut self, e: &SceneMeasuredEvent) {
        self.inner.on_scene_measured(e);
        self.flush(false);
    }

    fn on_scene_deferred(&mut self, e: &SceneDeferredEvent<'_>) {
        self.inner.on_scene_deferred(e);
        self.flush(e.gave_up);
    }

    fn on_viewport_changed(&mut self, e: &ViewportChangedEvent) {
        self.inner.on_viewport_changed(e);
        self.flush(false);
    }

    fn on_progress(&mut self, e: &ProgressEvent) {
        _ = e;
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        if self.frames {
            self.inner.on_frame_summary(s);
            self.flush(false);
        }
    }
}
