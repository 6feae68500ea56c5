// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads events recorded by a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Only frame summaries carry a host time. Every other event is stamped with
/// the time of the most recent summary before it, or 0 before the first.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::with_capacity(events.len());
    let mut ts: u64 = 0;

    for recorded in events {
        match recorded {
            RecordedEvent::SceneRegistered {
                scene,
                trigger,
                class,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": "SceneRegistered",
                    "cat": "Registry",
                    "ts": ts,
                    "pid": 0,
                    "tid": scene.index(),
                    "s": "t",
                    "args": {
                        "trigger": trigger,
                        "class": class.as_str(),
                    }
                }));
            }
            RecordedEvent::SceneSkipped { trigger, error, .. } => {
                out.push(json!({
                    "ph": "i",
                    "name": "SceneSkipped",
                    "cat": "Registry",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "trigger": trigger,
                        "error": error.to_string(),
                    }
                }));
            }
            RecordedEvent::SceneMeasured(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "SceneMeasured",
                    "cat": "Registry",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.scene.index(),
                    "s": "t",
                    "args": {
                        "start": e.start,
                        "duration": e.duration,
                        "extended": e.extended,
                    }
                }));
            }
            RecordedEvent::SceneDeferred {
                scene,
                attempt,
                gave_up,
                error,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": "SceneDeferred",
                    "cat": "Registry",
                    "ts": ts,
                    "pid": 0,
                    "tid": scene.index(),
                    "s": "t",
                    "args": {
                        "attempt": attempt,
                        "gave_up": gave_up,
                        "error": error.to_string(),
                    }
                }));
            }
            RecordedEvent::ViewportChanged(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "ViewportChanged",
                    "cat": "Viewport",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "previous": e.previous.as_str(),
                        "current": e.current.as_str(),
                        "width": e.size.width,
                        "height": e.size.height,
                    }
                }));
            }
            RecordedEvent::Progress(e) => {
                out.push(json!({
                    "ph": "C",
                    "name": format!("progress {:?}", e.scene),
                    "cat": "Rich",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.scene.index(),
                    "args": {
                        "progress": e.progress,
                    }
                }));
            }
            RecordedEvent::FrameSummary(s) => {
                ts = s.now.ticks();
                out.push(json!({
                    "ph": "i",
                    "name": "FrameSummary",
                    "cat": "Summary",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": s.frame_index,
                        "scroll_y": s.scroll_y,
                        "direction": format!("{:?}", s.direction),
                        "coalesced": s.coalesced,
                        "scenes_updated": s.scenes_updated,
                        "class_changes": s.class_changes,
                        "style_changes": s.style_changes,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use scrollscene_core::error::SceneError;
    use scrollscene_core::scene::ScrollDirection;
    use scrollscene_core::time::HostTime;
    use scrollscene_core::trace::{FrameSummary, SceneSkippedEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_frame_summary(&FrameSummary {
            frame_index: 3,
            now: HostTime(50_000),
            scroll_y: 812.0,
            direction: ScrollDirection::Forward,
            coalesced: 0,
            scenes_updated: 2,
            class_changes: 1,
            style_changes: 2,
        });
        let error = SceneError::InvalidTriggerHook { hook: 1.5 };
        rec.on_scene_skipped(&SceneSkippedEvent {
            scene: None,
            trigger: ".support",
            error: &error,
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["name"], "FrameSummary");
        assert_eq!(parsed[0]["ts"], 50_000);
        assert_eq!(parsed[0]["args"]["direction"], "Forward");

        // Untimed events inherit the previous frame's time.
        assert_eq!(parsed[1]["name"], "SceneSkipped");
        assert_eq!(parsed[1]["ts"], 50_000);
        assert_eq!(parsed[1]["args"]["trigger"], ".support");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
