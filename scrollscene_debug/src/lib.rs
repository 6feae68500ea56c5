// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for scrollscene
//! diagnostics.
//!
//! This crate provides [`TraceSink`](scrollscene_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: one human-readable line per event.
//! - [`console::ConsoleSink`]: the same lines, sent to the browser console.
//! - [`recorder::RecorderSink`]: owned copies of every event for later
//!   inspection.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from a
//!   recording.

pub mod chrome;
pub mod console;
pub mod pretty;
pub mod recorder;
