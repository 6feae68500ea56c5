// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the scroll-driven homepage.
//!
//! Registers every homepage section's scenes, lists and looping timelines on
//! an [`AnimationController`] and binds it to the page with a
//! [`PageBinding`]. Sections missing from the page are skipped; broken parts
//! of a section are logged to the browser console and skipped.
//!
//! Build with: `wasm-pack build --target web demos/homepage`
//!
//! Then call the exported `start()` from the page script. Keep the returned
//! handle for as long as the page animates; calling `free()` on it removes
//! the listeners and stops the frame loop.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod sections;

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;

use scrollscene_backend_web::{DomDocument, PageBinding};
use scrollscene_core::controller::AnimationController;
use scrollscene_core::document::Document as _;
use scrollscene_core::trace::Tracer;
use scrollscene_core::viewport::Breakpoints;
use scrollscene_debug::console::ConsoleSink;

/// A running homepage. Dropping it stops every animation.
#[wasm_bindgen]
pub struct Homepage {
    binding: PageBinding,
    scenes: u32,
    lists: u32,
    timelines: u32,
}

impl core::fmt::Debug for Homepage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Homepage")
            .field("binding", &self.binding)
            .field("scenes", &self.scenes)
            .field("lists", &self.lists)
            .field("timelines", &self.timelines)
            .finish()
    }
}

#[wasm_bindgen]
impl Homepage {
    /// Number of scenes that registered successfully.
    #[wasm_bindgen(getter)]
    pub fn scenes(&self) -> u32 {
        self.scenes
    }

    /// Number of tracked lists.
    #[wasm_bindgen(getter)]
    pub fn lists(&self) -> u32 {
        self.lists
    }

    /// Number of looping timelines.
    #[wasm_bindgen(getter)]
    pub fn timelines(&self) -> u32 {
        self.timelines
    }

    /// Stops evaluating frames until [`resume`](Self::resume).
    pub fn pause(&self) {
        self.binding.pause();
    }

    /// Resumes frame evaluation.
    pub fn resume(&self) {
        self.binding.resume();
    }
}

/// Installs the homepage animations.
///
/// Returns `None` on pages without a `.homepage` root.
///
/// # Errors
///
/// Fails if there is no document or the window listeners cannot be
/// registered.
#[wasm_bindgen]
pub fn start() -> Result<Option<Homepage>, JsValue> {
    let mut document =
        DomDocument::from_global().ok_or_else(|| JsValue::from_str("no window document"))?;
    if document.query_all(".homepage").is_empty() {
        return Ok(None);
    }

    let mut controller = AnimationController::new(Breakpoints::default(), &document);
    let mut sink = ConsoleSink::new();
    let installed = sections::install(&mut controller, &mut document, &mut Tracer::new(&mut sink));
    let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);

    let binding = PageBinding::attach(
        Rc::new(RefCell::new(controller)),
        Rc::new(RefCell::new(document)),
        sink,
    )?;
    Ok(Some(Homepage {
        binding,
        scenes: count(installed.scenes.len()),
        lists: count(installed.lists.len()),
        timelines: count(installed.timelines.len()),
    }))
}
