// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live DOM geometry.

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use scrollscene_core::document::{Document, ElementId};
use scrollscene_core::viewport::ViewportSize;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, Window};

/// A [`Document`] backed by the browser's DOM.
///
/// Elements are interned on first lookup: every element returned by
/// [`query_all`](Document::query_all) gets a stable [`ElementId`] for the
/// lifetime of this value. It is also the
/// [`Presenter`](scrollscene_core::backend::Presenter) for those elements.
pub struct DomDocument {
    window: Window,
    document: web_sys::Document,
    elements: Vec<Element>,
}

impl DomDocument {
    /// Wraps the window's document.
    ///
    /// Returns `None` if the window has no document.
    #[must_use]
    pub fn new(window: Window) -> Option<Self> {
        let document = window.document()?;
        Some(Self {
            window,
            document,
            elements: Vec::new(),
        })
    }

    /// Wraps the global window's document.
    #[must_use]
    pub fn from_global() -> Option<Self> {
        Self::new(web_sys::window()?)
    }

    /// The wrapped window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The DOM element behind a handle.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    /// Forgets every interned element, e.g. after teardown.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn intern(&mut self, element: Element) -> ElementId {
        let idx = match self.elements.iter().position(|e| *e == element) {
            Some(idx) => idx,
            None => {
                self.elements.push(element);
                self.elements.len() - 1
            }
        };
        ElementId(u32::try_from(idx).unwrap_or(u32::MAX))
    }
}

impl Document for DomDocument {
    fn query_all(&mut self, selector: &str) -> Vec<ElementId> {
        // An invalid selector throws; treat it as matching nothing.
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.intern(element))
            .collect()
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        let element = self.element(element)?;
        if !element.is_connected() {
            return None;
        }
        let r = element.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.right(), r.bottom()))
    }

    fn path(&self, element: ElementId) -> Option<BezPath> {
        let d = self.element(element)?.get_attribute("d")?;
        BezPath::from_svg(&d).ok()
    }

    fn viewport(&self) -> ViewportSize {
        let dimension =
            |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        ViewportSize::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

impl core::fmt::Debug for DomDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomDocument")
            .field("elements_len", &self.elements.len())
            .finish_non_exhaustive()
    }
}
