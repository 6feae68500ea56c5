// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to page geometry.
//!
//! The engine never touches a browser directly. It resolves selectors and
//! reads geometry through the [`Document`] trait, and writes its output
//! through [`Presenter`]. The web backend implements both on top of
//! `web-sys`; [`MemoryDocument`] implements both in memory for tests and
//! server-side dry runs.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Rect, Vec2};

use crate::backend::Presenter;
use crate::changes::{ClassOp, FrameChanges, StyleValue};
use crate::viewport::ViewportSize;

/// An opaque handle to an element resolved by a [`Document`].
///
/// Handles are assigned by the document and stay valid for its lifetime.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// Geometry source for scene measurement.
pub trait Document {
    /// Resolves a CSS selector to every matching element, in document order
    /// (`querySelectorAll`).
    fn query_all(&mut self, selector: &str) -> Vec<ElementId>;

    /// Returns the element's border box relative to the viewport
    /// (`getBoundingClientRect`), or `None` if it is no longer attached.
    fn bounding_rect(&self, element: ElementId) -> Option<Rect>;

    /// Returns the outline of an SVG geometry element, in its own user
    /// space, or `None` if the element carries no path data.
    fn path(&self, element: ElementId) -> Option<BezPath>;

    /// Returns the window's inner size.
    fn viewport(&self) -> ViewportSize;

    /// Returns the vertical scroll offset of the window (`scrollY`).
    fn scroll_y(&self) -> f64;

    /// Returns the element's border box in document coordinates.
    fn document_rect(&self, element: ElementId) -> Option<Rect> {
        self.bounding_rect(element)
            .map(|r| r + Vec2::new(0.0, self.scroll_y()))
    }
}

#[derive(Clone, Debug)]
struct MemoryElement {
    selectors: Vec<String>,
    rect: Option<Rect>,
    path: Option<BezPath>,
    translate: Vec2,
    classes: Vec<String>,
    styles: Vec<StyleValue>,
}

/// An in-memory [`Document`].
///
/// Elements are registered with the selectors they should match and a
/// rectangle in *document* coordinates; [`bounding_rect`](Document::bounding_rect)
/// reports it relative to the current scroll offset, as a browser would.
///
/// Selector matching is exact per comma-separated part: an element inserted
/// as `".card, #f1"` matches queries for `.card` and `#f1`.
///
/// As a [`Presenter`] it keeps the class list and inline styles of every
/// element, and moves elements by their `transform` translation the way a
/// browser's `getBoundingClientRect` would.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
    viewport: ViewportSize,
    scroll_y: f64,
}

impl MemoryDocument {
    /// Creates an empty document with the given viewport.
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            elements: Vec::new(),
            viewport,
            scroll_y: 0.0,
        }
    }

    /// Adds an element laid out at `rect` (document coordinates).
    pub fn insert(&mut self, selectors: &str, rect: Rect) -> ElementId {
        let id = ElementId(u32::try_from(self.elements.len()).unwrap_or(u32::MAX));
        self.elements.push(MemoryElement {
            selectors: split_selectors(selectors).map(String::from).collect(),
            rect: Some(rect),
            path: None,
            translate: Vec2::ZERO,
            classes: Vec::new(),
            styles: Vec::new(),
        });
        id
    }

    /// Adds an SVG path element.
    pub fn insert_path(&mut self, selectors: &str, rect: Rect, path: BezPath) -> ElementId {
        let id = self.insert(selectors, rect);
        self.elements[id.0 as usize].path = Some(path);
        id
    }

    /// Moves an element.
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(el) = self.elements.get_mut(element.0 as usize) {
            el.rect = Some(rect);
        }
    }

    /// Detaches an element; it keeps matching selectors but has no geometry.
    pub fn detach(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(element.0 as usize) {
            el.rect = None;
        }
    }

    /// Scrolls the window.
    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Resizes the window.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    /// Returns `true` if a presented frame left `class` on the element.
    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(element.0 as usize)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    /// Returns the inline value of a CSS property, e.g. `"opacity"`.
    #[must_use]
    pub fn style(&self, element: ElementId, property: &str) -> Option<StyleValue> {
        let el = self.elements.get(element.0 as usize)?;
        el.styles
            .iter()
            .find(|v| v.property_name() == property)
            .copied()
    }
}

impl Presenter for MemoryDocument {
    fn apply(&mut self, changes: &FrameChanges) {
        for change in &changes.classes {
            let Some(el) = self.elements.get_mut(change.element.0 as usize) else {
                continue;
            };
            let present = el.classes.iter().any(|c| *c == change.class);
            match change.op {
                ClassOp::Add if !present => el.classes.push(change.class.clone()),
                ClassOp::Remove => el.classes.retain(|c| *c != change.class),
                ClassOp::Add => {}
            }
        }
        for change in &changes.styles {
            let Some(el) = self.elements.get_mut(change.element.0 as usize) else {
                continue;
            };
            let name = change.value.property_name();
            el.styles.retain(|v| v.property_name() != name);
            el.styles.push(change.value);
            if let StyleValue::Transform { translate, .. } = change.value {
                el.translate = translate;
            }
        }
    }
}

impl Document for MemoryDocument {
    fn query_all(&mut self, selector: &str) -> Vec<ElementId> {
        let wanted: Vec<&str> = split_selectors(selector).collect();
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| {
                el.selectors
                    .iter()
                    .any(|s| wanted.iter().any(|w| *w == s.as_str()))
            })
            .filter_map(|(i, _)| u32::try_from(i).ok().map(ElementId))
            .collect()
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        let el = self.elements.get(element.0 as usize)?;
        let rect = el.rect?;
        Some(rect + el.translate - Vec2::new(0.0, self.scroll_y))
    }

    fn path(&self, element: ElementId) -> Option<BezPath> {
        self.elements.get(element.0 as usize)?.path.clone()
    }

    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

fn split_selectors(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
