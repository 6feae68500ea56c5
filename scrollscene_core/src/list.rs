// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-item tracking for list-driven sections.
//!
//! A list section has a *marker* (usually a dot travelling along a motion
//! path) and a set of *items*. Whenever the scene driving the marker
//! changes progress, the tracker compares the marker's midpoint with each
//! item's box, padded along the tracked axis, and moves items between
//! [`ItemState::Inactive`] and [`ItemState::Active`].
//!
//! When boxes overlap, the **first** matching item in document order wins.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::changes::{AppliedTranslations, FrameChanges, StyleValue};
use crate::document::{Document, ElementId};
use crate::error::SceneError;
use crate::scene::{SceneId, ScrollDirection};
use crate::viewport::{Responsive, ViewportClass};

/// Handle to a list registered with the
/// [`AnimationController`](crate::controller::AnimationController).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListId(pub(crate) u32);

/// Axis along which the marker travels past the items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListAxis {
    /// Compare the marker's vertical midpoint with item tops and bottoms.
    #[default]
    Vertical,
    /// Compare the marker's horizontal midpoint with item lefts and rights.
    Horizontal,
}

impl ListAxis {
    fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Vertical => (rect.y0, rect.y1),
            Self::Horizontal => (rect.x0, rect.x1),
        }
    }

    fn midpoint(self, rect: Rect) -> f64 {
        let (a, b) = self.span(rect);
        (a + b) * 0.5
    }
}

/// How hits translate into item states.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ListMode {
    /// The first item under the marker is active; all others are inactive.
    #[default]
    Exclusive,
    /// Every item is active regardless of the marker.
    AllActive,
    /// Items under the marker activate while scrolling forward and
    /// deactivate while scrolling back; they keep their state otherwise.
    Latching {
        /// Reverse progress below which every item clears.
        clear_below: f64,
        /// Forward progress above which every item fills.
        fill_above: f64,
    },
}

/// What the tracker does with the marker's opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerVisibility {
    /// Hide the marker while any item is active.
    #[default]
    HiddenWhileActive,
    /// Show the marker while the driving scene has progressed past 0.
    ShownWhileProgressing,
    /// Leave the marker's opacity alone.
    Unmanaged,
}

/// Per-item state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// Not under the marker.
    #[default]
    Inactive,
    /// Under the marker (or latched).
    Active,
}

/// Description of a tracked list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSpec {
    /// Scene whose progress drives the marker.
    pub driver: SceneId,
    /// Selector of the items, in document order.
    pub items: String,
    /// Optional selector of per-item hit boxes, paired with items by index.
    /// Defaults to the items themselves.
    pub hit_boxes: Option<String>,
    /// Selector of the marker.
    pub marker: String,
    /// Class applied to active items.
    pub active_class: String,
    /// Padding added to both ends of every item box along the axis.
    pub padding: f64,
    /// Tracked axis.
    pub axis: ListAxis,
    /// Hit policy per viewport class.
    pub mode: Responsive<ListMode>,
    /// Marker opacity policy.
    pub marker_visibility: MarkerVisibility,
    /// `z-index` given to the marker the first time it hits an item.
    pub marker_z_index_on_hit: Option<i32>,
}

impl ListSpec {
    /// Tracks `items` against `marker`, driven by `driver`.
    #[must_use]
    pub fn new(
        driver: SceneId,
        items: impl Into<String>,
        marker: impl Into<String>,
        active_class: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            items: items.into(),
            hit_boxes: None,
            marker: marker.into(),
            active_class: active_class.into(),
            padding: 0.0,
            axis: ListAxis::Vertical,
            mode: Responsive::all(ListMode::Exclusive),
            marker_visibility: MarkerVisibility::HiddenWhileActive,
            marker_z_index_on_hit: None,
        }
    }

    /// Sets the padding.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the axis.
    #[must_use]
    pub fn axis(mut self, axis: ListAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the mode.
    #[must_use]
    pub fn mode(mut self, mode: impl Into<Responsive<ListMode>>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Uses separate hit boxes.
    #[must_use]
    pub fn hit_boxes(mut self, selector: impl Into<String>) -> Self {
        self.hit_boxes = Some(selector.into());
        self
    }

    /// Sets the marker opacity policy.
    #[must_use]
    pub fn marker_visibility(mut self, visibility: MarkerVisibility) -> Self {
        self.marker_visibility = visibility;
        self
    }

    /// Raises or lowers the marker once it first hits an item.
    #[must_use]
    pub fn marker_z_index_on_hit(mut self, z_index: i32) -> Self {
        self.marker_z_index_on_hit = Some(z_index);
        self
    }

    /// Checks everything that can be checked without layout.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.active_class.trim().is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(SceneError::InvalidAction {
                reason: "class name must be a single non-empty token",
            });
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(SceneError::InvalidAction {
                reason: "list padding must be finite and non-negative",
            });
        }
        for (_, mode) in self.mode.iter() {
            if let ListMode::Latching {
                clear_below,
                fill_above,
            } = mode
                && !(clear_below.is_finite() && fill_above.is_finite())
            {
                return Err(SceneError::InvalidAction {
                    reason: "latching thresholds must be finite",
                });
            }
        }
        Ok(())
    }
}

/// The Inactive/Active state machine of one list.
#[derive(Clone, Debug)]
pub struct ActiveListTracker {
    spec: ListSpec,
    class: ViewportClass,
    items: Vec<ElementId>,
    hit_boxes: Vec<ElementId>,
    marker: ElementId,
    states: Vec<ItemState>,
    marker_opacity: Option<f64>,
    z_index_applied: bool,
}

impl ActiveListTracker {
    /// Resolves the list's selectors.
    ///
    /// # Errors
    ///
    /// [`SceneError::MissingTarget`] if the items, hit boxes or marker match
    /// nothing, and [`SceneError::InvalidAction`] if the hit boxes cannot be
    /// paired with the items.
    pub fn new(spec: ListSpec, class: ViewportClass, doc: &mut dyn Document) -> Result<Self, SceneError> {
        spec.validate()?;
        let missing = |selector: &str| SceneError::MissingTarget {
            selector: selector.into(),
        };
        let items = doc.query_all(&spec.items);
        if items.is_empty() {
            return Err(missing(&spec.items));
        }
        let hit_boxes = match &spec.hit_boxes {
            Some(selector) => {
                let boxes = doc.query_all(selector);
                if boxes.is_empty() {
                    return Err(missing(selector));
                }
                if boxes.len() != items.len() {
                    return Err(SceneError::InvalidAction {
                        reason: "hit boxes do not pair with list items",
                    });
                }
                boxes
            }
            None => items.clone(),
        };
        let marker = doc
            .query_all(&spec.marker)
            .first()
            .copied()
            .ok_or_else(|| missing(&spec.marker))?;
        let states = alloc::vec![ItemState::Inactive; items.len()];
        Ok(Self {
            spec,
            class,
            items,
            hit_boxes,
            marker,
            states,
            marker_opacity: None,
            z_index_applied: false,
        })
    }

    /// Scene driving this list.
    #[must_use]
    pub fn driver(&self) -> SceneId {
        self.spec.driver
    }

    /// Current state of every item, in document order.
    #[must_use]
    pub fn states(&self) -> &[ItemState] {
        &self.states
    }

    /// Index of the first active item.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.states.iter().position(|s| *s == ItemState::Active)
    }

    /// Switches the hit policy to another viewport class.
    pub fn reconfigure(&mut self, class: ViewportClass) {
        self.class = class;
    }

    /// Re-evaluates item states for the driver's new `progress`.
    ///
    /// Geometry is read from `doc`; the marker's position is predicted from
    /// the translations already queued in `changes` for this frame.
    pub fn update(
        &mut self,
        progress: f64,
        direction: ScrollDirection,
        doc: &dyn Document,
        applied: &AppliedTranslations,
        changes: &mut FrameChanges,
    ) {
        let mode = *self.spec.mode.get(self.class);
        let (boxes, marker) = if matches!(mode, ListMode::AllActive) {
            (Vec::new(), None)
        } else {
            let Some(boxes) = self.measure(doc, applied, changes) else {
                return;
            };
            (boxes, self.marker_midpoint(doc, applied, changes))
        };

        let mut next = self.states.clone();
        let mut any_hit = false;
        match mode {
            ListMode::AllActive => next.fill(ItemState::Active),
            ListMode::Exclusive => {
                next.fill(ItemState::Inactive);
                // First match wins.
                if let Some(mid) = marker
                    && let Some(i) = boxes.iter().position(|b| span_contains(*b, mid))
                {
                    next[i] = ItemState::Active;
                    any_hit = true;
                }
            }
            ListMode::Latching {
                clear_below,
                fill_above,
            } => {
                if let Some(mid) = marker {
                    for (state, b) in next.iter_mut().zip(&boxes) {
                        if !span_contains(*b, mid) {
                            continue;
                        }
                        any_hit = true;
                        match direction {
                            ScrollDirection::Forward => *state = ItemState::Active,
                            ScrollDirection::Reverse => *state = ItemState::Inactive,
                            ScrollDirection::Paused => {}
                        }
                    }
                }
                if direction == ScrollDirection::Reverse && progress < clear_below {
                    next.fill(ItemState::Inactive);
                }
                if direction == ScrollDirection::Forward && progress > fill_above {
                    next.fill(ItemState::Active);
                }
            }
        }

        for ((state, &want), &item) in self.states.iter_mut().zip(&next).zip(&self.items) {
            if *state != want {
                changes.set_class(item, &self.spec.active_class, want == ItemState::Active);
                *state = want;
            }
        }

        self.show_marker(progress, changes);

        if any_hit
            && !self.z_index_applied
            && let Some(z) = self.spec.marker_z_index_on_hit
        {
            changes.set_style(self.marker, StyleValue::ZIndex(z));
            self.z_index_applied = true;
        }
    }

    /// Returns every item to [`ItemState::Inactive`], e.g. while the driving
    /// scene is disabled for the current viewport class. The marker gets the
    /// opacity it has with no active item and no progress.
    pub fn clear(&mut self, changes: &mut FrameChanges) {
        for (state, &item) in self.states.iter_mut().zip(&self.items) {
            if *state == ItemState::Active {
                changes.remove_class(item, &self.spec.active_class);
                *state = ItemState::Inactive;
            }
        }
        self.show_marker(0.0, changes);
    }

    fn show_marker(&mut self, progress: f64, changes: &mut FrameChanges) {
        let opacity = match self.spec.marker_visibility {
            MarkerVisibility::HiddenWhileActive => {
                Some(if self.states.contains(&ItemState::Active) { 0.0 } else { 1.0 })
            }
            MarkerVisibility::ShownWhileProgressing => Some(if progress > 0.0 { 1.0 } else { 0.0 }),
            MarkerVisibility::Unmanaged => None,
        };
        if let Some(value) = opacity
            && opacity != self.marker_opacity
        {
            changes.set_style(self.marker, StyleValue::Opacity(value));
            self.marker_opacity = opacity;
        }
    }

    /// Padded hit intervals along the axis, or `None` when the list has no
    /// extent yet (collapsed or detached). Reads each hit box once.
    fn measure(
        &self,
        doc: &dyn Document,
        applied: &AppliedTranslations,
        pending: &FrameChanges,
    ) -> Option<Vec<Option<(f64, f64)>>> {
        let mut has_extent = false;
        let boxes: Vec<Option<(f64, f64)>> = self
            .hit_boxes
            .iter()
            .map(|&el| {
                let measured = doc.bounding_rect(el)?;
                let (a, b) = self.spec.axis.span(measured);
                has_extent |= b > a;
                let rect = applied.predicted_rect(el, measured, pending);
                let (a, b) = self.spec.axis.span(rect);
                Some((a - self.spec.padding, b + self.spec.padding))
            })
            .collect();
        has_extent.then_some(boxes)
    }

    fn marker_midpoint(
        &self,
        doc: &dyn Document,
        applied: &AppliedTranslations,
        pending: &FrameChanges,
    ) -> Option<f64> {
        let measured = doc.bounding_rect(self.marker)?;
        let rect = applied.predicted_rect(self.marker, measured, pending);
        Some(self.spec.axis.midpoint(rect))
    }
}

fn span_contains(span: Option<(f64, f64)>, mid: f64) -> bool {
    span.is_some_and(|(a, b)| mid >= a && mid <= b)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use core::cell::Cell;

    use kurbo::{BezPath, Rect, Vec2};

    use super::*;
    use crate::changes::ClassOp;
    use crate::document::MemoryDocument;
    use crate::viewport::ViewportSize;

    const ACTIVE: &str = "features__list--item-active";

    /// A scene handle for tests; the tracker only stores it.
    fn driver() -> SceneId {
        SceneId { idx: 0, generation: 0 }
    }

    /// Six items 100px tall with 50px gaps, starting at y = 0.
    fn features() -> (MemoryDocument, Vec<ElementId>, ElementId) {
        let mut doc = MemoryDocument::new(ViewportSize::new(1280.0, 800.0));
        let items = (0..6)
            .map(|i| {
                let top = f64::from(i) * 150.0;
                doc.insert(
                    &alloc::format!(".features__item, #f{}", i + 1),
                    Rect::new(0.0, top, 400.0, top + 100.0),
                )
            })
            .collect();
        let dot = doc.insert(".features__dot", Rect::new(500.0, -1000.0, 510.0, -990.0));
        (doc, items, dot)
    }

    /// Counts `bounding_rect` calls.
    struct Counting {
        inner: MemoryDocument,
        reads: Cell<usize>,
    }

    impl Document for Counting {
        fn query_all(&mut self, selector: &str) -> Vec<ElementId> {
            self.inner.query_all(selector)
        }

        fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
            self.reads.set(self.reads.get() + 1);
            self.inner.bounding_rect(element)
        }

        fn path(&self, element: ElementId) -> Option<BezPath> {
            self.inner.path(element)
        }

        fn viewport(&self) -> ViewportSize {
            self.inner.viewport()
        }

        fn scroll_y(&self) -> f64 {
            self.inner.scroll_y()
        }
    }

    fn move_marker(doc: &mut MemoryDocument, dot: ElementId, mid_y: f64) {
        doc.set_rect(dot, Rect::new(500.0, mid_y - 5.0, 510.0, mid_y + 5.0));
    }

    fn tracker(doc: &mut MemoryDocument, spec: ListSpec) -> ActiveListTracker {
        ActiveListTracker::new(spec, ViewportClass::Desktop, doc).unwrap()
    }

    fn step(t: &mut ActiveListTracker, doc: &MemoryDocument, p: f64, dir: ScrollDirection) -> FrameChanges {
        let mut changes = FrameChanges::default();
        t.update(p, dir, doc, &AppliedTranslations::default(), &mut changes);
        changes
    }

    #[test]
    fn exactly_one_item_active_inside_a_box() {
        let (mut doc, items, dot) = features();
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE).padding(16.0));

        move_marker(&mut doc, dot, 310.0);
        let changes = step(&mut t, &doc, 0.3, ScrollDirection::Forward);
        assert_eq!(t.active_index(), Some(2));
        assert_eq!(t.states().iter().filter(|s| **s == ItemState::Active).count(), 1);
        assert_eq!(changes.classes.len(), 1);
        assert_eq!(changes.classes[0].element, items[2]);
        assert_eq!(changes.styles, vec![crate::changes::StyleChange {
            element: dot,
            value: StyleValue::Opacity(0.0)
        }]);

        // Inside the padding below item 2.
        move_marker(&mut doc, dot, 412.0);
        let changes = step(&mut t, &doc, 0.35, ScrollDirection::Forward);
        assert!(changes.is_empty(), "no flicker while the same item stays active");
        assert_eq!(t.active_index(), Some(2));
    }

    #[test]
    fn each_box_is_read_once_per_update() {
        let (mut doc, items, dot) = features();
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE).padding(16.0));
        move_marker(&mut doc, dot, 310.0);
        let doc = Counting {
            inner: doc,
            reads: Cell::new(0),
        };

        let mut changes = FrameChanges::default();
        t.update(0.3, ScrollDirection::Forward, &doc, &AppliedTranslations::default(), &mut changes);
        assert_eq!(t.active_index(), Some(2));
        // Every item plus the marker.
        assert_eq!(doc.reads.get(), items.len() + 1);
    }

    #[test]
    fn clearing_deactivates_items_and_shows_the_marker() {
        let (mut doc, items, dot) = features();
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE).padding(16.0));
        move_marker(&mut doc, dot, 310.0);
        let _ = step(&mut t, &doc, 0.3, ScrollDirection::Forward);

        let mut changes = FrameChanges::default();
        t.clear(&mut changes);
        assert_eq!(t.active_index(), None);
        assert_eq!(changes.classes.len(), 1);
        assert_eq!(changes.classes[0].element, items[2]);
        assert_eq!(changes.classes[0].op, ClassOp::Remove);
        assert_eq!(changes.styles[0].value, StyleValue::Opacity(1.0));

        let mut again = FrameChanges::default();
        t.clear(&mut again);
        assert!(again.is_empty());
    }

    #[test]
    fn no_item_active_between_boxes() {
        let (mut doc, _, dot) = features();
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE).padding(16.0));

        move_marker(&mut doc, dot, 10.0);
        let _ = step(&mut t, &doc, 0.1, ScrollDirection::Forward);
        move_marker(&mut doc, dot, 125.0);
        let changes = step(&mut t, &doc, 0.2, ScrollDirection::Forward);

        assert_eq!(t.active_index(), None);
        assert_eq!(changes.classes[0].op, ClassOp::Remove);
        assert_eq!(changes.styles[0].value, StyleValue::Opacity(1.0));
    }

    #[test]
    fn overlapping_boxes_pick_the_first_match() {
        let (mut doc, _, dot) = features();
        // 30px of padding makes items 0 and 1 overlap between 100 and 130
        // (item 1 starts at 150 - 30 = 120).
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE).padding(30.0));
        move_marker(&mut doc, dot, 125.0);
        let _ = step(&mut t, &doc, 0.2, ScrollDirection::Forward);
        assert_eq!(t.active_index(), Some(0));
        assert_eq!(t.states().iter().filter(|s| **s == ItemState::Active).count(), 1);
    }

    #[test]
    fn all_active_mode_ignores_the_marker() {
        let (mut doc, items, _) = features();
        let spec = ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE)
            .mode(Responsive::all(ListMode::Exclusive).with(ViewportClass::Mobile, ListMode::AllActive));
        let mut t = tracker(&mut doc, spec);
        t.reconfigure(ViewportClass::Mobile);

        let changes = step(&mut t, &doc, 0.0, ScrollDirection::Paused);
        assert_eq!(changes.classes.len(), items.len());
        assert!(t.states().iter().all(|s| *s == ItemState::Active));
    }

    #[test]
    fn latching_mode_fills_and_clears() {
        let mut doc = MemoryDocument::new(ViewportSize::new(1280.0, 800.0));
        for i in 0..3 {
            let left = f64::from(i) * 300.0;
            let _ = doc.insert(".weprovide__item", Rect::new(left, 0.0, left + 250.0, 200.0));
            let _ = doc.insert(".weprovide__icon", Rect::new(left, 0.0, left + 50.0, 50.0));
        }
        let dot = doc.insert(".weprovide__dot", Rect::new(-100.0, 0.0, -90.0, 10.0));
        let spec = ListSpec::new(driver(), ".weprovide__item", ".weprovide__dot", "weprovide__item--active")
            .hit_boxes(".weprovide__icon")
            .axis(ListAxis::Horizontal)
            .mode(ListMode::Latching {
                clear_below: 0.224,
                fill_above: 0.8,
            })
            .marker_visibility(MarkerVisibility::ShownWhileProgressing)
            .marker_z_index_on_hit(-1);
        let mut t = ActiveListTracker::new(spec, ViewportClass::Desktop, &mut doc).unwrap();
        let at = |doc: &mut MemoryDocument, x: f64| doc.set_rect(dot, Rect::new(x - 5.0, 0.0, x + 5.0, 10.0));

        at(&mut doc, 25.0);
        let changes = step(&mut t, &doc, 0.1, ScrollDirection::Forward);
        assert_eq!(t.states()[0], ItemState::Active);
        assert!(changes.styles.contains(&crate::changes::StyleChange {
            element: dot,
            value: StyleValue::ZIndex(-1)
        }));

        // Leaving the icon keeps the latch.
        at(&mut doc, 150.0);
        let _ = step(&mut t, &doc, 0.2, ScrollDirection::Forward);
        assert_eq!(t.states()[0], ItemState::Active);

        at(&mut doc, 325.0);
        let _ = step(&mut t, &doc, 0.5, ScrollDirection::Forward);
        assert_eq!(t.states()[..2], [ItemState::Active, ItemState::Active]);

        let _ = step(&mut t, &doc, 0.85, ScrollDirection::Forward);
        assert!(t.states().iter().all(|s| *s == ItemState::Active));

        // Reversing over an icon clears that item only.
        let _ = step(&mut t, &doc, 0.5, ScrollDirection::Reverse);
        assert_eq!(t.states(), [ItemState::Active, ItemState::Inactive, ItemState::Active]);

        at(&mut doc, 150.0);
        let changes = step(&mut t, &doc, 0.1, ScrollDirection::Reverse);
        assert!(t.states().iter().all(|s| *s == ItemState::Inactive));
        assert_eq!(changes.classes.len(), 2);
    }

    #[test]
    fn collapsed_lists_are_inert() {
        let mut doc = MemoryDocument::new(ViewportSize::new(1280.0, 800.0));
        let _ = doc.insert(".item", Rect::new(0.0, 100.0, 400.0, 100.0));
        let _ = doc.insert(".dot", Rect::new(0.0, 95.0, 10.0, 105.0));
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".item", ".dot", ACTIVE).padding(16.0));
        let changes = step(&mut t, &doc, 0.5, ScrollDirection::Forward);
        assert!(changes.is_empty());
    }

    #[test]
    fn missing_selectors_are_configuration_errors() {
        let (mut doc, _, _) = features();
        let err = ActiveListTracker::new(
            ListSpec::new(driver(), ".features__item", ".nope", ACTIVE),
            ViewportClass::Desktop,
            &mut doc,
        )
        .unwrap_err();
        assert_eq!(err, SceneError::MissingTarget { selector: ".nope".into() });

        let err = ActiveListTracker::new(
            ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE).hit_boxes(".features__dot"),
            ViewportClass::Desktop,
            &mut doc,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::InvalidAction { .. }));
    }

    #[test]
    fn queued_marker_motion_is_taken_into_account() {
        let (mut doc, _, dot) = features();
        let mut t = tracker(&mut doc, ListSpec::new(driver(), ".features__item", ".features__dot", ACTIVE));
        move_marker(&mut doc, dot, 0.0);

        let mut changes = FrameChanges::default();
        changes.set_style(
            dot,
            StyleValue::Transform {
                translate: Vec2::new(0.0, 470.0),
                rotate: 0.0,
            },
        );
        t.update(0.5, ScrollDirection::Forward, &doc, &AppliedTranslations::default(), &mut changes);
        assert_eq!(t.active_index(), Some(3));
    }
}
