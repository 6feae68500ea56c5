// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-page animation controller.
//!
//! [`AnimationController`] owns everything that animates on a page: the
//! [viewport classifier](crate::viewport), the [scene registry](crate::scene),
//! [list trackers](crate::list) and [looping timelines](crate::timeline). It
//! is built once when the page loads and [torn down](AnimationController::teardown)
//! on navigation.
//!
//! Backends forward events to [`on_scroll`](AnimationController::on_scroll)
//! and [`on_resize`](AnimationController::on_resize), and call
//! [`frame`](AnimationController::frame) once per animation frame. A frame
//! runs these steps in order:
//!
//! 1. On resize: classify the viewport and either reconfigure every scene
//!    for a new class or re-measure them.
//! 2. Evaluate scenes ([`SceneRegistry::evaluate`]).
//! 3. Update lists whose driving scene changed progress.
//! 4. Advance running timelines.
//!
//! A frame with no pending events, no deferred scenes and no running
//! timeline returns `None` without reading layout.

use alloc::string::String;
use alloc::vec::Vec;

use crate::changes::{AppliedTranslations, FrameChanges};
use crate::document::Document;
use crate::error::SceneError;
use crate::frame::{FrameGate, FrameTick};
use crate::list::{ActiveListTracker, ListId, ListSpec};
use crate::scene::{
    FrameContext, SceneId, SceneRegistry, SceneSpec, SceneState, ScrollDirection,
};
use crate::time::HostTime;
use crate::timeline::{LoopingTimeline, TimelineId, TimelineSpec};
use crate::trace::{
    FrameSummary, SceneRegisteredEvent, SceneSkippedEvent, Tracer, ViewportChangedEvent,
};
use crate::viewport::{Breakpoints, ViewportClass, ViewportClassifier};

/// Drives every scroll scene, list and timeline of one page.
#[derive(Debug)]
pub struct AnimationController {
    classifier: ViewportClassifier,
    registry: SceneRegistry,
    lists: Vec<Option<ActiveListTracker>>,
    timelines: Vec<Option<LoopingTimeline>>,
    gate: FrameGate,
    applied: AppliedTranslations,
    changes: FrameChanges,
    last_scroll_y: f64,
    refresh: bool,
}

impl AnimationController {
    /// Classifies the page's current viewport and starts with no scenes.
    #[must_use]
    pub fn new(breakpoints: Breakpoints, doc: &dyn Document) -> Self {
        Self {
            classifier: ViewportClassifier::new(breakpoints, doc.viewport()),
            registry: SceneRegistry::new(),
            lists: Vec::new(),
            timelines: Vec::new(),
            gate: FrameGate::new(),
            applied: AppliedTranslations::default(),
            changes: FrameChanges::default(),
            last_scroll_y: doc.scroll_y(),
            refresh: false,
        }
    }

    /// Current viewport class.
    #[must_use]
    pub fn class(&self) -> ViewportClass {
        self.classifier.class()
    }

    /// The viewport classifier.
    #[must_use]
    pub fn classifier(&self) -> &ViewportClassifier {
        &self.classifier
    }

    /// The scene registry.
    #[must_use]
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// A registered list.
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&ActiveListTracker> {
        self.lists.get(id.0 as usize)?.as_ref()
    }

    /// A registered timeline.
    #[must_use]
    pub fn timeline(&self, id: TimelineId) -> Option<&LoopingTimeline> {
        self.timelines.get(id.0 as usize)?.as_ref()
    }

    /// Registers a scene for the current viewport class.
    ///
    /// A configuration error is reported through `tracer` and the scene is
    /// skipped; the rest of the page keeps animating.
    pub fn register_scene(
        &mut self,
        spec: SceneSpec,
        doc: &mut dyn Document,
        tracer: &mut Tracer<'_>,
    ) -> Option<SceneId> {
        let class = self.classifier.class();
        let trigger = spec.trigger.clone();
        match self.registry.register(spec, class, doc, &self.applied) {
            Ok(scene) => {
                tracer.scene_registered(&SceneRegisteredEvent {
                    scene,
                    trigger: &trigger,
                    class,
                });
                // Pages can load scrolled; the first frame evaluates anyway.
                self.refresh = true;
                Some(scene)
            }
            Err(error) => {
                tracer.scene_skipped(&SceneSkippedEvent {
                    scene: None,
                    trigger: &trigger,
                    error: &error,
                });
                None
            }
        }
    }

    /// Registers a list driven by one of this controller's scenes.
    ///
    /// Configuration errors are reported through `tracer`.
    pub fn register_list(
        &mut self,
        spec: ListSpec,
        doc: &mut dyn Document,
        tracer: &mut Tracer<'_>,
    ) -> Option<ListId> {
        let items = spec.items.clone();
        let driver = spec.driver;
        let tracker = if self.registry.is_alive(driver) {
            ActiveListTracker::new(spec, self.classifier.class(), doc)
        } else {
            Err(SceneError::InvalidAction {
                reason: "list driver is not a live scene",
            })
        };
        match tracker {
            Ok(tracker) => {
                let id = ListId(u32::try_from(self.lists.len()).unwrap_or(u32::MAX));
                self.lists.push(Some(tracker));
                self.refresh = true;
                Some(id)
            }
            Err(error) => {
                tracer.scene_skipped(&SceneSkippedEvent {
                    scene: Some(driver),
                    trigger: &items,
                    error: &error,
                });
                None
            }
        }
    }

    /// Adds a looping timeline. It starts on the next frame.
    ///
    /// Targets are resolved immediately; layout that is not ready yet is
    /// retried on later frames. Configuration errors are reported through
    /// `tracer`.
    pub fn add_timeline(
        &mut self,
        spec: TimelineSpec,
        doc: &mut dyn Document,
        tracer: &mut Tracer<'_>,
    ) -> Option<TimelineId> {
        let target = spec
            .actions
            .first()
            .map(|a| String::from(a.target()))
            .unwrap_or_default();
        let timeline = LoopingTimeline::new(spec).and_then(|mut t| {
            if let Err(e) = t.resolve(doc, &self.applied)
                && !e.is_transient()
            {
                return Err(e);
            }
            Ok(t)
        });
        match timeline {
            Ok(timeline) => {
                let id = TimelineId(u32::try_from(self.timelines.len()).unwrap_or(u32::MAX));
                self.timelines.push(Some(timeline));
                Some(id)
            }
            Err(error) => {
                tracer.scene_skipped(&SceneSkippedEvent {
                    scene: None,
                    trigger: &target,
                    error: &error,
                });
                None
            }
        }
    }

    /// Removes a scene and every list it drives. Output already presented
    /// stays in place.
    ///
    /// Returns `false` for stale handles.
    pub fn remove_scene(&mut self, id: SceneId) -> bool {
        if !self.registry.remove(id) {
            return false;
        }
        for slot in &mut self.lists {
            if slot.as_ref().is_some_and(|t| t.driver() == id) {
                *slot = None;
            }
        }
        true
    }

    /// Removes a list.
    pub fn remove_list(&mut self, id: ListId) -> bool {
        self.lists
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .is_some()
    }

    /// Stops and removes a timeline.
    pub fn remove_timeline(&mut self, id: TimelineId) -> bool {
        self.timelines
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .is_some()
    }

    /// Drops every scene, list and timeline.
    pub fn teardown(&mut self) {
        self.registry.clear();
        self.lists.clear();
        self.timelines.clear();
        self.applied.clear();
        self.changes.clear();
        let _ = self.gate.take();
        self.refresh = false;
    }

    /// Records a scroll event. Never reads layout.
    pub fn on_scroll(&mut self) {
        self.gate.scroll();
    }

    /// Records a resize event. Never reads layout.
    pub fn on_resize(&mut self) {
        self.gate.resize();
    }

    /// Returns `true` if the next [`frame`](Self::frame) has work to do.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.refresh
            || !self.gate.pending().is_empty()
            || self.registry.has_pending()
            || self.timelines.iter().flatten().any(|t| !t.is_finished())
    }

    /// Runs one animation frame.
    ///
    /// Returns the changes to present, or `None` if nothing was evaluated.
    /// The caller must present the returned changes before the next frame:
    /// later geometry reads assume they have been applied.
    pub fn frame(
        &mut self,
        tick: FrameTick,
        doc: &mut dyn Document,
        tracer: &mut Tracer<'_>,
    ) -> Option<&FrameChanges> {
        if !self.has_pending_work() {
            return None;
        }
        let coalesced = self.gate.coalesced();
        let work = self.gate.take();
        let force_lists = work.resize || core::mem::take(&mut self.refresh);
        self.changes.clear();

        if work.resize {
            self.observe_resize(doc, tracer);
        }

        let scroll_y = doc.scroll_y();
        let direction = ScrollDirection::from_offsets(self.last_scroll_y, scroll_y);
        self.last_scroll_y = scroll_y;
        let ctx = FrameContext {
            frame_index: tick.frame_index,
            direction,
        };
        self.registry
            .evaluate(ctx, doc, &self.applied, &mut self.changes, tracer);
        self.update_lists(direction, force_lists, doc);
        self.tick_timelines(tick.now, doc, tracer);
        self.applied.record(&self.changes);

        tracer.frame_summary(&FrameSummary {
            frame_index: tick.frame_index,
            now: tick.now,
            scroll_y,
            direction,
            coalesced,
            scenes_updated: count(self.registry.updates().len()),
            class_changes: count(self.changes.classes.len()),
            style_changes: count(self.changes.styles.len()),
        });
        Some(&self.changes)
    }

    fn observe_resize(&mut self, doc: &mut dyn Document, tracer: &mut Tracer<'_>) {
        let size = doc.viewport();
        match self.classifier.observe(size) {
            Some(previous) => {
                let current = self.classifier.class();
                tracer.viewport_changed(&ViewportChangedEvent {
                    previous,
                    current,
                    size,
                });
                self.registry.reconfigure(current, &mut self.changes);
                for tracker in self.lists.iter_mut().flatten() {
                    tracker.reconfigure(current);
                }
            }
            None => self.registry.mark_all_for_measure(),
        }
        // Motion paths move with layout.
        for timeline in self.timelines.iter_mut().flatten() {
            timeline.invalidate();
        }
    }

    fn update_lists(&mut self, direction: ScrollDirection, force: bool, doc: &dyn Document) {
        let updates = self.registry.updates();
        for tracker in self.lists.iter_mut().flatten() {
            let driver = tracker.driver();
            if !force && !updates.iter().any(|u| u.scene == driver) {
                continue;
            }
            let Some(progress) = self.registry.progress(driver) else {
                // Disabled, stalled or skipped drivers leave no item active.
                if self
                    .registry
                    .state(driver)
                    .is_some_and(|s| s != SceneState::Pending)
                {
                    tracker.clear(&mut self.changes);
                }
                continue;
            };
            tracker.update(progress, direction, doc, &self.applied, &mut self.changes);
        }
    }

    fn tick_timelines(&mut self, now: HostTime, doc: &mut dyn Document, tracer: &mut Tracer<'_>) {
        for slot in &mut self.timelines {
            let Some(timeline) = slot.as_mut() else {
                continue;
            };
            if timeline.is_finished() {
                continue;
            }
            if !timeline.is_resolved() {
                match timeline.resolve(doc, &self.applied) {
                    Ok(()) => {}
                    Err(error) if error.is_transient() => continue,
                    Err(error) => {
                        let target = timeline.spec().actions.first().map(|a| a.target());
                        tracer.scene_skipped(&SceneSkippedEvent {
                            scene: None,
                            trigger: target.unwrap_or_default(),
                            error: &error,
                        });
                        *slot = None;
                        continue;
                    }
                }
            }
            if !timeline.is_running() {
                timeline.start(now);
            }
            timeline.tick(now, &mut self.changes);
        }
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use kurbo::{BezPath, Rect};

    use super::*;
    use crate::action::{Action, ClassToggle, ClassWindow, Tween, TweenProperty};
    use crate::backend::Presenter;
    use crate::changes::StyleValue;
    use crate::document::{ElementId, MemoryDocument};
    use crate::ease::Ease;
    use crate::list::{ItemState, ListMode};
    use crate::motion::MotionSpec;
    use crate::scene::Length;
    use crate::time::Duration;
    use crate::timeline::Repeat;
    use crate::viewport::{Responsive, ViewportSize};

    const ACTIVE: &str = "features__list--item-active";

    /// Counts layout reads.
    struct Counting {
        inner: MemoryDocument,
        reads: Cell<u32>,
    }

    impl Document for Counting {
        fn query_all(&mut self, selector: &str) -> Vec<ElementId> {
            self.reads.set(self.reads.get() + 1);
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
            self.reads.set(self.reads.get() + 1);
            self.inner.scroll_y()
        }
    }

    struct Page {
        doc: MemoryDocument,
        ctl: AnimationController,
        frame: u64,
        items: Vec<ElementId>,
        dot: ElementId,
    }

    impl Page {
        /// A features section at 1000..2000 with a dot running down a
        /// 1000px path and two list items along it.
        fn new() -> Self {
            let mut doc = MemoryDocument::new(ViewportSize::new(1280.0, 0.0));
            let _ = doc.insert(".features", Rect::new(0.0, 1000.0, 1280.0, 2000.0));
            let mut line = BezPath::new();
            line.move_to((0.0, 0.0));
            line.line_to((0.0, 1000.0));
            let _ = doc.insert_path(".features__path", Rect::new(100.0, 1000.0, 100.0, 2000.0), line);
            let dot = doc.insert(".features__dot", Rect::new(95.0, 995.0, 105.0, 1005.0));
            let items = alloc::vec![
                doc.insert(".features__item", Rect::new(200.0, 1300.0, 600.0, 1400.0)),
                doc.insert(".features__item", Rect::new(200.0, 1600.0, 600.0, 1700.0)),
            ];
            let ctl = AnimationController::new(Breakpoints::default(), &doc);
            Self {
                doc,
                ctl,
                frame: 0,
                items,
                dot,
            }
        }

        fn dot_scene(&mut self) -> SceneId {
            let spec = SceneSpec::new(
                ".features",
                Tween::new(".features__dot")
                    .along(MotionSpec::along(".features__path"))
                    .ease(Ease::Linear),
            )
            .trigger_hook(0.0)
            .duration(Length::px(1000.0));
            self.ctl
                .register_scene(spec, &mut self.doc, &mut Tracer::none())
                .unwrap()
        }

        fn tick(&mut self) -> bool {
            self.frame += 1;
            let tick = FrameTick {
                now: HostTime(self.frame * 16_000),
                frame_index: self.frame,
            };
            match self.ctl.frame(tick, &mut self.doc, &mut Tracer::none()) {
                Some(changes) => {
                    self.doc.apply(changes);
                    true
                }
                None => false,
            }
        }

        fn scroll_to(&mut self, y: f64) {
            self.doc.set_scroll_y(y);
            self.ctl.on_scroll();
            assert!(self.tick());
        }
    }

    #[test]
    fn idle_frames_do_not_read_layout() {
        let mut doc = Counting {
            inner: MemoryDocument::new(ViewportSize::new(1280.0, 0.0)),
            reads: Cell::new(0),
        };
        let _ = doc.inner.insert(".support", Rect::new(0.0, 500.0, 1280.0, 900.0));
        let _ = doc.inner.insert(".support__title", Rect::new(0.0, 520.0, 400.0, 560.0));
        let mut ctl = AnimationController::new(Breakpoints::default(), &doc);
        let spec = SceneSpec::new(".support", Tween::new(".support__title").rise_in(40.0));
        assert!(ctl.register_scene(spec, &mut doc, &mut Tracer::none()).is_some());

        let tick = |i: u64| FrameTick {
            now: HostTime(i * 16_000),
            frame_index: i,
        };
        assert!(ctl.frame(tick(1), &mut doc, &mut Tracer::none()).is_some());
        let reads = doc.reads.get();

        for i in 2..10 {
            assert!(ctl.frame(tick(i), &mut doc, &mut Tracer::none()).is_none());
        }
        assert_eq!(doc.reads.get(), reads);

        for _ in 0..5 {
            ctl.on_scroll();
        }
        assert!(ctl.frame(tick(10), &mut doc, &mut Tracer::none()).is_some());
        assert!(doc.reads.get() > reads);
        assert!(ctl.frame(tick(11), &mut doc, &mut Tracer::none()).is_none());
    }

    #[test]
    fn the_marker_activates_the_item_it_passes() {
        let mut page = Page::new();
        let scene = page.dot_scene();
        let list = page
            .ctl
            .register_list(
                ListSpec::new(scene, ".features__item", ".features__dot", ACTIVE),
                &mut page.doc,
                &mut Tracer::none(),
            )
            .unwrap();

        assert!(page.tick());
        assert_eq!(page.doc.style(page.dot, "opacity"), Some(StyleValue::Opacity(1.0)));

        page.scroll_to(1350.0);
        assert_eq!(page.ctl.registry().progress(scene), Some(0.35));
        assert!(page.doc.has_class(page.items[0], ACTIVE));
        assert!(!page.doc.has_class(page.items[1], ACTIVE));
        assert_eq!(page.doc.style(page.dot, "opacity"), Some(StyleValue::Opacity(0.0)));

        page.scroll_to(1500.0);
        assert_eq!(page.ctl.list(list).unwrap().active_index(), None);
        assert!(!page.doc.has_class(page.items[0], ACTIVE));

        page.scroll_to(1650.0);
        assert_eq!(page.ctl.list(list).unwrap().active_index(), Some(1));
        assert!(page.doc.has_class(page.items[1], ACTIVE));
    }

    #[test]
    fn resize_into_mobile_reconfigures_without_panicking() {
        let mut page = Page::new();
        let card = page.doc.insert(".card", Rect::new(0.0, 1100.0, 100.0, 1200.0));
        let desktop: Action = ClassToggle::new(".card", "card--wide", ClassWindow::from_threshold(0.5)).into();
        let mobile: Action = ClassToggle::new(".card", "card--narrow", ClassWindow::from_threshold(0.5)).into();
        let toggle = page
            .ctl
            .register_scene(
                SceneSpec::new(".features", Responsive::all(desktop).with(ViewportClass::Mobile, mobile))
                    .trigger_hook(0.0)
                    .duration(Length::px(1000.0)),
                &mut page.doc,
                &mut Tracer::none(),
            )
            .unwrap();
        let dot = page.dot_scene();
        let list = page
            .ctl
            .register_list(
                ListSpec::new(dot, ".features__item", ".features__dot", ACTIVE)
                    .mode(Responsive::all(ListMode::Exclusive).with(ViewportClass::Mobile, ListMode::AllActive)),
                &mut page.doc,
                &mut Tracer::none(),
            )
            .unwrap();

        page.scroll_to(1700.0);
        assert_eq!(page.ctl.class(), ViewportClass::Desktop);
        assert!(page.doc.has_class(card, "card--wide"));

        page.doc.set_viewport(ViewportSize::new(375.0, 0.0));
        page.ctl.on_resize();
        page.ctl.on_resize();
        assert!(page.tick());

        assert_eq!(page.ctl.class(), ViewportClass::Mobile);
        assert!(!page.doc.has_class(card, "card--wide"));
        assert!(page.doc.has_class(card, "card--narrow"));
        assert_eq!(page.ctl.registry().progress(toggle), Some(0.7));
        assert!(
            page.ctl
                .list(list)
                .unwrap()
                .states()
                .iter()
                .all(|s| *s == ItemState::Active)
        );
        assert!(page.items.iter().all(|&i| page.doc.has_class(i, ACTIVE)));

        // Back to desktop: the narrow class is retracted again.
        page.doc.set_viewport(ViewportSize::new(1280.0, 0.0));
        page.ctl.on_resize();
        assert!(page.tick());
        assert!(page.doc.has_class(card, "card--wide"));
        assert!(!page.doc.has_class(card, "card--narrow"));
    }

    #[test]
    fn motion_paths_follow_layout_on_resize() {
        let mut page = Page::new();
        let _ = page.dot_scene();
        page.scroll_to(1500.0);
        let translate = |page: &Page| match page.doc.style(page.dot, "transform") {
            Some(StyleValue::Transform { translate, .. }) => translate,
            other => panic!("expected a transform, got {other:?}"),
        };
        let t = translate(&page);
        assert!(t.x.abs() < 1e-6 && (t.y - 500.0).abs() < 1e-6, "{t:?}");

        // Same class, but the path moved 200px to the right.
        let path = page.doc.query_all(".features__path")[0];
        page.doc.set_rect(path, Rect::new(300.0, 1000.0, 300.0, 2000.0));
        page.doc.set_viewport(ViewportSize::new(1300.0, 0.0));
        page.ctl.on_resize();
        assert!(page.tick());
        assert_eq!(page.ctl.class(), ViewportClass::Desktop);

        // Progress is unchanged; the dot is placed on the moved path anyway.
        let t = translate(&page);
        assert!((t.x - 200.0).abs() < 1e-6 && (t.y - 500.0).abs() < 1e-6, "{t:?}");

        page.scroll_to(1600.0);
        let t = translate(&page);
        assert!((t.x - 200.0).abs() < 1e-6 && (t.y - 600.0).abs() < 1e-6, "{t:?}");
    }

    #[test]
    fn lists_clear_when_their_driver_is_disabled() {
        let mut page = Page::new();
        let spec = SceneSpec::new(
            ".features",
            Tween::new(".features__dot")
                .along(MotionSpec::along(".features__path"))
                .ease(Ease::Linear),
        )
        .trigger_hook(0.0)
        .duration(Length::px(1000.0))
        .enabled(Responsive::mobile_or(false, true));
        let scene = page
            .ctl
            .register_scene(spec, &mut page.doc, &mut Tracer::none())
            .unwrap();
        let list = page
            .ctl
            .register_list(
                ListSpec::new(scene, ".features__item", ".features__dot", ACTIVE),
                &mut page.doc,
                &mut Tracer::none(),
            )
            .unwrap();
        page.scroll_to(1350.0);
        assert!(page.doc.has_class(page.items[0], ACTIVE));
        assert_eq!(page.doc.style(page.dot, "opacity"), Some(StyleValue::Opacity(0.0)));

        page.doc.set_viewport(ViewportSize::new(375.0, 0.0));
        page.ctl.on_resize();
        assert!(page.tick());

        assert_eq!(page.ctl.registry().state(scene), Some(SceneState::Disabled));
        assert_eq!(page.ctl.list(list).unwrap().active_index(), None);
        assert!(page.items.iter().all(|&i| !page.doc.has_class(i, ACTIVE)));
        assert_eq!(page.doc.style(page.dot, "opacity"), Some(StyleValue::Opacity(1.0)));

        // Scrolling while disabled changes nothing.
        page.doc.set_scroll_y(1650.0);
        page.ctl.on_scroll();
        assert!(page.tick());
        assert!(page.items.iter().all(|&i| !page.doc.has_class(i, ACTIVE)));
    }

    #[test]
    fn timelines_keep_frames_running_until_finished() {
        let mut page = Page::new();
        let id = page
            .ctl
            .add_timeline(
                TimelineSpec::new(
                    Duration::from_millis(160),
                    Tween::new(".features__dot")
                        .animate(TweenProperty::Opacity, 0.0, 1.0)
                        .ease(Ease::Linear),
                )
                .repeat(Repeat::Count(0)),
                &mut page.doc,
                &mut Tracer::none(),
            )
            .unwrap();

        // Starts at frame 1 (16ms), finishes at 176ms.
        let mut frames = 0;
        while page.tick() {
            frames += 1;
            assert!(frames < 100, "timeline never finished");
        }
        assert_eq!(frames, 11);
        assert!(page.ctl.timeline(id).unwrap().is_finished());
        assert_eq!(page.doc.style(page.dot, "opacity"), Some(StyleValue::Opacity(1.0)));
        assert!(!page.ctl.has_pending_work());
    }

    #[test]
    fn configuration_errors_skip_only_the_broken_part() {
        let mut page = Page::new();
        let missing = SceneSpec::new(".nope", Tween::new(".features__dot").rise_in(10.0));
        assert!(
            page.ctl
                .register_scene(missing, &mut page.doc, &mut Tracer::none())
                .is_none()
        );
        let scene = page.dot_scene();
        let bad_list = ListSpec::new(scene, ".features__item", ".missing__dot", ACTIVE);
        assert!(
            page.ctl
                .register_list(bad_list, &mut page.doc, &mut Tracer::none())
                .is_none()
        );
        let bad_timeline = TimelineSpec::new(Duration::from_millis(100), Tween::new(".missing").rise_in(10.0));
        assert!(
            page.ctl
                .add_timeline(bad_timeline, &mut page.doc, &mut Tracer::none())
                .is_none()
        );

        page.scroll_to(1500.0);
        assert_eq!(page.ctl.registry().progress(scene), Some(0.5));
    }

    #[test]
    fn removing_a_scene_drops_its_lists_and_teardown_stops_everything() {
        let mut page = Page::new();
        let scene = page.dot_scene();
        let list = page
            .ctl
            .register_list(
                ListSpec::new(scene, ".features__item", ".features__dot", ACTIVE),
                &mut page.doc,
                &mut Tracer::none(),
            )
            .unwrap();
        page.scroll_to(1350.0);

        assert!(page.ctl.remove_scene(scene));
        assert!(!page.ctl.remove_scene(scene), "stale handle");
        assert!(page.ctl.list(list).is_none());

        page.doc.set_scroll_y(1650.0);
        page.ctl.on_scroll();
        assert!(page.tick());
        assert!(!page.doc.has_class(page.items[1], ACTIVE));

        let _ = page.dot_scene();
        page.ctl.teardown();
        assert!(page.ctl.registry().is_empty());
        page.ctl.on_scroll();
        page.ctl.teardown();
        assert!(!page.tick());
    }
}
