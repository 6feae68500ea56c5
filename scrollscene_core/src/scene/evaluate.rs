// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame evaluation.
//!
//! Evaluation follows a drain-recompute pattern:
//!
//! 1. **RESOLVE**: Drain dirty scenes and bind their actions to elements.
//! 2. **MEASURE**: Drain dirty scenes and recompute activation windows.
//! 3. **Progress**: Walk live scenes in registration order, compute
//!    progress from the current scroll offset and hand every *changed*
//!    progress to the mapper.
//!
//! Failures in steps 1 and 2 never propagate. Transient errors re-mark the
//! scene for the next frame until [`MAX_ATTEMPTS`] is reached; configuration
//! errors skip the scene. Both are reported through the [`Tracer`].

use alloc::vec::Vec;

use super::id::SceneId;
use super::progress::ScrollDirection;
use super::store::{MAX_ATTEMPTS, ProgressUpdate, SceneRegistry, SceneState};
use crate::changes::{AppliedTranslations, FrameChanges};
use crate::dirty;
use crate::document::Document;
use crate::trace::{SceneDeferredEvent, SceneMeasuredEvent, SceneSkippedEvent, Tracer};

/// Per-frame inputs to [`SceneRegistry::evaluate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameContext {
    /// Frame counter, for tracing.
    pub frame_index: u64,
    /// Direction of the scroll since the previous evaluation.
    pub direction: ScrollDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Resolve,
    Measure,
}

impl SceneRegistry {
    /// Settles deferred work and maps every changed progress to output.
    ///
    /// Changes are appended to `changes` in registration order. The progress
    /// changes themselves are available from [`updates`](Self::updates)
    /// until the next call.
    pub fn evaluate(
        &mut self,
        ctx: FrameContext,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
        changes: &mut FrameChanges,
        tracer: &mut Tracer<'_>,
    ) {
        self.updates.clear();
        self.retry_pending = false;

        let to_resolve: Vec<u32> = self.dirty.drain(dirty::RESOLVE).deterministic().run().collect();
        for idx in to_resolve {
            self.settle(idx, Step::Resolve, doc, applied, tracer);
        }
        let to_measure: Vec<u32> = self.dirty.drain(dirty::MEASURE).deterministic().run().collect();
        for idx in to_measure {
            self.settle(idx, Step::Measure, doc, applied, tracer);
        }

        let scroll_y = doc.scroll_y();
        for i in 0..self.order.len() {
            let idx = self.order[i];
            self.advance(idx, scroll_y, ctx, doc, applied, changes, tracer);
        }
    }

    fn settle(
        &mut self,
        idx: u32,
        step: Step,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
        tracer: &mut Tracer<'_>,
    ) {
        let Some(slot) = self.slots.get_mut(idx as usize) else {
            return;
        };
        let id = SceneId {
            idx,
            generation: slot.generation,
        };
        let Some(entry) = slot.entry.as_mut() else {
            return;
        };
        if !matches!(entry.state, SceneState::Pending | SceneState::Active) {
            return;
        }

        let outcome = match step {
            Step::Resolve => entry.resolve(doc, applied).map(|()| None),
            Step::Measure => entry.measure(doc, applied).map(Some),
        };
        match outcome {
            Ok(window) => {
                match step {
                    Step::Resolve => entry.needs_resolve = false,
                    Step::Measure => entry.needs_measure = false,
                }
                if let Some(window) = window {
                    tracer.scene_measured(&SceneMeasuredEvent {
                        scene: id,
                        start: window.start,
                        duration: window.duration,
                        extended: entry.extended,
                    });
                }
                if !entry.needs_resolve && !entry.needs_measure {
                    entry.attempts = 0;
                    entry.state = SceneState::Active;
                }
            }
            Err(error) if error.is_transient() => {
                entry.attempts = entry.attempts.saturating_add(1);
                let gave_up = entry.attempts >= MAX_ATTEMPTS;
                tracer.scene_deferred(&SceneDeferredEvent {
                    scene: id,
                    attempt: entry.attempts,
                    gave_up,
                    error: &error,
                });
                if gave_up {
                    entry.state = SceneState::Stalled;
                } else {
                    entry.state = SceneState::Pending;
                    let channel = match step {
                        Step::Resolve => dirty::RESOLVE,
                        Step::Measure => dirty::MEASURE,
                    };
                    self.dirty.mark(idx, channel);
                    self.retry_pending = true;
                }
            }
            Err(error) => {
                tracer.scene_skipped(&SceneSkippedEvent {
                    scene: Some(id),
                    trigger: &entry.spec.trigger,
                    error: &error,
                });
                entry.state = SceneState::Skipped;
            }
        }
    }

    fn advance(
        &mut self,
        idx: u32,
        scroll_y: f64,
        ctx: FrameContext,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
        changes: &mut FrameChanges,
        tracer: &mut Tracer<'_>,
    ) {
        let Some(slot) = self.slots.get_mut(idx as usize) else {
            return;
        };
        let id = SceneId {
            idx,
            generation: slot.generation,
        };
        let Some(entry) = slot.entry.as_mut() else {
            return;
        };
        if entry.state != SceneState::Active {
            return;
        }
        let (Some(window), Some(action)) = (entry.window, entry.action.as_ref()) else {
            return;
        };

        let mut progress = window.progress(scroll_y);
        if entry.emitted == Some(progress) {
            return;
        }
        action.apply(progress, &mut entry.mapper, changes);

        let switch = entry
            .spec
            .extension
            .get(entry.class)
            .as_ref()
            .is_some_and(|ext| match (entry.extended, ctx.direction) {
                (false, ScrollDirection::Forward) => progress > ext.extend_above,
                (true, ScrollDirection::Reverse) => progress < ext.restore_below,
                _ => false,
            });
        if switch {
            entry.extended = !entry.extended;
            match entry.measure(doc, applied) {
                Ok(window) => {
                    tracer.scene_measured(&SceneMeasuredEvent {
                        scene: id,
                        start: window.start,
                        duration: window.duration,
                        extended: entry.extended,
                    });
                    let rescaled = window.progress(scroll_y);
                    if rescaled != progress
                        && let Some(action) = entry.action.as_ref()
                    {
                        action.apply(rescaled, &mut entry.mapper, changes);
                        progress = rescaled;
                    }
                }
                Err(_) => {
                    // Keep the old window for this frame; measure again next.
                    entry.needs_measure = true;
                    self.dirty.mark(idx, dirty::MEASURE);
                    self.retry_pending = true;
                }
            }
        }

        let previous = entry.emitted.replace(progress);
        self.updates.push(ProgressUpdate {
            scene: id,
            progress,
            previous,
        });

        #[cfg(feature = "trace-rich")]
        tracer.progress(&crate::trace::ProgressEvent {
            frame_index: ctx.frame_index,
            scene: id,
            progress,
            direction: ctx.direction,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::action::{ClassToggle, ClassWindow, Tween};
    use crate::changes::{ClassOp, StyleValue};
    use crate::document::MemoryDocument;
    use crate::ease::Ease;
    use crate::scene::{DurationExtension, Length, SceneSpec};
    use crate::viewport::{ViewportClass, ViewportSize};

    struct Page {
        doc: MemoryDocument,
        reg: SceneRegistry,
        applied: AppliedTranslations,
        changes: FrameChanges,
        frame: u64,
    }

    impl Page {
        fn new() -> Self {
            let mut doc = MemoryDocument::new(ViewportSize::new(1280.0, 0.0));
            let _ = doc.insert(".features", Rect::new(0.0, 1000.0, 1280.0, 2000.0));
            let _ = doc.insert(".features__title", Rect::new(0.0, 1100.0, 600.0, 1150.0));
            Self {
                doc,
                reg: SceneRegistry::new(),
                applied: AppliedTranslations::default(),
                changes: FrameChanges::default(),
                frame: 0,
            }
        }

        fn register(&mut self, spec: SceneSpec) -> SceneId {
            self.reg
                .register(spec, ViewportClass::Desktop, &mut self.doc, &self.applied)
                .unwrap()
        }

        fn scroll_to(&mut self, y: f64) {
            let direction = ScrollDirection::from_offsets(self.doc.scroll_y(), y);
            self.doc.set_scroll_y(y);
            self.run(direction);
        }

        fn run(&mut self, direction: ScrollDirection) {
            self.frame += 1;
            self.changes.clear();
            let ctx = FrameContext {
                frame_index: self.frame,
                direction,
            };
            self.reg.evaluate(
                ctx,
                &mut self.doc,
                &self.applied,
                &mut self.changes,
                &mut Tracer::none(),
            );
            self.applied.record(&self.changes);
        }
    }

    fn title_fade() -> SceneSpec {
        SceneSpec::new(
            ".features",
            Tween::new(".features__title").rise_in(40.0).ease(Ease::Linear),
        )
        .trigger_hook(0.0)
        .duration(Length::px(400.0))
    }

    #[test]
    fn progress_is_emitted_only_when_it_changes() {
        let mut page = Page::new();
        let id = page.register(title_fade());

        page.scroll_to(1200.0);
        assert_eq!(page.reg.progress(id), Some(0.5));
        assert_eq!(page.changes.styles[0].value, StyleValue::Top(20.0));
        assert_eq!(page.reg.updates().len(), 1);
        assert_eq!(page.reg.updates()[0].previous, None);

        page.scroll_to(1200.0);
        assert!(page.changes.is_empty());
        assert!(page.reg.updates().is_empty());

        // Both offsets lie past the end of the window.
        page.scroll_to(5000.0);
        assert_eq!(page.reg.progress(id), Some(1.0));
        page.scroll_to(6000.0);
        assert!(page.changes.is_empty());
    }

    #[test]
    fn class_toggle_flips_once_per_crossing() {
        let mut page = Page::new();
        let card = page.doc.insert(".card", Rect::new(0.0, 1500.0, 100.0, 1600.0));
        let _ = page.register(
            SceneSpec::new(
                ".features",
                ClassToggle::new(".card", "card--active", ClassWindow::from_threshold(0.5)),
            )
            .trigger_hook(0.0)
            .duration(Length::px(400.0)),
        );

        let mut ops = Vec::new();
        let forward = (0..=40).map(|i| 1000.0 + f64::from(i) * 10.0);
        let backward = (0..=40).rev().map(|i| 1000.0 + f64::from(i) * 10.0);
        for y in forward.chain(backward) {
            page.scroll_to(y);
            ops.extend(page.changes.classes.iter().map(|c| (c.element, c.op)));
        }
        assert_eq!(ops, [(card, ClassOp::Add), (card, ClassOp::Remove)]);
    }

    #[test]
    fn output_follows_registration_order() {
        let mut page = Page::new();
        let second = page.doc.insert(".features__text", Rect::new(0.0, 1200.0, 600.0, 1250.0));
        let a = page.register(title_fade());
        let b = page.register(
            SceneSpec::new(".features", Tween::new(".features__text").slide_in(-30.0))
                .trigger_hook(0.0)
                .duration(Length::px(200.0)),
        );
        // Free `a`'s slot and reuse it; the new scene must still come last.
        assert!(page.reg.remove(a));
        let c = page.register(title_fade());
        assert_eq!(c.index(), a.index());

        page.scroll_to(1100.0);
        let scenes: Vec<SceneId> = page.reg.updates().iter().map(|u| u.scene).collect();
        assert_eq!(scenes, [b, c]);
        assert_eq!(page.changes.styles[0].element, second);
    }

    #[test]
    fn removed_scenes_stop_producing_output() {
        let mut page = Page::new();
        let id = page.register(title_fade());
        page.scroll_to(1100.0);
        assert!(!page.changes.is_empty());

        assert!(page.reg.remove(id));
        page.scroll_to(1300.0);
        assert!(page.changes.is_empty());
        assert_eq!(page.reg.progress(id), None);
    }

    #[test]
    fn transient_failures_retry_then_stall_until_resize() {
        let mut page = Page::new();
        let trigger = page.doc.query_all(".features")[0];
        page.doc.detach(trigger);
        let id = page.register(title_fade());
        assert_eq!(page.reg.state(id), Some(SceneState::Pending));

        for _ in 0..MAX_ATTEMPTS {
            assert!(page.reg.has_pending());
            page.run(ScrollDirection::Paused);
        }
        assert_eq!(page.reg.state(id), Some(SceneState::Stalled));
        assert!(!page.reg.has_pending());

        page.doc.set_rect(trigger, Rect::new(0.0, 1000.0, 1280.0, 2000.0));
        page.reg.mark_all_for_measure();
        page.scroll_to(1100.0);
        assert_eq!(page.reg.state(id), Some(SceneState::Active));
        assert_eq!(page.reg.progress(id), Some(0.25));
    }

    #[test]
    fn layout_that_appears_later_activates_the_scene() {
        let mut page = Page::new();
        let trigger = page.doc.query_all(".features")[0];
        page.doc.detach(trigger);
        let id = page.register(title_fade());

        page.run(ScrollDirection::Paused);
        assert_eq!(page.reg.state(id), Some(SceneState::Pending));

        page.doc.set_rect(trigger, Rect::new(0.0, 1000.0, 1280.0, 2000.0));
        page.run(ScrollDirection::Paused);
        assert_eq!(page.reg.state(id), Some(SceneState::Active));
        assert_eq!(page.reg.progress(id), Some(0.0));
    }

    #[test]
    fn zero_height_trigger_is_inert_not_fatal() {
        let mut page = Page::new();
        let _ = page.doc.insert(".collapsed", Rect::new(0.0, 3000.0, 1280.0, 3000.0));
        let id = page.register(SceneSpec::new(
            ".collapsed",
            Tween::new(".features__title").rise_in(10.0),
        ));
        assert_eq!(page.reg.state(id), Some(SceneState::Pending));
        page.scroll_to(3000.0);
        assert!(page.changes.is_empty());
        assert_eq!(page.reg.progress(id), None);
    }

    #[test]
    fn duration_extension_has_hysteresis() {
        let mut page = Page::new();
        let dot = page.doc.insert(".features__dot", Rect::new(0.0, 1000.0, 10.0, 1010.0));
        let id = page.register(
            SceneSpec::new(
                ".features",
                Tween::new(".features__dot")
                    .animate(crate::action::TweenProperty::Opacity, 0.0, 1.0)
                    .ease(Ease::Linear),
            )
            .trigger_hook(0.0)
            .duration(Length::trigger_height(1.7))
            .extension(Some(DurationExtension {
                extended: Length::px(2000.0),
                extend_above: 0.2393,
                restore_below: 0.4345,
            })),
        );
        assert_eq!(page.reg.window(id).unwrap().duration, 1700.0);

        page.scroll_to(1000.0 + 0.3 * 1700.0);
        let w = page.reg.window(id).unwrap();
        assert_eq!(w.duration, 2000.0);
        assert_eq!(page.reg.progress(id), Some(510.0 / 2000.0));
        assert_eq!(page.changes.styles.last().unwrap().element, dot);

        // Reversing above the restore threshold keeps the extension.
        page.scroll_to(2000.0);
        page.scroll_to(1950.0);
        assert_eq!(page.reg.window(id).unwrap().duration, 2000.0);

        page.scroll_to(1800.0);
        assert_eq!(page.reg.window(id).unwrap().duration, 1700.0);
        assert_eq!(page.reg.progress(id), Some(800.0 / 1700.0));

        // A paused frame never switches.
        page.run(ScrollDirection::Paused);
        assert_eq!(page.reg.window(id).unwrap().duration, 1700.0);
    }

    #[test]
    fn missing_element_after_resize_skips_the_scene() {
        let mut page = Page::new();
        let spec = SceneSpec::new(".features", Tween::new(".features__title").rise_in(40.0))
            .duration(Length::element_height(".features__base", 1.0));
        let _ = page.doc.insert(".features__base", Rect::new(0.0, 0.0, 10.0, 500.0));
        let id = page.register(spec);
        assert_eq!(page.reg.state(id), Some(SceneState::Active));

        // A page that stops matching a selector is a configuration problem.
        let mut doc = MemoryDocument::new(ViewportSize::new(1280.0, 0.0));
        let _ = doc.insert(".features", Rect::new(0.0, 1000.0, 1280.0, 2000.0));
        let _ = doc.insert(".features__title", Rect::new(0.0, 1100.0, 600.0, 1150.0));
        page.doc = doc;
        page.reg.mark_all_for_measure();
        page.run(ScrollDirection::Paused);
        assert_eq!(page.reg.state(id), Some(SceneState::Skipped));
        assert_eq!(page.reg.progress(id), None);
        assert!(page.changes.is_empty());
    }
}
