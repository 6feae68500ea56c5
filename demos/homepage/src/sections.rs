// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The homepage's scroll scenes, one function per section.
//!
//! Offsets follow the engine's convention: a positive offset starts the
//! scene *earlier* than the trigger reaching its hook line.

use alloc::vec::Vec;

use scrollscene_core::action::{Action, ClassToggle, ClassWindow, Tween};
use scrollscene_core::controller::AnimationController;
use scrollscene_core::document::Document;
use scrollscene_core::ease::Ease;
use scrollscene_core::list::{ListAxis, ListId, ListMode, ListSpec, MarkerVisibility};
use scrollscene_core::motion::MotionSpec;
use scrollscene_core::scene::{DurationExtension, Length, SceneId, SceneSpec};
use scrollscene_core::time::Duration;
use scrollscene_core::timeline::{Repeat, TimelineId, TimelineSpec};
use scrollscene_core::trace::Tracer;
use scrollscene_core::viewport::Responsive;

/// Distance headings and paragraphs rise from, matching the stylesheet's
/// initial `top`.
const RISE: f64 = 40.0;
/// Distance images and CTAs slide in from, matching the stylesheet's
/// initial `left`.
const SLIDE: f64 = -60.0;

/// Handles of everything installed on the page.
#[derive(Debug, Default)]
pub(crate) struct Installed {
    pub(crate) scenes: Vec<SceneId>,
    pub(crate) lists: Vec<ListId>,
    pub(crate) timelines: Vec<TimelineId>,
}

struct Installer<'a, 'b> {
    ctl: &'a mut AnimationController,
    doc: &'a mut dyn Document,
    tracer: &'a mut Tracer<'b>,
    out: Installed,
}

impl Installer<'_, '_> {
    fn present(&mut self, section: &str) -> bool {
        !self.doc.query_all(section).is_empty()
    }

    fn scene(&mut self, spec: SceneSpec) -> Option<SceneId> {
        let id = self.ctl.register_scene(spec, self.doc, self.tracer)?;
        self.out.scenes.push(id);
        Some(id)
    }

    fn list(&mut self, spec: ListSpec) {
        if let Some(id) = self.ctl.register_list(spec, self.doc, self.tracer) {
            self.out.lists.push(id);
        }
    }

    fn timeline(&mut self, spec: TimelineSpec) {
        if let Some(id) = self.ctl.add_timeline(spec, self.doc, self.tracer) {
            self.out.timelines.push(id);
        }
    }

    /// A heading or paragraph fading up into place as its section enters
    /// from the bottom of the viewport.
    fn rise(
        &mut self,
        section: &str,
        target: &str,
        offset: impl Into<Responsive<Length>>,
        duration: impl Into<Responsive<Length>>,
    ) {
        let _ = self.scene(
            SceneSpec::new(section, Tween::new(target).rise_in(RISE))
                .trigger_hook(1.0)
                .offset(offset)
                .duration(duration),
        );
    }

    /// Like [`rise`](Self::rise), sliding horizontally.
    fn slide(
        &mut self,
        section: &str,
        target: &str,
        hook: f64,
        offset: impl Into<Responsive<Length>>,
        duration: impl Into<Responsive<Length>>,
    ) {
        let _ = self.scene(
            SceneSpec::new(section, Tween::new(target).slide_in(SLIDE))
                .trigger_hook(hook)
                .offset(offset)
                .duration(duration),
        );
    }
}

/// Installs every section present in `doc`. Sections missing from the page
/// are skipped without a trace; broken parts of present sections are
/// reported through `tracer` and skipped.
pub(crate) fn install(
    ctl: &mut AnimationController,
    doc: &mut dyn Document,
    tracer: &mut Tracer<'_>,
) -> Installed {
    let mut page = Installer {
        ctl,
        doc,
        tracer,
        out: Installed::default(),
    };
    let sections: [(&str, fn(&mut Installer<'_, '_>)); 7] = [
        (".support", support),
        (".features", features),
        (".integrate", integrate),
        (".integrations", integrations),
        (".weprovide", weprovide),
        (".testimonials", testimonials),
        (".prefooter", prefooter),
    ];
    for (section, add) in sections {
        if page.present(section) {
            add(&mut page);
        }
    }
    page.out
}

fn support(page: &mut Installer<'_, '_>) {
    // Wide layouts run a card dot along the whole section; narrow ones move
    // the small dot down the base path only.
    let dot = Responsive::narrow_wide(
        Tween::new(".support__path--dot").along(MotionSpec::along(".support__path--base--path")),
        Tween::new("#support__dot--card0").along(MotionSpec::along(".support__path--base--path")),
    )
    .map(Action::from);
    let _ = page.scene(
        SceneSpec::new(".support", dot)
            .trigger_hook(Responsive::narrow_wide(0.0, 0.75))
            .offset(Responsive::narrow_wide(Length::px(0.0), Length::px(-300.0)))
            .duration(Responsive::narrow_wide(
                Length::element_height(".support__path--base", 1.0),
                Length::trigger_height(1.82),
            )),
    );

    page.rise(".support", ".support__title", Length::px(-100.0), Length::px(270.0));
    page.rise(".support", ".support__text", Length::px(-100.0), Length::px(300.0));
    page.slide(".support", ".support__image", 0.85, Length::px(0.0), Length::px(400.0));
}

fn features(page: &mut Installer<'_, '_>) {
    let path = Responsive::narrow_wide(
        ".features__path--base--path3",
        ".features__path--base--path1",
    );
    let dot = path.map(|p| Action::from(Tween::new(".features__path--dot").along(MotionSpec::along(p))));
    let extension = DurationExtension {
        extended: Length::px(2000.0),
        extend_above: 0.2393,
        restore_below: 0.4345,
    };
    let scene = page.scene(
        SceneSpec::new(".features", dot)
            .trigger_hook(0.25)
            .offset(Length::px(400.0))
            .duration(Responsive::narrow_wide(
                Length::trigger_height(1.2),
                Length::trigger_height(1.7),
            ))
            .extension(Responsive::narrow_wide(None, Some(extension))),
    );
    if let Some(scene) = scene {
        page.list(
            ListSpec::new(
                scene,
                "#f1, #f2, #f3, #f4, #f5, #f6",
                ".features__path--dot",
                "features__list--item-active",
            )
            .padding(16.0),
        );
    }

    page.rise(".features", ".features__title--1", Length::px(-100.0), Length::px(300.0));
    page.slide(".features", ".features__images--marketplace", 1.0, Length::px(-200.0), Length::px(500.0));
    page.rise(".features", ".features__title--2", Length::trigger_height(-0.5), Length::px(500.0));
    page.slide(".features", ".features__images--graph", 1.0, Length::trigger_height(-1.0 / 1.8), Length::px(300.0));
}

fn integrate(page: &mut Installer<'_, '_>) {
    page.rise(".integrate", ".integrate__title", Length::px(100.0), Length::px(400.0));
    page.rise(".integrate", ".integrate__cta", Length::px(0.0), Length::px(500.0));
}

fn integrations(page: &mut Installer<'_, '_>) {
    let dot = Responsive::mobile_or(
        ".integrations__path--mobile--path",
        ".integrations__path--desktop--path",
    )
    .map(|p| Action::from(Tween::new(".integrations__path--dot").along(MotionSpec::along(p))));
    let scene = page.scene(
        SceneSpec::new(".integrations", dot)
            .trigger_hook(0.7)
            .offset(Responsive::mobile_or(
                Length::px(-100.0),
                Length::trigger_height(-1.0 / 3.0),
            ))
            .duration(Responsive::new(
                Length::trigger_height(1.5),
                Length::trigger_height(1.0),
                Length::trigger_height(2.0),
                Length::trigger_height(2.0),
            )),
    );
    if let Some(scene) = scene {
        page.list(
            ListSpec::new(
                scene,
                ".integrations__item",
                ".integrations__path--dot",
                "integrations__item-active",
            )
            .mode(Responsive::mobile_or(ListMode::AllActive, ListMode::Exclusive)),
        );
    }

    page.rise(".integrations", ".integrations__title", Length::px(100.0), Length::px(200.0));
    page.slide(".integrations", ".integrations__text", 1.0, Length::px(80.0), Length::px(220.0));
}

fn weprovide(page: &mut Installer<'_, '_>) {
    let desktop = MotionSpec::along(".weprovide__path--desktop--path");
    let mobile = MotionSpec::along(".weprovide__path--mobile--path");
    let dot = Responsive::new(
        mobile.clone().range(0.0, 0.4),
        mobile,
        desktop.clone(),
        desktop,
    )
    .map(|m| Action::from(Tween::new(".weprovide__path--dot").along(m)));
    let scene = page.scene(
        SceneSpec::new(".weprovide", dot)
            .trigger_hook(0.5)
            .offset(Responsive::mobile_or(
                Length::px(0.0),
                Length::trigger_height(-1.0 / 5.7),
            ))
            .duration(Responsive::mobile_or(
                Length::px(300.0),
                Length::trigger_height(0.5),
            )),
    );
    if let Some(scene) = scene {
        page.list(
            ListSpec::new(
                scene,
                ".weprovide__item",
                ".weprovide__path--dot",
                "weprovide__item--active",
            )
            .hit_boxes(".weprovide__item--icon")
            .axis(ListAxis::Horizontal)
            .mode(ListMode::Latching {
                clear_below: 0.224,
                fill_above: 0.8,
            })
            .marker_visibility(MarkerVisibility::ShownWhileProgressing)
            .marker_z_index_on_hit(-1),
        );
    }

    page.rise(".weprovide", ".weprovide__title", Length::px(100.0), Length::px(300.0));
}

fn testimonials(page: &mut Installer<'_, '_>) {
    page.rise(".testimonials", ".testimonials__title", Length::px(150.0), Length::trigger_height(0.5));
    page.rise(".testimonials", ".testimonials__text", Length::px(150.0), Length::trigger_height(1.0 / 1.5));
}

fn prefooter(page: &mut Installer<'_, '_>) {
    page.slide(".prefooter", ".prefooter__title", 1.0, Length::px(100.0), Length::px(300.0));
    page.slide(".prefooter", ".prefooter__text", 1.0, Length::px(100.0), Length::px(300.0));
    page.slide(".prefooter", ".prefooter__cta", 1.0, Length::px(0.0), Length::trigger_height(1.0 / 1.5));

    // The dot orbits on its own clock, blurred while it passes behind the
    // headline.
    page.timeline(
        TimelineSpec::new(
            Duration::from_millis(8_000),
            Tween::new(".prefooter__path--dot")
                .along(
                    MotionSpec::along(".prefooter__path--path")
                        .range(0.9, 1.9)
                        .auto_rotate(),
                )
                .ease(Ease::Power1InOut),
        )
        .and(ClassToggle::new(
            ".prefooter__path--dot",
            "prefooter__path--dot--blured",
            ClassWindow::between(0.55, 0.76),
        ))
        .repeat(Repeat::Infinite)
        .repeat_delay(Duration::from_millis(3_000)),
    );
}
