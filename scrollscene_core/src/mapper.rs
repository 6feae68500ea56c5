// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress-to-state mapping.
//!
//! An [`Action`] names its targets by selector. Before it can run it is
//! [resolved](ResolvedAction::resolve) against a [`Document`]: selectors
//! become element handles and motion paths become arc-length tables placed
//! in document space. Resolution happens at registration, on resize and
//! whenever a viewport class change swaps the action; [`ResolvedAction::apply`]
//! then runs on every progress change without touching layout.
//!
//! Tweens emit their style values on every call. Class toggles keep a
//! [`MapperState`] so that a class is added or removed exactly once per
//! crossing of the window edge.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Shape, Vec2};

use crate::action::{Action, ClassWindow, PropertyTween};
use crate::changes::{AppliedTranslations, FrameChanges, StyleValue};
use crate::document::{Document, ElementId};
use crate::ease::Ease;
use crate::error::SceneError;
use crate::motion::{MotionPath, MotionSpec};

/// Output state carried between [`ResolvedAction::apply`] calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapperState {
    /// Whether a toggled class is currently applied. Classes are assumed
    /// absent before the first application.
    pub class_present: bool,
}

#[derive(Clone, Debug)]
struct PlacedMotion {
    spec: MotionSpec,
    path: MotionPath,
    /// Top-left of the path's bounding box in its own user space.
    path_origin: Point,
    /// Top-left of the path element in document space.
    element_origin: Point,
    /// User-space to CSS pixel scale.
    scale: f64,
    /// Per target: the point of the target's layout box that sits on the
    /// path, in document space.
    anchors: Vec<Point>,
}

impl PlacedMotion {
    fn to_document(&self, p: Point) -> Point {
        self.element_origin + (p - self.path_origin) * self.scale
    }
}

#[derive(Clone, Debug)]
enum Resolved {
    Tween {
        properties: Vec<PropertyTween>,
        ease: Ease,
        motion: Option<PlacedMotion>,
    },
    Class {
        class: String,
        window: ClassWindow,
    },
}

/// An [`Action`] bound to concrete elements.
#[derive(Clone, Debug)]
pub struct ResolvedAction {
    targets: Vec<ElementId>,
    resolved: Resolved,
}

impl ResolvedAction {
    /// Binds `action` to the elements of `doc`.
    ///
    /// `applied` holds translations this engine has already presented, so
    /// that motion anchors are computed from layout boxes rather than from
    /// boxes displaced by a previous frame.
    ///
    /// # Errors
    ///
    /// - [`SceneError::MissingTarget`] if the target or path selector matches
    ///   nothing.
    /// - [`SceneError::LayoutNotReady`] if a motion path or a moving target
    ///   has no geometry yet.
    pub fn resolve(
        action: &Action,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
    ) -> Result<Self, SceneError> {
        let targets = doc.query_all(action.target());
        if targets.is_empty() {
            return Err(SceneError::MissingTarget {
                selector: action.target().into(),
            });
        }
        let resolved = match action {
            Action::Tween(tween) => {
                let motion = match &tween.motion {
                    Some(spec) => Some(place_motion(spec, &targets, doc, applied)?),
                    None => None,
                };
                Resolved::Tween {
                    properties: tween.properties.clone(),
                    ease: tween.ease,
                    motion,
                }
            }
            Action::ClassToggle(toggle) => Resolved::Class {
                class: toggle.class.clone(),
                window: toggle.window,
            },
        };
        Ok(Self { targets, resolved })
    }

    /// Elements this action writes to, in document order.
    #[must_use]
    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    /// Returns `true` if the action follows a motion path, whose placement
    /// changes with layout.
    #[must_use]
    pub fn follows_path(&self) -> bool {
        matches!(&self.resolved, Resolved::Tween { motion: Some(_), .. })
    }

    /// Maps `progress` to output.
    pub fn apply(&self, progress: f64, state: &mut MapperState, changes: &mut FrameChanges) {
        match &self.resolved {
            Resolved::Tween {
                properties,
                ease,
                motion,
            } => {
                let t = ease.apply(progress);
                for (i, &element) in self.targets.iter().enumerate() {
                    for p in properties {
                        changes.set_style(element, StyleValue::for_property(p.property, p.value_at(t)));
                    }
                    if let Some(m) = motion {
                        let sample = m.path.sample(m.spec.fraction_at(t));
                        let on_page = m.to_document(sample.point);
                        let translate = on_page - m.anchors[i];
                        let rotate = if m.spec.auto_rotate {
                            sample.angle.to_degrees()
                        } else {
                            0.0
                        };
                        changes.set_style(element, StyleValue::Transform { translate, rotate });
                    }
                }
            }
            Resolved::Class { class, window } => {
                let present = window.contains(progress);
                if present != state.class_present {
                    for &element in &self.targets {
                        changes.set_class(element, class, present);
                    }
                    state.class_present = present;
                }
            }
        }
    }

    /// Undoes persistent output before the action is replaced or dropped.
    ///
    /// Only classes are retracted; tweened inline styles stay where the last
    /// frame left them.
    pub fn retire(&self, state: &mut MapperState, changes: &mut FrameChanges) {
        if let Resolved::Class { class, .. } = &self.resolved
            && state.class_present
        {
            for &element in &self.targets {
                changes.remove_class(element, class);
            }
        }
        *state = MapperState::default();
    }
}

fn place_motion(
    spec: &MotionSpec,
    targets: &[ElementId],
    doc: &mut dyn Document,
    applied: &AppliedTranslations,
) -> Result<PlacedMotion, SceneError> {
    let not_ready = |selector: &str| SceneError::LayoutNotReady {
        selector: selector.into(),
    };
    let element = doc
        .query_all(&spec.path)
        .first()
        .copied()
        .ok_or_else(|| SceneError::MissingTarget {
            selector: spec.path.clone(),
        })?;
    let outline = doc.path(element).ok_or_else(|| not_ready(&spec.path))?;
    let element_rect = doc.document_rect(element).ok_or_else(|| not_ready(&spec.path))?;
    let path = MotionPath::new(&outline).ok_or_else(|| not_ready(&spec.path))?;

    let bbox = outline.bounding_box();
    let scale = if bbox.width() > 0.0 && element_rect.width() > 0.0 {
        element_rect.width() / bbox.width()
    } else if bbox.height() > 0.0 && element_rect.height() > 0.0 {
        element_rect.height() / bbox.height()
    } else {
        1.0
    };

    let mut anchors = Vec::with_capacity(targets.len());
    for &target in targets {
        let measured = doc.document_rect(target).ok_or_else(|| not_ready(&spec.path))?;
        let layout = applied.layout_rect(target, measured);
        let (ax, ay) = spec.align_origin;
        anchors.push(layout.origin() + Vec2::new(layout.width() * ax, layout.height() * ay));
    }

    Ok(PlacedMotion {
        spec: spec.clone(),
        path,
        path_origin: bbox.origin(),
        element_origin: element_rect.origin(),
        scale,
        anchors,
    })
}
