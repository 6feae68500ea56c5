// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame output.
//!
//! [`FrameChanges`] is the only thing the engine produces. It lists class
//! list mutations and inline style assignments in the order the scenes that
//! caused them were registered; a [`Presenter`](crate::backend::Presenter)
//! applies them verbatim.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::action::TweenProperty;
use crate::document::ElementId;

/// Whether a class is added or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassOp {
    /// `classList.add`.
    Add,
    /// `classList.remove`.
    Remove,
}

/// A class list mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassChange {
    /// Element to mutate.
    pub element: ElementId,
    /// Class name, without the leading dot.
    pub class: String,
    /// Add or remove.
    pub op: ClassOp,
}

/// An inline style value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    /// `left: {px}px`.
    Left(f64),
    /// `top: {px}px`.
    Top(f64),
    /// `opacity: {value}`.
    Opacity(f64),
    /// `z-index: {value}`.
    ZIndex(i32),
    /// `transform: translate({x}px, {y}px) rotate({deg}deg)`.
    Transform {
        /// Translation in pixels.
        translate: Vec2,
        /// Rotation in degrees.
        rotate: f64,
    },
}

impl StyleValue {
    /// Builds the value for a tweened property.
    #[must_use]
    pub const fn for_property(property: TweenProperty, value: f64) -> Self {
        match property {
            TweenProperty::Left => Self::Left(value),
            TweenProperty::Top => Self::Top(value),
            TweenProperty::Opacity => Self::Opacity(value),
        }
    }

    /// CSS property name.
    #[must_use]
    pub const fn property_name(&self) -> &'static str {
        match self {
            Self::Left(_) => "left",
            Self::Top(_) => "top",
            Self::Opacity(_) => "opacity",
            Self::ZIndex(_) => "z-index",
            Self::Transform { .. } => "transform",
        }
    }
}

/// An inline style assignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleChange {
    /// Element to style.
    pub element: ElementId,
    /// Property and value.
    pub value: StyleValue,
}

/// Everything a single frame changed.
#[derive(Clone, Debug, Default)]
pub struct FrameChanges {
    /// Class list mutations, in emission order.
    pub classes: Vec<ClassChange>,
    /// Inline style assignments, in emission order.
    pub styles: Vec<StyleChange>,
}

impl FrameChanges {
    /// Clears both lists, keeping their allocations.
    pub fn clear(&mut self) {
        self.classes.clear();
        self.styles.clear();
    }

    /// Returns `true` if there is nothing to apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.styles.is_empty()
    }

    /// Queues a class addition.
    pub fn add_class(&mut self, element: ElementId, class: &str) {
        self.classes.push(ClassChange {
            element,
            class: class.into(),
            op: ClassOp::Add,
        });
    }

    /// Queues a class removal.
    pub fn remove_class(&mut self, element: ElementId, class: &str) {
        self.classes.push(ClassChange {
            element,
            class: class.into(),
            op: ClassOp::Remove,
        });
    }

    /// Queues a class addition or removal.
    pub fn set_class(&mut self, element: ElementId, class: &str, present: bool) {
        if present {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Queues a style assignment.
    pub fn set_style(&mut self, element: ElementId, value: StyleValue) {
        self.styles.push(StyleChange { element, value });
    }

    /// Returns the last translation queued for `element` in this frame.
    #[must_use]
    pub fn queued_translation(&self, element: ElementId) -> Option<Vec2> {
        self.styles.iter().rev().find_map(|s| match s.value {
            StyleValue::Transform { translate, .. } if s.element == element => Some(translate),
            _ => None,
        })
    }
}

/// Translations the presenter has already applied, per element.
///
/// `getBoundingClientRect` reports boxes *after* transforms. Geometry reads
/// subtract the applied translation to recover the layout box, and add the
/// translation queued for the current frame to predict where the element
/// will be once presented.
#[derive(Clone, Debug, Default)]
pub struct AppliedTranslations {
    applied: BTreeMap<ElementId, Vec2>,
}

impl AppliedTranslations {
    /// Records every translation in a presented frame.
    pub fn record(&mut self, changes: &FrameChanges) {
        for style in &changes.styles {
            if let StyleValue::Transform { translate, .. } = style.value {
                self.applied.insert(style.element, translate);
            }
        }
    }

    /// Translation currently applied to `element`.
    #[must_use]
    pub fn get(&self, element: ElementId) -> Vec2 {
        self.applied.get(&element).copied().unwrap_or(Vec2::ZERO)
    }

    /// Converts a measured (transformed) box back to its layout box.
    #[must_use]
    pub fn layout_rect(&self, element: ElementId, measured: Rect) -> Rect {
        measured - self.get(element)
    }

    /// Predicts the box of `element` once `pending` has been presented.
    #[must_use]
    pub fn predicted_rect(&self, element: ElementId, measured: Rect, pending: &FrameChanges) -> Rect {
        match pending.queued_translation(element) {
            Some(next) => measured + (next - self.get(element)),
            None => measured,
        }
    }

    /// Forgets everything, e.g. after teardown.
    pub fn clear(&mut self) {
        self.applied.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_class_picks_op() {
        let mut changes = FrameChanges::default();
        changes.set_class(ElementId(1), "card--active", true);
        changes.set_class(ElementId(1), "card--active", false);
        assert_eq!(changes.classes[0].op, ClassOp::Add);
        assert_eq!(changes.classes[1].op, ClassOp::Remove);
        assert!(!changes.is_empty());

        changes.clear();
        assert!(changes.is_empty());
    }

    #[test]
    fn style_values_name_their_property() {
        assert_eq!(StyleValue::for_property(TweenProperty::Top, 4.0), StyleValue::Top(4.0));
        assert_eq!(StyleValue::Opacity(1.0).property_name(), "opacity");
        assert_eq!(
            StyleValue::Transform {
                translate: Vec2::ZERO,
                rotate: 0.0
            }
            .property_name(),
            "transform"
        );
    }

    #[test]
    fn applied_translations_undo_and_predict() {
        let dot = ElementId(3);
        let mut frame = FrameChanges::default();
        frame.set_style(
            dot,
            StyleValue::Transform {
                translate: Vec2::new(0.0, 50.0),
                rotate: 0.0,
            },
        );
        let mut applied = AppliedTranslations::default();
        applied.record(&frame);

        let measured = Rect::new(0.0, 150.0, 10.0, 160.0);
        assert_eq!(applied.layout_rect(dot, measured), Rect::new(0.0, 100.0, 10.0, 110.0));

        let mut next = FrameChanges::default();
        next.set_style(
            dot,
            StyleValue::Transform {
                translate: Vec2::new(0.0, 80.0),
                rotate: 0.0,
            },
        );
        assert_eq!(
            applied.predicted_rect(dot, measured, &next),
            Rect::new(0.0, 180.0, 10.0, 190.0)
        );
        assert_eq!(applied.predicted_rect(ElementId(9), measured, &next), measured);
    }
}
