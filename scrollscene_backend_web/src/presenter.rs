// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applies [`FrameChanges`] to live DOM elements.

use alloc::format;
use alloc::string::String;

use scrollscene_core::backend::Presenter;
use scrollscene_core::changes::{ClassOp, FrameChanges, StyleValue};
use wasm_bindgen::JsCast as _;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement};

use crate::document::DomDocument;

impl Presenter for DomDocument {
    fn apply(&mut self, changes: &FrameChanges) {
        for change in &changes.classes {
            let Some(el) = self.element(change.element) else {
                continue;
            };
            let list = el.class_list();
            let _ = match change.op {
                ClassOp::Add => list.add_1(&change.class),
                ClassOp::Remove => list.remove_1(&change.class),
            };
        }
        for change in &changes.styles {
            let Some(style) = self.element(change.element).and_then(inline_style) else {
                continue;
            };
            let _ = style.set_property(change.value.property_name(), &css_value(change.value));
        }
    }
}

/// The inline style of an HTML or SVG element.
fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(SvgElement::style)
}

/// Formats a style value for `CSSStyleDeclaration.setProperty`.
pub(crate) fn css_value(value: StyleValue) -> String {
    match value {
        StyleValue::Left(px) | StyleValue::Top(px) => format!("{px}px"),
        StyleValue::Opacity(v) => format!("{v}"),
        StyleValue::ZIndex(z) => format!("{z}"),
        StyleValue::Transform { translate, rotate } => {
            format!(
                "translate({}px, {}px) rotate({rotate}deg)",
                translate.x, translate.y
            )
        }
    }
}
