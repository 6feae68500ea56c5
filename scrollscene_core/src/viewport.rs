// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport classification.
//!
//! Every viewport-dependent decision in the engine goes through a single
//! [`ViewportClass`], derived from the window size by [`Breakpoints`].
//! Scene parameters that differ per class are stored as [`Responsive`]
//! tables and re-resolved whenever the class changes.
//!
//! Classification order:
//!
//! ```text
//!   width <= mobile_max_width     → Mobile
//!   width <= tablet_max_width     → Tablet
//!   height >= large_min_height    → Large
//!   otherwise                     → Desktop
//! ```

use core::fmt;

/// The inner size of the browser window, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    /// Window inner width.
    pub width: f64,
    /// Window inner height.
    pub height: f64,
}

impl ViewportSize {
    /// Creates a viewport size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when the width is at most `max_width`
    /// (`screen and (max-width: …px)`).
    #[inline]
    #[must_use]
    pub fn is_at_most(self, max_width: f64) -> bool {
        self.width <= max_width
    }

    /// Returns `true` when the width is at least `min_width`
    /// (`(min-width: …px)`).
    #[inline]
    #[must_use]
    pub fn is_at_least(self, min_width: f64) -> bool {
        self.width >= min_width
    }
}

/// Coarse responsive bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewportClass {
    /// Phones.
    Mobile,
    /// Tablets and narrow windows.
    Tablet,
    /// Regular desktop windows.
    Desktop,
    /// Desktop windows on very tall displays.
    Large,
}

impl ViewportClass {
    /// All classes, narrowest first.
    pub const ALL: [Self; 4] = [Self::Mobile, Self::Tablet, Self::Desktop, Self::Large];

    /// Returns `true` for [`Desktop`](Self::Desktop) and [`Large`](Self::Large).
    #[inline]
    #[must_use]
    pub const fn is_desktop_like(self) -> bool {
        matches!(self, Self::Desktop | Self::Large)
    }

    /// Short lowercase label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width and height thresholds that split viewports into classes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    /// Widths up to and including this value are [`ViewportClass::Mobile`].
    pub mobile_max_width: f64,
    /// Widths up to and including this value are [`ViewportClass::Tablet`].
    pub tablet_max_width: f64,
    /// Wider viewports at least this tall are [`ViewportClass::Large`].
    pub large_min_height: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_width: 700.0,
            tablet_max_width: 1000.0,
            large_min_height: 1439.0,
        }
    }
}

impl Breakpoints {
    /// Classifies a viewport size.
    #[must_use]
    pub fn classify(&self, size: ViewportSize) -> ViewportClass {
        if size.width <= self.mobile_max_width {
            ViewportClass::Mobile
        } else if size.width <= self.tablet_max_width {
            ViewportClass::Tablet
        } else if size.height >= self.large_min_height {
            ViewportClass::Large
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Tracks the current class across resizes.
#[derive(Clone, Debug)]
pub struct ViewportClassifier {
    breakpoints: Breakpoints,
    size: ViewportSize,
    class: ViewportClass,
}

impl ViewportClassifier {
    /// Classifies the initial viewport.
    #[must_use]
    pub fn new(breakpoints: Breakpoints, size: ViewportSize) -> Self {
        Self {
            class: breakpoints.classify(size),
            breakpoints,
            size,
        }
    }

    /// Returns the breakpoints in use.
    #[must_use]
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Returns the current class.
    #[must_use]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Returns the last observed size.
    #[must_use]
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Records a new viewport size.
    ///
    /// Returns the previous class if the class changed.
    pub fn observe(&mut self, size: ViewportSize) -> Option<ViewportClass> {
        self.size = size;
        let class = self.breakpoints.classify(size);
        if class == self.class {
            return None;
        }
        let previous = self.class;
        self.class = class;
        Some(previous)
    }
}

/// One value per [`ViewportClass`].
///
/// Any `T` converts into a `Responsive<T>` holding that value for every
/// class, so builders can accept plain values and per-class tables alike.
#[derive(Clone, Debug, PartialEq)]
pub struct Responsive<T> {
    mobile: T,
    tablet: T,
    desktop: T,
    large: T,
}

impl<T> Responsive<T> {
    /// Creates a table from one value per class.
    #[must_use]
    pub const fn new(mobile: T, tablet: T, desktop: T, large: T) -> Self {
        Self {
            mobile,
            tablet,
            desktop,
            large,
        }
    }

    /// Returns the value for `class`.
    #[must_use]
    pub const fn get(&self, class: ViewportClass) -> &T {
        match class {
            ViewportClass::Mobile => &self.mobile,
            ViewportClass::Tablet => &self.tablet,
            ViewportClass::Desktop => &self.desktop,
            ViewportClass::Large => &self.large,
        }
    }

    /// Replaces the value for `class`.
    #[must_use]
    pub fn with(mut self, class: ViewportClass, value: T) -> Self {
        match class {
            ViewportClass::Mobile => self.mobile = value,
            ViewportClass::Tablet => self.tablet = value,
            ViewportClass::Desktop => self.desktop = value,
            ViewportClass::Large => self.large = value,
        }
        self
    }

    /// Applies `f` to every entry.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        Responsive {
            mobile: f(self.mobile),
            tablet: f(self.tablet),
            desktop: f(self.desktop),
            large: f(self.large),
        }
    }

    /// Iterates over `(class, value)` pairs, narrowest first.
    pub fn iter(&self) -> impl Iterator<Item = (ViewportClass, &T)> {
        ViewportClass::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl<T: Clone> Responsive<T> {
    /// Uses the same value for every class.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self {
            mobile: value.clone(),
            tablet: value.clone(),
            desktop: value.clone(),
            large: value,
        }
    }

    /// Uses `narrow` on mobile and tablet, `wide` on desktop and large.
    #[must_use]
    pub fn narrow_wide(narrow: T, wide: T) -> Self {
        Self {
            mobile: narrow.clone(),
            tablet: narrow,
            desktop: wide.clone(),
            large: wide,
        }
    }

    /// Uses `mobile` on mobile and `rest` everywhere else.
    #[must_use]
    pub fn mobile_or(mobile: T, rest: T) -> Self {
        Self {
            mobile,
            tablet: rest.clone(),
            desktop: rest.clone(),
            large: rest,
        }
    }
}

impl<T: Clone> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::all(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_width_then_height() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(ViewportSize::new(375.0, 812.0)), ViewportClass::Mobile);
        assert_eq!(bp.classify(ViewportSize::new(700.0, 900.0)), ViewportClass::Mobile);
        assert_eq!(bp.classify(ViewportSize::new(701.0, 900.0)), ViewportClass::Tablet);
        assert_eq!(bp.classify(ViewportSize::new(1000.0, 1600.0)), ViewportClass::Tablet);
        assert_eq!(bp.classify(ViewportSize::new(1001.0, 900.0)), ViewportClass::Desktop);
        assert_eq!(bp.classify(ViewportSize::new(2560.0, 1440.0)), ViewportClass::Large);
    }

    #[test]
    fn classification_is_idempotent_without_resize() {
        let bp = Breakpoints::default();
        let size = ViewportSize::new(1280.0, 800.0);
        assert_eq!(bp.classify(size), bp.classify(size));

        let mut classifier = ViewportClassifier::new(bp, size);
        assert_eq!(classifier.observe(size), None);
        assert_eq!(classifier.observe(size), None);
        assert_eq!(classifier.class(), ViewportClass::Desktop);
    }

    #[test]
    fn resize_reports_previous_class() {
        let mut classifier =
            ViewportClassifier::new(Breakpoints::default(), ViewportSize::new(1280.0, 800.0));
        let previous = classifier.observe(ViewportSize::new(390.0, 800.0));
        assert_eq!(previous, Some(ViewportClass::Desktop));
        assert_eq!(classifier.class(), ViewportClass::Mobile);
        assert_eq!(classifier.size(), ViewportSize::new(390.0, 800.0));
    }

    #[test]
    fn custom_width_queries() {
        let size = ViewportSize::new(1175.0, 700.0);
        assert!(size.is_at_least(1175.0));
        assert!(size.is_at_most(1400.0));
        assert!(!size.is_at_most(1000.0));
    }

    #[test]
    fn responsive_tables() {
        let r = Responsive::mobile_or(100.0, 300.0).with(ViewportClass::Large, 400.0);
        assert_eq!(*r.get(ViewportClass::Mobile), 100.0);
        assert_eq!(*r.get(ViewportClass::Tablet), 300.0);
        assert_eq!(*r.get(ViewportClass::Desktop), 300.0);
        assert_eq!(*r.get(ViewportClass::Large), 400.0);

        let nw: Responsive<&str> = Responsive::narrow_wide("path3", "path1");
        assert_eq!(*nw.get(ViewportClass::Tablet), "path3");
        assert_eq!(*nw.get(ViewportClass::Large), "path1");

        let doubled = Responsive::from(2).map(|v| v * 2);
        assert!(doubled.iter().all(|(_, v)| *v == 4));
    }
}
