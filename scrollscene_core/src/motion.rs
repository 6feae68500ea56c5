// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion along SVG paths.
//!
//! A [`MotionSpec`] names an SVG path element and the portion of it to
//! travel. At measure time the path outline is turned into a [`MotionPath`],
//! which is sampled by *arc length* so that progress maps to constant speed
//! along the curve regardless of how the path was authored.
//!
//! Fractions outside `0.0..=1.0` wrap around, so a spec with
//! `start = 0.9, end = 1.9` travels one full loop starting just before the
//! path's end point.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathSeg, Point, Vec2};

/// Arc-length solver accuracy, in path units.
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Declarative motion along a path element.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionSpec {
    /// Selector of the SVG path element.
    pub path: String,
    /// Path fraction at progress 0.
    pub start: f64,
    /// Path fraction at progress 1.
    pub end: f64,
    /// Point of the moving element that sits on the path, as fractions of its
    /// width and height.
    pub align_origin: (f64, f64),
    /// Rotate the element to follow the path tangent.
    pub auto_rotate: bool,
}

impl MotionSpec {
    /// Travels the whole path, centered on it, without rotation.
    #[must_use]
    pub fn along(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            start: 0.0,
            end: 1.0,
            align_origin: (0.5, 0.5),
            auto_rotate: false,
        }
    }

    /// Sets the start and end fractions.
    #[must_use]
    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Enables tangent-following rotation.
    #[must_use]
    pub fn auto_rotate(mut self) -> Self {
        self.auto_rotate = true;
        self
    }

    /// Returns the path fraction for eased progress `t`.
    #[must_use]
    pub fn fraction_at(&self, t: f64) -> f64 {
        self.start + (self.end - self.start) * t
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.align_origin.0.is_finite()
            && self.align_origin.1.is_finite()
            && !self.path.is_empty()
    }
}

/// A point on a [`MotionPath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Position in the path's coordinate space.
    pub point: Point,
    /// Tangent direction in radians.
    pub angle: f64,
}

#[derive(Clone, Debug)]
struct ArcSegment {
    seg: PathSeg,
    start: f64,
    length: f64,
}

/// An arc-length parametrized path outline.
#[derive(Clone, Debug)]
pub struct MotionPath {
    segments: Vec<ArcSegment>,
    length: f64,
}

impl MotionPath {
    /// Builds a motion path. Returns `None` for paths of zero length.
    #[must_use]
    pub fn new(path: &BezPath) -> Option<Self> {
        let mut segments = Vec::new();
        let mut length = 0.0;
        for seg in path.segments() {
            let seg_len = seg.arclen(ARCLEN_ACCURACY);
            if !seg_len.is_finite() || seg_len <= 0.0 {
                continue;
            }
            segments.push(ArcSegment {
                seg,
                start: length,
                length: seg_len,
            });
            length += seg_len;
        }
        (length > 0.0).then_some(Self { segments, length })
    }

    /// Total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Samples the path at `fraction` of its length, wrapping fractions
    /// outside `0.0..=1.0`.
    #[must_use]
    pub fn sample(&self, fraction: f64) -> MotionSample {
        let target = wrap_fraction(fraction) * self.length;
        let idx = self
            .segments
            .partition_point(|s| s.start + s.length < target)
            .min(self.segments.len() - 1);
        let arc = &self.segments[idx];
        let local = (target - arc.start).clamp(0.0, arc.length);
        let t = arc.seg.inv_arclen(local, ARCLEN_ACCURACY);
        let point = arc.seg.eval(t);
        let tangent = arc.seg.to_cubic().deriv().eval(t).to_vec2();
        let angle = if tangent == Vec2::ZERO {
            0.0
        } else {
            tangent.atan2()
        };
        MotionSample { point, angle }
    }
}

/// Maps any finite fraction into `0.0..=1.0`; exact positive integers above
/// zero map to `1.0` so that `end = 1.0` stays at the end point.
fn wrap_fraction(fraction: f64) -> f64 {
    if !fraction.is_finite() {
        return 0.0;
    }
    if (0.0..=1.0).contains(&fraction) {
        return fraction;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the intent; path fractions are small"
    )]
    let whole = fraction as i64 as f64;
    let mut rest = fraction - whole;
    if rest < 0.0 {
        rest += 1.0;
    }
    if rest == 0.0 && fraction > 0.0 { 1.0 } else { rest }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> BezPath {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((100.0, 0.0));
        p.line_to((100.0, 100.0));
        p.line_to((0.0, 100.0));
        p.close_path();
        p
    }

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < 0.01, "{a:?} != {b:?}");
    }

    #[test]
    fn endpoints() {
        let mut p = BezPath::new();
        p.move_to((10.0, 20.0));
        p.line_to((110.0, 20.0));
        let path = MotionPath::new(&p).unwrap();
        assert!((path.length() - 100.0).abs() < 0.01, "length");
        assert_near(path.sample(0.0).point, Point::new(10.0, 20.0));
        assert_near(path.sample(1.0).point, Point::new(110.0, 20.0));
        assert_near(path.sample(0.25).point, Point::new(35.0, 20.0));
    }

    #[test]
    fn samples_by_arc_length_across_segments() {
        let path = MotionPath::new(&square()).unwrap();
        assert!((path.length() - 400.0).abs() < 0.01, "closed square perimeter");
        assert_near(path.sample(0.25).point, Point::new(100.0, 0.0));
        assert_near(path.sample(0.375).point, Point::new(100.0, 50.0));
        assert_near(path.sample(0.5).point, Point::new(100.0, 100.0));
    }

    #[test]
    fn fractions_wrap_on_loops() {
        let path = MotionPath::new(&square()).unwrap();
        assert_near(path.sample(1.25).point, path.sample(0.25).point);
        assert_near(path.sample(-0.25).point, path.sample(0.75).point);
        assert_near(path.sample(2.0).point, path.sample(1.0).point);
    }

    #[test]
    fn tangent_angle_follows_direction() {
        let path = MotionPath::new(&square()).unwrap();
        assert!(path.sample(0.1).angle.abs() < 1e-6, "heading +x");
        let down = path.sample(0.4).angle;
        assert!((down - core::f64::consts::FRAC_PI_2).abs() < 1e-6, "heading +y");
    }

    #[test]
    fn degenerate_paths_are_rejected() {
        let mut p = BezPath::new();
        p.move_to((5.0, 5.0));
        assert!(MotionPath::new(&p).is_none());
    }

    #[test]
    fn spec_maps_progress_to_fraction() {
        let spec = MotionSpec::along(".prefooter__path--path").range(0.9, 1.9);
        assert!((spec.fraction_at(0.0) - 0.9).abs() < 1e-12, "start");
        assert!((spec.fraction_at(0.5) - 1.4).abs() < 1e-12, "middle");
        assert!(spec.is_valid());
    }
}
