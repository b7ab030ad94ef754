// Copyright 2026 the Wayline Authors
// SPDX-License-Identifier: Apache-2.0

//! Pure geometric predicates over points and line segments.
//!
//! Everything here is a side-effect-free function on `kurbo` types. The
//! only failure mode is a non-finite input coordinate, which is rejected
//! with [`EditError::InvalidGeometry`] before any arithmetic runs. Hot
//! paths that have already validated their input (the spatial index, the
//! tools) use the `*_raw` variants directly.

use crate::error::EditError;
use kurbo::{Line, Point};

/// Tolerance for parallel / degenerate segment checks.
const EPSILON: f64 = 1e-9;

/// Check that both coordinates of a point are finite.
pub fn ensure_finite(p: Point) -> Result<(), EditError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(EditError::InvalidGeometry)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> Result<f64, EditError> {
    ensure_finite(a)?;
    ensure_finite(b)?;
    Ok(a.distance(b))
}

/// Distance from a point to the closest point on a segment.
pub fn point_segment_distance(p: Point, seg: Line) -> Result<f64, EditError> {
    ensure_finite(p)?;
    ensure_finite(seg.p0)?;
    ensure_finite(seg.p1)?;
    Ok(point_segment_distance_raw(p, seg))
}

/// Intersection point of two segments, if they cross.
///
/// Parallel, collinear, and merely-touching-at-extension cases all
/// return `None`; only a proper crossing within both segments yields a
/// point. Endpoint-on-endpoint contact counts as a crossing.
pub fn segment_intersection(s1: Line, s2: Line) -> Result<Option<Point>, EditError> {
    for p in [s1.p0, s1.p1, s2.p0, s2.p1] {
        ensure_finite(p)?;
    }

    let d1 = s1.p1 - s1.p0;
    let d2 = s2.p1 - s2.p0;
    let cross = d1.x * d2.y - d1.y * d2.x;

    // Parallel segments never produce a single crossing point.
    if cross.abs() < EPSILON {
        return Ok(None);
    }

    let d = s2.p0 - s1.p0;
    let t1 = (d.x * d2.y - d.y * d2.x) / cross;
    let t2 = (d.x * d1.y - d.y * d1.x) / cross;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Ok(Some(s1.p0 + d1 * t1))
    } else {
        Ok(None)
    }
}

/// Project a point onto a segment.
///
/// Returns the clamped parametric position `t` in `[0, 1]` and the
/// nearest point on the segment. Degenerate (zero-length) segments
/// project everything onto their start point.
pub fn project_onto_segment(p: Point, seg: Line) -> Result<(f64, Point), EditError> {
    ensure_finite(p)?;
    ensure_finite(seg.p0)?;
    ensure_finite(seg.p1)?;
    Ok(project_onto_segment_raw(p, seg))
}

// ===== Unchecked variants =====

pub(crate) fn point_segment_distance_raw(p: Point, seg: Line) -> f64 {
    let (_, nearest) = project_onto_segment_raw(p, seg);
    p.distance(nearest)
}

pub(crate) fn project_onto_segment_raw(p: Point, seg: Line) -> (f64, Point) {
    let d = seg.p1 - seg.p0;
    let len_sq = d.hypot2();
    if len_sq < EPSILON {
        return (0.0, seg.p0);
    }

    let v = p - seg.p0;
    let t = ((v.x * d.x + v.y * d.y) / len_sq).clamp(0.0, 1.0);
    (t, seg.p0 + d * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).unwrap();
        assert_eq!(d, 5.0);
    }

    #[test]
    fn distance_rejects_non_finite() {
        let err = distance(Point::new(f64::NAN, 0.0), Point::ORIGIN);
        assert_eq!(err, Err(EditError::InvalidGeometry));

        let err = distance(Point::ORIGIN, Point::new(0.0, f64::INFINITY));
        assert_eq!(err, Err(EditError::InvalidGeometry));
    }

    #[test]
    fn point_segment_distance_inside_projection() {
        let seg = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let d = point_segment_distance(Point::new(5.0, 3.0), seg).unwrap();
        assert_eq!(d, 3.0);
    }

    #[test]
    fn point_segment_distance_clamps_to_endpoints() {
        let seg = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let d = point_segment_distance(Point::new(14.0, 3.0), seg).unwrap();
        assert_eq!(d, 5.0);
    }

    #[test]
    fn point_segment_distance_degenerate_segment() {
        let seg = Line::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0));
        let d = point_segment_distance(Point::new(2.0, 6.0), seg).unwrap();
        assert_eq!(d, 4.0);
    }

    #[test]
    fn segments_cross() {
        let s1 = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let s2 = Line::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let hit = segment_intersection(s1, s2).unwrap();
        assert_eq!(hit, Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn parallel_segments_do_not_cross() {
        let s1 = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let s2 = Line::new(Point::new(0.0, 1.0), Point::new(10.0, 1.0));
        assert_eq!(segment_intersection(s1, s2).unwrap(), None);
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        let s1 = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let s2 = Line::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
        assert_eq!(segment_intersection(s1, s2).unwrap(), None);
    }

    #[test]
    fn intersection_rejects_non_finite() {
        let s1 = Line::new(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0));
        let s2 = Line::new(Point::new(0.0, 1.0), Point::new(1.0, 0.0));
        assert_eq!(segment_intersection(s1, s2), Err(EditError::InvalidGeometry));
    }

    #[test]
    fn projection_parametric_position() {
        let seg = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let (t, nearest) = project_onto_segment(Point::new(2.5, 7.0), seg).unwrap();
        assert_eq!(t, 0.25);
        assert_eq!(nearest, Point::new(2.5, 0.0));
    }
}
