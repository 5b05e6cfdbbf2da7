// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quick-reject and analytic helpers shared by every pairwise test
//!
//! All "on the boundary" comparisons use the absolute [`EPSILON`] and count
//! as touching. Divisions are guarded so degenerate inputs (zero-length
//! segments, colinear triangles, concentric circles) fall back to a
//! well-defined answer instead of producing NaN.

use super::{Circle, Obb, Sector};
use crate::utils::math::{
    clamp, cross, direction_deg, rotate_about, within_radius, Pos, DEGENERATE_EPSILON, EPSILON,
};

/// Strict disc containment: `|p - c|² < r²`
pub fn point_in_circle(p: &Pos, circle: &Circle) -> bool {
    nalgebra::distance_squared(p, &circle.pos) < circle.radius * circle.radius
}

/// Point vs sector query semantics: strictly inside the disc, and the
/// direction from the apex lies in the angular range. The apex itself is
/// inside.
pub fn point_in_sector(p: &Pos, sector: &Sector) -> bool {
    let dsq = nalgebra::distance_squared(p, &sector.pos);
    if dsq >= sector.radius * sector.radius {
        return false;
    }
    dsq <= EPSILON * EPSILON || sector.contains_angle(direction_deg(&sector.pos, p))
}

/// Boundary-inclusive sector containment used by composite tests
pub fn point_in_sector_inclusive(p: &Pos, sector: &Sector) -> bool {
    let dsq = nalgebra::distance_squared(p, &sector.pos);
    if !within_radius(dsq, sector.radius) {
        return false;
    }
    dsq <= EPSILON * EPSILON || sector.contains_angle(direction_deg(&sector.pos, p))
}

/// Rotate into the rectangle's local frame and compare against half extents
pub fn point_in_rectangle(p: &Pos, rect: &Obb) -> bool {
    let local = rotate_about(p, &rect.pos, -rect.angle);
    let (hw, hh) = rect.half_extents();
    (local.x - rect.pos.x).abs() <= hw + EPSILON && (local.y - rect.pos.y).abs() <= hh + EPSILON
}

/// Barycentric point-in-triangle test, boundary inclusive.
///
/// A colinear triangle has no interior; the point must then lie on one of
/// its edges.
pub fn point_in_triangle(p: &Pos, a: &Pos, b: &Pos, c: &Pos) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    // relative to the edge lengths so the guard does not depend on scale
    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() <= DEGENERATE_EPSILON * (dot00 * dot11) {
        return point_on_segment(p, a, b) || point_on_segment(p, b, c) || point_on_segment(p, c, a);
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;
    u >= -EPSILON && v >= -EPSILON && u + v <= 1.0 + EPSILON
}

/// Colinear within [`EPSILON`] and projected inside `[a, b]`
pub fn point_on_segment(p: &Pos, a: &Pos, b: &Pos) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.norm_squared();
    if len_sq <= DEGENERATE_EPSILON {
        return ap.norm_squared() <= EPSILON * EPSILON;
    }
    if cross(&ab, &ap).abs() > EPSILON {
        return false;
    }
    let t = ap.dot(&ab);
    (0.0..=len_sq).contains(&t)
}

/// Clamped projection parameter of `p` onto `[a, b]`, `None` for a
/// zero-length segment
fn projection_param(p: &Pos, a: &Pos, b: &Pos) -> Option<f64> {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return None;
    }
    Some(clamp((p - a).dot(&ab) / len_sq, 0.0, 1.0))
}

/// Closest point to `p` on the closed segment `[a, b]`
pub fn closest_point_on_segment(p: &Pos, a: &Pos, b: &Pos) -> Pos {
    match projection_param(p, a, b) {
        Some(t) => a + (b - a) * t,
        None => *a,
    }
}

/// Squared distance from `p` to the closed segment `[a, b]`
pub fn dist_point_to_segment_sq(p: &Pos, a: &Pos, b: &Pos) -> f64 {
    nalgebra::distance_squared(p, &closest_point_on_segment(p, a, b))
}

/// Signed orientation of `c` relative to the directed line `a -> b`
pub fn orientation(a: &Pos, b: &Pos, c: &Pos) -> f64 {
    (b.y - a.y) * (c.x - a.x) - (b.x - a.x) * (c.y - a.y)
}

/// `c` lies in the bounding box of `[a, b]` (colinearity is the caller's job)
pub fn on_segment(a: &Pos, b: &Pos, c: &Pos) -> bool {
    c.x >= a.x.min(b.x) - EPSILON
        && c.x <= a.x.max(b.x) + EPSILON
        && c.y >= a.y.min(b.y) - EPSILON
        && c.y <= a.y.max(b.y) + EPSILON
}

/// Orientation-based segment/segment test including colinear overlap
pub fn segment_intersects_segment(p1: &Pos, p2: &Pos, q1: &Pos, q2: &Pos) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    let colinear = |o: f64| o.abs() <= EPSILON;
    if (colinear(o1) && on_segment(p1, p2, q1))
        || (colinear(o2) && on_segment(p1, p2, q2))
        || (colinear(o3) && on_segment(q1, q2, p1))
        || (colinear(o4) && on_segment(q1, q2, p2))
    {
        return true;
    }

    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// The closed segment comes within `radius` of `center`
pub fn segment_intersects_circle(a: &Pos, b: &Pos, center: &Pos, radius: f64) -> bool {
    within_radius(dist_point_to_segment_sq(center, a, b), radius)
}

/// Points where the closed segment `[a, b]` meets the circle outline.
///
/// A grazing segment (within [`EPSILON`] of tangent) yields its closest
/// point. A zero-length segment yields nothing.
pub fn segment_circle_points(a: &Pos, b: &Pos, center: &Pos, radius: f64) -> Vec<Pos> {
    let d = b - a;
    let f = a - center;
    let qa = d.norm_squared();
    if qa <= DEGENERATE_EPSILON {
        return Vec::new();
    }
    let qb = 2.0 * f.dot(&d);
    let qc = f.norm_squared() - radius * radius;
    let disc = qb * qb - 4.0 * qa * qc;

    if disc < 0.0 {
        let closest = closest_point_on_segment(center, a, b);
        let dist = nalgebra::distance(&closest, center);
        return if (dist - radius).abs() <= EPSILON {
            vec![closest]
        } else {
            Vec::new()
        };
    }

    let root = disc.sqrt();
    let mut points = Vec::with_capacity(2);
    for t in [(-qb - root) / (2.0 * qa), (-qb + root) / (2.0 * qa)] {
        if (-EPSILON..=1.0 + EPSILON).contains(&t) {
            points.push(a + d * clamp(t, 0.0, 1.0));
        }
    }
    points
}

/// Analytic intersection points of two circle outlines: 0, 1 (tangent) or 2.
///
/// Concentric circles return no points, even when they coincide.
pub fn circle_circle_intersections(c1: &Pos, r1: f64, c2: &Pos, r2: f64) -> Vec<Pos> {
    let delta = c2 - c1;
    let d = delta.norm();
    if d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON || d < DEGENERATE_EPSILON {
        return Vec::new();
    }

    // distance from c1 to the chord midpoint along the center line
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let mid = c1 + delta * (a / d);
    let offset = nalgebra::Vector2::new(-delta.y, delta.x) * (h / d);

    if h == 0.0 {
        vec![mid]
    } else {
        vec![mid + offset, mid - offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Pos {
        Pos::new(x, y)
    }

    #[test]
    fn test_point_in_circle_is_strict() {
        let c = Circle::new(0.0, 0.0, 1.0);
        assert!(point_in_circle(&p(0.5, 0.5), &c));
        assert!(!point_in_circle(&p(1.0, 0.0), &c));
    }

    #[test]
    fn test_point_in_sector() {
        let s = Sector::new(0.0, 0.0, 5.0, 0.0, 90.0);
        assert!(point_in_sector(&p(1.0, 1.0), &s));
        assert!(!point_in_sector(&p(-1.0, 1.0), &s));
        assert!(!point_in_sector(&p(4.0, 4.0), &s));
        assert!(point_in_sector(&p(0.0, 0.0), &s));
    }

    #[test]
    fn test_point_in_wrapping_sector() {
        let s = Sector::new(0.0, 0.0, 5.0, 300.0, 30.0);
        assert!(point_in_sector(&p(2.0, -0.5), &s));
        assert!(point_in_sector(&p(2.0, 0.5), &s));
        assert!(!point_in_sector(&p(-2.0, 0.0), &s));
    }

    #[test]
    fn test_point_in_rotated_rectangle() {
        let r = Obb::new(0.0, 0.0, 4.0, 1.0, 45.0);
        assert!(point_in_rectangle(&p(1.0, 1.0), &r));
        assert!(!point_in_rectangle(&p(1.0, -1.0), &r));
        // boundary counts
        assert!(point_in_rectangle(&p(2.0, 0.5), &Obb::new(0.0, 0.0, 4.0, 1.0, 0.0)));
    }

    #[test]
    fn test_point_in_triangle() {
        let (a, b, c) = (p(0.0, 0.0), p(5.0, 0.0), p(0.0, 5.0));
        assert!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c));
        assert!(point_in_triangle(&p(2.5, 2.5), &a, &b, &c));
        assert!(!point_in_triangle(&p(3.0, 3.0), &a, &b, &c));
        // order does not matter
        assert!(point_in_triangle(&p(1.0, 1.0), &c, &a, &b));
    }

    #[test]
    fn test_point_in_colinear_triangle() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
        assert!(point_in_triangle(&p(1.5, 1.5), &a, &b, &c));
        assert!(!point_in_triangle(&p(1.5, 1.0), &a, &b, &c));
        // fully collapsed triangle
        assert!(point_in_triangle(&a, &a, &a, &a));
        assert!(!point_in_triangle(&b, &a, &a, &a));
    }

    #[test]
    fn test_small_triangle_is_not_colinear() {
        // denom is 1e-16 here, well above the guard once scaled by the edges
        let (a, b, c) = (p(0.0, 0.0), p(1e-4, 0.0), p(0.0, 1e-4));
        assert!(point_in_triangle(&p(2e-5, 2e-5), &a, &b, &c));
        assert!(!point_in_triangle(&p(1e-4, 1e-4), &a, &b, &c));
    }

    #[test]
    fn test_point_on_segment() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 0.0));
        assert!(point_on_segment(&p(2.0, 0.0), &a, &b));
        assert!(point_on_segment(&p(4.0, 0.0), &a, &b));
        assert!(!point_on_segment(&p(5.0, 0.0), &a, &b));
        assert!(!point_on_segment(&p(2.0, 0.1), &a, &b));
        // zero length
        assert!(point_on_segment(&a, &a, &a));
        assert!(!point_on_segment(&b, &a, &a));
    }

    #[test]
    fn test_dist_point_to_segment() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 0.0));
        assert_relative_eq!(dist_point_to_segment_sq(&p(2.0, 3.0), &a, &b), 9.0);
        assert_relative_eq!(dist_point_to_segment_sq(&p(-3.0, 4.0), &a, &b), 25.0);
        assert_relative_eq!(dist_point_to_segment_sq(&p(1.0, 1.0), &a, &a), 2.0);
    }

    #[test]
    fn test_segments_crossing_and_parallel() {
        assert!(segment_intersects_segment(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0)
        ));
        assert!(!segment_intersects_segment(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(0.0, 1.0),
            &p(2.0, 1.0)
        ));
    }

    #[test]
    fn test_segments_colinear_overlap() {
        assert!(segment_intersects_segment(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0)
        ));
        assert!(!segment_intersects_segment(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
            &p(3.0, 0.0)
        ));
        // touching at an endpoint
        assert!(segment_intersects_segment(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(1.0, 1.0),
            &p(2.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_intersects_circle() {
        let c = p(0.0, 0.0);
        assert!(segment_intersects_circle(&p(-10.0, 0.0), &p(10.0, 0.0), &c, 1.0));
        assert!(segment_intersects_circle(&p(-10.0, 1.0), &p(10.0, 1.0), &c, 1.0));
        assert!(!segment_intersects_circle(&p(-10.0, 2.0), &p(10.0, 2.0), &c, 1.0));
        assert!(!segment_intersects_circle(&p(2.0, 0.0), &p(3.0, 0.0), &c, 1.0));
    }

    #[test]
    fn test_segment_circle_points() {
        let c = p(0.0, 0.0);
        let pts = segment_circle_points(&p(-10.0, 0.0), &p(10.0, 0.0), &c, 1.0);
        assert_eq!(pts.len(), 2);
        assert_relative_eq!(pts[0].x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(pts[1].x, 1.0, epsilon = 1e-9);

        // segment starts inside the circle: one crossing
        let pts = segment_circle_points(&p(0.0, 0.0), &p(10.0, 0.0), &c, 1.0);
        assert_eq!(pts.len(), 1);

        // fully inside: no crossing
        assert!(segment_circle_points(&p(-0.5, 0.0), &p(0.5, 0.0), &c, 1.0).is_empty());
    }

    #[test]
    fn test_circle_circle_intersections() {
        let pts = circle_circle_intersections(&p(0.0, 0.0), 1.0, &p(1.0, 0.0), 1.0);
        assert_eq!(pts.len(), 2);
        for q in &pts {
            assert_relative_eq!(q.x, 0.5, epsilon = 1e-9);
            assert_relative_eq!(q.y.abs(), 3f64.sqrt() / 2.0, epsilon = 1e-9);
        }

        let tangent = circle_circle_intersections(&p(0.0, 0.0), 1.0, &p(2.0, 0.0), 1.0);
        assert_eq!(tangent.len(), 1);
        assert_relative_eq!(tangent[0].x, 1.0, epsilon = 1e-9);

        assert!(circle_circle_intersections(&p(0.0, 0.0), 1.0, &p(5.0, 0.0), 1.0).is_empty());
        assert!(circle_circle_intersections(&p(0.0, 0.0), 3.0, &p(0.5, 0.0), 1.0).is_empty());
        assert!(circle_circle_intersections(&p(0.0, 0.0), 1.0, &p(0.0, 0.0), 1.0).is_empty());
    }
}
