// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Sector composites
//!
//! A sector's boundary is two radial edges plus one arc. Every test here
//! reduces to containment of a reference point or a crossing of one of
//! those three pieces.

use super::predicates::{
    circle_circle_intersections, point_in_sector_inclusive, segment_circle_points,
    segment_intersects_circle, segment_intersects_segment,
};
use super::{Circle, Sector};
use crate::utils::math::{direction_deg, within_radius, Pos, EPSILON};
use std::cmp::Ordering;

/// Closed segment `[a, b]` vs filled sector
pub fn segment_intersects_sector(a: &Pos, b: &Pos, sector: &Sector) -> bool {
    if sector.contains(a) || sector.contains(b) {
        return true;
    }

    let (start, end) = sector.arc_endpoints();
    if segment_intersects_segment(a, b, &sector.pos, &start)
        || segment_intersects_segment(a, b, &sector.pos, &end)
    {
        return true;
    }

    segment_circle_points(a, b, &sector.pos, sector.radius)
        .iter()
        .any(|p| sector.contains_angle(direction_deg(&sector.pos, p)))
}

/// Disc vs sector
pub fn circle_intersects_sector(circle: &Circle, sector: &Sector) -> bool {
    if point_in_sector_inclusive(&circle.pos, sector) {
        return true;
    }

    // quick reject on the bounding discs
    let disc = sector.bounding_circle();
    let d = nalgebra::distance(&circle.pos, &disc.pos);
    if d > circle.radius + disc.radius + EPSILON {
        return false;
    }

    // closest point on the arc lies along the center direction
    let angle = direction_deg(&sector.pos, &circle.pos);
    if sector.contains_angle(angle) {
        let on_arc = sector.arc_point(angle);
        if within_radius(nalgebra::distance_squared(&circle.pos, &on_arc), circle.radius) {
            return true;
        }
    }

    let (start, end) = sector.arc_endpoints();
    segment_intersects_circle(&sector.pos, &start, &circle.pos, circle.radius)
        || segment_intersects_circle(&sector.pos, &end, &circle.pos, circle.radius)
}

fn key_order(a: &Sector, b: &Sector) -> Ordering {
    a.order_key()
        .iter()
        .zip(b.order_key().iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sector vs sector.
///
/// Operands are put in a fixed order first so both call directions run
/// the same arithmetic.
pub fn sectors_intersect(a: &Sector, b: &Sector) -> bool {
    let (s, o) = match key_order(a, b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };

    let d = nalgebra::distance(&s.pos, &o.pos);
    if d > s.radius + o.radius + EPSILON {
        return false;
    }

    if o.contains(&s.pos) || s.contains(&o.pos) {
        return true;
    }

    let (s_start, s_end) = s.arc_endpoints();
    if o.contains(&s_start) || o.contains(&s_end) {
        return true;
    }
    let (o_start, o_end) = o.arc_endpoints();
    if s.contains(&o_start) || s.contains(&o_end) {
        return true;
    }

    // arc against arc
    if circle_circle_intersections(&s.pos, s.radius, &o.pos, o.radius)
        .iter()
        .any(|p| s.contains(p) && o.contains(p))
    {
        return true;
    }

    // radial edges against the other slice
    segment_intersects_sector(&s.pos, &s_start, o)
        || segment_intersects_sector(&s.pos, &s_end, o)
        || segment_intersects_sector(&o.pos, &o_start, s)
        || segment_intersects_sector(&o.pos, &o_end, s)
}

/// Convex polygon vs sector.
///
/// `contains` is the polygon's own point test; `edges` its closed boundary.
pub fn polygon_intersects_sector<F>(
    vertices: &[Pos],
    edges: &[(Pos, Pos)],
    contains: F,
    sector: &Sector,
) -> bool
where
    F: Fn(&Pos) -> bool,
{
    if vertices.iter().any(|v| sector.contains(v)) {
        return true;
    }
    if contains(&sector.pos) {
        return true;
    }
    let (start, end) = sector.arc_endpoints();
    if contains(&start) || contains(&end) {
        return true;
    }
    edges
        .iter()
        .any(|(a, b)| segment_intersects_sector(a, b, sector))
}
