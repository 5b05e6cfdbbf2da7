// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Separating-axis solver for oriented rectangles
//!
//! Two convex shapes are disjoint iff some axis separates their projections.
//! For a pair of rectangles the candidate axes are the two local axes of each
//! rectangle; duplicates (parallel rectangles) are harmless.

use super::Obb;
use crate::utils::math::{deg_to_rad, Delta, Pos, EPSILON};

/// World-space corners, counter-clockwise starting at (+w/2, +h/2)
pub fn rectangle_corners(rect: &Obb) -> [Pos; 4] {
    let (hw, hh) = rect.half_extents();
    let (s, c) = deg_to_rad(rect.angle).sin_cos();
    [(hw, hh), (-hw, hh), (-hw, -hh), (hw, -hh)]
        .map(|(x, y)| Pos::new(rect.pos.x + x * c - y * s, rect.pos.y + x * s + y * c))
}

/// Unit axes along the rectangle's width and height
pub fn rectangle_axes(rect: &Obb) -> [Delta; 2] {
    let (s, c) = deg_to_rad(rect.angle).sin_cos();
    [Delta::new(c, s), Delta::new(-s, c)]
}

/// Interval `[min, max]` covered by `points` projected onto `axis`
pub fn project_onto_axis(points: &[Pos], axis: &Delta) -> (f64, f64) {
    points
        .iter()
        .map(|p| p.coords.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

/// Closed intervals overlap, touching counts
pub fn intervals_overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    !(a.1 < b.0 - EPSILON || b.1 < a.0 - EPSILON)
}

/// Rectangle vs rectangle by the separating-axis theorem
pub fn rectangles_intersect(a: &Obb, b: &Obb) -> bool {
    let corners_a = rectangle_corners(a);
    let corners_b = rectangle_corners(b);
    let [a0, a1] = rectangle_axes(a);
    let [b0, b1] = rectangle_axes(b);

    [a0, a1, b0, b1].iter().all(|axis| {
        intervals_overlap(
            project_onto_axis(&corners_a, axis),
            project_onto_axis(&corners_b, axis),
        )
    })
}
