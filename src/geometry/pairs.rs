// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! One canonical test per unordered pair of shape kinds
//!
//! Axis-aligned boxes never reach this module; the dispatcher converts them
//! to [`Obb`] first. Function names list the operands in the order they are
//! taken.

use super::predicates::{
    dist_point_to_segment_sq, point_in_circle, point_in_rectangle, point_in_sector,
    point_in_triangle, point_on_segment, segment_intersects_circle, segment_intersects_segment,
};
use super::sat::rectangles_intersect;
use super::sector::{
    circle_intersects_sector, polygon_intersects_sector, sectors_intersect,
    segment_intersects_sector,
};
use super::{Circle, LineSegment, Obb, Point, Sector, Triangle};
use crate::utils::math::{clamp, rotate_about, within_radius, Pos};

pub fn point_point(a: &Point, b: &Point) -> bool {
    a.pos == b.pos
}

pub fn point_circle(p: &Point, c: &Circle) -> bool {
    point_in_circle(&p.pos, c)
}

pub fn point_sector(p: &Point, s: &Sector) -> bool {
    point_in_sector(&p.pos, s)
}

pub fn point_rect(p: &Point, r: &Obb) -> bool {
    point_in_rectangle(&p.pos, r)
}

pub fn point_segment(p: &Point, seg: &LineSegment) -> bool {
    point_on_segment(&p.pos, &seg.p1, &seg.p2)
}

pub fn point_triangle(p: &Point, t: &Triangle) -> bool {
    point_in_triangle(&p.pos, &t.a, &t.b, &t.c)
}

pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let r = a.radius + b.radius;
    nalgebra::distance_squared(&a.pos, &b.pos) < r * r
}

pub fn circle_sector(c: &Circle, s: &Sector) -> bool {
    circle_intersects_sector(c, s)
}

/// Clamp the circle center to the box in the box's local frame
pub fn circle_rect(c: &Circle, r: &Obb) -> bool {
    let local = rotate_about(&c.pos, &r.pos, -r.angle);
    let (hw, hh) = r.half_extents();
    let dx = local.x - r.pos.x;
    let dy = local.y - r.pos.y;
    let ex = dx - clamp(dx, -hw, hw);
    let ey = dy - clamp(dy, -hh, hh);
    within_radius(ex * ex + ey * ey, c.radius)
}

pub fn circle_segment(c: &Circle, seg: &LineSegment) -> bool {
    segment_intersects_circle(&seg.p1, &seg.p2, &c.pos, c.radius)
}

pub fn circle_triangle(c: &Circle, t: &Triangle) -> bool {
    if t.contains(&c.pos) {
        return true;
    }
    if t
        .vertices()
        .iter()
        .any(|v| within_radius(nalgebra::distance_squared(v, &c.pos), c.radius))
    {
        return true;
    }
    t.edges()
        .iter()
        .any(|(a, b)| within_radius(dist_point_to_segment_sq(&c.pos, a, b), c.radius))
}

pub fn sector_sector(a: &Sector, b: &Sector) -> bool {
    sectors_intersect(a, b)
}

pub fn sector_rect(s: &Sector, r: &Obb) -> bool {
    polygon_intersects_sector(&r.corners(), &r.edges(), |p| r.contains(p), s)
}

pub fn sector_segment(s: &Sector, seg: &LineSegment) -> bool {
    segment_intersects_sector(&seg.p1, &seg.p2, s)
}

pub fn sector_triangle(s: &Sector, t: &Triangle) -> bool {
    polygon_intersects_sector(&t.vertices(), &t.edges(), |p| t.contains(p), s)
}

pub fn rect_rect(a: &Obb, b: &Obb) -> bool {
    rectangles_intersect(a, b)
}

fn segment_crosses_any(p1: &Pos, p2: &Pos, edges: &[(Pos, Pos)]) -> bool {
    edges
        .iter()
        .any(|(a, b)| segment_intersects_segment(p1, p2, a, b))
}

pub fn rect_segment(r: &Obb, seg: &LineSegment) -> bool {
    r.contains(&seg.p1) || r.contains(&seg.p2) || segment_crosses_any(&seg.p1, &seg.p2, &r.edges())
}

pub fn rect_triangle(r: &Obb, t: &Triangle) -> bool {
    if t.vertices().iter().any(|v| r.contains(v)) {
        return true;
    }
    if r.corners().iter().any(|c| t.contains(c)) {
        return true;
    }
    let tri_edges = t.edges();
    r.edges()
        .iter()
        .any(|(a, b)| segment_crosses_any(a, b, &tri_edges))
}

pub fn segment_segment(a: &LineSegment, b: &LineSegment) -> bool {
    segment_intersects_segment(&a.p1, &a.p2, &b.p1, &b.p2)
}

pub fn segment_triangle(seg: &LineSegment, t: &Triangle) -> bool {
    t.contains(&seg.p1) || t.contains(&seg.p2) || segment_crosses_any(&seg.p1, &seg.p2, &t.edges())
}

pub fn triangle_triangle(a: &Triangle, b: &Triangle) -> bool {
    if a.vertices().iter().any(|v| b.contains(v)) || b.vertices().iter().any(|v| a.contains(v)) {
        return true;
    }
    let b_edges = b.edges();
    a.edges()
        .iter()
        .any(|(p, q)| segment_crosses_any(p, q, &b_edges))
}
