// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! The seven shape records
//!
//! Every shape is a small `Copy` value. Construction never fails; use
//! [`super::Shape::validate`] to reject non-finite or negative parameters.

use super::predicates;
use super::ShapeKind;
use crate::error::{Result, ShapeError};
use crate::utils::math::{deg_to_rad, normalize_angle_deg, Delta, Pos};
use serde::{Deserialize, Serialize};

fn finite(kind: ShapeKind, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFinite { kind, field, value })
    }
}

fn non_negative(kind: ShapeKind, field: &'static str, value: f64) -> Result<()> {
    finite(kind, field, value)?;
    if value < 0.0 {
        return Err(ShapeError::Negative { kind, field, value });
    }
    Ok(())
}

fn finite_pos(kind: ShapeKind, field: &'static str, p: &Pos) -> Result<()> {
    finite(kind, field, p.x)?;
    finite(kind, field, p.y)
}

/// A single location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub pos: Pos,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { pos: Pos::new(x, y) }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            pos: self.pos + delta,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::Point, "pos", &self.pos)
    }
}

/// A disc around `pos`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Pos,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            pos: Pos::new(x, y),
            radius,
        }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            pos: self.pos + delta,
            ..*self
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::Circle, "pos", &self.pos)?;
        non_negative(ShapeKind::Circle, "radius", self.radius)
    }
}

/// A circular sector (pie slice) swept counter-clockwise from
/// `start_angle` to `end_angle`, both in degrees.
///
/// When the normalized start exceeds the normalized end the slice wraps
/// through 0°. Both bounds are normalized before comparing, so a range such
/// as 0°..360° collapses to the single direction 0°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub pos: Pos,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    pub fn new(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            pos: Pos::new(x, y),
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            pos: self.pos + delta,
            ..*self
        }
    }

    /// Whether a direction (degrees) falls inside the normalized angular range
    pub fn contains_angle(&self, angle: f64) -> bool {
        crate::utils::math::angle_between_deg(angle, self.start_angle, self.end_angle)
    }

    /// Point on the arc at direction `angle_deg`
    pub fn arc_point(&self, angle_deg: f64) -> Pos {
        let (s, c) = deg_to_rad(angle_deg).sin_cos();
        Pos::new(self.pos.x + c * self.radius, self.pos.y + s * self.radius)
    }

    /// Arc endpoints at the start and end angles
    pub fn arc_endpoints(&self) -> (Pos, Pos) {
        (self.arc_point(self.start_angle), self.arc_point(self.end_angle))
    }

    /// The full disc this sector is cut from
    pub fn bounding_circle(&self) -> Circle {
        Circle {
            pos: self.pos,
            radius: self.radius,
        }
    }

    /// Inclusive containment used by composite tests.
    ///
    /// The apex belongs to the sector regardless of the angular range.
    pub fn contains(&self, p: &Pos) -> bool {
        predicates::point_in_sector_inclusive(p, self)
    }

    /// Total ordering key over all parameters
    pub(crate) fn order_key(&self) -> [f64; 5] {
        [
            self.pos.x,
            self.pos.y,
            self.radius,
            normalize_angle_deg(self.start_angle),
            normalize_angle_deg(self.end_angle),
        ]
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::Sector, "pos", &self.pos)?;
        non_negative(ShapeKind::Sector, "radius", self.radius)?;
        finite(ShapeKind::Sector, "start_angle", self.start_angle)?;
        finite(ShapeKind::Sector, "end_angle", self.end_angle)
    }
}

/// Axis-aligned box centered on `pos`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Pos,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: Pos::new(x, y),
            width,
            height,
        }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            pos: self.pos + delta,
            ..*self
        }
    }

    /// The same rectangle as an oriented box with zero rotation
    pub fn to_obb(&self) -> Obb {
        Obb {
            pos: self.pos,
            width: self.width,
            height: self.height,
            angle: 0.0,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::Aabb, "pos", &self.pos)?;
        non_negative(ShapeKind::Aabb, "width", self.width)?;
        non_negative(ShapeKind::Aabb, "height", self.height)
    }
}

/// Oriented box centered on `pos`, rotated by `angle` degrees about its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    pub pos: Pos,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl From<Aabb> for Obb {
    fn from(aabb: Aabb) -> Self {
        aabb.to_obb()
    }
}

impl Obb {
    pub fn new(x: f64, y: f64, width: f64, height: f64, angle: f64) -> Self {
        Self {
            pos: Pos::new(x, y),
            width,
            height,
            angle,
        }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            pos: self.pos + delta,
            ..*self
        }
    }

    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// World-space corners, counter-clockwise starting at (+w/2, +h/2)
    pub fn corners(&self) -> [Pos; 4] {
        super::sat::rectangle_corners(self)
    }

    /// Edges between consecutive corners
    pub fn edges(&self) -> [(Pos, Pos); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Boundary-inclusive containment
    pub fn contains(&self, p: &Pos) -> bool {
        predicates::point_in_rectangle(p, self)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::Obb, "pos", &self.pos)?;
        non_negative(ShapeKind::Obb, "width", self.width)?;
        non_negative(ShapeKind::Obb, "height", self.height)?;
        finite(ShapeKind::Obb, "angle", self.angle)
    }
}

/// Closed segment between `p1` and `p2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Pos,
    pub p2: Pos,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Pos::new(x1, y1),
            p2: Pos::new(x2, y2),
        }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            p1: self.p1 + delta,
            p2: self.p2 + delta,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::LineSegment, "p1", &self.p1)?;
        finite_pos(ShapeKind::LineSegment, "p2", &self.p2)
    }
}

/// Filled triangle; vertex order does not matter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Pos,
    pub b: Pos,
    pub c: Pos,
}

impl Triangle {
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Self {
        Self {
            a: Pos::new(ax, ay),
            b: Pos::new(bx, by),
            c: Pos::new(cx, cy),
        }
    }

    pub fn translated(&self, delta: &Delta) -> Self {
        Self {
            a: self.a + delta,
            b: self.b + delta,
            c: self.c + delta,
        }
    }

    pub fn vertices(&self) -> [Pos; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [(Pos, Pos); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Boundary-inclusive containment
    pub fn contains(&self, p: &Pos) -> bool {
        predicates::point_in_triangle(p, &self.a, &self.b, &self.c)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        finite_pos(ShapeKind::Triangle, "a", &self.a)?;
        finite_pos(ShapeKind::Triangle, "b", &self.b)?;
        finite_pos(ShapeKind::Triangle, "c", &self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_converts_to_unrotated_obb() {
        let obb: Obb = Aabb::new(1.0, 2.0, 4.0, 6.0).into();
        assert_eq!(obb, Obb::new(1.0, 2.0, 4.0, 6.0, 0.0));
    }

    #[test]
    fn test_translation_moves_every_point() {
        let d = Delta::new(1.0, -2.0);
        let seg = LineSegment::new(0.0, 0.0, 3.0, 4.0).translated(&d);
        assert_eq!(seg, LineSegment::new(1.0, -2.0, 4.0, 2.0));

        let tri = Triangle::new(0.0, 0.0, 1.0, 0.0, 0.0, 1.0).translated(&d);
        assert_eq!(tri, Triangle::new(1.0, -2.0, 2.0, -2.0, 1.0, -1.0));

        let sector = Sector::new(0.0, 0.0, 5.0, 10.0, 20.0).translated(&d);
        assert_eq!(sector.pos, Pos::new(1.0, -2.0));
        assert_eq!(sector.start_angle, 10.0);
    }

    #[test]
    fn test_sector_arc_endpoints() {
        let (start, end) = Sector::new(0.0, 0.0, 2.0, 0.0, 90.0).arc_endpoints();
        assert_relative_eq!(start.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(start.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_whole_turn_collapses_to_single_direction() {
        // 0..360 and 10..370 normalize to a zero-width range
        let s = Sector::new(0.0, 0.0, 1.0, 0.0, 360.0);
        assert!(s.contains_angle(0.0));
        assert!(!s.contains_angle(200.0));
        let s = Sector::new(0.0, 0.0, 1.0, 10.0, 370.0);
        assert!(s.contains_angle(10.0));
        assert!(!s.contains_angle(153.0));
        assert!(!Sector::new(0.0, 0.0, 1.0, 0.0, 359.0).contains_angle(359.5));
    }

    #[test]
    fn test_sector_bounding_circle() {
        let disc = Sector::new(1.0, 2.0, 3.0, 0.0, 45.0).bounding_circle();
        assert_eq!(disc, Circle::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_colinear_triangle_contains_only_its_edges() {
        let tri = Triangle::new(0.0, 0.0, 1.0, 1.0, 2.0, 2.0);
        assert!(tri.contains(&Pos::new(1.5, 1.5)));
        assert!(!tri.contains(&Pos::new(1.0, 0.0)));
        assert!(!tri.contains(&Pos::new(3.0, 3.0)));
    }

    #[test]
    fn test_validation_rejects_negative_radius() {
        let err = Circle::new(0.0, 0.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, ShapeError::Negative { field: "radius", .. }));
    }

    #[test]
    fn test_validation_rejects_nan() {
        assert!(Obb::new(0.0, 0.0, 1.0, 1.0, f64::NAN).validate().is_err());
        assert!(Point::new(f64::INFINITY, 0.0).validate().is_err());
        assert!(Aabb::new(0.0, 0.0, 0.0, 0.0).validate().is_ok());
    }
}
