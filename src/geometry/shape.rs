// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed shape type and pairwise dispatch

use super::pairs;
use super::{Aabb, Circle, LineSegment, Obb, Point, Sector, Triangle};
use crate::error::Result;
use crate::utils::math::{Delta, Pos};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean overlap query between two shapes.
///
/// Touching boundaries count as intersecting except where noted on the
/// point/circle tests, which are strict.
pub trait Intersects<Rhs: ?Sized = Self> {
    fn intersects(&self, other: &Rhs) -> bool;
}

/// Discriminant of [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Point,
    Circle,
    Sector,
    Aabb,
    Obb,
    LineSegment,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Point,
        ShapeKind::Circle,
        ShapeKind::Sector,
        ShapeKind::Aabb,
        ShapeKind::Obb,
        ShapeKind::LineSegment,
        ShapeKind::Triangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Circle => "circle",
            ShapeKind::Sector => "sector",
            ShapeKind::Aabb => "aabb",
            ShapeKind::Obb => "obb",
            ShapeKind::LineSegment => "line_segment",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any of the seven supported primitives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Point(Point),
    Circle(Circle),
    Sector(Sector),
    Aabb(Aabb),
    Obb(Obb),
    LineSegment(LineSegment),
    Triangle(Triangle),
}

impl Shape {
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point::new(x, y))
    }

    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Circle(Circle::new(x, y, radius))
    }

    pub fn sector(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::Sector(Sector::new(x, y, radius, start_angle, end_angle))
    }

    pub fn aabb(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Aabb(Aabb::new(x, y, width, height))
    }

    pub fn obb(x: f64, y: f64, width: f64, height: f64, angle: f64) -> Self {
        Self::Obb(Obb::new(x, y, width, height, angle))
    }

    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::LineSegment(LineSegment::new(x1, y1, x2, y2))
    }

    pub fn triangle(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Self {
        Self::Triangle(Triangle::new(ax, ay, bx, by, cx, cy))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Sector(_) => ShapeKind::Sector,
            Shape::Aabb(_) => ShapeKind::Aabb,
            Shape::Obb(_) => ShapeKind::Obb,
            Shape::LineSegment(_) => ShapeKind::LineSegment,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Reference point: the center, the first endpoint, or vertex `a`
    pub fn position(&self) -> Pos {
        match self {
            Shape::Point(s) => s.pos,
            Shape::Circle(s) => s.pos,
            Shape::Sector(s) => s.pos,
            Shape::Aabb(s) => s.pos,
            Shape::Obb(s) => s.pos,
            Shape::LineSegment(s) => s.p1,
            Shape::Triangle(s) => s.a,
        }
    }

    /// The shape shifted by `delta`; every position-bearing field moves
    pub fn translated(&self, delta: &Delta) -> Self {
        match self {
            Shape::Point(s) => Shape::Point(s.translated(delta)),
            Shape::Circle(s) => Shape::Circle(s.translated(delta)),
            Shape::Sector(s) => Shape::Sector(s.translated(delta)),
            Shape::Aabb(s) => Shape::Aabb(s.translated(delta)),
            Shape::Obb(s) => Shape::Obb(s.translated(delta)),
            Shape::LineSegment(s) => Shape::LineSegment(s.translated(delta)),
            Shape::Triangle(s) => Shape::Triangle(s.translated(delta)),
        }
    }

    /// In-place translation. Callers sharing the shape across threads must
    /// not run this concurrently with queries.
    pub fn translate(&mut self, delta: &Delta) {
        *self = self.translated(delta);
    }

    /// Reject non-finite scalars and negative radius/width/height
    pub fn validate(&self) -> Result<()> {
        match self {
            Shape::Point(s) => s.validate(),
            Shape::Circle(s) => s.validate(),
            Shape::Sector(s) => s.validate(),
            Shape::Aabb(s) => s.validate(),
            Shape::Obb(s) => s.validate(),
            Shape::LineSegment(s) => s.validate(),
            Shape::Triangle(s) => s.validate(),
        }
    }

    /// Whether the two shapes share at least one point.
    ///
    /// AABBs are folded into zero-angle OBBs; every remaining unordered pair
    /// has exactly one canonical test, so the result never depends on which
    /// operand the query was issued on.
    pub fn intersects(&self, other: &Shape) -> bool {
        use Shape as S;

        match (self, other) {
            (S::Aabb(a), rest) | (rest, S::Aabb(a)) => S::Obb(a.to_obb()).intersects(rest),

            (S::Point(a), S::Point(b)) => pairs::point_point(a, b),
            (S::Point(p), S::Circle(c)) | (S::Circle(c), S::Point(p)) => pairs::point_circle(p, c),
            (S::Point(p), S::Sector(s)) | (S::Sector(s), S::Point(p)) => pairs::point_sector(p, s),
            (S::Point(p), S::Obb(r)) | (S::Obb(r), S::Point(p)) => pairs::point_rect(p, r),
            (S::Point(p), S::LineSegment(l)) | (S::LineSegment(l), S::Point(p)) => {
                pairs::point_segment(p, l)
            }
            (S::Point(p), S::Triangle(t)) | (S::Triangle(t), S::Point(p)) => {
                pairs::point_triangle(p, t)
            }

            (S::Circle(a), S::Circle(b)) => pairs::circle_circle(a, b),
            (S::Circle(c), S::Sector(s)) | (S::Sector(s), S::Circle(c)) => pairs::circle_sector(c, s),
            (S::Circle(c), S::Obb(r)) | (S::Obb(r), S::Circle(c)) => pairs::circle_rect(c, r),
            (S::Circle(c), S::LineSegment(l)) | (S::LineSegment(l), S::Circle(c)) => {
                pairs::circle_segment(c, l)
            }
            (S::Circle(c), S::Triangle(t)) | (S::Triangle(t), S::Circle(c)) => {
                pairs::circle_triangle(c, t)
            }

            (S::Sector(a), S::Sector(b)) => pairs::sector_sector(a, b),
            (S::Sector(s), S::Obb(r)) | (S::Obb(r), S::Sector(s)) => pairs::sector_rect(s, r),
            (S::Sector(s), S::LineSegment(l)) | (S::LineSegment(l), S::Sector(s)) => {
                pairs::sector_segment(s, l)
            }
            (S::Sector(s), S::Triangle(t)) | (S::Triangle(t), S::Sector(s)) => {
                pairs::sector_triangle(s, t)
            }

            (S::Obb(a), S::Obb(b)) => pairs::rect_rect(a, b),
            (S::Obb(r), S::LineSegment(l)) | (S::LineSegment(l), S::Obb(r)) => {
                pairs::rect_segment(r, l)
            }
            (S::Obb(r), S::Triangle(t)) | (S::Triangle(t), S::Obb(r)) => pairs::rect_triangle(r, t),

            (S::LineSegment(a), S::LineSegment(b)) => pairs::segment_segment(a, b),
            (S::LineSegment(l), S::Triangle(t)) | (S::Triangle(t), S::LineSegment(l)) => {
                pairs::segment_triangle(l, t)
            }

            (S::Triangle(a), S::Triangle(b)) => pairs::triangle_triangle(a, b),
        }
    }
}

impl Intersects for Shape {
    fn intersects(&self, other: &Shape) -> bool {
        Shape::intersects(self, other)
    }
}

macro_rules! shape_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }

            impl Intersects<Shape> for $variant {
                fn intersects(&self, other: &Shape) -> bool {
                    Shape::$variant(*self).intersects(other)
                }
            }
        )*
    };
}

shape_variant!(Point, Circle, Sector, Aabb, Obb, LineSegment, Triangle);

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Point(s) => write!(f, "point({}, {})", s.pos.x, s.pos.y),
            Shape::Circle(s) => write!(f, "circle({}, {}, r={})", s.pos.x, s.pos.y, s.radius),
            Shape::Sector(s) => write!(
                f,
                "sector({}, {}, r={}, {}°..{}°)",
                s.pos.x, s.pos.y, s.radius, s.start_angle, s.end_angle
            ),
            Shape::Aabb(s) => write!(f, "aabb({}, {}, {}x{})", s.pos.x, s.pos.y, s.width, s.height),
            Shape::Obb(s) => write!(
                f,
                "obb({}, {}, {}x{}, {}°)",
                s.pos.x, s.pos.y, s.width, s.height, s.angle
            ),
            Shape::LineSegment(s) => write!(
                f,
                "segment(({}, {}) -> ({}, {}))",
                s.p1.x, s.p1.y, s.p2.x, s.p2.y
            ),
            Shape::Triangle(s) => write!(
                f,
                "triangle(({}, {}), ({}, {}), ({}, {}))",
                s.a.x, s.a.y, s.b.x, s.b.y, s.c.x, s.c.y
            ),
        }
    }
}
