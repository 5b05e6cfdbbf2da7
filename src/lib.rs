// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! geom2d
//!
//! Pairwise intersection tests for seven 2D primitives: points, circles,
//! circular sectors, axis-aligned and oriented rectangles, line segments and
//! triangles. Every pair of shapes has exactly one canonical test, so
//! `a.intersects(b) == b.intersects(a)` for all inputs.

pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod io;
pub mod utils;

pub use error::ShapeError;
pub use geometry::{
    Aabb, Circle, Intersects, LineSegment, Obb, Point, Sector, Shape, ShapeKind, Triangle,
};
pub use io::Scene;
pub use utils::{Delta, Pos, EPSILON};

/// Whether `a` and `b` share at least one point
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    a.intersects(b)
}
