// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - 2D shapes and intersection predicates

mod shape;
mod shapes;
mod pairs;
pub mod predicates;
pub mod sat;
pub mod sector;
pub mod batch;

pub use shape::{Intersects, Shape, ShapeKind};
pub use shapes::{Aabb, Circle, LineSegment, Obb, Point, Sector, Triangle};
