// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Random shape generation for property checks

use crate::geometry::{Shape, ShapeKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Fuzzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzerConfig {
    /// Number of random pairs to generate
    pub count: usize,
    /// Positions are drawn from `[-coord_range, coord_range]`
    pub coord_range: f64,
    /// Upper bound for radii, widths, heights and vertex offsets
    pub max_extent: f64,
    /// Fixed seed for reproducible runs; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        Self {
            count: 500,
            coord_range: 10.0,
            max_extent: 5.0,
            seed: None,
        }
    }
}

/// Generator of random, valid shapes of every kind
pub struct ShapeFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl ShapeFuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Generate a shape of a random kind
    pub fn generate(&mut self) -> Shape {
        let kind = ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())];
        self.generate_kind(kind)
    }

    /// Generate a shape of the given kind
    pub fn generate_kind(&mut self, kind: ShapeKind) -> Shape {
        let (x, y) = (self.coord(), self.coord());
        match kind {
            ShapeKind::Point => Shape::point(x, y),
            ShapeKind::Circle => Shape::circle(x, y, self.extent()),
            ShapeKind::Sector => {
                let start = self.rng.gen_range(-180.0..360.0);
                let span = self.rng.gen_range(1.0..359.0);
                Shape::sector(x, y, self.extent(), start, start + span)
            }
            ShapeKind::Aabb => Shape::aabb(x, y, self.extent(), self.extent()),
            ShapeKind::Obb => {
                let angle = self.rng.gen_range(-180.0..180.0);
                Shape::obb(x, y, self.extent(), self.extent(), angle)
            }
            ShapeKind::LineSegment => {
                let (dx, dy) = (self.offset(), self.offset());
                Shape::segment(x, y, x + dx, y + dy)
            }
            ShapeKind::Triangle => {
                let (bx, by) = (x + self.offset(), y + self.offset());
                let (cx, cy) = (x + self.offset(), y + self.offset());
                Shape::triangle(x, y, bx, by, cx, cy)
            }
        }
    }

    /// Generate `count` random pairs
    pub fn run(&mut self) -> Vec<(Shape, Shape)> {
        (0..self.config.count)
            .map(|_| (self.generate(), self.generate()))
            .collect()
    }

    fn coord(&mut self) -> f64 {
        let r = self.config.coord_range.abs();
        if r == 0.0 {
            0.0
        } else {
            self.rng.gen_range(-r..=r)
        }
    }

    fn extent(&mut self) -> f64 {
        let max = self.config.max_extent.abs().max(0.2);
        self.rng.gen_range(0.1..=max)
    }

    fn offset(&mut self) -> f64 {
        let max = self.config.max_extent.abs().max(0.2);
        self.rng.gen_range(-max..=max)
    }
}
