// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch intersection queries using rayon
//!
//! Brute force over the input slice; shapes are read-only for the duration
//! of the query, so they are shared across workers without locking.

use super::Shape;
use log::debug;
use rayon::prelude::*;

/// Indices of every shape in `shapes` that the probe intersects
pub fn query(probe: &Shape, shapes: &[Shape]) -> Vec<usize> {
    let hits: Vec<usize> = shapes
        .par_iter()
        .enumerate()
        .filter(|(_, shape)| probe.intersects(shape))
        .map(|(i, _)| i)
        .collect();

    debug!("probe {} hit {} of {} shapes", probe, hits.len(), shapes.len());
    hits
}

/// Every unordered pair `(i, j)` with `i < j` whose shapes intersect,
/// sorted ascending
pub fn intersecting_pairs(shapes: &[Shape]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..shapes.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let a = &shapes[i];
            (i + 1..shapes.len())
                .filter(move |&j| a.intersects(&shapes[j]))
                .map(move |j| (i, j))
        })
        .collect();
    pairs.sort_unstable();

    debug!(
        "{} intersecting pairs among {} shapes",
        pairs.len(),
        shapes.len()
    );
    pairs
}
