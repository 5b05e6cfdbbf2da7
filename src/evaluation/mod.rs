// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Randomized audit of the intersection matrix
//!
//! Generates random shape pairs and checks that every answer is the same in
//! both argument orders and that every generated shape intersects itself.

pub mod fuzzer;
pub mod report;

pub use fuzzer::{FuzzerConfig, ShapeFuzzer};
pub use report::{kind_pair_key, AuditReport, PairStats, Violation};

use crate::geometry::Shape;
use rayon::prelude::*;

/// Run a full audit
pub fn audit(config: &FuzzerConfig) -> AuditReport {
    let mut fuzzer = ShapeFuzzer::new(config.clone());
    let pairs = fuzzer.run();
    log::info!("Auditing {} random pairs", pairs.len());
    audit_pairs(config.seed, &pairs)
}

/// Audit a fixed list of pairs
pub fn audit_pairs(seed: Option<u64>, pairs: &[(Shape, Shape)]) -> AuditReport {
    let answers: Vec<(bool, bool, bool, bool)> = pairs
        .par_iter()
        .map(|(a, b)| {
            (
                a.intersects(b),
                b.intersects(a),
                a.intersects(a),
                b.intersects(b),
            )
        })
        .collect();

    let mut report = AuditReport::new(seed);
    for ((a, b), (forward, reverse, self_a, self_b)) in pairs.iter().zip(answers) {
        report.record(a, b, forward, reverse);
        report.record_reflexive(a, self_a);
        report.record_reflexive(b, self_b);
        if forward != reverse {
            log::warn!("Asymmetric answer for {} vs {}", a, b);
        }
    }

    log::debug!(
        "Audit finished: {} hits, {} violations",
        report.hits,
        report.violations.len()
    );
    report
}
