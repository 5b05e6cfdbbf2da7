// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Audit report (JSON and Markdown)

use crate::geometry::{Shape, ShapeKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A pair whose answer depends on argument order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub a: Shape,
    pub b: Shape,
    pub forward: bool,
    pub reverse: bool,
}

/// Hit counts for one unordered kind pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairStats {
    pub checked: usize,
    pub hits: usize,
}

/// Result of a fuzzing audit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub seed: Option<u64>,
    pub pairs_checked: usize,
    pub hits: usize,
    pub violations: Vec<Violation>,
    pub non_reflexive: Vec<Shape>,
    pub by_kind: BTreeMap<String, PairStats>,
}

/// Map key for an unordered kind pair, e.g. `circle/sector`
pub fn kind_pair_key(a: ShapeKind, b: ShapeKind) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{}/{}", lo, hi)
}

impl AuditReport {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn record(&mut self, a: &Shape, b: &Shape, forward: bool, reverse: bool) {
        self.pairs_checked += 1;
        let stats = self
            .by_kind
            .entry(kind_pair_key(a.kind(), b.kind()))
            .or_default();
        stats.checked += 1;
        if forward {
            self.hits += 1;
            stats.hits += 1;
        }
        if forward != reverse {
            self.violations.push(Violation {
                a: *a,
                b: *b,
                forward,
                reverse,
            });
        }
    }

    pub fn record_reflexive(&mut self, shape: &Shape, hit: bool) {
        if !hit {
            self.non_reflexive.push(*shape);
        }
    }

    /// No asymmetric pair and every shape hit itself
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.non_reflexive.is_empty()
    }

    pub fn hit_rate(&self) -> f64 {
        if self.pairs_checked == 0 {
            0.0
        } else {
            self.hits as f64 / self.pairs_checked as f64 * 100.0
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Intersection Audit\n\n");
        match self.seed {
            Some(seed) => md.push_str(&format!("**Seed:** {}\n\n", seed)),
            None => md.push_str("**Seed:** random\n\n"),
        }
        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Pairs checked:** {}\n", self.pairs_checked));
        md.push_str(&format!(
            "- **Hits:** {} ({:.1}%)\n",
            self.hits,
            self.hit_rate()
        ));
        md.push_str(&format!(
            "- **Asymmetric pairs:** {}\n",
            self.violations.len()
        ));
        md.push_str(&format!(
            "- **Non-reflexive shapes:** {}\n\n",
            self.non_reflexive.len()
        ));

        md.push_str("## By Kind\n\n");
        md.push_str("| Pair | Checked | Hits |\n");
        md.push_str("|------|---------|------|\n");
        for (key, stats) in &self.by_kind {
            md.push_str(&format!("| {} | {} | {} |\n", key, stats.checked, stats.hits));
        }

        if !self.violations.is_empty() {
            md.push_str("\n## Asymmetric Pairs\n\n");
            for v in &self.violations {
                md.push_str(&format!(
                    "- `{}` vs `{}`: forward={}, reverse={}\n",
                    v.a, v.b, v.forward, v.reverse
                ));
            }
        }
        md
    }

    pub fn write_markdown(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_markdown())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
