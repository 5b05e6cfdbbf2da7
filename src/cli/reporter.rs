// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::evaluation::AuditReport;
use crate::geometry::Shape;
use crate::io::Scene;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a single pairwise query, evaluated in both orders
    pub fn report_check(a: &Shape, b: &Shape, forward: bool, reverse: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("  {} {}", "A:".bold(), a.to_string().cyan());
        println!("  {} {}", "B:".bold(), b.to_string().cyan());
        println!("{}", "━".repeat(80).bright_black());

        if forward {
            println!("{} {}", "✅".green(), "Shapes intersect".green().bold());
        } else {
            println!("{} {}", "○".bright_black(), "Shapes are disjoint".bold());
        }
        if forward != reverse {
            Self::report_error(&format!(
                "asymmetric result: A∩B={} but B∩A={}",
                forward, reverse
            ));
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report every intersecting pair of a scene
    pub fn report_scene(file: &str, scene: &Scene, pairs: &[(usize, usize)], duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Scene:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Shapes:".bright_black(),
            scene.shapes.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Intersecting pairs:".bright_black(),
            pairs.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );

        if !pairs.is_empty() {
            println!();
        }
        for &(i, j) in pairs {
            println!(
                "  {} {} {} {}",
                format!("#{}", i).bright_black(),
                scene.shapes[i],
                "∩".yellow(),
                format!("#{} {}", j, scene.shapes[j])
            );
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a fuzzing audit
    pub fn report_audit(report: &AuditReport, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{}", "Intersection Audit".bold());
        println!("{}", "━".repeat(80).bright_black());

        let seed = report
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        println!("  {} {}", "Seed:".bright_black(), seed.cyan());
        println!(
            "  {} {}",
            "Pairs:".bright_black(),
            report.pairs_checked.to_string().cyan()
        );
        println!(
            "  {} {} ({:.1}%)",
            "Hits:".bright_black(),
            report.hits.to_string().cyan(),
            report.hit_rate()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );

        println!("\n{}", "By kind:".bold());
        for (key, stats) in &report.by_kind {
            println!(
                "  {:<28} {:>6} {}",
                key.bright_black(),
                stats.hits,
                format!("/ {}", stats.checked).bright_black()
            );
        }

        println!();
        if report.is_clean() {
            Self::success("Every pair agreed in both orders and every shape hit itself");
        } else {
            for v in &report.violations {
                Self::report_error(&format!(
                    "{} vs {}: forward={}, reverse={}",
                    v.a, v.b, v.forward, v.reverse
                ));
            }
            for s in &report.non_reflexive {
                Self::report_error(&format!("{} does not intersect itself", s));
            }
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
