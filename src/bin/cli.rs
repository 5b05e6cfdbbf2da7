// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! geom2d CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use geom2d::cli::Reporter;
use geom2d::config::Geom2dConfig;
use geom2d::evaluation;
use geom2d::io::{parse_shape, Scene};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "geom2d")]
#[command(about = "2D shape intersection queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Test two shapes given as JSON
    Check {
        /// First shape, e.g. '{"type":"circle","pos":[0,0],"radius":1}'
        a: String,

        /// Second shape
        b: String,
    },

    /// List every intersecting pair in a scene file (.json or .toml)
    Scene {
        /// Scene file
        input: PathBuf,

        /// Print the pairs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Audit commutativity and reflexivity on random shapes
    Fuzz {
        /// Number of random pairs
        #[arg(short, long)]
        count: Option<usize>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the JSON report to this file
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Geom2dConfig::load()?;

    let log_level = if cli.verbose || config.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let ok = match cli.command {
        Commands::Check { a, b } => check_command(&a, &b)?,
        Commands::Scene { input, json } => scene_command(&input, json)?,
        Commands::Fuzz {
            count,
            seed,
            report,
        } => fuzz_command(config, count, seed, report)?,
        Commands::Version => {
            println!("geom2d v{}", env!("CARGO_PKG_VERSION"));
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn check_command(a: &str, b: &str) -> Result<bool> {
    let a = parse_shape(a)?;
    let b = parse_shape(b)?;
    let forward = a.intersects(&b);
    let reverse = b.intersects(&a);
    Reporter::report_check(&a, &b, forward, reverse);
    Ok(forward == reverse)
}

fn scene_command(input: &Path, json: bool) -> Result<bool> {
    let scene = Scene::load(input)?;

    let start = Instant::now();
    let pairs = scene.intersecting_pairs();
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else {
        Reporter::report_scene(&input.display().to_string(), &scene, &pairs, elapsed);
    }
    Ok(true)
}

fn fuzz_command(
    mut config: Geom2dConfig,
    count: Option<usize>,
    seed: Option<u64>,
    report_path: Option<PathBuf>,
) -> Result<bool> {
    if let Some(count) = count {
        config.fuzz.count = count;
    }
    if seed.is_some() {
        config.fuzz.seed = seed;
    }

    let start = Instant::now();
    let report = evaluation::audit(&config.fuzz);
    Reporter::report_audit(&report, start.elapsed());

    let path = report_path.unwrap_or_else(|| config.output_dir.join("audit.json"));
    report.write_json(&path)?;
    Reporter::report_info(&format!("Report written to {}", path.display()));

    Ok(report.is_clean())
}
