// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tool configuration

use crate::evaluation::FuzzerConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "geom2d.toml";

/// Configuration for the `geom2d` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geom2dConfig {
    /// Random audit settings
    pub fuzz: FuzzerConfig,
    /// Output directory for audit reports
    pub output_dir: PathBuf,
    /// Verbose output
    pub verbose: bool,
}

impl Default for Geom2dConfig {
    fn default() -> Self {
        Self {
            fuzz: FuzzerConfig::default(),
            output_dir: PathBuf::from("target/geom2d"),
            verbose: false,
        }
    }
}

impl Geom2dConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Geom2dConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `geom2d.toml` if present, then apply environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            log::debug!("Loading {}", CONFIG_FILE);
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `GEOM2D_*` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(count) = lookup("GEOM2D_FUZZ_COUNT") {
            self.fuzz.count = count
                .parse()
                .with_context(|| format!("Invalid GEOM2D_FUZZ_COUNT: {}", count))?;
        }

        if let Some(seed) = lookup("GEOM2D_SEED") {
            self.fuzz.seed = Some(
                seed.parse()
                    .with_context(|| format!("Invalid GEOM2D_SEED: {}", seed))?,
            );
        }

        if let Some(range) = lookup("GEOM2D_COORD_RANGE") {
            self.fuzz.coord_range = range
                .parse()
                .with_context(|| format!("Invalid GEOM2D_COORD_RANGE: {}", range))?;
        }

        if let Some(output_dir) = lookup("GEOM2D_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(verbose) = lookup("GEOM2D_VERBOSE") {
            self.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
