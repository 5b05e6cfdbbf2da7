// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene files: a list of shapes in JSON or TOML

use crate::geometry::{batch, Shape};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named collection of shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Load a scene, picking the format from the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let scene = match ext.as_deref() {
            Some("json") => Self::from_json_str(&source),
            Some("toml") => Self::from_toml_str(&source),
            _ => bail!("Unsupported scene format: {}", path.display()),
        }
        .with_context(|| format!("Failed to load scene file: {}", path.display()))?;

        log::debug!("Loaded {} shapes from {}", scene.shapes.len(), path.display());
        Ok(scene)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(source).context("Invalid scene JSON")?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let scene: Scene = toml::from_str(source).context("Invalid scene TOML")?;
        scene.validate()?;
        Ok(scene)
    }

    /// Every shape must pass [`Shape::validate`]
    pub fn validate(&self) -> Result<()> {
        for (i, shape) in self.shapes.iter().enumerate() {
            shape
                .validate()
                .with_context(|| format!("Shape #{} is invalid", i))?;
        }
        Ok(())
    }

    /// Write the scene as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scene")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write scene file: {}", path.display()))?;
        Ok(())
    }

    /// Indices of every intersecting pair, `i < j`
    pub fn intersecting_pairs(&self) -> Vec<(usize, usize)> {
        batch::intersecting_pairs(&self.shapes)
    }
}

/// Parse a single shape from JSON and validate it
pub fn parse_shape(source: &str) -> Result<Shape> {
    let shape: Shape = serde_json::from_str(source)
        .with_context(|| format!("Invalid shape JSON: {}", source))?;
    shape.validate()?;
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_json_scene() -> Result<()> {
        let mut file = Builder::new().suffix(".json").tempfile()?;
        writeln!(
            file,
            r#"{{"shapes": [
                {{"type": "circle", "pos": [0.0, 0.0], "radius": 1.0}},
                {{"type": "point", "pos": [0.5, 0.0]}}
            ]}}"#
        )?;

        let scene = Scene::load(file.path())?;
        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.intersecting_pairs(), vec![(0, 1)]);
        Ok(())
    }

    #[test]
    fn test_load_toml_scene() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            r#"
[[shapes]]
type = "aabb"
pos = [0.0, 0.0]
width = 2.0
height = 2.0

[[shapes]]
type = "line_segment"
p1 = [-5.0, 0.0]
p2 = [5.0, 0.0]
"#
        )?;

        let scene = Scene::load(file.path())?;
        assert_eq!(scene.shapes, vec![
            Shape::aabb(0.0, 0.0, 2.0, 2.0),
            Shape::segment(-5.0, 0.0, 5.0, 0.0),
        ]);
        Ok(())
    }

    #[test]
    fn test_invalid_shape_is_rejected() {
        let err = Scene::from_json_str(
            r#"{"shapes": [{"type": "circle", "pos": [0.0, 0.0], "radius": -1.0}]}"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Shape #0"));
    }

    #[test]
    fn test_unknown_extension() -> Result<()> {
        let file = Builder::new().suffix(".yaml").tempfile()?;
        assert!(Scene::load(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("scene.json");
        let scene = Scene::new(vec![
            Shape::sector(0.0, 0.0, 5.0, 0.0, 90.0),
            Shape::triangle(0.0, 0.0, 1.0, 0.0, 0.0, 1.0),
        ]);
        scene.save(&path)?;
        assert_eq!(Scene::load(&path)?, scene);
        Ok(())
    }

    #[test]
    fn test_parse_shape() -> Result<()> {
        let shape = parse_shape(r#"{"type": "point", "pos": [1.0, 2.0]}"#)?;
        assert_eq!(shape, Shape::point(1.0, 2.0));
        assert!(parse_shape(r#"{"type": "hexagon"}"#).is_err());
        Ok(())
    }
}
