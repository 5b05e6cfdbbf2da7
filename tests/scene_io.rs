// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene loading and batch queries

use anyhow::Result;
use geom2d::geometry::batch;
use geom2d::{Scene, Shape};
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_json_scene_pairs() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{
  "shapes": [
    {{"type": "point", "pos": [0.5, 0.5]}},
    {{"type": "aabb", "pos": [0.0, 0.0], "width": 2.0, "height": 2.0}},
    {{"type": "circle", "pos": [10.0, 10.0], "radius": 1.0}},
    {{"type": "sector", "pos": [0.0, 0.0], "radius": 5.0, "start_angle": 0.0, "end_angle": 90.0}}
  ]
}}"#
    )?;

    let scene = Scene::load(file.path())?;
    assert_eq!(scene.shapes.len(), 4);
    assert_eq!(scene.intersecting_pairs(), vec![(0, 1), (0, 3), (1, 3)]);
    Ok(())
}

#[test]
fn test_toml_scene_matches_json() -> Result<()> {
    let mut toml_file = Builder::new().suffix(".toml").tempfile()?;
    write!(
        toml_file,
        r#"
[[shapes]]
type = "obb"
pos = [0.0, 0.0]
width = 4.0
height = 2.0
angle = 30.0

[[shapes]]
type = "triangle"
a = [0.0, 0.0]
b = [5.0, 0.0]
c = [0, 5]
"#
    )?;
    let scene = Scene::load(toml_file.path())?;

    let dir = tempfile::tempdir()?;
    let json_path = dir.path().join("scene.json");
    scene.save(&json_path)?;
    let reloaded = Scene::load(&json_path)?;

    assert_eq!(reloaded, scene);
    assert_eq!(
        scene.shapes[1],
        Shape::triangle(0.0, 0.0, 5.0, 0.0, 0.0, 5.0)
    );
    Ok(())
}

#[test]
fn test_invalid_scene_reports_index() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{"shapes": [
            {{"type": "point", "pos": [0.0, 0.0]}},
            {{"type": "aabb", "pos": [0.0, 0.0], "width": -2.0, "height": 2.0}}
        ]}}"#
    )?;

    let err = Scene::load(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Shape #1"), "{:#}", err);
    Ok(())
}

#[test]
fn test_query_probe() {
    let shapes = vec![
        Shape::circle(0.0, 0.0, 1.0),
        Shape::segment(-10.0, 0.0, 10.0, 0.0),
        Shape::triangle(20.0, 20.0, 21.0, 20.0, 20.0, 21.0),
    ];
    assert_eq!(batch::query(&Shape::point(0.5, 0.0), &shapes), vec![0, 1]);
    assert!(batch::query(&Shape::point(50.0, 50.0), &shapes).is_empty());
}
