//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::extent::Extent;
use crate::label::{assign_serials, reading_order};
use crate::paper::GridConfig;
use crate::tiler::{FeatureIndex, GridCell, GridTiler, MAX_LATTICE_CELLS};
use geo::{line_string, polygon, BoundingRect, Centroid, Geometry, Intersects, LineString};
use std::collections::HashSet;

const SRID: i32 = 25832;

fn tiler(size: f64) -> GridTiler {
    GridTiler::new(GridConfig::new(size, size).unwrap())
}

fn square(minx: f64, miny: f64, size: f64) -> Geometry<f64> {
    Geometry::Polygon(polygon![
        (x: minx, y: miny),
        (x: minx + size, y: miny),
        (x: minx + size, y: miny + size),
        (x: minx, y: miny + size),
    ])
}

fn labels(cells: &[GridCell]) -> Vec<(&str, u32)> {
    cells.iter().map(|c| (c.label.as_str(), c.serial)).collect()
}

#[test]
fn test_sparse_cells() {
    // extent (-10,-10)-(320,220): 4 columns, 3 rows
    let geoms = vec![square(0.0, 0.0, 10.0), square(300.0, 200.0, 10.0)];
    let tiler = tiler(100.0);
    let lattice = tiler.lattice(&geoms).unwrap();
    assert_eq!((lattice.rows, lattice.columns), (3, 4));

    let mut cells = tiler.tile(&geoms, SRID);
    assert_eq!(labels(&cells), vec![("A1", 0), ("D3", 0)]);
    assert_eq!(cells[1].row, 3);
    assert_eq!(cells[1].column, 4);
    assert_eq!(
        Extent::from(&cells[1].geometry.bounding_rect().unwrap()),
        Extent::new(290.0, 190.0, 390.0, 290.0)
    );
    assert_eq!(cells[0].srid, SRID);

    assert_eq!(
        tiler.with_index(false).tile(&geoms, SRID),
        cells,
        "brute force and index agree"
    );

    assign_serials(&mut cells);
    // top row first
    assert_eq!(labels(&cells), vec![("D3", 1), ("A1", 2)]);
}

#[test]
fn test_line_cells() {
    let geoms = vec![Geometry::LineString(
        line_string![(x: 0.0, y: 0.0), (x: 250.0, y: 0.0)],
    )];
    let mut cells = tiler(100.0).tile(&geoms, SRID);
    assign_serials(&mut cells);
    assert_eq!(labels(&cells), vec![("A1", 1), ("B1", 2), ("C1", 3)]);
}

#[test]
fn test_covered_cells() {
    // cells completely inside the polygon are kept
    let geoms = vec![square(0.0, 0.0, 250.0)];
    let cells = tiler(100.0).tile(&geoms, SRID);
    assert_eq!(cells.len(), 9);
    assert!(cells.iter().any(|c| c.label == "B2"));
}

#[test]
fn test_cell_invariants() {
    let geoms = vec![
        Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1000.0, y: 1000.0)]),
        square(1500.0, 0.0, 120.0),
        square(-400.0, 800.0, 30.0),
    ];
    let mut cells = tiler(100.0).tile(&geoms, SRID);
    assign_serials(&mut cells);
    assert!(cells.len() > 10);

    // every cell intersects at least one geometry
    for cell in &cells {
        assert!(geoms.iter().any(|g| g.intersects(&cell.geometry)));
    }
    // unique lattice positions
    let positions: HashSet<(u32, u32)> = cells.iter().map(|c| (c.row, c.column)).collect();
    assert_eq!(positions.len(), cells.len());
    // serials 1..N in reading order
    let serials: Vec<u32> = cells.iter().map(|c| c.serial).collect();
    assert_eq!(serials, (1..=cells.len() as u32).collect::<Vec<_>>());
    let mut sorted = cells.clone();
    sorted.sort_by(|a, b| {
        reading_order(
            &a.geometry.centroid().unwrap(),
            &b.geometry.centroid().unwrap(),
        )
    });
    assert_eq!(sorted, cells);
}

#[test]
fn test_idempotent() {
    let geoms = vec![
        square(12.5, 7.25, 480.0),
        Geometry::LineString(line_string![(x: -300.0, y: 40.0), (x: 900.0, y: 650.0)]),
    ];
    let tiler = tiler(150.0);
    let mut first = tiler.tile(&geoms, SRID);
    let mut second = tiler.tile(&geoms, SRID);
    assign_serials(&mut first);
    assign_serials(&mut second);
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    let tiler = tiler(100.0);
    assert!(tiler.tile(&[], SRID).is_empty());
    let geoms = vec![Geometry::LineString(LineString::new(vec![]))];
    assert!(tiler.lattice(&geoms).is_none());
    assert!(tiler.tile(&geoms, SRID).is_empty());
}

#[test]
fn test_progress_and_cancel() {
    let geoms = vec![square(0.0, 0.0, 250.0)];
    let tiler = tiler(100.0);
    let mut rows = Vec::new();
    let cells = tiler
        .tile_with_progress(&geoms, SRID, |row, total| {
            rows.push((row, total));
            true
        })
        .unwrap();
    assert_eq!(cells.len(), 9);
    assert_eq!(rows, vec![(1, 3), (2, 3), (3, 3)]);

    let result = tiler.tile_with_progress(&geoms, SRID, |row, _| row < 2);
    assert_eq!(result, Err(GridError::Cancelled));
}

#[test]
fn test_feature_index() {
    let geoms = vec![
        square(0.0, 0.0, 10.0),
        square(50.0, 50.0, 10.0),
        Geometry::LineString(LineString::new(vec![])),
    ];
    let index = FeatureIndex::new(&geoms);
    assert_eq!(index.candidates(&Extent::new(-5.0, -5.0, 5.0, 5.0)), vec![0]);
    assert_eq!(index.candidates(&Extent::new(0.0, 0.0, 100.0, 100.0)), vec![0, 1]);
    assert!(index.candidates(&Extent::new(20.0, 20.0, 30.0, 30.0)).is_empty());
}

#[test]
fn test_lattice_limit() {
    // 10020 x 10020 candidate cells of 1 x 1
    let geoms = vec![square(0.0, 0.0, 10.0), square(9990.0, 9990.0, 10.0)];
    let tiler = tiler(1.0);
    assert!(tiler.lattice(&geoms).unwrap().len() > MAX_LATTICE_CELLS);
    let mut visited = 0;
    let result = tiler.tile_with_progress(&geoms, SRID, |_, _| {
        visited += 1;
        true
    });
    match result {
        Err(GridError::Config(msg)) => assert!(msg.contains("10020 x 10020"), "{}", msg),
        other => panic!("Unexpected result {:?}", other),
    }
    assert_eq!(visited, 0);
    assert!(tiler.tile(&geoms, SRID).is_empty());

    // Just below the limit
    let geoms = vec![square(0.0, 0.0, 10.0), square(1990.0, 1990.0, 10.0)];
    assert!(tiler.lattice(&geoms).unwrap().len() <= MAX_LATTICE_CELLS);
}
