//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Regular cell lattice with bottom-left origin

use crate::extent::Extent;
use crate::paper::GridConfig;

/// Row/column layout of candidate cells covering an extent.
///
/// Row 1 starts at `miny` and rows grow upwards, column 1 starts at `minx`
/// and columns grow to the right. The last row and column may reach beyond
/// `maxy`/`maxx`.
#[derive(PartialEq, Clone, Debug)]
pub struct Lattice {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub rows: u32,
    pub columns: u32,
}

/// Number of steps `k >= 0` with `start + k * step < end`, capped at `u32::MAX`
fn steps(start: f64, end: f64, step: f64) -> u32 {
    let span = end - start;
    if !(span > 0.0) {
        return 0;
    }
    (span / step).ceil().min(u32::MAX as f64) as u32
}

impl Lattice {
    pub fn new(extent: &Extent, config: &GridConfig) -> Lattice {
        Lattice {
            origin_x: extent.minx,
            origin_y: extent.miny,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            rows: steps(extent.miny, extent.maxy, config.cell_height),
            columns: steps(extent.minx, extent.maxx, config.cell_width),
        }
    }
    pub fn len(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Extent of the cell at the 1-based `row` and `column`
    pub fn cell_extent(&self, row: u32, column: u32) -> Extent {
        let x = self.origin_x + (column - 1) as f64 * self.cell_width;
        let y = self.origin_y + (row - 1) as f64 * self.cell_height;
        Extent {
            minx: x,
            miny: y,
            maxx: x + self.cell_width,
            maxy: y + self.cell_height,
        }
    }
    pub fn iter(&self) -> LatticeIterator {
        LatticeIterator::new(self.rows, self.columns)
    }
}

/// Row-by-row iterator
pub struct LatticeIterator {
    row: u32,
    column: u32,
    rows: u32,
    columns: u32,
    finished: bool,
}

impl LatticeIterator {
    pub fn new(rows: u32, columns: u32) -> LatticeIterator {
        LatticeIterator {
            row: 1,
            column: 1,
            rows,
            columns,
            finished: rows == 0 || columns == 0,
        }
    }
}

impl Iterator for LatticeIterator {
    /// Current cell index `(row, column)`
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.row, self.column);
        if self.column < self.columns {
            self.column += 1;
        } else if self.row < self.rows {
            self.row += 1;
            self.column = 1;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}
