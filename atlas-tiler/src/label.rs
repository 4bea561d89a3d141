//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Cell labels and reading order

use crate::tiler::GridCell;
use geo::{Centroid, Point};
use std::cmp::Ordering;

/// Spreadsheet style column name: A..Z, AA, AB, ..
pub fn column_label(column: u32) -> String {
    let mut letters = Vec::new();
    let mut index = column as i64 - 1;
    while index >= 0 {
        letters.push((b'A' + (index % 26) as u8) as char);
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Column letters followed by the row number, e.g. "C12"
pub fn cell_label(row: u32, column: u32) -> String {
    format!("{}{}", column_label(column), row)
}

fn cell_center(cell: &GridCell) -> Point<f64> {
    cell.geometry
        .centroid()
        .unwrap_or_else(|| Point::new(f64::NAN, f64::NAN))
}

/// Reading order: top row first, left to right within a row
pub fn reading_order(a: &Point<f64>, b: &Point<f64>) -> Ordering {
    b.y()
        .partial_cmp(&a.y())
        .unwrap_or(Ordering::Equal)
        .then(a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal))
}

/// Sort cells in reading order and number them from 1
pub fn assign_serials(cells: &mut Vec<GridCell>) {
    let mut keyed: Vec<(Point<f64>, GridCell)> = cells
        .drain(..)
        .map(|cell| (cell_center(&cell), cell))
        .collect();
    keyed.sort_by(|a, b| reading_order(&a.0, &b.0));
    for (serial, (_, mut cell)) in keyed.into_iter().enumerate() {
        cell.serial = serial as u32 + 1;
        cells.push(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label(1), "A");
        assert_eq!(column_label(3), "C");
        assert_eq!(column_label(26), "Z");
        assert_eq!(column_label(27), "AA");
        assert_eq!(column_label(28), "AB");
        assert_eq!(column_label(52), "AZ");
        assert_eq!(column_label(53), "BA");
        assert_eq!(column_label(702), "ZZ");
        assert_eq!(column_label(703), "AAA");
        assert_eq!(column_label(0), "");
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(12, 3), "C12");
        assert_eq!(cell_label(1, 27), "AA1");
    }

    #[test]
    fn test_reading_order() {
        let upper_right = Point::new(10.0, 10.0);
        let upper_left = Point::new(0.0, 10.0);
        let lower_left = Point::new(0.0, 0.0);
        assert_eq!(reading_order(&upper_left, &upper_right), Ordering::Less);
        assert_eq!(reading_order(&upper_right, &lower_left), Ordering::Less);
        assert_eq!(reading_order(&lower_left, &upper_left), Ordering::Greater);
    }
}
