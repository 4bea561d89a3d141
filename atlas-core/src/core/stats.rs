//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid statistics

use atlas_tiler::GridCell;
use geo::{Geometry, Intersects};
use stats::{MinMax, OnlineStats};
use std::collections::BTreeMap;
use std::fmt;

type Count = u64;

struct Collector {
    online: OnlineStats,
    minmax: MinMax<Count>,
}

pub struct Summary {
    pub len: usize,
    pub min: Count,
    pub max: Count,
    pub mean: f64,
    pub stddev: f64,
}

/// Named series of counts
pub struct GridStatistics(BTreeMap<String, Collector>);

impl GridStatistics {
    pub fn new() -> GridStatistics {
        GridStatistics(BTreeMap::new())
    }
    pub fn add(&mut self, key: &str, value: Count) {
        let collector = self.0.entry(key.to_string()).or_insert(Collector {
            online: OnlineStats::new(),
            minmax: MinMax::new(),
        });
        collector.online.add(value);
        collector.minmax.add(value);
    }
    pub fn summary(&self, key: &str) -> Summary {
        match self.0.get(key) {
            Some(collector) => Summary {
                len: collector.minmax.len(),
                min: *collector.minmax.min().unwrap_or(&0),
                max: *collector.minmax.max().unwrap_or(&0),
                mean: collector.online.mean(),
                stddev: collector.online.stddev(),
            },
            None => Summary {
                len: 0,
                min: 0,
                max: 0,
                mean: 0.0,
                stddev: 0.0,
            },
        }
    }
    /// Number of intersecting features per cell.
    /// Cells and features have to be in the same reference.
    pub fn features_per_cell(cells: &[GridCell], features: &[Geometry<f64>]) -> GridStatistics {
        let mut stats = GridStatistics::new();
        for cell in cells {
            let hits = features
                .iter()
                .filter(|f| f.intersects(&cell.geometry))
                .count();
            stats.add("features_per_cell", hits as Count);
        }
        stats
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "n: {}, min: {}, max: {}, mean: {:.2} +/- {:.2}",
            self.len, self.min, self.max, self.mean, self.stddev
        )
    }
}

impl fmt::Display for GridStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for key in self.0.keys() {
            writeln!(f, "{}: {}", key, self.summary(key))?;
        }
        Ok(())
    }
}
