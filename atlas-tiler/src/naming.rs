//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Unique grid names

use std::collections::HashSet;

/// Replace characters not allowed in layer names
pub fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_").replace(':', "_")
}

/// `Grid_{scale}_{paper}_{orientation}_{dataset}`
pub fn base_name(dataset: &str, scale: u32, paper: &str, orientation: &str) -> String {
    format!(
        "Grid_{}_{}_{}_{}",
        scale,
        paper,
        orientation,
        sanitize_name(dataset)
    )
}

/// First `{base}_{NN}` (NN = 01, 02, ..) which is not in `existing`.
/// At most `existing.len() + 1` candidates are tried.
pub fn unique_name(base: &str, existing: &HashSet<String>) -> String {
    let mut counter = 1;
    let mut name = format!("{}_{:02}", base, counter);
    while existing.contains(&name) {
        counter += 1;
        name = format!("{}_{:02}", base, counter);
    }
    name
}

/// Unique grid name for a dataset
pub fn grid_name(
    dataset: &str,
    scale: u32,
    paper: &str,
    orientation: &str,
    existing: &HashSet<String>,
) -> String {
    unique_name(&base_name(dataset, scale, paper, orientation), existing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_next_free_name() {
        let existing = names(&[
            "Grid_1000_A4_quer_Parcels_01",
            "Grid_1000_A4_quer_Parcels_02",
        ]);
        assert_eq!(
            grid_name("Parcels", 1000, "A4", "quer", &existing),
            "Grid_1000_A4_quer_Parcels_03"
        );
        assert_eq!(
            grid_name("Parcels", 1000, "A4", "quer", &HashSet::new()),
            "Grid_1000_A4_quer_Parcels_01"
        );
        // Gaps are reused
        let existing = names(&["Grid_500_A3_hoch_Roads_02"]);
        assert_eq!(
            grid_name("Roads", 500, "A3", "hoch", &existing),
            "Grid_500_A3_hoch_Roads_01"
        );
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_name("Flur 1: Nord"), "Flur_1__Nord");
        assert_eq!(
            base_name("Land parcels", 2000, "A4", "portrait"),
            "Grid_2000_A4_portrait_Land_parcels"
        );
    }

    #[test]
    fn test_counter_beyond_two_digits() {
        let existing: HashSet<String> = (1..=99)
            .map(|i| format!("Grid_1000_A4_quer_Parcels_{:02}", i))
            .collect();
        assert_eq!(
            grid_name("Parcels", 1000, "A4", "quer", &existing),
            "Grid_1000_A4_quer_Parcels_100"
        );
    }
}
