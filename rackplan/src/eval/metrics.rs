use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{FacilityLayout, Rack, RackType};

/// Share of the usable floor that is ideally left free for aisles.
pub const IDEAL_AISLE_RATIO: f64 = 0.35;

/// Reporting figures of a solution. Never used for ranking.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsResult {
    pub total_racks: usize,
    pub unplaced_racks: usize,
    pub total_capacity: u64,
    pub average_distance_to_entrance: f64,
    pub average_distance_to_dock: f64,
    pub area_utilization: f64,
    pub aisle_efficiency: f64,
    pub placed_by_type: BTreeMap<RackType, usize>,
}

/// Aggregates the reporting metrics of `racks`. Unplaced racks only count towards `unplaced_racks`.
pub fn aggregate_metrics(racks: &[Rack], layout: &FacilityLayout) -> MetricsResult {
    let unplaced_racks = racks.iter().filter(|r| !r.is_placed()).count();
    let placed = racks.iter().filter(|r| r.is_placed()).collect::<Vec<_>>();
    if placed.is_empty() {
        return MetricsResult {
            unplaced_racks,
            ..MetricsResult::default()
        };
    }

    let n = placed.len() as f64;
    let centers = placed.iter().filter_map(|r| r.center()).collect::<Vec<_>>();
    let average_distance_to_entrance =
        centers.iter().map(|c| c.distance(&layout.entrance)).sum::<f64>() / n;
    let average_distance_to_dock =
        centers.iter().map(|c| c.distance(&layout.loading_dock)).sum::<f64>() / n;

    let usable_area = layout.usable_area();
    let rack_area = placed.iter().map(|r| r.area()).sum::<f64>();
    let (area_utilization, aisle_efficiency) = match usable_area > 0.0 {
        false => (0.0, 0.0),
        true => {
            let aisle_ratio = (usable_area - rack_area) / usable_area;
            let aisle_efficiency =
                (1.0 - (aisle_ratio - IDEAL_AISLE_RATIO).abs() / IDEAL_AISLE_RATIO).max(0.0);
            (rack_area / usable_area, aisle_efficiency)
        }
    };

    let mut placed_by_type = BTreeMap::new();
    for r in &placed {
        *placed_by_type.entry(r.rack_type()).or_insert(0) += 1;
    }

    MetricsResult {
        total_racks: placed.len(),
        unplaced_racks,
        total_capacity: placed.iter().map(|r| r.capacity() as u64).sum(),
        average_distance_to_entrance,
        average_distance_to_dock,
        area_utilization,
        aisle_efficiency,
        placed_by_type,
    }
}
