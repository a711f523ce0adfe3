use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::{FacilityLayout, Rack};
use crate::geometry::kernel::variance;
use crate::util::EngineConfig;

pub const EFFICIENCY_WEIGHT: f64 = 30.0;
pub const ACCESSIBILITY_WEIGHT: f64 = 25.0;
pub const WORKFLOW_WEIGHT: f64 = 25.0;
pub const DENSITY_WEIGHT: f64 = 20.0;

/// Stand-in for the density component of the total score.
///
/// No actual density metric is computed: every non-empty layout receives this constant
/// for the density term. Replacing it by a real metric shifts every score produced by the engine.
pub const DEFAULT_DENSITY_PLACEHOLDER: f64 = 0.25;

/// Quality of a set of placed racks. Derived data, recomputed whenever the racks change.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted combination of all components, in `[0, 100]`
    pub total_score: f64,
    /// Rack area over usable floor area, in `[0, 1]`
    pub layout_efficiency: f64,
    /// Closeness of the racks to the entrance and loading dock, in `[0, 1]`
    pub accessibility: f64,
    /// Regularity of the rack grid, in `[0, 1]`
    pub workflow: f64,
}

impl Display for ScoreResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} (eff: {:.3}, acc: {:.3}, wf: {:.3})",
            self.total_score, self.layout_efficiency, self.accessibility, self.workflow
        )
    }
}

/// Computes [`ScoreResult`]s. Only placed racks are taken into account.
#[derive(Clone, Copy, Debug)]
pub struct Scorer {
    pub density_placeholder: f64,
}

impl Scorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            density_placeholder: config.density_placeholder,
        }
    }

    pub fn score(&self, racks: &[Rack], layout: &FacilityLayout) -> ScoreResult {
        let placed = racks.iter().filter(|r| r.is_placed()).collect_vec();
        if placed.is_empty() {
            return ScoreResult::default();
        }

        let layout_efficiency = layout_efficiency(&placed, layout);
        let accessibility = accessibility(&placed, layout);
        let workflow = workflow(&placed);

        let total_score = (layout_efficiency * EFFICIENCY_WEIGHT
            + accessibility * ACCESSIBILITY_WEIGHT
            + workflow * WORKFLOW_WEIGHT
            + self.density_placeholder * DENSITY_WEIGHT)
            .clamp(0.0, 100.0);

        ScoreResult {
            total_score,
            layout_efficiency,
            accessibility,
            workflow,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// Total rack area over the usable area of the facility.
pub fn layout_efficiency(placed: &[&Rack], layout: &FacilityLayout) -> f64 {
    let usable_area = layout.usable_area();
    if placed.is_empty() || usable_area <= 0.0 {
        return 0.0;
    }
    let rack_area = placed.iter().map(|r| r.area()).sum::<f64>();
    (rack_area / usable_area).clamp(0.0, 1.0)
}

/// Average closeness of the rack centers to the entrance and loading dock,
/// with distances normalized by the diagonal of the facility.
pub fn accessibility(placed: &[&Rack], layout: &FacilityLayout) -> f64 {
    let diagonal = layout.diagonal();
    if diagonal <= 0.0 {
        return 0.0;
    }
    let closeness = |d: f64| (1.0 - d / diagonal).clamp(0.0, 1.0);

    let per_rack = placed
        .iter()
        .filter_map(|r| r.center())
        .map(|c| {
            let entrance = closeness(c.distance(&layout.entrance));
            let dock = closeness(c.distance(&layout.loading_dock));
            (entrance + dock) / 2.0
        })
        .collect_vec();

    match per_rack.is_empty() {
        true => 0.0,
        false => per_rack.iter().sum::<f64>() / per_rack.len() as f64,
    }
}

/// Regularity of the spacing between the distinct x and y coordinates of the placed racks.
pub fn workflow(placed: &[&Rack]) -> f64 {
    let positions = placed.iter().filter_map(|r| r.position()).collect_vec();
    match positions.len() {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }

    let distinct = |coords: Vec<f64>| {
        coords
            .into_iter()
            .map(OrderedFloat)
            .sorted()
            .dedup()
            .map(|c| c.into_inner())
            .collect_vec()
    };
    let xs = distinct(positions.iter().map(|p| p.x()).collect());
    let ys = distinct(positions.iter().map(|p| p.y()).collect());

    if xs.len() < 2 || ys.len() < 2 {
        return 0.5;
    }

    let gaps = |coords: &[f64]| coords.windows(2).map(|w| w[1] - w[0]).collect_vec();
    let var_x = variance(&gaps(&xs));
    let var_y = variance(&gaps(&ys));

    (1.0 / (1.0 + var_x + var_y)).clamp(0.0, 1.0)
}
