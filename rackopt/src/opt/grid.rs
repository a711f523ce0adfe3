use std::time::Instant;

use log::{debug, info};
use rackplan::entities::{Candidate, FacilityLayout, Rack};
use rackplan::geometry::primitives::Point;
use rackplan::util::EngineConfig;
use rackplan::util::assertions::candidate_is_feasible;
use rackplan::validation::{PlacementAttempt, PlacementValidator, first_valid};
use thousands::Separable;

use crate::config::GridConfig;
use crate::opt::PlacementStrategy;

/// Deterministic baseline: every rack, in order, goes to the first valid grid position.
/// Earlier placements are never revisited.
pub struct GridPlacer {
    pub config: GridConfig,
    pub validator: PlacementValidator,
}

impl GridPlacer {
    pub fn new(config: GridConfig, engine: &EngineConfig) -> Self {
        assert!(config.step > 0.0);
        Self {
            config,
            validator: PlacementValidator::new(engine.min_aisle_width),
        }
    }

    /// All grid positions `(i * step, j * step)` within the facility bounds, row by row.
    pub fn grid_positions(&self, layout: &FacilityLayout) -> impl Iterator<Item = Point> + use<> {
        let step = self.config.step;
        let n_cols = (layout.width / step).floor() as usize + 1;
        let n_rows = (layout.height / step).floor() as usize + 1;
        (0..n_rows).flat_map(move |j| {
            (0..n_cols).map(move |i| Point(i as f64 * step, j as f64 * step))
        })
    }
}

impl PlacementStrategy for GridPlacer {
    fn place(&mut self, racks: &[Rack], layout: &FacilityLayout) -> Candidate {
        let start = Instant::now();
        let mut n_checks: usize = 0;
        let mut result: Vec<Rack> = Vec::with_capacity(racks.len());

        for rack in racks {
            let attempt = first_valid(self.grid_positions(layout), self.config.max_attempts, |p| {
                n_checks += 1;
                self.validator.is_valid_placement(rack, p, layout, &result)
            });
            match attempt {
                PlacementAttempt::Placed(p) => {
                    debug!("[GRID] placed {} at {p}", rack.id());
                    result.push(rack.placed_at(p));
                }
                PlacementAttempt::Unplaced => {
                    debug!("[GRID] no valid grid position for {}", rack.id());
                    result.push(rack.unplaced());
                }
            }
        }

        let candidate = Candidate::new(result);
        debug_assert!(candidate_is_feasible(&candidate, layout, &self.validator));

        info!(
            "[GRID] placed {}/{} racks in {:.3}ms ({} checks)",
            candidate.n_placed(),
            candidate.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            n_checks.separate_with_commas()
        );
        candidate
    }
}
