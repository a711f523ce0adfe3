use anyhow::Result;
use clap::ValueEnum;
use log::info;
use rackplan::entities::{
    Candidate, FacilityLayout, PlacementSolution, Rack, RackCounts, generate_racks,
};
use rackplan::eval::Scorer;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

use crate::config::OptimizerConfig;
use crate::opt::genetic::GeneticPlacer;
use crate::opt::grid::GridPlacer;

pub mod genetic;
pub mod grid;

/// A way of assigning positions to a sequence of racks.
pub trait PlacementStrategy {
    /// Places `racks` in `layout`. The returned candidate contains every rack of `racks`,
    /// in the same order, each either placed or unplaced.
    fn place(&mut self, racks: &[Rack], layout: &FacilityLayout) -> Candidate;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Deterministic first-fit over a fixed step grid
    Grid,
    /// Population-based stochastic search over complete layouts
    Genetic,
}

/// Generates the requested racks, places them with the selected strategy and evaluates the result.
pub fn optimize(
    counts: &RackCounts,
    layout: &FacilityLayout,
    strategy: StrategyKind,
    config: &OptimizerConfig,
) -> Result<PlacementSolution> {
    layout.validate()?;
    config.validate()?;

    let racks = generate_racks(counts);
    info!(
        "[OPT] placing {} racks in a {}x{} facility using the {strategy:?} strategy",
        racks.len(),
        layout.width,
        layout.height
    );

    let candidate = match strategy {
        StrategyKind::Grid => GridPlacer::new(config.grid, &config.engine).place(&racks, layout),
        StrategyKind::Genetic => {
            let rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            GeneticPlacer::new(config.genetic, &config.engine, rng).place(&racks, layout)
        }
    };

    Ok(PlacementSolution::evaluate(
        candidate,
        layout,
        &Scorer::new(&config.engine),
    ))
}
