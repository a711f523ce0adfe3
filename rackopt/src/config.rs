use anyhow::{Result, ensure};
use rackplan::util::EngineConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a rack placement optimization run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    /// Seed for the PRNG. If undefined, the genetic strategy runs in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Parameters shared by all strategies (aisle width, scoring constants)
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub genetic: GeneticConfig,
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.grid.validate()?;
        self.genetic.validate()
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            engine: EngineConfig::default(),
            grid: GridConfig::default(),
            genetic: GeneticConfig::default(),
        }
    }
}

/// Configuration of the grid placement strategy
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Distance between two consecutive grid positions, in both directions
    pub step: f64,
    /// Maximum number of grid positions tried per rack
    pub max_attempts: usize,
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.step.is_finite() && self.step > 0.0,
            "grid step must be positive, got {}",
            self.step
        );
        ensure!(self.max_attempts > 0, "grid max_attempts must be positive");
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step: 4.0,
            max_attempts: 10_000,
        }
    }
}

/// Configuration of the genetic placement strategy
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub n_generations: usize,
    /// Number of candidates drawn (with replacement) per tournament
    pub tournament_size: usize,
    /// Probability for each placed rack of an offspring to be moved
    pub mutation_rate: f64,
    /// Maximum displacement per axis of a mutation
    pub mutation_offset: f64,
    /// Number of best candidates copied unchanged into the next generation
    pub elite_count: usize,
    /// Number of random positions tried per rack when building an initial candidate
    pub init_attempts: usize,
    /// Evaluate the candidates of a generation on the rayon thread pool
    #[serde(default = "default_parallel_evaluation")]
    pub parallel_evaluation: bool,
}

fn default_parallel_evaluation() -> bool {
    true
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.population_size > 0, "population_size must be positive");
        ensure!(self.tournament_size > 0, "tournament_size must be positive");
        ensure!(
            self.elite_count <= self.population_size,
            "elite_count ({}) exceeds population_size ({})",
            self.elite_count,
            self.population_size
        );
        ensure!(
            (0.0..=1.0).contains(&self.mutation_rate),
            "mutation_rate must lie in [0, 1], got {}",
            self.mutation_rate
        );
        ensure!(
            self.mutation_offset.is_finite() && self.mutation_offset >= 0.0,
            "mutation_offset must be non-negative, got {}",
            self.mutation_offset
        );
        ensure!(self.init_attempts > 0, "init_attempts must be positive");
        Ok(())
    }
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            n_generations: 100,
            tournament_size: 3,
            mutation_rate: 0.1,
            mutation_offset: 2.5,
            elite_count: 5,
            init_attempts: 100,
            parallel_evaluation: true,
        }
    }
}
