use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use rackplan::entities::{Candidate, FacilityLayout, Rack};
use rackplan::eval::Scorer;
use rackplan::util::EngineConfig;
use rackplan::util::assertions::candidate_is_feasible;
use rackplan::validation::PlacementValidator;
use rand::prelude::SmallRng;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::GeneticConfig;
use crate::opt::PlacementStrategy;

mod individual;
pub mod operators;

#[doc(inline)]
pub use individual::Individual;

/// Outcome of a genetic run.
#[derive(Clone, Debug)]
pub struct GAReport {
    /// Fittest individual observed over the entire run
    pub best: Individual,
    /// Fitness of every member of the initial population
    pub initial_fitness: Vec<f64>,
    /// Fitness of the best individual observed so far, after each completed generation
    pub best_fitness_history: Vec<f64>,
}

/// Evolves a population of complete layouts with tournament selection, single-point crossover,
/// positional mutation and elitism.
pub struct GeneticPlacer {
    pub config: GeneticConfig,
    pub validator: PlacementValidator,
    pub scorer: Scorer,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    cancel_flag: Option<Arc<AtomicBool>>,
    n_evals: usize,
}

impl GeneticPlacer {
    pub fn new(config: GeneticConfig, engine: &EngineConfig, rng: SmallRng) -> Self {
        assert!(config.population_size > 0);
        assert!(config.elite_count <= config.population_size);
        Self {
            config,
            validator: PlacementValidator::new(engine.min_aisle_width),
            scorer: Scorer::new(engine),
            rng,
            cancel_flag: None,
            n_evals: 0,
        }
    }

    /// The run stops at the next generation boundary once `flag` is raised.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::Relaxed))
    }

    pub fn run(&mut self, racks: &[Rack], layout: &FacilityLayout) -> GAReport {
        let start = Instant::now();
        info!(
            "[GA] evolving {} candidates over {} generations for {} racks",
            self.config.population_size,
            self.config.n_generations,
            racks.len()
        );

        let initial = (0..self.config.population_size)
            .map(|_| {
                operators::random_candidate(
                    racks,
                    layout,
                    &self.validator,
                    self.config.init_attempts,
                    &mut self.rng,
                )
            })
            .collect_vec();
        let mut population = self.evaluate(initial, layout);
        let initial_fitness = population.iter().map(|i| i.fitness()).collect_vec();

        let mut best = fittest(&population).clone();
        info!("[GA] initial population, best: {}", best.score());

        let mut best_fitness_history = Vec::with_capacity(self.config.n_generations);

        for generation in 0..self.config.n_generations {
            if self.cancelled() {
                warn!("[GA] cancelled after {generation} generations");
                break;
            }
            population = self.next_generation(population, layout);

            let gen_best = fittest(&population);
            if gen_best.fitness() > best.fitness() {
                debug!(
                    "[GA] gen {generation}: improved best {:.3} -> {:.3}",
                    best.fitness(),
                    gen_best.fitness()
                );
                best = gen_best.clone();
            }
            best_fitness_history.push(best.fitness());

            debug!(
                "[GA] gen {generation}: best {:.3}, mean {:.3}, best ever {:.3}",
                gen_best.fitness(),
                population.iter().map(|i| i.fitness()).sum::<f64>() / population.len() as f64,
                best.fitness()
            );
        }

        debug_assert!(candidate_is_feasible(
            best.candidate(),
            layout,
            &self.validator
        ));

        info!(
            "[GA] optimization finished in {:.3}ms ({} evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.n_evals.separate_with_commas()
        );
        info!(
            "[GA] best candidate places {}/{} racks, score: {}",
            best.candidate().n_placed(),
            best.candidate().len(),
            best.score()
        );

        GAReport {
            best,
            initial_fitness,
            best_fitness_history,
        }
    }

    /// Elites are carried over unchanged, the remainder is filled with offspring.
    fn next_generation(
        &mut self,
        population: Vec<Individual>,
        layout: &FacilityLayout,
    ) -> Vec<Individual> {
        let n_offspring = self.config.population_size - self.config.elite_count;
        let mut offspring = Vec::with_capacity(n_offspring);
        let (mut n_repaired, mut n_mutated) = (0, 0);

        while offspring.len() < n_offspring {
            let parent_1 =
                operators::tournament_select(&population, self.config.tournament_size, &mut self.rng);
            let parent_2 =
                operators::tournament_select(&population, self.config.tournament_size, &mut self.rng);

            let mut child = operators::single_point_crossover(
                parent_1.candidate(),
                parent_2.candidate(),
                &mut self.rng,
            );
            n_repaired += operators::repair(&mut child, layout, &self.validator);
            n_mutated += operators::mutate(
                &mut child,
                layout,
                &self.validator,
                self.config.mutation_rate,
                self.config.mutation_offset,
                &mut self.rng,
            );
            offspring.push(child);
        }
        debug!("[GA] offspring: {n_repaired} racks unplaced by repair, {n_mutated} racks moved");

        let mut next = population
            .into_iter()
            .sorted_by_key(|i| std::cmp::Reverse(OrderedFloat(i.fitness())))
            .take(self.config.elite_count)
            .collect_vec();
        next.extend(self.evaluate(offspring, layout));
        next
    }

    /// Scores every candidate. Order is preserved, so results do not depend on the thread pool.
    fn evaluate(&mut self, candidates: Vec<Candidate>, layout: &FacilityLayout) -> Vec<Individual> {
        self.n_evals += candidates.len();
        let scorer = &self.scorer;
        match self.config.parallel_evaluation {
            true => candidates
                .into_par_iter()
                .map(|c| Individual::evaluate(c, layout, scorer))
                .collect(),
            false => candidates
                .into_iter()
                .map(|c| Individual::evaluate(c, layout, scorer))
                .collect(),
        }
    }
}

impl PlacementStrategy for GeneticPlacer {
    fn place(&mut self, racks: &[Rack], layout: &FacilityLayout) -> Candidate {
        self.run(racks, layout).best.into_candidate()
    }
}

/// First individual with the highest fitness.
fn fittest(population: &[Individual]) -> &Individual {
    population
        .iter()
        .rev()
        .max_by_key(|i| OrderedFloat(i.fitness()))
        .expect("population is never empty")
}
