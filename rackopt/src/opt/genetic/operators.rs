use log::trace;
use rackplan::entities::{Candidate, FacilityLayout, Rack};
use rackplan::geometry::primitives::Point;
use rackplan::validation::{PlacementAttempt, PlacementValidator, first_valid};
use rand::Rng;

use crate::opt::genetic::Individual;
use crate::samplers::uniform_pos_sampler::UniformPosSampler;

/// Builds a candidate by trying, for each rack in order, up to `max_attempts` uniformly sampled positions.
pub fn random_candidate(
    racks: &[Rack],
    layout: &FacilityLayout,
    validator: &PlacementValidator,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Candidate {
    let mut result: Vec<Rack> = Vec::with_capacity(racks.len());
    for rack in racks {
        let attempt = match UniformPosSampler::new(layout, rack.dims()) {
            None => PlacementAttempt::Unplaced,
            Some(sampler) => first_valid(
                std::iter::repeat_with(|| sampler.sample(rng)),
                max_attempts,
                |p| validator.is_valid_placement(rack, p, layout, &result),
            ),
        };
        result.push(match attempt {
            PlacementAttempt::Placed(p) => rack.placed_at(p),
            PlacementAttempt::Unplaced => rack.unplaced(),
        });
    }
    Candidate::new(result)
}

/// Draws `tournament_size` individuals uniformly with replacement and returns the fittest.
pub fn tournament_select<'a>(
    population: &'a [Individual],
    tournament_size: usize,
    rng: &mut impl Rng,
) -> &'a Individual {
    assert!(!population.is_empty());
    let mut winner = &population[rng.random_range(0..population.len())];
    for _ in 1..tournament_size {
        let contender = &population[rng.random_range(0..population.len())];
        if contender.fitness() > winner.fitness() {
            winner = contender;
        }
    }
    winner
}

/// Offspring with the racks before `idx` taken from `parent_1` and the rest from `parent_2`.
/// Positions are copied as they are.
pub fn crossover_at(parent_1: &Candidate, parent_2: &Candidate, idx: usize) -> Candidate {
    debug_assert_eq!(parent_1.len(), parent_2.len());
    let idx = idx.min(parent_1.len());
    parent_1.racks()[..idx]
        .iter()
        .chain(&parent_2.racks()[idx..])
        .cloned()
        .collect::<Vec<_>>()
        .into()
}

/// Single-point crossover at a random index in `1..n`, so both parents contribute.
pub fn single_point_crossover(
    parent_1: &Candidate,
    parent_2: &Candidate,
    rng: &mut impl Rng,
) -> Candidate {
    match parent_1.len() {
        0 | 1 => parent_1.clone(),
        n => crossover_at(parent_1, parent_2, rng.random_range(1..n)),
    }
}

/// Unplaces every rack that conflicts with a placed rack preceding it in the candidate.
///
/// Genes of two independently built parents can collide after crossover.
/// Returns the number of racks that were unplaced.
pub fn repair(
    candidate: &mut Candidate,
    layout: &FacilityLayout,
    validator: &PlacementValidator,
) -> usize {
    let mut n_unplaced = 0;
    for i in 0..candidate.len() {
        let rack = &candidate.racks()[i];
        let Some(pos) = rack.position() else {
            continue;
        };
        let preceding = candidate.racks()[..i].iter();
        if let Some(v) = validator.first_violation(rack, pos, layout, preceding) {
            trace!("[GA] repair unplaces {}: {v}", rack.id());
            let unplaced = rack.unplaced();
            candidate.replace(i, unplaced);
            n_unplaced += 1;
        }
    }
    n_unplaced
}

/// Moves each placed rack with probability `rate` by a random offset of at most `max_offset` per axis.
/// The move is only kept if the rack remains valid with respect to all other racks of the candidate.
/// Unplaced racks are left alone. Returns the number of accepted moves.
pub fn mutate(
    candidate: &mut Candidate,
    layout: &FacilityLayout,
    validator: &PlacementValidator,
    rate: f64,
    max_offset: f64,
    rng: &mut impl Rng,
) -> usize {
    let bounds = layout.bounds();
    let mut n_moved = 0;
    for i in 0..candidate.len() {
        let rack = &candidate.racks()[i];
        let Some(pos) = rack.position() else {
            continue;
        };
        if !rng.random_bool(rate) {
            continue;
        }
        let dx = rng.random_range(-max_offset..=max_offset);
        let dy = rng.random_range(-max_offset..=max_offset);
        let new_pos: Point = bounds.clamp_position(pos.translate(dx, dy), rack.dims());

        let valid = validator
            .first_violation(rack, new_pos, layout, candidate.others(i))
            .is_none();
        if valid {
            let moved = rack.placed_at(new_pos);
            candidate.replace(i, moved);
            n_moved += 1;
        }
    }
    n_moved
}
