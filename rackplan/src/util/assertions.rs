use log::error;

use crate::entities::{Candidate, FacilityLayout};
use crate::eval::ScoreResult;
use crate::validation::{FootprintContainment, PlacementValidator};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every placed rack must be valid with respect to all placed racks preceding it.
/// Overlap and clearance are symmetric, so this covers every pair.
pub fn candidate_is_feasible<C: FootprintContainment>(
    candidate: &Candidate,
    layout: &FacilityLayout,
    validator: &PlacementValidator<C>,
) -> bool {
    let racks = candidate.racks();
    for (i, rack) in racks.iter().enumerate() {
        let Some(pos) = rack.position() else {
            continue;
        };
        if let Some(v) = validator.first_violation(rack, pos, layout, racks[..i].iter()) {
            error!("rack {rack} is infeasible: {v}");
            return false;
        }
    }
    true
}

pub fn score_is_in_range(score: &ScoreResult) -> bool {
    let unit = 0.0..=1.0;
    (0.0..=100.0).contains(&score.total_score)
        && unit.contains(&score.layout_efficiency)
        && unit.contains(&score.accessibility)
        && unit.contains(&score.workflow)
}
