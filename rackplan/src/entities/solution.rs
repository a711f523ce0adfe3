use crate::entities::{Candidate, FacilityLayout, Rack};
use crate::eval::{MetricsResult, ScoreResult, Scorer, aggregate_metrics};

/// The result of an optimization run: all racks (placed or not) with their evaluation.
#[derive(Clone, Debug)]
pub struct PlacementSolution {
    pub racks: Vec<Rack>,
    pub score: ScoreResult,
    pub metrics: MetricsResult,
}

impl PlacementSolution {
    /// Evaluates `candidate` from scratch and wraps it into a solution.
    pub fn evaluate(candidate: Candidate, layout: &FacilityLayout, scorer: &Scorer) -> Self {
        let score = scorer.score(candidate.racks(), layout);
        let metrics = aggregate_metrics(candidate.racks(), layout);
        PlacementSolution {
            racks: candidate.into_racks(),
            score,
            metrics,
        }
    }

    pub fn placed(&self) -> impl Iterator<Item = &Rack> {
        self.racks.iter().filter(|r| r.is_placed())
    }

    pub fn unplaced(&self) -> impl Iterator<Item = &Rack> {
        self.racks.iter().filter(|r| !r.is_placed())
    }
}
