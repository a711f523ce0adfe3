use rackplan::entities::{Candidate, FacilityLayout};
use rackplan::eval::{ScoreResult, Scorer};

/// A candidate together with its evaluation.
///
/// The score is derived from the candidate on construction; the candidate cannot be modified afterwards.
#[derive(Clone, Debug)]
pub struct Individual {
    candidate: Candidate,
    score: ScoreResult,
}

impl Individual {
    pub fn evaluate(candidate: Candidate, layout: &FacilityLayout, scorer: &Scorer) -> Self {
        let score = scorer.score(candidate.racks(), layout);
        Self { candidate, score }
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn into_candidate(self) -> Candidate {
        self.candidate
    }

    pub fn score(&self) -> &ScoreResult {
        &self.score
    }

    pub fn fitness(&self) -> f64 {
        self.score.total_score
    }
}
