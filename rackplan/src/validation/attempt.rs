use crate::geometry::primitives::Point;

/// Outcome of a bounded search for a valid position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementAttempt {
    Placed(Point),
    Unplaced,
}

/// Tries at most `max_attempts` positions from `candidates` and returns the first one accepted by `is_valid`.
///
/// Terminates after `max_attempts` draws even if `candidates` is infinite.
pub fn first_valid(
    candidates: impl IntoIterator<Item = Point>,
    max_attempts: usize,
    mut is_valid: impl FnMut(Point) -> bool,
) -> PlacementAttempt {
    candidates
        .into_iter()
        .take(max_attempts)
        .find(|p| is_valid(*p))
        .map_or(PlacementAttempt::Unplaced, PlacementAttempt::Placed)
}
