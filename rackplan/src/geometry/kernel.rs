//! The four operations every other part of the engine is built on.

use crate::geometry::Footprint;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Dimensions, Point, Rect};

/// True iff `p` lies within the closed bounds of at least one section of `footprint`.
pub fn point_in_footprint(p: Point, footprint: &Footprint) -> bool {
    footprint.collides_with(&p)
}

/// Axis-aligned overlap test between two rectangles given by their lower-left corner and dimensions.
/// Rectangles sharing only an edge or a corner do not overlap.
pub fn rectangles_overlap(pos_a: Point, dim_a: Dimensions, pos_b: Point, dim_b: Dimensions) -> bool {
    Rect::from_pos_dims(pos_a, dim_a).collides_with(&Rect::from_pos_dims(pos_b, dim_b))
}

/// Euclidean distance between `p` and `q`.
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance(&q)
}

/// Population variance (mean of squared deviations), 0 for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
