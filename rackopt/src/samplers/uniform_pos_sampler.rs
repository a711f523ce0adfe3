use rackplan::entities::FacilityLayout;
use rackplan::geometry::primitives::{Dimensions, Point};
use rand::Rng;
use rand::distr::{Distribution, Uniform};

/// Samples lower-left positions uniformly such that a rack of the given dimensions stays within the facility bounds.
pub struct UniformPosSampler {
    pub x_distr: Uniform<f64>,
    pub y_distr: Uniform<f64>,
}

impl UniformPosSampler {
    /// Returns `None` if a rack of `dims` does not fit in the bounds of `layout` at all.
    pub fn new(layout: &FacilityLayout, dims: Dimensions) -> Option<Self> {
        let bounds = layout.bounds();
        let x_distr = Uniform::new_inclusive(bounds.x_min, bounds.x_max - dims.width).ok()?;
        let y_distr = Uniform::new_inclusive(bounds.y_min, bounds.y_max - dims.height).ok()?;
        Some(Self { x_distr, y_distr })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        Point(self.x_distr.sample(rng), self.y_distr.sample(rng))
    }
}
