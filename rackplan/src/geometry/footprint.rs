use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Rect};

/// Usable floor of a facility, modeled as the union of one or more axis-aligned sections.
///
/// Sections may overlap or be disjoint. No hole-cutting between them is modeled,
/// so [`Footprint::area`] sums the section areas.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    sections: Vec<Rect>,
}

impl Footprint {
    pub fn new(sections: Vec<Rect>) -> Self {
        Self { sections }
    }

    /// Footprint consisting of a single section spanning `[0, width] x [0, height]`.
    /// Negative dimensions are truncated to 0.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0))])
    }

    pub fn sections(&self) -> &[Rect] {
        &self.sections
    }

    /// Sum of the areas of all sections.
    pub fn area(&self) -> f64 {
        self.sections.iter().map(|s| s.area()).sum()
    }
}

/// A point collides with the footprint if it lies within the closed bounds of at least one section.
impl CollidesWith<Point> for Footprint {
    fn collides_with(&self, p: &Point) -> bool {
        self.sections.iter().any(|s| s.collides_with(p))
    }
}
