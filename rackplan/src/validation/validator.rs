use std::fmt::{Display, Formatter};

use log::trace;

use crate::entities::{FacilityLayout, Rack};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Dimensions, Point};
use crate::util::FPA;
use crate::validation::{CornerContainment, FootprintContainment};

/// Reason a placement was rejected, one per check in the order they are performed.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    OutOfBounds,
    OutsideFootprint,
    ObstacleOverlap(String),
    RackOverlap(String),
    InsufficientAisle(String),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::OutOfBounds => write!(f, "out of bounds"),
            Violation::OutsideFootprint => write!(f, "outside footprint"),
            Violation::ObstacleOverlap(name) => write!(f, "overlaps obstacle {name}"),
            Violation::RackOverlap(id) => write!(f, "overlaps rack {id}"),
            Violation::InsufficientAisle(id) => write!(f, "too close to rack {id}"),
        }
    }
}

/// Minimum center-to-center distance between two racks: the aisle width plus the
/// average of both racks' width and height.
///
/// This is a proxy for edge-to-edge clearance and intentionally not the exact gap between the rectangles.
pub fn required_clearance(a: Dimensions, b: Dimensions, min_aisle_width: f64) -> f64 {
    min_aisle_width + (a.width + a.height + b.width + b.height) / 4.0
}

/// True if `rack` placed at `pos` keeps the required clearance to every placed rack in `placed`.
/// A distance equal to the requirement (up to [`FPA::ULPS`] ulps of rounding) passes,
/// anything measurably shorter fails.
pub fn has_adequate_aisles<'a>(
    rack: &Rack,
    pos: Point,
    placed: impl IntoIterator<Item = &'a Rack>,
    min_aisle_width: f64,
) -> bool {
    aisle_conflict(rack, pos, placed, min_aisle_width).is_none()
}

fn aisle_conflict<'a>(
    rack: &Rack,
    pos: Point,
    placed: impl IntoIterator<Item = &'a Rack>,
    min_aisle_width: f64,
) -> Option<&'a Rack> {
    let center = rack.footprint_at(pos).centroid();
    placed.into_iter().find(|other| match other.center() {
        None => false,
        Some(other_center) => {
            let required = required_clearance(rack.dims(), other.dims(), min_aisle_width);
            FPA(center.distance(&other_center)) < FPA(required)
        }
    })
}

/// Feasibility check shared by every placement strategy.
#[derive(Clone, Debug)]
pub struct PlacementValidator<C = CornerContainment> {
    pub min_aisle_width: f64,
    containment: C,
}

impl PlacementValidator<CornerContainment> {
    pub fn new(min_aisle_width: f64) -> Self {
        Self::with_containment(min_aisle_width, CornerContainment)
    }
}

impl<C: FootprintContainment> PlacementValidator<C> {
    pub fn with_containment(min_aisle_width: f64, containment: C) -> Self {
        Self {
            min_aisle_width,
            containment,
        }
    }

    /// True if `rack` can be placed at `pos` given the racks in `placed`. Unplaced racks are ignored.
    pub fn is_valid_placement(
        &self,
        rack: &Rack,
        pos: Point,
        layout: &FacilityLayout,
        placed: &[Rack],
    ) -> bool {
        self.first_violation(rack, pos, layout, placed.iter()).is_none()
    }

    /// Performs all checks in order and reports the first one that fails:
    /// bounds, footprint containment, fixed obstacles, other racks, aisle clearance.
    pub fn first_violation<'a, I>(
        &self,
        rack: &Rack,
        pos: Point,
        layout: &FacilityLayout,
        placed: I,
    ) -> Option<Violation>
    where
        I: Iterator<Item = &'a Rack> + Clone,
    {
        let rect = rack.footprint_at(pos);

        let violation = if !layout.bounds().contains_rect(&rect) {
            Some(Violation::OutOfBounds)
        } else if layout.has_restricted_footprint()
            && !self.containment.contains(&layout.footprint, &rect)
        {
            Some(Violation::OutsideFootprint)
        } else if let Some(o) = layout.obstacles.iter().find(|o| o.rect.collides_with(&rect)) {
            Some(Violation::ObstacleOverlap(o.name.clone()))
        } else if let Some(r) = placed
            .clone()
            .find(|r| r.footprint().is_some_and(|fp| fp.collides_with(&rect)))
        {
            Some(Violation::RackOverlap(r.id().to_string()))
        } else {
            aisle_conflict(rack, pos, placed, self.min_aisle_width)
                .map(|r| Violation::InsufficientAisle(r.id().to_string()))
        };

        if let Some(v) = &violation {
            trace!("[VAL] {} rejected at {pos}: {v}", rack.id());
        }
        violation
    }
}
