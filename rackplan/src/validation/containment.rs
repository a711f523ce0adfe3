use crate::geometry::Footprint;
use crate::geometry::kernel::point_in_footprint;
use crate::geometry::primitives::Rect;

/// Decides whether a rack rectangle lies inside a footprint.
pub trait FootprintContainment {
    fn contains(&self, footprint: &Footprint, rect: &Rect) -> bool;
}

/// Approximates containment by requiring each of the four corners to lie in some section.
///
/// Corners may be covered by different sections, so on a concave union the rack can
/// still cross uncovered floor between two corners.
#[derive(Clone, Copy, Debug, Default)]
pub struct CornerContainment;

impl FootprintContainment for CornerContainment {
    fn contains(&self, footprint: &Footprint, rect: &Rect) -> bool {
        rect.corners()
            .iter()
            .all(|c| point_in_footprint(*c, footprint))
    }
}
