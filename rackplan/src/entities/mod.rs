mod candidate;
mod catalog;
mod facility;
mod rack;
mod solution;

#[doc(inline)]
pub use candidate::Candidate;
#[doc(inline)]
pub use catalog::{RackCounts, RackTypeSpec, generate_racks};
#[doc(inline)]
pub use facility::{FacilityLayout, FixedObstacle, ObstacleKind};
#[doc(inline)]
pub use rack::{Rack, RackType};
#[doc(inline)]
pub use solution::PlacementSolution;
