mod attempt;
mod containment;
mod validator;

#[doc(inline)]
pub use attempt::{PlacementAttempt, first_valid};
#[doc(inline)]
pub use containment::{CornerContainment, FootprintContainment};
#[doc(inline)]
pub use validator::{PlacementValidator, Violation, has_adequate_aisles, required_clearance};
