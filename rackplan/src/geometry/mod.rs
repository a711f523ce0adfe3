mod footprint;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Free functions forming the geometry kernel used by validation and scoring
pub mod kernel;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

#[doc(inline)]
pub use footprint::Footprint;
