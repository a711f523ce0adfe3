//! The placement and scoring engine of `rackplan`: everything needed to decide whether a rack
//! fits somewhere in a facility and how good a set of placed racks is.

/// Entities to model racks, facilities and candidate layouts
pub mod entities;

/// Evaluation of candidate layouts: scoring and reporting metrics
pub mod eval;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem descriptions into and exporting solutions out of this library
pub mod io;

/// Feasibility checks shared by all placement strategies
pub mod validation;

/// Helper functions which do not belong to any specific module
pub mod util;
