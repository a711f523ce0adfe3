use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{ObstacleKind, RackType};
use crate::eval::{MetricsResult, ScoreResult};

/// The JSON representation of a placement problem
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProblem {
    /// The name of the problem
    pub name: String,
    /// The facility racks are placed in
    pub layout: ExtLayout,
    /// Number of racks requested per rack type id. Signed so that negative requests can be reported instead of failing to parse.
    pub rack_counts: BTreeMap<String, i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    pub width: f64,
    pub height: f64,
    /// Sections composing the usable floor. If empty, the whole bounding box is usable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ExtRect>,
    #[serde(default)]
    pub obstacles: Vec<ExtObstacle>,
    pub entrance: ExtPoint,
    pub loading_dock: ExtPoint,
}

/// Axis-aligned rectangle given by its lower-left corner and dimensions
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtObstacle {
    pub name: String,
    pub kind: ObstacleKind,
    #[serde(flatten)]
    pub rect: ExtRect,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPoint {
    pub x: f64,
    pub y: f64,
}

/// The JSON representation of a solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// All requested racks, placed ones carry a position
    pub racks: Vec<ExtRack>,
    pub score: ScoreResult,
    pub metrics: MetricsResult,
    /// Time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRack {
    pub id: String,
    pub rack_type: RackType,
    pub width: f64,
    pub height: f64,
    pub capacity: u32,
    /// Lower-left corner, absent if the rack could not be placed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ExtPoint>,
}
