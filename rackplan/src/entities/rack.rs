use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::entities::RackTypeSpec;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Dimensions, Point, Rect};

/// The fixed set of rack types. Declaration order is the generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RackType {
    Standard,
    HighDensity,
    Freezer,
    Bulk,
}

impl RackType {
    /// All rack types, in generation order.
    pub const ALL: [RackType; 4] = [
        RackType::Standard,
        RackType::HighDensity,
        RackType::Freezer,
        RackType::Bulk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RackType::Standard => "standard",
            RackType::HighDensity => "high_density",
            RackType::Freezer => "freezer",
            RackType::Bulk => "bulk",
        }
    }

    pub fn spec(&self) -> &'static RackTypeSpec {
        RackTypeSpec::of(*self)
    }
}

impl Display for RackType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RackType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match RackType::ALL.iter().find(|rt| rt.as_str() == s) {
            Some(rt) => Ok(*rt),
            None => bail!(
                "unknown rack type: {s:?}, expected one of {:?}",
                RackType::ALL.map(|rt| rt.as_str())
            ),
        }
    }
}

/// A single rack to be placed in a facility.
///
/// Everything but the position is fixed at generation time.
/// Placing or unplacing a rack produces a new value, the original is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Rack {
    id: String,
    rack_type: RackType,
    dims: Dimensions,
    capacity: u32,
    position: Option<Point>,
}

impl Rack {
    pub fn new(id: String, spec: &RackTypeSpec) -> Self {
        Self {
            id,
            rack_type: spec.rack_type,
            dims: spec.dims,
            capacity: spec.capacity,
            position: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rack_type(&self) -> RackType {
        self.rack_type
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> f64 {
        self.dims.width
    }

    pub fn height(&self) -> f64 {
        self.dims.height
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn area(&self) -> f64 {
        self.dims.area()
    }

    /// Lower-left corner of the rack, `None` while unplaced.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Copy of `self` placed at `pos`.
    pub fn placed_at(&self, pos: Point) -> Rack {
        Rack {
            position: Some(pos),
            ..self.clone()
        }
    }

    /// Copy of `self` without a position.
    pub fn unplaced(&self) -> Rack {
        Rack {
            position: None,
            ..self.clone()
        }
    }

    /// The rectangle the rack would occupy if placed at `pos`.
    pub fn footprint_at(&self, pos: Point) -> Rect {
        Rect::from_pos_dims(pos, self.dims)
    }

    pub fn footprint(&self) -> Option<Rect> {
        self.position.map(|p| self.footprint_at(p))
    }

    pub fn center(&self) -> Option<Point> {
        self.footprint().map(|r| r.centroid())
    }
}

impl Display for Rack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(p) => write!(f, "{} [{}] at {}", self.id, self.dims, p),
            None => write!(f, "{} [{}] unplaced", self.id, self.dims),
        }
    }
}
