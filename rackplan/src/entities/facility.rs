use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::Footprint;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};

/// Category of a fixed obstacle. Has no influence on placement, all obstacles are equally impassable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    ProcessingArea,
    Office,
    Exit,
    Utility,
    Pillar,
    Other,
}

impl Display for ObstacleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ObstacleKind::ProcessingArea => "processing_area",
            ObstacleKind::Office => "office",
            ObstacleKind::Exit => "exit",
            ObstacleKind::Utility => "utility",
            ObstacleKind::Pillar => "pillar",
            ObstacleKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// A region of the facility no rack may overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedObstacle {
    pub name: String,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl FixedObstacle {
    pub fn new(name: impl Into<String>, kind: ObstacleKind, rect: Rect) -> Self {
        Self {
            name: name.into(),
            kind,
            rect,
        }
    }
}

/// Description of the facility racks are placed in. Immutable during an optimization run.
#[derive(Clone, Debug, PartialEq)]
pub struct FacilityLayout {
    pub width: f64,
    pub height: f64,
    pub footprint: Footprint,
    pub obstacles: Vec<FixedObstacle>,
    pub entrance: Point,
    pub loading_dock: Point,
}

impl FacilityLayout {
    /// Single-section facility spanning `[0, width] x [0, height]` without obstacles.
    pub fn new(width: f64, height: f64, entrance: Point, loading_dock: Point) -> Self {
        Self {
            width,
            height,
            footprint: Footprint::rectangle(width, height),
            obstacles: vec![],
            entrance,
            loading_dock,
        }
    }

    /// Replaces the footprint with the union of `sections`.
    pub fn with_sections(mut self, sections: Vec<Rect>) -> Self {
        self.footprint = Footprint::new(sections);
        self
    }

    pub fn with_obstacle(mut self, obstacle: FixedObstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// The bounding box `[0, width] x [0, height]`.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0))
    }

    /// True unless the footprint is empty or a single section equal to [`FacilityLayout::bounds`].
    /// Racks in a restricted footprint must additionally pass the containment check.
    pub fn has_restricted_footprint(&self) -> bool {
        match self.footprint.sections() {
            [] => false,
            [section] => *section != self.bounds(),
            _ => true,
        }
    }

    /// Sum of the footprint section areas, falls back to the bounding box when there are no sections.
    pub fn usable_area(&self) -> f64 {
        match self.footprint.sections().is_empty() {
            true => self.width * self.height,
            false => self.footprint.area(),
        }
    }

    /// Length of the diagonal of the bounding box.
    pub fn diagonal(&self) -> f64 {
        (self.width.powi(2) + self.height.powi(2)).sqrt()
    }

    /// Fast sanity check of the layout, to be performed before entering any optimization.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.height.is_finite(),
            "facility dimensions must be finite, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "facility must have a positive area, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.entrance.is_finite(),
            "entrance must be a finite point, got {}",
            self.entrance
        );
        ensure!(
            self.loading_dock.is_finite(),
            "loading dock must be a finite point, got {}",
            self.loading_dock
        );
        let bounds = self.bounds();
        for (i, s) in self.footprint.sections().iter().enumerate() {
            ensure!(
                s.width() > 0.0 && s.height() > 0.0,
                "footprint section {i} has no area: {s}"
            );
            ensure!(
                bounds.contains_rect(s),
                "footprint section {i} {s} exceeds the facility bounds {bounds}"
            );
        }
        for o in &self.obstacles {
            ensure!(
                o.rect.width() >= 0.0 && o.rect.height() >= 0.0,
                "obstacle {:?} has negative dimensions: {}",
                o.name,
                o.rect
            );
            ensure!(
                bounds.collides_with(&o.rect) || o.rect.width() == 0.0 || o.rect.height() == 0.0,
                "obstacle {:?} {} lies entirely outside the facility {}",
                o.name,
                o.rect,
                bounds
            );
        }
        Ok(())
    }
}
