use std::fmt::{Display, Formatter};

use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Dimensions, Point};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Creates a rectangle without validation. Degenerate (zero-width or zero-height) rectangles are allowed.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        debug_assert!(x_min <= x_max && y_min <= y_max);
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect::new(x_min, y_min, x_max, y_max))
    }

    /// Rectangle with its lower-left corner at `pos` and the given dimensions.
    pub fn from_pos_dims(pos: Point, dims: Dimensions) -> Self {
        Rect::new(pos.0, pos.1, pos.0 + dims.width, pos.1 + dims.height)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns the four corners of `self`, counter-clockwise starting from the top right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
        ]
    }

    /// True if `other` lies entirely within the closed bounds of `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
    }

    /// Clamps `p` so that a rectangle of dimensions `dims` placed at it stays inside `self`.
    /// If `dims` does not fit, the lower-left corner of `self` wins.
    pub fn clamp_position(&self, p: Point, dims: Dimensions) -> Point {
        let x_hi = f64::max(self.x_min, self.x_max - dims.width);
        let y_hi = f64::max(self.y_min, self.y_max - dims.height);
        Point(p.0.clamp(self.x_min, x_hi), p.1.clamp(self.y_min, y_hi))
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Interiors must intersect, touching edges do not count as a collision.
impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        !(self.x_max <= other.x_min
            || other.x_max <= self.x_min
            || self.y_max <= other.y_min
            || other.y_max <= self.y_min)
    }
}

/// Closed bounds, points on the boundary are considered inside.
impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({:.3}, {:.3}), ({:.3}, {:.3})]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}
