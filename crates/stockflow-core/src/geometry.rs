//! Geometric primitives for diagram layout.
//!
//! Coordinates follow screen conventions: origin at the top-left, X grows to
//! the right and Y grows downward. An element's position is the top-left
//! corner of its bounding box.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point in diagram space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point translated by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a size, rejecting negative or non-finite dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidDimension {
                name: "width",
                value: width,
            });
        }
        if !height.is_finite() || height < 0.0 {
            return Err(Error::InvalidDimension {
                name: "height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }
}

/// Axis-aligned rectangle defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a box whose top-left corner is `origin`.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Half of the width and height, as `(hw, hh)`.
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width() / 2.0, self.height() / 2.0)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
