//! Geometric primitives for concept-map layout.
//!
//! This module provides the fundamental geometric types used throughout
//! Dendrite for calculating node positions.
//!
//! # Coordinate System
//!
//! Dendrite uses a coordinate system consistent with HTML canvas and SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Angles are measured in radians from the positive X-axis, increasing
//! toward positive Y (clockwise on screen).

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in canvas coordinate space.
///
/// Points use `f32` coordinates and provide the vector and polar operations
/// the position finders need. All operations are deterministic for given
/// inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Calculates the angle from this point to another point, in radians,
    /// normalized to `[0, 2π)`.
    ///
    /// Returns `0.0` when the points coincide.
    pub fn angle_to(self, other: Point) -> f32 {
        normalize_angle((other.y - self.y).atan2(other.x - self.x))
    }

    /// Returns the point at the given radius and angle from a center point
    pub fn on_circle(center: Point, radius: f32, angle: f32) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Tests L∞-style separation from another point.
    ///
    /// Two points are separated iff they differ by at least `min_dx`
    /// horizontally **or** at least `min_dy` vertically. This is the cheap
    /// grid-like exclusion test used for flat placement, tolerant of dense
    /// rings where Euclidean distance would reject everything.
    pub fn chebyshev_separated(self, other: Point, min_dx: f32, min_dy: f32) -> bool {
        (self.x - other.x).abs() >= min_dx || (self.y - other.y).abs() >= min_dy
    }
}

/// Normalizes an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 { wrapped + TAU } else { wrapped }
}

/// A rectangular region of canvas space.
///
/// Used to describe the drawable canvas that placements must stay inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from minimum and maximum coordinates
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates bounds for a canvas anchored at the origin
    pub fn from_canvas_size(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center of the bounds
    pub fn center(self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Clamps a point into the bounds, keeping `margin` away from each edge.
    ///
    /// If the bounds are narrower than twice the margin the midline wins;
    /// `f32::clamp` requires an ordered range, so the margins are collapsed
    /// first.
    pub fn clamp_with_margin(self, point: Point, margin: f32) -> Point {
        let (lo_x, hi_x) = ordered_range(self.min_x + margin, self.max_x - margin);
        let (lo_y, hi_y) = ordered_range(self.min_y + margin, self.max_y - margin);
        Point {
            x: point.x().clamp(lo_x, hi_x),
            y: point.y().clamp(lo_y, hi_y),
        }
    }
}

fn ordered_range(lo: f32, hi: f32) -> (f32, f32) {
    if lo > hi {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}
