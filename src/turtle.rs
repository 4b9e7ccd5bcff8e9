//! Turtle and Pen State
//!
//! Plain data for the cursor and the drawing instrument. Nothing here
//! talks to a sink; emitting primitives is the interpreter's job.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An RGB pen color with unit-range components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// True when every component lies in `[0, 1]`.
    ///
    /// NaN components are never valid.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Cursor position and heading
///
/// The heading is in degrees and accumulates additively; it is never
/// wrapped into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Turtle {
    pub position: DVec2,
    pub heading: f64,
}

impl Turtle {
    /// Back to the origin, facing along +x.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }

    pub fn turn(&mut self, angle: f64) {
        self.heading += angle;
    }

    /// Point `distance` units ahead along the current heading.
    pub fn ahead(&self, distance: f64) -> DVec2 {
        let radians = self.heading.to_radians();
        self.position + DVec2::new(radians.cos(), radians.sin()) * distance
    }
}

/// Pen state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    /// Carried for completeness; no drawing operation consults it.
    pub down: bool,
    /// Closed shapes are filled when set.
    pub filled: bool,
}

impl Pen {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_fill(&mut self) {
        self.filled = !self.filled;
    }
}
