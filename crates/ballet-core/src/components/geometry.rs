//! Geometry primitives shared by every entity.
//!
//! World coordinates grow rightward on x and downward on y. An entity's
//! position is the top-left corner of its bounding box.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Mutable 2D point, owned by the entity it positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Move by the given offset.
    pub fn translate(&mut self, offset: DVec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Width and height of an entity or of the world. Fixed after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Reference position plus scalar speed. Per-axis velocity is derived
/// from a heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedVector {
    position: Position,
    speed: f64,
}

impl SpeedVector {
    pub fn new(position: Position, speed: f64) -> Self {
        Self { position, speed }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Velocity along `heading`. A zero heading yields zero velocity.
    pub fn velocity(&self, heading: DVec2) -> DVec2 {
        heading.normalize_or_zero() * self.speed
    }
}
