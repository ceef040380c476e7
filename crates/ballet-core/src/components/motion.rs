use glam::DVec2;
use crate::components::geometry::{Position, SpeedVector};

/// Kinematic state of a moving entity.
/// The speed vector owns the entity's position; `heading` steers it and
/// gravity accumulates into a separate vertical fall velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub vector: SpeedVector,
    /// Direction of travel. Normalized on use, so any length works.
    pub heading: DVec2,
    /// Downward velocity accumulated from gravity.
    pub fall_velocity: f64,
    /// Multiplier applied to the environment's gravity (0 = unaffected).
    pub gravity_scale: f64,
}

impl Motion {
    pub fn new(vector: SpeedVector) -> Self {
        Self {
            vector,
            heading: DVec2::ZERO,
            fall_velocity: 0.0,
            gravity_scale: 1.0,
        }
    }

    // -- Builder pattern --

    pub fn with_heading(mut self, heading: DVec2) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_gravity_scale(mut self, scale: f64) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn position(&self) -> Position {
        self.vector.position()
    }

    pub fn position_mut(&mut self) -> &mut Position {
        self.vector.position_mut()
    }

    /// Current total velocity (heading speed plus fall).
    pub fn velocity(&self) -> DVec2 {
        self.vector.velocity(self.heading) + DVec2::new(0.0, self.fall_velocity)
    }

    /// Advance by `dt` ticks (semi-implicit Euler).
    pub fn step(&mut self, dt: f64, gravity: f64) {
        self.fall_velocity += gravity * self.gravity_scale * dt;
        let displacement = self.velocity() * dt;
        self.vector.position_mut().translate(displacement);
    }
}
