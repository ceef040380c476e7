use glam::DVec2;
use crate::api::types::EntityId;
use crate::components::geometry::{Dimension, Position, SpeedVector};
use crate::components::motion::Motion;

pub const OBSTACLE_MASS: f64 = 5.0;
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const OBSTACLE_HEIGHT: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
enum ObstacleBody {
    Static(Position),
    Dynamic(Motion),
}

/// Something in the way. Static obstacles never move; dynamic ones patrol
/// along their heading (rightward by default) without gravity.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    id: EntityId,
    dimension: Dimension,
    mass: f64,
    body: ObstacleBody,
}

impl Obstacle {
    pub fn static_obstacle(id: EntityId, position: Position) -> Self {
        Self {
            id,
            dimension: Dimension::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            mass: OBSTACLE_MASS,
            body: ObstacleBody::Static(position),
        }
    }

    pub fn dynamic_obstacle(id: EntityId, vector: SpeedVector) -> Self {
        let motion = Motion::new(vector)
            .with_heading(DVec2::X)
            .with_gravity_scale(0.0);
        Self {
            id,
            dimension: Dimension::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            mass: OBSTACLE_MASS,
            body: ObstacleBody::Dynamic(motion),
        }
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        if let ObstacleBody::Dynamic(m) = &mut self.body {
            *m = motion;
        }
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.body, ObstacleBody::Dynamic(_))
    }

    pub fn position(&self) -> Position {
        match &self.body {
            ObstacleBody::Static(pos) => *pos,
            ObstacleBody::Dynamic(motion) => motion.position(),
        }
    }

    pub fn update_state(&mut self, dt: f64, gravity: f64) {
        if let ObstacleBody::Dynamic(motion) = &mut self.body {
            motion.step(dt, gravity);
        }
    }
}

impl PartialEq for Obstacle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
