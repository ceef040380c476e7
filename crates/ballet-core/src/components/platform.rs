use crate::api::types::EntityId;
use crate::components::geometry::{Dimension, Position};

/// A static support surface.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    id: EntityId,
    dimension: Dimension,
    position: Position,
}

impl Platform {
    pub fn new(id: EntityId, dimension: Dimension, position: Position) -> Self {
        Self { id, dimension, position }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl PartialEq for Platform {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
