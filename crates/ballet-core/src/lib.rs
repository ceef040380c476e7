pub mod api;
pub mod components;
pub mod core;

// Re-export key types at crate root for convenience
pub use api::listener::{EventListener, EventRecorder};
pub use api::types::{EntityId, EventRecord};
pub use components::character::{Character, Enemy, Health, Player};
pub use components::entity::{Entity, EntityKind, EntityRef, PhysicalObject};
pub use components::geometry::{Dimension, Position, SpeedVector};
pub use components::item::{Effect, Item, ItemKind};
pub use components::motion::Motion;
pub use components::obstacle::Obstacle;
pub use components::platform::Platform;
pub use components::weapon::{Bullet, BulletType, Weapon};
pub use crate::core::collision::are_colliding;
pub use crate::core::config::{EnvironmentConfig, GravityPreset};
pub use crate::core::environment::{EntityManager, Environment};
pub use crate::core::events::{CollisionEventChecker, EventBuffer, EventChecker, GameEvent};
