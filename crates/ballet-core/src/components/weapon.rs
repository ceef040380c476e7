//! Weapons, their ammo state machine, and the bullets they fire.
//!
//! A weapon tracks a single ammo count regardless of bullet type. The
//! chambered type is metadata: it reflects the most recent non-empty
//! recharge and drops to `None` once the magazine runs dry.

use glam::DVec2;
use crate::api::types::EntityId;
use crate::components::geometry::{Dimension, Position, SpeedVector};
use crate::components::motion::Motion;

const BULLET_SIZE: f64 = 1.0;
const WEAPON_SIZE: f64 = 1.0;

/// Bullet variants a weapon can chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulletType {
    Classical,
    Poison,
    Fire,
}

impl BulletType {
    /// Damage dealt on hit.
    pub fn damage(self) -> u32 {
        match self {
            BulletType::Classical => 10,
            BulletType::Poison => 15,
            BulletType::Fire => 20,
        }
    }
}

/// A projectile. Moves independently of the weapon that fired it.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    id: EntityId,
    kind: BulletType,
    dimension: Dimension,
    motion: Motion,
}

impl Bullet {
    pub fn new(id: EntityId, kind: BulletType, vector: SpeedVector) -> Self {
        Self {
            id,
            kind,
            dimension: Dimension::square(BULLET_SIZE),
            motion: Motion::new(vector)
                .with_heading(DVec2::X)
                .with_gravity_scale(0.0),
        }
    }

    pub fn classic(id: EntityId, vector: SpeedVector) -> Self {
        Self::new(id, BulletType::Classical, vector)
    }

    pub fn poison(id: EntityId, vector: SpeedVector) -> Self {
        Self::new(id, BulletType::Poison, vector)
    }

    pub fn fire(id: EntityId, vector: SpeedVector) -> Self {
        Self::new(id, BulletType::Fire, vector)
    }

    pub fn with_heading(mut self, heading: DVec2) -> Self {
        self.motion.heading = heading;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> BulletType {
        self.kind
    }

    pub fn damage(&self) -> u32 {
        self.kind.damage()
    }

    pub fn position(&self) -> Position {
        self.motion.position()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Bullets fly straight; gravity doesn't apply.
    pub fn update_state(&mut self, dt: f64) {
        self.motion.step(dt, 0.0);
    }
}

impl PartialEq for Bullet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A weapon: a physical object that can lie in the world and be picked up,
/// carrying a magazine.
#[derive(Debug, Clone)]
pub struct Weapon {
    id: EntityId,
    name: String,
    limit: u32,
    ammo: u32,
    in_use: Option<BulletType>,
    dimension: Dimension,
    vector: SpeedVector,
}

impl Weapon {
    /// Create a weapon with a full magazine of `default_type`.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        limit: u32,
        default_type: BulletType,
        vector: SpeedVector,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            limit,
            ammo: limit,
            in_use: if limit > 0 { Some(default_type) } else { None },
            dimension: Dimension::square(WEAPON_SIZE),
            vector,
        }
    }

    pub fn gun(id: EntityId, vector: SpeedVector) -> Self {
        Self::new(id, "Gun", 10, BulletType::Classical, vector)
    }

    pub fn shotgun(id: EntityId, vector: SpeedVector) -> Self {
        Self::new(id, "Shotgun", 5, BulletType::Classical, vector)
    }

    pub fn auto(id: EntityId, vector: SpeedVector) -> Self {
        Self::new(id, "Auto", 30, BulletType::Classical, vector)
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.vector.position()
    }

    pub fn position_mut(&mut self) -> &mut Position {
        self.vector.position_mut()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn ammo_left(&self) -> u32 {
        self.ammo
    }

    pub fn limit_bullets(&self) -> u32 {
        self.limit
    }

    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    /// The chambered bullet type, `None` once the magazine is empty.
    pub fn type_of_bullet_in_use(&self) -> Option<BulletType> {
        if self.has_ammo() {
            self.in_use
        } else {
            None
        }
    }

    pub fn decrease_ammo(&mut self) {
        if self.ammo > 0 {
            self.ammo -= 1;
        }
        if self.ammo == 0 {
            self.in_use = None;
        }
    }

    /// Load rounds from `bullets`, up to the free space in the magazine.
    /// The batch is taken to be of the first bullet's type. Returns the
    /// number of rounds loaded.
    pub fn recharge(&mut self, bullets: &[Bullet]) -> u32 {
        let Some(first) = bullets.first() else {
            return 0;
        };
        let room = self.limit - self.ammo;
        let loaded = room.min(bullets.len() as u32);
        self.ammo += loaded;
        if self.has_ammo() {
            self.in_use = Some(first.kind());
        }
        loaded
    }

    /// Fire one round of the chambered type from the weapon's position.
    /// Returns `None` when the magazine is empty.
    pub fn fire(&mut self, id: EntityId, heading: DVec2, speed: f64) -> Option<Bullet> {
        let kind = self.type_of_bullet_in_use()?;
        self.decrease_ammo();
        let vector = SpeedVector::new(self.position(), speed);
        Some(Bullet::new(id, kind, vector).with_heading(heading))
    }
}

impl PartialEq for Weapon {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
