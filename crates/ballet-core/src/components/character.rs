use crate::api::types::EntityId;
use crate::components::geometry::{Dimension, Position, SpeedVector};
use crate::components::item::Effect;
use crate::components::motion::Motion;
use crate::components::weapon::Weapon;

const DEFAULT_MASS: f64 = 10.0;
const DEFAULT_HEALTH: u32 = 100;
const DEFAULT_CONFLICT_DAMAGE: u32 = 10;

/// Hit points, clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH)
    }
}

/// State shared by players and enemies.
#[derive(Debug, Clone)]
pub struct Character {
    id: EntityId,
    dimension: Dimension,
    motion: Motion,
    mass: f64,
    health: Health,
    weapon: Option<Weapon>,
}

impl Character {
    fn new(id: EntityId, dimension: Dimension, vector: SpeedVector) -> Self {
        Self {
            id,
            dimension,
            motion: Motion::new(vector),
            mass: DEFAULT_MASS,
            health: Health::default(),
            weapon: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn position(&self) -> Position {
        self.motion.position()
    }

    pub fn position_mut(&mut self) -> &mut Position {
        self.motion.position_mut()
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Controllers steer through here (heading, speed).
    pub fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn decrease_health(&mut self, amount: u32) {
        self.health.current = self.health.current.saturating_sub(amount);
    }

    pub fn increase_health(&mut self, amount: u32) {
        self.health.current = self.health.current.saturating_add(amount).min(self.health.max);
    }

    pub fn apply_effect(&mut self, effect: &Effect) {
        match *effect {
            Effect::None => {}
            Effect::Heal(amount) => self.increase_health(amount),
            Effect::Damage(amount) => self.decrease_health(amount),
        }
    }

    /// Equip a weapon, returning the one previously held.
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapon.as_mut()
    }

    pub fn update_state(&mut self, dt: f64, gravity: f64) {
        self.motion.step(dt, gravity);
        let pos = self.motion.position();
        if let Some(weapon) = &mut self.weapon {
            *weapon.position_mut() = pos;
        }
    }
}

/// The player-controlled character. At most one per environment.
#[derive(Debug, Clone)]
pub struct Player {
    character: Character,
}

impl Player {
    pub fn new(id: EntityId, dimension: Dimension, vector: SpeedVector) -> Self {
        Self {
            character: Character::new(id, dimension, vector),
        }
    }

    // -- Builder pattern --

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.character.mass = mass;
        self
    }

    pub fn with_health(mut self, max: u32) -> Self {
        self.character.health = Health::new(max);
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.character.weapon = Some(weapon);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.character.motion = motion;
        self
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn id(&self) -> EntityId {
        self.character.id
    }

    pub fn position(&self) -> Position {
        self.character.position()
    }

    pub fn dimension(&self) -> Dimension {
        self.character.dimension
    }

    pub fn update_state(&mut self, dt: f64, gravity: f64) {
        self.character.update_state(dt, gravity);
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// A hostile character.
#[derive(Debug, Clone)]
pub struct Enemy {
    character: Character,
    conflict_damage: u32,
}

impl Enemy {
    pub fn new(id: EntityId, dimension: Dimension, vector: SpeedVector) -> Self {
        Self {
            character: Character::new(id, dimension, vector),
            conflict_damage: DEFAULT_CONFLICT_DAMAGE,
        }
    }

    // -- Builder pattern --

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.character.mass = mass;
        self
    }

    pub fn with_health(mut self, max: u32) -> Self {
        self.character.health = Health::new(max);
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.character.weapon = Some(weapon);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.character.motion = motion;
        self
    }

    pub fn with_conflict_damage(mut self, damage: u32) -> Self {
        self.conflict_damage = damage;
        self
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    /// Damage dealt to the player on contact.
    pub fn conflict_damage(&self) -> u32 {
        self.conflict_damage
    }

    pub fn id(&self) -> EntityId {
        self.character.id
    }

    pub fn position(&self) -> Position {
        self.character.position()
    }

    pub fn dimension(&self) -> Dimension {
        self.character.dimension
    }

    pub fn update_state(&mut self, dt: f64, gravity: f64) {
        self.character.update_state(dt, gravity);
    }
}

impl PartialEq for Enemy {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
