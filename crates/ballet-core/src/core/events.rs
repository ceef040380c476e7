//! Gameplay events derived from raw collisions.
//!
//! A checker scans one entity set against another and turns each colliding
//! pair into at most one semantic event, chosen by the variant of each side.

use crate::api::types::{EntityId, EventRecord};
use crate::components::character::{Enemy, Player};
use crate::components::entity::EntityRef;
use crate::components::item::Item;
use crate::components::obstacle::Obstacle;
use crate::components::platform::Platform;
use crate::core::collision::are_colliding;

/// A semantic gameplay event. Carries snapshots of both entities as they
/// were when the collision was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlayerHitsItem { player: Player, item: Item },
    PlayerHitsEnemy { player: Player, enemy: Enemy },
    PlayerHitsObstacle { player: Player, obstacle: Obstacle },
    PlayerHitsPlatform { player: Player, platform: Platform },
    EnemyHitsPlatform { enemy: Enemy, platform: Platform },
}

impl GameEvent {
    pub const PLAYER_HITS_ITEM: u32 = 1;
    pub const PLAYER_HITS_ENEMY: u32 = 2;
    pub const PLAYER_HITS_OBSTACLE: u32 = 3;
    pub const PLAYER_HITS_PLATFORM: u32 = 4;
    pub const ENEMY_HITS_PLATFORM: u32 = 5;

    /// Numeric event kind, stable across releases.
    pub fn kind(&self) -> u32 {
        match self {
            GameEvent::PlayerHitsItem { .. } => Self::PLAYER_HITS_ITEM,
            GameEvent::PlayerHitsEnemy { .. } => Self::PLAYER_HITS_ENEMY,
            GameEvent::PlayerHitsObstacle { .. } => Self::PLAYER_HITS_OBSTACLE,
            GameEvent::PlayerHitsPlatform { .. } => Self::PLAYER_HITS_PLATFORM,
            GameEvent::EnemyHitsPlatform { .. } => Self::ENEMY_HITS_PLATFORM,
        }
    }

    /// The (acting character, thing it hit) id pair.
    pub fn ids(&self) -> (EntityId, EntityId) {
        match self {
            GameEvent::PlayerHitsItem { player, item } => (player.id(), item.id()),
            GameEvent::PlayerHitsEnemy { player, enemy } => (player.id(), enemy.id()),
            GameEvent::PlayerHitsObstacle { player, obstacle } => (player.id(), obstacle.id()),
            GameEvent::PlayerHitsPlatform { player, platform } => (player.id(), platform.id()),
            GameEvent::EnemyHitsPlatform { enemy, platform } => (enemy.id(), platform.id()),
        }
    }

    pub fn record(&self) -> EventRecord {
        let (a, b) = self.ids();
        EventRecord {
            kind: self.kind() as f32,
            a: a.0 as f32,
            b: b.0 as f32,
            c: 0.0,
        }
    }
}

/// Events emitted by one checker run, in emission order. No dedup.
#[derive(Debug, Clone, Default)]
pub struct EventBuffer {
    events: Vec<GameEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all buffered events, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Something that scans for events and buffers them.
pub trait EventChecker {
    /// Run the scan. Replaces whatever the previous run buffered.
    fn check(&mut self);

    fn buffer(&self) -> &EventBuffer;

    fn buffer_mut(&mut self) -> &mut EventBuffer;
}

/// Cross-checks every element of one set against every element of another.
pub struct CollisionEventChecker<'a> {
    objects: Vec<EntityRef<'a>>,
    others: Vec<EntityRef<'a>>,
    buffer: EventBuffer,
}

impl<'a> CollisionEventChecker<'a> {
    pub fn new<A, B>(objects: A, others: B) -> Self
    where
        A: IntoIterator<Item = EntityRef<'a>>,
        B: IntoIterator<Item = EntityRef<'a>>,
    {
        Self {
            objects: objects.into_iter().collect(),
            others: others.into_iter().collect(),
            buffer: EventBuffer::new(),
        }
    }
}

impl EventChecker for CollisionEventChecker<'_> {
    fn check(&mut self) {
        self.buffer.clear();
        for a in &self.objects {
            for b in &self.others {
                if !are_colliding(a, b) {
                    continue;
                }
                if let Some(event) = classify(*a, *b) {
                    self.buffer.add_event(event);
                }
            }
        }
    }

    fn buffer(&self) -> &EventBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.buffer
    }
}

/// Map a colliding (a, b) pair to its event. Order matters: `a` is the
/// element from the scanned set, `b` from the set it is checked against.
fn classify(a: EntityRef<'_>, b: EntityRef<'_>) -> Option<GameEvent> {
    match (a, b) {
        (EntityRef::Item(item), EntityRef::Player(player)) => Some(GameEvent::PlayerHitsItem {
            player: player.clone(),
            item: *item,
        }),
        (EntityRef::Enemy(enemy), EntityRef::Player(player)) => Some(GameEvent::PlayerHitsEnemy {
            player: player.clone(),
            enemy: enemy.clone(),
        }),
        (EntityRef::Obstacle(obstacle), EntityRef::Player(player)) => {
            Some(GameEvent::PlayerHitsObstacle {
                player: player.clone(),
                obstacle: *obstacle,
            })
        }
        (EntityRef::Platform(platform), EntityRef::Player(player)) => {
            Some(GameEvent::PlayerHitsPlatform {
                player: player.clone(),
                platform: *platform,
            })
        }
        (EntityRef::Platform(platform), EntityRef::Enemy(enemy)) => {
            Some(GameEvent::EnemyHitsPlatform {
                enemy: enemy.clone(),
                platform: *platform,
            })
        }
        _ => None,
    }
}
