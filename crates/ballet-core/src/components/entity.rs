use crate::api::types::EntityId;
use crate::components::character::{Enemy, Player};
use crate::components::geometry::{Dimension, Position};
use crate::components::item::Item;
use crate::components::obstacle::Obstacle;
use crate::components::platform::Platform;
use crate::components::weapon::{Bullet, Weapon};
use crate::core::collision;

/// Runtime variant tag of a physical object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    StaticObstacle,
    DynamicObstacle,
    StaticItem,
    DynamicItem,
    Weapon,
    Bullet,
    Platform,
}

impl EntityKind {
    pub fn is_obstacle(self) -> bool {
        matches!(self, EntityKind::StaticObstacle | EntityKind::DynamicObstacle)
    }

    pub fn is_item(self) -> bool {
        matches!(self, EntityKind::StaticItem | EntityKind::DynamicItem)
    }
}

/// Capability set every simulated object exposes.
pub trait PhysicalObject {
    fn id(&self) -> EntityId;
    fn position(&self) -> Position;
    fn dimension(&self) -> Dimension;
    fn kind(&self) -> EntityKind;

    fn is_colliding_with(&self, other: &dyn PhysicalObject) -> bool {
        collision::are_colliding(self, other)
    }
}

macro_rules! impl_physical_object {
    ($ty:ty, |$this:ident| $kind:expr) => {
        impl PhysicalObject for $ty {
            fn id(&self) -> EntityId {
                <$ty>::id(self)
            }

            fn position(&self) -> Position {
                <$ty>::position(self)
            }

            fn dimension(&self) -> Dimension {
                <$ty>::dimension(self)
            }

            fn kind(&self) -> EntityKind {
                let $this = self;
                $kind
            }
        }
    };
}

impl_physical_object!(Player, |_p| EntityKind::Player);
impl_physical_object!(Enemy, |_e| EntityKind::Enemy);
impl_physical_object!(Platform, |_p| EntityKind::Platform);
impl_physical_object!(Weapon, |_w| EntityKind::Weapon);
impl_physical_object!(Bullet, |_b| EntityKind::Bullet);
impl_physical_object!(Obstacle, |o| if o.is_dynamic() {
    EntityKind::DynamicObstacle
} else {
    EntityKind::StaticObstacle
});
impl_physical_object!(Item, |i| if i.is_dynamic() {
    EntityKind::DynamicItem
} else {
    EntityKind::StaticItem
});

/// Owned entity of any variant. This is the open parameter type accepted
/// where the caller may hand in "some physical object".
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
    Obstacle(Obstacle),
    Item(Item),
    Weapon(Weapon),
    Bullet(Bullet),
    Platform(Platform),
}

impl Entity {
    pub fn as_entity_ref(&self) -> EntityRef<'_> {
        match self {
            Entity::Player(p) => EntityRef::Player(p),
            Entity::Enemy(e) => EntityRef::Enemy(e),
            Entity::Obstacle(o) => EntityRef::Obstacle(o),
            Entity::Item(i) => EntityRef::Item(i),
            Entity::Weapon(w) => EntityRef::Weapon(w),
            Entity::Bullet(b) => EntityRef::Bullet(b),
            Entity::Platform(p) => EntityRef::Platform(p),
        }
    }
}

impl PhysicalObject for Entity {
    fn id(&self) -> EntityId {
        self.as_entity_ref().id()
    }

    fn position(&self) -> Position {
        self.as_entity_ref().position()
    }

    fn dimension(&self) -> Dimension {
        self.as_entity_ref().dimension()
    }

    fn kind(&self) -> EntityKind {
        self.as_entity_ref().kind()
    }
}

impl From<Player> for Entity {
    fn from(p: Player) -> Self {
        Entity::Player(p)
    }
}

impl From<Enemy> for Entity {
    fn from(e: Enemy) -> Self {
        Entity::Enemy(e)
    }
}

impl From<Obstacle> for Entity {
    fn from(o: Obstacle) -> Self {
        Entity::Obstacle(o)
    }
}

impl From<Item> for Entity {
    fn from(i: Item) -> Self {
        Entity::Item(i)
    }
}

impl From<Weapon> for Entity {
    fn from(w: Weapon) -> Self {
        Entity::Weapon(w)
    }
}

impl From<Bullet> for Entity {
    fn from(b: Bullet) -> Self {
        Entity::Bullet(b)
    }
}

impl From<Platform> for Entity {
    fn from(p: Platform) -> Self {
        Entity::Platform(p)
    }
}

/// Borrowed view of an entity, used by the collision checker to scan
/// typed collections without cloning them.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Obstacle(&'a Obstacle),
    Item(&'a Item),
    Weapon(&'a Weapon),
    Bullet(&'a Bullet),
    Platform(&'a Platform),
}

impl EntityRef<'_> {
    fn object(&self) -> &dyn PhysicalObject {
        match *self {
            EntityRef::Player(p) => p,
            EntityRef::Enemy(e) => e,
            EntityRef::Obstacle(o) => o,
            EntityRef::Item(i) => i,
            EntityRef::Weapon(w) => w,
            EntityRef::Bullet(b) => b,
            EntityRef::Platform(p) => p,
        }
    }

    pub fn to_entity(&self) -> Entity {
        match *self {
            EntityRef::Player(p) => Entity::Player(p.clone()),
            EntityRef::Enemy(e) => Entity::Enemy(e.clone()),
            EntityRef::Obstacle(o) => Entity::Obstacle(*o),
            EntityRef::Item(i) => Entity::Item(*i),
            EntityRef::Weapon(w) => Entity::Weapon(w.clone()),
            EntityRef::Bullet(b) => Entity::Bullet(*b),
            EntityRef::Platform(p) => Entity::Platform(*p),
        }
    }
}

impl PhysicalObject for EntityRef<'_> {
    fn id(&self) -> EntityId {
        self.object().id()
    }

    fn position(&self) -> Position {
        self.object().position()
    }

    fn dimension(&self) -> Dimension {
        self.object().dimension()
    }

    fn kind(&self) -> EntityKind {
        self.object().kind()
    }
}
