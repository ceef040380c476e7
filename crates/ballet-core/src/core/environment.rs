//! The environment owns every entity, advances the world each tick, and
//! turns collisions into events for the registered listener.

use crate::api::listener::EventListener;
use crate::api::types::EntityId;
use crate::components::character::{Enemy, Player};
use crate::components::entity::{Entity, EntityRef, PhysicalObject};
use crate::components::geometry::{Dimension, Position};
use crate::components::item::Item;
use crate::components::obstacle::Obstacle;
use crate::components::platform::Platform;
use crate::components::weapon::Weapon;
use crate::core::config::EnvironmentConfig;
use crate::core::events::{CollisionEventChecker, EventChecker, GameEvent};

/// Query and mutation surface consumed by the presentation layer.
///
/// Getters return independent snapshots: mutating a returned collection
/// never touches the environment.
pub trait EntityManager {
    fn player(&self) -> Option<Player>;
    fn enemies(&self) -> Vec<Enemy>;
    fn obstacles(&self) -> Vec<Obstacle>;
    fn items(&self) -> Vec<Item>;
    fn platforms(&self) -> Vec<Platform>;
    fn weapons(&self) -> Vec<Weapon>;

    /// Replace the player. `None` clears it.
    fn set_player(&mut self, player: Option<Player>);

    /// Each `add_*` returns `false` and changes nothing if an equal entity
    /// is already present.
    fn add_enemy(&mut self, enemy: Enemy) -> bool;
    /// Also rejects anything that is not a static or dynamic obstacle.
    fn add_obstacle(&mut self, obstacle: Entity) -> bool;
    fn add_item(&mut self, item: Item) -> bool;
    fn add_platform(&mut self, platform: Platform) -> bool;
    fn add_weapon(&mut self, weapon: Weapon) -> bool;
}

/// Aggregate root of the simulation.
///
/// Single-threaded and tick-driven: `update_state` runs to completion on the
/// calling thread, listener callbacks included.
pub struct Environment {
    gravity: f64,
    dimension: Dimension,
    player: Option<Player>,
    enemies: Vec<Enemy>,
    obstacles: Vec<Obstacle>,
    items: Vec<Item>,
    platforms: Vec<Platform>,
    weapons: Vec<Weapon>,
    listener: Option<Box<dyn EventListener>>,
    next_id: u32,
}

impl Environment {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_gravity(config.gravity.value(), config.dimension())
    }

    /// Create an environment with an arbitrary gravity scalar.
    pub fn with_gravity(gravity: f64, dimension: Dimension) -> Self {
        Self {
            gravity,
            dimension,
            player: None,
            enemies: Vec::new(),
            obstacles: Vec::new(),
            items: Vec::new(),
            platforms: Vec::new(),
            weapons: Vec::new(),
            listener: None,
            next_id: 1,
        }
    }

    // -- Builder pattern --

    pub fn with_player(mut self, player: Player) -> Self {
        self.reserve_id(player.id());
        self.player = Some(player);
        self
    }

    pub fn with_event_listener(mut self, listener: impl EventListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Generate the next unique entity ID. Never returns an id already held
    /// by an entity handed to this environment.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Keep the id counter ahead of ids assigned outside `next_id`.
    fn reserve_id(&mut self, id: EntityId) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
    }

    /// In-place access for input controllers steering the current player.
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// Replace the listener. `None` detaches it.
    pub fn set_event_listener(&mut self, listener: Option<Box<dyn EventListener>>) {
        self.listener = listener;
    }

    /// Snapshot of every entity: player first, then enemies, obstacles,
    /// items, platforms, weapons, each in insertion order.
    pub fn objs_list(&self) -> Vec<Entity> {
        self.entity_refs().map(|e| e.to_entity()).collect()
    }

    /// Number of entities across all collections, player included.
    pub fn len(&self) -> usize {
        usize::from(self.player.is_some())
            + self.enemies.len()
            + self.obstacles.len()
            + self.items.len()
            + self.platforms.len()
            + self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the first entity, in `objs_list` order, whose position equals
    /// `position` exactly. Clears the player slot if the player matches.
    pub fn delete_obj_by_position(&mut self, position: Position) -> bool {
        if self.player.as_ref().is_some_and(|p| p.position() == position) {
            log::debug!("player cleared at {:?}", position.coordinates());
            self.player = None;
            return true;
        }
        let removed = remove_at(&mut self.enemies, position)
            || remove_at(&mut self.obstacles, position)
            || remove_at(&mut self.items, position)
            || remove_at(&mut self.platforms, position)
            || remove_at(&mut self.weapons, position);
        if !removed {
            log::trace!("nothing to delete at {:?}", position.coordinates());
        }
        removed
    }

    /// Advance the world by `dt` ticks: player, enemies, dynamic obstacles,
    /// dynamic items, in that order. Then run collision checks and notify
    /// the listener of every event, in order.
    ///
    /// Without a player, the player update and the player collision checks
    /// are skipped.
    pub fn update_state(&mut self, dt: f64) {
        let gravity = self.gravity;
        let world = self.dimension;

        match &mut self.player {
            Some(player) => player.update_state(dt, gravity),
            None => log::debug!("no player set, skipping player update and checks"),
        }
        for enemy in &mut self.enemies {
            enemy.update_state(dt, gravity);
        }
        for obstacle in self.obstacles.iter_mut().filter(|o| o.is_dynamic()) {
            obstacle.update_state(dt, gravity);
        }
        for item in self.items.iter_mut().filter(|i| i.is_dynamic()) {
            item.update_state(dt, gravity, world);
        }

        let events = self.check_collisions();
        log::trace!("tick dt={} entities={} events={}", dt, self.len(), events.len());
        self.notify_all(&events);
    }

    /// Run the five collision checkers in their fixed order and collect
    /// their events: item/player, enemy/item, enemy/player,
    /// obstacle/player, enemy/obstacle.
    fn check_collisions(&self) -> Vec<GameEvent> {
        let player = || self.player.iter().map(EntityRef::Player);
        let enemies = || self.enemies.iter().map(EntityRef::Enemy);
        let obstacles = || self.obstacles.iter().map(EntityRef::Obstacle);
        let items = || self.items.iter().map(EntityRef::Item);

        let mut checkers = [
            CollisionEventChecker::new(items(), player()),
            CollisionEventChecker::new(enemies(), items()),
            CollisionEventChecker::new(enemies(), player()),
            CollisionEventChecker::new(obstacles(), player()),
            CollisionEventChecker::new(enemies(), obstacles()),
        ];

        let mut events = Vec::new();
        for checker in &mut checkers {
            checker.check();
            events.extend(checker.buffer_mut().drain());
        }
        events
    }

    fn notify_all(&mut self, events: &[GameEvent]) {
        match &mut self.listener {
            Some(listener) => {
                for event in events {
                    listener.notify_event(event);
                }
            }
            None if !events.is_empty() => {
                log::debug!("{} events dropped, no listener registered", events.len());
            }
            None => {}
        }
    }

    fn entity_refs(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.player
            .iter()
            .map(EntityRef::Player)
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(self.obstacles.iter().map(EntityRef::Obstacle))
            .chain(self.items.iter().map(EntityRef::Item))
            .chain(self.platforms.iter().map(EntityRef::Platform))
            .chain(self.weapons.iter().map(EntityRef::Weapon))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(EnvironmentConfig::default())
    }
}

impl EntityManager for Environment {
    fn player(&self) -> Option<Player> {
        self.player.clone()
    }

    fn enemies(&self) -> Vec<Enemy> {
        self.enemies.clone()
    }

    fn obstacles(&self) -> Vec<Obstacle> {
        self.obstacles.clone()
    }

    fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn platforms(&self) -> Vec<Platform> {
        self.platforms.clone()
    }

    fn weapons(&self) -> Vec<Weapon> {
        self.weapons.clone()
    }

    fn set_player(&mut self, player: Option<Player>) {
        match &player {
            Some(p) => log::debug!("player set to {:?}", p.id()),
            None => log::debug!("player cleared"),
        }
        if let Some(p) = &player {
            self.reserve_id(p.id());
        }
        self.player = player;
    }

    fn add_enemy(&mut self, enemy: Enemy) -> bool {
        self.reserve_id(enemy.id());
        insert_unique(&mut self.enemies, enemy)
    }

    fn add_obstacle(&mut self, obstacle: Entity) -> bool {
        match obstacle {
            Entity::Obstacle(obstacle) => {
                self.reserve_id(obstacle.id());
                insert_unique(&mut self.obstacles, obstacle)
            }
            other => {
                log::debug!("rejected {:?} {:?}: not an obstacle", other.kind(), other.id());
                false
            }
        }
    }

    fn add_item(&mut self, item: Item) -> bool {
        self.reserve_id(item.id());
        insert_unique(&mut self.items, item)
    }

    fn add_platform(&mut self, platform: Platform) -> bool {
        self.reserve_id(platform.id());
        insert_unique(&mut self.platforms, platform)
    }

    fn add_weapon(&mut self, weapon: Weapon) -> bool {
        self.reserve_id(weapon.id());
        insert_unique(&mut self.weapons, weapon)
    }
}

fn insert_unique<T>(list: &mut Vec<T>, entity: T) -> bool
where
    T: PartialEq + PhysicalObject,
{
    if list.contains(&entity) {
        log::debug!("rejected duplicate {:?} {:?}", entity.kind(), entity.id());
        return false;
    }
    list.push(entity);
    true
}

fn remove_at<T: PhysicalObject>(list: &mut Vec<T>, position: Position) -> bool {
    match list.iter().position(|e| e.position() == position) {
        Some(idx) => {
            let removed = list.remove(idx);
            log::debug!(
                "deleted {:?} {:?} at {:?}",
                removed.kind(),
                removed.id(),
                position.coordinates()
            );
            true
        }
        None => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::api::listener::EventRecorder;
    use crate::components::entity::EntityKind;
    use crate::components::geometry::SpeedVector;
    use crate::components::item::{Effect, ItemKind};
    use crate::components::weapon::Bullet;
    use crate::core::config::GravityPreset;

    fn still(x: f64, y: f64) -> SpeedVector {
        SpeedVector::new(Position::new(x, y), 0.0)
    }

    fn player_at(env: &mut Environment, x: f64, y: f64) -> Player {
        Player::new(env.next_id(), Dimension::square(2.0), still(x, y))
    }

    fn enemy_at(env: &mut Environment, x: f64, y: f64) -> Enemy {
        Enemy::new(env.next_id(), Dimension::square(2.0), still(x, y))
    }

    fn item_at(env: &mut Environment, kind: ItemKind, side: f64, x: f64, y: f64) -> Item {
        Item::static_item(env.next_id(), kind, Dimension::square(side), Position::new(x, y))
    }

    fn open_world() -> Environment {
        Environment::with_gravity(0.0, Dimension::new(100.0, 100.0))
    }

    /// Listener that logs event kinds into shared storage.
    fn kind_log(env: &mut Environment) -> Rc<RefCell<Vec<u32>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        env.set_event_listener(Some(Box::new(move |e: &GameEvent| {
            sink.borrow_mut().push(e.kind());
        })));
        log
    }

    #[test]
    fn defaults_match_reference_world() {
        let env = Environment::default();
        assert_eq!(env.gravity(), 9.81);
        assert_eq!(env.dimension(), Dimension::new(20.0, 20.0));
        assert!(env.is_empty());
        assert!(env.player().is_none());

        let moon = Environment::new(EnvironmentConfig {
            gravity: GravityPreset::Moon,
            ..EnvironmentConfig::default()
        });
        assert_eq!(moon.gravity(), 6.673);
    }

    #[test]
    fn next_id_skips_ids_of_builder_player() {
        let player = Player::new(EntityId(1), Dimension::square(2.0), still(0.0, 0.0));
        let mut env = Environment::default().with_player(player);
        assert_eq!(env.next_id(), EntityId(2));
    }

    #[test]
    fn next_id_skips_ids_of_added_entities() {
        let mut env = Environment::default();
        let enemy = Enemy::new(EntityId(7), Dimension::square(2.0), still(0.0, 0.0));
        env.add_enemy(enemy);
        assert_eq!(env.next_id(), EntityId(8));

        let player = Player::new(EntityId(20), Dimension::square(2.0), still(0.0, 0.0));
        env.set_player(Some(player));
        let rock = Obstacle::static_obstacle(EntityId(12), Position::default());
        env.add_obstacle(rock.into());
        assert_eq!(env.next_id(), EntityId(21));

        let ids: Vec<EntityId> = env.objs_list().iter().map(|e| e.id()).collect();
        let fresh = env.next_id();
        assert!(!ids.contains(&fresh));
    }

    #[test]
    fn adding_twice_is_rejected() {
        let mut env = Environment::default();
        let enemy = enemy_at(&mut env, 1.0, 1.0);
        assert!(env.add_enemy(enemy.clone()));
        assert!(!env.add_enemy(enemy));
        assert_eq!(env.enemies().len(), 1);

        let platform =
            Platform::new(env.next_id(), Dimension::new(5.0, 1.0), Position::new(0.0, 10.0));
        assert!(env.add_platform(platform));
        assert!(!env.add_platform(platform));
        assert_eq!(env.platforms().len(), 1);

        let gun = Weapon::gun(env.next_id(), still(2.0, 2.0));
        assert!(env.add_weapon(gun.clone()));
        assert!(!env.add_weapon(gun));
        assert_eq!(env.weapons().len(), 1);

        let rock = Obstacle::static_obstacle(env.next_id(), Position::new(4.0, 4.0));
        assert!(env.add_obstacle(rock.into()));
        assert!(!env.add_obstacle(rock.into()));
        assert_eq!(env.obstacles().len(), 1);
    }

    #[test]
    fn items_are_unique_by_kind_and_effect() {
        let mut env = Environment::default();
        let heart = item_at(&mut env, ItemKind::Heart, 1.0, 1.0, 1.0).with_effect(Effect::Heal(10));
        let same_elsewhere =
            item_at(&mut env, ItemKind::Heart, 1.0, 7.0, 7.0).with_effect(Effect::Heal(10));
        let stronger = same_elsewhere.with_effect(Effect::Heal(30));
        assert!(env.add_item(heart));
        assert!(!env.add_item(same_elsewhere));
        assert!(env.add_item(stronger));
        assert_eq!(env.items().len(), 2);
    }

    #[test]
    fn add_obstacle_rejects_other_entities() {
        let mut env = Environment::default();
        let enemy = enemy_at(&mut env, 0.0, 0.0);
        let coin = item_at(&mut env, ItemKind::Coin, 1.0, 0.0, 0.0);
        let platform = Platform::new(env.next_id(), Dimension::new(5.0, 1.0), Position::default());
        let bullet = Bullet::classic(env.next_id(), still(0.0, 0.0));
        assert!(!env.add_obstacle(enemy.into()));
        assert!(!env.add_obstacle(coin.into()));
        assert!(!env.add_obstacle(platform.into()));
        assert!(!env.add_obstacle(bullet.into()));
        assert!(env.obstacles().is_empty());

        let patrol = Obstacle::dynamic_obstacle(env.next_id(), still(3.0, 3.0));
        assert!(env.add_obstacle(patrol.into()));
        assert_eq!(env.obstacles().len(), 1);
    }

    #[test]
    fn merged_list_follows_declared_order() {
        let mut env = Environment::default();
        let weapon = Weapon::gun(env.next_id(), still(0.0, 0.0));
        let platform = Platform::new(env.next_id(), Dimension::new(5.0, 1.0), Position::default());
        let coin = item_at(&mut env, ItemKind::Coin, 1.0, 0.0, 0.0);
        let rock = Obstacle::static_obstacle(env.next_id(), Position::default());
        let first = enemy_at(&mut env, 0.0, 0.0);
        let second = enemy_at(&mut env, 1.0, 0.0);
        let player = player_at(&mut env, 0.0, 0.0);

        // Insert out of declared order to make sure the view reorders.
        env.add_weapon(weapon);
        env.add_platform(platform);
        env.add_item(coin);
        env.add_obstacle(rock.into());
        env.add_enemy(first.clone());
        env.add_enemy(second.clone());
        env.set_player(Some(player.clone()));

        let kinds: Vec<EntityKind> = env.objs_list().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Player,
                EntityKind::Enemy,
                EntityKind::Enemy,
                EntityKind::StaticObstacle,
                EntityKind::StaticItem,
                EntityKind::Platform,
                EntityKind::Weapon,
            ]
        );
        let list = env.objs_list();
        assert_eq!(list[1].id(), first.id());
        assert_eq!(list[2].id(), second.id());
        assert_eq!(env.len(), 7);
    }

    #[test]
    fn snapshots_are_independent() {
        let mut env = Environment::default();
        let enemy = enemy_at(&mut env, 0.0, 0.0);
        env.add_enemy(enemy);
        let mut snapshot = env.enemies();
        snapshot.clear();
        assert_eq!(env.enemies().len(), 1);

        let player = player_at(&mut env, 0.0, 0.0);
        env.set_player(Some(player));
        let mut copy = env.player().unwrap();
        copy.character_mut().decrease_health(50);
        assert_eq!(env.player().unwrap().character().health().current(), 100);
    }

    #[test]
    fn set_player_replaces_and_clears() {
        let mut env = Environment::default();
        let a = player_at(&mut env, 0.0, 0.0);
        let b = player_at(&mut env, 5.0, 5.0);
        env.set_player(Some(a));
        env.set_player(Some(b.clone()));
        assert_eq!(env.player().map(|p| p.id()), Some(b.id()));
        env.set_player(None);
        assert!(env.player().is_none());
    }

    #[test]
    fn delete_enemy_by_position() {
        let mut env = Environment::default();
        let enemy = enemy_at(&mut env, 3.0, 4.0);
        env.add_enemy(enemy);
        assert!(env.delete_obj_by_position(Position::new(3.0, 4.0)));
        assert!(env.enemies().is_empty());
        assert!(!env.delete_obj_by_position(Position::new(3.0, 4.0)));
    }

    #[test]
    fn delete_takes_first_match_in_list_order() {
        let mut env = Environment::default();
        let at = Position::new(6.0, 6.0);
        let player = player_at(&mut env, 6.0, 6.0);
        let enemy = enemy_at(&mut env, 6.0, 6.0);
        let platform = Platform::new(env.next_id(), Dimension::new(4.0, 1.0), at);
        env.set_player(Some(player));
        env.add_enemy(enemy);
        env.add_platform(platform);

        assert!(env.delete_obj_by_position(at));
        assert!(env.player().is_none());
        assert_eq!(env.enemies().len(), 1);

        assert!(env.delete_obj_by_position(at));
        assert!(env.enemies().is_empty());
        assert_eq!(env.platforms().len(), 1);

        assert!(env.delete_obj_by_position(at));
        assert!(env.is_empty());
        assert!(!env.delete_obj_by_position(at));
    }

    #[test]
    fn delete_requires_exact_position() {
        let mut env = Environment::default();
        let enemy = enemy_at(&mut env, 3.0, 4.0);
        env.add_enemy(enemy);
        assert!(!env.delete_obj_by_position(Position::new(3.0, 4.000001)));
        assert_eq!(env.enemies().len(), 1);
    }

    #[test]
    fn update_moves_entities_in_place() {
        let mut env = Environment::default();
        let player = player_at(&mut env, 1.0, 1.0);
        env.set_player(Some(player));
        let patrol = Obstacle::dynamic_obstacle(
            env.next_id(),
            SpeedVector::new(Position::new(0.0, 0.0), 2.0),
        );
        let rock = Obstacle::static_obstacle(env.next_id(), Position::new(100.0, 100.0));
        env.add_obstacle(patrol.into());
        env.add_obstacle(rock.into());
        let falling = Item::dynamic_item(
            env.next_id(),
            ItemKind::Coin,
            Dimension::square(1.0),
            SpeedVector::new(Position::new(3.0, 19.5), 1.0),
        );
        env.add_item(falling);

        env.update_state(1.0);

        let player = env.player().unwrap();
        assert!((player.position().y - (1.0 + 9.81)).abs() < 1e-9);
        assert_eq!(env.obstacles()[0].position(), Position::new(2.0, 0.0));
        assert_eq!(env.obstacles()[1].position(), Position::new(100.0, 100.0));
        // Fell past the bottom edge of the 20x20 world and wrapped.
        assert_eq!(env.items()[0].position(), Position::new(3.0, -19.0));
    }

    #[test]
    fn update_without_player_is_safe() {
        let mut env = Environment::default();
        let log = kind_log(&mut env);
        let enemy = enemy_at(&mut env, 0.0, 0.0);
        env.add_enemy(enemy);
        let coin = item_at(&mut env, ItemKind::Coin, 5.0, 0.0, 0.0);
        env.add_item(coin);

        env.update_state(1.0);

        assert!((env.enemies()[0].position().y - 9.81).abs() < 1e-9);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn collisions_reach_listener_in_checker_order() {
        let mut env = open_world();
        let log = kind_log(&mut env);

        let player = player_at(&mut env, 10.0, 10.0);
        env.set_player(Some(player));
        let rock = Obstacle::static_obstacle(env.next_id(), Position::new(9.0, 9.0))
            .with_dimension(Dimension::square(3.0));
        env.add_obstacle(rock.into());
        let enemy = enemy_at(&mut env, 10.5, 10.5);
        env.add_enemy(enemy);
        let heart = item_at(&mut env, ItemKind::Heart, 1.0, 11.0, 11.0);
        env.add_item(heart);
        let far = item_at(&mut env, ItemKind::Coin, 1.0, 50.0, 50.0);
        env.add_item(far);

        env.update_state(1.0);

        assert_eq!(
            *log.borrow(),
            vec![
                GameEvent::PLAYER_HITS_ITEM,
                GameEvent::PLAYER_HITS_ENEMY,
                GameEvent::PLAYER_HITS_OBSTACLE,
            ]
        );
    }

    #[test]
    fn events_carry_post_update_snapshots() {
        let mut env = open_world();
        let seen: Rc<RefCell<Vec<GameEvent>>> = Rc::default();
        let sink = Rc::clone(&seen);
        env.set_event_listener(Some(Box::new(move |e: &GameEvent| {
            sink.borrow_mut().push(e.clone());
        })));

        let vector = SpeedVector::new(Position::new(0.0, 0.0), 1.0);
        let player = Player::new(env.next_id(), Dimension::square(2.0), vector);
        env.set_player(Some(player));
        env.player_mut().unwrap().character_mut().motion_mut().heading = glam::DVec2::X;
        let coin = item_at(&mut env, ItemKind::Coin, 1.0, 2.5, 0.0);
        env.add_item(coin);

        env.update_state(1.0);

        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::PlayerHitsItem { player, item } => {
                assert_eq!(player.position(), Position::new(1.0, 0.0));
                assert_eq!(item.kind(), ItemKind::Coin);
            }
            other => panic!("expected PlayerHitsItem, got {:?}", other),
        }
    }

    #[test]
    fn detached_listener_receives_nothing() {
        let mut env = open_world();
        let recorder = EventRecorder::new();
        env.set_event_listener(Some(Box::new(recorder.clone())));

        let player = player_at(&mut env, 0.0, 0.0);
        env.set_player(Some(player));
        let enemy = enemy_at(&mut env, 1.0, 1.0);
        env.add_enemy(enemy.clone());

        env.update_state(1.0);
        let records = recorder.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, GameEvent::PLAYER_HITS_ENEMY as f32);
        assert_eq!(records[0].b, enemy.id().0 as f32);

        env.set_event_listener(None);
        env.update_state(1.0);
        assert!(recorder.is_empty());
    }

    #[test]
    fn replaced_listener_stops_receiving() {
        let mut env = open_world();
        let first = EventRecorder::new();
        let second = EventRecorder::new();
        env.set_event_listener(Some(Box::new(first.clone())));

        let player = player_at(&mut env, 0.0, 0.0);
        env.set_player(Some(player));
        let enemy = enemy_at(&mut env, 1.0, 1.0);
        env.add_enemy(enemy);

        env.update_state(1.0);
        assert_eq!(first.drain().len(), 1);

        env.set_event_listener(Some(Box::new(second.clone())));
        env.update_state(1.0);
        env.update_state(1.0);
        assert!(first.is_empty());
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn listener_cannot_borrow_shared_environment_mid_tick() {
        let env = Rc::new(RefCell::new(open_world()));
        let blocked: Rc<RefCell<Vec<bool>>> = Rc::default();
        let handle = Rc::clone(&env);
        let sink = Rc::clone(&blocked);
        {
            let mut env = env.borrow_mut();
            let player = player_at(&mut env, 0.0, 0.0);
            env.set_player(Some(player));
            let enemy = enemy_at(&mut env, 1.0, 1.0);
            env.add_enemy(enemy);
            env.set_event_listener(Some(Box::new(move |_: &GameEvent| {
                sink.borrow_mut().push(handle.try_borrow_mut().is_err());
            })));
        }

        env.borrow_mut().update_state(1.0);

        assert_eq!(*blocked.borrow(), vec![true]);
    }

    #[test]
    fn builder_sets_player_and_listener() {
        let recorder = EventRecorder::new();
        let player = Player::new(EntityId(1), Dimension::square(2.0), still(0.0, 0.0));
        let mut env = Environment::with_gravity(0.0, Dimension::new(50.0, 50.0))
            .with_player(player)
            .with_event_listener(recorder.clone());
        let coin = item_at(&mut env, ItemKind::Coin, 1.0, 1.0, 1.0);
        env.add_item(coin);
        env.update_state(0.5);
        assert_eq!(recorder.len(), 1);
    }
}
