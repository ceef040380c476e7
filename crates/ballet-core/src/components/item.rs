use glam::DVec2;
use crate::api::types::EntityId;
use crate::components::geometry::{Dimension, Position, SpeedVector};
use crate::components::motion::Motion;

/// What a pickup item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Heart,
    Poison,
    Coin,
    Weapon,
}

/// Payload applied to whoever picks the item up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// No-op payload.
    #[default]
    None,
    Heal(u32),
    Damage(u32),
}

#[derive(Debug, Clone, Copy)]
enum ItemBody {
    Static(Position),
    Dynamic(Motion),
}

/// A pickup item, either fixed in place or drifting through the world.
///
/// Equality ignores id and position: two items are equal when they are the
/// same variant (static/dynamic) with the same kind and effect.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    id: EntityId,
    kind: ItemKind,
    effect: Effect,
    dimension: Dimension,
    body: ItemBody,
}

impl Item {
    pub fn static_item(
        id: EntityId,
        kind: ItemKind,
        dimension: Dimension,
        position: Position,
    ) -> Self {
        Self {
            id,
            kind,
            effect: Effect::None,
            dimension,
            body: ItemBody::Static(position),
        }
    }

    /// Dynamic items fall straight down by default and ignore gravity.
    pub fn dynamic_item(
        id: EntityId,
        kind: ItemKind,
        dimension: Dimension,
        vector: SpeedVector,
    ) -> Self {
        let motion = Motion::new(vector)
            .with_heading(DVec2::Y)
            .with_gravity_scale(0.0);
        Self {
            id,
            kind,
            effect: Effect::None,
            dimension,
            body: ItemBody::Dynamic(motion),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Change the drift direction. No effect on static items.
    pub fn with_heading(mut self, heading: DVec2) -> Self {
        if let ItemBody::Dynamic(motion) = &mut self.body {
            motion.heading = heading;
        }
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.body, ItemBody::Dynamic(_))
    }

    pub fn position(&self) -> Position {
        match &self.body {
            ItemBody::Static(pos) => *pos,
            ItemBody::Dynamic(motion) => motion.position(),
        }
    }

    pub fn motion(&self) -> Option<&Motion> {
        match &self.body {
            ItemBody::Static(_) => None,
            ItemBody::Dynamic(motion) => Some(motion),
        }
    }

    fn position_mut(&mut self) -> &mut Position {
        match &mut self.body {
            ItemBody::Static(pos) => pos,
            ItemBody::Dynamic(motion) => motion.position_mut(),
        }
    }

    /// Re-enter from above: y becomes `-world.height + own height`.
    ///
    /// Unconditional remap, wherever the item is. `update_state` only calls
    /// it once the item has fallen past the bottom edge, so an item above
    /// the world keeps falling instead of being remapped.
    pub fn wrap_vertical(&mut self, world: Dimension) {
        let height = self.dimension.height;
        let pos = self.position_mut();
        pos.y = -world.height + height;
    }

    /// Re-enter from the left: x becomes `-world.width`.
    /// Unconditional, like `wrap_vertical`.
    pub fn wrap_horizontal(&mut self, world: Dimension) {
        let pos = self.position_mut();
        pos.x = -world.width;
    }

    /// Integrate motion, then wrap any axis that carried the item fully past
    /// the world edge it was travelling towards. Velocity is left untouched.
    /// Static items don't move.
    pub fn update_state(&mut self, dt: f64, gravity: f64, world: Dimension) {
        let velocity = match &mut self.body {
            ItemBody::Static(_) => return,
            ItemBody::Dynamic(motion) => {
                motion.step(dt, gravity);
                motion.velocity()
            }
        };
        let Dimension { width, height } = self.dimension;
        let pos = self.position();

        if velocity.y > 0.0 && pos.y > world.height {
            self.wrap_vertical(world);
        } else if velocity.y < 0.0 && pos.y + height < 0.0 {
            self.position_mut().y = 2.0 * world.height - height;
        }

        if velocity.x > 0.0 && pos.x > world.width {
            self.wrap_horizontal(world);
        } else if velocity.x < 0.0 && pos.x + width < 0.0 {
            self.position_mut().x = 2.0 * world.width;
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.is_dynamic() == other.is_dynamic()
            && self.kind == other.kind
            && self.effect == other.effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling_heart() -> Item {
        Item::dynamic_item(
            EntityId(1),
            ItemKind::Heart,
            Dimension::square(1.0),
            SpeedVector::new(Position::new(-5.0, -5.0), 1.0),
        )
    }

    #[test]
    fn vertical_wrap_reenters_from_above() {
        let world = Dimension::square(20.0);
        let mut item = falling_heart();
        item.wrap_vertical(world);
        assert_eq!(item.position().coordinates(), (-5.0, -19.0));
    }

    #[test]
    fn horizontal_wrap_reenters_from_left() {
        let world = Dimension::square(20.0);
        let mut item = falling_heart();
        item.wrap_horizontal(world);
        assert_eq!(item.position().coordinates(), (-20.0, -5.0));
    }

    #[test]
    fn update_wraps_only_after_leaving_bottom() {
        let world = Dimension::square(20.0);
        let mut item = Item::dynamic_item(
            EntityId(1),
            ItemKind::Coin,
            Dimension::square(1.0),
            SpeedVector::new(Position::new(3.0, 18.5), 1.0),
        );
        item.update_state(1.0, 9.81, world);
        assert_eq!(item.position().coordinates(), (3.0, 19.5));
        item.update_state(1.0, 9.81, world);
        // 20.5 is past the bottom edge, so the item is moved above the top.
        assert_eq!(item.position().coordinates(), (3.0, -19.0));
        // Direction is preserved: the item keeps falling back into view.
        item.update_state(1.0, 9.81, world);
        assert_eq!(item.position().coordinates(), (3.0, -18.0));
    }

    #[test]
    fn update_wraps_horizontally_for_rightward_drift() {
        let world = Dimension::new(30.0, 20.0);
        let mut item = Item::dynamic_item(
            EntityId(1),
            ItemKind::Coin,
            Dimension::square(1.0),
            SpeedVector::new(Position::new(29.5, 5.0), 1.0),
        )
        .with_heading(DVec2::X);
        item.update_state(1.0, 0.0, world);
        assert_eq!(item.position().coordinates(), (-30.0, 5.0));
    }

    #[test]
    fn update_wraps_upward_drift_to_below_bottom() {
        let world = Dimension::square(20.0);
        let mut item = Item::dynamic_item(
            EntityId(1),
            ItemKind::Coin,
            Dimension::square(1.0),
            SpeedVector::new(Position::new(0.0, -0.5), 1.0),
        )
        .with_heading(DVec2::NEG_Y);
        item.update_state(1.0, 0.0, world);
        assert_eq!(item.position().coordinates(), (0.0, 39.0));
    }

    #[test]
    fn update_leaves_item_above_world_falling() {
        let world = Dimension::square(20.0);
        let mut moved = falling_heart();
        moved.update_state(1.0, 9.81, world);
        assert_eq!(moved.position().coordinates(), (-5.0, -4.0));

        let mut remapped = falling_heart();
        remapped.wrap_vertical(world);
        assert_eq!(remapped.position().y, -19.0);
    }

    #[test]
    fn static_item_ignores_update() {
        let mut item = Item::static_item(
            EntityId(1),
            ItemKind::Heart,
            Dimension::square(1.0),
            Position::new(30.0, 30.0),
        );
        item.update_state(5.0, 9.81, Dimension::square(20.0));
        assert_eq!(item.position(), Position::new(30.0, 30.0));
    }

    #[test]
    fn equality_by_variant_kind_and_effect() {
        let heart = |id, side, at| {
            Item::static_item(EntityId(id), ItemKind::Heart, Dimension::square(side), at)
                .with_effect(Effect::Heal(20))
        };
        let a = heart(1, 1.0, Position::new(0.0, 0.0));
        let b = heart(2, 2.0, Position::new(9.0, 9.0));
        let c = b.with_effect(Effect::Heal(5));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, falling_heart().with_effect(Effect::Heal(20)));
    }
}
