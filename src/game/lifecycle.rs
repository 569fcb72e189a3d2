//=========================================================================
// Entity Lifecycle
//=========================================================================
//
// Per-frame update/remove pass over homogeneous entity collections.
//
// Architecture:
//   Vec<E> → take → update each (Some = keep, None = destroy) → reattach
//   SpawnQueue → apply(Entities) after the pass
//
// Entities never remove themselves from a collection they are being
// iterated in; they return None and the pass drops them. Anything created
// during a pass goes into the SpawnQueue and joins its collection only
// once the pass is over, so it is first updated on the next frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::mem;

//=== Internal Dependencies ===============================================

use super::effect::Effect;
use super::hazard::Hazard;
use super::projectile::Projectile;
use crate::core::Context;

//=== Entity ==============================================================

/// Something that lives in a collection and is advanced once per frame.
pub trait Entity: Sized {
    /// Advances by `dt` seconds. Returns `None` to be destroyed.
    fn update(self, ctx: &Context, dt: f32) -> Option<Self>;

    fn render(&self, ctx: &mut Context);
}

/// Runs one update pass over `entities`, dropping the destroyed ones.
///
/// Survivors keep their relative order.
pub fn advance<E: Entity>(entities: &mut Vec<E>, ctx: &Context, dt: f32) {
    let current = mem::take(entities);
    *entities = current
        .into_iter()
        .filter_map(|entity| entity.update(ctx, dt))
        .collect();
}

/// Renders every entity in order.
pub fn render_all<E: Entity>(entities: &[E], ctx: &mut Context) {
    for entity in entities {
        entity.render(ctx);
    }
}

//=== Spawn ===============================================================

/// An entity waiting to join its collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Spawn {
    Projectile(Projectile),
    Hazard(Hazard),
    Effect(Effect),
}

//=== SpawnQueue ==========================================================

/// Entities created during a pass.
///
/// Gameplay code pushes here while iterating; the owner drains the queue
/// into the collections once the pass is finished.
#[derive(Debug, Default)]
pub struct SpawnQueue {
    queue: Vec<Spawn>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, spawn: Spawn) {
        self.queue.push(spawn);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes every queued spawn, leaving the queue empty.
    pub fn take(&mut self) -> Vec<Spawn> {
        mem::take(&mut self.queue)
    }

    /// Appends every queued spawn to its collection in `entities`.
    pub fn apply(&mut self, entities: &mut Entities) {
        for spawn in self.queue.drain(..) {
            match spawn {
                Spawn::Projectile(projectile) => entities.projectiles.push(projectile),
                Spawn::Hazard(hazard) => entities.hazards.push(hazard),
                Spawn::Effect(effect) => entities.effects.push(effect),
            }
        }
    }
}

//=== Entities ============================================================

/// The live entity collections of a game.
#[derive(Debug, Default, Clone)]
pub struct Entities {
    pub projectiles: Vec<Projectile>,
    pub hazards: Vec<Hazard>,
    pub effects: Vec<Effect>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the update pass on every collection.
    pub fn advance(&mut self, ctx: &Context, dt: f32) {
        advance(&mut self.projectiles, ctx, dt);
        advance(&mut self.hazards, ctx, dt);
        advance(&mut self.effects, ctx, dt);
    }

    /// Draws hazards, then projectiles, then effects on top.
    pub fn render(&self, ctx: &mut Context) {
        render_all(&self.hazards, ctx);
        render_all(&self.projectiles, ctx);
        render_all(&self.effects, ctx);
    }

    pub fn len(&self) -> usize {
        self.projectiles.len() + self.hazards.len() + self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Animation, Rect, Sprite};
    use glam::Vec2;

    //--- Test Helpers -----------------------------------------------------

    /// Counts down and dies at zero.
    #[derive(Debug, PartialEq)]
    struct Fuse {
        id: u32,
        remaining: u32,
    }

    impl Entity for Fuse {
        fn update(mut self, _ctx: &Context, _dt: f32) -> Option<Self> {
            if self.remaining == 0 {
                return None;
            }
            self.remaining -= 1;
            Some(self)
        }

        fn render(&self, ctx: &mut Context) {
            ctx.draw(&Sprite::new("fuse", 1.0, 1.0), Rect::new(self.id as f32, 0.0, 1.0, 1.0));
        }
    }

    fn fuse(id: u32, remaining: u32) -> Fuse {
        Fuse { id, remaining }
    }

    fn explosion() -> Animation {
        Animation::new(vec![Sprite::new("boom", 16.0, 16.0)], 0.1)
    }

    //=====================================================================
    // Pass Tests
    //=====================================================================

    #[test]
    fn destroyed_entities_leave_and_survivors_keep_order() {
        let ctx = Context::headless(100, 100);
        let mut fuses = vec![fuse(1, 2), fuse(2, 0), fuse(3, 1), fuse(4, 0)];

        advance(&mut fuses, &ctx, 0.016);
        assert_eq!(fuses, vec![fuse(1, 1), fuse(3, 0)]);

        advance(&mut fuses, &ctx, 0.016);
        assert_eq!(fuses, vec![fuse(1, 0)]);

        advance(&mut fuses, &ctx, 0.016);
        assert!(fuses.is_empty());
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let ctx = Context::headless(100, 100);
        let mut fuses: Vec<Fuse> = Vec::new();

        advance(&mut fuses, &ctx, 0.016);

        assert!(fuses.is_empty());
    }

    //=====================================================================
    // Spawn Queue Tests
    //=====================================================================

    #[test]
    fn spawns_join_after_the_pass() {
        let ctx = Context::headless(100, 100);
        let mut entities = Entities::new();
        let mut spawns = SpawnQueue::new();

        spawns.push(Spawn::Effect(Effect::new(Vec2::new(50.0, 50.0), explosion(), 0.5)));
        entities.advance(&ctx, 0.1);
        assert!(entities.is_empty());

        spawns.apply(&mut entities);

        assert!(spawns.is_empty());
        assert_eq!(entities.effects.len(), 1);
        // Not advanced by the pass that ran before it joined
        assert_eq!(entities.effects[0].age(), 0.0);
    }

    #[test]
    fn apply_routes_each_kind_to_its_collection() {
        let mut entities = Entities::new();
        let mut spawns = SpawnQueue::new();

        spawns.push(Spawn::Hazard(Hazard::new(Vec2::ZERO, 10.0, explosion())));
        spawns.push(Spawn::Effect(Effect::new(Vec2::ZERO, explosion(), 0.5)));
        spawns.push(Spawn::Hazard(Hazard::new(Vec2::ONE, 10.0, explosion())));
        assert_eq!(spawns.len(), 3);

        spawns.apply(&mut entities);

        assert_eq!(entities.hazards.len(), 2);
        assert_eq!(entities.effects.len(), 1);
        assert!(entities.projectiles.is_empty());
    }

    #[test]
    fn take_leaves_queue_empty() {
        let mut spawns = SpawnQueue::new();
        spawns.push(Spawn::Effect(Effect::new(Vec2::ZERO, explosion(), 0.5)));

        let taken = spawns.take();

        assert_eq!(taken.len(), 1);
        assert!(spawns.is_empty());
    }
}
