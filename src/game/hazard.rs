//=========================================================================
// Hazards
//=========================================================================
//
// Obstacles drifting in from the right edge. They destroy the player on
// contact and are destroyed by projectiles.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::RangeInclusive;

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

//=== Internal Dependencies ===============================================

use super::config::GameConfig;
use super::lifecycle::{Entity, Spawn, SpawnQueue};
use crate::core::{Animation, Context, Rect};

//=== Hazard ==============================================================

/// A drifting obstacle.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    position: Vec2,
    speed: f32,
    animation: Animation,
    age: f32,
}

impl Hazard {
    /// Hazard whose box has its top-left corner at `position`,
    /// drifting left at `speed` px/s.
    pub fn new(position: Vec2, speed: f32, animation: Animation) -> Self {
        Self {
            position,
            speed,
            animation,
            age: 0.0,
        }
    }

    /// Bounding box, derived from position and frame size.
    pub fn rect(&self) -> Rect {
        let size = self.animation.frame_size();
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn age(&self) -> f32 {
        self.age
    }
}

impl Entity for Hazard {
    fn update(mut self, _ctx: &Context, dt: f32) -> Option<Self> {
        self.age += dt;
        self.position.x -= self.speed * dt;

        // Gone once fully past the trailing (left) edge
        if self.rect().right() < 0.0 {
            return None;
        }
        Some(self)
    }

    fn render(&self, ctx: &mut Context) {
        ctx.draw(self.animation.frame_at(self.age), self.rect());
    }
}

//=== HazardSpawner =======================================================

/// Periodic, randomized hazard trigger.
///
/// Counts down a timer; every time it expires a hazard is queued just
/// beyond the right edge and the timer re-arms with a fresh random
/// interval. Seeded, so a given config always produces the same wave.
pub struct HazardSpawner {
    animation: Animation,
    rng: Pcg32,
    interval: RangeInclusive<f32>,
    speed: RangeInclusive<f32>,
    countdown: f32,
}

impl HazardSpawner {
    pub fn new(animation: Animation, config: &GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let interval = config.hazard_interval.0..=config.hazard_interval.1;
        let countdown = rng.random_range(interval.clone());

        Self {
            animation,
            rng,
            interval,
            speed: config.hazard_speed.0..=config.hazard_speed.1,
            countdown,
        }
    }

    /// Advances the timer and queues any hazards that came due.
    pub fn update(&mut self, dt: f32, output_size: (u32, u32), spawns: &mut SpawnQueue) {
        self.countdown -= dt;

        while self.countdown <= 0.0 {
            spawns.push(Spawn::Hazard(self.spawn(output_size)));
            self.countdown += self.rng.random_range(self.interval.clone());
        }
    }

    /// Seconds until the next hazard.
    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    fn spawn(&mut self, (width, height): (u32, u32)) -> Hazard {
        let size = self.animation.frame_size();
        let max_y = (height as f32 - size.y).max(0.0);
        let position = Vec2::new(width as f32, self.rng.random_range(0.0..=max_y));
        let speed = self.rng.random_range(self.speed.clone());

        trace!(target: "spawn", "Hazard at ({:.1}, {:.1}) drifting {:.1} px/s", position.x, position.y, speed);
        Hazard::new(position, speed, self.animation.clone())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
