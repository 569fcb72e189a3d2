//=========================================================================
// Effects
//=========================================================================
//
// Short-lived visual effects (explosions). An effect plays its animation
// centered on a point and removes itself once its duration has passed.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::lifecycle::Entity;
use crate::core::{Animation, Context, Rect};

//=== Effect ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    center: Vec2,
    animation: Animation,
    age: f32,
    duration: f32,
}

impl Effect {
    /// # Panics
    ///
    /// Panics if `duration <= 0.0`.
    pub fn new(center: Vec2, animation: Animation, duration: f32) -> Self {
        assert!(duration > 0.0, "Effect duration must be positive, got {}", duration);
        Self {
            center,
            animation,
            age: 0.0,
            duration,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.animation.frame_size())
    }
}

impl Entity for Effect {
    fn update(mut self, _ctx: &Context, dt: f32) -> Option<Self> {
        self.age += dt;
        if self.age >= self.duration {
            return None;
        }
        Some(self)
    }

    fn render(&self, ctx: &mut Context) {
        ctx.draw(self.animation.frame_at(self.age), self.rect());
    }
}

//=== EffectFactory =======================================================

/// Stamps out effects sharing one animation and lifetime.
#[derive(Debug, Clone)]
pub struct EffectFactory {
    animation: Animation,
    duration: f32,
}

impl EffectFactory {
    pub fn new(animation: Animation, duration: f32) -> Self {
        assert!(duration > 0.0, "Effect duration must be positive, got {}", duration);
        Self {
            animation,
            duration,
        }
    }

    pub fn spawn(&self, center: Vec2) -> Effect {
        Effect::new(center, self.animation.clone(), self.duration)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
