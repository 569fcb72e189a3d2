//=========================================================================
// Projectiles
//=========================================================================
//
// Player shots. Each trajectory kind carries its own kinematic parameters
// and an elapsed-time counter; the position (and therefore the bounding
// box) is evaluated from those on every call.
//
//   Straight    x = x0 + v·t                 y = y0
//   Sinusoidal  x = x0 + v·t                 y = y0 + A·sin(2π·f·t)
//   CubicDrift  x = x0 + v·t                 y = y0 + d·t³
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::f32::consts::TAU;

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::lifecycle::Entity;
use crate::core::{Context, Rect, Sprite};

//=== Cannon ==============================================================

/// Weapon selection. Decides which trajectory a shot follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cannon {
    /// Flies straight ahead.
    Single,

    /// Weaves up and down around the firing line.
    Wave { amplitude: f32, frequency: f32 },

    /// Peels away from the firing line, slowly at first.
    Drift { drift: f32 },
}

impl Cannon {
    /// Builds the projectile this cannon fires from `origin`
    /// (top-left of the projectile's box at launch).
    pub fn fire(&self, origin: Vec2, speed: f32, sprite: Sprite) -> Projectile {
        match *self {
            Cannon::Single => Projectile::Straight {
                origin,
                speed,
                elapsed: 0.0,
                sprite,
            },
            Cannon::Wave {
                amplitude,
                frequency,
            } => Projectile::Sinusoidal {
                origin,
                speed,
                amplitude,
                frequency,
                elapsed: 0.0,
                sprite,
            },
            Cannon::Drift { drift } => Projectile::CubicDrift {
                origin,
                speed,
                drift,
                elapsed: 0.0,
                sprite,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cannon::Single => "single",
            Cannon::Wave { .. } => "wave",
            Cannon::Drift { .. } => "drift",
        }
    }
}

//=== Projectile ==========================================================

/// A shot in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum Projectile {
    Straight {
        origin: Vec2,
        speed: f32,
        elapsed: f32,
        sprite: Sprite,
    },
    Sinusoidal {
        origin: Vec2,
        speed: f32,
        amplitude: f32,
        frequency: f32,
        elapsed: f32,
        sprite: Sprite,
    },
    CubicDrift {
        origin: Vec2,
        speed: f32,
        drift: f32,
        elapsed: f32,
        sprite: Sprite,
    },
}

impl Projectile {
    /// Top-left corner of the bounding box right now.
    pub fn position(&self) -> Vec2 {
        match *self {
            Projectile::Straight {
                origin,
                speed,
                elapsed,
                ..
            } => Vec2::new(origin.x + speed * elapsed, origin.y),
            Projectile::Sinusoidal {
                origin,
                speed,
                amplitude,
                frequency,
                elapsed,
                ..
            } => Vec2::new(
                origin.x + speed * elapsed,
                origin.y + amplitude * (TAU * frequency * elapsed).sin(),
            ),
            Projectile::CubicDrift {
                origin,
                speed,
                drift,
                elapsed,
                ..
            } => Vec2::new(
                origin.x + speed * elapsed,
                origin.y + drift * elapsed.powi(3),
            ),
        }
    }

    /// Bounding box, derived from the trajectory parameters.
    pub fn rect(&self) -> Rect {
        let position = self.position();
        let size = self.sprite().size();
        Rect::new(position.x, position.y, size.x, size.y)
    }

    pub fn sprite(&self) -> &Sprite {
        match self {
            Projectile::Straight { sprite, .. }
            | Projectile::Sinusoidal { sprite, .. }
            | Projectile::CubicDrift { sprite, .. } => sprite,
        }
    }

    /// Seconds since launch.
    pub fn elapsed(&self) -> f32 {
        match *self {
            Projectile::Straight { elapsed, .. }
            | Projectile::Sinusoidal { elapsed, .. }
            | Projectile::CubicDrift { elapsed, .. } => elapsed,
        }
    }

    fn elapsed_mut(&mut self) -> &mut f32 {
        match self {
            Projectile::Straight { elapsed, .. }
            | Projectile::Sinusoidal { elapsed, .. }
            | Projectile::CubicDrift { elapsed, .. } => elapsed,
        }
    }

    /// Whether the box has left the part of the screen this kind may occupy.
    ///
    /// Straight shots only leave horizontally. Drifting shots can leave
    /// through any edge.
    fn has_left(&self, width: f32, height: f32) -> bool {
        let rect = self.rect();
        match self {
            Projectile::Straight { .. } => rect.left() > width || rect.right() < 0.0,
            Projectile::Sinusoidal { .. } | Projectile::CubicDrift { .. } => {
                rect.is_outside(width, height)
            }
        }
    }
}

impl Entity for Projectile {
    fn update(mut self, ctx: &Context, dt: f32) -> Option<Self> {
        *self.elapsed_mut() += dt;

        let (width, height) = ctx.output_size();
        if self.has_left(width as f32, height as f32) {
            return None;
        }
        Some(self)
    }

    fn render(&self, ctx: &mut Context) {
        ctx.draw(self.sprite(), self.rect());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bolt() -> Sprite {
        Sprite::new("bolt", 8.0, 4.0)
    }

    //=====================================================================
    // Trajectory Tests
    //=====================================================================

    #[test]
    fn straight_shot_reaches_screen_edge_after_200_frames() {
        let ctx = Context::headless(800, 600);
        let dt = 1.0 / 60.0;
        let mut projectile = Some(Cannon::Single.fire(Vec2::new(0.0, 300.0), 240.0, bolt()));
        let mut last_x = 0.0;
        let mut frames = 0;

        while let Some(shot) = projectile.take() {
            last_x = shot.rect().x;
            projectile = shot.update(&ctx, dt);
            frames += 1;
            assert!(frames <= 202, "Projectile never left the screen");
        }

        // Destroyed on the first update that pushed it past x = 800
        assert!(last_x <= 800.0, "Survived while already past the edge: {}", last_x);
        assert!(last_x + 240.0 * dt > 800.0 - 1e-3);
        assert!((200..=201).contains(&frames), "Destroyed after {} frames", frames);
    }

    #[test]
    fn sinusoidal_shot_weaves_around_firing_line() {
        let shot = Cannon::Wave {
            amplitude: 40.0,
            frequency: 1.0,
        }
        .fire(Vec2::new(0.0, 300.0), 100.0, bolt());
        let ctx = Context::headless(800, 600);

        let quarter = shot.clone().update(&ctx, 0.25).unwrap();
        assert!((quarter.position().y - 340.0).abs() < 1e-3);
        assert!((quarter.position().x - 25.0).abs() < 1e-3);

        let three_quarters = quarter.update(&ctx, 0.5).unwrap();
        assert!((three_quarters.position().y - 260.0).abs() < 1e-3);
    }

    #[test]
    fn cubic_drift_accelerates_away() {
        let shot = Cannon::Drift { drift: 10.0 }.fire(Vec2::new(0.0, 100.0), 50.0, bolt());
        let ctx = Context::headless(800, 600);

        let shot = shot.update(&ctx, 2.0).unwrap();

        assert_eq!(shot.position(), Vec2::new(100.0, 180.0));
        assert_eq!(shot.elapsed(), 2.0);
    }

    #[test]
    fn rect_follows_parameters() {
        let shot = Projectile::Straight {
            origin: Vec2::new(10.0, 20.0),
            speed: 100.0,
            elapsed: 0.5,
            sprite: bolt(),
        };

        assert_eq!(shot.rect(), Rect::new(60.0, 20.0, 8.0, 4.0));
    }

    //=====================================================================
    // Destruction Tests
    //=====================================================================

    #[test]
    fn drifting_shot_dies_at_bottom_edge() {
        let ctx = Context::headless(800, 600);
        let shot = Cannon::Drift { drift: 1000.0 }.fire(Vec2::new(0.0, 500.0), 1.0, bolt());

        assert!(shot.update(&ctx, 1.0).is_none());
    }

    #[test]
    fn straight_shot_ignores_vertical_bounds() {
        let ctx = Context::headless(800, 600);
        let shot = Cannon::Single.fire(Vec2::new(0.0, 900.0), 10.0, bolt());

        assert!(shot.update(&ctx, 0.1).is_some());
    }

    proptest! {
        #[test]
        fn past_right_edge_is_always_destroyed(
            kind in 0usize..3,
            speed in 1.0f32..1000.0,
            start_y in 0.0f32..600.0,
            overshoot in 0.001f32..400.0,
            dt in 0.0f32..0.1,
        ) {
            let ctx = Context::headless(800, 600);
            let cannon = [
                Cannon::Single,
                Cannon::Wave { amplitude: 30.0, frequency: 1.5 },
                Cannon::Drift { drift: 20.0 },
            ][kind];
            let shot = cannon.fire(Vec2::new(800.0 + overshoot, start_y), speed, bolt());

            prop_assert!(shot.rect().x > 800.0);
            prop_assert!(shot.update(&ctx, dt).is_none());
        }
    }
}
