//=========================================================================
// Game Configuration
//=========================================================================
//
// Tuning values for the gameplay view.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::projectile::Cannon;

//=== GameConfig ==========================================================

/// Gameplay tuning.
///
/// # Default Values
///
/// - **Player speed**: 300 px/s
/// - **Projectile speed**: 480 px/s
/// - **Cannons**: `Single`, `Wave { 40 px, 2 Hz }`, `Drift { 60 px/s³ }`
/// - **Hazard interval**: 0.4 – 1.2 s
/// - **Hazard speed**: 80 – 200 px/s
/// - **Effect duration**: 0.5 s
/// - **Seed**: `0x5EED`
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Player movement speed in pixels per second.
    pub player_speed: f32,

    /// Horizontal projectile speed in pixels per second.
    pub projectile_speed: f32,

    /// Cannons selectable with the `1`, `2` and `3` keys.
    pub cannons: [Cannon; 3],

    /// Range the hazard spawn interval is drawn from, in seconds.
    pub hazard_interval: (f32, f32),

    /// Range the hazard drift speed is drawn from, in pixels per second.
    pub hazard_speed: (f32, f32),

    /// Lifetime of an explosion effect in seconds.
    pub effect_duration: f32,

    /// Seed for the hazard spawner's RNG.
    pub seed: u64,
}

impl GameConfig {
    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the hazard spawn interval range.
    ///
    /// # Panics
    ///
    /// Panics if `min <= 0.0` or `min > max`.
    pub fn with_hazard_interval(mut self, min: f32, max: f32) -> Self {
        assert!(min > 0.0, "Hazard interval must be positive, got {}", min);
        assert!(min <= max, "Hazard interval range is inverted: {}..{}", min, max);
        self.hazard_interval = (min, max);
        self
    }

    /// Checks every value. Called when a gameplay view is created.
    ///
    /// # Panics
    ///
    /// Panics on values no game can run with.
    pub fn validate(&self) {
        assert!(self.player_speed >= 0.0, "Player speed must not be negative");
        assert!(self.projectile_speed > 0.0, "Projectile speed must be positive");
        assert!(self.effect_duration > 0.0, "Effect duration must be positive");

        let (min, max) = self.hazard_interval;
        assert!(min > 0.0 && min <= max, "Invalid hazard interval {}..{}", min, max);

        let (min, max) = self.hazard_speed;
        assert!(min > 0.0 && min <= max, "Invalid hazard speed {}..{}", min, max);
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 300.0,
            projectile_speed: 480.0,
            cannons: [
                Cannon::Single,
                Cannon::Wave {
                    amplitude: 40.0,
                    frequency: 2.0,
                },
                Cannon::Drift { drift: 60.0 },
            ],
            hazard_interval: (0.4, 1.2),
            hazard_speed: (80.0, 200.0),
            effect_duration: 0.5,
            seed: 0x5EED,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
