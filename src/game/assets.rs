//=========================================================================
// Game Assets
//=========================================================================
//
// The handle set a game is built from. Loading real image and sound files
// happens outside this crate; `placeholder()` produces correctly sized
// stand-ins for headless runs and tests.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::player::ShipSprites;
use crate::core::{Animation, Sound, Sprite};

//=== GameAssets ==========================================================

/// Every handle the game views draw or play.
///
/// Cloning shares the underlying data.
#[derive(Debug, Clone, PartialEq)]
pub struct GameAssets {
    pub ship: ShipSprites,
    pub bolt: Sprite,
    pub rock: Animation,
    pub explosion: Animation,
    pub shot_sound: Sound,
    pub explosion_sound: Sound,
    pub pause_banner: Sprite,
    pub game_over_banner: Sprite,
}

impl GameAssets {
    /// Stand-in handles with the sizes and timings of the real art.
    pub fn placeholder() -> Self {
        let frames = |prefix: &str, count: usize, size: f32| -> Vec<Sprite> {
            (0..count)
                .map(|i| Sprite::new(format!("{}{}", prefix, i), size, size))
                .collect()
        };

        Self {
            ship: ShipSprites {
                level: Sprite::new("ship_level", 48.0, 24.0),
                bank_up: Sprite::new("ship_bank_up", 48.0, 24.0),
                bank_down: Sprite::new("ship_bank_down", 48.0, 24.0),
            },
            bolt: Sprite::new("bolt", 12.0, 4.0),
            rock: Animation::new(frames("rock", 8, 32.0), 0.08),
            explosion: Animation::new(frames("explosion", 6, 48.0), 0.05),
            shot_sound: Sound::new("shot", 0.15),
            explosion_sound: Sound::new("explosion", 0.6),
            pause_banner: Sprite::new("pause_banner", 256.0, 64.0),
            game_over_banner: Sprite::new("game_over_banner", 320.0, 64.0),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
