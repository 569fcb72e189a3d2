//=========================================================================
// Player
//=========================================================================
//
// The player's ship: keyboard steering inside the visible area, cannon
// selection and firing.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use super::projectile::{Cannon, Projectile};
use crate::core::{Context, InputSnapshot, KeyCode, Rect, Sprite};

//=== Key Bindings ========================================================

const UP: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const DOWN: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];
const LEFT: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
const CANNON_KEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];

//=== Orientation =========================================================

/// Which way the ship is banking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Level,
    BankUp,
    BankDown,
}

/// One sprite per orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipSprites {
    pub level: Sprite,
    pub bank_up: Sprite,
    pub bank_down: Sprite,
}

impl ShipSprites {
    fn get(&self, orientation: Orientation) -> &Sprite {
        match orientation {
            Orientation::Level => &self.level,
            Orientation::BankUp => &self.bank_up,
            Orientation::BankDown => &self.bank_down,
        }
    }
}

//=== Player ==============================================================

#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    sprites: ShipSprites,
    orientation: Orientation,
    cannon: Cannon,
    speed: f32,
}

impl Player {
    /// Player with its top-left corner at `position`, level, holding `cannon`.
    pub fn new(position: Vec2, sprites: ShipSprites, cannon: Cannon, speed: f32) -> Self {
        Self {
            position,
            sprites,
            orientation: Orientation::Level,
            cannon,
            speed,
        }
    }

    /// Player vertically centered at the left edge of a `width × height` surface.
    pub fn spawn(
        (_width, height): (u32, u32),
        sprites: ShipSprites,
        cannon: Cannon,
        speed: f32,
    ) -> Self {
        let size = sprites.level.size();
        let position = Vec2::new(size.x, (height as f32 - size.y) / 2.0);
        Self::new(position.max(Vec2::ZERO), sprites, cannon, speed)
    }

    //--- State ------------------------------------------------------------

    pub fn rect(&self) -> Rect {
        let size = self.sprite().size();
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cannon(&self) -> Cannon {
        self.cannon
    }

    fn sprite(&self) -> &Sprite {
        self.sprites.get(self.orientation)
    }

    //--- Control ----------------------------------------------------------

    /// Moves according to the held direction keys, then clamps to the surface.
    ///
    /// # Panics
    ///
    /// Panics if the surface is smaller than the ship.
    pub fn steer(&mut self, input: &InputSnapshot, dt: f32, (width, height): (u32, u32)) {
        let axis = |negative: &[KeyCode], positive: &[KeyCode]| -> f32 {
            input.any_held(positive) as i32 as f32 - input.any_held(negative) as i32 as f32
        };
        let direction = Vec2::new(axis(&LEFT, &RIGHT), axis(&UP, &DOWN));

        self.orientation = match direction.y {
            y if y < 0.0 => Orientation::BankUp,
            y if y > 0.0 => Orientation::BankDown,
            _ => Orientation::Level,
        };
        self.position += direction.normalize_or_zero() * self.speed * dt;

        let size = self.sprite().size();
        let max = Vec2::new(width as f32, height as f32) - size;
        assert!(
            max.x >= 0.0 && max.y >= 0.0,
            "Surface {}x{} is smaller than the player ({}x{})",
            width,
            height,
            size.x,
            size.y
        );
        self.position = self.position.clamp(Vec2::ZERO, max);
    }

    /// Switches cannon if `1`, `2` or `3` went down this frame.
    pub fn select_cannon(&mut self, input: &InputSnapshot, cannons: &[Cannon; 3]) {
        for (key, cannon) in CANNON_KEYS.iter().zip(cannons) {
            if input.just_pressed(*key) && self.cannon != *cannon {
                debug!(target: "game", "Cannon switched to {}", cannon.name());
                self.cannon = *cannon;
            }
        }
    }

    /// Fires the selected cannon from the ship's nose.
    pub fn fire(&self, sprite: Sprite, speed: f32) -> Projectile {
        let rect = self.rect();
        let muzzle = Vec2::new(rect.right(), rect.center().y - sprite.size().y / 2.0);
        self.cannon.fire(muzzle, speed, sprite)
    }

    pub fn render(&self, ctx: &mut Context) {
        ctx.draw(self.sprite(), self.rect());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
