//=========================================================================
// Game Views
//=========================================================================
//
// The three screens of the game.
//
//   GameplayView ──Esc/P──▶ PauseView ──Esc/P──▶ GameplayView (same state)
//        │                      └──Q──▶ Terminate
//        └──player destroyed──▶ GameOverView ──Enter──▶ fresh GameplayView
//                                    └──Esc──▶ Terminate
//
//=========================================================================

//=== Module Declarations =================================================

mod game_over;
mod gameplay;
mod pause;

//=== Public API ==========================================================

pub use game_over::GameOverView;
pub use gameplay::{GameplayView, Outcome};
pub use pause::PauseView;

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::{Context, KeyCode, Rect, Sprite};

//=== Shared Helpers ======================================================

const PAUSE_KEYS: [KeyCode; 2] = [KeyCode::Escape, KeyCode::KeyP];

/// Draws `banner` centered on the output.
fn draw_banner(ctx: &mut Context, banner: &Sprite) {
    let (width, height) = ctx.output_size();
    let center = Vec2::new(width as f32, height as f32) / 2.0;
    ctx.draw(banner, Rect::from_center(center, banner.size()));
}
