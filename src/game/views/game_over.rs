//=========================================================================
// Game Over View
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{draw_banner, GameplayView};
use crate::core::{Context, Directive, KeyCode, View};
use crate::game::assets::GameAssets;
use crate::game::config::GameConfig;
use crate::game::effect::Effect;
use crate::game::lifecycle::{advance, render_all};

//=== GameOverView ========================================================

/// Final screen. The last explosions play out under the banner.
pub struct GameOverView {
    assets: GameAssets,
    config: GameConfig,
    effects: Vec<Effect>,
    score: u32,
}

impl GameOverView {
    pub fn new(assets: GameAssets, config: GameConfig, effects: Vec<Effect>, score: u32) -> Self {
        Self {
            assets,
            config,
            effects,
            score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

impl View for GameOverView {
    fn update(mut self: Box<Self>, ctx: &mut Context, dt: f32) -> Directive {
        advance(&mut self.effects, ctx, dt);

        let input = ctx.input();
        if input.just_pressed(KeyCode::Escape) {
            info!(target: "game", "Quit from game over screen (score {})", self.score);
            return Directive::Terminate;
        }
        if input.just_pressed(KeyCode::Enter) {
            let GameOverView { assets, config, .. } = *self;
            return Directive::next(GameplayView::new(assets, config, ctx.output_size()));
        }
        Directive::Continue(self)
    }

    fn render(&self, ctx: &mut Context) {
        render_all(&self.effects, ctx);
        draw_banner(ctx, &self.assets.game_over_banner);
    }

    fn name(&self) -> &'static str {
        "game_over"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
