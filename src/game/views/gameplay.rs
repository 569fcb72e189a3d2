//=========================================================================
// Gameplay View
//=========================================================================
//
// The running game. Owns the player, every entity collection and the
// factories feeding them.
//
// Frame order:
//   pause check → cannon select → steer → fire → hazard spawner
//   → entity pass → collision → apply spawns
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::mem;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{GameOverView, PauseView, PAUSE_KEYS};
use crate::core::{Context, Directive, KeyCode, View};
use crate::game::assets::GameAssets;
use crate::game::collision::resolve;
use crate::game::config::GameConfig;
use crate::game::effect::EffectFactory;
use crate::game::hazard::HazardSpawner;
use crate::game::lifecycle::{Entities, Spawn, SpawnQueue};
use crate::game::player::Player;

//=== Outcome =============================================================

/// What a single gameplay tick decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Paused,
    PlayerDestroyed,
}

//=== GameplayView ========================================================

pub struct GameplayView {
    assets: GameAssets,
    config: GameConfig,
    player: Player,
    entities: Entities,
    spawns: SpawnQueue,
    spawner: HazardSpawner,
    effects: EffectFactory,
    score: u32,
}

impl GameplayView {
    /// Fresh game on a surface of `output_size`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GameConfig::validate`].
    pub fn new(assets: GameAssets, config: GameConfig, output_size: (u32, u32)) -> Self {
        config.validate();

        let player = Player::spawn(
            output_size,
            assets.ship.clone(),
            config.cannons[0],
            config.player_speed,
        );
        let spawner = HazardSpawner::new(assets.rock.clone(), &config);
        let effects = EffectFactory::new(assets.explosion.clone(), config.effect_duration);

        info!(target: "game", "New game on a {}x{} surface", output_size.0, output_size.1);
        Self {
            assets,
            config,
            player,
            entities: Entities::new(),
            spawns: SpawnQueue::new(),
            spawner,
            effects,
            score: 0,
        }
    }

    /// Runs one frame of gameplay.
    pub fn tick(&mut self, ctx: &mut Context, dt: f32) -> Outcome {
        let input = *ctx.input();

        if input.any_just_pressed(&PAUSE_KEYS) {
            return Outcome::Paused;
        }

        self.player.select_cannon(&input, &self.config.cannons);
        self.player.steer(&input, dt, ctx.output_size());

        if input.just_pressed(KeyCode::Space) {
            let shot = self
                .player
                .fire(self.assets.bolt.clone(), self.config.projectile_speed);
            self.spawns.push(Spawn::Projectile(shot));
            ctx.play_sound(&self.assets.shot_sound);
        }

        self.spawner.update(dt, ctx.output_size(), &mut self.spawns);
        self.entities.advance(ctx, dt);

        let resolution = resolve(
            mem::take(&mut self.entities.projectiles),
            mem::take(&mut self.entities.hazards),
            self.player.rect(),
        );
        self.entities.projectiles = resolution.projectiles;
        self.entities.hazards = resolution.hazards;

        for center in resolution.effect_centers {
            self.spawns.push(Spawn::Effect(self.effects.spawn(center)));
            ctx.play_sound(&self.assets.explosion_sound);
            self.score += 1;
        }

        if resolution.player_destroyed {
            let wreck = self.effects.spawn(self.player.rect().center());
            self.spawns.push(Spawn::Effect(wreck));
            ctx.play_sound(&self.assets.explosion_sound);
        }

        self.spawns.apply(&mut self.entities);

        if resolution.player_destroyed {
            Outcome::PlayerDestroyed
        } else {
            Outcome::Running
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn assets(&self) -> &GameAssets {
        &self.assets
    }

    /// Hazards destroyed so far.
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl View for GameplayView {
    fn update(mut self: Box<Self>, ctx: &mut Context, dt: f32) -> Directive {
        match self.tick(ctx, dt) {
            Outcome::Running => Directive::Continue(self),
            Outcome::Paused => {
                debug!(target: "game", "Paused");
                Directive::next(PauseView::new(self))
            }
            Outcome::PlayerDestroyed => {
                info!(target: "game", "Player destroyed, score {}", self.score);
                let GameplayView {
                    assets,
                    config,
                    entities,
                    score,
                    ..
                } = *self;
                Directive::next(GameOverView::new(assets, config, entities.effects, score))
            }
        }
    }

    fn render(&self, ctx: &mut Context) {
        self.entities.render(ctx);
        self.player.render(ctx);
    }

    fn name(&self) -> &'static str {
        "gameplay"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
