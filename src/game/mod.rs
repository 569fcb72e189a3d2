//=========================================================================
// Game
//=========================================================================
//
// The shooter built on top of the core runtime.
//
// Architecture:
//   views      GameplayView / PauseView / GameOverView
//   lifecycle  Entity trait, update pass, SpawnQueue
//   collision  projectile × hazard × player resolver
//   entities   Projectile (+ Cannon), Hazard (+ spawner), Effect, Player
//
//=========================================================================

//=== Module Declarations =================================================

pub mod assets;
pub mod collision;
pub mod config;
pub mod effect;
pub mod hazard;
pub mod lifecycle;
pub mod player;
pub mod projectile;
pub mod views;

//=== Public API ==========================================================

pub use assets::GameAssets;
pub use collision::{resolve, Alive, Resolution};
pub use config::GameConfig;
pub use effect::{Effect, EffectFactory};
pub use hazard::{Hazard, HazardSpawner};
pub use lifecycle::{Entities, Entity, Spawn, SpawnQueue};
pub use player::{Orientation, Player, ShipSprites};
pub use projectile::{Cannon, Projectile};
pub use views::{GameOverView, GameplayView, Outcome, PauseView};
