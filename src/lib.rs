//=========================================================================
// Nebula Raid — Library Root
//
// This crate defines the public API surface of the Nebula Raid runtime.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the platform-independent runtime (`core`) and the shooter
//   built on it (`game`)
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use nebula_raid::prelude::*;
//
// fn main() -> Result<(), PlatformError> {
//     let engine = EngineBuilder::new().build();
//     let view = GameplayView::new(GameAssets::placeholder(), GameConfig::default(), engine.size());
//     engine.run(Box::new(view))
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the runtime: input sampling, the context facade, the view
// state machine and the frame loop. It runs headless, which is how the
// views are tested.
//
// `game` holds the shooter itself: entities, collision and the views.
//
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop) and is kept private, as it is not part of the public API
// surface.
//
// `engine` wires the runtime together and hands it to the platform.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
