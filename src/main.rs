//=========================================================================
// Nebula Raid — Binary
//=========================================================================

use std::process;

use log::{error, info};
use nebula_raid::game::{GameAssets, GameConfig, GameplayView};
use nebula_raid::EngineBuilder;

fn main() {
    env_logger::init();
    info!(target: "main", "Nebula Raid {}", env!("CARGO_PKG_VERSION"));

    let engine = EngineBuilder::new().build();
    let view = GameplayView::new(GameAssets::placeholder(), GameConfig::default(), engine.size());

    if let Err(e) = engine.run(Box::new(view)) {
        error!(target: "main", "Fatal: {}", e);
        process::exit(1);
    }
}
