//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use nebula_raid::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Frame context and views
pub use crate::core::{Context, Directive, PlatformError, View};

// Input system
pub use crate::core::{InputSnapshot, KeyCode, KeyEdge};

// Assets and geometry
pub use crate::core::{Animation, Rect, Sound, Sprite};

// Game
pub use crate::game::{Entity, GameAssets, GameConfig, GameplayView};
