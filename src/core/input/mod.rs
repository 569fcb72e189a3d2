//=========================================================================
// Input System
//=========================================================================
//
// Keyboard input for the frame loop.
//
// Architecture:
//   PlatformEvent queue → InputSampler::pump() → InputSnapshot → Context
//
// Responsibilities:
// - Normalize platform key events into `InputEvent`s
// - Detect per-frame edges (just pressed / just released)
// - Track held keys across frames
// - Surface the platform's quit request as a one-shot flag
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod sampler;
mod snapshot;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};
pub use sampler::InputSampler;
pub use snapshot::{InputSnapshot, KeyEdge};
