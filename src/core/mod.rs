//=========================================================================
// Core Systems
//=========================================================================
//
// Platform-independent runtime: input sampling, the context facade, the
// view state machine and the frame loop that ties them together.
//
// Architecture:
// ```text
//   FrameLoop
//     ├─ InputSampler   (drains PlatformEvent queue once per frame)
//     ├─ Context        (InputSnapshot + Canvas + Mixer)
//     └─ ViewRunner     (single active View)
// ```
//
// Notes:
// Everything here runs on one thread. Winit callbacks only enqueue
// events; the frame loop consumes them at the frame boundary.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod assets;
pub mod audio;
pub mod canvas;
pub mod context;
pub mod frame_loop;
pub mod geometry;
pub mod input;
pub mod platform_bridge;
pub mod view;

//=== Public API ==========================================================

pub use assets::{Animation, Sound, Sprite};
pub use audio::{AudioSink, Mixer, SilentSink};
pub use canvas::{Canvas, HeadlessCanvas};
pub use context::Context;
pub use frame_loop::FrameLoop;
pub use geometry::Rect;
pub use input::{InputSampler, InputSnapshot, KeyCode, KeyEdge};
pub use platform_bridge::{PlatformError, PlatformEvent, TickControl};
pub use view::{Directive, View, ViewRunner};
