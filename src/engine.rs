//=========================================================================
// Nebula Raid Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(view)──>  [Runtime]
//         │                          │
//         ├─ with_title()            └─ wires queue, sampler, context
//         ├─ with_size()                and frame loop, then runs the
//         ├─ with_sound_channels()      platform event loop until the
//         └─ with_max_dt()              views terminate
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::{
    Context, FrameLoop, HeadlessCanvas, InputSampler, Mixer, PlatformError, PlatformEvent,
    SilentSink, View,
};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Nebula Raid"
/// - **Size**: 800×600 logical pixels
/// - **Sound channels**: 8 (grows on demand)
/// - **Max dt**: uncapped (raw wall-clock `dt`)
///
/// # Examples
///
/// ```no_run
/// use nebula_raid::EngineBuilder;
/// use nebula_raid::game::{GameAssets, GameConfig, GameplayView};
///
/// let engine = EngineBuilder::new()
///     .with_title("Nebula Raid")
///     .with_size(1024, 768)
///     .build();
///
/// let view = GameplayView::new(GameAssets::placeholder(), GameConfig::default(), engine.size());
/// engine.run(Box::new(view))?;
/// # Ok::<(), nebula_raid::core::PlatformError>(())
/// ```
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    sound_channels: usize,
    max_dt: f32,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Nebula Raid".to_owned(),
            width: 800,
            height: 600,
            sound_channels: 8,
            max_dt: f32::INFINITY,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the logical window size.
    ///
    /// Default: 800×600
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the initial size of the sound channel pool.
    ///
    /// The pool doubles whenever a play request finds every channel busy,
    /// so this only sizes the first allocation.
    ///
    /// Default: 8
    ///
    /// # Panics
    ///
    /// Panics if `channels == 0`.
    pub fn with_sound_channels(mut self, channels: usize) -> Self {
        assert!(channels > 0, "Sound channel count must be positive");
        self.sound_channels = channels;
        self
    }

    /// Caps the `dt` handed to views after a stall.
    ///
    /// Off by default: views see the raw wall-clock time between frames.
    ///
    /// # Panics
    ///
    /// Panics if `max_dt <= 0.0`.
    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        assert!(max_dt > 0.0, "Max dt must be positive, got {}", max_dt);
        self.max_dt = max_dt;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine ({}x{}, {} sound channels, max dt {}s)",
            self.width, self.height, self.sound_channels, self.max_dt
        );

        Engine {
            title: self.title,
            size: (self.width, self.height),
            sound_channels: self.sound_channels,
            max_dt: self.max_dt,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Nebula Raid runtime.
///
/// Create via [`EngineBuilder`] with `EngineBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Winit event loop)
///         ├─► Window
///         └─► FrameLoop (one frame per RedrawRequested)
///               └─► InputSampler, Context, ViewRunner
///
/// Communication: crossbeam queue (PlatformEvent), same thread
/// ```
pub struct Engine {
    title: String,
    size: (u32, u32),
    sound_channels: usize,
    max_dt: f32,
}

impl Engine {
    /// Output size views are built for.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    //--- Execution --------------------------------------------------------

    /// Runs `initial` and its successors until a view terminates or the
    /// window is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → sampler queue
    /// 2. Builds the context and frame loop
    /// 3. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the event loop or window cannot be
    /// created. No frame has run in that case.
    pub fn run(self, initial: Box<dyn View>) -> Result<(), PlatformError> {
        info!(target: "engine", "Starting engine runtime ({})", initial.name());

        //--- 1. Create communication channel -----------------------------
        // Unbounded: sender and receiver share the main thread
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) = unbounded();

        //--- 2. Wire the frame loop ---------------------------------------
        let frame_loop = FrameLoop::new(InputSampler::new(rx), self.context(), initial)
            .with_max_dt(self.max_dt);

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.title, self.size, tx, frame_loop);
        info!(target: "engine", "Platform initialized, entering event loop");

        platform.run()?;

        info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }

    fn context(&self) -> Context {
        let (width, height) = self.size;
        Context::new(
            Box::new(HeadlessCanvas::new(width, height)),
            Mixer::new(Box::new(SilentSink::new()), self.sound_channels),
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "Nebula Raid");
        assert_eq!((builder.width, builder.height), (800, 600));
        assert_eq!(builder.sound_channels, 8);
        assert_eq!(builder.max_dt, f32::INFINITY);
    }

    #[test]
    fn builder_with_size() {
        let builder = EngineBuilder::new().with_size(1024, 768);
        assert_eq!((builder.width, builder.height), (1024, 768));
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_size_panics_on_zero() {
        EngineBuilder::new().with_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Sound channel count must be positive")]
    fn builder_with_sound_channels_panics_on_zero() {
        EngineBuilder::new().with_sound_channels(0);
    }

    #[test]
    #[should_panic(expected = "Max dt must be positive")]
    fn builder_with_max_dt_panics_on_negative() {
        EngineBuilder::new().with_max_dt(-0.1);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_title("Test")
            .with_size(320, 240)
            .with_sound_channels(2)
            .with_max_dt(0.1)
            .build();

        assert_eq!(engine.title, "Test");
        assert_eq!(engine.size(), (320, 240));
        assert_eq!(engine.sound_channels, 2);
        assert_eq!(engine.max_dt, 0.1);
    }

    #[test]
    fn context_matches_configuration() {
        let engine = EngineBuilder::new().with_size(320, 240).with_sound_channels(3).build();

        let ctx = engine.context();

        assert_eq!(ctx.output_size(), (320, 240));
        assert_eq!(ctx.mixer().channel_count(), 3);
    }
}
