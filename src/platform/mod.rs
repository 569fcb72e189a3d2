//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the frame loop.
//
// Architecture:
// ```text
//  Main Thread (only thread):
//  ┌────────────────────────────────────────────────┐
//  │  Winit Event Loop                              │
//  │   ├─ KeyboardInput ─► input_processor          │
//  │   │                    ↓                       │
//  │   ├─ CloseRequested ─► crossbeam queue         │
//  │   │                    ↓                       │
//  │   └─ RedrawRequested ─► FrameLoop::frame()     │
//  │                          ├─ InputSampler::pump │
//  │                          ├─ View::update       │
//  │                          └─ View::render       │
//  └────────────────────────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → Everything queued since the last frame is sampled at once
//    → dt = wall-clock time since the previous frame
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: one pump, one update, one render
// - **Close goes through the queue**: the sampler raises the quit flag and
//   the frame loop exits on the next frame, like any other input
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::{FrameLoop, PlatformError, PlatformEvent, TickControl};

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` takes the wired-up frame loop
/// 2. **Execution**: `platform.run()` blocks in the Winit event loop
/// 3. **Frames**: every `RedrawRequested` runs one `FrameLoop::frame()`
/// 4. **Shutdown**: the frame loop returns `Exit` → event loop exits
///
/// This type is NOT Send/Sync; it must remain on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    title: String,
    size: (u32, u32),

    /// Queue feeding the input sampler.
    event_sender: Sender<PlatformEvent>,

    frame_loop: FrameLoop,

    /// Bootstrap failure raised inside a Winit callback.
    startup_error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub fn new(
        title: impl Into<String>,
        size: (u32, u32),
        event_sender: Sender<PlatformEvent>,
        frame_loop: FrameLoop,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            size,
            event_sender,
            frame_loop,
            startup_error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the frame loop exits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop or the window cannot be
    /// created, or if the event loop fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.startup_error.take() {
            Some(e) => Err(e),
            None => {
                info!(
                    target: "platform",
                    "Event loop exited after {} frames",
                    self.frame_loop.frames()
                );
                Ok(())
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Queues an event for the next frame's input sample.
    ///
    /// The receiver lives in the frame loop owned by `self`, so a send can
    /// only fail during teardown.
    fn send(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform::input", "Input queue disconnected, dropping {:?}", event);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.startup_error = Some(PlatformError::WindowCreation(e.to_string()));
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::CloseRequested);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::process_key_event(key_event) {
                    Some(event) => self.send(PlatformEvent::Input(event)),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: sample, update, render
                match self.frame_loop.frame() {
                    TickControl::Exit => event_loop.exit(),
                    TickControl::Continue => {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                }
            }

            _ => {
                // Ignore: Resized, Focused, CursorMoved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
