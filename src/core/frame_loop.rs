//=========================================================================
// Frame Loop
//=========================================================================
//
// One logical pass per frame, strictly in order:
//
//   1. Sample input (InputSampler::pump)
//   2. Update the active view (entity pipeline + collisions inside)
//   3. Render the active view
//
// `dt` is the wall-clock time since the previous frame. An optional
// `max_dt` caps it; without one it is passed through as measured. There is
// no fixed-step accumulator: simulation speed follows the frame rate.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::context::Context;
use super::input::InputSampler;
use super::platform_bridge::TickControl;
use super::view::{View, ViewRunner};

//=== FrameLoop ===========================================================

/// Owns every per-frame subsystem and runs them in order.
pub struct FrameLoop {
    sampler: InputSampler,
    context: Context,
    views: ViewRunner,
    max_dt: f32,
    last_frame: Option<Instant>,
    frames: u64,
}

impl FrameLoop {
    //--- Construction -----------------------------------------------------

    pub fn new(sampler: InputSampler, context: Context, initial: Box<dyn View>) -> Self {
        Self {
            sampler,
            context,
            views: ViewRunner::new(initial),
            max_dt: f32::INFINITY,
            last_frame: None,
            frames: 0,
        }
    }

    /// Caps the `dt` handed to views (stalls, debugger breaks).
    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs one frame, measuring `dt` from the wall clock.
    ///
    /// The first frame sees `dt = 0`.
    pub fn frame(&mut self) -> TickControl {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);

        self.step(dt)
    }

    /// Runs one frame with an explicit `dt`.
    pub fn step(&mut self, dt: f32) -> TickControl {
        let dt = dt.clamp(0.0, self.max_dt);

        //--- Step 1: Sample input -----------------------------------------
        let input = self.sampler.pump();
        self.context.set_input(input);

        if input.quit_requested() {
            info!(target: "frame", "Quit requested after {} frames", self.frames);
            return TickControl::Exit;
        }

        //--- Step 2: Update ------------------------------------------------
        self.context.advance_audio(dt);

        if self.views.update(&mut self.context, dt) == TickControl::Exit {
            info!(target: "frame", "Frame loop finished after {} frames", self.frames);
            return TickControl::Exit;
        }

        //--- Step 3: Render ------------------------------------------------
        self.context.begin_frame();
        self.views.render(&mut self.context);
        self.context.present();

        self.frames += 1;
        TickControl::Continue
    }

    //--- Queries ----------------------------------------------------------

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn active_view(&self) -> Option<&'static str> {
        self.views.active_name()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
