//=========================================================================
// Context
//=========================================================================
//
// Per-frame facade handed to views and entities.
//
// Contains:
// - input: the frame's InputSnapshot (edges + held keys)
// - canvas: drawing surface, lent for the duration of one call
// - mixer: sound-channel allocator, lent for the duration of one call
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::assets::{Sound, Sprite};
use super::audio::{Mixer, SilentSink};
use super::canvas::{Canvas, HeadlessCanvas};
use super::geometry::Rect;
use super::input::InputSnapshot;

//=== Context =============================================================

/// Shared frame context.
///
/// Owns the canvas and mixer outright; nothing else keeps a reference to
/// either past a single `update`/`render` call.
pub struct Context {
    input: InputSnapshot,
    canvas: Box<dyn Canvas>,
    mixer: Mixer,
}

impl Context {
    pub fn new(canvas: Box<dyn Canvas>, mixer: Mixer) -> Self {
        Self {
            input: InputSnapshot::new(),
            canvas,
            mixer,
        }
    }

    /// Context backed by a recording canvas and a silent audio device.
    pub fn headless(width: u32, height: u32) -> Self {
        const HEADLESS_CHANNELS: usize = 8;
        Self::new(
            Box::new(HeadlessCanvas::new(width, height)),
            Mixer::new(Box::new(SilentSink::new()), HEADLESS_CHANNELS),
        )
    }

    //--- Input ------------------------------------------------------------

    /// Input sampled at the start of this frame.
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    /// Replaces the frame's input snapshot.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    //--- Drawing ----------------------------------------------------------

    /// Output size in pixels `(width, height)`.
    pub fn output_size(&self) -> (u32, u32) {
        self.canvas.output_size()
    }

    /// Draws `sprite` into `dest`.
    pub fn draw(&mut self, sprite: &Sprite, dest: Rect) {
        self.canvas.draw_sprite(sprite, dest);
    }

    pub(crate) fn begin_frame(&mut self) {
        self.canvas.begin_frame();
    }

    pub(crate) fn present(&mut self) {
        self.canvas.present();
    }

    //--- Audio ------------------------------------------------------------

    /// Plays `sound` on a free channel. Never fails.
    pub fn play_sound(&mut self, sound: &Sound) {
        self.mixer.play_sound(sound);
    }

    pub(crate) fn advance_audio(&mut self, dt: f32) {
        self.mixer.advance(dt);
    }

    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
