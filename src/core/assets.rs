//=========================================================================
// Asset Handles
//=========================================================================
//
// Opaque, reference-counted handles to sprites, animations and sounds.
//
// Handles are created once (by a loader outside this crate, or by the
// placeholder set used for headless runs) and cloned per entity. Cloning
// only bumps a reference count; the underlying data is immutable.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::rc::Rc;

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Sprite ==============================================================

#[derive(Debug, PartialEq)]
struct SpriteData {
    name: String,
    size: Vec2,
}

/// A single drawable image region.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite(Rc<SpriteData>);

impl Sprite {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self(Rc::new(SpriteData {
            name: name.into(),
            size: Vec2::new(width, height),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Native size in pixels.
    pub fn size(&self) -> Vec2 {
        self.0.size
    }

    /// Returns `true` if both handles point at the same sprite.
    pub fn ptr_eq(&self, other: &Sprite) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

//=== Animation ===========================================================

/// Looping sequence of equally timed sprite frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Rc<[Sprite]>,
    frame_time: f32,
}

impl Animation {
    /// # Panics
    ///
    /// Panics if `frames` is empty or `frame_time <= 0.0`.
    pub fn new(frames: Vec<Sprite>, frame_time: f32) -> Self {
        assert!(!frames.is_empty(), "Animation needs at least one frame");
        assert!(frame_time > 0.0, "Frame time must be positive, got {}", frame_time);
        Self {
            frames: frames.into(),
            frame_time,
        }
    }

    /// Frame shown `age` seconds after the animation started (loops).
    pub fn frame_at(&self, age: f32) -> &Sprite {
        let index = (age.max(0.0) / self.frame_time) as usize % self.frames.len();
        &self.frames[index]
    }

    /// Size of the first frame; all frames share it.
    pub fn frame_size(&self) -> Vec2 {
        self.frames[0].size()
    }

    /// Time for one full loop.
    pub fn duration(&self) -> f32 {
        self.frame_time * self.frames.len() as f32
    }
}

//=== Sound ===============================================================

#[derive(Debug, PartialEq)]
struct SoundData {
    name: String,
    duration: f32,
}

/// A decoded sound effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound(Rc<SoundData>);

impl Sound {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self(Rc::new(SoundData {
            name: name.into(),
            duration,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Playback length in seconds.
    pub fn duration(&self) -> f32 {
        self.0.duration
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
