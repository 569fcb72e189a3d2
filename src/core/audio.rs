//=========================================================================
// Audio
//=========================================================================
//
// Sound-channel allocation on top of an audio device seam.
//
// Architecture:
//   Context::play_sound() → Mixer → AudioSink (device, outside this crate)
//
// The device exposes a fixed pool of mixing channels. When every channel
// is busy the mixer grows the pool and retries, so a play request is never
// dropped and exhaustion is never reported to the caller.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, trace};

//=== Internal Dependencies ===============================================

use super::assets::Sound;

//=== ChannelsExhausted ===================================================

/// Every allocated channel is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelsExhausted;

impl std::fmt::Display for ChannelsExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "all sound channels are busy")
    }
}

impl std::error::Error for ChannelsExhausted {}

//=== AudioSink Trait =====================================================

/// Audio device with a resizable pool of mixing channels.
pub trait AudioSink {
    /// Number of allocated channels.
    fn channel_count(&self) -> usize;

    /// Resizes the pool to `count` channels. Playing channels are kept.
    fn allocate_channels(&mut self, count: usize);

    /// Starts `sound` on a free channel and returns its index.
    fn play(&mut self, sound: &Sound) -> Result<usize, ChannelsExhausted>;

    /// Advances device time (used by simulated devices).
    fn advance(&mut self, _dt: f32) {}
}

//=== SilentSink ==========================================================

/// Device stand-in that tracks channel occupancy without producing sound.
///
/// A channel stays busy for the duration of the sound played on it.
pub struct SilentSink {
    remaining: Vec<f32>,
}

impl SilentSink {
    pub fn new() -> Self {
        Self { remaining: Vec::new() }
    }

    /// Channels still playing.
    pub fn busy_channels(&self) -> usize {
        self.remaining.iter().filter(|&&left| left > 0.0).count()
    }
}

impl Default for SilentSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for SilentSink {
    fn channel_count(&self) -> usize {
        self.remaining.len()
    }

    fn allocate_channels(&mut self, count: usize) {
        self.remaining.resize(count, 0.0);
    }

    fn play(&mut self, sound: &Sound) -> Result<usize, ChannelsExhausted> {
        let channel = self
            .remaining
            .iter()
            .position(|&left| left <= 0.0)
            .ok_or(ChannelsExhausted)?;
        // Zero-length sounds still occupy the channel until the next advance
        self.remaining[channel] = sound.duration().max(f32::EPSILON);
        Ok(channel)
    }

    fn advance(&mut self, dt: f32) {
        for left in &mut self.remaining {
            *left = (*left - dt).max(0.0);
        }
    }
}

//=== Mixer ===============================================================

/// Sound-channel allocator owned by the [`Context`](super::Context).
pub struct Mixer {
    sink: Box<dyn AudioSink>,
    sounds_played: u64,
}

impl Mixer {
    /// Wraps `sink` and allocates `initial_channels` channels on it.
    pub fn new(mut sink: Box<dyn AudioSink>, initial_channels: usize) -> Self {
        sink.allocate_channels(initial_channels);
        debug!(target: "audio", "Mixer ready with {} channels", sink.channel_count());
        Self {
            sink,
            sounds_played: 0,
        }
    }

    /// Plays `sound`, growing the channel pool if every channel is busy.
    pub fn play_sound(&mut self, sound: &Sound) {
        let result = match self.sink.play(sound) {
            Ok(channel) => Ok(channel),
            Err(ChannelsExhausted) => {
                self.grow();
                self.sink.play(sound)
            }
        };

        match result {
            Ok(channel) => {
                self.sounds_played += 1;
                trace!(target: "audio", "Playing '{}' on channel {}", sound.name(), channel);
            }
            Err(e) => {
                // A sink that stays exhausted after growing is broken
                error!(target: "audio", "Could not play '{}': {}", sound.name(), e);
            }
        }
    }

    /// Advances device time by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.sink.advance(dt);
    }

    pub fn channel_count(&self) -> usize {
        self.sink.channel_count()
    }

    /// Total play requests that reached a channel.
    pub fn sounds_played(&self) -> u64 {
        self.sounds_played
    }

    fn grow(&mut self) {
        let current = self.sink.channel_count();
        let grown = (current * 2).max(1);
        debug!(target: "audio", "Sound channels exhausted, growing pool {} -> {}", current, grown);
        self.sink.allocate_channels(grown);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn blip() -> Sound {
        Sound::new("blip", 0.5)
    }

    #[test]
    fn plays_on_free_channels_without_growing() {
        let mut mixer = Mixer::new(Box::new(SilentSink::new()), 4);

        for _ in 0..4 {
            mixer.play_sound(&blip());
        }

        assert_eq!(mixer.channel_count(), 4);
        assert_eq!(mixer.sounds_played(), 4);
    }

    #[test]
    fn grows_pool_on_exhaustion() {
        let mut mixer = Mixer::new(Box::new(SilentSink::new()), 2);

        for _ in 0..5 {
            mixer.play_sound(&blip());
        }

        assert_eq!(mixer.channel_count(), 8);
        assert_eq!(mixer.sounds_played(), 5);
    }

    #[test]
    fn grows_from_an_empty_pool() {
        let mut mixer = Mixer::new(Box::new(SilentSink::new()), 0);

        mixer.play_sound(&blip());

        assert_eq!(mixer.channel_count(), 1);
        assert_eq!(mixer.sounds_played(), 1);
    }

    #[test]
    fn finished_channels_are_reused() {
        let mut mixer = Mixer::new(Box::new(SilentSink::new()), 1);

        mixer.play_sound(&blip());
        mixer.advance(0.5);
        mixer.play_sound(&blip());

        assert_eq!(mixer.channel_count(), 1);
        assert_eq!(mixer.sounds_played(), 2);
    }

    #[test]
    fn silent_sink_reports_exhaustion() {
        let mut sink = SilentSink::new();
        sink.allocate_channels(1);

        assert_eq!(sink.play(&blip()), Ok(0));
        assert_eq!(sink.play(&blip()), Err(ChannelsExhausted));
        assert_eq!(sink.busy_channels(), 1);
    }
}
