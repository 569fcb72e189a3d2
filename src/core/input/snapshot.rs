//=========================================================================
// Input Snapshot
//=========================================================================
//
// Per-frame keyboard state with edge tracking.
//
// Architecture:
//   InputEvent → apply() → held table + edge table → query
//
// Frame lifecycle: begin_frame() → apply()* → query
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== KeyEdge =============================================================

/// One-frame transition of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEdge {
    /// Key went UP → DOWN this frame.
    JustPressed,

    /// Key went DOWN → UP this frame.
    JustReleased,

    /// No transition this frame (the key may still be held).
    #[default]
    Unchanged,
}

//=== InputSnapshot =======================================================

/// Keyboard state as seen by views during one frame.
///
/// Holds two co-located views per tracked key: the persistent "held" flag
/// and the per-frame edge. Plain fixed-size tables, so the snapshot is
/// `Copy` and can be handed to the context every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    //--- Persistent State (survives frame boundary) ----------------------
    held: [bool; KeyCode::COUNT],

    //--- Frame Deltas (reset each frame via begin_frame()) ---------------
    edges: [KeyEdge; KeyCode::COUNT],
    quit_requested: bool,
}

impl InputSnapshot {
    /// Creates a snapshot with nothing held and no edges.
    pub fn new() -> Self {
        Self {
            held: [false; KeyCode::COUNT],
            edges: [KeyEdge::Unchanged; KeyCode::COUNT],
            quit_requested: false,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Resets every edge to `Unchanged` and clears the quit flag.
    /// Held state is preserved.
    pub(crate) fn begin_frame(&mut self) {
        self.edges = [KeyEdge::Unchanged; KeyCode::COUNT];
        self.quit_requested = false;
    }

    /// Applies one event. The last event for a key in a frame decides its edge.
    pub(crate) fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                let Some(slot) = key.slot() else { return };
                // Auto-repeat arrives as KeyDown while already held
                if !self.held[slot] {
                    self.held[slot] = true;
                    self.edges[slot] = KeyEdge::JustPressed;
                }
            }

            InputEvent::KeyUp { key } => {
                let Some(slot) = key.slot() else { return };
                self.held[slot] = false;
                self.edges[slot] = KeyEdge::JustReleased;
            }

            InputEvent::Unidentified => {}
        }
    }

    /// Snapshot of a frame in which `keys` went down.
    #[cfg(test)]
    pub(crate) fn pressed(keys: &[KeyCode]) -> Self {
        let mut snapshot = Self::new();
        for &key in keys {
            snapshot.apply(InputEvent::KeyDown { key });
        }
        snapshot
    }

    /// Marks the one-shot quit flag for this frame.
    pub(crate) fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns this frame's edge for `key`.
    pub fn edge(&self, key: KeyCode) -> KeyEdge {
        key.slot().map_or(KeyEdge::Unchanged, |slot| self.edges[slot])
    }

    /// Returns `true` if key transitioned UP → DOWN (one frame only).
    ///
    /// Use for discrete actions like firing or opening the pause screen.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.edge(key) == KeyEdge::JustPressed
    }

    /// Returns `true` if key transitioned DOWN → UP (one frame only).
    pub fn just_released(&self, key: KeyCode) -> bool {
        self.edge(key) == KeyEdge::JustReleased
    }

    /// Returns `true` while key is held.
    ///
    /// Use for continuous actions like movement.
    pub fn is_held(&self, key: KeyCode) -> bool {
        key.slot().is_some_and(|slot| self.held[slot])
    }

    /// Returns `true` if any of `keys` is held.
    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&key| self.is_held(key))
    }

    /// Returns `true` if any of `keys` was just pressed.
    pub fn any_just_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&key| self.just_pressed(key))
    }

    /// Returns `true` if the platform asked to close during this frame.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Returns an iterator over all keys currently held.
    pub fn keys_held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        KeyCode::ALL.into_iter().filter(|&key| self.is_held(key))
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn frame(snapshot: &mut InputSnapshot, events: &[InputEvent]) {
        snapshot.begin_frame();
        for event in events {
            snapshot.apply(*event);
        }
    }

    //=====================================================================
    // Edge Tests
    //=====================================================================

    #[test]
    fn held_key_yields_one_press_then_unchanged_then_one_release() {
        let mut snapshot = InputSnapshot::new();

        frame(&mut snapshot, &[key_down(KeyCode::Space)]);
        assert_eq!(snapshot.edge(KeyCode::Space), KeyEdge::JustPressed);
        assert!(snapshot.is_held(KeyCode::Space));

        // OS auto-repeat keeps sending KeyDown while held
        for _ in 0..10 {
            frame(&mut snapshot, &[key_down(KeyCode::Space)]);
            assert_eq!(snapshot.edge(KeyCode::Space), KeyEdge::Unchanged);
            assert!(snapshot.is_held(KeyCode::Space));
        }

        frame(&mut snapshot, &[key_up(KeyCode::Space)]);
        assert_eq!(snapshot.edge(KeyCode::Space), KeyEdge::JustReleased);
        assert!(!snapshot.is_held(KeyCode::Space));

        frame(&mut snapshot, &[]);
        assert_eq!(snapshot.edge(KeyCode::Space), KeyEdge::Unchanged);
    }

    #[test]
    fn key_up_always_reports_release() {
        let mut snapshot = InputSnapshot::new();

        frame(&mut snapshot, &[key_up(KeyCode::KeyQ)]);

        assert!(snapshot.just_released(KeyCode::KeyQ));
        assert!(!snapshot.is_held(KeyCode::KeyQ));
    }

    #[test]
    fn last_event_in_frame_decides_edge() {
        let mut snapshot = InputSnapshot::new();

        frame(&mut snapshot, &[key_down(KeyCode::KeyA), key_up(KeyCode::KeyA)]);

        assert_eq!(snapshot.edge(KeyCode::KeyA), KeyEdge::JustReleased);
        assert!(!snapshot.is_held(KeyCode::KeyA));
    }

    #[test]
    fn multiple_keys_tracked_independently() {
        let mut snapshot = InputSnapshot::new();

        frame(
            &mut snapshot,
            &[key_down(KeyCode::KeyW), key_down(KeyCode::KeyA), key_down(KeyCode::KeyS)],
        );
        frame(&mut snapshot, &[key_up(KeyCode::KeyA)]);

        assert!(snapshot.is_held(KeyCode::KeyW));
        assert!(!snapshot.is_held(KeyCode::KeyA));
        assert!(snapshot.is_held(KeyCode::KeyS));
        assert!(!snapshot.is_held(KeyCode::KeyD));

        let held: Vec<_> = snapshot.keys_held().collect();
        assert_eq!(held, vec![KeyCode::KeyW, KeyCode::KeyS]);
    }

    //=====================================================================
    // Edge Cases
    //=====================================================================

    #[test]
    fn unidentified_input_is_ignored() {
        let mut snapshot = InputSnapshot::new();

        frame(
            &mut snapshot,
            &[InputEvent::Unidentified, key_down(KeyCode::Unidentified)],
        );

        assert_eq!(snapshot, {
            let mut fresh = InputSnapshot::new();
            fresh.begin_frame();
            fresh
        });
        assert!(!snapshot.is_held(KeyCode::Unidentified));
    }

    #[test]
    fn quit_flag_lasts_one_frame() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.request_quit();
        assert!(snapshot.quit_requested());

        snapshot.begin_frame();
        assert!(!snapshot.quit_requested());
    }

    #[test]
    fn any_helpers_cover_alternate_bindings() {
        let mut snapshot = InputSnapshot::new();

        frame(&mut snapshot, &[key_down(KeyCode::ArrowUp)]);

        assert!(snapshot.any_held(&[KeyCode::KeyW, KeyCode::ArrowUp]));
        assert!(snapshot.any_just_pressed(&[KeyCode::KeyW, KeyCode::ArrowUp]));
        assert!(!snapshot.any_held(&[KeyCode::KeyS, KeyCode::ArrowDown]));
    }
}
