//=========================================================================
// Input Event Types
//=========================================================================
//
// Engine-side representation of keyboard input.
//
// This module abstracts away platform-specific input (Winit) into a small,
// portable vocabulary used by the input sampler.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSampler (edge detection)
//         ↓
//    InputSnapshot (read by views)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key tracked by the runtime.
///
/// Only the keys the game reacts to are listed. Every other physical key
/// maps to `Unidentified` and is dropped by the sampler.
///
/// Variants (except `Unidentified`) double as slot indices into the
/// fixed-size tables of [`InputSnapshot`](super::InputSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Movement ---------------------------------------------------------

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyW,
    KeyA,
    KeyS,
    KeyD,

    //--- Weapons ----------------------------------------------------------

    /// Fire the selected cannon.
    Space,
    Digit1,
    Digit2,
    Digit3,

    //--- Flow Control -----------------------------------------------------

    Enter,
    Escape,
    KeyP,
    KeyQ,

    /// Fallback for keys the runtime does not track.
    Unidentified,
}

impl KeyCode {
    /// Number of tracked keys (excludes `Unidentified`).
    pub const COUNT: usize = KeyCode::Unidentified as usize;

    /// Every tracked key, in slot order.
    pub const ALL: [KeyCode; KeyCode::COUNT] = [
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::KeyW,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::Space,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::KeyP,
        KeyCode::KeyQ,
    ];

    /// Table slot for this key, or `None` for `Unidentified`.
    pub(crate) fn slot(self) -> Option<usize> {
        match self {
            KeyCode::Unidentified => None,
            key => Some(key as usize),
        }
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Key events are forwarded as-is, including OS auto-repeat presses;
/// repeat suppression is the sampler's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down (possibly an auto-repeat).
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Unrecognized or unsupported event. Silently ignored.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================
