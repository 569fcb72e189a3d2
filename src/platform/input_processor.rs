//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit keyboard events into engine InputEvents.
//
// Architecture:
//   Winit KeyEvent → process_key_event() → InputEvent → platform queue
//
// Only physical key codes the runtime tracks survive; everything else
// (numpad, F-keys, media keys, unknown scancodes) is filtered here. Each
// tracked key has exactly one physical source, so a slot's held flag
// always follows a single key.
// Auto-repeat is passed through untouched; the sampler suppresses it.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode};

//=== Event Processing ====================================================

/// Converts a Winit key event to an InputEvent (filters unmapped keys).
pub(crate) fn process_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = key_event.physical_key else {
        return None;
    };
    key_input_event(KeyCode::from(code), key_event.state)
}

/// Builds the down/up event for `key`, or `None` for untracked keys.
fn key_input_event(key: KeyCode, state: ElementState) -> Option<InputEvent> {
    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown { key },
        ElementState::Released => InputEvent::KeyUp { key },
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Untracked keys map to `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Movement -----------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,
            KeyW => KeyCode::KeyW,
            KeyA => KeyCode::KeyA,
            KeyS => KeyCode::KeyS,
            KeyD => KeyCode::KeyD,

            //--- Weapons ------------------------------------------------------

            Space => KeyCode::Space,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,

            //--- Flow Control -------------------------------------------------

            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,

            //--- Untracked ----------------------------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
