//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (Winit) with the frame loop.
//
// This module defines the contract between platform implementations and
// core logic, so the frame loop can be driven by Winit in the binary and
// by a plain channel sender in tests.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;

//=== Public API ==========================================================

pub use interface::{PlatformError, PlatformEvent};

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}
