//=========================================================================
// View System
//=========================================================================
//
// Single-active-view state machine.
//
// Architecture:
//   ViewRunner
//     └─ active: Option<Box<dyn View>>
//
// Flow:
//   update(self: Box<Self>) → Directive::{Continue(next), Terminate}
//   render(&self)           → draw only
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::Context;

//=== Module Declarations =================================================

mod view_runner;

//=== Public API ==========================================================

pub use view_runner::ViewRunner;

//=== View Trait ==========================================================

/// A self-contained game screen (gameplay, pause, game over).
///
/// `update` takes the view by value. A view hands its state to a successor
/// simply by moving it into the returned directive (a pause screen keeps
/// the paused game this way), and a discarded view is dropped the moment
/// the runner installs its replacement.
///
/// # Minimal Implementation
///
/// ```rust
/// # use nebula_raid::prelude::*;
/// struct Splash;
///
/// impl View for Splash {
///     fn update(self: Box<Self>, _ctx: &mut Context, _dt: f32) -> Directive {
///         Directive::Continue(self)
///     }
///
///     fn render(&self, _ctx: &mut Context) {}
/// }
/// ```
pub trait View {
    /// Advances the view by `dt` seconds and decides what runs next frame.
    ///
    /// Returning `Continue(self)` means "no transition".
    fn update(self: Box<Self>, ctx: &mut Context, dt: f32) -> Directive;

    /// Draws the current state. Must not mutate the view.
    fn render(&self, ctx: &mut Context);

    /// Name used in transition logs.
    fn name(&self) -> &'static str {
        "view"
    }
}

//=== Directive ===========================================================

/// Transition result of [`View::update`].
pub enum Directive {
    /// Keep running with this view (possibly a different one).
    Continue(Box<dyn View>),

    /// Stop the frame loop.
    Terminate,
}

impl Directive {
    /// Shorthand for `Continue(Box::new(view))`.
    pub fn next(view: impl View + 'static) -> Self {
        Self::Continue(Box::new(view))
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, Self::Terminate)
    }
}

impl std::fmt::Debug for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue(view) => f.debug_tuple("Continue").field(&view.name()).finish(),
            Self::Terminate => f.write_str("Terminate"),
        }
    }
}
