//=========================================================================
// View Runner
//=========================================================================
//
// Holds the single active view and applies the directive it returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Directive, View};
use crate::core::context::Context;
use crate::core::platform_bridge::TickControl;

//=== View Runner =========================================================

/// Drives exactly one active view at a time.
pub struct ViewRunner {
    active: Option<Box<dyn View>>,
}

impl ViewRunner {
    //--- Construction -----------------------------------------------------

    /// Starts with `initial` as the active view.
    pub fn new(initial: Box<dyn View>) -> Self {
        debug!(target: "view", "Initial view: {}", initial.name());
        Self {
            active: Some(initial),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the active view and installs its successor.
    ///
    /// Returns `Exit` on `Terminate`, or if the runner already terminated.
    pub fn update(&mut self, ctx: &mut Context, dt: f32) -> TickControl {
        let Some(view) = self.active.take() else {
            return TickControl::Exit;
        };

        let previous = view.name();

        match view.update(ctx, dt) {
            Directive::Continue(next) => {
                if next.name() != previous {
                    debug!(target: "view", "Transition {} -> {}", previous, next.name());
                }
                self.active = Some(next);
                TickControl::Continue
            }
            Directive::Terminate => {
                info!(target: "view", "View {} terminated the frame loop", previous);
                TickControl::Exit
            }
        }
    }

    /// Renders the active view, if any.
    pub fn render(&self, ctx: &mut Context) {
        if let Some(view) = &self.active {
            view.render(ctx);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Name of the active view.
    pub fn active_name(&self) -> Option<&'static str> {
        self.active.as_ref().map(|view| view.name())
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::{Mixer, SilentSink};
    use crate::core::canvas::HeadlessCanvas;
    use std::cell::Cell;
    use std::rc::Rc;

    fn context() -> Context {
        Context::new(
            Box::new(HeadlessCanvas::new(100, 100)),
            Mixer::new(Box::new(SilentSink::new()), 1),
        )
    }

    /// Counts down, then hands over to `Second`.
    struct First {
        frames_left: u32,
    }

    impl View for First {
        fn update(mut self: Box<Self>, _ctx: &mut Context, _dt: f32) -> Directive {
            if self.frames_left == 0 {
                return Directive::next(Second);
            }
            self.frames_left -= 1;
            Directive::Continue(self)
        }

        fn render(&self, _ctx: &mut Context) {}

        fn name(&self) -> &'static str {
            "first"
        }
    }

    struct Second;

    impl View for Second {
        fn update(self: Box<Self>, _ctx: &mut Context, _dt: f32) -> Directive {
            Directive::Terminate
        }

        fn render(&self, _ctx: &mut Context) {}

        fn name(&self) -> &'static str {
            "second"
        }
    }

    /// Flags its own drop so tests can see when the runner releases it.
    struct Tracked {
        dropped: Rc<Cell<bool>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    impl View for Tracked {
        fn update(self: Box<Self>, _ctx: &mut Context, _dt: f32) -> Directive {
            Directive::next(Second)
        }

        fn render(&self, _ctx: &mut Context) {}
    }

    //--- Transition Tests -------------------------------------------------

    #[test]
    fn returning_self_keeps_the_view() {
        let mut ctx = context();
        let mut runner = ViewRunner::new(Box::new(First { frames_left: 2 }));

        assert_eq!(runner.update(&mut ctx, 0.016), TickControl::Continue);
        assert_eq!(runner.update(&mut ctx, 0.016), TickControl::Continue);
        assert_eq!(runner.active_name(), Some("first"));
    }

    #[test]
    fn switches_to_successor_then_terminates() {
        let mut ctx = context();
        let mut runner = ViewRunner::new(Box::new(First { frames_left: 0 }));

        assert_eq!(runner.update(&mut ctx, 0.016), TickControl::Continue);
        assert_eq!(runner.active_name(), Some("second"));

        assert_eq!(runner.update(&mut ctx, 0.016), TickControl::Exit);
        assert_eq!(runner.active_name(), None);

        // Stays terminated
        assert_eq!(runner.update(&mut ctx, 0.016), TickControl::Exit);
    }

    #[test]
    fn replaced_view_is_dropped_at_replacement() {
        let mut ctx = context();
        let dropped = Rc::new(Cell::new(false));
        let mut runner = ViewRunner::new(Box::new(Tracked {
            dropped: Rc::clone(&dropped),
        }));

        assert!(!dropped.get());
        runner.update(&mut ctx, 0.016);
        assert!(dropped.get());
    }

    #[test]
    fn directive_debug_names_the_view() {
        assert_eq!(format!("{:?}", Directive::next(Second)), "Continue(\"second\")");
        assert_eq!(format!("{:?}", Directive::Terminate), "Terminate");
        assert!(Directive::Terminate.is_terminate());
    }
}
