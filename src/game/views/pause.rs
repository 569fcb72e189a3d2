//=========================================================================
// Pause View
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{draw_banner, GameplayView, PAUSE_KEYS};
use crate::core::{Context, Directive, KeyCode, View};

//=== PauseView ===========================================================

/// Frozen game with a banner on top.
///
/// Holds the paused game by value; resuming hands the very same
/// `GameplayView` back to the runner.
pub struct PauseView {
    paused: Box<GameplayView>,
}

impl PauseView {
    pub fn new(paused: Box<GameplayView>) -> Self {
        Self { paused }
    }

    pub fn paused(&self) -> &GameplayView {
        &self.paused
    }
}

impl View for PauseView {
    fn update(self: Box<Self>, ctx: &mut Context, _dt: f32) -> Directive {
        let input = ctx.input();

        if input.just_pressed(KeyCode::KeyQ) {
            info!(target: "game", "Quit from pause screen");
            return Directive::Terminate;
        }
        if input.any_just_pressed(&PAUSE_KEYS) {
            debug!(target: "game", "Resumed");
            return Directive::Continue(self.paused);
        }
        Directive::Continue(self)
    }

    fn render(&self, ctx: &mut Context) {
        self.paused.render(ctx);
        draw_banner(ctx, &self.paused.assets().pause_banner);
    }

    fn name(&self) -> &'static str {
        "pause"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HeadlessCanvas, InputSnapshot, Mixer, SilentSink};
    use crate::core::canvas::DrawLog;
    use crate::game::{GameAssets, GameConfig};

    //--- Test Helpers -----------------------------------------------------

    fn game(output_size: (u32, u32)) -> GameplayView {
        GameplayView::new(
            GameAssets::placeholder(),
            GameConfig::default().with_hazard_interval(1000.0, 1000.0),
            output_size,
        )
    }

    fn setup() -> (Box<PauseView>, Context, DrawLog) {
        let canvas = HeadlessCanvas::new(800, 600);
        let log = canvas.draw_log();
        let ctx = Context::new(Box::new(canvas), Mixer::new(Box::new(SilentSink::new()), 4));
        let view = Box::new(PauseView::new(Box::new(game(ctx.output_size()))));
        (view, ctx, log)
    }

    fn expect_continue(directive: Directive) -> Box<dyn View> {
        match directive {
            Directive::Continue(view) => view,
            Directive::Terminate => panic!("Unexpected terminate"),
        }
    }

    //=====================================================================
    // Transition Tests
    //=====================================================================

    #[test]
    fn stays_paused_without_input() {
        let (view, mut ctx, _) = setup();

        let next = expect_continue(view.update(&mut ctx, 1.0));

        assert_eq!(next.name(), "pause");
    }

    #[test]
    fn escape_resumes_the_game() {
        let (view, mut ctx, _) = setup();
        ctx.set_input(InputSnapshot::pressed(&[KeyCode::Escape]));

        assert_eq!(expect_continue(view.update(&mut ctx, 0.1)).name(), "gameplay");
    }

    #[test]
    fn p_resumes_too() {
        let (view, mut ctx, _) = setup();
        ctx.set_input(InputSnapshot::pressed(&[KeyCode::KeyP]));

        assert_eq!(expect_continue(view.update(&mut ctx, 0.1)).name(), "gameplay");
    }

    #[test]
    fn q_terminates() {
        let (view, mut ctx, _) = setup();
        ctx.set_input(InputSnapshot::pressed(&[KeyCode::KeyQ]));

        assert!(view.update(&mut ctx, 0.1).is_terminate());
    }

    //=====================================================================
    // Frozen State Tests
    //=====================================================================

    #[test]
    fn game_is_frozen_and_resumed_intact() {
        let (view, mut ctx, log) = setup();
        view.paused().render(&mut ctx);
        let before = log.borrow().clone();

        // Input that would move and fire if the game were running
        let mut view: Box<dyn View> = view;
        for _ in 0..10 {
            ctx.set_input(InputSnapshot::pressed(&[KeyCode::ArrowDown, KeyCode::Space]));
            view = expect_continue(view.update(&mut ctx, 0.1));
        }
        ctx.set_input(InputSnapshot::pressed(&[KeyCode::Escape]));
        let resumed = expect_continue(view.update(&mut ctx, 0.1));

        ctx.begin_frame();
        resumed.render(&mut ctx);

        assert_eq!(*log.borrow(), before);
        assert_eq!(ctx.mixer().sounds_played(), 0);
    }

    #[test]
    fn renders_game_then_banner() {
        let (view, mut ctx, log) = setup();

        view.render(&mut ctx);

        let calls = log.borrow();
        assert_eq!(calls.len(), 2);
        let banner = &calls[1];
        assert_eq!(banner.sprite.name(), "pause_banner");
        assert_eq!(banner.dest.center(), glam::Vec2::new(400.0, 300.0));
    }
}
