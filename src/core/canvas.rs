//=========================================================================
// Canvas
//=========================================================================
//
// Drawing surface seam.
//
// The real GPU surface lives outside this crate. The runtime only needs
// to know the output size and to submit sprite blits; `HeadlessCanvas`
// records those blits so frames can be inspected without a window.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::assets::Sprite;
use super::geometry::Rect;

//=== Canvas Trait ========================================================

/// A surface sprites can be drawn onto.
pub trait Canvas {
    /// Output size in pixels `(width, height)`.
    fn output_size(&self) -> (u32, u32);

    /// Called once before a view renders.
    fn begin_frame(&mut self) {}

    /// Blits `sprite` scaled into `dest`.
    fn draw_sprite(&mut self, sprite: &Sprite, dest: Rect);

    /// Called once after a view rendered.
    fn present(&mut self) {}
}

//=== DrawCall ============================================================

/// One recorded blit.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub sprite: Sprite,
    pub dest: Rect,
}

/// Shared view of the draw calls of the most recent frame.
pub type DrawLog = Rc<RefCell<Vec<DrawCall>>>;

//=== HeadlessCanvas ======================================================

/// Canvas that records draw calls instead of rasterizing them.
pub struct HeadlessCanvas {
    size: (u32, u32),
    frame: DrawLog,
    frames_presented: u64,
}

impl HeadlessCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            frame: Rc::new(RefCell::new(Vec::new())),
            frames_presented: 0,
        }
    }

    /// Handle to the recorded calls. Stays valid after the canvas is boxed.
    pub fn draw_log(&self) -> DrawLog {
        Rc::clone(&self.frame)
    }
}

impl Canvas for HeadlessCanvas {
    fn output_size(&self) -> (u32, u32) {
        self.size
    }

    fn begin_frame(&mut self) {
        self.frame.borrow_mut().clear();
    }

    fn draw_sprite(&mut self, sprite: &Sprite, dest: Rect) {
        self.frame.borrow_mut().push(DrawCall {
            sprite: sprite.clone(),
            dest,
        });
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        trace!(
            target: "canvas",
            "Frame {} presented with {} draw calls",
            self.frames_presented,
            self.frame.borrow().len()
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_until_next_frame() {
        let mut canvas = HeadlessCanvas::new(800, 600);
        let log = canvas.draw_log();
        let sprite = Sprite::new("ship", 32.0, 16.0);

        canvas.begin_frame();
        canvas.draw_sprite(&sprite, Rect::new(1.0, 2.0, 32.0, 16.0));
        canvas.present();

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].dest, Rect::new(1.0, 2.0, 32.0, 16.0));

        canvas.begin_frame();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reports_configured_size() {
        let canvas = HeadlessCanvas::new(640, 480);
        assert_eq!(canvas.output_size(), (640, 480));
    }
}
