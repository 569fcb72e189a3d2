//=========================================================================
// Geometry
//=========================================================================
//
// Axis-aligned rectangles in screen space (pixels, top-left origin).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Rect ================================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test. Rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Returns `true` if no part of this rect lies inside `0..width × 0..height`.
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        self.right() < 0.0 || self.left() > width || self.bottom() < 0.0 || self.top() > height
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn center_round_trips_through_from_center() {
        let rect = Rect::from_center(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        assert_eq!(rect, Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(rect.center(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn outside_checks_every_edge() {
        assert!(Rect::new(801.0, 10.0, 4.0, 4.0).is_outside(800.0, 600.0));
        assert!(Rect::new(-10.0, 10.0, 4.0, 4.0).is_outside(800.0, 600.0));
        assert!(Rect::new(10.0, -10.0, 4.0, 4.0).is_outside(800.0, 600.0));
        assert!(Rect::new(10.0, 601.0, 4.0, 4.0).is_outside(800.0, 600.0));
        assert!(!Rect::new(798.0, 10.0, 4.0, 4.0).is_outside(800.0, 600.0));
    }
}
