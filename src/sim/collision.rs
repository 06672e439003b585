//! Axis-aligned rectangle geometry and overlap testing
//!
//! Everything in this game is a rectangle: the player, the obstacles, the
//! ground band. Overlap uses strict inequalities, so rectangles that merely
//! touch edges do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict-inequality AABB overlap test
    ///
    /// True iff the interiors intersect; shared edges are not an overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));

        let c = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Flush on the right edge
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Flush on the bottom edge
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_obstacle_shaped_overlap() {
        // Player-sized box against a ground-flush obstacle rect
        let player = Rect::new(762.0, 480.0, 40.0, 40.0);
        let obstacle = Rect::new(800.0, 420.0, 50.0, 100.0);
        assert!(player.overlaps(&obstacle));

        let player_before = Rect::new(756.0, 480.0, 40.0, 40.0);
        assert!(!player_before.overlaps(&obstacle));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_self_overlap(a in arb_rect()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_disjoint_when_separated(a in arb_rect(), b in arb_rect()) {
            // If there's a separating axis, overlaps must be false
            let separated_x = a.right() <= b.pos.x || b.right() <= a.pos.x;
            let separated_y = a.bottom() <= b.pos.y || b.bottom() <= a.pos.y;
            if separated_x || separated_y {
                prop_assert!(!a.overlaps(&b));
            }
        }
    }
}
