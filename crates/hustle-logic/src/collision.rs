//! Axis-aligned collision — rectangles, separable-axis movement resolution,
//! map-bounds clamping.
//!
//! Resolution runs one axis at a time: tentatively apply the X displacement,
//! revert it only if that created an overlap with an obstacle that was not
//! already overlapped on the X projection, then repeat for Y. Blocking one
//! axis leaves the other free, so the mover slides along walls instead of
//! stopping dead. The optional map bounds are applied last as a hard clamp,
//! which also recovers a mover that starts outside them.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn centre(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap on the X projection alone.
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Overlap on the Y projection alone.
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.y < other.top() && self.top() > other.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// This rectangle moved to fit inside `bounds`. If `bounds` is smaller
    /// than the rectangle, the bottom-left corner wins.
    pub fn clamped_into(&self, bounds: &Rect) -> Rect {
        let max_x = (bounds.right() - self.w).max(bounds.x);
        let max_y = (bounds.top() - self.h).max(bounds.y);
        Rect::new(
            self.x.clamp(bounds.x, max_x),
            self.y.clamp(bounds.y, max_y),
            self.w,
            self.h,
        )
    }

    /// This rectangle scaled about its own centre.
    pub fn scaled_about_centre(&self, sx: f32, sy: f32) -> Rect {
        let (cx, cy) = self.centre();
        let w = self.w * sx;
        let h = self.h * sy;
        Rect::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }
}

/// Resolve a displacement of `feet` against `obstacles`, one axis at a time,
/// then clamp into `bounds` if given. Always returns a valid rectangle.
pub fn resolve_move(feet: Rect, dx: f32, dy: f32, obstacles: &[Rect], bounds: Option<&Rect>) -> Rect {
    let mut resolved = feet;

    let tentative = resolved.translated(dx, 0.0);
    let blocked = obstacles
        .iter()
        .any(|o| tentative.overlaps(o) && !resolved.overlaps_x(o));
    if !blocked {
        resolved = tentative;
    }

    let tentative = resolved.translated(0.0, dy);
    let blocked = obstacles
        .iter()
        .any(|o| tentative.overlaps(o) && !resolved.overlaps_y(o));
    if !blocked {
        resolved = tentative;
    }

    match bounds {
        Some(b) => resolved.clamped_into(b),
        None => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feet() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    // --- Rect basics ---

    #[test]
    fn test_overlap_tests() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 10.0, 10.0); // touching, not overlapping
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.overlaps_x(&b));
        assert!(!a.overlaps_x(&c));
    }

    #[test]
    fn test_scaled_about_centre() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0).scaled_about_centre(2.0, 1.5);
        assert!((r.w - 20.0).abs() < 0.001);
        assert!((r.h - 30.0).abs() < 0.001);
        let (cx, cy) = r.centre();
        assert!((cx - 5.0).abs() < 0.001);
        assert!((cy - 10.0).abs() < 0.001);
    }

    // --- Axis resolution ---

    #[test]
    fn test_free_move() {
        let resolved = resolve_move(feet(), 3.0, 4.0, &[], None);
        assert_eq!(resolved, Rect::new(3.0, 4.0, 10.0, 10.0));
    }

    #[test]
    fn test_blocked_axis_does_not_tunnel() {
        // Wall directly to the right; requested X displacement would overlap.
        let wall = Rect::new(12.0, 0.0, 10.0, 40.0);
        let resolved = resolve_move(feet(), 5.0, 0.0, &[wall], None);
        assert!(!resolved.overlaps(&wall));
        assert_eq!(resolved.x, 0.0);
    }

    #[test]
    fn test_slides_along_wall() {
        // Diagonal into a wall on the right: X reverts, Y still advances.
        let wall = Rect::new(12.0, -50.0, 10.0, 100.0);
        let resolved = resolve_move(feet(), 5.0, 4.0, &[wall], None);
        assert_eq!(resolved.x, 0.0);
        assert_eq!(resolved.y, 4.0);
    }

    #[test]
    fn test_overlapping_start_can_still_move() {
        // Feet already inside the obstacle (bad prior state): the overlap was
        // not created by this move, so the mover is not frozen in place.
        let block = Rect::new(5.0, 5.0, 10.0, 10.0);
        let start = feet();
        assert!(start.overlaps(&block));
        let resolved = resolve_move(start, -2.0, -2.0, &[block], None);
        assert_eq!(resolved.x, -2.0);
        assert_eq!(resolved.y, -2.0);
    }

    #[test]
    fn test_corner_blocks_both_axes() {
        let block = Rect::new(11.0, 11.0, 10.0, 10.0);
        let resolved = resolve_move(feet(), 5.0, 5.0, &[block], None);
        // X is resolved first and reverts; Y then no longer overlaps.
        assert!(!resolved.overlaps(&block));
        assert_eq!(resolved.x, 0.0);
    }

    #[test]
    fn test_bounds_hard_clamp() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let resolved = resolve_move(feet(), 500.0, -500.0, &[], Some(&bounds));
        assert_eq!(resolved.x, 90.0);
        assert_eq!(resolved.y, 0.0);
    }

    #[test]
    fn test_bounds_recover_out_of_range_start() {
        // A mover starting outside the bounds is clamped back in rather than
        // left stuck.
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let outside = Rect::new(-30.0, 150.0, 10.0, 10.0);
        let resolved = resolve_move(outside, 0.0, 0.0, &[], Some(&bounds));
        assert_eq!(resolved.x, 0.0);
        assert_eq!(resolved.y, 90.0);
    }

    #[test]
    fn test_multiple_obstacles_each_checked() {
        let walls = [
            Rect::new(12.0, 0.0, 5.0, 5.0),
            Rect::new(0.0, 12.0, 5.0, 5.0),
        ];
        let resolved = resolve_move(feet(), 4.0, 4.0, &walls, None);
        assert_eq!(resolved.x, 0.0);
        assert_eq!(resolved.y, 0.0);
    }
}
