//! Axis-aligned rectangle used for hitboxes and HUD layout

/// A rectangle defined by its top-left corner and size, in screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

    /// Zero-size rectangle at the origin (entities with no physical extent)
    pub const EMPTY: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict AABB overlap. Rectangles that only share an edge do not overlap,
    /// so buildings may be placed flush against each other.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// No area: never overlaps anything
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Get a horizontal slice from bottom
    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 48.0, 32.0);
        let flush = Rect::new(48.0, 0.0, 48.0, 32.0);
        let inside = Rect::new(47.0, 10.0, 16.0, 16.0);
        assert!(!a.overlaps(&flush));
        assert!(!flush.overlaps(&a));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let a = Rect::new(-10.0, -10.0, 100.0, 100.0);
        assert!(!a.overlaps(&Rect::EMPTY));
        assert!(!Rect::EMPTY.overlaps(&a));
        let point = Rect::new(20.0, 20.0, 0.0, 0.0);
        let line = Rect::new(0.0, 20.0, 50.0, 0.0);
        assert!(!a.overlaps(&point));
        assert!(!line.overlaps(&a));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_slice_bottom() {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
        let panel = screen.slice_bottom(150.0);
        assert_eq!(panel.y, 450.0);
        assert_eq!(panel.h, 150.0);
    }
}
