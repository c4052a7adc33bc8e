use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` whose center is `center`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }

    /// Maps a point to `[-1, 1]` per axis across this rectangle.
    ///
    /// The left/top edge maps to -1, the right/bottom edge to +1. Points outside
    /// the rectangle map outside that range. Returns `None` for empty rectangles.
    #[inline]
    pub fn normalize_point(self, p: Vec2) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let unit = (p - self.origin).div_elem(self.size);
        Some(unit * 2.0 - Vec2::new(1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn from_center_size_round_trips_center() {
        let rect = Rect::from_center_size(Vec2::new(50.0, 20.0), Vec2::new(10.0, 4.0));
        assert_eq!(rect, r(45.0, 18.0, 10.0, 4.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 20.0));
    }

    // ── normalize_point ───────────────────────────────────────────────────

    #[test]
    fn normalize_point_maps_edges_and_center() {
        let bounds = r(100.0, 50.0, 200.0, 100.0);
        assert_eq!(bounds.normalize_point(Vec2::new(100.0, 50.0)), Some(Vec2::new(-1.0, -1.0)));
        assert_eq!(bounds.normalize_point(Vec2::new(200.0, 100.0)), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(bounds.normalize_point(Vec2::new(300.0, 150.0)), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn normalize_point_rejects_empty_rect() {
        assert_eq!(r(0.0, 0.0, 0.0, 10.0).normalize_point(Vec2::new(0.0, 0.0)), None);
    }
}
