use crate::coords::{Rect, Vec2};

/// Converts pointer positions into world-space camera targets.
///
/// The pointer is normalized to `[-1, 1]` across the viewport bounds and scaled
/// by the per-axis maximum travel. No smoothing happens here; every event
/// yields a new target immediately.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerTargetAdapter {
    max_scroll: Vec2,
}

impl PointerTargetAdapter {
    pub const fn new(max_scroll: Vec2) -> Self {
        Self { max_scroll }
    }

    /// World-space target for `pointer` inside `bounds`.
    ///
    /// Returns `None` if `bounds` has no area.
    #[inline]
    pub fn target_for(&self, pointer: Vec2, bounds: Rect) -> Option<Vec2> {
        bounds.normalize_point(pointer).map(|n| n.mul_elem(self.max_scroll))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> PointerTargetAdapter {
        PointerTargetAdapter::new(Vec2::new(2.0, 0.5))
    }

    #[test]
    fn center_maps_to_origin() {
        let bounds = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(adapter().target_for(Vec2::new(110.0, 70.0), bounds), Some(Vec2::zero()));
    }

    #[test]
    fn corners_map_to_max_travel() {
        let bounds = Rect::new(10.0, 20.0, 200.0, 100.0);
        let a = adapter();
        assert_eq!(a.target_for(Vec2::new(10.0, 20.0), bounds), Some(Vec2::new(-2.0, -0.5)));
        assert_eq!(a.target_for(Vec2::new(210.0, 120.0), bounds), Some(Vec2::new(2.0, 0.5)));
    }

    #[test]
    fn empty_bounds_yield_no_target() {
        let bounds = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(adapter().target_for(Vec2::new(1.0, 1.0), bounds), None);
    }
}
