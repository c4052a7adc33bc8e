use crate::coords::Viewport;

/// Default horizontal field of view.
pub const DEFAULT_HORIZONTAL_FOV_DEGREES: f32 = 100.0;

/// Camera field of view, in radians.
///
/// Fixed per scene. The vertical angle is derived from the container aspect
/// ratio captured at construction and is not re-derived on resize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldOfView {
    pub horizontal: f32,
    pub vertical: f32,
}

impl FieldOfView {
    /// Builds the field of view for a container.
    ///
    /// `vertical = 2 * atan(tan(horizontal / 2) * height / width)`.
    pub fn from_degrees(horizontal_degrees: f32, container: Viewport) -> Self {
        let horizontal = horizontal_degrees.to_radians();
        let half_tan = (horizontal * 0.5).tan();
        let vertical = 2.0 * (half_tan * container.aspect_hw()).atan();
        Self { horizontal, vertical }
    }

    /// `tan(horizontal / 2)`, the render-space scale on X.
    #[inline]
    pub fn half_tan_x(&self) -> f32 {
        (self.horizontal * 0.5).tan()
    }

    /// `tan(vertical / 2)`, the render-space scale on Y.
    #[inline]
    pub fn half_tan_y(&self) -> f32 {
        (self.vertical * 0.5).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_fov_follows_aspect_ratio() {
        let fov = FieldOfView::from_degrees(100.0, Viewport::new(200.0, 100.0));
        let expected = 2.0 * ((50.0f32).to_radians().tan() * 0.5).atan();
        assert!((fov.horizontal - 100.0f32.to_radians()).abs() < 1e-6);
        assert!((fov.vertical - expected).abs() < 1e-6);
    }

    #[test]
    fn square_container_has_equal_angles() {
        let fov = FieldOfView::from_degrees(90.0, Viewport::new(300.0, 300.0));
        assert!((fov.vertical - fov.horizontal).abs() < 1e-6);
        assert!((fov.half_tan_x() - 1.0).abs() < 1e-6);
    }
}
