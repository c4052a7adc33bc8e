use super::Vec2;

/// Container size in logical pixels.
///
/// The parallax container is fixed for the lifetime of a scene; derived values
/// (vertical field of view, relative element sizes) are computed from the size
/// captured at construction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Height divided by width.
    #[inline]
    pub fn aspect_hw(self) -> f32 {
        self.height / self.width
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Element size as a fraction of the container size, per axis.
    #[inline]
    pub fn relative(self, element: Vec2) -> Vec2 {
        element.div_elem(self.size())
    }
}
