use crate::coords::Vec2;

use super::FieldOfView;

/// Angles of a point as seen from the camera, in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Polar {
    pub azimuth: f32,
    pub altitude: f32,
}

impl Polar {
    /// Maps the angles to normalized render space.
    ///
    /// A point at exactly half the field of view lands on the container edge
    /// (`±1`); wider angles land outside it.
    #[inline]
    pub fn to_render(self, fov: &FieldOfView) -> Vec2 {
        Vec2::new(
            self.azimuth.tan() / fov.half_tan_x(),
            self.altitude.tan() / fov.half_tan_y(),
        )
    }
}

/// World position at `depth` as seen from `camera`.
#[inline]
pub fn to_polar(world: Vec2, depth: f32, camera: Vec2) -> Polar {
    let rel = world - camera;
    Polar {
        azimuth: (rel.x / depth).atan(),
        altitude: (rel.y / depth).atan(),
    }
}

/// Full forward projection from world space to render space.
#[inline]
pub fn project(world: Vec2, depth: f32, camera: Vec2, fov: &FieldOfView) -> Vec2 {
    to_polar(world, depth, camera).to_render(fov)
}

/// Render position plus the percent offsets that center an element on it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderPlacement {
    /// Normalized render-space position of the element center.
    pub render: Vec2,
    /// Offset of the element's left edge, percent of container width.
    pub left_percent: f32,
    /// Offset of the element's top edge, percent of container height.
    pub top_percent: f32,
}

/// Converts a render position into container-relative percent offsets.
///
/// `relative_size` is the element size divided by the container size.
#[inline]
pub fn place(render: Vec2, relative_size: Vec2) -> RenderPlacement {
    RenderPlacement {
        render,
        left_percent: ((render.x + 1.0) / 2.0 - relative_size.x / 2.0) * 100.0,
        top_percent: ((render.y + 1.0) / 2.0 - relative_size.y / 2.0) * 100.0,
    }
}
