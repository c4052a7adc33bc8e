use crate::coords::Vec2;
use crate::depth::VisualParams;
use crate::transform::RenderPlacement;

use super::StackingOrder;

/// Display sink for one moveable.
///
/// The scene only writes to it; internal state is never read back, except the
/// element size needed to center it on its render position.
pub trait RenderSurface {
    /// Element size in the same units as the container (logical pixels).
    fn size(&self) -> Vec2;

    fn set_render_position(&mut self, placement: RenderPlacement);

    fn set_stacking_order(&mut self, order: StackingOrder);

    fn apply_visual_params(&mut self, params: VisualParams);
}
