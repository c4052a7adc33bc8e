use crate::config::MoveableConfig;
use crate::coords::Vec2;
use crate::depth::{DepthParams, HoverState};
use crate::transform::{place, project, FieldOfView, RenderPlacement};

use super::StackingOrder;

/// Index of a moveable within its scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MoveableId(pub usize);

/// One depth-layered element.
///
/// Start position and depth never change; the placement is recomputed on every
/// camera move.
#[derive(Debug, Clone, PartialEq)]
pub struct Moveable {
    start: Vec2,
    depth: f32,
    params: DepthParams,
    order: StackingOrder,
    placement: RenderPlacement,
    hover: HoverState,
}

impl Moveable {
    pub(crate) fn new(cfg: MoveableConfig, params: DepthParams) -> Self {
        Self {
            start: cfg.start,
            depth: cfg.depth,
            params,
            order: StackingOrder::default(),
            placement: RenderPlacement::default(),
            hover: HoverState::Resting,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    #[inline]
    pub fn depth_params(&self) -> &DepthParams {
        &self.params
    }

    #[inline]
    pub fn stacking_order(&self) -> StackingOrder {
        self.order
    }

    #[inline]
    pub fn placement(&self) -> RenderPlacement {
        self.placement
    }

    #[inline]
    pub fn render_position(&self) -> Vec2 {
        self.placement.render
    }

    #[inline]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub(crate) fn set_stacking_order(&mut self, order: StackingOrder) {
        self.order = order;
    }

    pub(crate) fn set_hover(&mut self, hover: HoverState) {
        self.hover = hover;
    }

    /// Recomputes the placement for `camera`.
    pub(crate) fn reproject(
        &mut self,
        camera: Vec2,
        fov: &FieldOfView,
        relative_size: Vec2,
    ) -> RenderPlacement {
        let render = project(self.start, self.depth, camera, fov);
        self.placement = place(render, relative_size);
        self.placement
    }
}
