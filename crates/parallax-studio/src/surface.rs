use parallax_engine::coords::{Rect, Vec2, Viewport};
use parallax_engine::depth::VisualParams;
use parallax_engine::paint::Color;
use parallax_engine::render::Sprite;
use parallax_engine::scene::{RenderSurface, StackingOrder};
use parallax_engine::transform::RenderPlacement;

const CORNER_RADIUS: f32 = 10.0;

/// Flat colored card; the render surface the studio hands to the scene.
///
/// Keeps whatever the scene last wrote and turns it into a [`Sprite`] on demand.
#[derive(Debug, Clone)]
pub struct CardSurface {
    size: Vec2,
    color: Color,
    placement: RenderPlacement,
    order: StackingOrder,
    visual: VisualParams,
}

impl CardSurface {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            size: Vec2::new(width, height),
            color,
            placement: RenderPlacement::default(),
            order: StackingOrder::default(),
            visual: VisualParams { scale: 1.0, blur: 0.0 },
        }
    }

    #[inline]
    pub fn order(&self) -> StackingOrder {
        self.order
    }

    /// On-screen rectangle inside `viewport`, with the depth scale applied
    /// around the card's center.
    ///
    /// The center follows the render position, so it stays put relative to
    /// the window when the window is resized; the card keeps its pixel size.
    pub fn rect_in(&self, viewport: Viewport) -> Rect {
        let render = self.placement.render;
        let unit = Vec2::new(render.x + 1.0, render.y + 1.0) * 0.5;
        let center = unit.mul_elem(viewport.size());
        Rect::from_center_size(center, self.size * self.visual.scale)
    }

    pub fn sprite(&self, viewport: Viewport) -> Sprite {
        Sprite {
            rect: self.rect_in(viewport),
            color: self.color,
            blur: self.visual.blur,
            corner_radius: CORNER_RADIUS * self.visual.scale,
        }
    }
}

impl RenderSurface for CardSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_render_position(&mut self, placement: RenderPlacement) {
        self.placement = placement;
    }

    fn set_stacking_order(&mut self, order: StackingOrder) {
        self.order = order;
    }

    fn apply_visual_params(&mut self, params: VisualParams) {
        self.visual = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_engine::transform::place;

    fn card() -> CardSurface {
        CardSurface::new(100.0, 50.0, Color::transparent())
    }

    #[test]
    fn centered_card_sits_in_the_middle() {
        let vp = Viewport::new(400.0, 200.0);
        let mut c = card();
        c.set_render_position(place(Vec2::zero(), vp.relative(c.size())));

        let r = c.rect_in(vp);
        assert!((r.center().x - 200.0).abs() < 1e-3);
        assert!((r.center().y - 100.0).abs() < 1e-3);
        assert_eq!(r.size, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn resize_keeps_center_on_render_position() {
        let built = Viewport::new(400.0, 200.0);
        let mut c = card();
        c.set_render_position(place(Vec2::zero(), built.relative(c.size())));

        let r = c.rect_in(Viewport::new(800.0, 400.0));
        assert!((r.center().x - 400.0).abs() < 1e-3);
        assert!((r.center().y - 200.0).abs() < 1e-3);
        assert_eq!(r.size, Vec2::new(100.0, 50.0));

        c.set_render_position(place(Vec2::new(0.5, -0.5), built.relative(c.size())));
        let r = c.rect_in(Viewport::new(800.0, 400.0));
        assert!((r.center().x - 600.0).abs() < 1e-3);
        assert!((r.center().y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn scale_shrinks_around_center() {
        let vp = Viewport::new(400.0, 200.0);
        let mut c = card();
        c.set_render_position(place(Vec2::new(0.5, -0.5), vp.relative(c.size())));
        let before = c.rect_in(vp).center();

        c.apply_visual_params(VisualParams { scale: 0.5, blur: 3.0 });
        let r = c.rect_in(vp);
        assert!((r.center().x - before.x).abs() < 1e-3);
        assert!((r.center().y - before.y).abs() < 1e-3);
        assert_eq!(r.size, Vec2::new(50.0, 25.0));

        let s = c.sprite(vp);
        assert_eq!(s.blur, 3.0);
        assert_eq!(s.corner_radius, CORNER_RADIUS * 0.5);
    }
}
