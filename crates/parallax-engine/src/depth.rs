//! Depth-derived visual parameters.
//!
//! Farther moveables render smaller and, beyond a threshold, blurrier. Hover
//! swaps between two fixed states; there is no transition in between.

/// Visual parameters derived once from a moveable's depth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthParams {
    /// `1 / sqrt(depth)`.
    pub scale_factor: f32,
    /// `sqrt(scale_factor)`; partial de-scale used while hovered.
    pub hover_scale_factor: f32,
    /// `max(0, depth - blur_threshold) * blur_factor`.
    pub blur_amount: f32,
}

/// Computes the visual parameters for `depth`.
///
/// `depth` must be positive; scene construction rejects anything else.
#[inline]
pub fn depth_params(depth: f32, blur_threshold: f32, blur_factor: f32) -> DepthParams {
    let scale_factor = 1.0 / depth.sqrt();
    DepthParams {
        scale_factor,
        hover_scale_factor: scale_factor.sqrt(),
        blur_amount: (depth - blur_threshold).max(0.0) * blur_factor,
    }
}

/// The values written to a render surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisualParams {
    pub scale: f32,
    pub blur: f32,
}

/// Two-state hover toggle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HoverState {
    #[default]
    Resting,
    Hovered,
}

impl DepthParams {
    /// Resting state: base scale and blur.
    #[inline]
    pub fn base(&self) -> VisualParams {
        VisualParams { scale: self.scale_factor, blur: self.blur_amount }
    }

    /// Hovered state: blur removed, scale relaxed only if `scale_on_hover`.
    #[inline]
    pub fn hovered(&self, scale_on_hover: bool) -> VisualParams {
        let scale = if scale_on_hover { self.hover_scale_factor } else { self.scale_factor };
        VisualParams { scale, blur: 0.0 }
    }

    #[inline]
    pub fn for_state(&self, state: HoverState, scale_on_hover: bool) -> VisualParams {
        match state {
            HoverState::Resting => self.base(),
            HoverState::Hovered => self.hovered(scale_on_hover),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_factor_is_inverse_sqrt() {
        for d in [0.25f32, 1.0, 2.0, 4.0, 9.5, 100.0] {
            let p = depth_params(d, 1.0, 1.0);
            assert_eq!(p.scale_factor, 1.0 / d.sqrt());
            assert_eq!(p.hover_scale_factor, (1.0 / d.sqrt()).sqrt());
        }
    }

    #[test]
    fn unit_depth_is_unscaled() {
        let p = depth_params(1.0, 5.0, 2.0);
        assert_eq!(p.scale_factor, 1.0);
        assert_eq!(p.hover_scale_factor, 1.0);
    }

    // ── blur ──────────────────────────────────────────────────────────────

    #[test]
    fn blur_is_zero_up_to_threshold() {
        for d in [0.1f32, 1.0, 2.5, 3.0] {
            assert_eq!(depth_params(d, 3.0, 4.0).blur_amount, 0.0);
        }
    }

    #[test]
    fn blur_grows_linearly_past_threshold() {
        assert_eq!(depth_params(5.0, 3.0, 4.0).blur_amount, 8.0);
        assert_eq!(depth_params(7.0, 3.0, 4.0).blur_amount, 16.0);
    }

    #[test]
    fn blur_is_monotone_in_depth() {
        let mut last = 0.0f32;
        let mut d = 0.1f32;
        while d < 20.0 {
            let b = depth_params(d, 2.0, 0.75).blur_amount;
            assert!(b >= last, "blur decreased at depth {d}");
            last = b;
            d += 0.37;
        }
    }

    // ── hover toggle ──────────────────────────────────────────────────────

    #[test]
    fn hover_removes_blur_and_keeps_scale_when_disabled() {
        let p = depth_params(4.0, 1.0, 2.0);
        let hovered = p.for_state(HoverState::Hovered, false);
        assert_eq!(hovered, VisualParams { scale: 0.5, blur: 0.0 });
    }

    #[test]
    fn hover_uses_hover_scale_when_enabled() {
        let p = depth_params(4.0, 1.0, 2.0);
        let hovered = p.for_state(HoverState::Hovered, true);
        assert_eq!(hovered.scale, 0.5f32.sqrt());
        assert_eq!(hovered.blur, 0.0);
    }

    #[test]
    fn resting_restores_base() {
        let p = depth_params(4.0, 1.0, 2.0);
        assert_eq!(p.for_state(HoverState::Resting, true), VisualParams { scale: 0.5, blur: 6.0 });
    }
}
