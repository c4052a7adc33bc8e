use crate::camera::{Camera, MotionController, Step};
use crate::config::{collect_container_issues, MoveableConfig, SceneConfig};
use crate::coords::{Rect, Vec2, Viewport};
use crate::depth::{depth_params, HoverState};
use crate::error::{ConfigError, SceneError};
use crate::input::{InputEvent, PointerMoveEvent, PointerTargetAdapter};
use crate::time::{TickHandle, TickSource};
use crate::transform::FieldOfView;

use super::{assign_stacking_orders, Moveable, MoveableId, RenderSurface};

struct Entry<S> {
    moveable: Moveable,
    surface: S,
}

/// Parallax container: camera, moveables and their surfaces.
///
/// Single-threaded. Ticks and pointer events may interleave arbitrarily; each
/// call completes before the next one starts, so no moveable is ever placed
/// against a different camera position than its siblings.
pub struct ParallaxScene<S, T> {
    container: Viewport,
    scale_on_hover: bool,
    recenter_on_leave: bool,
    motion: MotionController,
    adapter: PointerTargetAdapter,
    entries: Vec<Entry<S>>,
    ticker: T,
}

impl<S, T> ParallaxScene<S, T>
where
    S: RenderSurface,
    T: TickSource,
{
    /// Builds the scene and writes the initial state to every surface.
    ///
    /// Validation happens before any surface is touched:
    /// - non-finite or out-of-range values fail with `SceneError::Config`,
    ///   listing every offending field
    /// - zero or negative depth fails with `SceneError::Domain`
    ///
    /// The scene starts idle; call [`resume`](Self::resume) to start the loop.
    pub fn new(
        config: SceneConfig,
        container: Viewport,
        moveables: Vec<(MoveableConfig, S)>,
        ticker: T,
    ) -> Result<Self, SceneError> {
        let mut issues = Vec::new();
        config.collect_issues(&mut issues);
        collect_container_issues(container, &mut issues);
        for (i, (m, _)) in moveables.iter().enumerate() {
            m.collect_issues(&field_prefix(i), &mut issues);
        }
        ConfigError::check(issues)?;

        for (i, (m, _)) in moveables.iter().enumerate() {
            m.check_domain(&field_prefix(i))?;
        }

        let fov = FieldOfView::from_degrees(config.fov_degrees, container);
        let camera = Camera::at(config.camera_start, fov);

        let mut scene = Self {
            container,
            scale_on_hover: config.scale_on_hover,
            recenter_on_leave: config.recenter_on_leave,
            motion: MotionController::new(camera, config.motion),
            adapter: PointerTargetAdapter::new(config.max_scroll),
            entries: moveables
                .into_iter()
                .map(|(cfg, surface)| Entry {
                    moveable: Moveable::new(
                        cfg,
                        depth_params(cfg.depth, config.blur_threshold, config.blur_factor),
                    ),
                    surface,
                })
                .collect(),
            ticker,
        };

        scene.initialize();

        log::info!(
            "parallax scene ready: {} moveables, container {}x{}, fov {:.1}°/{:.1}°",
            scene.entries.len(),
            container.width,
            container.height,
            fov.horizontal.to_degrees(),
            fov.vertical.to_degrees(),
        );

        Ok(scene)
    }

    /// Initial placement, visual parameters and stacking order.
    fn initialize(&mut self) {
        for entry in &mut self.entries {
            let params = entry.moveable.depth_params().base();
            entry.surface.apply_visual_params(params);
        }

        self.render_all();

        let depths: Vec<f32> = self.entries.iter().map(|e| e.moveable.depth()).collect();
        for (entry, order) in self.entries.iter_mut().zip(assign_stacking_orders(&depths)) {
            entry.moveable.set_stacking_order(order);
            entry.surface.set_stacking_order(order);
        }
    }

    /// Re-places every moveable against the current camera position.
    fn render_all(&mut self) {
        let camera = self.motion.camera();
        let (position, fov) = (camera.position, camera.fov);
        for entry in &mut self.entries {
            let relative = self.container.relative(entry.surface.size());
            let placement = entry.moveable.reproject(position, &fov, relative);
            entry.surface.set_render_position(placement);
        }
    }

    // ── loop control ──────────────────────────────────────────────────────

    /// Starts the periodic camera step. No-op if already running.
    pub fn resume(&mut self) {
        self.motion.resume(&mut self.ticker);
    }

    /// Stops the periodic camera step. No-op if already idle.
    pub fn pause(&mut self) {
        self.motion.pause(&mut self.ticker);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.motion.is_running()
    }

    /// Handles one tick from the tick source.
    ///
    /// Ticks for a cancelled schedule, or arriving while paused, are ignored.
    /// Returns `true` if the camera moved and moveables were re-placed.
    pub fn on_tick(&mut self, handle: TickHandle) -> bool {
        if !self.motion.accepts(handle) {
            log::trace!("ignoring stale tick {:?}", handle);
            return false;
        }
        self.perform_step().moved()
    }

    /// Advances the camera one step and re-places every moveable if it moved.
    pub fn perform_step(&mut self) -> Step {
        let step = self.motion.perform_step();
        if step.moved() {
            self.render_all();
        }
        step
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Replaces the camera target; picked up on the next tick.
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.motion.set_target(target);
    }

    /// Pointer moved to `pointer` inside viewport `bounds`.
    ///
    /// Returns the new target, or `None` if `bounds` is empty.
    pub fn pointer_moved(&mut self, pointer: Vec2, bounds: Rect) -> Option<Vec2> {
        let Some(target) = self.adapter.target_for(pointer, bounds) else {
            log::debug!("pointer event ignored: empty viewport bounds {:?}", bounds);
            return None;
        };
        self.set_target(target);
        Some(target)
    }

    /// Pointer left the viewport.
    pub fn pointer_left(&mut self) {
        if self.recenter_on_leave {
            self.set_target(Vec2::zero());
        }
    }

    /// Routes a platform-agnostic input event.
    ///
    /// Only pointer events affect the scene; other events are ignored.
    pub fn handle_input(&mut self, ev: &InputEvent, bounds: Rect) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_moved(Vec2::new(*x, *y), bounds);
            }
            InputEvent::PointerLeft => self.pointer_left(),
            _ => {}
        }
    }

    // ── hover ─────────────────────────────────────────────────────────────

    /// Hover-enter notification for `id`. Returns `true` if the state changed.
    pub fn hover_enter(&mut self, id: MoveableId) -> bool {
        self.set_hover(id, HoverState::Hovered)
    }

    /// Hover-exit notification for `id`. Returns `true` if the state changed.
    pub fn hover_exit(&mut self, id: MoveableId) -> bool {
        self.set_hover(id, HoverState::Resting)
    }

    fn set_hover(&mut self, id: MoveableId, hover: HoverState) -> bool {
        let scale_on_hover = self.scale_on_hover;
        let Some(entry) = self.entries.get_mut(id.0) else {
            log::warn!("hover notification for unknown moveable {:?}", id);
            return false;
        };
        if entry.moveable.hover() == hover {
            return false;
        }
        entry.moveable.set_hover(hover);
        let params = entry.moveable.depth_params().for_state(hover, scale_on_hover);
        entry.surface.apply_visual_params(params);
        true
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn camera(&self) -> &Camera {
        self.motion.camera()
    }

    #[inline]
    pub fn container(&self) -> Viewport {
        self.container
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn moveable(&self, id: MoveableId) -> Option<&Moveable> {
        self.entries.get(id.0).map(|e| &e.moveable)
    }

    pub fn surface(&self, id: MoveableId) -> Option<&S> {
        self.entries.get(id.0).map(|e| &e.surface)
    }

    /// Moveables with their surfaces, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveableId, &Moveable, &S)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (MoveableId(i), &e.moveable, &e.surface))
    }

    #[inline]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    #[inline]
    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }
}

fn field_prefix(index: usize) -> String {
    format!("moveables[{index}].")
}
