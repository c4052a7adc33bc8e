use std::time::Instant;

use anyhow::{Context, Result};

use parallax_engine::coords::{Rect, Vec2, Viewport};
use parallax_engine::core::{App, AppControl, FrameCtx, Wake, WindowCtx};
use parallax_engine::input::{InputEvent, InputState, Key, KeyState};
use parallax_engine::paint::Color;
use parallax_engine::render::{SpriteList, SpriteRenderer};
use parallax_engine::scene::{MoveableId, ParallaxScene};
use parallax_engine::time::IntervalTicker;

use crate::scene_file::SceneFile;
use crate::surface::CardSurface;

/// Runs one parallax scene in a window.
///
/// Keys: `Space` pauses/resumes the camera loop, `R` recenters the camera
/// target, `Escape` quits.
pub struct StudioApp {
    scene: ParallaxScene<CardSurface, IntervalTicker>,
    renderer: SpriteRenderer,
    sprites: SpriteList,
    hovered: Option<MoveableId>,
    dirty: bool,
    clear: Color,
}

impl StudioApp {
    /// Builds the scene against a fixed `container` and starts the camera loop.
    pub fn new(file: SceneFile, container: Viewport) -> Result<Self> {
        let moveables = file
            .cards
            .into_iter()
            .map(|c| (c.config, CardSurface::new(c.width, c.height, c.color)))
            .collect();

        let mut scene = ParallaxScene::new(file.scene, container, moveables, IntervalTicker::new())
            .context("failed to build parallax scene")?;
        scene.resume();

        Ok(Self {
            scene,
            renderer: SpriteRenderer::new(),
            sprites: SpriteList::new(),
            hovered: None,
            dirty: true,
            clear: Color::from_srgb_u8(0xf1, 0xfa, 0xee, 0xff),
        })
    }

    /// Applies one input event; `pointer` is the pointer position after it.
    fn apply_input(&mut self, event: &InputEvent, pointer: Option<Vec2>, viewport: Viewport) -> AppControl {
        let bounds = Rect::new(0.0, 0.0, viewport.width, viewport.height);
        self.scene.handle_input(event, bounds);

        match event {
            InputEvent::PointerMoved(_) | InputEvent::PointerLeft => {
                self.dirty |= self.update_hover(pointer, viewport);
            }

            InputEvent::Key { key, state: KeyState::Pressed, repeat: false } => match key {
                Key::Escape => return AppControl::Exit,
                Key::Space => self.toggle_running(),
                Key::R => {
                    log::info!("camera target recentered");
                    self.scene.set_target(Vec2::zero());
                }
                _ => {}
            },

            _ => {}
        }

        AppControl::Continue
    }

    fn toggle_running(&mut self) {
        if self.scene.is_running() {
            self.scene.pause();
        } else {
            self.scene.resume();
        }
    }

    /// Topmost card under `pointer`.
    fn card_at(&self, pointer: Vec2, viewport: Viewport) -> Option<MoveableId> {
        self.scene
            .iter()
            .filter(|(_, _, card)| card.rect_in(viewport).contains(pointer))
            .max_by_key(|(_, _, card)| card.order())
            .map(|(id, _, _)| id)
    }

    /// Moves the hover toggle to the card under `pointer`. Returns `true` if
    /// any card changed state.
    fn update_hover(&mut self, pointer: Option<Vec2>, viewport: Viewport) -> bool {
        let next = pointer.and_then(|p| self.card_at(p, viewport));
        if next == self.hovered {
            return false;
        }

        let mut changed = false;
        if let Some(prev) = self.hovered.take() {
            changed |= self.scene.hover_exit(prev);
        }
        if let Some(id) = next {
            changed |= self.scene.hover_enter(id);
        }
        self.hovered = next;
        changed
    }

    /// Delivers every tick due at `now`. Returns `true` if the camera moved.
    fn drain_ticks(&mut self, now: Instant) -> bool {
        let Some(due) = self.scene.ticker_mut().due(now) else {
            return false;
        };

        let mut moved = false;
        for _ in 0..due.count {
            moved |= self.scene.on_tick(due.handle);
        }
        moved
    }
}

impl App for StudioApp {
    fn on_input(&mut self, window: &WindowCtx<'_>, input: &InputState, event: &InputEvent) -> AppControl {
        self.apply_input(event, input.pointer_pos, window.viewport())
    }

    fn on_wake(&mut self, now: Instant) -> Wake {
        let moved = self.drain_ticks(now);
        let redraw = std::mem::take(&mut self.dirty) || moved;
        Wake { redraw, next_deadline: self.scene.ticker().next_deadline() }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();

        self.sprites.clear();
        for (_, _, card) in self.scene.iter() {
            self.sprites.push(card.order(), card.sprite(viewport));
        }

        let (renderer, sprites) = (&mut self.renderer, &mut self.sprites);
        ctx.render(self.clear, |rctx, target| renderer.render(rctx, target, sprites))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use parallax_engine::input::PointerMoveEvent;

    const SCENE: &str = r##"{
        "scene": { "max-scroll-x": 1, "max-scroll-y": 1, "blur-threshold": 1, "blur-factor": 2 },
        "moveables": [
            { "start-x": 0, "start-y": 0, "depth": 4, "width": 200, "height": 200, "color": "#000000" },
            { "start-x": 0, "start-y": 0, "depth": 1, "width": 100, "height": 100, "color": "#ffffff" }
        ]
    }"##;

    const VIEWPORT: Viewport = Viewport::new(400.0, 400.0);

    fn app() -> StudioApp {
        StudioApp::new(SceneFile::parse(SCENE).unwrap(), VIEWPORT).unwrap()
    }

    fn moved_to(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn starts_running_and_asks_for_a_first_frame() {
        let mut app = app();
        assert!(app.scene.is_running());

        let wake = app.on_wake(Instant::now());
        assert!(wake.redraw);
        assert!(wake.next_deadline.is_some());
    }

    #[test]
    fn invalid_depth_fails_construction() {
        let text = SCENE.replace("\"depth\": 1,", "\"depth\": 0,");
        let err = StudioApp::new(SceneFile::parse(&text).unwrap(), VIEWPORT).err().unwrap();
        assert!(format!("{err:#}").contains("moveables[1].depth"));
    }

    // ── hover ─────────────────────────────────────────────────────────────

    #[test]
    fn hover_picks_the_nearest_card_under_the_pointer() {
        let mut app = app();
        let center = Some(Vec2::new(200.0, 200.0));
        app.apply_input(&moved_to(200.0, 200.0), center, VIEWPORT);
        assert_eq!(app.hovered, Some(MoveableId(1)));
    }

    #[test]
    fn hover_clears_when_pointer_leaves() {
        let mut app = app();
        app.apply_input(&moved_to(200.0, 200.0), Some(Vec2::new(200.0, 200.0)), VIEWPORT);
        app.apply_input(&InputEvent::PointerLeft, None, VIEWPORT);
        assert_eq!(app.hovered, None);
        assert_eq!(app.scene.moveable(MoveableId(1)).map(|m| m.hover()), Some(Default::default()));
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn space_toggles_the_camera_loop() {
        let mut app = app();
        app.apply_input(&key(Key::Space), None, VIEWPORT);
        assert!(!app.scene.is_running());
        assert_eq!(app.on_wake(Instant::now()).next_deadline, None);

        app.apply_input(&key(Key::Space), None, VIEWPORT);
        assert!(app.scene.is_running());
    }

    #[test]
    fn escape_exits() {
        let mut app = app();
        assert_eq!(app.apply_input(&key(Key::Escape), None, VIEWPORT), AppControl::Exit);
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn due_ticks_move_the_camera_toward_the_pointer() {
        let mut app = app();
        app.apply_input(&moved_to(400.0, 200.0), Some(Vec2::new(400.0, 200.0)), VIEWPORT);

        let start = app.scene.camera().position;
        let later = Instant::now() + Duration::from_millis(50);
        assert!(app.drain_ticks(later));
        assert!(app.scene.camera().position.x > start.x);
    }
}
