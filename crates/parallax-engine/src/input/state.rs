use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, KeyState, PointerMoveEvent};

/// Current input state for the window.
///
/// Holds the pointer position and held keys; events are also forwarded to the
/// application as they arrive, so nothing is buffered per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels, `None` while outside the window.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an event to the state.
    ///
    /// Returns `true` when the event is a fresh key press (not a repeat).
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear held keys to avoid stuck state.
                    self.keys_down.clear();
                }
                false
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                false
            }

            InputEvent::PointerEntered => false,

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                false
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => self.keys_down.insert(*key),
                KeyState::Released => {
                    self.keys_down.remove(key);
                    false
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat }
    }

    #[test]
    fn pointer_tracks_moves_and_leave() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(s.pointer_pos, Some(Vec2::new(3.0, 4.0)));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn repeated_press_is_not_fresh() {
        let mut s = InputState::default();
        assert!(s.apply_event(&press(Key::Space, false)));
        assert!(!s.apply_event(&press(Key::Space, true)));
        s.apply_event(&InputEvent::Key { key: Key::Space, state: KeyState::Released, repeat: false });
        assert!(!s.key_down(Key::Space));
    }

    #[test]
    fn focus_loss_clears_keys() {
        let mut s = InputState::default();
        s.apply_event(&press(Key::R, false));
        s.apply_event(&InputEvent::Focused(false));
        assert!(!s.key_down(Key::R));
    }
}
