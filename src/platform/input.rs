//! Keyboard and pointer input
//!
//! Key events only flip flags; the simulation reads them once per tick through
//! `Controls::intent`.

use glam::Vec2;

use crate::renderer::scene::restart_button;
use crate::sim::{TickInput, Viewport};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Space bar, restarts once the game is over
    Restart,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            " " | "Spacebar" => Some(Key::Restart),
            _ => None,
        }
    }

    /// Arrow keys would scroll the page
    pub fn suppresses_scroll(self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Up | Key::Down)
    }
}

/// What the host should do after a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyResponse {
    pub prevent_default: bool,
    pub restart: bool,
}

/// Held-key state
#[derive(Debug, Clone, Default)]
pub struct Controls {
    intent: TickInput,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key, game_over: bool) -> KeyResponse {
        match key {
            Key::Left => self.intent.move_left = true,
            Key::Right => self.intent.move_right = true,
            _ => {}
        }
        KeyResponse {
            prevent_default: key.suppresses_scroll(),
            restart: key == Key::Restart && game_over,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.intent.move_left = false,
            Key::Right => self.intent.move_right = false,
            _ => {}
        }
    }

    /// Intent for the next tick
    pub fn intent(&self) -> TickInput {
        self.intent
    }

    /// Returns true when a click at viewport coordinates should restart the game
    pub fn click(&self, viewport: Viewport, x: f32, y: f32, game_over: bool) -> bool {
        game_over && restart_button(viewport).contains(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Restart));
        assert_eq!(Key::from_dom_key("a"), None);
        assert!(Key::Up.suppresses_scroll());
        assert!(!Key::Restart.suppresses_scroll());
    }

    #[test]
    fn test_held_keys_set_intent() {
        let mut controls = Controls::new();
        controls.key_down(Key::Left, false);
        controls.key_down(Key::Right, false);
        assert_eq!(
            controls.intent(),
            TickInput {
                move_left: true,
                move_right: true
            }
        );
        controls.key_up(Key::Left);
        assert_eq!(
            controls.intent(),
            TickInput {
                move_left: false,
                move_right: true
            }
        );
        controls.key_up(Key::Right);
        assert_eq!(controls.intent(), TickInput::default());
    }

    #[test]
    fn test_arrows_prevent_scroll() {
        let mut controls = Controls::new();
        let response = controls.key_down(Key::Up, false);
        assert!(response.prevent_default);
        assert!(!response.restart);
        assert_eq!(controls.intent(), TickInput::default());
    }

    #[test]
    fn test_space_restarts_only_after_game_over() {
        let mut controls = Controls::new();
        assert!(!controls.key_down(Key::Restart, false).restart);
        assert!(controls.key_down(Key::Restart, true).restart);
    }

    #[test]
    fn test_click_on_restart_button() {
        let controls = Controls::new();
        let viewport = Viewport::new(800.0, 600.0);
        // Button spans x 350..450, y 400..450
        assert!(controls.click(viewport, 400.0, 425.0, true));
        assert!(!controls.click(viewport, 400.0, 425.0, false));
        assert!(!controls.click(viewport, 350.0, 425.0, true));
        assert!(!controls.click(viewport, 400.0, 460.0, true));
    }
}
