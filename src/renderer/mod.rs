//! Rendering module
//!
//! The simulation only talks to the `Renderer` trait. Two browser strategies draw
//! the same scene: immediate-mode canvas drawing and positioned DOM elements.

pub mod headless;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use headless::HeadlessRenderer;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;

use crate::error::GameError;
use crate::sim::GameSession;

/// Something that can show a `GameSession`
pub trait Renderer {
    /// Draw one running frame: platform, blades, fruit or fragments, score
    fn draw_frame(&mut self, session: &GameSession) -> Result<(), GameError>;

    /// Draw the terminal screen with the final score and restart button
    fn draw_game_over(&mut self, session: &GameSession) -> Result<(), GameError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw_frame(&mut self, session: &GameSession) -> Result<(), GameError> {
        (**self).draw_frame(session)
    }

    fn draw_game_over(&mut self, session: &GameSession) -> Result<(), GameError> {
        (**self).draw_game_over(session)
    }
}
