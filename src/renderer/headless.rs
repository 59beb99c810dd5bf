//! Renderer for native runs and tests: draws nothing, remembers what it was shown

use super::Renderer;
use crate::error::GameError;
use crate::sim::GameSession;

#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    /// Frames drawn through `draw_frame`
    pub frames: u64,
    /// Times the game-over screen was drawn
    pub game_over_screens: u32,
    pub last_score: Option<u64>,
    pub last_fragment_count: usize,
    pub last_streak_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_frame(&mut self, session: &GameSession) -> Result<(), GameError> {
        self.frames += 1;
        self.last_score = Some(session.score);
        self.last_fragment_count = session.fragments.len();
        self.last_streak_count = session.streaks.len();
        log::trace!(
            "frame {}: phase {:?}, fruit {:?}, platform x {:.1}, score {}",
            self.frames,
            session.phase,
            session.fruit.pos,
            session.platform.x,
            session.score
        );
        Ok(())
    }

    fn draw_game_over(&mut self, session: &GameSession) -> Result<(), GameError> {
        self.game_over_screens += 1;
        self.last_score = Some(session.score);
        log::trace!("game over screen, final score {}", session.score);
        Ok(())
    }
}
