//! Per-display-frame driver
//!
//! `FrameLoop::frame` is called once per `requestAnimationFrame` (or once per
//! iteration of the native headless loop). It runs exactly one tick and one
//! render, and tells the host whether to schedule another frame.

use crate::platform::Clock;
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameSession, TickInput, tick};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

pub struct FrameLoop<R, C> {
    session: GameSession,
    renderer: R,
    clock: C,
    /// Terminal screen already drawn
    stopped: bool,
}

impl<R: Renderer, C: Clock> FrameLoop<R, C> {
    pub fn new(session: GameSession, renderer: R, clock: C) -> Self {
        Self {
            session,
            renderer,
            clock,
            stopped: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run one frame with the given input intent
    pub fn frame(&mut self, input: &TickInput) -> FrameStatus {
        if self.stopped {
            return FrameStatus::Stopped;
        }

        if self.session.phase.is_over() {
            if let Err(e) = self.renderer.draw_game_over(&self.session) {
                log::warn!("Game over render error: {e}");
            }
            self.stopped = true;
            log::info!("Frame loop stopped (final score {})", self.session.score);
            return FrameStatus::Stopped;
        }

        let now = self.clock.now_ms();
        tick(&mut self.session, input, now);
        self.log_events();

        if let Err(e) = self.renderer.draw_frame(&self.session) {
            log::warn!("Render error: {e}");
        }

        FrameStatus::Continue
    }

    fn log_events(&self) {
        for event in &self.session.events {
            match event {
                GameEvent::Caught { score } => log::info!("Caught! score {score}"),
                GameEvent::CeilingBounce => log::debug!("Fruit bounced off the ceiling"),
                GameEvent::Squished { cause } => {
                    log::info!("Fruit squished ({cause:?}) at tick {}", self.session.time_ticks)
                }
                GameEvent::GameOver { score } => log::info!("Game over, final score {score}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::error::GameError;
    use crate::platform::ManualClock;
    use crate::renderer::HeadlessRenderer;
    use crate::settings::Settings;
    use crate::sim::{GamePhase, Viewport};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn doomed_session() -> GameSession {
        let mut session =
            GameSession::new(Viewport::new(800.0, 600.0), Settings::default(), 77).unwrap();
        session.platform.x = 600.0;
        session.fruit.pos = Vec2::new(100.0, 0.0);
        session.fruit.vel = Vec2::new(0.0, 4.0);
        session
    }

    #[test]
    fn test_runs_to_game_over_and_stops_once() {
        let clock = ManualClock::new(0.0);
        let mut frames = FrameLoop::new(doomed_session(), HeadlessRenderer::new(), &clock);

        let mut count = 0;
        while frames.frame(&TickInput::default()) == FrameStatus::Continue {
            clock.advance(FRAME_MS);
            count += 1;
            assert!(count < 10_000);
        }

        // 134 ticks to reach the blades, 60 more frames (1000ms) squished, one to flip
        assert_eq!(frames.renderer().frames, count);
        assert!((194..=196).contains(&count), "ran {count} frames");
        assert_eq!(frames.renderer().game_over_screens, 1);
        assert_eq!(frames.session().phase, GamePhase::GameOver);

        // Later frames do nothing
        assert_eq!(frames.frame(&TickInput::default()), FrameStatus::Stopped);
        assert_eq!(frames.renderer().game_over_screens, 1);
        assert!(frames.is_stopped());
    }

    #[test]
    fn test_input_moves_platform() {
        let clock = ManualClock::new(0.0);
        let mut frames = FrameLoop::new(doomed_session(), HeadlessRenderer::new(), &clock);
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        frames.frame(&left);
        assert_eq!(frames.session().platform.x, 588.0);
        assert_eq!(frames.renderer().last_score, Some(0));
    }

    struct FailingRenderer {
        attempts: u32,
    }

    impl Renderer for FailingRenderer {
        fn draw_frame(&mut self, _session: &GameSession) -> Result<(), GameError> {
            self.attempts += 1;
            Err(GameError::Dom("canvas gone".to_string()))
        }

        fn draw_game_over(&mut self, _session: &GameSession) -> Result<(), GameError> {
            Err(GameError::Dom("canvas gone".to_string()))
        }
    }

    #[test]
    fn test_render_errors_do_not_stop_the_loop() {
        let clock = ManualClock::new(0.0);
        let mut frames = FrameLoop::new(doomed_session(), FailingRenderer { attempts: 0 }, &clock);
        assert_eq!(frames.frame(&TickInput::default()), FrameStatus::Continue);
        assert_eq!(frames.frame(&TickInput::default()), FrameStatus::Continue);
        assert_eq!(frames.renderer().attempts, 2);
        assert_eq!(frames.session().time_ticks, 2);
    }

    #[test]
    fn test_boxed_renderer() {
        let clock = ManualClock::new(0.0);
        let renderer: Box<dyn Renderer> = Box::new(HeadlessRenderer::new());
        let mut frames = FrameLoop::new(doomed_session(), renderer, &clock);
        assert_eq!(frames.frame(&TickInput::default()), FrameStatus::Continue);
    }
}
