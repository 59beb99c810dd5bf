//! Per-frame simulation tick
//!
//! One call advances the session by exactly one display frame. Velocities are in
//! pixels per tick; the only wall-clock input is `now_ms`, used for the squish
//! deadline.

use glam::Vec2;
use rand::Rng;

use super::collision::{fruit_hits_blade, fruit_on_platform};
use super::state::{Fragment, GameEvent, GamePhase, GameSession, SquishCause, Streak};

/// Player intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameSession, input: &TickInput, now_ms: f64) {
    state.events.clear();
    state.streaks.clear();

    if state.phase.is_over() {
        return;
    }

    state.time_ticks += 1;

    // Blades keep spinning for as long as the clock runs
    for blade in &mut state.blades {
        blade.spin();
    }

    match state.phase {
        GamePhase::Playing => {
            move_platform(state, input);
            step_fruit(state, now_ms);
        }
        GamePhase::Squished { deadline_ms } => {
            if now_ms < deadline_ms {
                step_fragments(state);
            } else {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver { score: state.score });
            }
        }
        GamePhase::GameOver => {}
    }
}

/// Left then right, each clamped on its own
fn move_platform(state: &mut GameSession, input: &TickInput) {
    let speed = state.settings.platform_speed;
    let width = state.viewport.width;
    if input.move_left {
        state.platform.nudge(-speed, width);
    }
    if input.move_right {
        state.platform.nudge(speed, width);
    }
}

fn catch_ready(state: &GameSession) -> bool {
    match state.last_catch_tick {
        Some(last) => state.time_ticks - last > state.settings.catch_cooldown_ticks as u64,
        None => true,
    }
}

fn step_fruit(state: &mut GameSession, now_ms: f64) {
    state.fruit.pos += state.fruit.vel;

    // Re-fires on every tick the fruit stays over the platform (unless a cooldown is set)
    if fruit_on_platform(&state.fruit, &state.platform) && catch_ready(state) {
        state.score += 1;
        state.last_catch_tick = Some(state.time_ticks);
        state.fruit.vel.y *= -state.settings.catch_bounce;
        let drift = state.settings.catch_drift;
        state.fruit.vel.x = if drift > 0.0 {
            state.rng.random_range(-drift..drift)
        } else {
            0.0
        };
        state.events.push(GameEvent::Caught { score: state.score });
    }

    let bounds = state.fruit.bounds();
    if bounds.top() < 0.0 {
        state.fruit.vel.y = -state.fruit.vel.y;
        state.events.push(GameEvent::CeilingBounce);
    } else if bounds.bottom() > state.viewport.height {
        squish(state, now_ms, SquishCause::Floor);
        return;
    }

    if bounds.left() < 0.0 || bounds.right() > state.viewport.width {
        state.fruit.vel.x = -state.fruit.vel.x;
    }

    // However many blades overlap, the fruit is only squished once
    if state.blades.iter().any(|b| fruit_hits_blade(&state.fruit, b)) {
        squish(state, now_ms, SquishCause::Blade);
    }
}

/// Destroy the fruit: start the game-over countdown and burst it into fragments
fn squish(state: &mut GameSession, now_ms: f64, cause: SquishCause) {
    if !matches!(state.phase, GamePhase::Playing) {
        return;
    }

    state.phase = GamePhase::Squished {
        deadline_ms: now_ms + state.settings.squish_duration_ms,
    };

    let origin = state.fruit.pos;
    let size = state.fruit.size;
    let speed = state.settings.fragment_speed;
    let rng = &mut state.rng;
    state.fragments.extend((0..state.settings.fragment_count).map(|_| {
        let offset = Vec2::new(rng.random_range(0.0..size), rng.random_range(0.0..size));
        let vel = if speed > 0.0 {
            Vec2::new(
                rng.random_range(-speed..speed),
                rng.random_range(-speed..speed),
            )
        } else {
            Vec2::ZERO
        };
        Fragment {
            pos: origin + offset,
            vel,
        }
    }));

    state.events.push(GameEvent::Squished { cause });
}

fn step_fragments(state: &mut GameSession) {
    let chance = state.settings.streak_chance;
    let reach = state.settings.streak_reach;
    for fragment in &mut state.fragments {
        fragment.advance();

        if state.rng.random_bool(chance) {
            let offset = if reach > 0.0 {
                Vec2::new(
                    state.rng.random_range(-reach..reach),
                    state.rng.random_range(-reach..reach),
                )
            } else {
                Vec2::ZERO
            };
            state.streaks.push(Streak {
                from: fragment.pos,
                to: fragment.pos + offset,
            });
        }
    }
}
