//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, velocities in pixels per tick
//! - Seeded RNG only
//! - Wall-clock time only enters as the `now_ms` argument to `tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, fruit_hits_blade, fruit_on_platform};
pub use state::{
    Blade, Fragment, Fruit, GameEvent, GamePhase, GameSession, Platform, SquishCause, Streak,
    Viewport, layout_blades,
};
pub use tick::{TickInput, tick};
