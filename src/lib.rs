//! Fruit Catch - catch the falling fruit, keep it away from the blades
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game phase)
//! - `frame`: Per-display-frame driver sequencing tick and render
//! - `renderer`: Canvas, DOM and headless renderers behind one trait
//! - `platform`: Browser/native abstraction (input mapping, wall clock)
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use frame::{FrameLoop, FrameStatus};
pub use settings::{RendererKind, Settings};

/// Game configuration constants (defaults for `Settings`)
pub mod consts {
    /// Platform ("basket") dimensions
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Distance from the viewport bottom to the platform top
    pub const PLATFORM_BOTTOM_OFFSET: f32 = 70.0;
    /// Pixels per tick while a move key is held
    pub const PLATFORM_SPEED: f32 = 12.0;

    /// Fruit bounding box edge
    pub const FRUIT_SIZE: f32 = 40.0;
    /// Initial downward speed (pixels per tick)
    pub const FRUIT_FALL_SPEED: f32 = 4.0;
    /// Initial horizontal speed is drawn from [-drift, drift]
    pub const FRUIT_INITIAL_DRIFT: f32 = 1.0;
    /// Vertical velocity multiplier on a catch (sign flip + speed-up)
    pub const CATCH_BOUNCE: f32 = 1.1;
    /// Horizontal speed after a catch is drawn from [-drift, drift]
    pub const CATCH_DRIFT: f32 = 2.0;

    /// Blade row
    pub const BLADE_COUNT: u32 = 20;
    pub const BLADE_SPIN: f32 = 0.05; // radians per tick
    /// Distance from the viewport bottom to the blade centres
    pub const BLADE_INSET: f32 = 5.0;

    /// Fruit fragments spawned by a squish
    pub const FRAGMENT_COUNT: u32 = 20;
    pub const FRAGMENT_SPEED: f32 = 1.0;
    /// Per-fragment, per-tick chance of a streak
    pub const STREAK_CHANCE: f64 = 0.1;
    /// Streak end point offset range on each axis
    pub const STREAK_REACH: f32 = 5.0;

    /// Time between the squish and game over
    pub const SQUISH_DURATION_MS: f64 = 1000.0;
}
