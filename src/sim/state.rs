//! Game session and entity types
//!
//! Everything a frame needs to advance or draw the game lives in `GameSession`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::error::GameError;
use crate::settings::Settings;

/// Play-field size in CSS pixels, fixed once the session starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// Fruit in flight
    Playing,
    /// Fruit destroyed, fragments flying until the deadline (wall clock, ms)
    Squished { deadline_ms: f64 },
    /// Run ended; only a reload starts a new one
    GameOver,
}

impl GamePhase {
    /// Position in the Playing → Squished → GameOver progression
    pub fn ordinal(&self) -> u8 {
        match self {
            GamePhase::Playing => 0,
            GamePhase::Squished { .. } => 1,
            GamePhase::GameOver => 2,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}

/// What destroyed the fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquishCause {
    Floor,
    Blade,
}

/// Things that happened during a tick (cleared at the start of every tick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Caught { score: u64 },
    CeilingBounce,
    Squished { cause: SquishCause },
    GameOver { score: u64 },
}

/// The player's wooden board
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    /// Centred horizontally, `bottom_offset` above the viewport bottom
    pub fn new(viewport: Viewport, settings: &Settings) -> Self {
        Self {
            x: viewport.width / 2.0 - settings.platform_width / 2.0,
            y: viewport.height - settings.platform_bottom_offset,
            width: settings.platform_width,
            height: settings.platform_height,
        }
    }

    /// Move horizontally, staying inside `[0, viewport_width - width]`
    pub fn nudge(&mut self, dx: f32, viewport_width: f32) {
        let max_x = (viewport_width - self.width).max(0.0);
        self.x = (self.x + dx).clamp(0.0, max_x);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The falling fruit (square bounding box, top-left `pos`)
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Fruit {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// A spinning blade at the bottom of the play field
#[derive(Debug, Clone, PartialEq)]
pub struct Blade {
    /// Centre of rotation
    pub pos: Vec2,
    /// Arm length, also the half-extent of the square hitbox
    pub size: f32,
    /// Radians; grows forever, trig handles the wrap
    pub angle: f32,
    /// Radians per tick
    pub speed: f32,
}

impl Blade {
    pub fn spin(&mut self) {
        self.angle += self.speed;
    }
}

/// Lay `blade_count` blades evenly across the viewport, centred on the bottom edge
pub fn layout_blades(viewport: Viewport, settings: &Settings) -> Vec<Blade> {
    let count = settings.blade_count.max(1);
    let spacing = viewport.width / count as f32;
    (0..count)
        .map(|i| Blade {
            pos: Vec2::new(
                i as f32 * spacing + spacing / 2.0,
                viewport.height - settings.blade_inset,
            ),
            size: spacing / 2.0,
            angle: 0.0,
            speed: settings.blade_spin,
        })
        .collect()
}

/// A piece of squished fruit
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Fragment {
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// One-frame decorative line drawn next to a fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Streak {
    pub from: Vec2,
    pub to: Vec2,
}

/// One run of the game, from the first falling fruit to game over
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter (ticks the clock has run)
    pub time_ticks: u64,
    /// Tick of the most recent catch
    pub last_catch_tick: Option<u64>,
    pub platform: Platform,
    pub fruit: Fruit,
    pub blades: Vec<Blade>,
    /// Created once, on the squish
    pub fragments: Vec<Fragment>,
    /// Regenerated each squished tick
    pub streaks: Vec<Streak>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Start a new run with the given seed
    pub fn new(viewport: Viewport, settings: Settings, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(viewport, settings, seed, Pcg32::seed_from_u64(seed))
    }

    /// Start a new run drawing randomness from `rng`
    pub fn with_rng(
        viewport: Viewport,
        settings: Settings,
        seed: u64,
        mut rng: Pcg32,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        if !(viewport.width >= settings.platform_width
            && viewport.width >= settings.fruit_size
            && viewport.height >= settings.fruit_size)
        {
            return Err(GameError::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let fruit_x = rng.random_range(0.0..=viewport.width - settings.fruit_size);
        let drift = settings.fruit_initial_drift;
        let fruit_vel_x = if drift > 0.0 {
            rng.random_range(-drift..drift)
        } else {
            0.0
        };
        let fruit = Fruit {
            pos: Vec2::new(fruit_x, 0.0),
            vel: Vec2::new(fruit_vel_x, settings.fruit_fall_speed),
            size: settings.fruit_size,
        };

        Ok(Self {
            seed,
            platform: Platform::new(viewport, &settings),
            blades: layout_blades(viewport, &settings),
            fruit,
            fragments: Vec::new(),
            streaks: Vec::new(),
            events: Vec::new(),
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            last_catch_tick: None,
            settings,
            viewport,
            rng,
        })
    }

    pub fn is_squished(&self) -> bool {
        matches!(self.phase, GamePhase::Squished { .. })
    }

    /// Fruit is drawn only while it is still whole
    pub fn fruit_visible(&self) -> bool {
        matches!(self.phase, GamePhase::Playing)
    }
}
