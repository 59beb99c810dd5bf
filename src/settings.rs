//! Game settings and tuning
//!
//! Every gameplay constant lives here so a page can override it through a JSON
//! blob in LocalStorage. Missing fields fall back to `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Which renderer draws the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Immediate-mode redraw of a 2D canvas every frame
    #[default]
    Canvas,
    /// Persistent DOM elements repositioned every frame
    Dom,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Canvas => "canvas",
            RendererKind::Dom => "dom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "canvas" | "2d" => Some(RendererKind::Canvas),
            "dom" | "html" => Some(RendererKind::Dom),
            _ => None,
        }
    }
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub renderer: RendererKind,

    // === Platform ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_bottom_offset: f32,
    pub platform_speed: f32,

    // === Fruit ===
    pub fruit_size: f32,
    pub fruit_fall_speed: f32,
    pub fruit_initial_drift: f32,
    pub catch_bounce: f32,
    pub catch_drift: f32,
    /// Ticks after a catch during which the platform cannot catch again.
    /// 0 keeps the classic behaviour of scoring every overlapping tick.
    pub catch_cooldown_ticks: u32,

    // === Blades ===
    pub blade_count: u32,
    pub blade_spin: f32,
    pub blade_inset: f32,

    // === Squish ===
    pub fragment_count: u32,
    pub fragment_speed: f32,
    pub streak_chance: f64,
    pub streak_reach: f32,
    pub squish_duration_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            renderer: RendererKind::Canvas,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_bottom_offset: PLATFORM_BOTTOM_OFFSET,
            platform_speed: PLATFORM_SPEED,

            fruit_size: FRUIT_SIZE,
            fruit_fall_speed: FRUIT_FALL_SPEED,
            fruit_initial_drift: FRUIT_INITIAL_DRIFT,
            catch_bounce: CATCH_BOUNCE,
            catch_drift: CATCH_DRIFT,
            catch_cooldown_ticks: 0,

            blade_count: BLADE_COUNT,
            blade_spin: BLADE_SPIN,
            blade_inset: BLADE_INSET,

            fragment_count: FRAGMENT_COUNT,
            fragment_speed: FRAGMENT_SPEED,
            streak_chance: STREAK_CHANCE,
            streak_reach: STREAK_REACH,
            squish_duration_ms: SQUISH_DURATION_MS,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), GameError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), GameError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            reason: format!("must be zero or more, got {value}"),
        })
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        positive("platform_width", self.platform_width)?;
        positive("platform_height", self.platform_height)?;
        non_negative("platform_bottom_offset", self.platform_bottom_offset)?;
        non_negative("platform_speed", self.platform_speed)?;
        positive("fruit_size", self.fruit_size)?;
        non_negative("fruit_fall_speed", self.fruit_fall_speed)?;
        non_negative("fruit_initial_drift", self.fruit_initial_drift)?;
        positive("catch_bounce", self.catch_bounce)?;
        non_negative("catch_drift", self.catch_drift)?;
        non_negative("blade_spin", self.blade_spin)?;
        non_negative("blade_inset", self.blade_inset)?;
        non_negative("fragment_speed", self.fragment_speed)?;
        non_negative("streak_reach", self.streak_reach)?;

        if self.blade_count == 0 {
            return Err(GameError::InvalidSetting {
                name: "blade_count",
                reason: "at least one blade is required".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.streak_chance) {
            return Err(GameError::InvalidSetting {
                name: "streak_chance",
                reason: format!("must be within [0, 1], got {}", self.streak_chance),
            });
        }
        if !(self.squish_duration_ms.is_finite() && self.squish_duration_ms >= 0.0) {
            return Err(GameError::InvalidSetting {
                name: "squish_duration_ms",
                reason: format!("must be zero or more, got {}", self.squish_duration_ms),
            });
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "fruit_catch_settings";

    /// Load settings from LocalStorage, then apply a `?renderer=` override (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let storage = window
            .as_ref()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let stored = storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let mut settings = match stored {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring stored settings: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };

        let search = window
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(kind) = renderer_from_query(&search) {
            settings.renderer = kind;
        }
        settings
    }

    /// Native runs have no persistent store
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Pick the renderer out of a `location.search` string like `?renderer=dom`
pub fn renderer_from_query(search: &str) -> Option<RendererKind> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "renderer")
        .and_then(|(_, value)| RendererKind::parse(value))
}
