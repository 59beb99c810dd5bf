//! Error type for start-up and configuration failures
//!
//! The simulation itself cannot fail; squish and game over are phases, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("viewport {width}x{height} is too small for the play field")]
    ViewportTooSmall { width: f32, height: f32 },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("missing DOM element: {0}")]
    MissingElement(&'static str),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GameError::Dom(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
