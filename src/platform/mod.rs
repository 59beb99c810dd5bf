//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time (`clock`)
//! - Input events (`input`)

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{Controls, Key, KeyResponse};
