//! Magnifier constants and construction options.
//!
//! `LoupeConfig` holds the fixed tuning values shared by every instance.
//! `LoupeOptions` is the options object passed at construction. No option
//! changes core behavior yet; unknown keys are kept so callers can attach
//! their own data.

use crate::error::LoupeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed tuning values for the magnifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoupeConfig {
    /// Largest zoom factor a pinch can reach
    pub max_scale: f64,
    /// Scale a reset never goes below, even when the image already covers
    /// the viewport at a smaller factor
    pub min_scale_floor: f64,
    /// Minimum scale before the first successful reset
    pub initial_min_scale: f64,
    /// Scales are rounded to `1 / scale_steps`
    pub scale_steps: f64,
    /// Delay between dispatch ticks while gesturing (~60 Hz)
    pub frame_interval_ms: u32,
    /// Class added to the image once it has been laid out
    pub active_class: &'static str,
}

pub static DEFAULT_CONFIG: LoupeConfig = LoupeConfig {
    max_scale: 2.0,
    min_scale_floor: 1.0,
    initial_min_scale: 0.5,
    scale_steps: 100.0,
    frame_interval_ms: 16,
    active_class: "is-active",
};

/// Options object accepted by the construction API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoupeOptions {
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl LoupeOptions {
    /// Parse options from a JSON object. `null` and empty input give defaults.
    pub fn from_json(json: &str) -> Result<Self, LoupeError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extra.len()
    }
}
