//! Runtime configuration
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "playback": { "default_speed": 80 }, "samples": { "sorting_len": 12 } }
//! ```

use crate::error::TraceError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Slowest allowed playback speed
pub const MIN_SPEED: u32 = 1;

/// Fastest allowed playback speed
pub const MAX_SPEED: u32 = 100;

/// Speed a fresh driver plays at
pub const DEFAULT_SPEED: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub samples: SampleConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        let config: Config = serde_json::from_str(json)?;
        config.playback.validate()?;
        Ok(config)
    }
}

/// Driver cadence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub min_speed: u32,
    pub max_speed: u32,
    pub default_speed: u32,
}

impl PlaybackConfig {
    /// Check `MIN_SPEED <= min_speed <= default_speed <= max_speed <= MAX_SPEED`
    pub fn validate(&self) -> Result<(), TraceError> {
        let nested = MIN_SPEED <= self.min_speed
            && self.min_speed <= self.default_speed
            && self.default_speed <= self.max_speed
            && self.max_speed <= MAX_SPEED;
        if !nested {
            return Err(TraceError::InvalidPlayback {
                min: self.min_speed,
                default: self.default_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }

    /// Delay between automatic steps: 991 ms at speed 1 down to 100 ms at speed 100.
    /// `speed` is held to this config's bounds first.
    pub fn interval(&self, speed: u32) -> Duration {
        let speed = speed
            .max(self.min_speed)
            .min(self.max_speed)
            .min(MAX_SPEED);
        Duration::from_millis(1000 - u64::from(speed) * 9)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            default_speed: DEFAULT_SPEED,
        }
    }
}

/// Shape of generated sample inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub sorting_len: usize,
    pub sorting_min: i64,
    pub sorting_max: i64,
    pub searching_len: usize,
    pub searching_min: i64,
    pub searching_max: i64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            sorting_len: 24,
            sorting_min: 10,
            sorting_max: 99,
            searching_len: 16,
            searching_min: 1,
            searching_max: 99,
        }
    }
}
