//! Game tuning
//!
//! Loaded from a JSON file on startup. Every field has a default so partial
//! files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{StackError, StackResult};
use crate::sim::PlatformSize;

/// Tuning values for the stack engine and the reference mover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Height of each platform slab (also the vertical step per level)
    pub platform_height: f32,
    /// Delay before the first moving platform appears (seconds)
    pub spawn_delay: f32,
    /// Base platform width (x extent)
    pub base_width: f32,
    /// Base platform depth (z extent)
    pub base_depth: f32,

    // === Reference mover ===
    /// Half-range of the oscillation around the origin
    pub mover_amplitude: f32,
    /// Travel speed in units per second
    pub mover_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            platform_height: PLATFORM_HEIGHT,
            spawn_delay: SPAWN_DELAY,
            base_width: BASE_WIDTH,
            base_depth: BASE_DEPTH,
            mover_amplitude: MOVER_AMPLITUDE,
            mover_speed: MOVER_SPEED,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> StackResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file, strict (errors are returned)
    pub fn read(path: impl AsRef<Path>) -> StackResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Reject values the geometry cannot work with
    pub fn validate(&self) -> StackResult<()> {
        let positive = [
            ("platform_height", self.platform_height),
            ("base_width", self.base_width),
            ("base_depth", self.base_depth),
            ("mover_amplitude", self.mover_amplitude),
            ("mover_speed", self.mover_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(StackError::InvalidSettings(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.spawn_delay >= 0.0 && self.spawn_delay.is_finite()) {
            return Err(StackError::InvalidSettings(format!(
                "spawn_delay must be non-negative, got {}",
                self.spawn_delay
            )));
        }
        Ok(())
    }

    /// Footprint of the base platform (and of the first mover)
    pub fn base_size(&self) -> PlatformSize {
        PlatformSize::new(self.base_width, self.base_depth)
    }
}
