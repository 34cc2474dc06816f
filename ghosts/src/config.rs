use bevy_math::Vec2;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::*,
    mode::{GhostMode, ModeSpeeds},
    targeting::GhostType,
};

// ============================================================================
// Errors
// ============================================================================

/// Raised while building ghosts. Per-tick operations never fail.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown ghost type code {0:?}")]
    UnknownGhostType(char),

    #[error("spawn position {0:?} is not finite")]
    InvalidSpawn(Vec2),

    #[error("ghost size {width}x{height} must be positive and finite")]
    InvalidSize { width: f32, height: f32 },

    #[error("{mode:?} speed {speed} must be finite and non-negative")]
    InvalidSpeed { mode: GhostMode, speed: f32 },

    #[error("map bounds {0:?} must be finite with top above bottom")]
    InvalidMapBounds(MapBounds),

    #[cfg(feature = "json")]
    #[error("malformed ghost configuration: {0}")]
    Parse(String),
}

// ============================================================================
// Map Bounds
// ============================================================================

// Edges used to place the four home corners.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MapBounds {
    pub right_x: f32,
    pub top_y: f32,
    pub bottom_y: f32,
}

impl MapBounds {
    // Top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub const fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(0.0, self.top_y),
            Vec2::new(self.right_x, self.top_y),
            Vec2::new(0.0, self.bottom_y),
            Vec2::new(self.right_x, self.bottom_y),
        ]
    }

    #[must_use]
    pub const fn corner_for(&self, ghost_type: GhostType) -> Vec2 {
        let [top_left, top_right, bottom_left, bottom_right] = self.corners();
        match ghost_type {
            GhostType::Blinky => top_right,
            GhostType::Pinky => top_left,
            GhostType::Inky => bottom_right,
            GhostType::Clyde => bottom_left,
        }
    }

    fn is_valid(&self) -> bool {
        self.right_x.is_finite() && self.top_y.is_finite() && self.bottom_y.is_finite() && self.top_y < self.bottom_y
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            right_x: RIGHT_X_POSITION_OF_MAP,
            top_y: TOP_Y_POSITION_OF_MAP,
            bottom_y: BOTTOM_Y_POSITION_OF_MAP,
        }
    }
}

// How a new ghost gets its home corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum CornerPolicy {
    // Each type owns a fixed corner.
    #[default]
    ByType,
    // Any of the four corners, drawn from the factory's RNG.
    Random,
}

// ============================================================================
// Ghost Configuration
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct GhostConfig {
    pub speeds: ModeSpeeds,
    pub width: f32,
    pub height: f32,
    pub corner_policy: CornerPolicy,
    pub map: MapBounds,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            speeds: ModeSpeeds::default(),
            width: GHOST_WIDTH,
            height: GHOST_HEIGHT,
            corner_policy: CornerPolicy::default(),
            map: MapBounds::default(),
        }
    }
}

impl GhostConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        for mode in [GhostMode::Scatter, GhostMode::Chase, GhostMode::Frightened] {
            let speed = self.speeds.get(mode);
            if !speed.is_finite() || speed < 0.0 {
                return Err(ConfigError::InvalidSpeed { mode, speed });
            }
        }

        if !self.map.is_valid() {
            return Err(ConfigError::InvalidMapBounds(self.map));
        }

        Ok(())
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
