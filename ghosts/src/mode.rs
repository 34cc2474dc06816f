#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::{CHASE_SPEED, FRIGHTENED_SPEED, SCATTER_SPEED};

// ============================================================================
// Ghost Mode
// ============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum GhostMode {
    #[default]
    Scatter,
    Chase,
    Frightened,
}

impl GhostMode {
    // Scatter and Chase alternate; Frightened is entered and left separately.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Scatter => Self::Chase,
            Self::Chase => Self::Scatter,
            Self::Frightened => Self::Frightened,
        }
    }
}

// What the rendering layer should draw for a ghost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Normal,
    Frightened,
}

// ============================================================================
// Mode Speeds
// ============================================================================

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct ModeSpeeds {
    pub scatter: f32,
    pub chase: f32,
    pub frightened: f32,
}

impl ModeSpeeds {
    #[must_use]
    pub const fn get(&self, mode: GhostMode) -> f32 {
        match mode {
            GhostMode::Scatter => self.scatter,
            GhostMode::Chase => self.chase,
            GhostMode::Frightened => self.frightened,
        }
    }
}

impl Default for ModeSpeeds {
    fn default() -> Self {
        Self {
            scatter: SCATTER_SPEED,
            chase: CHASE_SPEED,
            frightened: FRIGHTENED_SPEED,
        }
    }
}
