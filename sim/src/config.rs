use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, ensure};
use ghosts::{GhostConfig, GhostMode, Vec2};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Logging
// ============================================================================

// RUST_LOG wins over the filter passed on the command line.
pub fn init_tracing(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .with_context(|| format!("invalid log filter {filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

// ============================================================================
// Simulation Configuration
// ============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeLengths {
    pub scatter_ms: u64,
    pub chase_ms: u64,
}

impl Default for ModeLengths {
    fn default() -> Self {
        Self {
            scatter_ms: 7_000,
            chase_ms: 20_000,
        }
    }
}

impl ModeLengths {
    // Frightened has no phase of its own; it is timed per ghost.
    #[must_use]
    pub const fn millis(&self, mode: GhostMode) -> u64 {
        match mode {
            GhostMode::Chase => self.chase_ms,
            GhostMode::Scatter | GhostMode::Frightened => self.scatter_ms,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

impl SpawnPoint {
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GhostSpawn {
    pub code: char,
    pub x: f32,
    pub y: f32,
}

impl GhostSpawn {
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

// Rectangular play area. Every footprint must stay inside it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: 448.0,
            bottom: 576.0,
        }
    }
}

impl ArenaConfig {
    // Whether a footprint anchored at `top_left` lies entirely inside.
    #[must_use]
    pub fn fits(&self, top_left: Vec2, width: f32, height: f32) -> bool {
        top_left.is_finite()
            && top_left.x >= self.left
            && top_left.y >= self.top
            && top_left.x + width <= self.right
            && top_left.y + height <= self.bottom
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: SpawnPoint,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    // Chance per tick of turning at random while the way ahead is open.
    pub turn_probability: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: SpawnPoint { x: 210.0, y: 400.0 },
            speed: 1.0,
            width: 28.0,
            height: 28.0,
            turn_probability: 0.02,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ghosts: GhostConfig,
    pub mode_lengths: ModeLengths,
    pub frightened_ms: u64,
    pub power_pellet_interval_ms: u64,
    pub lives: u32,
    pub tick_ms: u64,
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub spawns: Vec<GhostSpawn>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ghosts: GhostConfig::default(),
            mode_lengths: ModeLengths::default(),
            frightened_ms: 6_000,
            power_pellet_interval_ms: 15_000,
            lives: 3,
            tick_ms: 16,
            arena: ArenaConfig::default(),
            player: PlayerConfig::default(),
            spawns: default_spawns(),
        }
    }
}

// The ghost house: Blinky just outside the door, the other three inside.
fn default_spawns() -> Vec<GhostSpawn> {
    vec![
        GhostSpawn {
            code: 'b',
            x: 210.0,
            y: 176.0,
        },
        GhostSpawn {
            code: 's',
            x: 210.0,
            y: 224.0,
        },
        GhostSpawn {
            code: 'i',
            x: 178.0,
            y: 224.0,
        },
        GhostSpawn {
            code: 'c',
            x: 242.0,
            y: 224.0,
        },
    ]
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        self.ghosts.validate().context("invalid ghost settings")?;

        ensure!(self.tick_ms > 0, "tick_ms must be positive");
        ensure!(self.lives > 0, "lives must be positive");
        ensure!(
            self.mode_lengths.scatter_ms > 0 && self.mode_lengths.chase_ms > 0,
            "mode lengths must be positive: {:?}",
            self.mode_lengths
        );
        ensure!(self.power_pellet_interval_ms > 0, "power_pellet_interval_ms must be positive");

        let arena = &self.arena;
        ensure!(
            [arena.left, arena.top, arena.right, arena.bottom]
                .iter()
                .all(|v| v.is_finite())
                && arena.left < arena.right
                && arena.top < arena.bottom,
            "arena {arena:?} must be finite and non-empty"
        );

        let player = &self.player;
        ensure!(
            player.speed.is_finite() && player.speed >= 0.0,
            "player speed {} must be finite and non-negative",
            player.speed
        );
        ensure!(
            player.width > 0.0 && player.height > 0.0,
            "player size {}x{} must be positive",
            player.width,
            player.height
        );
        ensure!(
            (0.0..=1.0).contains(&player.turn_probability),
            "turn_probability {} must be within 0..=1",
            player.turn_probability
        );
        ensure!(player.start.position().is_finite(), "player start must be finite");
        ensure!(
            arena.fits(player.start.position(), player.width, player.height),
            "player start ({}, {}) does not fit inside arena {arena:?}",
            player.start.x,
            player.start.y
        );

        for (index, spawn) in self.spawns.iter().enumerate() {
            ensure!(
                arena.fits(spawn.position(), self.ghosts.width, self.ghosts.height),
                "ghost spawn #{index} ({:?}) at ({}, {}) does not fit inside arena {arena:?}",
                spawn.code,
                spawn.x,
                spawn.y
            );
        }

        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SimConfig =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
