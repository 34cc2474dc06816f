use std::time::Duration;

use bevy_ecs::prelude::*;
use bevy_time::{Timer, TimerMode};
use ghosts::{
    BoundingBox, Direction, GhostMode, KinematicState, Level, ManualClock, Renderable, Vec2,
    direction::forward_directions,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::config::{ArenaConfig, ModeLengths, PlayerConfig};

// ============================================================================
// Arena
// ============================================================================

// Open rectangle standing in for the maze. A direction is legal when the
// footprint after one step stays inside.
#[derive(Resource, Copy, Clone, Debug, PartialEq)]
pub struct Arena {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl Arena {
    #[must_use]
    pub const fn from_config(config: &ArenaConfig) -> Self {
        Self {
            top_left: Vec2::new(config.left, config.top),
            bottom_right: Vec2::new(config.right, config.bottom),
        }
    }

    #[must_use]
    pub fn contains(&self, bbox: &BoundingBox) -> bool {
        bbox.left_x() >= self.top_left.x
            && bbox.right_x() <= self.bottom_right.x
            && bbox.top_y() >= self.top_left.y
            && bbox.bottom_y() <= self.bottom_right.y
    }

    #[must_use]
    pub fn legal_directions(&self, kinematics: &KinematicState, width: f32, height: f32) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                let next = BoundingBox::new(kinematics.potential_position(direction), width, height);
                self.contains(&next)
            })
            .collect()
    }
}

// ============================================================================
// Player
// ============================================================================

// A wandering stand-in for the human player: keeps its heading until blocked,
// with an occasional random turn.
#[derive(Resource, Debug)]
pub struct PlayerState {
    kinematics: KinematicState,
    width: f32,
    height: f32,
    turn_probability: f64,
    rng: StdRng,
}

impl PlayerState {
    #[must_use]
    pub fn new(config: &PlayerConfig, seed: u64) -> Self {
        Self {
            kinematics: KinematicState::builder()
                .position(config.start.position())
                .speed(config.speed)
                .build(),
            width: config.width,
            height: config.height,
            turn_probability: config.turn_probability,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.kinematics.position()
    }

    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.kinematics.direction()
    }

    pub fn step(&mut self, arena: &Arena) {
        let legal = arena.legal_directions(&self.kinematics, self.width, self.height);
        let current = self.kinematics.direction();
        let blocked = current.is_none_or(|direction| !legal.contains(&direction));

        if blocked || self.rng.random_bool(self.turn_probability) {
            let options = forward_directions(&legal, current);
            if let Some(direction) = pick_direction(&mut self.rng, &options) {
                self.kinematics.face(direction);
            } else {
                return;
            }
        }

        self.kinematics.advance();
    }
}

impl Renderable for PlayerState {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.kinematics.position(), self.width, self.height)
    }
}

fn pick_direction(rng: &mut impl Rng, options: &[Direction]) -> Option<Direction> {
    if options.is_empty() {
        None
    } else {
        Some(options[rng.random_range(0..options.len())])
    }
}

// ============================================================================
// Lives
// ============================================================================

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives {
    remaining: u32,
    captures: u32,
}

impl Lives {
    #[must_use]
    pub const fn new(lives: u32) -> Self {
        Self {
            remaining: lives,
            captures: 0,
        }
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn captures(&self) -> u32 {
        self.captures
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.remaining == 0
    }

    pub const fn lose_one(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        self.captures = self.captures.saturating_add(1);
    }
}

// Level hooks handed to a ghost while it resolves a collision with the player.
pub struct LevelHooks<'a> {
    pub lives: &'a mut Lives,
    pub player_box: BoundingBox,
}

impl Level for LevelHooks<'_> {
    fn is_player(&self, renderable: &dyn Renderable) -> bool {
        renderable.bounding_box() == self.player_box
    }

    fn handle_lose_life(&mut self) {
        self.lives.lose_one();
        info!("player caught, {} lives left", self.lives.remaining());
    }
}

// ============================================================================
// Schedules
// ============================================================================

// Level-wide Scatter/Chase alternation, starting in Scatter.
#[derive(Resource, Debug)]
pub struct ModeSchedule {
    mode: GhostMode,
    lengths: ModeLengths,
    timer: Timer,
}

impl ModeSchedule {
    #[must_use]
    pub fn new(lengths: ModeLengths) -> Self {
        let mode = GhostMode::Scatter;
        Self {
            mode,
            lengths,
            timer: phase_timer(lengths, mode),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GhostMode {
        self.mode
    }

    // Returns the mode in force after `delta` when at least one phase ran out.
    // Time past the end of a phase counts toward the next one, so a long delta
    // can cross several phases.
    pub fn tick(&mut self, delta: Duration) -> Option<GhostMode> {
        let mut switched = None;
        let mut left = delta;
        loop {
            let remaining = self.timer.remaining();
            if left < remaining {
                self.timer.tick(left);
                return switched;
            }
            left -= remaining;
            self.mode = self.mode.next();
            self.timer = phase_timer(self.lengths, self.mode);
            switched = Some(self.mode);
        }
    }
}

// Phases last at least a millisecond so `tick` always makes progress.
fn phase_timer(lengths: ModeLengths, mode: GhostMode) -> Timer {
    Timer::new(Duration::from_millis(lengths.millis(mode).max(1)), TimerMode::Once)
}

// Fires a power pellet at a fixed interval.
#[derive(Resource, Debug)]
pub struct PelletSchedule {
    timer: Timer,
    frightened_ms: u64,
}

impl PelletSchedule {
    #[must_use]
    pub fn new(interval_ms: u64, frightened_ms: u64) -> Self {
        Self {
            timer: Timer::new(Duration::from_millis(interval_ms), TimerMode::Repeating),
            frightened_ms,
        }
    }

    #[must_use]
    pub const fn frightened_ms(&self) -> u64 {
        self.frightened_ms
    }

    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).just_finished()
    }
}

// ============================================================================
// Clock
// ============================================================================

// Manual clock shared with every ghost, kept in step with the simulated time.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    pub clock: ManualClock,
    pub start_millis: u64,
}

impl SimClock {
    #[must_use]
    pub fn new(start_millis: u64) -> Self {
        Self {
            clock: ManualClock::new(start_millis),
            start_millis,
        }
    }

    pub fn sync(&self, elapsed: Duration) {
        let elapsed_millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.clock.set(self.start_millis.saturating_add(elapsed_millis));
    }
}
