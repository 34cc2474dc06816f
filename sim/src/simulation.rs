use std::{fmt, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use bevy_ecs::prelude::*;
use bevy_time::Time;
use ghosts::{Clock, Ghost, GhostFactory, GhostMode, GhostType, SystemClock, Vec2};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::{
    config::SimConfig,
    resources::{Arena, Lives, ModeSchedule, PelletSchedule, PlayerState, SimClock},
    systems::{
        clock_sync_system, ghost_player_collision_system, ghosts_directions_system, ghosts_mode_system,
        ghosts_movement_system, ghosts_pursuit_system, player_movement_system, power_pellet_system,
    },
};

// ============================================================================
// Run Summary
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct GhostSummary {
    pub ghost_type: GhostType,
    pub position: Vec2,
    pub mode: GhostMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub lives_left: u32,
    pub captures: u32,
    pub ghosts: Vec<GhostSummary>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ticks, {} lives left, {} captures",
            self.ticks, self.lives_left, self.captures
        )?;
        for ghost in &self.ghosts {
            writeln!(
                f,
                "  {:<6} at ({:.1}, {:.1}) in {:?}",
                ghost.ghost_type.name(),
                ghost.position.x,
                ghost.position.y,
                ghost.mode
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Simulation
// ============================================================================

pub struct Simulation {
    world: World,
    schedule: Schedule,
    tick: Duration,
    ticks_run: u64,
}

impl Simulation {
    // Ghosts read a manual clock that follows the simulated time.
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self> {
        let sim_clock = SimClock::new(0);
        let clock: Arc<dyn Clock> = Arc::new(sim_clock.clock.clone());
        Self::build(config, seed, clock, Some(sim_clock))
    }

    // Ghosts read the wall clock.
    pub fn with_system_clock(config: &SimConfig, seed: u64) -> Result<Self> {
        Self::build(config, seed, Arc::new(SystemClock), None)
    }

    fn build(config: &SimConfig, seed: u64, clock: Arc<dyn Clock>, sim_clock: Option<SimClock>) -> Result<Self> {
        config.validate()?;

        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(Arena::from_config(&config.arena));
        world.insert_resource(PlayerState::new(&config.player, seed));
        world.insert_resource(Lives::new(config.lives));
        world.insert_resource(ModeSchedule::new(config.mode_lengths));
        world.insert_resource(PelletSchedule::new(
            config.power_pellet_interval_ms,
            config.frightened_ms,
        ));
        if let Some(sim_clock) = sim_clock {
            world.insert_resource(sim_clock);
        }

        for (index, spawn) in config.spawns.iter().enumerate() {
            let ghost_seed = seed.wrapping_add(index as u64 + 1);
            let ghost = GhostFactory::new(spawn.code, config.ghosts.clone(), Arc::clone(&clock))
                .and_then(|factory| factory.with_seed(ghost_seed).create(spawn.position()))
                .with_context(|| format!("failed to spawn ghost #{index} ({:?})", spawn.code))?;
            world.spawn(ghost);
        }
        info!("spawned {} ghosts", config.spawns.len());

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                clock_sync_system,
                ghosts_mode_system,
                power_pellet_system,
                player_movement_system,
                ghosts_pursuit_system,
                ghosts_directions_system,
                ghosts_movement_system,
                ghost_player_collision_system,
            )
                .chain(),
        );

        Ok(Self {
            world,
            schedule,
            tick: Duration::from_millis(config.tick_ms),
            ticks_run: 0,
        })
    }

    #[must_use]
    pub const fn tick_duration(&self) -> Duration {
        self.tick
    }

    #[must_use]
    pub const fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.world.resource::<Lives>().is_game_over()
    }

    pub fn step(&mut self) {
        self.step_by(self.tick);
    }

    pub fn step_by(&mut self, delta: Duration) {
        self.world.resource_mut::<Time>().advance_by(delta);
        self.schedule.run(&mut self.world);
        self.ticks_run += 1;
    }

    pub fn summary(&mut self) -> RunSummary {
        let lives = *self.world.resource::<Lives>();
        let ghosts = self
            .world
            .query::<&Ghost>()
            .iter(&self.world)
            .map(|ghost| GhostSummary {
                ghost_type: ghost.ghost_type(),
                position: ghost.position(),
                mode: ghost.mode(),
            })
            .collect();

        RunSummary {
            ticks: self.ticks_run,
            lives_left: lives.remaining(),
            captures: lives.captures(),
            ghosts,
        }
    }
}

// ============================================================================
// Drivers
// ============================================================================

// Runs up to `ticks` fixed steps as fast as possible, stopping early when the
// player is out of lives.
pub fn run_stepped(config: &SimConfig, ticks: u64, seed: u64) -> Result<RunSummary> {
    let mut sim = Simulation::new(config, seed)?;
    while sim.ticks_run() < ticks && !sim.is_over() {
        sim.step();
    }
    debug!("stepped run finished after {} ticks", sim.ticks_run());
    Ok(sim.summary())
}

// Runs against the wall clock at one tick per `tick_ms`.
pub async fn run_realtime(config: &SimConfig, ticks: u64, seed: u64) -> Result<RunSummary> {
    let mut sim = Simulation::with_system_clock(config, seed)?;
    let tick_duration = sim.tick_duration();
    let mut interval = time::interval(tick_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("starting realtime loop at {}ms per tick", tick_duration.as_millis());

    let mut last_tick = Instant::now();
    while sim.ticks_run() < ticks && !sim.is_over() {
        interval.tick().await;

        let update_start = Instant::now();
        sim.step_by(update_start - last_tick);
        last_tick = update_start;
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "tick {} took {:.2}ms (exceeded {:.2}ms budget)",
                sim.ticks_run(),
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        }
    }

    Ok(sim.summary())
}
