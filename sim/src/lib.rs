//! Headless level driver for the ghost AI: an open arena, a wandering player,
//! level-wide Scatter/Chase alternation and timed power pellets, run on a
//! `bevy_ecs` schedule.

pub mod config;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use config::{SimConfig, init_tracing, load_config};
pub use simulation::{GhostSummary, RunSummary, Simulation, run_realtime, run_stepped};
