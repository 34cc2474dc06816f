//! Ghost AI for a Pac-Man style maze game.
//!
//! The crate owns the per-frame decision logic only: mode state machine,
//! per-type chase targeting, and the direction selector with its commitment
//! window. Maze topology, the player, and life bookkeeping belong to the level
//! driving the ghosts through [`Level`], [`Renderable`] and the per-tick
//! [`PursuitSnapshot`].

pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod direction;
pub mod factory;
pub mod ghost;
pub mod kinematics;
pub mod level;
pub mod mode;
pub mod selector;
pub mod targeting;

pub use bevy_math::Vec2;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::BoundingBox;
pub use config::{ConfigError, CornerPolicy, GhostConfig, MapBounds};
pub use direction::Direction;
pub use factory::GhostFactory;
pub use ghost::Ghost;
pub use kinematics::KinematicState;
pub use level::{Level, Renderable};
pub use mode::{Appearance, GhostMode, ModeSpeeds};
pub use selector::{Commitment, select_direction};
pub use targeting::{GhostType, PursuitSnapshot, TargetingStrategy};
