pub mod collision;
pub mod ghosts;
pub mod player;
pub mod schedule;

pub use self::collision::ghost_player_collision_system;
pub use self::ghosts::{ghosts_directions_system, ghosts_movement_system, ghosts_pursuit_system};
pub use self::player::player_movement_system;
pub use self::schedule::{clock_sync_system, ghosts_mode_system, power_pellet_system};
