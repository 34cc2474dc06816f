use bevy_ecs::prelude::*;
use ghosts::{Direction, Ghost, GhostType, PursuitSnapshot};

use crate::resources::{Arena, PlayerState};

// ============================================================================
// Ghosts Pursuit System
// ============================================================================

// Every ghost sees the same snapshot, taken before anyone moves this tick.
pub fn ghosts_pursuit_system(player: Res<PlayerState>, mut ghost_query: Query<&mut Ghost>) {
    let mut snapshot = PursuitSnapshot::default().with_player(player.position(), player.direction());
    if let Some(blinky) = ghost_query
        .iter()
        .find(|ghost| ghost.ghost_type() == GhostType::Blinky)
    {
        snapshot = snapshot.with_blinky(blinky.position());
    }

    for mut ghost in &mut ghost_query {
        ghost.observe(&snapshot);
    }
}

// ============================================================================
// Ghosts Directions System
// ============================================================================

pub fn ghosts_directions_system(arena: Res<Arena>, mut ghost_query: Query<&mut Ghost>) {
    for mut ghost in &mut ghost_query {
        let legal: Vec<Direction> = arena.legal_directions(ghost.kinematics(), ghost.width(), ghost.height());
        ghost.set_possible_directions(&legal);
    }
}

// ============================================================================
// Ghosts Movement System
// ============================================================================

pub fn ghosts_movement_system(mut ghost_query: Query<&mut Ghost>) {
    for mut ghost in &mut ghost_query {
        ghost.update();
    }
}
