use bevy_ecs::prelude::*;

use crate::resources::{Arena, PlayerState};

// ============================================================================
// Player Movement System
// ============================================================================

pub fn player_movement_system(arena: Res<Arena>, mut player: ResMut<PlayerState>) {
    player.step(&arena);
}
