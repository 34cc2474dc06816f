use bevy_ecs::prelude::*;
use ghosts::{Ghost, Renderable};

use crate::resources::{LevelHooks, Lives, PlayerState};

// ============================================================================
// Ghost Player Collision System
// ============================================================================

pub fn ghost_player_collision_system(
    player: Res<PlayerState>,
    mut lives: ResMut<Lives>,
    mut ghost_query: Query<&mut Ghost>,
) {
    let player_box = player.bounding_box();

    for mut ghost in &mut ghost_query {
        if lives.is_game_over() {
            break;
        }
        if !ghost.collides_with(&*player) {
            continue;
        }

        let mut hooks = LevelHooks {
            lives: &mut lives,
            player_box,
        };
        ghost.collide_with(&mut hooks, &*player);
    }
}
