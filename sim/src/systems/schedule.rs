use bevy_ecs::prelude::*;
use bevy_time::Time;
use ghosts::Ghost;
use tracing::info;

use crate::resources::{ModeSchedule, PelletSchedule, SimClock};

// ============================================================================
// Clock Sync System
// ============================================================================

// Absent when ghosts read the wall clock instead.
pub fn clock_sync_system(time: Res<Time>, clock: Option<Res<SimClock>>) {
    if let Some(clock) = clock {
        clock.sync(time.elapsed());
    }
}

// ============================================================================
// Ghosts Mode System
// ============================================================================

// Frightened ghosts sit out the alternation until they recover.
pub fn ghosts_mode_system(time: Res<Time>, mut schedule: ResMut<ModeSchedule>, mut ghost_query: Query<&mut Ghost>) {
    let Some(mode) = schedule.tick(time.delta()) else {
        return;
    };

    info!("ghosts switch to {:?}", mode);
    for mut ghost in &mut ghost_query {
        if !ghost.is_frightened() {
            ghost.set_ghost_mode(mode);
        }
    }
}

// ============================================================================
// Power Pellet System
// ============================================================================

pub fn power_pellet_system(time: Res<Time>, mut pellets: ResMut<PelletSchedule>, mut ghost_query: Query<&mut Ghost>) {
    if !pellets.tick(time.delta()) {
        return;
    }

    let duration = pellets.frightened_ms();
    info!("power pellet eaten, ghosts frightened for {}ms", duration);
    for mut ghost in &mut ghost_query {
        ghost.enter_frightened_mode(duration);
    }
}
