//! Per-ghost chase targeting.
//!
//! Every ghost type owns one [`TargetingStrategy`] picked when the ghost is
//! built. Strategies are pure: they only read the [`TargetContext`] and return
//! the point the ghost should steer toward while in CHASE. SCATTER and
//! FRIGHTENED always steer toward the home corner, see [`target_location`].

use bevy_math::Vec2;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{CLYDE_SHY_RADIUS_TILES, INKY_LOOKAHEAD_TILES, PINKY_LOOKAHEAD_TILES, TILE_SIZE},
    direction::Direction,
    mode::GhostMode,
};

// ============================================================================
// Ghost Type
// ============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    pub const ALL: [Self; 4] = [Self::Blinky, Self::Pinky, Self::Inky, Self::Clyde];

    /// Maps the one-letter level code to a ghost type. Pinky is `'s'` (Speedy).
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(Self::Blinky),
            's' => Some(Self::Pinky),
            'i' => Some(Self::Inky),
            'c' => Some(Self::Clyde),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Blinky => 'b',
            Self::Pinky => 's',
            Self::Inky => 'i',
            Self::Clyde => 'c',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blinky => "Blinky",
            Self::Pinky => "Pinky",
            Self::Inky => "Inky",
            Self::Clyde => "Clyde",
        }
    }

    #[must_use]
    pub fn strategy(self) -> &'static dyn TargetingStrategy {
        match self {
            Self::Blinky => &DirectChase,
            Self::Pinky => &Ambush,
            Self::Inky => &Flank,
            Self::Clyde => &Shy,
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Last known positions pushed to a ghost by the level once per tick.
///
/// Fields stay `None` until the level has supplied them this run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PursuitSnapshot {
    pub player_position: Option<Vec2>,
    pub player_direction: Option<Direction>,
    pub blinky_position: Option<Vec2>,
}

impl PursuitSnapshot {
    #[must_use]
    pub const fn with_player(mut self, position: Vec2, direction: Option<Direction>) -> Self {
        self.player_position = Some(position);
        self.player_direction = direction;
        self
    }

    #[must_use]
    pub const fn with_blinky(mut self, position: Vec2) -> Self {
        self.blinky_position = Some(position);
        self
    }

    // Player position pushed `tiles` ahead along the player's facing. An unknown facing adds nothing.
    fn player_ahead(&self, player: Vec2, tiles: f32) -> Vec2 {
        let facing = self.player_direction.map_or(Vec2::ZERO, Direction::to_vec);
        player + facing * (tiles * TILE_SIZE)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TargetContext<'a> {
    pub spawn_position: Vec2,
    pub home_corner: Vec2,
    pub pursuit: &'a PursuitSnapshot,
}

// ============================================================================
// Strategies
// ============================================================================

pub trait TargetingStrategy: Send + Sync {
    fn chase_target(&self, ctx: &TargetContext<'_>) -> Vec2;
}

// Blinky: straight at the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectChase;

impl TargetingStrategy for DirectChase {
    fn chase_target(&self, ctx: &TargetContext<'_>) -> Vec2 {
        ctx.pursuit.player_position.unwrap_or(ctx.home_corner)
    }
}

// Pinky: four tiles ahead of where the player is facing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ambush;

impl TargetingStrategy for Ambush {
    fn chase_target(&self, ctx: &TargetContext<'_>) -> Vec2 {
        ctx.pursuit.player_position.map_or(ctx.home_corner, |player| {
            ctx.pursuit.player_ahead(player, PINKY_LOOKAHEAD_TILES)
        })
    }
}

// Clyde: chases only while the player is more than eight tiles from Clyde's spawn point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shy;

impl TargetingStrategy for Shy {
    fn chase_target(&self, ctx: &TargetContext<'_>) -> Vec2 {
        match ctx.pursuit.player_position {
            Some(player) if ctx.spawn_position.distance(player) > CLYDE_SHY_RADIUS_TILES * TILE_SIZE => player,
            _ => ctx.home_corner,
        }
    }
}

// Inky: doubles the vector from Blinky to two tiles ahead of the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flank;

impl TargetingStrategy for Flank {
    fn chase_target(&self, ctx: &TargetContext<'_>) -> Vec2 {
        let (Some(player), Some(blinky)) = (ctx.pursuit.player_position, ctx.pursuit.blinky_position) else {
            return ctx.home_corner;
        };
        let two_ahead = ctx.pursuit.player_ahead(player, INKY_LOOKAHEAD_TILES);
        blinky + (two_ahead - blinky) * 2.0
    }
}

#[must_use]
pub fn target_location(mode: GhostMode, strategy: &dyn TargetingStrategy, ctx: &TargetContext<'_>) -> Vec2 {
    match mode {
        GhostMode::Chase => strategy.chase_target(ctx),
        GhostMode::Scatter | GhostMode::Frightened => ctx.home_corner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAWN: Vec2 = Vec2::new(200.0, 200.0);
    const CORNER: Vec2 = Vec2::new(0.0, 48.0);

    fn chase(ghost_type: GhostType, pursuit: &PursuitSnapshot) -> Vec2 {
        let ctx = TargetContext {
            spawn_position: SPAWN,
            home_corner: CORNER,
            pursuit,
        };
        target_location(GhostMode::Chase, ghost_type.strategy(), &ctx)
    }

    #[test]
    fn codes_round_trip() {
        for ghost_type in GhostType::ALL {
            assert_eq!(GhostType::from_code(ghost_type.code()), Some(ghost_type));
        }
        assert_eq!(GhostType::from_code('p'), None);
    }

    #[test]
    fn scatter_and_frightened_target_home_corner() {
        let pursuit = PursuitSnapshot::default().with_player(Vec2::new(10.0, 10.0), Some(Direction::Left));
        let ctx = TargetContext {
            spawn_position: SPAWN,
            home_corner: CORNER,
            pursuit: &pursuit,
        };
        for ghost_type in GhostType::ALL {
            assert_eq!(target_location(GhostMode::Scatter, ghost_type.strategy(), &ctx), CORNER);
            assert_eq!(target_location(GhostMode::Frightened, ghost_type.strategy(), &ctx), CORNER);
        }
    }

    #[test]
    fn blinky_targets_player() {
        let player = Vec2::new(120.0, 64.0);
        let pursuit = PursuitSnapshot::default().with_player(player, Some(Direction::Up));
        assert_eq!(chase(GhostType::Blinky, &pursuit), player);
    }

    #[test]
    fn pinky_targets_four_tiles_ahead_of_player_facing() {
        let player = Vec2::new(120.0, 64.0);
        let pursuit = PursuitSnapshot::default().with_player(player, Some(Direction::Right));
        assert_eq!(chase(GhostType::Pinky, &pursuit), Vec2::new(184.0, 64.0));

        let facing_up = PursuitSnapshot::default().with_player(player, Some(Direction::Up));
        assert_eq!(chase(GhostType::Pinky, &facing_up), Vec2::new(120.0, 0.0));

        // No facing yet: no look-ahead, Pinky aims at the player itself.
        let facing_unknown = PursuitSnapshot::default().with_player(player, None);
        assert_eq!(chase(GhostType::Pinky, &facing_unknown), player);
    }

    #[test]
    fn clyde_chases_only_beyond_eight_tiles_from_spawn() {
        let far = Vec2::new(SPAWN.x + 128.5, SPAWN.y);
        let pursuit = PursuitSnapshot::default().with_player(far, None);
        assert_eq!(chase(GhostType::Clyde, &pursuit), far);

        let near = Vec2::new(SPAWN.x, SPAWN.y - 40.0);
        let pursuit = PursuitSnapshot::default().with_player(near, None);
        assert_eq!(chase(GhostType::Clyde, &pursuit), CORNER);
    }

    #[test]
    fn clyde_boundary_at_exactly_eight_tiles_goes_home() {
        let boundary = Vec2::new(SPAWN.x + 128.0, SPAWN.y);
        let pursuit = PursuitSnapshot::default().with_player(boundary, None);
        assert_eq!(chase(GhostType::Clyde, &pursuit), CORNER);
    }

    #[test]
    fn inky_doubles_vector_from_blinky() {
        let player = Vec2::new(100.0, 100.0);
        let blinky = Vec2::new(80.0, 100.0);
        let pursuit = PursuitSnapshot::default()
            .with_player(player, Some(Direction::Down))
            .with_blinky(blinky);

        // two ahead = (100, 132); blinky + 2 * (20, 32) = (120, 164)
        assert_eq!(chase(GhostType::Inky, &pursuit), Vec2::new(120.0, 164.0));
    }

    #[test]
    fn inky_falls_back_to_corner_without_prerequisites() {
        let player_only = PursuitSnapshot::default().with_player(Vec2::new(1.0, 2.0), None);
        assert_eq!(chase(GhostType::Inky, &player_only), CORNER);

        let blinky_only = PursuitSnapshot::default().with_blinky(Vec2::new(1.0, 2.0));
        assert_eq!(chase(GhostType::Inky, &blinky_only), CORNER);

        assert_eq!(chase(GhostType::Inky, &PursuitSnapshot::default()), CORNER);
    }

    #[test]
    fn unknown_player_falls_back_to_corner() {
        let empty = PursuitSnapshot::default();
        for ghost_type in GhostType::ALL {
            assert_eq!(chase(ghost_type, &empty), CORNER);
        }
    }
}
