use std::sync::Arc;

use bevy_math::Vec2;
use rand::{Rng as _, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    clock::Clock,
    collision::BoundingBox,
    config::{ConfigError, CornerPolicy, GhostConfig},
    direction::Direction,
    ghost::Ghost,
    kinematics::KinematicState,
    mode::GhostMode,
    targeting::GhostType,
};

// ============================================================================
// Ghost Factory
// ============================================================================

// Builds ghosts of one type from level spawn points. Each ghost starts in
// SCATTER with a random heading and gets its own RNG seeded from the factory's.
pub struct GhostFactory {
    ghost_type: GhostType,
    config: GhostConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl GhostFactory {
    // Unknown type codes are rejected here rather than defaulting to a chaser.
    pub fn new(code: char, config: GhostConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        let ghost_type = GhostType::from_code(code).ok_or(ConfigError::UnknownGhostType(code))?;
        Self::for_type(ghost_type, config, clock)
    }

    pub fn for_type(ghost_type: GhostType, config: GhostConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ghost_type,
            config,
            clock,
            rng: StdRng::from_os_rng(),
        })
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub const fn ghost_type(&self) -> GhostType {
        self.ghost_type
    }

    pub fn create(&mut self, position: Vec2) -> Result<Ghost, ConfigError> {
        if !position.is_finite() {
            return Err(ConfigError::InvalidSpawn(position));
        }

        let direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
        let home_corner = match self.config.corner_policy {
            CornerPolicy::ByType => self.config.map.corner_for(self.ghost_type),
            CornerPolicy::Random => {
                let corners = self.config.map.corners();
                corners[self.rng.random_range(0..corners.len())]
            }
        };

        let kinematics = KinematicState::builder()
            .position(position)
            .direction(direction)
            .build();
        let bounding_box = BoundingBox::new(position, self.config.width, self.config.height);

        debug!(
            "spawning {} at {:?} heading {:?}, home corner {:?}",
            self.ghost_type.name(),
            position,
            direction,
            home_corner
        );

        Ok(Ghost::new(
            self.ghost_type,
            kinematics,
            bounding_box,
            GhostMode::Scatter,
            home_corner,
            self.config.speeds,
            Arc::clone(&self.clock),
            StdRng::seed_from_u64(self.rng.random()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::ManualClock, mode::Appearance};

    fn clock() -> Arc<dyn Clock> {
        Arc::new(ManualClock::new(0))
    }

    #[test]
    fn rejects_unknown_type_codes() {
        let result = GhostFactory::new('x', GhostConfig::default(), clock());
        assert!(matches!(result, Err(ConfigError::UnknownGhostType('x'))));
    }

    #[test]
    fn rejects_invalid_config_up_front() {
        let config = GhostConfig {
            height: -1.0,
            ..GhostConfig::default()
        };
        assert!(matches!(
            GhostFactory::new('b', config, clock()),
            Err(ConfigError::InvalidSize { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_spawn() {
        let mut factory = GhostFactory::new('s', GhostConfig::default(), clock()).expect("valid factory");
        let result = factory.create(Vec2::new(f32::NAN, 0.0));
        assert!(matches!(result, Err(ConfigError::InvalidSpawn(_))));
    }

    #[test]
    fn creates_scatter_ghost_at_spawn() {
        let config = GhostConfig::default();
        let mut factory = GhostFactory::new('c', config.clone(), clock())
            .expect("valid factory")
            .with_seed(5);
        let spawn = Vec2::new(224.0, 272.0);
        let ghost = factory.create(spawn).expect("valid ghost");

        assert_eq!(ghost.ghost_type(), GhostType::Clyde);
        assert_eq!(ghost.position(), spawn);
        assert_eq!(ghost.spawn_position(), spawn);
        assert_eq!(ghost.mode(), GhostMode::Scatter);
        assert_eq!(ghost.appearance(), Appearance::Normal);
        assert_eq!(ghost.home_corner(), config.map.corner_for(GhostType::Clyde));
        assert!(ghost.direction().is_some());
        assert!((ghost.width() - config.width).abs() < f32::EPSILON);
    }

    #[test]
    fn same_seed_builds_same_ghosts() {
        let config = GhostConfig {
            corner_policy: CornerPolicy::Random,
            ..GhostConfig::default()
        };
        let build = || {
            let mut factory = GhostFactory::new('i', config.clone(), clock())
                .expect("valid factory")
                .with_seed(99);
            (0..8)
                .map(|i| factory.create(Vec2::new(16.0 * i as f32, 0.0)).expect("valid ghost"))
                .map(|ghost| (ghost.direction(), ghost.home_corner()))
                .collect::<Vec<_>>()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn random_corners_come_from_the_map() {
        let config = GhostConfig {
            corner_policy: CornerPolicy::Random,
            ..GhostConfig::default()
        };
        let corners = config.map.corners();
        let mut factory = GhostFactory::new('b', config, clock())
            .expect("valid factory")
            .with_seed(3);
        for _ in 0..20 {
            let ghost = factory.create(Vec2::ZERO).expect("valid ghost");
            assert!(corners.contains(&ghost.home_corner()));
        }
    }
}
