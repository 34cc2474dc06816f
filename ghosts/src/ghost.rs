use std::{fmt, sync::Arc};

use bevy_ecs::component::Component;
use bevy_math::Vec2;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::{
    clock::Clock,
    collision::BoundingBox,
    direction::Direction,
    kinematics::KinematicState,
    level::{Level, Renderable},
    mode::{Appearance, GhostMode, ModeSpeeds},
    selector::{Commitment, select_direction},
    targeting::{GhostType, PursuitSnapshot, TargetContext, TargetingStrategy, target_location},
};

// ============================================================================
// Ghost
// ============================================================================

/// A ghost: kinematics, mode state machine, targeting and direction choice.
///
/// The level drives a ghost once per frame: push the pursuit snapshot with
/// [`Ghost::observe`], hand over the legal directions with
/// [`Ghost::set_possible_directions`], then call [`Ghost::update`].
#[derive(Component)]
pub struct Ghost {
    ghost_type: GhostType,
    strategy: &'static dyn TargetingStrategy,
    kinematics: KinematicState,
    bounding_box: BoundingBox,
    spawn_position: Vec2,
    home_corner: Vec2,
    mode: GhostMode,
    speeds: ModeSpeeds,
    target: Vec2,
    pursuit: PursuitSnapshot,
    possible_directions: Vec<Direction>,
    commitment: Commitment,
    frightened: bool,
    frightened_until: Option<u64>,
    appearance: Appearance,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl Ghost {
    #[must_use]
    pub fn new(
        ghost_type: GhostType,
        kinematics: KinematicState,
        bounding_box: BoundingBox,
        mode: GhostMode,
        home_corner: Vec2,
        speeds: ModeSpeeds,
        clock: Arc<dyn Clock>,
        rng: StdRng,
    ) -> Self {
        let mut ghost = Self {
            ghost_type,
            strategy: ghost_type.strategy(),
            kinematics,
            bounding_box,
            spawn_position: kinematics.position(),
            home_corner,
            mode,
            speeds,
            target: home_corner,
            pursuit: PursuitSnapshot::default(),
            possible_directions: Vec::new(),
            commitment: Commitment::default(),
            frightened: false,
            frightened_until: None,
            appearance: Appearance::Normal,
            clock,
            rng,
        };
        ghost.kinematics.set_speed(speeds.get(mode));
        ghost.refresh_target();
        ghost
    }

    // ------------------------------------------------------------------------
    // Per-tick
    // ------------------------------------------------------------------------

    pub fn update(&mut self) {
        if self.frightened
            && let Some(deadline) = self.frightened_until
            && self.clock.now_millis() >= deadline
        {
            self.exit_frightened_mode();
        }
        self.update_direction();
        self.kinematics.advance();
        self.bounding_box.set_top_left(self.kinematics.position());
    }

    fn update_direction(&mut self) {
        let previous = self.kinematics.direction();
        let chosen = select_direction(
            self.mode,
            &self.kinematics,
            &self.possible_directions,
            self.target,
            &mut self.commitment,
            &mut self.rng,
        );

        if let Some(direction) = chosen {
            if chosen != previous {
                trace!("{} turns {:?} -> {:?}", self.ghost_type.name(), previous, direction);
            }
            self.kinematics.face(direction);
        }
    }

    // Refresh the last known positions used for chase targeting. Must run before `update` each tick.
    pub fn observe(&mut self, pursuit: &PursuitSnapshot) {
        self.pursuit = *pursuit;
        self.refresh_target();
    }

    pub fn update_player_position(&mut self, position: Vec2) {
        self.pursuit.player_position = Some(position);
        self.refresh_target();
    }

    pub fn set_blinky_position(&mut self, position: Vec2) {
        self.pursuit.blinky_position = Some(position);
        self.refresh_target();
    }

    fn refresh_target(&mut self) {
        let ctx = TargetContext {
            spawn_position: self.spawn_position,
            home_corner: self.home_corner,
            pursuit: &self.pursuit,
        };
        self.target = target_location(self.mode, self.strategy, &ctx);
    }

    // ------------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------------

    // Scatter/Chase only. A frightened ghost ignores the switch until its window
    // ends, and FRIGHTENED itself is entered through `enter_frightened_mode`.
    pub fn set_ghost_mode(&mut self, mode: GhostMode) {
        if self.frightened || mode == GhostMode::Frightened {
            trace!("{} ignores switch to {:?}", self.ghost_type.name(), mode);
            return;
        }
        if mode != self.mode {
            debug!("{} mode {:?} -> {:?}", self.ghost_type.name(), self.mode, mode);
        }
        self.mode = mode;
        self.kinematics.set_speed(self.speeds.get(mode));
        self.commitment.release();
        self.refresh_target();
    }

    pub fn enter_frightened_mode(&mut self, duration_millis: u64) {
        let deadline = self.clock.now_millis().saturating_add(duration_millis);
        debug!("{} frightened until {}", self.ghost_type.name(), deadline);

        self.mode = GhostMode::Frightened;
        self.frightened = true;
        self.frightened_until = Some(deadline);
        self.kinematics.set_speed(self.speeds.get(GhostMode::Frightened));
        self.appearance = Appearance::Frightened;
        self.refresh_target();
    }

    fn exit_frightened_mode(&mut self) {
        debug!("{} recovers from frightened", self.ghost_type.name());
        self.frightened = false;
        self.frightened_until = None;
        self.set_ghost_mode(GhostMode::Scatter);
        self.appearance = Appearance::Normal;
    }

    // ------------------------------------------------------------------------
    // Collisions
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn collides_with(&self, renderable: &dyn Renderable) -> bool {
        self.bounding_box.collides_with(
            self.kinematics.speed(),
            self.kinematics.direction(),
            &renderable.bounding_box(),
        )
    }

    pub fn collide_with(&mut self, level: &mut dyn Level, renderable: &dyn Renderable) {
        if level.is_player(renderable) && self.frightened {
            level.handle_lose_life();
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        debug!("{} resets to {:?}", self.ghost_type.name(), self.spawn_position);
        self.kinematics = KinematicState::builder()
            .position(self.spawn_position)
            .speed(self.speeds.get(GhostMode::Scatter))
            .build();
        self.bounding_box.set_top_left(self.spawn_position);
        self.mode = GhostMode::Scatter;
        self.commitment.release();
        self.frightened = false;
        self.frightened_until = None;
        self.appearance = Appearance::Normal;
        self.refresh_target();
    }

    // ------------------------------------------------------------------------
    // Setup mutators
    // ------------------------------------------------------------------------

    pub fn set_possible_directions(&mut self, directions: &[Direction]) {
        self.possible_directions.clear();
        self.possible_directions.extend_from_slice(directions);
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.kinematics.set_position(position);
        self.bounding_box.set_top_left(position);
    }

    pub const fn set_speeds(&mut self, speeds: ModeSpeeds) {
        self.speeds = speeds;
        self.kinematics.set_speed(speeds.get(self.mode));
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[must_use]
    pub const fn ghost_type(&self) -> GhostType {
        self.ghost_type
    }

    #[must_use]
    pub const fn mode(&self) -> GhostMode {
        self.mode
    }

    #[must_use]
    pub const fn is_frightened(&self) -> bool {
        self.frightened
    }

    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.kinematics.position()
    }

    #[must_use]
    pub const fn previous_position(&self) -> Vec2 {
        self.kinematics.previous_position()
    }

    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.kinematics.direction()
    }

    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.kinematics.speed()
    }

    #[must_use]
    pub const fn kinematics(&self) -> &KinematicState {
        &self.kinematics
    }

    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.bounding_box.center()
    }

    #[must_use]
    pub const fn width(&self) -> f32 {
        self.bounding_box.width()
    }

    #[must_use]
    pub const fn height(&self) -> f32 {
        self.bounding_box.height()
    }

    #[must_use]
    pub const fn spawn_position(&self) -> Vec2 {
        self.spawn_position
    }

    #[must_use]
    pub const fn home_corner(&self) -> Vec2 {
        self.home_corner
    }

    #[must_use]
    pub const fn target_location(&self) -> Vec2 {
        self.target
    }

    #[must_use]
    pub const fn pursuit(&self) -> &PursuitSnapshot {
        &self.pursuit
    }

    #[must_use]
    pub fn possible_directions(&self) -> &[Direction] {
        &self.possible_directions
    }

    #[must_use]
    pub const fn direction_count(&self) -> u32 {
        self.commitment.count()
    }
}

impl Renderable for Ghost {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    fn position(&self) -> Vec2 {
        self.kinematics.position()
    }
}

impl fmt::Debug for Ghost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ghost")
            .field("ghost_type", &self.ghost_type)
            .field("mode", &self.mode)
            .field("frightened", &self.frightened)
            .field("position", &self.kinematics.position())
            .field("direction", &self.kinematics.direction())
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
