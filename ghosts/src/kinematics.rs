use bevy_math::Vec2;

use crate::direction::Direction;

// ============================================================================
// Kinematic State
// ============================================================================

// Position, heading and scalar speed of a moving entity. Headings are staged
// with `face` and only take effect on the next `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    position: Vec2,
    previous_position: Vec2,
    direction: Option<Direction>,
    speed: f32,
}

impl KinematicState {
    #[must_use]
    pub const fn builder() -> KinematicStateBuilder {
        KinematicStateBuilder {
            position: Vec2::ZERO,
            direction: None,
            speed: 0.0,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub const fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub const fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub const fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    // Where the entity would be after one tick heading in `direction`.
    #[must_use]
    pub fn potential_position(&self, direction: Direction) -> Vec2 {
        self.position + direction.to_vec() * self.speed
    }

    pub const fn face(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    pub const fn up(&mut self) {
        self.face(Direction::Up);
    }

    pub const fn down(&mut self) {
        self.face(Direction::Down);
    }

    pub const fn left(&mut self) {
        self.face(Direction::Left);
    }

    pub const fn right(&mut self) {
        self.face(Direction::Right);
    }

    pub fn advance(&mut self) {
        self.previous_position = self.position;
        if let Some(direction) = self.direction {
            self.position = self.potential_position(direction);
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KinematicStateBuilder {
    position: Vec2,
    direction: Option<Direction>,
    speed: f32,
}

impl KinematicStateBuilder {
    #[must_use]
    pub const fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub const fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub const fn build(self) -> KinematicState {
        KinematicState {
            position: self.position,
            previous_position: self.position,
            direction: self.direction,
            speed: self.speed,
        }
    }
}
