use bevy_math::Vec2;

use crate::direction::Direction;

// ============================================================================
// Helpers
// ============================================================================

// Check if two 1D ranges overlap.
#[must_use]
pub fn ranges_overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max >= b_min && a_min <= b_max
}

// ============================================================================
// Bounding Box
// ============================================================================

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    top_left: Vec2,
    width: f32,
    height: f32,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(top_left: Vec2, width: f32, height: f32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub const fn set_top_left(&mut self, top_left: Vec2) {
        self.top_left = top_left;
    }

    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn left_x(&self) -> f32 {
        self.top_left.x
    }

    #[must_use]
    pub fn right_x(&self) -> f32 {
        self.top_left.x + self.width
    }

    #[must_use]
    pub fn top_y(&self) -> f32 {
        self.top_left.y
    }

    #[must_use]
    pub fn bottom_y(&self) -> f32 {
        self.top_left.y + self.height
    }

    #[must_use]
    pub fn middle_x(&self) -> f32 {
        self.top_left.x + self.width / 2.0
    }

    #[must_use]
    pub fn middle_y(&self) -> f32 {
        self.top_left.y + self.height / 2.0
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.middle_x(), self.middle_y())
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        ranges_overlap_1d(self.left_x(), self.right_x(), other.left_x(), other.right_x())
            && ranges_overlap_1d(self.top_y(), self.bottom_y(), other.top_y(), other.bottom_y())
    }

    // Predictive check: this box is moved one tick ahead (speed along direction) before testing
    // against `other`. With no heading the box is tested in place.
    #[must_use]
    pub fn collides_with(&self, speed: f32, direction: Option<Direction>, other: &Self) -> bool {
        let offset = direction.map_or(Vec2::ZERO, |dir| dir.to_vec() * speed);
        let ahead = Self::new(self.top_left + offset, self.width, self.height);
        ahead.overlaps(other)
    }
}
