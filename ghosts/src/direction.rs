use bevy_math::Vec2;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Direction
// ============================================================================

// Screen coordinates: y grows downward, so Up is (0, -1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Enumeration order is also the tie-break order of the direction selector.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[must_use]
    pub const fn to_vec(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// Returns `options` in `Direction::ALL` order with duplicates dropped.
#[must_use]
pub fn ordered_directions(options: &[Direction]) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|dir| options.contains(dir))
        .collect()
}

// Drops the reverse of `current` unless it is the only option left.
#[must_use]
pub fn forward_directions(options: &[Direction], current: Option<Direction>) -> Vec<Direction> {
    let ordered = ordered_directions(options);
    let Some(current) = current else {
        return ordered;
    };
    if ordered.len() <= 1 {
        return ordered;
    }
    ordered.into_iter().filter(|dir| *dir != current.opposite()).collect()
}
