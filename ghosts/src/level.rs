use bevy_math::Vec2;

use crate::collision::BoundingBox;

// ============================================================================
// Collaborator Seams
// ============================================================================

// Anything on the board with a footprint that ghosts can collide with.
pub trait Renderable {
    fn bounding_box(&self) -> BoundingBox;

    fn position(&self) -> Vec2 {
        self.bounding_box().top_left()
    }
}

// The level-side hooks a ghost calls when a collision resolves.
pub trait Level {
    fn is_player(&self, renderable: &dyn Renderable) -> bool;

    fn handle_lose_life(&mut self);
}
