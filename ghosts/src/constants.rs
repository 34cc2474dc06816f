// ============================================================================
// Grid
// ============================================================================

pub const TILE_SIZE: f32 = 16.0; // Maze grid unit in distance units

// ============================================================================
// Map Corners
// ============================================================================

pub const RIGHT_X_POSITION_OF_MAP: f32 = 448.0;
pub const TOP_Y_POSITION_OF_MAP: f32 = TILE_SIZE * 3.0;
pub const BOTTOM_Y_POSITION_OF_MAP: f32 = TILE_SIZE * 34.0;

// ============================================================================
// Direction Selection
// ============================================================================

// Ticks a ghost keeps its heading before it may reconsider in SCATTER/CHASE
pub const MIN_DIRECTION_COMMITMENT: u32 = 8;

// ============================================================================
// Targeting
// ============================================================================

pub const PINKY_LOOKAHEAD_TILES: f32 = 4.0;
pub const INKY_LOOKAHEAD_TILES: f32 = 2.0;
pub const CLYDE_SHY_RADIUS_TILES: f32 = 8.0;

// ============================================================================
// Ghost Defaults
// ============================================================================

// Speeds (distance units per tick)
pub const SCATTER_SPEED: f32 = 1.0;
pub const CHASE_SPEED: f32 = 1.2;
pub const FRIGHTENED_SPEED: f32 = 0.6;

// Sprite footprint used for the bounding box
pub const GHOST_WIDTH: f32 = 28.0;
pub const GHOST_HEIGHT: f32 = 28.0;
