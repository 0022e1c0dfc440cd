/// Animation tuning constants for the cursor follower and particle field.
///
/// These constants express intended behavior (smoothing factors, spawn
/// ranges, wrap margins) and keep magic numbers out of the update code.
// Trail easing: fraction of the remaining distance covered per frame
pub const TRAIL_SMOOTHING: f32 = 0.15;

// Cursor visual state
pub const DOT_SCALE_HOVER: f32 = 2.5;
pub const DOT_SCALE_REST: f32 = 1.0;
pub const RING_SCALE_HOVER: f32 = 2.0;
pub const RING_SCALE_REST: f32 = 1.0;
pub const RING_OPACITY_HOVER: f32 = 0.8;
pub const RING_OPACITY_REST: f32 = 0.4;

// Particle population
pub const PARTICLE_COUNT: usize = 60;

// Spawn ranges (surface px / per-frame px / alpha)
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_MAX: f32 = 2.5;
pub const PARTICLE_SPEED_MIN: f32 = 0.5;
pub const PARTICLE_SPEED_MAX: f32 = 1.5;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;

// Initial spawn band below the bottom edge
pub const PARTICLE_SPAWN_DEPTH: f32 = 100.0;
// Distance past the top edge before a particle wraps, and below the bottom edge where it reappears
pub const PARTICLE_WRAP_MARGIN: f32 = 10.0;

// Palette
pub const GOLD_HEX: &str = "#D4AF37";
pub const FLAMINGO_HEX: &str = "#F28CAE";

// Navigation turns opaque once the page has scrolled past this many px
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
