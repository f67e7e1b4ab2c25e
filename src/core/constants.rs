/// Particle field tuning constants.
///
/// `FieldParams::default()` is built from these; keep them in one place so the
/// canvas and the tests agree on thresholds.
// Surface area (px²) that "pays" for one particle
pub const AREA_PER_PARTICLE: f64 = 15_000.0;

// Pairwise link cutoff (exclusive) and peak link alpha
pub const LINK_DISTANCE: f64 = 100.0;
pub const LINK_ALPHA_MAX: f64 = 0.2;
pub const LINK_LINE_WIDTH: f64 = 1.0;

// Pointer interaction radius (exclusive) and per-frame nudge divisor
pub const POINTER_RADIUS: f64 = 100.0;
pub const POINTER_NUDGE_DIVISOR: f64 = 20.0;

// Sampling ranges, half-open [start, end)
pub const SIZE_MIN: f64 = 1.0;
pub const SIZE_MAX: f64 = 4.0;
pub const SPEED_MIN: f64 = -0.5;
pub const SPEED_MAX: f64 = 0.5;
pub const OPACITY_MIN: f64 = 0.2;
pub const OPACITY_MAX: f64 = 0.7;

// Accent blue used for dots and links
pub const PARTICLE_RGB: [u8; 3] = [59, 130, 246];
