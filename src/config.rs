/// Game settings — every tunable constant in one place.
///
/// Positions are terminal cells (`f32`), speeds are cells per second, and
/// timer values are milliseconds on the shared game clock. Ranges are
/// `[lo, hi)` pairs sampled with the injected RNG.

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Target frame duration in milliseconds (≈30 FPS).
pub const FRAME_MS: u64 = 33;

// ── Background parallax ───────────────────────────────────────────────────────

/// Scroll speed of the far mountain layer, cells/sec.
pub const MOUNTAIN_SCROLL_SPEED: f32 = 4.0;
/// Scroll speed of the near tree layer, cells/sec.
pub const TREE_SCROLL_SPEED: f32 = 18.0;

// ── High score ────────────────────────────────────────────────────────────────

pub const HIGH_SCORE_FILE: &str = ".get_ducked_score";

// ── Player ────────────────────────────────────────────────────────────────────

pub const MAX_HEALTH: i32 = 100;
/// Constant downward pull, cells/sec².
pub const GRAVITY: f32 = 7.0;
/// Acceleration applied while a direction key is held, cells/sec².
pub const INPUT_IMPULSE: f32 = 30.0;
/// Horizontal drag factor applied to velocity each second.
pub const FRICTION: f32 = -0.8;
/// Wing-flap animation interval.
pub const FLAP_MS: u64 = 80;
/// Interval between dying-animation frames.
pub const DYING_FRAME_MS: u64 = 200;
/// Pause on the final dying frame before the game-over transition.
pub const DYING_LINGER_MS: u64 = 500;
/// Upward nudge when a bullet connects, cells.
pub const BULLET_KNOCKUP: f32 = 2.0;
/// Downward shove when an airplane clips the duck, cells.
pub const PLANE_KNOCKDOWN: f32 = 8.0;

// ── Hunters ───────────────────────────────────────────────────────────────────

pub const HUNTER_COUNT: usize = 2;
pub const DRIFT_SPEED: [f32; 2] = [6.0, 12.0];
/// Aim-cycle animation interval range, re-randomized on every frame advance.
pub const AIM_MS: [u64; 2] = [500, 1500];
pub const HUNTER_SHOT_MS: [u64; 2] = [1500, 4000];

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Vertical speed range; negative means upward, toward the duck.
pub const BULLET_SPEED: [f32; 2] = [-60.0, -30.0];
/// Horizontal drift range from the randomized firing angle.
pub const BULLET_ANGLE: [f32; 2] = [-6.0, 6.0];
pub const BULLET_DAMAGE: i32 = 1;

// ── Boats ─────────────────────────────────────────────────────────────────────

pub const BOAT_COUNT: usize = 1;
pub const BOAT_SPEED: [f32; 2] = [18.0, 36.0];
pub const BOAT_SHOT_MS: [u64; 2] = [2500, 5000];
/// Column offset between the two bullets of a boat volley.
pub const BOAT_VOLLEY_GAP: f32 = 4.0;

// ── Hearts ────────────────────────────────────────────────────────────────────

pub const HEART_COUNT: usize = 1;
pub const HEART_HEAL: i32 = 25;
pub const HEART_POINTS: u32 = 500;
/// Beat animation interval range.
pub const HEART_BEAT_MS: [u64; 2] = [500, 1500];
pub const HEART_SPEED: [f32; 2] = [30.0, 50.0];
/// Delay before a collected heart is replaced.
pub const HEART_RESPAWN_MS: [u64; 2] = [4000, 9000];

// ── Airplanes ─────────────────────────────────────────────────────────────────

pub const PLANE_COUNT: usize = 1;
/// Propeller-bounce animation interval range.
pub const PLANE_BOUNCE_MS: [u64; 2] = [500, 1500];
pub const PLANE_SPEED: [f32; 2] = [40.0, 60.0];
pub const PLANE_DAMAGE: i32 = 25;

// ── Clouds ────────────────────────────────────────────────────────────────────

pub const CLOUD_COUNT: usize = 3;
pub const CLOUD_SPEED: [f32; 2] = [12.0, 24.0];

// ── Respawn geometry ──────────────────────────────────────────────────────────

/// Minimum gap past the right screen edge when (re)spawning a drifter.
pub const SPAWN_NEAR: f32 = 20.0;
/// Far end of the spawn band, as a multiple of screen width.
pub const SPAWN_FAR_MULT: f32 = 5.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// One survival point per this many milliseconds of play.
pub const SURVIVAL_POINT_MS: u64 = 1000;
