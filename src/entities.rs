/// All game entity types — pure data, no logic.

/// 2D vector in terminal-cell units. Positions are top-left corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    /// Health hit zero; the dying animation is running.
    Dying,
    GameOver,
}

/// One-frame notifications emitted by `tick` for the audio layer.
/// Cleared at the start of every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Gunshot,
    DuckHit,
    HeartPickup,
    PlaneCrash,
    PlaneFlyby,
}

/// Directional input snapshot for one frame, decoupled from the key source
/// so arrows and WASD (and anything else) feed the same path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Clamped to [0, MAX_HEALTH].
    pub health: i32,
    /// Index into the flying frames while flying, dying frames while dying.
    pub frame_idx: usize,
    pub last_anim_ms: u64,
    /// Milliseconds spent in the dying animation; 0 while flying.
    pub dying_elapsed_ms: u64,
}

// ── Drifting world entities ───────────────────────────────────────────────────

/// Ground hunter; cycles an aim animation and fires single bullets.
#[derive(Clone, Debug)]
pub struct Hunter {
    pub pos: Vec2,
    pub speed: f32,
    pub frame_idx: usize,
    pub last_anim_ms: u64,
    /// Current animation interval, re-randomized on every frame advance.
    pub anim_interval_ms: u64,
    pub next_shot_ms: u64,
}

/// Hunter boat; single frame, fires a two-bullet volley.
#[derive(Clone, Debug)]
pub struct Boat {
    pub pos: Vec2,
    pub speed: f32,
    pub next_shot_ms: u64,
}

/// Fast flyer; collides with the player by sprite mask, not bounding box.
#[derive(Clone, Debug)]
pub struct Airplane {
    pub pos: Vec2,
    pub speed: f32,
    pub frame_idx: usize,
    pub last_anim_ms: u64,
    pub anim_interval_ms: u64,
}

/// Health pickup with a two-frame beat animation.
#[derive(Clone, Debug)]
pub struct Heart {
    pub pos: Vec2,
    pub speed: f32,
    pub frame_idx: usize,
    pub last_anim_ms: u64,
    pub anim_interval_ms: u64,
}

/// Decoration only — drifts and wrap-respawns, no collision.
#[derive(Clone, Debug)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
    /// Index into the cloud size variants, re-rolled on respawn.
    pub size_idx: usize,
}

/// Enemy projectile. Velocity is fixed at spawn: `vx` from the randomized
/// firing angle, `vy` negative (upward, toward the sky where the duck flies).
#[derive(Clone, Debug)]
pub struct Bullet {
    pub pos: Vec2,
    pub vx: f32,
    pub vy: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so the pure `tick` can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub hunters: Vec<Hunter>,
    pub boats: Vec<Boat>,
    pub airplanes: Vec<Airplane>,
    pub hearts: Vec<Heart>,
    pub clouds: Vec<Cloud>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    /// The highest score seen so far (updated live during play).
    pub high_score: u32,
    pub status: GameStatus,
    pub frame: u64,
    /// Shared game clock in milliseconds; every animation timer reads it.
    pub clock_ms: u64,
    /// Clock deadline for replacing a collected heart.
    pub next_heart_ms: u64,
    /// Sounds triggered by the last tick.
    pub events: Vec<GameEvent>,
    pub width: u16,
    pub height: u16,
}
