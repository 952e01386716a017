/// Pure game-logic functions.
///
/// `init_state` and `tick` take immutable references to the current
/// `GameState` (plus an RNG handle) and return a brand-new `GameState`.
/// Side effects are limited to the injected RNG, so tests drive the whole
/// simulation with a seeded `StdRng`.

use rand::Rng;

use crate::config::*;
use crate::entities::{
    Airplane, Boat, Bullet, Cloud, GameEvent, GameState, GameStatus, Heart, Hunter, InputState,
    Player, Vec2,
};
use crate::sprites::{self, Frame};

// ── Range sampling ────────────────────────────────────────────────────────────

fn sample_f32(range: [f32; 2], rng: &mut impl Rng) -> f32 {
    rng.gen_range(range[0]..range[1])
}

fn sample_ms(range: [u64; 2], rng: &mut impl Rng) -> u64 {
    rng.gen_range(range[0]..range[1])
}

/// A fresh x inside the off-screen-right spawn band.
fn spawn_x(width: u16, rng: &mut impl Rng) -> f32 {
    let w = width as f32;
    rng.gen_range(w + SPAWN_NEAR..w * SPAWN_FAR_MULT)
}

/// Top y that puts a ground sprite's feet inside the shoreline band.
fn ground_top(height: u16, frame: Frame, rng: &mut impl Rng) -> f32 {
    let h = height as f32;
    let bottom = rng.gen_range(h - 6.0..h - 2.0);
    bottom - sprites::frame_height(frame)
}

// ── Spawners ──────────────────────────────────────────────────────────────────

fn new_hunter(width: u16, height: u16, now: u64, rng: &mut impl Rng) -> Hunter {
    Hunter {
        pos: Vec2::new(
            spawn_x(width, rng),
            ground_top(height, sprites::HUNTER_FRAMES[0], rng),
        ),
        speed: sample_f32(DRIFT_SPEED, rng),
        frame_idx: 0,
        last_anim_ms: now,
        anim_interval_ms: sample_ms(AIM_MS, rng),
        next_shot_ms: now + sample_ms(HUNTER_SHOT_MS, rng),
    }
}

fn new_boat(width: u16, height: u16, now: u64, rng: &mut impl Rng) -> Boat {
    Boat {
        pos: Vec2::new(spawn_x(width, rng), ground_top(height, sprites::BOAT_FRAME, rng)),
        speed: sample_f32(BOAT_SPEED, rng),
        next_shot_ms: now + sample_ms(BOAT_SHOT_MS, rng),
    }
}

fn new_airplane(width: u16, height: u16, now: u64, rng: &mut impl Rng) -> Airplane {
    let ceiling = height as f32 * 0.75 - sprites::frame_height(sprites::PLANE_FRAMES[0]);
    Airplane {
        pos: Vec2::new(spawn_x(width, rng), rng.gen_range(1.0..ceiling.max(2.0))),
        speed: sample_f32(PLANE_SPEED, rng),
        frame_idx: 0,
        last_anim_ms: now,
        anim_interval_ms: sample_ms(PLANE_BOUNCE_MS, rng),
    }
}

fn new_heart(width: u16, height: u16, now: u64, rng: &mut impl Rng) -> Heart {
    Heart {
        pos: Vec2::new(spawn_x(width, rng), rng.gen_range(1.0..height as f32 / 2.0)),
        speed: sample_f32(HEART_SPEED, rng),
        frame_idx: 0,
        last_anim_ms: now,
        anim_interval_ms: sample_ms(HEART_BEAT_MS, rng),
    }
}

fn new_cloud(width: u16, height: u16, rng: &mut impl Rng) -> Cloud {
    Cloud {
        pos: Vec2::new(spawn_x(width, rng), rng.gen_range(1.0..height as f32 / 2.0)),
        speed: sample_f32(CLOUD_SPEED, rng),
        size_idx: rng.gen_range(0..sprites::CLOUD_FRAMES.len()),
    }
}

fn new_bullet(pos: Vec2, rng: &mut impl Rng) -> Bullet {
    Bullet {
        pos,
        vx: sample_f32(BULLET_ANGLE, rng),
        vy: sample_f32(BULLET_SPEED, rng),
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the initial game state for the given screen dimensions.
pub fn init_state(width: u16, height: u16, high_score: u32, rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player {
            pos: Vec2::new(width as f32 / 4.0, height as f32 / 2.0),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            health: MAX_HEALTH,
            frame_idx: 0,
            last_anim_ms: 0,
            dying_elapsed_ms: 0,
        },
        hunters: (0..HUNTER_COUNT).map(|_| new_hunter(width, height, 0, rng)).collect(),
        boats: (0..BOAT_COUNT).map(|_| new_boat(width, height, 0, rng)).collect(),
        airplanes: (0..PLANE_COUNT).map(|_| new_airplane(width, height, 0, rng)).collect(),
        hearts: (0..HEART_COUNT).map(|_| new_heart(width, height, 0, rng)).collect(),
        clouds: (0..CLOUD_COUNT).map(|_| new_cloud(width, height, rng)).collect(),
        bullets: Vec::new(),
        score: 0,
        high_score,
        status: GameStatus::Playing,
        frame: 0,
        clock_ms: 0,
        next_heart_ms: 0,
        events: Vec::new(),
        width,
        height,
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one frame of `dt` seconds. All randomness
/// comes through `rng` so callers control determinism.
pub fn tick(state: &GameState, input: &InputState, dt: f32, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.frame += 1;
    next.clock_ms += (dt * 1000.0).round() as u64;
    next.events.clear();

    // ── 1. Player physics & animation ────────────────────────────────────────
    if next.status == GameStatus::Playing {
        step_player(&mut next, input, dt);
    }
    animate_player(&mut next, dt);

    // ── 2. World drift, per-species animation, wrap-respawn, firing ──────────
    step_hunters(&mut next, dt, rng);
    step_boats(&mut next, dt, rng);
    step_airplanes(&mut next, dt, rng);
    step_hearts(&mut next, dt, rng);
    step_clouds(&mut next, dt, rng);
    step_bullets(&mut next, dt);

    // ── 3. Collisions against the player ─────────────────────────────────────
    if next.status == GameStatus::Playing {
        collide(&mut next, rng);
    }

    // ── 4. Scoring & terminal transition ─────────────────────────────────────
    if next.status == GameStatus::Playing
        && next.clock_ms / SURVIVAL_POINT_MS > state.clock_ms / SURVIVAL_POINT_MS
    {
        next.score += 1;
    }

    if next.status == GameStatus::Playing && next.player.health <= 0 {
        next.player.health = 0;
        next.status = GameStatus::Dying;
        next.player.frame_idx = 0;
        next.player.dying_elapsed_ms = 0;
    }

    next.high_score = next.high_score.max(next.score);
    next
}

// ── Player ────────────────────────────────────────────────────────────────────

fn step_player(s: &mut GameState, input: &InputState, dt: f32) {
    let p = &mut s.player;
    p.acc = Vec2::new(0.0, GRAVITY);

    if input.right {
        p.acc.x = INPUT_IMPULSE;
    }
    if input.left {
        p.acc.x = -INPUT_IMPULSE;
    }
    if input.up {
        p.acc.y = -INPUT_IMPULSE;
    }
    if input.down {
        p.acc.y = INPUT_IMPULSE;
    }

    p.acc.x += p.vel.x * FRICTION;
    p.vel.x += p.acc.x * dt;
    p.vel.y += p.acc.y * dt;
    p.pos.x += p.vel.x * dt + 0.5 * p.acc.x * dt * dt;
    p.pos.y += p.vel.y * dt + 0.5 * p.acc.y * dt * dt;

    clamp_player(s);
}

/// Pin the duck inside the playfield; the clamped axis loses its velocity.
/// The duck may not dive below three quarters of the screen — the ground
/// band belongs to the hunters.
fn clamp_player(s: &mut GameState) {
    let duck_w = sprites::frame_width(sprites::DUCK_FLYING[0]);
    let duck_h = sprites::frame_height(sprites::DUCK_FLYING[0]);
    let max_x = s.width as f32 - duck_w - 1.0;
    let max_y = s.height as f32 * 0.75 - duck_h;

    let p = &mut s.player;
    if p.pos.x > max_x {
        p.pos.x = max_x;
        p.vel.x = 0.0;
    }
    if p.pos.x < 1.0 {
        p.pos.x = 1.0;
        p.vel.x = 0.0;
    }
    if p.pos.y < 1.0 {
        p.pos.y = 1.0;
        p.vel.y = 0.0;
    }
    if p.pos.y > max_y {
        p.pos.y = max_y;
        p.vel.y = 0.0;
    }
}

fn animate_player(s: &mut GameState, dt: f32) {
    match s.status {
        GameStatus::Playing => {
            let now = s.clock_ms;
            let p = &mut s.player;
            if now.saturating_sub(p.last_anim_ms) > FLAP_MS {
                p.last_anim_ms = now;
                p.frame_idx = (p.frame_idx + 1) % sprites::DUCK_FLYING.len();
            }
        }
        GameStatus::Dying => {
            let frames = sprites::DUCK_DYING.len() as u64;
            let p = &mut s.player;
            p.dying_elapsed_ms += (dt * 1000.0).round() as u64;
            p.frame_idx = (p.dying_elapsed_ms / DYING_FRAME_MS).min(frames - 1) as usize;
            if p.dying_elapsed_ms >= frames * DYING_FRAME_MS + DYING_LINGER_MS {
                s.status = GameStatus::GameOver;
            }
        }
        GameStatus::GameOver => {}
    }
}

// ── Drifting species ──────────────────────────────────────────────────────────

fn step_hunters(s: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let now = s.clock_ms;
    let (width, height) = (s.width, s.height);
    let firing = s.status == GameStatus::Playing;
    let mut shots: Vec<Bullet> = Vec::new();

    for hunter in &mut s.hunters {
        hunter.pos.x -= hunter.speed * dt;

        if now.saturating_sub(hunter.last_anim_ms) > hunter.anim_interval_ms {
            hunter.last_anim_ms = now;
            hunter.frame_idx = (hunter.frame_idx + 1) % sprites::HUNTER_FRAMES.len();
            hunter.anim_interval_ms = sample_ms(AIM_MS, rng);
        }

        let frame = sprites::HUNTER_FRAMES[hunter.frame_idx];
        if hunter.pos.x + sprites::frame_width(frame) < 0.0 {
            *hunter = new_hunter(width, height, now, rng);
            continue;
        }

        if firing && now >= hunter.next_shot_ms {
            hunter.next_shot_ms = now + sample_ms(HUNTER_SHOT_MS, rng);
            let muzzle = Vec2::new(
                hunter.pos.x + sprites::frame_width(frame) / 2.0,
                hunter.pos.y - 1.0,
            );
            shots.push(new_bullet(muzzle, rng));
        }
    }

    if !shots.is_empty() {
        s.events.push(GameEvent::Gunshot);
    }
    s.bullets.extend(shots);
}

fn step_boats(s: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let now = s.clock_ms;
    let (width, height) = (s.width, s.height);
    let firing = s.status == GameStatus::Playing;
    let mut shots: Vec<Bullet> = Vec::new();

    for boat in &mut s.boats {
        boat.pos.x -= boat.speed * dt;

        if boat.pos.x + sprites::frame_width(sprites::BOAT_FRAME) < 0.0 {
            *boat = new_boat(width, height, now, rng);
            continue;
        }

        // Boats carry two hunters — each volley is two bullets.
        if firing && now >= boat.next_shot_ms {
            boat.next_shot_ms = now + sample_ms(BOAT_SHOT_MS, rng);
            let mid = boat.pos.x + sprites::frame_width(sprites::BOAT_FRAME) / 2.0;
            shots.push(new_bullet(Vec2::new(mid, boat.pos.y - 1.0), rng));
            shots.push(new_bullet(Vec2::new(mid - BOAT_VOLLEY_GAP, boat.pos.y - 1.0), rng));
        }
    }

    if !shots.is_empty() {
        s.events.push(GameEvent::Gunshot);
    }
    s.bullets.extend(shots);
}

fn step_airplanes(s: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let now = s.clock_ms;
    let (width, height) = (s.width, s.height);
    let mut flyby = false;

    for plane in &mut s.airplanes {
        let was_off_right = plane.pos.x >= width as f32;
        plane.pos.x -= plane.speed * dt;
        if was_off_right && plane.pos.x < width as f32 {
            flyby = true;
        }

        if now.saturating_sub(plane.last_anim_ms) > plane.anim_interval_ms {
            plane.last_anim_ms = now;
            plane.frame_idx = (plane.frame_idx + 1) % sprites::PLANE_FRAMES.len();
            plane.anim_interval_ms = sample_ms(PLANE_BOUNCE_MS, rng);
        }

        let frame = sprites::PLANE_FRAMES[plane.frame_idx];
        if plane.pos.x + sprites::frame_width(frame) < 0.0 {
            *plane = new_airplane(width, height, now, rng);
        }
    }

    if flyby {
        s.events.push(GameEvent::PlaneFlyby);
    }
}

fn step_hearts(s: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let now = s.clock_ms;
    let (width, height) = (s.width, s.height);

    for heart in &mut s.hearts {
        heart.pos.x -= heart.speed * dt;

        if now.saturating_sub(heart.last_anim_ms) > heart.anim_interval_ms {
            heart.last_anim_ms = now;
            heart.frame_idx = (heart.frame_idx + 1) % sprites::HEART_FRAMES.len();
            heart.anim_interval_ms = sample_ms(HEART_BEAT_MS, rng);
        }

        let frame = sprites::HEART_FRAMES[heart.frame_idx];
        if heart.pos.x + sprites::frame_width(frame) < 0.0 {
            *heart = new_heart(width, height, now, rng);
        }
    }

    // Replace a collected heart once its respawn deadline passes.
    if s.hearts.len() < HEART_COUNT && now >= s.next_heart_ms {
        s.hearts.push(new_heart(width, height, now, rng));
    }
}

fn step_clouds(s: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let (width, height) = (s.width, s.height);

    for cloud in &mut s.clouds {
        cloud.pos.x -= cloud.speed * dt;

        let frame = sprites::CLOUD_FRAMES[cloud.size_idx];
        if cloud.pos.x + sprites::frame_width(frame) < 0.0 {
            *cloud = new_cloud(width, height, rng);
        }
    }
}

fn step_bullets(s: &mut GameState, dt: f32) {
    let height = s.height as f32;

    for bullet in &mut s.bullets {
        bullet.pos.x += bullet.vx * dt;
        bullet.pos.y += bullet.vy * dt;
    }

    // Bullets travel upward; discard once fully past the top or bottom edge.
    s.bullets.retain(|b| b.pos.y + 1.0 > 0.0 && b.pos.y < height + 1.0);
}

// ── Collisions ────────────────────────────────────────────────────────────────

fn collide(s: &mut GameState, rng: &mut impl Rng) {
    let duck_frame = sprites::DUCK_FLYING[s.player.frame_idx];
    let duck_pos = s.player.pos;

    // Hearts: bounding box. Pickup heals, scores, and arms the respawn timer.
    let mut picked = false;
    s.hearts.retain(|heart| {
        let frame = sprites::HEART_FRAMES[heart.frame_idx];
        if sprites::rects_overlap(heart.pos, frame, duck_pos, duck_frame) {
            picked = true;
            false
        } else {
            true
        }
    });
    if picked {
        s.player.health = (s.player.health + HEART_HEAL).min(MAX_HEALTH);
        s.score += HEART_POINTS;
        s.next_heart_ms = s.clock_ms + sample_ms(HEART_RESPAWN_MS, rng);
        s.events.push(GameEvent::HeartPickup);
    }

    // Bullets: one-cell projectile against the duck's box.
    let mut hits: i32 = 0;
    s.bullets.retain(|bullet| {
        if sprites::cell_in_frame(bullet.pos, duck_pos, duck_frame) {
            hits += 1;
            false
        } else {
            true
        }
    });
    if hits > 0 {
        s.player.health -= BULLET_DAMAGE * hits;
        s.player.pos.y -= BULLET_KNOCKUP;
        s.events.push(GameEvent::DuckHit);
    }

    // Airplanes: mask overlap only — the long fuselage box alone is not a hit.
    let crashed = s.airplanes.iter().any(|plane| {
        let frame = sprites::PLANE_FRAMES[plane.frame_idx];
        sprites::masks_overlap(frame, plane.pos, duck_frame, duck_pos)
    });
    if crashed {
        s.player.health -= PLANE_DAMAGE;
        s.player.pos.y += PLANE_KNOCKDOWN;
        s.events.push(GameEvent::PlaneCrash);
    }

    clamp_player(s);
    s.player.health = s.player.health.clamp(0, MAX_HEALTH);
}
