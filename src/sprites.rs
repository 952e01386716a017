/// Sprite frame art and collision geometry.
///
/// A frame is a slice of rows; space cells are transparent. Bounding-box
/// tests cover the whole frame rectangle, mask tests only opaque cells —
/// the difference matters for the airplane, whose long fuselage rectangle
/// would otherwise clip the duck well before the pixels touch.

use crate::entities::Vec2;

pub type Frame = &'static [&'static str];

// ── Duck ──────────────────────────────────────────────────────────────────────

/// Wing-flap cycle. Frames 0 and 2 repeat, giving the up-glide-up-down beat.
pub const DUCK_FLYING: [Frame; 4] = [
    &["  \\_ ", "<(o)>"],
    &[" __  ", "<(o)>"],
    &["  \\_ ", "<(o)>"],
    &[" _/  ", "<(o)>"],
];

/// Played once when health hits zero; the last frame repeats.
pub const DUCK_DYING: [Frame; 4] = [
    &["  x_ ", "<(x)>"],
    &[" \\x/ ", " (x) "],
    &["  ,  ", "~(x)~"],
    &["  ,  ", "~(x)~"],
];

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Hunter aim cycle — the rifle sweeps as he tracks the duck.
pub const HUNTER_FRAMES: [Frame; 6] = [
    &[" o/", "/^\\"],
    &["\\o ", "/^\\"],
    &["|o ", "/^\\"],
    &[" o|", "/^\\"],
    &["|o ", "/^\\"],
    &["\\o ", "/^\\"],
];

/// Two hunters in a rowboat. Single frame.
pub const BOAT_FRAME: Frame = &["  o/ o/ ", "\\______/"];

/// Propeller bounce, two frames.
pub const PLANE_FRAMES: [Frame; 2] = [
    &["  __!__  ", "<[=====]-"],
    &["   _!_   ", "<[=====]-"],
];

// ── Pickups & decoration ──────────────────────────────────────────────────────

/// Heartbeat: small, then swollen.
pub const HEART_FRAMES: [Frame; 2] = [&[" \u{2665} "], &["\u{2665}\u{2665}\u{2665}"]];

/// Size variants; each cloud rolls one at spawn and again on respawn.
pub const CLOUD_FRAMES: [Frame; 3] = [
    &["(~~)"],
    &["(~~~~~)"],
    &[" .--. ", "(____)"],
];

// ── Geometry ──────────────────────────────────────────────────────────────────

pub fn frame_width(frame: &[&str]) -> f32 {
    frame.iter().map(|row| row.chars().count()).max().unwrap_or(0) as f32
}

pub fn frame_height(frame: &[&str]) -> f32 {
    frame.len() as f32
}

/// Axis-aligned bounding-box overlap of two placed frames.
pub fn rects_overlap(a_pos: Vec2, a_frame: &[&str], b_pos: Vec2, b_frame: &[&str]) -> bool {
    a_pos.x < b_pos.x + frame_width(b_frame)
        && b_pos.x < a_pos.x + frame_width(a_frame)
        && a_pos.y < b_pos.y + frame_height(b_frame)
        && b_pos.y < a_pos.y + frame_height(a_frame)
}

/// Whether a single cell (a bullet) lands inside a placed frame's box.
pub fn cell_in_frame(cell: Vec2, pos: Vec2, frame: &[&str]) -> bool {
    cell.x >= pos.x
        && cell.x < pos.x + frame_width(frame)
        && cell.y >= pos.y
        && cell.y < pos.y + frame_height(frame)
}

/// True when the cell at (col, row) of `frame` is opaque (non-space).
fn opaque(frame: &[&str], col: i32, row: i32) -> bool {
    if col < 0 || row < 0 {
        return false;
    }
    frame
        .get(row as usize)
        .and_then(|r| r.chars().nth(col as usize))
        .map(|c| c != ' ')
        .unwrap_or(false)
}

/// Pixel-level (cell-level) mask overlap: two placed frames collide only
/// where both have an opaque cell on the same screen position.
pub fn masks_overlap(a_frame: &[&str], a_pos: Vec2, b_frame: &[&str], b_pos: Vec2) -> bool {
    let ax = a_pos.x.round() as i32;
    let ay = a_pos.y.round() as i32;
    let bx = b_pos.x.round() as i32;
    let by = b_pos.y.round() as i32;

    let x0 = ax.max(bx);
    let y0 = ay.max(by);
    let x1 = (ax + frame_width(a_frame) as i32).min(bx + frame_width(b_frame) as i32);
    let y1 = (ay + frame_height(a_frame) as i32).min(by + frame_height(b_frame) as i32);

    for y in y0..y1 {
        for x in x0..x1 {
            if opaque(a_frame, x - ax, y - ay) && opaque(b_frame, x - bx, y - by) {
                return true;
            }
        }
    }
    false
}
