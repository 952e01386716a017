/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::{MAX_HEALTH, MOUNTAIN_SCROLL_SPEED, TREE_SCROLL_SPEED};
use crate::entities::{GameState, GameStatus, Vec2};
use crate::sprites::{self, Frame};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_DUCK: Color = Color::Yellow;
const C_DUCK_DYING: Color = Color::DarkYellow;
const C_HUNTER: Color = Color::DarkGreen;
const C_BOAT: Color = Color::Grey;
const C_PLANE: Color = Color::White;
const C_HEART: Color = Color::Red;
const C_CLOUD: Color = Color::Grey;
const C_BULLET: Color = Color::Red;
const C_MOUNTAINS: Color = Color::DarkGrey;
const C_TREES: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LABEL: Color = Color::White;
const C_BAR_HIGH: Color = Color::Green;
const C_BAR_MID: Color = Color::Yellow;
const C_BAR_LOW: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Width of the health bar in cells.
const BAR_WIDTH: usize = 20;

// ── Parallax patterns ─────────────────────────────────────────────────────────

// Repeating strips; each layer scrolls at its own speed for depth.
const MOUNTAIN_PATTERN: &str = "    /\\      /\\/\\        /\\    /\\/\\/\\      ";
const TREE_PATTERN: &str = "^^ ^  ^^^ ^ ^^  ^ ^^^  ^ ";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, state)?;

    for cloud in &state.clouds {
        draw_frame(out, sprites::CLOUD_FRAMES[cloud.size_idx], cloud.pos, C_CLOUD, state)?;
    }
    for heart in &state.hearts {
        draw_frame(out, sprites::HEART_FRAMES[heart.frame_idx], heart.pos, C_HEART, state)?;
    }
    for boat in &state.boats {
        draw_frame(out, sprites::BOAT_FRAME, boat.pos, C_BOAT, state)?;
    }
    for hunter in &state.hunters {
        draw_frame(out, sprites::HUNTER_FRAMES[hunter.frame_idx], hunter.pos, C_HUNTER, state)?;
    }
    for plane in &state.airplanes {
        draw_frame(out, sprites::PLANE_FRAMES[plane.frame_idx], plane.pos, C_PLANE, state)?;
    }
    for bullet in &state.bullets {
        draw_cell(out, bullet.pos, '\u{2022}', C_BULLET, state)?;
    }

    draw_player(out, state)?;
    draw_hud(out, state)?;
    draw_controls_hint(out, state)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, state.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Sprite drawing ────────────────────────────────────────────────────────────

/// Draw a frame at a world position, clipping to the playfield and skipping
/// transparent (space) cells. Row 0 is the HUD; the last row is the hint.
fn draw_frame<W: Write>(
    out: &mut W,
    frame: Frame,
    pos: Vec2,
    color: Color,
    state: &GameState,
) -> std::io::Result<()> {
    let x0 = pos.x.round() as i32;
    let y0 = pos.y.round() as i32;
    let max_row = state.height as i32 - 1;

    out.queue(style::SetForegroundColor(color))?;
    for (row, line) in frame.iter().enumerate() {
        let y = y0 + row as i32;
        if y < 1 || y >= max_row {
            continue;
        }
        for (col, ch) in line.chars().enumerate() {
            let x = x0 + col as i32;
            if ch == ' ' || x < 0 || x >= state.width as i32 {
                continue;
            }
            out.queue(cursor::MoveTo(x as u16, y as u16))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

fn draw_cell<W: Write>(
    out: &mut W,
    pos: Vec2,
    ch: char,
    color: Color,
    state: &GameState,
) -> std::io::Result<()> {
    let x = pos.x.round() as i32;
    let y = pos.y.round() as i32;
    if x < 0 || x >= state.width as i32 || y < 1 || y >= state.height as i32 - 1 {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(x as u16, y as u16))?;
    out.queue(Print(ch))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (frame, color) = match state.status {
        GameStatus::Playing => (sprites::DUCK_FLYING[state.player.frame_idx], C_DUCK),
        _ => (sprites::DUCK_DYING[state.player.frame_idx], C_DUCK_DYING),
    };
    draw_frame(out, frame, state.player.pos, color, state)
}

// ── Background parallax ───────────────────────────────────────────────────────

/// Two repeating strips near the bottom of the playfield, each offset by the
/// shared clock times its own scroll speed.
fn draw_background<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let t = state.clock_ms as f32 / 1000.0;
    let mountain_row = state.height.saturating_sub(5);
    let tree_row = state.height.saturating_sub(2);

    draw_scroll_layer(
        out,
        MOUNTAIN_PATTERN,
        mountain_row,
        (t * MOUNTAIN_SCROLL_SPEED) as usize,
        state.width,
        C_MOUNTAINS,
    )?;
    draw_scroll_layer(
        out,
        TREE_PATTERN,
        tree_row,
        (t * TREE_SCROLL_SPEED) as usize,
        state.width,
        C_TREES,
    )?;
    Ok(())
}

fn draw_scroll_layer<W: Write>(
    out: &mut W,
    pattern: &str,
    row: u16,
    offset: usize,
    width: u16,
    color: Color,
) -> std::io::Result<()> {
    let cells: Vec<char> = pattern.chars().collect();
    let line: String = (0..width as usize)
        .map(|i| cells[(i + offset) % cells.len()])
        .collect();
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(line))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Health bar — left
    let health = state.player.health.clamp(0, MAX_HEALTH);
    let filled = (health as usize * BAR_WIDTH) / MAX_HEALTH as usize;
    let bar_color = if health > 60 {
        C_BAR_HIGH
    } else if health > 30 {
        C_BAR_MID
    } else {
        C_BAR_LOW
    };

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print("Health: "))?;
    out.queue(style::SetForegroundColor(bar_color))?;
    out.queue(Print("\u{2588}".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("\u{2591}".repeat(BAR_WIDTH - filled)))?;

    // Score and high score — right
    let score_str = if state.high_score > 0 {
        format!("Score:{:>6}  Hi:{:>6}", state.score, state.high_score)
    } else {
        format!("Score:{:>6}", state.score)
    };
    let sx = state.width.saturating_sub(score_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, state.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("\u{2190}\u{2191}\u{2193}\u{2192} / WASD : Fly   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let best_score = state.high_score.max(state.score);
    let new_best = state.score >= state.high_score && state.score > 0;
    let best_line = if new_best {
        format!("\u{2605} NEW BEST: {:>6} \u{2605}", best_score)
    } else {
        format!("Best Score:  {:>6}", best_score)
    };

    let lines: &[&str] = &[
        "\u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2557}",
        "\u{2551}   GOT  DUCKED!     \u{2551}",
        "\u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d}",
    ];

    let cx = state.width / 2;
    let total_rows = lines.len() + 3;
    let start_row = (state.height / 2).saturating_sub(total_rows as u16 / 2);

    for (i, msg) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(Color::Red))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let best_row = score_row + 1;
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };
    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, best_row))?;
    out.queue(style::SetForegroundColor(best_color))?;
    out.queue(Print(&best_line))?;

    let hint = "R - Play Again  Q - Quit";
    let hint_row = best_row + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
