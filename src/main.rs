use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use get_ducked::audio::Audio;
use get_ducked::compute::{init_state, tick};
use get_ducked::config::{FRAME_MS, HIGH_SCORE_FILE};
use get_ducked::display;
use get_ducked::entities::{GameState, GameStatus, InputState};

const FRAME: Duration = Duration::from_millis(FRAME_MS);

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Reduce the held-key map to this frame's directional snapshot.
/// Arrows and WASD both steer; holding opposite keys cancels out in `tick`.
fn input_snapshot(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputState {
    let any = |keys: &[KeyCode]| keys.iter().any(|k| is_held(key_frame, k, frame));
    InputState {
        left: any(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
        right: any(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
        up: any(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
        down: any(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
    }
}

// ── High-score persistence ────────────────────────────────────────────────────

fn high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(HIGH_SCORE_FILE)
}

fn load_high_score() -> u32 {
    std::fs::read_to_string(high_score_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn save_high_score(score: u32) {
    let _ = std::fs::write(high_score_path(), score.to_string());
}

// ── Start screen ──────────────────────────────────────────────────────────────

enum StartResult {
    Play,
    Quit,
}

fn show_start_screen<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: u32,
) -> std::io::Result<StartResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "~  GET DUCKED!  ~";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(title))?;

    let duck = ["  __  ", "<(o)> "];
    for (i, row) in duck.iter().enumerate() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(3),
            cy.saturating_sub(4) + i as u16,
        ))?;
        out.queue(Print(*row))?;
    }

    if high_score > 0 {
        let hs_str = format!("Best Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(1),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    let lines: &[(&str, Color)] = &[
        ("Dodge the hunters, boats and airplanes.", Color::White),
        ("Catch hearts to heal (+25) and score (+500).", Color::White),
        ("", Color::White),
        ("\u{2190}\u{2191}\u{2193}\u{2192} / WASD : Fly", Color::DarkGrey),
        ("SPACE / ENTER : Start   Q : Quit", Color::DarkGrey),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(msg.chars().count() as u16 / 2),
            cy + 1 + i as u16,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char(' ') | KeyCode::Enter => return Ok(StartResult::Play),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(StartResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to the start screen.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame the map is reduced to an `InputState`
/// snapshot, so diagonal flight (two directions held) works on terminals with
/// and without key-release reporting.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    audio: &Option<Audio>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Advance the simulation ────────────────────────────────────────────
        let dt = last_tick.elapsed().as_secs_f32().min(0.1);
        last_tick = Instant::now();

        if state.status != GameStatus::GameOver {
            let input = input_snapshot(&key_frame, frame);
            *state = tick(state, &input, dt, &mut rng);

            if let Some(audio) = audio {
                for ev in &state.events {
                    audio.play(*ev);
                }
            }
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut high_score = load_high_score();

    // Missing output device is fine — the game just runs silent.
    let audio = Audio::new();

    loop {
        match show_start_screen(out, rx, high_score)? {
            StartResult::Quit => break,
            StartResult::Play => {
                let (width, height) = terminal::size()?;
                let mut state = init_state(width, height, high_score, &mut thread_rng());
                let quit = game_loop(out, &mut state, rx, &audio)?;

                // Persist new high score if beaten
                if state.score > high_score {
                    high_score = state.score;
                    save_high_score(high_score);
                }

                if quit {
                    break;
                }
                // Otherwise loop back to the start screen
            }
        }
    }
    Ok(())
}
