use std::collections::HashMap;
use std::error::Error;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use log::{error, info, LevelFilter};
use rand::thread_rng;

use saltarello::audio::Audio;
use saltarello::compute::{init_state, reset_run, tick};
use saltarello::constants::FRAME_MS;
use saltarello::display;
use saltarello::entities::{GameStatus, InputSnapshot};

const FRAME: Duration = Duration::from_millis(FRAME_MS); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key arrives.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and fold them into a single `InputSnapshot`
/// for the simulation step, so e.g. ← + ↑ + X can all be held at once.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence, which is shorter than the OS repeat interval, so the key stays
///   live while it is actively generating repeats.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    audio: &Audio,
) -> std::io::Result<()> {
    let clock = Instant::now();
    let mut rng = thread_rng();
    let mut state = init_state();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            info!("quit at score {}", state.score);
                            return Ok(());
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        KeyCode::Enter if state.status == GameStatus::GameOver => {
                            state = reset_run();
                            info!("run restarted");
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Snapshot held keys, advance the simulation one step ───────────────
        let input = InputSnapshot {
            jump: is_held(&key_frame, &KeyCode::Up, frame),
            left: is_held(&key_frame, &KeyCode::Left, frame),
            right: is_held(&key_frame, &KeyCode::Right, frame),
            fire: is_held(&key_frame, &KeyCode::Char('x'), frame)
                || is_held(&key_frame, &KeyCode::Char('X'), frame),
            duck: is_held(&key_frame, &KeyCode::Down, frame),
        };

        let was_playing = state.status == GameStatus::Playing;
        let now_ms = clock.elapsed().as_millis() as u64;
        state = tick(&state, &input, now_ms, &mut rng);

        if was_playing && state.status == GameStatus::GameOver {
            info!("game over at score {}", state.score);
        }

        for cue in &state.cues {
            audio.play(*cue);
        }

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    // Logging goes to a file: stdout belongs to the renderer.
    simple_logging::log_to_file("saltarello.log", LevelFilter::Info)?;

    // Collaborator setup is the only fallible phase; the simulation itself
    // never observes an error.
    let mut audio = Audio::new()?;
    audio.start_music();

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
                Err(e) => {
                    error!("input thread: {e}");
                    break;
                }
            }
        }
    });

    info!("saltarello started");
    let result = run(&mut out, &rx, &audio);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.map_err(Into::into)
}
