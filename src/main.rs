mod display;

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
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use space_invaders::compute::{init_state, key_press, key_release, tick};
use space_invaders::entities::{GameState, Key};

use display::Backdrop;

/// Nominal tick period (≈60 Hz).
const FRAME: Duration = Duration::from_millis(16);

/// Map a terminal key code onto a simulation key.  Anything the
/// simulation does not understand maps to `None` and is dropped.
fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the fixed-rate loop: drain pending input in arrival order,
/// advance one tick, draw, then sleep out the rest of the frame.  Ticks
/// never overlap; the next one starts only after the draw has been
/// flushed.
///
/// Input model: every press (or terminal auto-repeat) event applies a
/// single step, matching the original key-event semantics.  There is no
/// held-key state in the driver; a key held on a non-repeating terminal
/// simply moves once.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let (cols, rows) = terminal::size()?;
    let mut backdrop = Backdrop::generate(&mut rng, cols, rows);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    other => {
                        if let Some(key) = map_key(&other) {
                            if key == Key::Pause {
                                log::debug!("pause toggled -> {}", !state.paused);
                            }
                            *state = key_press(state, key);
                        }
                    }
                },
                // Release restores the ship-speed default (movement keys only)
                KeyEventKind::Release => {
                    if let Some(key) = map_key(&code) {
                        *state = key_release(state, key);
                    }
                }
            }
        }

        // tick() is the identity while paused; render() draws the overlay
        *state = tick(state);

        // Rebuild the starfield if the terminal was resized
        let (cols, rows) = terminal::size()?;
        if !backdrop.fits(cols, rows) {
            backdrop = Backdrop::generate(&mut rng, cols, rows);
        }

        display::render(out, state, &backdrop)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Logs go to stderr (the alternate screen owns stdout); run with
    // RUST_LOG=debug and redirect stderr to see them.
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events so releasing ← / → restores the ship
    // speed default.  Terminals without the kitty protocol fall back to
    // press/repeat only.
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

    log::info!("starting up");

    let mut state = init_state();
    let result = game_loop(&mut out, &mut state, &rx);

    log::info!("exiting with final score {}", state.score);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
