//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! the 800×600 world into cells of whatever grid the terminal offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use rand::Rng;

use space_invaders::entities::{
    Bullet, Enemy, GameState, BULLET_WIDTH, ENEMY_WIDTH, HEIGHT, SHIP_WIDTH, WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_PAUSE: Color = Color::White;

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Static starfield standing in for background art.  Generated once per
/// terminal geometry; the caller regenerates it after a resize.
pub struct Backdrop {
    cols: u16,
    rows: u16,
    stars: Vec<(u16, u16, char)>,
}

impl Backdrop {
    pub fn generate(rng: &mut impl Rng, cols: u16, rows: u16) -> Self {
        const GLYPHS: [char; 4] = ['·', '.', '+', '✦'];
        // Keep the HUD row and the hint row clear of stars.
        let lowest = rows.saturating_sub(1).max(2);
        let count = cols as usize * rows as usize / 40;
        let stars = (0..count)
            .map(|_| {
                (
                    rng.gen_range(0..cols.max(1)),
                    rng.gen_range(1..lowest),
                    GLYPHS[rng.gen_range(0..GLYPHS.len())],
                )
            })
            .collect();
        Self { cols, rows, stars }
    }

    /// True while the backdrop still matches the terminal geometry.
    pub fn fits(&self, cols: u16, rows: u16) -> bool {
        self.cols == cols && self.rows == rows
    }
}

// ── World → cell scaling ──────────────────────────────────────────────────────

fn to_col(x: f64, cols: u16) -> i32 {
    (x / WIDTH * cols as f64).floor() as i32
}

fn to_row(y: f64, rows: u16) -> i32 {
    (y / HEIGHT * rows as f64).floor() as i32
}

/// Queue `text` at a cell, skipping anything outside the grid.  The ship
/// is allowed to drift off-screen, so out-of-range is normal, not an
/// error.
fn put<W: Write>(
    out: &mut W,
    col: i32,
    row: i32,
    cols: u16,
    rows: u16,
    text: &str,
) -> std::io::Result<()> {
    if col < 0 || row < 0 || col >= cols as i32 || row >= rows as i32 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    backdrop: &Backdrop,
) -> std::io::Result<()> {
    let (cols, rows) = (backdrop.cols, backdrop.rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_backdrop(out, backdrop)?;
    draw_hud(out, state)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, cols, rows)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, bullet, cols, rows)?;
    }

    draw_ship(out, state, cols, rows)?;
    draw_controls_hint(out, rows)?;

    if state.paused {
        draw_pause_overlay(out, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

fn draw_backdrop<W: Write>(out: &mut W, backdrop: &Backdrop) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for &(col, row, glyph) in &backdrop.stars {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols), anchored on the ship's horizontal centre:
    //   ▲       ← row y      (tip)
    //  /█\      ← row y+1    (hull)
    let ship = &state.ship;
    let col = to_col(ship.x + SHIP_WIDTH / 2.0, cols);
    let row = to_row(ship.y, rows);

    out.queue(style::SetForegroundColor(C_SHIP))?;
    put(out, col, row, cols, rows, "▲")?;
    put(out, col - 1, row + 1, cols, rows, "/█\\")?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, cols: u16, rows: u16) -> std::io::Result<()> {
    let col = to_col(enemy.x + ENEMY_WIDTH / 2.0, cols);
    let row = to_row(enemy.y, rows);

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    put(out, col - 1, row, cols, rows, "<▼>")?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet, cols: u16, rows: u16) -> std::io::Result<()> {
    let col = to_col(bullet.x + BULLET_WIDTH / 2.0, cols);
    let row = to_row(bullet.y, rows);

    out.queue(style::SetForegroundColor(C_BULLET))?;
    put(out, col, row, cols, rows, "║")?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Move   SPACE : Fire   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

fn draw_pause_overlay<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", C_PAUSE),
        ("║      PAUSED      ║", C_PAUSE),
        ("╚══════════════════╝", C_PAUSE),
        ("Press P to resume", C_HINT),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
