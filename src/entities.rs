//! All game entity types plus the world constants — pure data, no logic.

// ── Playfield constants (world units are f64 pixels) ─────────────────────────

/// Playfield width.
pub const WIDTH: f64 = 800.0;
/// Playfield height.
pub const HEIGHT: f64 = 600.0;

/// Drawn ship size.
pub const SHIP_WIDTH: f64 = 80.0;
pub const SHIP_HEIGHT: f64 = 40.0;
/// Default horizontal step per movement key press.
pub const SHIP_SPEED: f64 = 5.0;

/// Drawn bullet size.
pub const BULLET_WIDTH: f64 = 10.0;
pub const BULLET_HEIGHT: f64 = 20.0;
/// Upward distance a bullet covers per tick.
pub const BULLET_SPEED: f64 = 10.0;
/// Collision box of a bullet.  Narrower than the drawn sprite; the
/// mismatch is part of the game's tuning, and collisions use these.
pub const BULLET_HITBOX_WIDTH: f64 = 5.0;
pub const BULLET_HITBOX_HEIGHT: f64 = 10.0;
/// The muzzle sits this far in from the ship's left edge.
pub const MUZZLE_OFFSET: f64 = 17.5;

/// Enemy box size.
pub const ENEMY_WIDTH: f64 = 40.0;
pub const ENEMY_HEIGHT: f64 = 20.0;
/// Sideways distance an enemy covers per tick.
pub const ENEMY_SPEED: f64 = 2.0;
/// Vertical drop applied when a sweep reverses at a playfield edge.
pub const ENEMY_DROP: f64 = 40.0;

/// Starting formation: 5 rows of 10, anchored at (50, 50) on a 60×40 pitch.
pub const FORMATION_ROWS: usize = 5;
pub const FORMATION_COLS: usize = 10;
pub const FORMATION_LEFT: f64 = 50.0;
pub const FORMATION_TOP: f64 = 50.0;
pub const FORMATION_H_PITCH: f64 = 60.0;
pub const FORMATION_V_PITCH: f64 = 40.0;

// ── Input keys ────────────────────────────────────────────────────────────────

/// Logical keys the simulation understands.  The frame driver maps raw
/// terminal key codes onto these and silently drops everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Pause,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f64,
    pub y: f64,
    /// Step applied per movement press.  Nothing in the current rules
    /// ever changes it, but releasing a movement key still restores the
    /// default.
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub moving_right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub paused: bool,
}
