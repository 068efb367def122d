//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`.  Nothing here performs
//! I/O or depends on wall-clock time; the frame driver owns all side
//! effects, which keeps every rule below testable without a terminal.

use crate::entities::{
    Bullet, Enemy, GameState, Key, Ship, BULLET_HITBOX_HEIGHT, BULLET_HITBOX_WIDTH, BULLET_SPEED,
    ENEMY_DROP, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH, FORMATION_COLS, FORMATION_H_PITCH,
    FORMATION_LEFT, FORMATION_ROWS, FORMATION_TOP, FORMATION_V_PITCH, HEIGHT, MUZZLE_OFFSET,
    SHIP_SPEED, WIDTH,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: ship centered near the bottom edge and
/// the full enemy formation in row-major order, all sweeping right.
///
/// Row-major order matters: collision resolution is first-match, so the
/// formation's iteration order is part of the observable rules.
pub fn init_state() -> GameState {
    let mut enemies = Vec::with_capacity(FORMATION_ROWS * FORMATION_COLS);
    for row in 0..FORMATION_ROWS {
        for col in 0..FORMATION_COLS {
            enemies.push(Enemy {
                x: FORMATION_LEFT + col as f64 * FORMATION_H_PITCH,
                y: FORMATION_TOP + row as f64 * FORMATION_V_PITCH,
                moving_right: true,
            });
        }
    }
    GameState {
        ship: Ship {
            x: WIDTH / 2.0 - 20.0,
            y: HEIGHT - 50.0,
            speed: SHIP_SPEED,
        },
        bullets: Vec::new(),
        enemies,
        score: 0,
        paused: false,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply a single key-press event.
///
/// Pause is always honoured, even while paused.  Movement and firing are
/// inert while paused.  Movement applies one step per event; holding a
/// key only moves the ship at whatever rate the terminal auto-repeats.
pub fn key_press(state: &GameState, key: Key) -> GameState {
    match key {
        Key::Pause => toggle_pause(state),
        _ if state.paused => state.clone(),
        Key::Left => move_ship_left(state),
        Key::Right => move_ship_right(state),
        Key::Fire => fire_bullet(state),
    }
}

/// Apply a single key-release event.
///
/// Releasing a movement key restores the default ship speed.  Nothing in
/// the current rules ever changes the speed, so this is observable only
/// if a caller has adjusted `ship.speed` directly; it is kept because the
/// original game behaves this way.
pub fn key_release(state: &GameState, key: Key) -> GameState {
    match key {
        Key::Left | Key::Right => GameState {
            ship: Ship {
                speed: SHIP_SPEED,
                ..state.ship.clone()
            },
            ..state.clone()
        },
        _ => state.clone(),
    }
}

/// One ship step to the left.  The ship is never clamped to the
/// playfield; it may drift off-screen indefinitely.
pub fn move_ship_left(state: &GameState) -> GameState {
    GameState {
        ship: Ship {
            x: state.ship.x - state.ship.speed,
            ..state.ship.clone()
        },
        ..state.clone()
    }
}

/// One ship step to the right.  No clamping, same as the left step.
pub fn move_ship_right(state: &GameState) -> GameState {
    GameState {
        ship: Ship {
            x: state.ship.x + state.ship.speed,
            ..state.ship.clone()
        },
        ..state.clone()
    }
}

/// Spawn one bullet at the ship's muzzle.  No cooldown and no cap: every
/// press event produces a bullet, so the fire rate is bounded only by the
/// event rate.
pub fn fire_bullet(state: &GameState) -> GameState {
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        x: state.ship.x + MUZZLE_OFFSET,
        y: state.ship.y,
    });
    GameState {
        bullets,
        ..state.clone()
    }
}

/// Flip the pause flag.
pub fn toggle_pause(state: &GameState) -> GameState {
    GameState {
        paused: !state.paused,
        ..state.clone()
    }
}

// ── Score ────────────────────────────────────────────────────────────────────

/// Zero the score, touching nothing else.  Not bound to any input; a
/// restart or attract-mode flow would call it directly.
pub fn reset_score(state: &GameState) -> GameState {
    GameState {
        score: 0,
        ..state.clone()
    }
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// While paused this is the identity, so the driver may keep invoking it
/// every frame and rely on the state coming back untouched.
pub fn tick(state: &GameState) -> GameState {
    if state.paused {
        return state.clone();
    }

    // ── 1. Move bullets, discarding any that leave the top edge ─────────────
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let y = b.y - BULLET_SPEED;
            if y < 0.0 {
                None
            } else {
                Some(Bullet { y, ..b.clone() })
            }
        })
        .collect();

    // ── 2. Sweep enemies, reversing and dropping a rank at the edges ────────
    let enemies: Vec<Enemy> = state.enemies.iter().map(step_enemy).collect();

    // ── 3. Collision: first intersecting enemy wins ─────────────────────────
    // Index sets instead of removal-during-iteration: a bullet stops at
    // its first not-yet-killed hit, and a killed enemy is invisible to
    // every later bullet in the same tick.
    let mut spent_bullets: Vec<usize> = Vec::new();
    let mut killed_enemies: Vec<usize> = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        for (ei, enemy) in enemies.iter().enumerate() {
            if !killed_enemies.contains(&ei) && intersects(bullet, enemy) {
                spent_bullets.push(bi);
                killed_enemies.push(ei);
                break; // one kill per bullet
            }
        }
    }

    let score = state.score + killed_enemies.len() as u32;

    let bullets: Vec<Bullet> = bullets
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !spent_bullets.contains(i))
        .map(|(_, b)| b)
        .collect();

    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e)
        .collect();

    // No end condition: an empty formation just keeps ticking.
    GameState {
        bullets,
        enemies,
        score,
        ..state.clone()
    }
}

/// One tick of an enemy's sweep: march sideways, and at a playfield edge
/// clamp to it, reverse, and drop one rank.  Clamp and flip complete
/// within the tick, so end-of-tick `x` is always inside
/// `[0, WIDTH − ENEMY_WIDTH]` and `y` never decreases.
fn step_enemy(enemy: &Enemy) -> Enemy {
    let mut e = enemy.clone();
    if e.moving_right {
        e.x += ENEMY_SPEED;
        if e.x > WIDTH - ENEMY_WIDTH {
            e.x = WIDTH - ENEMY_WIDTH;
            e.moving_right = false;
            e.y += ENEMY_DROP;
        }
    } else {
        e.x -= ENEMY_SPEED;
        if e.x < 0.0 {
            e.x = 0.0;
            e.moving_right = true;
            e.y += ENEMY_DROP;
        }
    }
    e
}

// ── Collision predicate ──────────────────────────────────────────────────────

/// Axis-aligned box test between a bullet's hitbox and an enemy.
///
/// All four comparisons are strict: exactly touching edges do not
/// register.  The bullet hitbox (5×10) is smaller than its drawn sprite
/// (10×20); see `BULLET_HITBOX_WIDTH`.
pub fn intersects(bullet: &Bullet, enemy: &Enemy) -> bool {
    bullet.x < enemy.x + ENEMY_WIDTH
        && bullet.x + BULLET_HITBOX_WIDTH > enemy.x
        && bullet.y < enemy.y + ENEMY_HEIGHT
        && bullet.y + BULLET_HITBOX_HEIGHT > enemy.y
}
