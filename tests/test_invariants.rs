//! Property tests for the simulation's hard invariants.

use proptest::prelude::*;

use space_invaders::compute::{intersects, tick};
use space_invaders::entities::{
    Bullet, Enemy, GameState, Ship, ENEMY_WIDTH, HEIGHT, SHIP_SPEED, WIDTH,
};

fn arb_enemy() -> impl Strategy<Value = Enemy> {
    (0.0..=(WIDTH - ENEMY_WIDTH), 0.0..HEIGHT, any::<bool>())
        .prop_map(|(x, y, moving_right)| Enemy { x, y, moving_right })
}

fn arb_bullet() -> impl Strategy<Value = Bullet> {
    (0.0..WIDTH, 0.0..HEIGHT).prop_map(|(x, y)| Bullet { x, y })
}

fn arb_state(paused: bool) -> impl Strategy<Value = GameState> {
    (
        prop::collection::vec(arb_bullet(), 0..24),
        prop::collection::vec(arb_enemy(), 0..60),
        0u32..10_000,
        -200.0..(WIDTH + 200.0),
    )
        .prop_map(move |(bullets, enemies, score, ship_x)| GameState {
            ship: Ship { x: ship_x, y: HEIGHT - 50.0, speed: SHIP_SPEED },
            bullets,
            enemies,
            score,
            paused,
        })
}

proptest! {
    #[test]
    fn enemies_never_rise(state in arb_state(false)) {
        // Without bullets no enemy is removed, so positions compare
        // index by index.
        let state = GameState { bullets: Vec::new(), ..state };
        let next = tick(&state);
        for (before, after) in state.enemies.iter().zip(&next.enemies) {
            prop_assert!(after.y >= before.y);
        }
    }

    #[test]
    fn enemies_end_every_tick_inside_the_sweep_band(state in arb_state(false)) {
        let state = GameState { bullets: Vec::new(), ..state };
        let next = tick(&state);
        for enemy in &next.enemies {
            prop_assert!(enemy.x >= 0.0);
            prop_assert!(enemy.x <= WIDTH - ENEMY_WIDTH);
        }
    }

    #[test]
    fn paused_tick_is_identity(state in arb_state(true)) {
        prop_assert_eq!(tick(&state), state);
    }

    #[test]
    fn bullets_never_multiply_and_stay_on_screen(state in arb_state(false)) {
        let next = tick(&state);
        prop_assert!(next.bullets.len() <= state.bullets.len());
        for bullet in &next.bullets {
            prop_assert!(bullet.y >= 0.0);
        }
    }

    #[test]
    fn score_gain_equals_enemies_removed(state in arb_state(false)) {
        let next = tick(&state);
        let removed = state.enemies.len() - next.enemies.len();
        prop_assert_eq!((next.score - state.score) as usize, removed);
    }

    #[test]
    fn no_intersecting_pair_survives_resolution(state in arb_state(false)) {
        let next = tick(&state);
        for bullet in &next.bullets {
            for enemy in &next.enemies {
                prop_assert!(!intersects(bullet, enemy));
            }
        }
    }
}
