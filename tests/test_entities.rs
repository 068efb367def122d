use space_invaders::entities::*;

#[test]
fn key_derives_copy_and_eq() {
    let key = Key::Fire;
    let copy = key;
    assert_eq!(key, copy);
    assert_ne!(Key::Left, Key::Right);
    assert_ne!(Key::Fire, Key::Pause);
}

#[test]
fn entity_clone_produces_equal_values() {
    let ship = Ship { x: 380.0, y: 550.0, speed: SHIP_SPEED };
    assert_eq!(ship.clone(), ship);

    let bullet = Bullet { x: 397.5, y: 550.0 };
    assert_eq!(bullet.clone(), bullet);

    let enemy = Enemy { x: 50.0, y: 50.0, moving_right: true };
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        ship: Ship { x: 380.0, y: 550.0, speed: SHIP_SPEED },
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        paused: false,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.x = 99.0;
    cloned.score = 999;
    cloned.paused = true;
    cloned.enemies.push(Enemy { x: 50.0, y: 50.0, moving_right: true });

    assert_eq!(original.ship.x, 380.0);
    assert_eq!(original.score, 0);
    assert!(!original.paused);
    assert!(original.enemies.is_empty());
}

#[test]
fn formation_constants_describe_the_playfield() {
    // The last column and the deepest starting row stay inside the field
    let last_col_x = FORMATION_LEFT + (FORMATION_COLS as f64 - 1.0) * FORMATION_H_PITCH;
    let last_row_y = FORMATION_TOP + (FORMATION_ROWS as f64 - 1.0) * FORMATION_V_PITCH;
    assert!(last_col_x + ENEMY_WIDTH <= WIDTH);
    assert!(last_row_y + ENEMY_HEIGHT <= HEIGHT);
}
