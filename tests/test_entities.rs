use get_ducked::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::Dying);
    assert_ne!(GameStatus::Dying, GameStatus::GameOver);
    assert_eq!(GameEvent::Gunshot, GameEvent::Gunshot);
    assert_ne!(GameEvent::Gunshot, GameEvent::DuckHit);

    // Clone must produce an equal value
    let status = GameStatus::Dying;
    assert_eq!(status.clone(), GameStatus::Dying);
}

#[test]
fn input_state_defaults_to_no_keys() {
    let input = InputState::default();
    assert!(!input.left && !input.right && !input.up && !input.down);
}

#[test]
fn vec2_construction() {
    let v = Vec2::new(3.0, -4.0);
    assert_eq!(v.x, 3.0);
    assert_eq!(v.y, -4.0);
    assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            pos: Vec2::new(20.0, 10.0),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            health: 100,
            frame_idx: 0,
            last_anim_ms: 0,
            dying_elapsed_ms: 0,
        },
        hunters: Vec::new(),
        boats: Vec::new(),
        airplanes: Vec::new(),
        hearts: Vec::new(),
        clouds: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        high_score: 0,
        status: GameStatus::Playing,
        frame: 0,
        clock_ms: 0,
        next_heart_ms: 0,
        events: Vec::new(),
        width: 80,
        height: 24,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99.0;
    cloned.score = 999;
    cloned.bullets.push(Bullet { pos: Vec2::new(5.0, 5.0), vx: 0.0, vy: -30.0 });

    assert_eq!(original.player.pos.x, 20.0);
    assert_eq!(original.score, 0);
    assert!(original.bullets.is_empty());
}
