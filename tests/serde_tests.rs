use crazy_eights::{new_game, opponent_turn, player_draw, rng_for_game, GameState};

#[test]
fn json_round_trip_preserves_a_mid_game_state() {
    let mut state = new_game(&mut rng_for_game(0x00C0_FFEE, 1));
    state = player_draw(&state);
    state = opponent_turn(&state);

    let json = serde_json::to_string(&state).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);
}

#[test]
fn enum_variants_use_pascal_case_on_the_wire() {
    let state = new_game(&mut rng_for_game(1, 1));
    let json = serde_json::to_string(&state).expect("serialize");
    assert!(json.contains("\"status\":\"Playing\""), "{json}");
    assert!(json.contains("\"turn\":\"Player\""), "{json}");
}
