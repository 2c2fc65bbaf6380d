use crazy_eights::{opponent_turn, Card, GameState, Rank, Status, Suit, Turn};

fn card(id: u16, suit: Suit, rank: Rank) -> Card {
    Card {
        id,
        suit,
        rank,
        face_up: false,
    }
}

fn opponent_to_act(mut state: GameState) -> GameState {
    state.turn = Turn::Opponent;
    state
}

#[test]
fn prefers_the_first_playable_non_eight() {
    // Hand order: an eight first, then an unplayable heart, then a spade
    // that matches the top card's suit. The eight must be held back.
    let state = opponent_to_act(GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![
            card(10, Suit::Spades, Rank::Eight),
            card(11, Suit::Hearts, Rank::Five),
            card(12, Suit::Spades, Rank::Three),
        ],
        card(0, Suit::Spades, Rank::Nine),
    ));

    let next = opponent_turn(&state);
    assert_eq!(next.top_discard().map(|c| c.id), Some(12));
    assert_eq!(next.ai_hand.len(), 2);
    assert_eq!(next.wild_suit, None);
    assert_eq!(next.turn, Turn::Player);
    assert_eq!(next.last_action, "AI played the 3 of spades");
}

#[test]
fn falls_back_to_an_eight_when_nothing_plain_matches() {
    let state = opponent_to_act(GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![
            card(10, Suit::Hearts, Rank::Five),
            card(11, Suit::Diamonds, Rank::Eight),
        ],
        card(0, Suit::Spades, Rank::Nine),
    ));

    let next = opponent_turn(&state);
    assert_eq!(next.top_discard().map(|c| c.id), Some(11));
    // The remaining hand is a lone heart, so hearts is declared.
    assert_eq!(next.wild_suit, Some(Suit::Hearts));
    assert_eq!(next.turn, Turn::Player);
    assert!(next.last_action.contains("set suit to hearts"), "{}", next.last_action);
}

#[test]
fn wild_suit_tie_breaks_by_suit_order() {
    // After the eight leaves, the hand counts are clubs 1, diamonds 1.
    // Diamonds precedes clubs in the suit enumeration, so diamonds wins.
    let state = opponent_to_act(GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![
            card(10, Suit::Clubs, Rank::Three),
            card(11, Suit::Diamonds, Rank::Three),
            card(12, Suit::Spades, Rank::Eight),
        ],
        card(0, Suit::Hearts, Rank::Nine),
    ));

    let next = opponent_turn(&state);
    assert_eq!(next.top_discard().map(|c| c.id), Some(12));
    assert_eq!(next.wild_suit, Some(Suit::Diamonds));
}

#[test]
fn eight_as_last_card_defaults_to_spades_and_wins() {
    let state = opponent_to_act(GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![card(10, Suit::Hearts, Rank::Eight)],
        card(0, Suit::Clubs, Rank::Nine),
    ));

    let next = opponent_turn(&state);
    assert!(next.ai_hand.is_empty());
    assert_eq!(next.wild_suit, Some(Suit::Spades));
    assert_eq!(next.status, Status::Lost);
}

#[test]
fn draws_when_nothing_is_playable() {
    let mut state = opponent_to_act(GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![card(10, Suit::Hearts, Rank::Five)],
        card(0, Suit::Spades, Rank::Nine),
    ));
    state.deck.push(card(20, Suit::Diamonds, Rank::Jack));

    let next = opponent_turn(&state);
    assert_eq!(next.ai_hand.len(), 2);
    assert!(!next.ai_hand[1].face_up, "opponent draws stay hidden");
    assert!(next.deck.is_empty());
    assert_eq!(next.turn, Turn::Player);
    assert_eq!(next.last_action, "AI drew a card");
}

#[test]
fn skips_the_turn_when_the_deck_is_empty() {
    let state = opponent_to_act(GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![card(10, Suit::Hearts, Rank::Five)],
        card(0, Suit::Spades, Rank::Nine),
    ));

    let next = opponent_turn(&state);
    assert_eq!(next.ai_hand.len(), 1);
    assert_eq!(next.turn, Turn::Player);
    assert!(next.last_action.contains("skipped"), "{}", next.last_action);
}

#[test]
fn stale_tick_is_a_no_op() {
    // A scheduled opponent move that fires out of turn, or after the game
    // has left the playing phase, must not touch the state.
    let mut state = GameState::with_hands(
        vec![card(1, Suit::Hearts, Rank::Four)],
        vec![card(10, Suit::Spades, Rank::Five)],
        card(0, Suit::Spades, Rank::Nine),
    );
    assert_eq!(state.turn, Turn::Player);
    assert_eq!(opponent_turn(&state), state);

    state.turn = Turn::Opponent;
    state.status = Status::AwaitingWildSuit;
    assert_eq!(opponent_turn(&state), state);

    state.status = Status::Won;
    assert_eq!(opponent_turn(&state), state);
}
