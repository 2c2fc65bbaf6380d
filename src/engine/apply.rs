use rand::Rng;

use crate::deck::build_shuffled_deck;
use crate::hint::compute_hint;
use crate::rules::is_playable;
use crate::state::GameState;
use crate::types::{Rank, Status, Suit, Turn};

/// Cards dealt to each side at game start.
pub const HAND_SIZE: usize = 8;

/// Start a fresh game: shuffle, deal eight cards to each side, seed the
/// discard pile.
///
/// The deal is the first sixteen cards of the shuffle in pop order (player
/// first, face-up; then opponent, face-down) with no re-shuffle afterwards.
/// The discard seed must not be an eight, so eights popped for the seed are
/// tucked under the bottom of the deck until a plain card turns up; a full
/// deck always holds one, so the scan terminates.
pub fn new_game<R: Rng>(rng: &mut R) -> GameState {
    let mut deck = build_shuffled_deck(rng);

    let mut player_hand = Vec::with_capacity(HAND_SIZE);
    for _ in 0..HAND_SIZE {
        if let Some(mut card) = deck.pop() {
            card.face_up = true;
            player_hand.push(card);
        }
    }
    let mut ai_hand = Vec::with_capacity(HAND_SIZE);
    for _ in 0..HAND_SIZE {
        if let Some(card) = deck.pop() {
            ai_hand.push(card);
        }
    }

    let mut discard = Vec::new();
    while let Some(mut card) = deck.pop() {
        if card.rank == Rank::Eight {
            deck.insert(0, card);
        } else {
            card.face_up = true;
            discard.push(card);
            break;
        }
    }

    GameState {
        deck,
        player_hand,
        ai_hand,
        discard,
        turn: Turn::Player,
        status: Status::Playing,
        wild_suit: None,
        last_action: "new game dealt".to_string(),
        hint: "match suit or rank of the top card".to_string(),
    }
}

/// Terminal check. The player's empty hand is checked first, so a state
/// where both hands are empty resolves as a win for the player.
#[inline]
pub fn check_win(state: &GameState) -> Option<Status> {
    if state.player_hand.is_empty() {
        Some(Status::Won)
    } else if state.ai_hand.is_empty() {
        Some(Status::Lost)
    } else {
        None
    }
}

/// Fold a terminal outcome into the state, if there is one.
#[inline]
pub(crate) fn resolve_win(state: &mut GameState) {
    if let Some(outcome) = check_win(state) {
        state.status = outcome;
    }
}

/// Draw one card for the player, or forfeit the turn when the deck is dry.
///
/// Drawing from an empty deck still ends the turn: the player gets no second
/// chance. No-op unless the game is in play and it is the player's turn.
pub fn player_draw(state: &GameState) -> GameState {
    if state.status != Status::Playing || state.turn != Turn::Player {
        return state.clone();
    }
    let mut next = state.clone();
    match next.deck.pop() {
        Some(mut card) => {
            card.face_up = true;
            next.player_hand.push(card);
            next.last_action = "you drew a card".to_string();
        }
        None => {
            next.last_action = "deck empty, turn skipped".to_string();
        }
    }
    next.turn = Turn::Opponent;
    next.hint = compute_hint(&next);
    next
}

/// Play the named card from the player's hand onto the discard pile.
///
/// Returns the input state unchanged when the game is not in play, it is not
/// the player's turn, the card is not in the hand, or the card is not
/// playable. An eight parks the game in wild-suit selection without passing
/// the turn; any other card clears the wild suit, passes the turn and runs
/// the win check.
pub fn player_play(state: &GameState, card_id: u16) -> GameState {
    if state.status != Status::Playing || state.turn != Turn::Player {
        return state.clone();
    }
    let Some(&top) = state.top_discard() else {
        return state.clone();
    };
    let Some(&card) = state.player_hand.iter().find(|card| card.id == card_id) else {
        return state.clone();
    };
    if !is_playable(&card, &top, state.wild_suit) {
        return state.clone();
    }

    let mut next = state.clone();
    let Some(mut played) = next.take_from_player_hand(card_id) else {
        return state.clone();
    };
    played.face_up = true;
    next.last_action = format!("you played the {}", played.label());
    next.discard.push(played);

    if played.rank == Rank::Eight {
        // Wild suit stays untouched until the selection resolves.
        next.status = Status::AwaitingWildSuit;
    } else {
        next.wild_suit = None;
        next.turn = Turn::Opponent;
        resolve_win(&mut next);
    }
    next.hint = compute_hint(&next);
    next
}

/// Resolve the wild-suit selection that follows a played eight.
///
/// No-op outside `AwaitingWildSuit`. Runs the win check afterwards: the
/// eight may have been the player's last card, and the win must still land
/// once the suit is chosen.
pub fn select_wild_suit(state: &GameState, suit: Suit) -> GameState {
    if state.status != Status::AwaitingWildSuit {
        return state.clone();
    }
    let mut next = state.clone();
    next.wild_suit = Some(suit);
    next.status = Status::Playing;
    next.turn = Turn::Opponent;
    next.last_action = format!("you set the suit to {suit}");
    resolve_win(&mut next);
    next.hint = compute_hint(&next);
    next
}
