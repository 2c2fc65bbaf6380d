use crate::cards::Card;
use crate::engine::apply::resolve_win;
use crate::hint::compute_hint;
use crate::rules::is_playable;
use crate::state::GameState;
use crate::types::{Rank, Status, Suit, Turn, ALL_SUITS};

/// Deterministic move preference for the opponent:
/// - first playable non-eight in hand order
/// - else first playable eight in hand order
/// - else no play (the opponent draws)
///
/// Eights are held back so they are spent only when nothing plain matches.
fn choose_card(hand: &[Card], top: &Card, wild_suit: Option<Suit>) -> Option<u16> {
    let mut first_eight: Option<u16> = None;
    for card in hand {
        if !is_playable(card, top, wild_suit) {
            continue;
        }
        if card.rank == Rank::Eight {
            if first_eight.is_none() {
                first_eight = Some(card.id);
            }
        } else {
            return Some(card.id);
        }
    }
    first_eight
}

/// Wild suit the opponent declares after playing an eight: the most frequent
/// suit in what remains of its hand. The scan follows `ALL_SUITS` order and
/// only a strictly greater count displaces the current pick, so ties resolve
/// to the earlier suit and an empty hand falls back to spades.
fn most_common_suit(hand: &[Card]) -> Suit {
    let mut counts = [0usize; 4];
    for card in hand {
        counts[card.suit as usize] += 1;
    }
    let mut best = ALL_SUITS[0];
    for &suit in &ALL_SUITS[1..] {
        if counts[suit as usize] > counts[best as usize] {
            best = suit;
        }
    }
    best
}

/// Run the opponent's turn.
///
/// No-op unless the game is in play and it is the opponent's turn; a
/// scheduled tick that fires after a restart or out of turn therefore leaves
/// the state alone. Plays the preferred card when one is playable (an eight
/// also declares a new wild suit), otherwise draws; drawing from an empty
/// deck skips the turn. The turn always returns to the player.
pub fn opponent_turn(state: &GameState) -> GameState {
    if state.status != Status::Playing || state.turn != Turn::Opponent {
        return state.clone();
    }
    let Some(&top) = state.top_discard() else {
        return state.clone();
    };

    let mut next = state.clone();
    match choose_card(&next.ai_hand, &top, next.wild_suit) {
        Some(card_id) => {
            let Some(mut played) = next.take_from_ai_hand(card_id) else {
                return state.clone();
            };
            played.face_up = true;
            if played.rank == Rank::Eight {
                let declared = most_common_suit(&next.ai_hand);
                next.wild_suit = Some(declared);
                next.last_action = format!("AI played an 8 and set suit to {declared}");
            } else {
                next.wild_suit = None;
                next.last_action = format!("AI played the {}", played.label());
            }
            next.discard.push(played);
            next.turn = Turn::Player;
            resolve_win(&mut next);
        }
        None => {
            match next.deck.pop() {
                Some(mut card) => {
                    card.face_up = false; // stays hidden in the opponent's hand
                    next.ai_hand.push(card);
                    next.last_action = "AI drew a card".to_string();
                }
                None => {
                    next.last_action = "AI deck empty, turn skipped".to_string();
                }
            }
            next.turn = Turn::Player;
        }
    }
    next.hint = compute_hint(&next);
    next
}
