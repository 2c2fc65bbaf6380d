use crate::rules::is_playable;
use crate::state::GameState;
use crate::types::{Rank, Status, Turn};

/// Compute the advisory line for the human player.
///
/// Purely derived from the state; callers refresh it after each transition.
/// The suggestion follows the first playable card in hand order, the same
/// scan the opponent uses, so the advice is reproducible.
pub fn compute_hint(state: &GameState) -> String {
    match state.status {
        Status::Won => "you won!".to_string(),
        Status::Lost => "the opponent won".to_string(),
        Status::Paused => "game paused".to_string(),
        Status::AwaitingWildSuit => "pick the suit the next card must match".to_string(),
        Status::Playing => match state.turn {
            Turn::Opponent => "opponent is thinking".to_string(),
            Turn::Player => {
                let Some(top) = state.top_discard() else {
                    return "no playable card, draw from the deck".to_string();
                };
                let first = state
                    .player_hand
                    .iter()
                    .find(|card| is_playable(card, top, state.wild_suit));
                match first {
                    Some(card) if card.rank == Rank::Eight => {
                        "play your 8 to change the suit".to_string()
                    }
                    Some(card) => format!("play the {}", card.label()),
                    None => "no playable card, draw from the deck".to_string(),
                }
            }
        },
    }
}
