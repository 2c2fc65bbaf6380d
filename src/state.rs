use crate::cards::Card;
use crate::types::{Status, Suit, Turn};
use serde::{Deserialize, Serialize};

/// The single root aggregate: one value of this type is the whole game.
///
/// The deck and discard pile are stacks whose top is the *end* of the vector
/// (pop semantics). Hands are kept in draw order; that order carries no rule
/// weight except as the deterministic tie-break for the opponent's move
/// selection and the hint.
///
/// Command operations never mutate a state in place: they clone, transform
/// the clone and return it, so successive snapshots share nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub deck: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    pub discard: Vec<Card>,
    pub turn: Turn,
    pub status: Status,
    pub wild_suit: Option<Suit>,
    /// Human-readable description of the most recent transition.
    pub last_action: String,
    /// Advisory line for the human player, refreshed after each transition.
    pub hint: String,
}

impl GameState {
    /// Test-friendly constructor: a playing state with the given hands, the
    /// given discard top, an empty deck and no wild suit, player to act.
    pub fn with_hands(player_hand: Vec<Card>, ai_hand: Vec<Card>, top: Card) -> Self {
        let mut top = top;
        top.face_up = true; // discard top is always face-up
        Self {
            deck: Vec::new(),
            player_hand,
            ai_hand,
            discard: vec![top],
            turn: Turn::Player,
            status: Status::Playing,
            wild_suit: None,
            last_action: String::new(),
            hint: String::new(),
        }
    }

    /// The sole card legality is checked against.
    #[inline]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Remove a card id from the player's hand. Returns the card if present.
    #[inline]
    pub fn take_from_player_hand(&mut self, card_id: u16) -> Option<Card> {
        let pos = self.player_hand.iter().position(|card| card.id == card_id)?;
        Some(self.player_hand.remove(pos))
    }

    /// Remove a card id from the opponent's hand. Returns the card if present.
    #[inline]
    pub fn take_from_ai_hand(&mut self, card_id: u16) -> Option<Card> {
        let pos = self.ai_hand.iter().position(|card| card.id == card_id)?;
        Some(self.ai_hand.remove(pos))
    }
}
