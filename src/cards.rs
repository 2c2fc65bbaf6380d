use crate::types::{Rank, Suit};
use serde::{Deserialize, Serialize};

/// A single playing card. `id` is unique within one game and is the handle
/// the command operations accept; `face_up` is presentation metadata and is
/// never consulted for legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u16,
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Human-readable name used in log and hint text, e.g. "7 of hearts".
    #[inline]
    pub fn label(&self) -> String {
        format!("{} of {}", self.rank, self.suit)
    }
}
