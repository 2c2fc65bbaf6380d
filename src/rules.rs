use crate::cards::Card;
use crate::types::{Rank, Suit};

/// Legality of laying `card` on `top_card` under an optional wild suit.
///
/// Eights are always playable; this dominates the wild-suit restriction, so
/// an eight may be played even while a non-matching wild suit is active.
/// With a wild suit declared, only that suit matches. Otherwise the usual
/// suit-or-rank match against the top card applies.
#[inline]
pub fn is_playable(card: &Card, top_card: &Card, wild_suit: Option<Suit>) -> bool {
    if card.rank == Rank::Eight {
        return true;
    }
    match wild_suit {
        Some(wild) => card.suit == wild,
        None => card.suit == top_card.suit || card.rank == top_card.rank,
    }
}

/// Ids of every playable card in `hand`, in hand order.
///
/// Hand order is the deterministic tie-break shared by the opponent's move
/// selection and the hint, and is what the presentation layer queries to
/// render per-card affordances.
pub fn playable_cards(hand: &[Card], top_card: &Card, wild_suit: Option<Suit>) -> Vec<u16> {
    hand.iter()
        .filter(|card| is_playable(card, top_card, wild_suit))
        .map(|card| card.id)
        .collect()
}
