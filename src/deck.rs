use crate::cards::Card;
use crate::types::{ALL_RANKS, ALL_SUITS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build the standard 52-card deck and shuffle it with the caller's RNG.
///
/// Exactly one card per (suit, rank) pair, ids assigned in construction
/// order so the id -> card mapping is the same for every game; only the
/// ordering differs between shuffles. Every card starts face-down. The top
/// of the returned deck is the end of the vector.
pub fn build_shuffled_deck<R: Rng>(rng: &mut R) -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    let mut id: u16 = 0;
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card {
                id,
                suit,
                rank,
                face_up: false,
            });
            id += 1;
        }
    }
    deck.shuffle(rng);
    deck
}
