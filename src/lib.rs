#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod state;
pub mod hint;
pub mod rng;

pub mod engine {
    pub mod apply;
}

pub mod ai;

// Re-exports: stable minimal API surface for external callers
pub use crate::ai::opponent_turn;
pub use crate::cards::Card;
pub use crate::deck::build_shuffled_deck;
pub use crate::engine::apply::{
    check_win, new_game, player_draw, player_play, select_wild_suit, HAND_SIZE,
};
pub use crate::hint::compute_hint;
pub use crate::rng::rng_for_game;
pub use crate::rules::{is_playable, playable_cards};
pub use crate::state::GameState;
pub use crate::types::{Rank, Status, Suit, Turn, ALL_RANKS, ALL_SUITS};
