//! Domain layer: cards, the deal engine and the match loop.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod engine;
pub mod hand;
pub mod match_play;
pub mod observation;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_deal_engine;
#[cfg(test)]
mod tests_props_deal;
#[cfg(test)]
mod tests_props_trick_winner;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit, DECK_POINTS};
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use engine::{DealEngine, DealOptions, DealResult, GameRng, TrickInfo, TrickOutcome};
pub use hand::Hand;
pub use match_play::{Match, MatchResult, MatchScores};
pub use observation::{Observation, ACTION_COUNT, OBS_SIZE};
pub use player::{standard_table, table_with, Player};
pub use rules::RuleConfig;
pub use scoring::TeamScores;
pub use seed_derivation::derive_deal_seed;
pub use state::{Phase, PlayerId, Seat, Team};
pub use tricks::{legal_moves, Trick, TrickRecord};
