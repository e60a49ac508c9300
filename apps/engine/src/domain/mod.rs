//! Domain layer: pure euchre rules, types and helpers.

pub mod actions;
pub mod bidding;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod errors;
pub mod hand;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tables;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use actions::{Action, ActionId, ActionKind, ActionMask};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use errors::DomainError;
pub use hand::Hand;
pub use player_view::Observation;
pub use rules::RulesConfig;
pub use scoring::{HandOutcome, HandScore};
pub use seed_derivation::{derive_ai_seed, derive_game_seed};
pub use state::{GameState, GameStatus, HandState, Phase, Seat, Team};
pub use tables::tables;
