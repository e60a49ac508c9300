#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Four-player Euchre: a rule engine with a phase-based stepping API and a
//! set of AI players that drive it.

pub mod ai;
pub mod domain;
pub mod error;
pub mod game_flow;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer};
pub use domain::{
    Action, ActionId, ActionKind, ActionMask, Card, GameState, GameStatus, Hand, HandOutcome,
    Observation, Phase, Rank, RulesConfig, Seat, Suit, Team,
};
pub use error::EngineError;
pub use game_flow::{GameFlow, RunSummary};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
