//! AI players: the `AiPlayer` trait, the built-in players and their registry.

mod config;
mod extremes;
mod heuristic;
pub mod policy;
mod random;
pub mod registry;
mod scripted;
mod trait_def;

pub use config::AiConfig;
pub use extremes::{MaxPlayer, MinPlayer};
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use scripted::ScriptedPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create a registered AI by name and hand it `config`.
///
/// Returns None if `ai_type` is not registered.
pub fn create_ai(ai_type: &str, config: AiConfig) -> Option<Box<dyn AiPlayer>> {
    registry::by_name(ai_type).map(|factory| (factory.make)(&config))
}
