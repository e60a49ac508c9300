//! AI player trait definition.

use thiserror::Error;

use crate::domain::{ActionId, ActionMask, Observation};

/// Errors that can occur during AI decision-making.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI could not produce a move for the request
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players (bots).
///
/// The engine hands each request the seat's [`Observation`] together with the
/// mask of legal action ids; the returned id must be a member of that mask or
/// the engine stops the game with an illegal-action error.
///
/// Methods take `&self` so one boxed player can be shared behind `Send + Sync`;
/// players that keep mutable state (an RNG, counters) wrap it in a `Mutex`.
pub trait AiPlayer: Send + Sync {
    /// Short stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Choose one action from `legal`.
    fn select_action(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError>;

    /// A new match is starting with this engine seed.
    fn on_new_match(&self, _seed: u64) {}

    /// A new deal is starting; `hand_index` counts deals from zero, redeals included.
    fn on_new_hand(&self, _hand_index: u32) {}
}
