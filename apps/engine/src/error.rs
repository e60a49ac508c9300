use thiserror::Error;

use crate::ai::AiError;
use crate::domain::{ActionId, ActionMask, DomainError, Phase, Seat};

/// Errors surfaced by [`GameFlow`](crate::game_flow::GameFlow).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("seat {seat} chose {requested:?}, which is not in legal mask {mask}")]
    IllegalAction {
        seat: Seat,
        requested: ActionId,
        mask: ActionMask,
    },
    #[error("seat {seat} failed to choose an action: {source}")]
    Ai {
        seat: Seat,
        #[source]
        source: AiError,
    },
    #[error("phase handler for {expected:?} invoked during {found:?}")]
    InvalidPhase { expected: Phase, found: Phase },
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl EngineError {
    pub fn illegal_action(seat: Seat, requested: ActionId, mask: ActionMask) -> Self {
        Self::IllegalAction {
            seat,
            requested,
            mask,
        }
    }
}
