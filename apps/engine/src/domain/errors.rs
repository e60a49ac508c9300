//! Domain-level error type for pure rule operations.

use thiserror::Error;

use crate::domain::state::{Phase, Seat};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("phase mismatch: expected {expected:?}, found {found:?}")]
    PhaseMismatch { expected: Phase, found: Phase },
    #[error("seat {seat} does not hold {card}")]
    CardNotInHand { seat: Seat, card: Card },
    #[error("seat {seat} must follow suit instead of playing {card}")]
    MustFollowSuit { seat: Seat, card: Card },
    #[error("no card has been led in the current trick")]
    TrickNotStarted,
    #[error("card index {0} is out of range")]
    InvalidCard(u8),
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("trump has not been set")]
    TrumpNotSet,
    #[error("no maker has been recorded for this hand")]
    NoMaker,
    #[error("no face-up card for this hand")]
    NoFaceUpCard,
    #[error("deck exhausted while dealing")]
    DeckExhausted,
}

impl DomainError {
    pub fn phase_mismatch(expected: Phase, found: Phase) -> Self {
        Self::PhaseMismatch { expected, found }
    }

    /// Fail unless `found` is the phase an operation requires.
    pub fn require_phase(expected: Phase, found: Phase) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::phase_mismatch(expected, found))
        }
    }
}
