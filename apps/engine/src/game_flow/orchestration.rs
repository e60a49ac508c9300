//! Stepping the match forward.

use serde::Serialize;
use tracing::{info, trace};

use super::GameFlow;
use crate::domain::scoring::winning_team;
use crate::domain::rules::TEAMS;
use crate::domain::{GameStatus, Phase, Team};
use crate::error::EngineError;

/// Result of [`GameFlow::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub steps: u64,
    /// None when the step limit was reached first.
    pub winner: Option<Team>,
    pub scores: [u8; TEAMS],
}

impl GameFlow {
    /// Perform exactly one phase transition and return the phase reached.
    pub fn step_hand(&mut self) -> Result<Phase, EngineError> {
        if self.state.is_over() {
            return Err(EngineError::GameOver);
        }
        let from = self.state.hand.phase;
        match from {
            Phase::Deal => self.deal()?,
            Phase::BidRound1 => self.bid_round_1()?,
            Phase::BidRound2 => self.bid_round_2()?,
            Phase::GoAloneDecision => self.go_alone_decision()?,
            Phase::DealerPickupDiscard => self.dealer_pickup_discard()?,
            Phase::PlayTrick => self.play_trick()?,
            Phase::HandOver => self.hand_over()?,
        }
        let to = self.state.hand.phase;
        trace!(?from, ?to, "phase transition");
        Ok(to)
    }

    /// [`step_hand`](Self::step_hand), then end the game once a team has
    /// reached the winning score.
    pub fn step_game(&mut self) -> Result<GameStatus, EngineError> {
        self.step_hand()?;
        if let Some(team) = winning_team(self.state.scores) {
            self.state.status = GameStatus::GameOver;
            info!(
                seed = self.state.seed,
                winner = team,
                scores = ?self.state.scores,
                hands = self.hands_scored,
                "game over"
            );
        }
        Ok(self.state.status)
    }

    /// Step until the game ends or `max_steps` transitions have run.
    pub fn run(&mut self, max_steps: u64) -> Result<RunSummary, EngineError> {
        let mut steps = 0;
        while !self.state.is_over() && steps < max_steps {
            self.step_game()?;
            steps += 1;
        }
        Ok(RunSummary {
            steps,
            winner: self.winner(),
            scores: self.state.scores,
        })
    }

    /// Winning team, once the game is over.
    pub fn winner(&self) -> Option<Team> {
        if self.state.is_over() {
            winning_team(self.state.scores)
        } else {
            None
        }
    }
}
