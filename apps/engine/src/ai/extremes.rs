//! Baseline AIs that always play their lowest or highest legal card.
//!
//! Both pass in round one, name the first legal suit in round two, never go
//! alone and discard their weakest card. They differ only in trick play.

use super::policy::{self, discardable, first_callable, playable, PhasePolicy};
use super::trait_def::{AiError, AiPlayer};
use crate::domain::{ActionId, ActionMask, Card, Hand, Observation, Suit};

fn trump_of(obs: &Observation) -> Result<Suit, AiError> {
    obs.trump
        .ok_or_else(|| AiError::InvalidMove("trump is not set".into()))
}

fn call_first_or_pass(legal: ActionMask) -> ActionId {
    first_callable(legal).map_or(ActionId::PASS, ActionId::call_trump)
}

fn discard_lowest(obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
    let trump = trump_of(obs)?;
    policy::lowest(discardable(legal), trump, None)
        .map(ActionId::discard)
        .ok_or_else(|| AiError::InvalidMove("no discard offered".into()))
}

fn play_with(
    obs: &Observation,
    legal: ActionMask,
    pick: fn(Hand, Suit, Option<Suit>) -> Option<Card>,
) -> Result<ActionId, AiError> {
    let trump = trump_of(obs)?;
    pick(playable(legal), trump, obs.led_suit())
        .map(ActionId::play)
        .ok_or_else(|| AiError::InvalidMove("no play offered".into()))
}

/// Plays the weakest legal card every trick.
#[derive(Debug, Clone, Default)]
pub struct MinPlayer;

impl MinPlayer {
    pub const NAME: &'static str = "MinPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl PhasePolicy for MinPlayer {
    fn bid_round_1(&self, _obs: &Observation, _legal: ActionMask) -> Result<ActionId, AiError> {
        Ok(ActionId::PASS)
    }

    fn bid_round_2(&self, _obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        Ok(call_first_or_pass(legal))
    }

    fn go_alone(&self, _obs: &Observation, _legal: ActionMask) -> Result<ActionId, AiError> {
        Ok(ActionId::GO_ALONE_NO)
    }

    fn discard(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        discard_lowest(obs, legal)
    }

    fn play(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        play_with(obs, legal, policy::lowest)
    }
}

impl AiPlayer for MinPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_action(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        policy::dispatch(self, obs, legal)
    }
}

/// Plays the strongest legal card every trick.
#[derive(Debug, Clone, Default)]
pub struct MaxPlayer;

impl MaxPlayer {
    pub const NAME: &'static str = "MaxPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl PhasePolicy for MaxPlayer {
    fn bid_round_1(&self, _obs: &Observation, _legal: ActionMask) -> Result<ActionId, AiError> {
        Ok(ActionId::PASS)
    }

    fn bid_round_2(&self, _obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        Ok(call_first_or_pass(legal))
    }

    fn go_alone(&self, _obs: &Observation, _legal: ActionMask) -> Result<ActionId, AiError> {
        Ok(ActionId::GO_ALONE_NO)
    }

    fn discard(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        discard_lowest(obs, legal)
    }

    fn play(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        play_with(obs, legal, policy::highest)
    }
}

impl AiPlayer for MaxPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_action(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        policy::dispatch(self, obs, legal)
    }
}
