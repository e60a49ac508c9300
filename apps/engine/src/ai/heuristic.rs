//! Heuristic — a deterministic rule-of-thumb euchre AI.
//!
//! Bidding:
//! - Score a candidate trump as trump count + 2 for the right bower + 1 for the
//!   left bower + 1 per off-suit ace.
//! - Round one: order up at 4 or more, counting one extra when the dealer
//!   (who picks the card up) is on our team.
//! - Round two: name the best-scoring legal suit at 4 or more, or whenever the
//!   dealer is stuck and may not pass.
//! - Go alone with 4+ trump including the right bower, or both bowers with a
//!   third trump and an off ace.
//!
//! Play:
//! - Leading: makers holding a bower pull trump from the top; otherwise cash an
//!   off-suit ace, else lead low from the shortest plain suit.
//! - Following: if partner is already winning, play low; otherwise win as
//!   cheaply as possible, or throw the lowest card.
//!
//! No randomness. The two bidding thresholds can be overridden through the
//! `order_up_threshold` and `call_threshold` fields of [`AiConfig`].

use super::policy::{
    self, cheapest_winner, current_winner, discardable, playable, standalone_power, HandStrength,
    PhasePolicy,
};
use super::config::AiConfig;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::state::partner_of;
use crate::domain::tables::effective_suit;
use crate::domain::{ActionId, ActionMask, Card, Hand, Observation, Rank, Suit};

const ORDER_UP_THRESHOLD: u8 = 4;
const CALL_THRESHOLD: u8 = 4;

#[derive(Debug, Clone)]
pub struct Heuristic {
    order_up_threshold: u8,
    call_threshold: u8,
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.1.0";

    pub fn new() -> Self {
        Self {
            order_up_threshold: ORDER_UP_THRESHOLD,
            call_threshold: CALL_THRESHOLD,
        }
    }

    /// Reads threshold overrides from `config`; absent or out-of-range
    /// values keep the defaults.
    pub fn from_config(config: &AiConfig) -> Self {
        let threshold = |key: &str, default: u8| {
            config
                .get_custom(key)
                .and_then(|v| v.as_u64())
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(default)
        };
        Self {
            order_up_threshold: threshold("order_up_threshold", ORDER_UP_THRESHOLD),
            call_threshold: threshold("call_threshold", CALL_THRESHOLD),
        }
    }

    fn trump_of(obs: &Observation) -> Result<Suit, AiError> {
        obs.trump
            .ok_or_else(|| AiError::InvalidMove("trump is not set".into()))
    }

    fn should_go_alone(s: HandStrength) -> bool {
        (s.trump_count >= 4 && s.right_bower)
            || (s.right_bower && s.left_bower && s.trump_count >= 3 && s.off_aces >= 1)
    }

    /// Plain (non-trump) cards grouped by suit, shortest suit first.
    fn shortest_plain_suit(hand: Hand, trump: Suit) -> Option<Hand> {
        Suit::ALL
            .into_iter()
            .filter(|&s| s != trump)
            .map(|s| hand.of_suit(s, trump))
            .filter(|h| !h.is_empty())
            .min_by_key(|h| h.count())
    }

    fn choose_lead(obs: &Observation, legal: Hand, trump: Suit) -> Option<Card> {
        let trumps = legal.of_suit(trump, trump);
        let strength = HandStrength::evaluate(legal, trump);
        if obs.on_making_team() && (strength.right_bower || strength.left_bower) {
            return policy::highest(trumps, trump, None);
        }
        let off_ace = legal
            .iter()
            .find(|&c| c.rank() == Rank::Ace && effective_suit(c, trump) != trump);
        if off_ace.is_some() {
            return off_ace;
        }
        match Self::shortest_plain_suit(legal, trump) {
            Some(short) => policy::lowest(short, trump, None),
            None => policy::lowest(trumps, trump, None),
        }
    }

    fn choose_follow(obs: &Observation, legal: Hand, trump: Suit) -> Option<Card> {
        let led = obs.led_suit()?;
        let lowest = policy::lowest(legal, trump, Some(led));
        let Some((winner, best)) = current_winner(obs) else {
            return lowest;
        };
        if winner == partner_of(obs.player) {
            return lowest;
        }
        cheapest_winner(legal, trump, led, best).or(lowest)
    }
}

impl PhasePolicy for Heuristic {
    fn bid_round_1(&self, obs: &Observation, _legal: ActionMask) -> Result<ActionId, AiError> {
        let face_up = obs
            .face_up
            .ok_or_else(|| AiError::InvalidMove("no face-up card".into()))?;
        let candidate = face_up.suit();
        let score = HandStrength::evaluate(obs.hand, candidate).score();
        let dealer_bonus = u8::from(obs.dealer % 2 == obs.team());
        if score + dealer_bonus >= self.order_up_threshold {
            Ok(ActionId::ORDER_UP)
        } else {
            Ok(ActionId::PASS)
        }
    }

    fn bid_round_2(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        let best = Suit::ALL
            .into_iter()
            .filter(|&s| legal.contains(ActionId::call_trump(s)))
            .map(|s| (s, HandStrength::evaluate(obs.hand, s).score()))
            .max_by_key(|&(_, score)| score);
        let must_call = !legal.contains(ActionId::PASS);
        match best {
            Some((suit, score)) if score >= self.call_threshold || must_call => {
                Ok(ActionId::call_trump(suit))
            }
            _ => Ok(ActionId::PASS),
        }
    }

    fn go_alone(&self, obs: &Observation, _legal: ActionMask) -> Result<ActionId, AiError> {
        let trump = Self::trump_of(obs)?;
        if Self::should_go_alone(HandStrength::evaluate(obs.hand, trump)) {
            Ok(ActionId::GO_ALONE_YES)
        } else {
            Ok(ActionId::GO_ALONE_NO)
        }
    }

    fn discard(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        let trump = Self::trump_of(obs)?;
        let cards = discardable(legal);
        // Throw a lone plain card to make a void, unless it is an ace.
        let singleton = Suit::ALL
            .into_iter()
            .filter(|&s| s != trump)
            .map(|s| cards.of_suit(s, trump))
            .filter(|h| h.count() == 1)
            .filter_map(Hand::first)
            .filter(|c| c.rank() != Rank::Ace)
            .min_by_key(|&c| standalone_power(c, trump));
        singleton
            .or_else(|| policy::lowest(cards, trump, None))
            .map(ActionId::discard)
            .ok_or_else(|| AiError::InvalidMove("no discard offered".into()))
    }

    fn play(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        let trump = Self::trump_of(obs)?;
        let cards = playable(legal);
        let choice = if obs.lead.is_none() {
            Self::choose_lead(obs, cards, trump)
        } else {
            Self::choose_follow(obs, cards, trump)
        };
        choice
            .map(ActionId::play)
            .ok_or_else(|| AiError::InvalidMove("no play offered".into()))
    }
}

impl AiPlayer for Heuristic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_action(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        policy::dispatch(self, obs, legal)
    }
}
