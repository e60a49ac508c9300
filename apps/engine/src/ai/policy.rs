//! Phase dispatch and card-selection helpers shared by the rule-based AIs.

use crate::ai::AiError;
use crate::domain::tables::{effective_suit, tables};
use crate::domain::{
    Action, ActionId, ActionMask, Card, Hand, Observation, Phase, Rank, Seat, Suit,
};

/// One decision method per phase that asks for input.
///
/// Implementors get [`AiPlayer::select_action`](super::AiPlayer::select_action)
/// for free by forwarding to [`dispatch`].
pub trait PhasePolicy {
    fn bid_round_1(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError>;
    fn bid_round_2(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError>;
    fn go_alone(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError>;
    fn discard(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError>;
    fn play(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError>;
}

pub fn dispatch<P: PhasePolicy + ?Sized>(
    policy: &P,
    obs: &Observation,
    legal: ActionMask,
) -> Result<ActionId, AiError> {
    match obs.phase {
        Phase::BidRound1 => policy.bid_round_1(obs, legal),
        Phase::BidRound2 => policy.bid_round_2(obs, legal),
        Phase::GoAloneDecision => policy.go_alone(obs, legal),
        Phase::DealerPickupDiscard => policy.discard(obs, legal),
        Phase::PlayTrick => policy.play(obs, legal),
        Phase::Deal | Phase::HandOver => Err(AiError::InvalidMove(format!(
            "no decision is requested during {:?}",
            obs.phase
        ))),
    }
}

/// Cards offered as plays in `legal`.
pub fn playable(legal: ActionMask) -> Hand {
    legal
        .iter()
        .filter_map(|a| match a.decode() {
            Action::PlayCard(c) => Some(c),
            _ => None,
        })
        .collect()
}

/// Cards offered as discards in `legal`.
pub fn discardable(legal: ActionMask) -> Hand {
    legal
        .iter()
        .filter_map(|a| match a.decode() {
            Action::DiscardCard(c) => Some(c),
            _ => None,
        })
        .collect()
}

/// First suit offered as a round-two call, in suit order.
pub fn first_callable(legal: ActionMask) -> Option<Suit> {
    legal.iter().find_map(|a| a.decode().suit())
}

/// Strength of a card judged on its own: trump by trump power, anything else
/// as if its suit had been led.
pub fn standalone_power(card: Card, trump: Suit) -> u8 {
    tables().power(trump, effective_suit(card, trump), card)
}

/// Power of `card` in a trick where `led` was led; falls back to
/// [`standalone_power`] when nothing has been led.
pub fn trick_power(card: Card, trump: Suit, led: Option<Suit>) -> u8 {
    match led {
        Some(led) => tables().power(trump, led, card),
        None => standalone_power(card, trump),
    }
}

pub fn lowest(cards: Hand, trump: Suit, led: Option<Suit>) -> Option<Card> {
    cards.iter().min_by_key(|&c| trick_power(c, trump, led))
}

pub fn highest(cards: Hand, trump: Suit, led: Option<Suit>) -> Option<Card> {
    cards.iter().max_by_key(|&c| trick_power(c, trump, led))
}

/// Seat currently winning the trick in progress and its card's power.
pub fn current_winner(obs: &Observation) -> Option<(Seat, u8)> {
    let trump = obs.trump?;
    let led = obs.led_suit()?;
    obs.trick_cards
        .iter()
        .enumerate()
        .filter_map(|(seat, c)| c.map(|c| (seat as Seat, tables().power(trump, led, c))))
        .max_by_key(|&(_, p)| p)
}

/// Lowest card that would beat `to_beat`, if any.
pub fn cheapest_winner(cards: Hand, trump: Suit, led: Suit, to_beat: u8) -> Option<Card> {
    cards
        .iter()
        .map(|c| (c, tables().power(trump, led, c)))
        .filter(|&(_, p)| p > to_beat)
        .min_by_key(|&(_, p)| p)
        .map(|(c, _)| c)
}

/// Count of bowers, trump and off-suit aces for a candidate trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandStrength {
    pub trump_count: u8,
    pub right_bower: bool,
    pub left_bower: bool,
    pub off_aces: u8,
}

impl HandStrength {
    pub fn evaluate(hand: Hand, trump: Suit) -> Self {
        let mut s = Self::default();
        for card in hand {
            if effective_suit(card, trump) == trump {
                s.trump_count += 1;
                s.right_bower |= card.is_right_bower(trump);
                s.left_bower |= card.is_left_bower(trump);
            } else if card.rank() == Rank::Ace {
                s.off_aces += 1;
            }
        }
        s
    }

    /// trump count, plus 2 for the right bower, 1 for the left, 1 per off ace.
    pub fn score(&self) -> u8 {
        self.trump_count + 2 * self.right_bower as u8 + self.left_bower as u8 + self.off_aces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::try_parse_cards;

    fn hand(tokens: &[&str]) -> Hand {
        try_parse_cards(tokens).unwrap().into_iter().collect()
    }

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn evaluates_bowers_and_aces() {
        let s = HandStrength::evaluate(hand(&["JH", "JD", "9H", "AC", "AH"]), Suit::Hearts);
        assert_eq!(s.trump_count, 4);
        assert!(s.right_bower && s.left_bower);
        assert_eq!(s.off_aces, 1);
        assert_eq!(s.score(), 4 + 2 + 1 + 1);
    }

    #[test]
    fn lowest_and_highest_respect_trump() {
        let h = hand(&["9S", "AC", "JC"]);
        // Spades trump: JC is the left bower.
        assert_eq!(highest(h, Suit::Spades, None), Some(card("JC")));
        assert_eq!(lowest(h, Suit::Spades, None), Some(card("AC")));
        // Hearts led, clubs trump: both clubs are trump.
        assert_eq!(lowest(h, Suit::Clubs, Some(Suit::Hearts)), Some(card("9S")));
    }

    #[test]
    fn cheapest_winner_picks_lowest_that_wins() {
        let h = hand(&["QD", "KD", "AD"]);
        let p_jd = tables().power(Suit::Clubs, Suit::Diamonds, card("JD"));
        assert_eq!(
            cheapest_winner(h, Suit::Clubs, Suit::Diamonds, p_jd),
            Some(card("QD"))
        );
        let p_kd = tables().power(Suit::Clubs, Suit::Diamonds, card("KD"));
        assert_eq!(
            cheapest_winner(h, Suit::Clubs, Suit::Diamonds, p_kd),
            Some(card("AD"))
        );
        assert_eq!(cheapest_winner(h, Suit::Clubs, Suit::Diamonds, 200), None);
    }

    #[test]
    fn mask_helpers_decode_payloads() {
        let mask = ActionMask::plays_from(hand(&["9C", "TD"]))
            .with(ActionId::discard(card("AH")))
            .with(ActionId::call_trump(Suit::Spades));
        assert_eq!(playable(mask), hand(&["9C", "TD"]));
        assert_eq!(discardable(mask), hand(&["AH"]));
        assert_eq!(first_callable(mask), Some(Suit::Spades));
    }
}
