use proptest::prelude::*;

use crate::domain::tables::{effective_suit, LEFT_BOWER_POWER, RIGHT_BOWER_POWER};
use crate::domain::tricks::trick_winner;
use crate::domain::{tables, test_gens, test_prelude, Card, Rank, Suit};

/// Reference winner: bowers, then trump by rank, then led suit by rank.
fn oracle_winner(trump: Suit, leader: usize, cards: &[Card; 4]) -> usize {
    let led = effective_suit(cards[leader], trump);
    let key = |c: Card| -> (u8, u8, u8) {
        let eff = effective_suit(c, trump);
        if c.is_right_bower(trump) {
            (3, 2, 0)
        } else if c.is_left_bower(trump) {
            (3, 1, 0)
        } else if eff == trump {
            (3, 0, c.rank().index())
        } else if eff == led {
            (2, 0, c.rank().index())
        } else {
            (0, 0, 0)
        }
    };
    (0..4).max_by_key(|&i| key(cards[i])).unwrap_or(leader)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn winner_matches_oracle((leader, trump, cards) in test_gens::complete_trick()) {
        let slots = cards.map(Some);
        let winner = trick_winner(trump, cards[leader as usize], &slots);
        prop_assert_eq!(
            winner,
            Some(oracle_winner(trump, leader as usize, &cards) as u8),
            "trump={:?} leader={} cards={:?}", trump, leader, cards
        );
    }

    /// Whoever holds the right bower wins; failing that, the left bower.
    #[test]
    fn bowers_take_the_trick((leader, trump, cards) in test_gens::complete_trick()) {
        let slots = cards.map(Some);
        let winner = trick_winner(trump, cards[leader as usize], &slots).unwrap_or(leader);
        let right = Card::new(trump, Rank::Jack);
        let left = Card::new(trump.same_color(), Rank::Jack);
        if let Some(pos) = cards.iter().position(|&c| c == right) {
            prop_assert_eq!(winner as usize, pos);
        } else if let Some(pos) = cards.iter().position(|&c| c == left) {
            prop_assert_eq!(winner as usize, pos);
        }
    }

    /// Bowers always carry the two highest powers whatever is led.
    #[test]
    fn bower_power_ignores_led_suit(trump in test_gens::suit(), led in test_gens::suit()) {
        let t = tables();
        prop_assert_eq!(t.power(trump, led, Card::new(trump, Rank::Jack)), RIGHT_BOWER_POWER);
        prop_assert_eq!(
            t.power(trump, led, Card::new(trump.same_color(), Rank::Jack)),
            LEFT_BOWER_POWER
        );
    }
}
