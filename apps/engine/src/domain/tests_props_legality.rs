use proptest::prelude::*;

use crate::domain::tables::{effective_suit, tables};
use crate::domain::tricks::legal_plays;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// A legal play is always a subset of the hand, and is never empty for a
    /// non-empty hand.
    #[test]
    fn legal_plays_subset_of_hand(
        hand in test_gens::hand(),
        led in test_gens::card(),
        trump in test_gens::suit(),
    ) {
        let legal = legal_plays(hand, Some(led), trump);
        prop_assert_eq!(legal & hand, legal);
        prop_assert_eq!(legal.is_empty(), hand.is_empty());
    }

    /// If the hand holds the led card's effective suit, every legal play has
    /// that suit; otherwise the whole hand is legal.
    #[test]
    fn follow_suit_rule(
        hand in test_gens::hand(),
        led in test_gens::card(),
        trump in test_gens::suit(),
    ) {
        let led_suit = effective_suit(led, trump);
        let legal = legal_plays(hand, Some(led), trump);
        let holding = hand & tables().suit_mask(trump, led_suit);
        if holding.is_empty() {
            prop_assert_eq!(legal, hand);
        } else {
            for card in legal {
                prop_assert_eq!(effective_suit(card, trump), led_suit);
            }
            prop_assert_eq!(legal, holding);
        }
    }

    /// The led card is always a legal follow for a hand that still holds it.
    #[test]
    fn led_suit_card_is_followable(
        hand in test_gens::hand(),
        led in test_gens::card(),
        trump in test_gens::suit(),
    ) {
        let mut hand = hand;
        if !hand.has(led) {
            hand.give(led);
        }
        prop_assert!(legal_plays(hand, Some(led), trump).has(led));
    }
}
