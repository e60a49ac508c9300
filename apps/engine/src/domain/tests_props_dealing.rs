use proptest::prelude::*;

use crate::domain::dealing::deal;
use crate::domain::rules::RulesConfig;
use crate::domain::state::GameState;
use crate::domain::{test_prelude, Hand};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every deal accounts for all 24 cards exactly once.
    #[test]
    fn deal_conserves_deck(seed in any::<u64>()) {
        let mut state = GameState::new(seed, RulesConfig::default());
        deal(&mut state).unwrap();
        let hs = &state.hand;

        let mut seen = hs.deck;
        let mut total = hs.deck.count();
        for hand in hs.hands {
            prop_assert_eq!(hand.count(), 5);
            prop_assert!((seen & hand).is_empty());
            seen |= hand;
            total += hand.count();
        }
        let face_up = hs.face_up.unwrap();
        prop_assert!(!seen.has(face_up));
        seen |= Hand::from_iter([face_up]);
        total += 1;
        prop_assert_eq!(seen, Hand::FULL_DECK);
        prop_assert_eq!(total, 24);
    }

    /// Same seed, same deal.
    #[test]
    fn deal_is_reproducible(seed in any::<u64>()) {
        let mut a = GameState::new(seed, RulesConfig::default());
        let mut b = GameState::new(seed, RulesConfig::default());
        deal(&mut a).unwrap();
        deal(&mut b).unwrap();
        prop_assert_eq!(a.hand, b.hand);
    }
}
