use crate::domain::bidding::{
    bidding_order, call_trump, dealer_discard, dealer_pickup, end_round1, go_alone_mask,
    order_up, redeal, round1_mask, round2_mask, set_going_alone,
};
use crate::domain::dealing::deal;
use crate::domain::rules::RulesConfig;
use crate::domain::state::{GameState, HandState, Phase};
use crate::domain::test_state_helpers::{card, hand_of};
use crate::domain::{ActionId, DomainError, Hand, Suit};

fn dealt_state(seed: u64) -> GameState {
    let mut state = GameState::new(seed, RulesConfig::default());
    deal(&mut state).unwrap();
    state
}

#[test]
fn round1_offers_pass_and_order_up() {
    let mask = round1_mask();
    assert_eq!(mask.len(), 2);
    assert!(mask.contains(ActionId::PASS));
    assert!(mask.contains(ActionId::ORDER_UP));
}

#[test]
fn round2_excludes_turned_down_suit() {
    let mask = round2_mask(Suit::Spades, false);
    assert!(mask.contains(ActionId::PASS));
    assert!(!mask.contains(ActionId::call_trump(Suit::Spades)));
    for suit in [Suit::Clubs, Suit::Hearts, Suit::Diamonds] {
        assert!(mask.contains(ActionId::call_trump(suit)));
    }
    assert_eq!(mask.len(), 4);
}

#[test]
fn stuck_dealer_cannot_pass() {
    let mask = round2_mask(Suit::Hearts, true);
    assert!(!mask.contains(ActionId::PASS));
    assert_eq!(mask.len(), 3);
}

#[test]
fn go_alone_mask_is_yes_or_no() {
    let mask = go_alone_mask();
    assert_eq!(
        mask.iter().collect::<Vec<_>>(),
        vec![ActionId::GO_ALONE_YES, ActionId::GO_ALONE_NO]
    );
}

#[test]
fn bidding_starts_left_of_dealer() {
    assert_eq!(bidding_order(0).collect::<Vec<_>>(), vec![1, 2, 3, 0]);
    assert_eq!(bidding_order(3).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn order_up_sets_trump_from_face_up() {
    let mut state = dealt_state(0x1234);
    let face_up = state.hand.face_up.unwrap();
    let trump = order_up(&mut state.hand, 2).unwrap();
    assert_eq!(trump, face_up.suit());
    assert_eq!(state.hand.trump, Some(face_up.suit()));
    assert_eq!(state.hand.maker, Some(2));
    assert_eq!(state.hand.maker_team(), Some(0));
    assert_eq!(state.hand.phase, Phase::GoAloneDecision);
}

#[test]
fn round2_call_and_redeal() {
    let mut state = dealt_state(5);
    end_round1(&mut state.hand).unwrap();
    assert_eq!(state.hand.phase, Phase::BidRound2);

    let mut called = state.hand.clone();
    call_trump(&mut called, 3, Suit::Clubs).unwrap();
    assert_eq!(called.trump, Some(Suit::Clubs));
    assert_eq!(called.maker, Some(3));
    assert_eq!(called.phase, Phase::GoAloneDecision);

    redeal(&mut state.hand).unwrap();
    assert_eq!(state.hand, HandState::new());
}

#[test]
fn pickup_then_discard_restores_five_cards() {
    let mut state = dealt_state(77);
    order_up(&mut state.hand, 1).unwrap();
    set_going_alone(&mut state.hand, false).unwrap();
    assert_eq!(state.hand.phase, Phase::DealerPickupDiscard);

    let six = dealer_pickup(&mut state.hand, 0).unwrap();
    assert_eq!(six.count(), 6);
    let face_up = state.hand.face_up.unwrap();
    assert!(six.has(face_up));

    dealer_discard(&mut state.hand, 0, face_up).unwrap();
    assert_eq!(state.hand.hands[0].count(), 5);
    assert_eq!(state.hand.discarded, Some(face_up));
    assert_eq!(state.hand.phase, Phase::PlayTrick);
    assert_eq!(state.hand.lead_player, Some(1));
    assert_eq!(state.hand.accounted_cards(), Hand::FULL_DECK);
}

#[test]
fn first_leader_skips_dealers_lone_partner() {
    // Dealer 1, seat 0 goes alone: seat 2 sits out, seat 2 would have led.
    let mut hs = HandState::new();
    hs.phase = Phase::DealerPickupDiscard;
    hs.face_up = Some(card("9H"));
    hs.hands[1] = hand_of(&["AS", "KS", "QS", "JS", "TS"]);
    hs.trump = Some(Suit::Hearts);
    hs.maker = Some(0);
    hs.going_alone = true;
    dealer_pickup(&mut hs, 1).unwrap();
    dealer_discard(&mut hs, 1, card("TS")).unwrap();
    assert_eq!(hs.lead_player, Some(3));
}

#[test]
fn discard_rejects_card_not_held() {
    let mut state = dealt_state(3);
    order_up(&mut state.hand, 1).unwrap();
    set_going_alone(&mut state.hand, false).unwrap();
    let six = dealer_pickup(&mut state.hand, 0).unwrap();
    let foreign = state.hand.hands[1].first().unwrap();
    assert!(!six.has(foreign));
    assert_eq!(
        dealer_discard(&mut state.hand, 0, foreign),
        Err(DomainError::CardNotInHand {
            seat: 0,
            card: foreign
        })
    );
}

#[test]
fn operations_check_phase() {
    let mut hs = HandState::new();
    assert!(matches!(
        order_up(&mut hs, 1),
        Err(DomainError::PhaseMismatch { .. })
    ));
    assert!(matches!(
        set_going_alone(&mut hs, true),
        Err(DomainError::PhaseMismatch { .. })
    ));
}
