//! Bidding rounds, the go-alone decision and the dealer's pickup/discard.

use crate::domain::actions::{ActionId, ActionMask};
use crate::domain::errors::DomainError;
use crate::domain::state::{round_start_seat, HandState, Phase, Seat};
use crate::domain::{Card, Hand, Suit};

/// Round one: pass or order the face-up card up.
pub fn round1_mask() -> ActionMask {
    ActionMask::EMPTY
        .with(ActionId::PASS)
        .with(ActionId::ORDER_UP)
}

/// Round two: name any suit but the turned-down one. Pass is withheld when
/// `must_call` (stick-the-dealer).
pub fn round2_mask(turned_down: Suit, must_call: bool) -> ActionMask {
    let mut mask: ActionMask = Suit::ALL
        .into_iter()
        .filter(|&s| s != turned_down)
        .map(ActionId::call_trump)
        .collect();
    if !must_call {
        mask.insert(ActionId::PASS);
    }
    mask
}

pub fn go_alone_mask() -> ActionMask {
    ActionMask::EMPTY
        .with(ActionId::GO_ALONE_YES)
        .with(ActionId::GO_ALONE_NO)
}

/// Seats in bidding order: left of the dealer, dealer last.
pub fn bidding_order(dealer: Seat) -> impl Iterator<Item = Seat> {
    let start = round_start_seat(dealer);
    (0..4u8).map(move |i| (start + i) % 4)
}

/// `seat` orders up the face-up card; its suit becomes trump.
pub fn order_up(hs: &mut HandState, seat: Seat) -> Result<Suit, DomainError> {
    DomainError::require_phase(Phase::BidRound1, hs.phase)?;
    let trump = hs.require_face_up()?.suit();
    hs.trump = Some(trump);
    hs.maker = Some(seat);
    hs.phase = Phase::GoAloneDecision;
    Ok(trump)
}

/// Every seat passed in round one.
pub fn end_round1(hs: &mut HandState) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::BidRound1, hs.phase)?;
    hs.phase = Phase::BidRound2;
    Ok(())
}

/// `seat` names `suit` as trump in round two.
pub fn call_trump(hs: &mut HandState, seat: Seat, suit: Suit) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::BidRound2, hs.phase)?;
    debug_assert_ne!(Some(suit), hs.face_up.map(Card::suit));
    hs.trump = Some(suit);
    hs.maker = Some(seat);
    hs.phase = Phase::GoAloneDecision;
    Ok(())
}

/// Every seat passed in round two: throw the hand in.
pub fn redeal(hs: &mut HandState) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::BidRound2, hs.phase)?;
    hs.reset();
    Ok(())
}

pub fn set_going_alone(hs: &mut HandState, alone: bool) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::GoAloneDecision, hs.phase)?;
    hs.require_maker()?;
    hs.going_alone = alone;
    hs.phase = Phase::DealerPickupDiscard;
    Ok(())
}

/// Add the face-up card to the dealer's hand; returns the six cards the
/// dealer must discard from.
pub fn dealer_pickup(hs: &mut HandState, dealer: Seat) -> Result<Hand, DomainError> {
    DomainError::require_phase(Phase::DealerPickupDiscard, hs.phase)?;
    let face_up = hs.require_face_up()?;
    let hand = &mut hs.hands[dealer as usize];
    hand.give(face_up);
    Ok(*hand)
}

/// Dealer throws away `card`; trick play starts left of the dealer.
pub fn dealer_discard(hs: &mut HandState, dealer: Seat, card: Card) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::DealerPickupDiscard, hs.phase)?;
    let hand = &mut hs.hands[dealer as usize];
    if !hand.has(card) {
        return Err(DomainError::CardNotInHand { seat: dealer, card });
    }
    hand.remove(card);
    hs.discarded = Some(card);
    hs.lead_player = Some(hs.next_player(dealer));
    hs.phase = Phase::PlayTrick;
    Ok(())
}
