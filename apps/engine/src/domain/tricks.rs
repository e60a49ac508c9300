use crate::domain::actions::ActionMask;
use crate::domain::errors::DomainError;
use crate::domain::rules::{PLAYERS, TRICKS_PER_HAND};
use crate::domain::state::{team_of, CompletedTrick, HandState, Phase, Seat};
use crate::domain::tables::{effective_suit, tables};
use crate::domain::{Card, Hand, Suit};

/// Cards a seat may play: anything when leading, otherwise follow suit.
pub fn legal_plays(hand: Hand, lead: Option<Card>, trump: Suit) -> Hand {
    match lead {
        Some(led) => hand.legal_subset(led, trump),
        None => hand,
    }
}

pub fn play_mask(hand: Hand, lead: Option<Card>, trump: Suit) -> ActionMask {
    ActionMask::plays_from(legal_plays(hand, lead, trump))
}

/// Put `card` from `seat`'s hand into the current trick.
pub fn play_card(hs: &mut HandState, seat: Seat, card: Card) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::PlayTrick, hs.phase)?;
    let trump = hs.require_trump()?;
    let hand = hs.hands[seat as usize];
    if !hand.has(card) {
        return Err(DomainError::CardNotInHand { seat, card });
    }
    if !legal_plays(hand, hs.lead_card, trump).has(card) {
        return Err(DomainError::MustFollowSuit { seat, card });
    }
    debug_assert!(hs.is_active(seat), "seat {seat} sits out this hand");
    debug_assert!(hs.trick_cards[seat as usize].is_none());

    if hs.num_played == 0 {
        hs.lead_card = Some(card);
        hs.lead_player = Some(seat);
    }
    hs.hands[seat as usize].remove(card);
    hs.trick_cards[seat as usize] = Some(card);
    hs.num_played += 1;
    Ok(())
}

/// Winner of a trick: highest power among the cards played.
pub fn trick_winner(trump: Suit, lead: Card, cards: &[Option<Card>; PLAYERS]) -> Option<Seat> {
    let t = tables();
    let led = effective_suit(lead, trump);
    cards
        .iter()
        .enumerate()
        .filter_map(|(seat, card)| card.map(|c| (seat as Seat, t.power(trump, led, c))))
        .max_by_key(|&(_, power)| power)
        .map(|(seat, _)| seat)
}

/// Score the finished trick, clear the slots and hand the lead to the winner.
/// Moves to `HandOver` after the last trick.
pub fn complete_trick(hs: &mut HandState) -> Result<Seat, DomainError> {
    DomainError::require_phase(Phase::PlayTrick, hs.phase)?;
    let trump = hs.require_trump()?;
    debug_assert_eq!(hs.num_played, hs.active_players());
    let lead = hs.lead_card.ok_or(DomainError::TrickNotStarted)?;
    let leader = hs.lead_player.ok_or(DomainError::TrickNotStarted)?;
    let winner = trick_winner(trump, lead, &hs.trick_cards).ok_or(DomainError::TrickNotStarted)?;

    hs.tricks_won[team_of(winner) as usize] += 1;
    hs.tricks.push(CompletedTrick {
        leader,
        cards: hs.trick_cards,
        winner,
    });
    hs.trick_cards = [None; PLAYERS];
    hs.lead_card = None;
    hs.lead_player = Some(winner);
    hs.num_played = 0;
    hs.tricks_played += 1;
    if hs.tricks_played == TRICKS_PER_HAND {
        hs.phase = Phase::HandOver;
    }
    Ok(winner)
}
