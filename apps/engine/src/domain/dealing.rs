//! Deterministic card dealing from the remaining-deck bitset.

use rand::Rng;

use crate::domain::errors::DomainError;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::{GameState, Phase};
use crate::domain::{Card, Hand};

/// Draw one card uniformly from `deck` and remove it.
///
/// Picks a random rank `k` among the remaining cards and takes the `k`-th set
/// bit, so the result depends only on the deck contents and the RNG stream.
pub fn draw_card<R: Rng + ?Sized>(deck: &mut Hand, rng: &mut R) -> Option<Card> {
    let remaining = deck.count();
    if remaining == 0 {
        return None;
    }
    let k = rng.random_range(0..remaining) as usize;
    let card = deck.iter().nth(k)?;
    deck.remove(card);
    Some(card)
}

/// Deal five cards to each seat in turn starting at seat 0, then turn one
/// card face up. Moves the hand to `BidRound1`.
pub fn deal(state: &mut GameState) -> Result<(), DomainError> {
    DomainError::require_phase(Phase::Deal, state.hand.phase)?;

    let GameState { hand, rng, .. } = state;
    for seat in 0..PLAYERS {
        for _ in 0..HAND_SIZE {
            let card = draw_card(&mut hand.deck, rng).ok_or(DomainError::DeckExhausted)?;
            hand.hands[seat].give(card);
        }
    }
    let face_up = draw_card(&mut hand.deck, rng).ok_or(DomainError::DeckExhausted)?;
    hand.face_up = Some(face_up);
    hand.phase = Phase::BidRound1;
    state.hands_dealt += 1;
    Ok(())
}
