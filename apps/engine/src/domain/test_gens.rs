// Proptest generators for domain types.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::{Card, Hand, Seat, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Hearts),
        Just(Suit::Spades),
        Just(Suit::Diamonds),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (0u8..Card::COUNT).prop_filter_map("in range", Card::from_index)
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..4
}

/// Any subset of the deck.
pub fn hand() -> impl Strategy<Value = Hand> {
    any::<u32>().prop_map(Hand::from_bits)
}

/// `n` distinct cards in shuffled order.
pub fn unique_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(Card::all().collect::<Vec<_>>(), n).prop_shuffle()
}

/// Four disjoint five-card hands.
pub fn four_hands() -> impl Strategy<Value = [Hand; 4]> {
    unique_cards(20).prop_map(|cards| {
        let mut hands = [Hand::EMPTY; 4];
        for (i, card) in cards.into_iter().enumerate() {
            hands[i / 5].give(card);
        }
        hands
    })
}

/// A full trick: leader, trump and one card per seat (seat-indexed).
pub fn complete_trick() -> impl Strategy<Value = (Seat, Suit, [Card; 4])> {
    (seat(), suit(), unique_cards(4)).prop_map(|(leader, trump, cards)| {
        let mut by_seat = [cards[0]; 4];
        by_seat.copy_from_slice(&cards);
        (leader, trump, by_seat)
    })
}
