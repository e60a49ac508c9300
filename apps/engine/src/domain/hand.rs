//! `Hand`: a set of cards packed into the low 24 bits of a `u32`.
//!
//! The same type backs the remaining deck during a deal.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::domain::tables::{effective_suit, tables};
use crate::domain::{Card, Suit};

#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Hand(u32);

impl Hand {
    pub const EMPTY: Hand = Hand(0);
    pub const FULL_DECK: Hand = Hand((1 << Card::COUNT) - 1);

    /// Build from raw bits; bits above the deck are dropped.
    #[inline]
    pub const fn from_bits(bits: u32) -> Hand {
        Hand(bits & Self::FULL_DECK.0)
    }

    /// Raw bit value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn give(&mut self, card: Card) {
        debug_assert!(!self.has(card), "{card} already in hand");
        self.0 |= 1 << card.index();
    }

    #[inline]
    pub fn remove(&mut self, card: Card) {
        debug_assert!(self.has(card), "{card} not in hand");
        self.0 &= !(1 << card.index());
    }

    #[inline]
    pub const fn has(self, card: Card) -> bool {
        self.0 & (1 << card.index()) != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cards in this set that are not in `other`.
    #[inline]
    pub const fn without(self, other: Hand) -> Hand {
        Hand(self.0 & !other.0)
    }

    pub fn iter(self) -> HandIter {
        HandIter(self.0)
    }

    /// Lowest-index card, if any.
    pub fn first(self) -> Option<Card> {
        self.iter().next()
    }

    /// Cards that count as `suit` once `trump` is named.
    #[inline]
    pub fn of_suit(self, suit: Suit, trump: Suit) -> Hand {
        self & tables().suit_mask(trump, suit)
    }

    /// Cards this hand may play when `led` was led: the cards of the led
    /// card's effective suit, or the whole hand when it has none.
    pub fn legal_subset(self, led: Card, trump: Suit) -> Hand {
        let follow = self.of_suit(effective_suit(led, trump), trump);
        if follow.is_empty() {
            self
        } else {
            follow
        }
    }
}

impl BitAnd for Hand {
    type Output = Hand;
    fn bitand(self, rhs: Hand) -> Hand {
        Hand(self.0 & rhs.0)
    }
}

impl BitOr for Hand {
    type Output = Hand;
    fn bitor(self, rhs: Hand) -> Hand {
        Hand(self.0 | rhs.0)
    }
}

impl BitAndAssign for Hand {
    fn bitand_assign(&mut self, rhs: Hand) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Hand {
    fn bitor_assign(&mut self, rhs: Hand) {
        self.0 |= rhs.0;
    }
}

/// Iterates cards in ascending index order.
#[derive(Debug, Clone)]
pub struct HandIter(u32);

impl Iterator for HandIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for HandIter {}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = HandIter;

    fn into_iter(self) -> HandIter {
        self.iter()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::EMPTY;
        for card in iter {
            hand.0 |= 1 << card.index();
        }
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand[{self}]")
    }
}
