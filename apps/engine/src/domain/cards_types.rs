//! Core card-related types: Suit, Rank, Card
//!
//! A card is packed into a single byte as `suit * 6 + rank`, so the 24-card
//! euchre deck occupies indices `0..24`. Bitsets over those indices are the
//! backbone of [`Hand`](super::Hand) and the ranking tables.

use std::fmt;

use crate::domain::errors::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Hearts = 1,
    Spades = 2,
    Diamonds = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: u8) -> Option<Suit> {
        match i {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Diamonds),
            _ => None,
        }
    }

    /// The other suit of the same color (Clubs/Spades, Hearts/Diamonds).
    #[inline]
    pub const fn same_color(self) -> Suit {
        match self {
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Rank {
    Nine = 0,
    Ten = 1,
    Jack = 2,
    Queen = 3,
    King = 4,
    Ace = 5,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Rank> {
        match i {
            0 => Some(Rank::Nine),
            1 => Some(Rank::Ten),
            2 => Some(Rank::Jack),
            3 => Some(Rank::Queen),
            4 => Some(Rank::King),
            5 => Some(Rank::Ace),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card(u8);

impl Card {
    /// Number of cards in the deck.
    pub const COUNT: u8 = 24;
    pub const RANKS_PER_SUIT: u8 = 6;

    #[inline]
    pub const fn new(suit: Suit, rank: Rank) -> Card {
        Card(suit as u8 * Self::RANKS_PER_SUIT + rank as u8)
    }

    #[inline]
    pub const fn from_index(i: u8) -> Option<Card> {
        if i < Self::COUNT {
            Some(Card(i))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn suit(self) -> Suit {
        match self.0 / Self::RANKS_PER_SUIT {
            0 => Suit::Clubs,
            1 => Suit::Hearts,
            2 => Suit::Spades,
            _ => Suit::Diamonds,
        }
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        match self.0 % Self::RANKS_PER_SUIT {
            0 => Rank::Nine,
            1 => Rank::Ten,
            2 => Rank::Jack,
            3 => Rank::Queen,
            4 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Jack of the trump suit.
    #[inline]
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank() == Rank::Jack && self.suit() == trump
    }

    /// Jack of the suit sharing trump's color.
    #[inline]
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank() == Rank::Jack && self.suit() == trump.same_color()
    }

    /// All 24 cards in index order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..Self::COUNT).map(Card)
    }
}

impl TryFrom<u8> for Card {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::from_index(value).ok_or(DomainError::InvalidCard(value))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

// Debug uses the short token so assertion failures read like "JH" not "Card(8)".
impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
