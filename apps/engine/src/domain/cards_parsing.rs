//! Card text form: rank char + suit char (e.g., "JH", "TD", "9C")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::domain::errors::DomainError;

impl Rank {
    pub const fn to_char(self) -> char {
        match self {
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl Suit {
    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().to_char(), self.suit().to_char())
    }
}

fn parse_suit(ch: char) -> Option<Suit> {
    match ch.to_ascii_uppercase() {
        'C' => Some(Suit::Clubs),
        'H' => Some(Suit::Hearts),
        'S' => Some(Suit::Spades),
        'D' => Some(Suit::Diamonds),
        _ => None,
    }
}

fn parse_rank(token: &str) -> Option<Rank> {
    match token.to_ascii_uppercase().as_str() {
        "9" => Some(Rank::Nine),
        "T" | "10" => Some(Rank::Ten),
        "J" => Some(Rank::Jack),
        "Q" => Some(Rank::Queen),
        "K" => Some(Rank::King),
        "A" => Some(Rank::Ace),
        _ => None,
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                parse_suit(ch).ok_or_else(|| DomainError::ParseCard(format!("Invalid suit: {s}")))
            }
            _ => Err(DomainError::ParseCard(format!("Invalid suit: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DomainError::ParseCard(format!("Parse card: {s}"));
        if !s.is_ascii() || !(2..=3).contains(&s.len()) {
            return Err(err());
        }
        let (rank_part, suit_part) = s.split_at(s.len() - 1);
        let rank = parse_rank(rank_part).ok_or_else(err)?;
        let suit = suit_part.chars().next().and_then(parse_suit).ok_or_else(err)?;
        Ok(Card::new(suit, rank))
    }
}

/// Parse a list of card tokens, failing on the first invalid one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
