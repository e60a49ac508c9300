//! Precomputed card-ranking tables.
//!
//! Everything trick play needs to know about bowers lives here:
//! - `effective_suit[trump][card]`: the suit a card counts as once trump is
//!   named (the left bower moves into trump).
//! - `suit_mask[trump][suit]`: the cards that count as `suit` under `trump`.
//! - `power[trump][led][card]`: a total ordering used to pick trick winners.
//!
//! The tables are built on first use and shared read-only by every game.

use std::sync::LazyLock;

use crate::domain::{Card, Hand, Rank, Suit};

pub const RIGHT_BOWER_POWER: u8 = 200;
pub const LEFT_BOWER_POWER: u8 = 199;
/// Offset added to a led-suit card's rank ordinal.
pub const LED_SUIT_BASE: u8 = 100;

const SUITS: usize = 4;
const CARDS: usize = Card::COUNT as usize;

pub struct Tables {
    effective_suit: [[Suit; CARDS]; SUITS],
    suit_mask: [[Hand; SUITS]; SUITS],
    power: [[[u8; CARDS]; SUITS]; SUITS],
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// Process-wide ranking tables.
#[inline]
pub fn tables() -> &'static Tables {
    &TABLES
}

fn trump_power(card: Card, trump: Suit) -> u8 {
    if card.is_right_bower(trump) {
        return RIGHT_BOWER_POWER;
    }
    if card.is_left_bower(trump) {
        return LEFT_BOWER_POWER;
    }
    match card.rank() {
        Rank::Ace => 198,
        Rank::King => 197,
        Rank::Queen => 196,
        Rank::Ten => 195,
        Rank::Nine => 194,
        Rank::Jack => unreachable!("a jack counted as trump is always a bower"),
    }
}

impl Tables {
    fn build() -> Self {
        let mut effective_suit = [[Suit::Clubs; CARDS]; SUITS];
        let mut suit_mask = [[Hand::EMPTY; SUITS]; SUITS];
        let mut power = [[[0u8; CARDS]; SUITS]; SUITS];

        for trump in Suit::ALL {
            for card in Card::all() {
                let eff = if card.is_left_bower(trump) {
                    trump
                } else {
                    card.suit()
                };
                effective_suit[trump.index()][card.index() as usize] = eff;
                suit_mask[trump.index()][eff.index()].give(card);

                for led in Suit::ALL {
                    let p = if eff == trump {
                        trump_power(card, trump)
                    } else if eff == led {
                        LED_SUIT_BASE + card.rank().index()
                    } else {
                        card.rank().index()
                    };
                    power[trump.index()][led.index()][card.index() as usize] = p;
                }
            }
        }

        Self {
            effective_suit,
            suit_mask,
            power,
        }
    }

    #[inline]
    pub fn effective_suit(&self, trump: Suit, card: Card) -> Suit {
        self.effective_suit[trump.index()][card.index() as usize]
    }

    #[inline]
    pub fn suit_mask(&self, trump: Suit, suit: Suit) -> Hand {
        self.suit_mask[trump.index()][suit.index()]
    }

    #[inline]
    pub fn power(&self, trump: Suit, led: Suit, card: Card) -> u8 {
        self.power[trump.index()][led.index()][card.index() as usize]
    }
}

/// Effective suit of `card` once `trump` is named.
#[inline]
pub fn effective_suit(card: Card, trump: Suit) -> Suit {
    tables().effective_suit(trump, card)
}
