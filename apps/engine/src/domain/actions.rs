//! Dense action encoding shared by the engine and every bot.
//!
//! | ids      | action                                   |
//! |----------|------------------------------------------|
//! | 0..24    | play card `id`                           |
//! | 24..48   | discard card `id - 24`                   |
//! | 48       | pass                                     |
//! | 49       | order up                                 |
//! | 50..54   | call trump (Clubs, Hearts, Spades, Diamonds) |
//! | 54 / 55  | go alone yes / no                        |
//! | 56       | invalid                                  |

use std::fmt;

use crate::domain::{Card, Hand, Suit};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ActionId(u8);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ActionKind {
    PlayCard,
    DiscardCard,
    OrderUp,
    CallTrump,
    Pass,
    GoAloneYes,
    GoAloneNo,
    Invalid,
}

/// A decoded action with its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    PlayCard(Card),
    DiscardCard(Card),
    OrderUp,
    CallTrump(Suit),
    Pass,
    GoAloneYes,
    GoAloneNo,
    Invalid,
}

impl ActionId {
    pub const PLAY_BASE: u8 = 0;
    pub const DISCARD_BASE: u8 = 24;
    pub const CALL_TRUMP_BASE: u8 = 50;

    pub const PASS: ActionId = ActionId(48);
    pub const ORDER_UP: ActionId = ActionId(49);
    pub const GO_ALONE_YES: ActionId = ActionId(54);
    pub const GO_ALONE_NO: ActionId = ActionId(55);
    pub const INVALID: ActionId = ActionId(56);

    /// Wrap any raw id; ids outside the table decode as `Invalid`.
    #[inline]
    pub const fn new(raw: u8) -> ActionId {
        ActionId(raw)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn play(card: Card) -> ActionId {
        ActionId(Self::PLAY_BASE + card.index())
    }

    #[inline]
    pub const fn discard(card: Card) -> ActionId {
        ActionId(Self::DISCARD_BASE + card.index())
    }

    #[inline]
    pub const fn call_trump(suit: Suit) -> ActionId {
        ActionId(Self::CALL_TRUMP_BASE + suit as u8)
    }

    #[inline]
    pub const fn is_play(self) -> bool {
        self.0 < Self::DISCARD_BASE
    }

    #[inline]
    pub const fn is_discard(self) -> bool {
        self.0 >= Self::DISCARD_BASE && self.0 < Self::PASS.0
    }

    #[inline]
    pub const fn is_call_trump(self) -> bool {
        self.0 >= Self::CALL_TRUMP_BASE && self.0 < Self::GO_ALONE_YES.0
    }

    /// Total decode; never panics.
    pub fn decode(self) -> Action {
        let id = self.0;
        if self.is_play() {
            Card::from_index(id - Self::PLAY_BASE).map_or(Action::Invalid, Action::PlayCard)
        } else if self.is_discard() {
            Card::from_index(id - Self::DISCARD_BASE).map_or(Action::Invalid, Action::DiscardCard)
        } else if self.is_call_trump() {
            Suit::from_index(id - Self::CALL_TRUMP_BASE).map_or(Action::Invalid, Action::CallTrump)
        } else {
            match self {
                Self::PASS => Action::Pass,
                Self::ORDER_UP => Action::OrderUp,
                Self::GO_ALONE_YES => Action::GoAloneYes,
                Self::GO_ALONE_NO => Action::GoAloneNo,
                _ => Action::Invalid,
            }
        }
    }
}

impl Action {
    pub fn kind(self) -> ActionKind {
        match self {
            Action::PlayCard(_) => ActionKind::PlayCard,
            Action::DiscardCard(_) => ActionKind::DiscardCard,
            Action::OrderUp => ActionKind::OrderUp,
            Action::CallTrump(_) => ActionKind::CallTrump,
            Action::Pass => ActionKind::Pass,
            Action::GoAloneYes => ActionKind::GoAloneYes,
            Action::GoAloneNo => ActionKind::GoAloneNo,
            Action::Invalid => ActionKind::Invalid,
        }
    }

    pub fn card(self) -> Option<Card> {
        match self {
            Action::PlayCard(c) | Action::DiscardCard(c) => Some(c),
            _ => None,
        }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Action::CallTrump(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Action> for ActionId {
    fn from(action: Action) -> Self {
        match action {
            Action::PlayCard(c) => ActionId::play(c),
            Action::DiscardCard(c) => ActionId::discard(c),
            Action::OrderUp => ActionId::ORDER_UP,
            Action::CallTrump(s) => ActionId::call_trump(s),
            Action::Pass => ActionId::PASS,
            Action::GoAloneYes => ActionId::GO_ALONE_YES,
            Action::GoAloneNo => ActionId::GO_ALONE_NO,
            Action::Invalid => ActionId::INVALID,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayCard(c) => write!(f, "play {c}"),
            Action::DiscardCard(c) => write!(f, "discard {c}"),
            Action::OrderUp => write!(f, "order up"),
            Action::CallTrump(s) => write!(f, "call {s}"),
            Action::Pass => write!(f, "pass"),
            Action::GoAloneYes => write!(f, "go alone"),
            Action::GoAloneNo => write!(f, "play with partner"),
            Action::Invalid => write!(f, "invalid"),
        }
    }
}

impl fmt::Debug for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionId({} = {})", self.0, self.decode())
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of legal action ids, one bit per id.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ActionMask(u64);

impl ActionMask {
    pub const EMPTY: ActionMask = ActionMask(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> ActionMask {
        ActionMask(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Play actions for every card in `hand`.
    #[inline]
    pub const fn plays_from(hand: Hand) -> ActionMask {
        ActionMask((hand.value() as u64) << ActionId::PLAY_BASE)
    }

    /// Discard actions for every card in `hand`.
    #[inline]
    pub const fn discards_from(hand: Hand) -> ActionMask {
        ActionMask((hand.value() as u64) << ActionId::DISCARD_BASE)
    }

    #[inline]
    pub const fn contains(self, action: ActionId) -> bool {
        action.0 < 64 && self.0 & (1u64 << action.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, action: ActionId) {
        debug_assert!(action.0 < 64);
        self.0 |= 1u64 << action.0;
    }

    #[inline]
    pub fn remove(&mut self, action: ActionId) {
        if action.0 < 64 {
            self.0 &= !(1u64 << action.0);
        }
    }

    #[inline]
    pub fn with(mut self, action: ActionId) -> ActionMask {
        self.insert(action);
        self
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member ids in ascending order.
    pub fn iter(self) -> impl Iterator<Item = ActionId> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let id = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(ActionId(id))
        })
    }

    /// The `n`-th member in ascending order.
    pub fn nth(self, n: usize) -> Option<ActionId> {
        self.iter().nth(n)
    }
}

impl FromIterator<ActionId> for ActionMask {
    fn from_iter<I: IntoIterator<Item = ActionId>>(iter: I) -> Self {
        let mut mask = ActionMask::EMPTY;
        for id in iter {
            mask.insert(id);
        }
        mask
    }
}

impl fmt::Debug for ActionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionMask({:#x})", self.0)
    }
}

impl fmt::Display for ActionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
