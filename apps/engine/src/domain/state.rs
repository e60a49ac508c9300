use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::errors::DomainError;
use crate::domain::rules::{RulesConfig, PLAYERS, TEAMS};
use crate::domain::{Card, Hand, Suit};

pub type Seat = u8; // 0..=3
pub type Team = u8; // 0 (seats 0 and 2) or 1 (seats 1 and 3)

/// Phases of a single hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Cards are about to be dealt.
    Deal,
    /// Each seat may order the face-up card up as trump.
    BidRound1,
    /// Each seat may name any suit except the turned-down one.
    BidRound2,
    /// The maker decides whether to play without a partner.
    GoAloneDecision,
    /// Dealer adds the face-up card and discards one.
    DealerPickupDiscard,
    /// Tricks are played; one step plays one whole trick.
    PlayTrick,
    /// All five tricks are done; scoring is pending.
    HandOver,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GameStatus {
    InProgress,
    GameOver,
}

/// A finished trick, kept for history and bots that count cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedTrick {
    pub leader: Seat,
    pub cards: [Option<Card>; PLAYERS],
    pub winner: Seat,
}

/// Everything scoped to one deal. Reset wholesale between hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    pub phase: Phase,
    pub hands: [Hand; PLAYERS],
    /// Cards not yet dealt.
    pub deck: Hand,
    pub face_up: Option<Card>,
    /// Card the dealer threw away after picking up.
    pub discarded: Option<Card>,
    pub trump: Option<Suit>,
    pub maker: Option<Seat>,
    pub going_alone: bool,
    pub lead_card: Option<Card>,
    pub lead_player: Option<Seat>,
    /// Card each seat has put into the current trick.
    pub trick_cards: [Option<Card>; PLAYERS],
    pub num_played: u8,
    pub tricks_played: u8,
    pub tricks_won: [u8; TEAMS],
    pub tricks: Vec<CompletedTrick>,
}

impl Default for HandState {
    fn default() -> Self {
        Self::new()
    }
}

impl HandState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Deal,
            hands: [Hand::EMPTY; PLAYERS],
            deck: Hand::FULL_DECK,
            face_up: None,
            discarded: None,
            trump: None,
            maker: None,
            going_alone: false,
            lead_card: None,
            lead_player: None,
            trick_cards: [None; PLAYERS],
            num_played: 0,
            tricks_played: 0,
            tricks_won: [0; TEAMS],
            tricks: Vec::with_capacity(5),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn maker_team(&self) -> Option<Team> {
        self.maker.map(team_of)
    }

    /// The lone maker's partner, who sits out the hand.
    pub fn skipped_seat(&self) -> Option<Seat> {
        if self.going_alone {
            self.maker.map(partner_of)
        } else {
            None
        }
    }

    /// Whether `seat` takes part in trick play.
    pub fn is_active(&self, seat: Seat) -> bool {
        self.skipped_seat() != Some(seat)
    }

    /// Next seat clockwise, stepping over the lone maker's partner.
    pub fn next_player(&self, current: Seat) -> Seat {
        let next = next_seat(current);
        if self.is_active(next) {
            next
        } else {
            next_seat(next)
        }
    }

    /// Number of seats playing each trick.
    pub fn active_players(&self) -> u8 {
        if self.going_alone {
            3
        } else {
            4
        }
    }

    pub fn require_trump(&self) -> Result<Suit, DomainError> {
        self.trump.ok_or(DomainError::TrumpNotSet)
    }

    pub fn require_maker(&self) -> Result<Seat, DomainError> {
        self.maker.ok_or(DomainError::NoMaker)
    }

    pub fn require_face_up(&self) -> Result<Card, DomainError> {
        self.face_up.ok_or(DomainError::NoFaceUpCard)
    }

    /// Every card the hand still accounts for. Always the full deck while
    /// the deal is in progress; a debug aid for conservation checks.
    pub fn accounted_cards(&self) -> Hand {
        let mut all = self.deck;
        for hand in self.hands {
            all |= hand;
        }
        for card in self.trick_cards.iter().flatten() {
            all |= Hand::from_iter([*card]);
        }
        for trick in &self.tricks {
            all |= trick.cards.iter().flatten().copied().collect::<Hand>();
        }
        // Until the dealer picks it up, the face-up card sits outside every hand.
        if let Some(card) = self.face_up {
            if matches!(
                self.phase,
                Phase::BidRound1
                    | Phase::BidRound2
                    | Phase::GoAloneDecision
                    | Phase::DealerPickupDiscard
            ) {
                all |= Hand::from_iter([card]);
            }
        }
        if let Some(card) = self.discarded {
            all |= Hand::from_iter([card]);
        }
        all
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |c: Option<Card>| c.map_or_else(|| "--".to_string(), |c| c.to_string());
        write!(f, "phase: {:?}", self.phase)?;
        if let Some(trump) = self.trump {
            write!(f, "  trump: {trump}")?;
        }
        if let Some(maker) = self.maker {
            write!(f, "  maker: {maker}")?;
            if self.going_alone {
                write!(f, " (alone)")?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "face-up: {}  lead: {}  tricks: {}-{} ({} played)",
            opt(self.face_up),
            opt(self.lead_card),
            self.tricks_won[0],
            self.tricks_won[1],
            self.tricks_played
        )?;
        for (seat, hand) in self.hands.iter().enumerate() {
            writeln!(
                f,
                "seat {seat}: [{hand}] played: {}",
                opt(self.trick_cards[seat])
            )?;
        }
        Ok(())
    }
}

/// Whole-match state: scores, dealer rotation and the deal RNG.
#[derive(Debug, Clone)]
pub struct GameState {
    pub status: GameStatus,
    pub dealer: Seat,
    pub scores: [u8; TEAMS],
    pub hand: HandState,
    /// Stream every deal draws from; seeded once per match.
    pub rng: ChaCha8Rng,
    pub seed: u64,
    /// Deals performed so far, redeals included.
    pub hands_dealt: u32,
    pub rules: RulesConfig,
}

impl GameState {
    pub fn new(seed: u64, rules: RulesConfig) -> Self {
        Self {
            status: GameStatus::InProgress,
            dealer: 0,
            scores: [0; TEAMS],
            hand: HandState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            hands_dealt: 0,
            rules,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

/// Seat / turn helpers (4 fixed seats, clockwise is +1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as Seat
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

#[inline]
pub fn team_of(seat: Seat) -> Team {
    seat % 2
}

/// Seat to the left of the dealer: first to bid, first to lead.
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_seat(dealer)
}
