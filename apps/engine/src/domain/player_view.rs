//! Per-seat view of the game handed to bots.

use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::state::{GameState, Phase, Seat, Team};
use crate::domain::tables::effective_suit;
use crate::domain::{Card, Hand, Suit};

/// What one seat can see: its own hand plus public table information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub player: Seat,
    pub hand: Hand,
    pub phase: Phase,
    pub dealer: Seat,
    pub trump: Option<Suit>,
    pub face_up: Option<Card>,
    pub lead: Option<Card>,
    pub trick_cards: [Option<Card>; PLAYERS],
    pub num_played: u8,
    pub maker: Option<Seat>,
    pub maker_team: Option<Team>,
    pub going_alone: bool,
    pub tricks_won: [u8; TEAMS],
    pub scores: [u8; TEAMS],
}

impl Observation {
    pub fn for_seat(state: &GameState, player: Seat) -> Self {
        let hs = &state.hand;
        Self {
            player,
            hand: hs.hands[player as usize],
            phase: hs.phase,
            dealer: state.dealer,
            trump: hs.trump,
            face_up: hs.face_up,
            lead: hs.lead_card,
            trick_cards: hs.trick_cards,
            num_played: hs.num_played,
            maker: hs.maker,
            maker_team: hs.maker_team(),
            going_alone: hs.going_alone,
            tricks_won: hs.tricks_won,
            scores: state.scores,
        }
    }

    pub fn team(&self) -> Team {
        self.player % 2
    }

    pub fn is_dealer(&self) -> bool {
        self.player == self.dealer
    }

    /// Whether our team named trump this hand.
    pub fn on_making_team(&self) -> bool {
        self.maker_team == Some(self.team())
    }

    /// Effective suit of the led card, once trump is known.
    pub fn led_suit(&self) -> Option<Suit> {
        Some(effective_suit(self.lead?, self.trump?))
    }
}
