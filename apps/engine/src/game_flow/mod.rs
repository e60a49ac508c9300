//! Game flow: drives four AI players through hands until a team wins.
//!
//! One call to [`GameFlow::step_hand`] performs exactly one phase transition
//! (a whole bidding round, or a whole trick); [`GameFlow::step_game`] adds the
//! game-over check. Every action a player returns is checked against the mask
//! it was offered before anything is mutated.

mod orchestration;
mod player_actions;
mod round_lifecycle;


pub use orchestration::RunSummary;

use crate::ai::AiPlayer;
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::{GameState, GameStatus, HandOutcome, Observation, Phase, RulesConfig, Seat};

pub struct GameFlow {
    state: GameState,
    players: [Box<dyn AiPlayer>; PLAYERS],
    last_hand: Option<HandOutcome>,
    hands_scored: u32,
}

impl GameFlow {
    /// Start a match with default rules. Every player is told the seed.
    pub fn new(seed: u64, players: [Box<dyn AiPlayer>; PLAYERS]) -> Self {
        Self::with_rules(seed, players, RulesConfig::default())
    }

    pub fn with_rules(
        seed: u64,
        players: [Box<dyn AiPlayer>; PLAYERS],
        rules: RulesConfig,
    ) -> Self {
        for player in &players {
            player.on_new_match(seed);
        }
        Self {
            state: GameState::new(seed, rules),
            players,
            last_hand: None,
            hands_scored: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for drivers and tests that stage a position.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.hand.phase
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn dealer(&self) -> Seat {
        self.state.dealer
    }

    pub fn scores(&self) -> [u8; TEAMS] {
        self.state.scores
    }

    /// Outcome of the most recently scored hand.
    pub fn last_hand(&self) -> Option<&HandOutcome> {
        self.last_hand.as_ref()
    }

    pub fn hands_scored(&self) -> u32 {
        self.hands_scored
    }

    pub fn players(&self) -> &[Box<dyn AiPlayer>; PLAYERS] {
        &self.players
    }

    pub fn observation(&self, seat: Seat) -> Observation {
        Observation::for_seat(&self.state, seat)
    }
}
