//! Runs complete games in memory, one engine per game, many games in
//! parallel.

use std::time::Instant;

use euchre_engine::ai::{create_ai, AiConfig};
use euchre_engine::domain::{derive_ai_seed, derive_game_seed};
use euchre_engine::{AiPlayer, EngineError, GameFlow, HandOutcome, RulesConfig, Team};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("unknown AI type: {0}")]
    UnknownAi(String),
    #[error("game {game_no} failed: {source}")]
    Engine {
        game_no: u64,
        #[source]
        source: EngineError,
    },
}

/// Result of simulating one game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_no: u64,
    pub seed: u64,
    pub final_scores: [u8; 2],
    /// None when the game stalled.
    pub winner: Option<Team>,
    /// The step bound ran out before a team reached the winning score.
    pub stalled: bool,
    pub steps: u64,
    pub deals: u32,
    pub hands: Vec<HandOutcome>,
    pub duration_ms: f64,
}

impl GameResult {
    /// Deals thrown in after four passes in both rounds.
    pub fn redeals(&self) -> u32 {
        self.deals.saturating_sub(self.hands.len() as u32)
    }
}

/// Table configuration shared by every game of a run.
#[derive(Debug, Clone)]
pub struct Simulator {
    base_seed: u64,
    seats: [&'static str; 4],
    rules: RulesConfig,
    max_steps: u64,
}

impl Simulator {
    pub const DEFAULT_MAX_STEPS: u64 = 10_000;

    pub fn new(base_seed: u64, seats: [&'static str; 4]) -> Self {
        Self {
            base_seed,
            seats,
            rules: RulesConfig::default(),
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn seats(&self) -> [&'static str; 4] {
        self.seats
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Seed of game `game_no`, independent of how many games run or in which
    /// order.
    pub fn game_seed(&self, game_no: u64) -> u64 {
        derive_game_seed(self.base_seed, game_no)
    }

    fn build_players(&self, game_seed: u64) -> Result<[Box<dyn AiPlayer>; 4], SimulatorError> {
        let players = [0u8, 1, 2, 3].map(|seat| {
            let config = AiConfig::with_seed(derive_ai_seed(game_seed, seat));
            create_ai(self.seats[seat as usize], config)
        });
        if let Some(seat) = players.iter().position(Option::is_none) {
            return Err(SimulatorError::UnknownAi(self.seats[seat].to_string()));
        }
        let [Some(p0), Some(p1), Some(p2), Some(p3)] = players else {
            return Err(SimulatorError::UnknownAi(self.seats.join(",")));
        };
        Ok([p0, p1, p2, p3])
    }

    /// Play game `game_no` to completion or until the step bound.
    pub fn simulate_game(&self, game_no: u64) -> Result<GameResult, SimulatorError> {
        let start = Instant::now();
        let seed = self.game_seed(game_no);
        let players = self.build_players(seed)?;
        let mut flow = GameFlow::with_rules(seed, players, self.rules);

        let mut hands = Vec::new();
        let mut steps = 0;
        while !flow.is_over() && steps < self.max_steps {
            let scored = flow.hands_scored();
            flow.step_game()
                .map_err(|source| SimulatorError::Engine { game_no, source })?;
            if flow.hands_scored() > scored {
                if let Some(outcome) = flow.last_hand() {
                    hands.push(outcome.clone());
                }
            }
            steps += 1;
        }

        let stalled = !flow.is_over();
        if stalled {
            warn!(game_no, seed, steps, scores = ?flow.scores(), "game stalled");
        } else {
            debug!(game_no, seed, steps, scores = ?flow.scores(), "game finished");
        }

        Ok(GameResult {
            game_no,
            seed,
            final_scores: flow.scores(),
            winner: flow.winner(),
            stalled,
            steps,
            deals: flow.state().hands_dealt,
            hands,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Run games `1..=games` in parallel. Results come back in game order.
    pub fn run(&self, games: u64) -> Vec<Result<GameResult, SimulatorError>> {
        (1..=games)
            .into_par_iter()
            .map(|game_no| self.simulate_game(game_no))
            .collect()
    }
}

/// Size the global rayon pool; 0 keeps rayon's default of one thread per
/// core. Only the first call in a process takes effect; later calls log a
/// warning and return false.
pub fn configure_threads(threads: usize) -> bool {
    if threads == 0 {
        return true;
    }
    match rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        Ok(()) => true,
        Err(err) => {
            warn!(threads, error = %err, "could not size the thread pool; using the existing pool");
            false
        }
    }
}
