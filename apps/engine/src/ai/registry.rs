//! Static list of the AIs a driver can construct by name.
//!
//! Keep entries in a stable order; a factory must not have side effects and
//! the same seed must give the same behavior.

use crate::ai::{AiConfig, AiPlayer, Heuristic, MaxPlayer, MinPlayer, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: MinPlayer::NAME,
        version: MinPlayer::VERSION,
        make: make_min_player,
    },
    AiFactory {
        name: MaxPlayer::NAME,
        version: MaxPlayer::VERSION,
        make: make_max_player,
    },
];

pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(config.seed()))
}

fn make_heuristic(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(Heuristic::from_config(config))
}

fn make_min_player(_config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(MinPlayer::new())
}

fn make_max_player(_config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(MaxPlayer::new())
}
