//! Shared types for the simulator.

use clap::ValueEnum;
use euchre_engine::ai::{Heuristic, MaxPlayer, MinPlayer, RandomPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, streamed as games finish
    Jsonl,
    /// A single JSON array written at the end of the run
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    /// Game result and team totals only
    Basic,
    /// Adds a record for every scored hand
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Random,
    Heuristic,
    Min,
    Max,
}

impl AiType {
    /// Name of the AI in the engine's registry.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Random => RandomPlayer::NAME,
            AiType::Heuristic => Heuristic::NAME,
            AiType::Min => MinPlayer::NAME,
            AiType::Max => MaxPlayer::NAME,
        }
    }
}
