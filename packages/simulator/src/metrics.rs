//! Metrics collection and output for simulation results.

use std::time::Duration;

use euchre_engine::domain::state::team_of;
use euchre_engine::{HandOutcome, Team};
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u64,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub teams: [TeamMetrics; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hands: Option<Vec<HandMetrics>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 4],
    pub total_games: u64,
    pub stick_the_dealer: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [u8; 2],
    pub winner: Option<Team>,
    pub stalled: bool,
    pub steps: u64,
    pub hands_played: u32,
    pub redeals: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandMetrics {
    pub hand_no: u32,
    pub dealer: u8,
    pub trump: String,
    pub maker: u8,
    pub going_alone: bool,
    pub tricks_won: [u8; 2],
    pub scoring_team: Team,
    pub points: u8,
    pub euchred: bool,
    pub scores_after: [u8; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamMetrics {
    pub team: Team,
    pub final_score: u8,
    /// Hands this team called trump in.
    pub hands_made: u32,
    /// Called hands the team took 3+ tricks in.
    pub hands_won_as_maker: u32,
    pub marches: u32,
    pub lone_hands: u32,
    pub lone_marches: u32,
    /// Times this team euchred the makers.
    pub euchres: u32,
    pub tricks_won: u32,
}

/// Build metrics for one game.
pub fn build_game_metrics(
    result: &GameResult,
    ai_types: [String; 4],
    total_games: u64,
    stick_the_dealer: bool,
    level: MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let hands = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(
            result
                .hands
                .iter()
                .enumerate()
                .map(|(i, hand)| build_hand_metrics(i as u32 + 1, hand))
                .collect(),
        ),
    };

    GameMetrics {
        game_id: result.game_no,
        seed: result.seed,
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
            stick_the_dealer,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores,
            winner: result.winner,
            stalled: result.stalled,
            steps: result.steps,
            hands_played: result.hands.len() as u32,
            redeals: result.redeals(),
            duration_ms: result.duration_ms,
        },
        teams: [
            build_team_metrics(0, result),
            build_team_metrics(1, result),
        ],
        hands,
    }
}

fn build_hand_metrics(hand_no: u32, hand: &HandOutcome) -> HandMetrics {
    HandMetrics {
        hand_no,
        dealer: hand.dealer,
        trump: hand.trump.to_string(),
        maker: hand.maker,
        going_alone: hand.going_alone,
        tricks_won: hand.tricks_won,
        scoring_team: hand.score.team,
        points: hand.score.points,
        euchred: hand.score.euchred,
        scores_after: hand.scores_after,
    }
}

fn build_team_metrics(team: Team, result: &GameResult) -> TeamMetrics {
    let mut metrics = TeamMetrics {
        team,
        final_score: result.final_scores[team as usize],
        ..TeamMetrics::default()
    };

    for hand in &result.hands {
        let tricks = hand.tricks_won[team as usize];
        metrics.tricks_won += tricks as u32;
        if team_of(hand.maker) == team {
            metrics.hands_made += 1;
            if tricks >= 3 {
                metrics.hands_won_as_maker += 1;
            }
            if tricks == 5 {
                metrics.marches += 1;
            }
            if hand.going_alone {
                metrics.lone_hands += 1;
                if tricks == 5 {
                    metrics.lone_marches += 1;
                }
            }
        } else if hand.score.euchred {
            metrics.euchres += 1;
        }
    }
    metrics
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u64,
    pub seed: u64,
    pub winner: Option<Team>,
    pub stalled: bool,
    pub team0_score: u8,
    pub team1_score: u8,
    pub hands: u32,
    pub redeals: u32,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            stalled: metrics.result.stalled,
            team0_score: metrics.result.final_scores[0],
            team1_score: metrics.result.final_scores[1],
            hands: metrics.result.hands_played,
            redeals: metrics.result.redeals,
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}

/// Aggregate over a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationSummary {
    pub total: u64,
    pub completed: u64,
    pub stalled: u64,
    pub errors: u64,
    pub team_wins: [u64; 2],
    pub hands: u64,
    pub lone_hands: u64,
    pub euchres: u64,
    pub elapsed: Duration,
}

impl SimulationSummary {
    pub fn new(total: u64, errors: u64, elapsed: Duration) -> Self {
        Self {
            total,
            errors,
            elapsed,
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        if result.stalled {
            self.stalled += 1;
        } else {
            self.completed += 1;
        }
        if let Some(team) = result.winner {
            self.team_wins[team as usize] += 1;
        }
        self.hands += result.hands.len() as u64;
        self.lone_hands += result.hands.iter().filter(|h| h.going_alone).count() as u64;
        self.euchres += result.hands.iter().filter(|h| h.score.euchred).count() as u64;
    }

    pub fn win_rate(&self, team: Team) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        self.team_wins[team as usize] as f64 / self.completed as f64 * 100.0
    }

    pub fn hands_per_game(&self) -> f64 {
        let played = self.completed + self.stalled;
        if played == 0 {
            return 0.0;
        }
        self.hands as f64 / played as f64
    }

    pub fn games_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        (self.completed + self.stalled) as f64 / secs
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Simulation Summary ===")?;
        writeln!(f, "Games completed: {}/{}", self.completed, self.total)?;
        if self.stalled > 0 {
            writeln!(f, "Stalled: {}", self.stalled)?;
        }
        if self.errors > 0 {
            writeln!(f, "Errors: {}", self.errors)?;
        }
        writeln!(f, "Total time: {:?}", self.elapsed)?;
        writeln!(f, "Games/sec: {:.1}", self.games_per_sec())?;
        writeln!(f, "Hands/game: {:.2}", self.hands_per_game())?;

        writeln!(f, "\n=== Results by Team ===")?;
        for team in 0..2u8 {
            let seats = [team, team + 2];
            writeln!(
                f,
                "Team {team} (seats {} & {}): wins={} ({:.1}%)",
                seats[0],
                seats[1],
                self.team_wins[team as usize],
                self.win_rate(team)
            )?;
        }
        writeln!(
            f,
            "Lone hands: {}  Euchres: {}",
            self.lone_hands, self.euchres
        )
    }
}
