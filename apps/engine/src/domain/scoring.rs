use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::rules::{
    EUCHRE_POINTS, LONE_MARCH_POINTS, MAKE_POINTS, MARCH_POINTS, TEAMS, TRICKS_PER_HAND,
    WINNING_SCORE,
};
use crate::domain::state::{next_seat, GameState, Phase, Seat, Team};
use crate::domain::Suit;

/// Points awarded for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandScore {
    pub team: Team,
    pub points: u8,
    /// The makers took two or fewer tricks.
    pub euchred: bool,
}

/// Summary of a scored hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandOutcome {
    pub dealer: Seat,
    pub trump: Suit,
    pub maker: Seat,
    pub going_alone: bool,
    pub tricks_won: [u8; TEAMS],
    pub score: HandScore,
    pub scores_after: [u8; TEAMS],
}

/// Scoring law: 5 tricks earn 4 alone or 2 otherwise, 3-4 tricks earn 1,
/// fewer than 3 give the defenders 2.
pub fn score_hand(maker_team: Team, maker_tricks: u8, going_alone: bool) -> HandScore {
    if maker_tricks == TRICKS_PER_HAND {
        let points = if going_alone {
            LONE_MARCH_POINTS
        } else {
            MARCH_POINTS
        };
        HandScore {
            team: maker_team,
            points,
            euchred: false,
        }
    } else if maker_tricks >= 3 {
        HandScore {
            team: maker_team,
            points: MAKE_POINTS,
            euchred: false,
        }
    } else {
        HandScore {
            team: 1 - maker_team,
            points: EUCHRE_POINTS,
            euchred: true,
        }
    }
}

/// Score the finished hand, pass the deal clockwise and reset for the next
/// deal.
pub fn apply_hand_scoring(state: &mut GameState) -> Result<HandOutcome, DomainError> {
    DomainError::require_phase(Phase::HandOver, state.hand.phase)?;
    let hs = &state.hand;
    let maker = hs.require_maker()?;
    let trump = hs.require_trump()?;
    let maker_team = hs.maker_team().ok_or(DomainError::NoMaker)?;
    let score = score_hand(maker_team, hs.tricks_won[maker_team as usize], hs.going_alone);

    state.scores[score.team as usize] += score.points;
    let outcome = HandOutcome {
        dealer: state.dealer,
        trump,
        maker,
        going_alone: state.hand.going_alone,
        tricks_won: state.hand.tricks_won,
        score,
        scores_after: state.scores,
    };

    state.dealer = next_seat(state.dealer);
    state.hand.reset();
    Ok(outcome)
}

/// Team that has reached the winning score, if any.
pub fn winning_team(scores: [u8; TEAMS]) -> Option<Team> {
    scores
        .iter()
        .position(|&s| s >= WINNING_SCORE)
        .map(|t| t as Team)
}
