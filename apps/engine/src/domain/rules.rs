use serde::{Deserialize, Serialize};

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const HAND_SIZE: u8 = 5;
pub const TRICKS_PER_HAND: u8 = 5;
/// First team to reach this score wins; overshoot is allowed.
pub const WINNING_SCORE: u8 = 10;

/// Points for taking all five tricks alone.
pub const LONE_MARCH_POINTS: u8 = 4;
/// Points for taking all five tricks with a partner.
pub const MARCH_POINTS: u8 = 2;
/// Points for taking three or four tricks.
pub const MAKE_POINTS: u8 = 1;
/// Points the defenders earn when the makers take two or fewer tricks.
pub const EUCHRE_POINTS: u8 = 2;

/// Table rules that can vary between matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// The dealer may not pass in the second bidding round.
    pub stick_the_dealer: bool,
}

impl RulesConfig {
    pub fn stick_the_dealer() -> Self {
        Self {
            stick_the_dealer: true,
        }
    }
}
