//! Random AI player - picks uniformly among the legal actions.
//!
//! Holds its RNG behind a `Mutex` because [`AiPlayer`] methods take `&self`.
//! A new match reseeds the RNG from the match seed mixed with the player's own
//! seed, so a seeded run replays exactly and seats with different seeds do
//! not mirror each other.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{ActionId, ActionMask, Observation};

pub struct RandomPlayer {
    rng: Mutex<StdRng>,
    salt: u64,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible choices; `None` draws from OS entropy
    /// until the first match reseeds it.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            salt: seed.unwrap_or(0),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_action(&self, _obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal actions available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let idx = rng.random_range(0..legal.len()) as usize;
        legal
            .nth(idx)
            .ok_or_else(|| AiError::Internal("Failed to choose random action".into()))
    }

    fn on_new_match(&self, seed: u64) {
        if let Ok(mut rng) = self.rng.lock() {
            *rng = StdRng::seed_from_u64(seed ^ self.salt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::RulesConfig;
    use crate::domain::{GameState, Suit};

    fn obs() -> Observation {
        Observation::for_seat(&GameState::new(1, RulesConfig::default()), 0)
    }

    #[test]
    fn always_picks_from_mask() {
        let ai = RandomPlayer::new(Some(7));
        let legal = ActionMask::EMPTY
            .with(ActionId::PASS)
            .with(ActionId::call_trump(Suit::Hearts))
            .with(ActionId::call_trump(Suit::Clubs));
        for _ in 0..200 {
            let a = ai.select_action(&obs(), legal).unwrap();
            assert!(legal.contains(a));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let legal = ActionMask::from_bits(0xFF_FFFF);
        let a = RandomPlayer::new(Some(42));
        let b = RandomPlayer::new(Some(42));
        a.on_new_match(9);
        b.on_new_match(9);
        for _ in 0..50 {
            assert_eq!(
                a.select_action(&obs(), legal).unwrap(),
                b.select_action(&obs(), legal).unwrap()
            );
        }
    }

    #[test]
    fn empty_mask_is_an_error() {
        let ai = RandomPlayer::new(Some(1));
        assert!(matches!(
            ai.select_action(&obs(), ActionMask::EMPTY),
            Err(AiError::InvalidMove(_))
        ));
    }
}
