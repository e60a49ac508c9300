//! Asking a seat for its next action.

use tracing::{trace, warn};

use super::GameFlow;
use crate::domain::{Action, ActionMask, Observation, Seat};
use crate::error::EngineError;

impl GameFlow {
    /// Ask `seat` to choose from `legal`. The answer is validated against the
    /// mask before it is decoded; nothing is mutated here.
    pub(super) fn request_action(
        &self,
        seat: Seat,
        legal: ActionMask,
    ) -> Result<Action, EngineError> {
        let obs = Observation::for_seat(&self.state, seat);
        let player = &self.players[seat as usize];
        let requested = player
            .select_action(&obs, legal)
            .map_err(|source| EngineError::Ai { seat, source })?;

        if !legal.contains(requested) {
            warn!(
                seat,
                player = player.name(),
                requested = requested.value(),
                %legal,
                "player chose an action outside its legal mask"
            );
            return Err(EngineError::illegal_action(seat, requested, legal));
        }

        let action = requested.decode();
        trace!(seat, phase = ?obs.phase, %action, "action accepted");
        Ok(action)
    }
}
