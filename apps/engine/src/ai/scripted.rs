//! Scripted AI player driven by a closure, for tests and custom drivers.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{ActionId, ActionMask, Observation};

type Script = dyn Fn(&Observation, ActionMask) -> ActionId + Send + Sync;

pub struct ScriptedPlayer {
    name: &'static str,
    script: Box<Script>,
}

impl ScriptedPlayer {
    pub const NAME: &'static str = "Scripted";

    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&Observation, ActionMask) -> ActionId + Send + Sync + 'static,
    {
        Self::named(Self::NAME, script)
    }

    pub fn named<F>(name: &'static str, script: F) -> Self
    where
        F: Fn(&Observation, ActionMask) -> ActionId + Send + Sync + 'static,
    {
        Self {
            name,
            script: Box::new(script),
        }
    }

    /// Always answers with `action`, legal or not.
    pub fn constant(action: ActionId) -> Self {
        Self::new(move |_, _| action)
    }
}

impl AiPlayer for ScriptedPlayer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn select_action(&self, obs: &Observation, legal: ActionMask) -> Result<ActionId, AiError> {
        Ok((self.script)(obs, legal))
    }
}

impl std::fmt::Debug for ScriptedPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedPlayer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
