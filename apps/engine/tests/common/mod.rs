#![allow(dead_code)]

// tests/common/mod.rs
use euchre_engine::ai::ScriptedPlayer;
use euchre_engine::{ActionId, ActionMask, AiPlayer, GameFlow, Observation, Phase, Seat};

pub mod proptest_prelude;

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Lowest legal id: the cheapest deterministic answer to any request.
pub fn lowest_legal(legal: ActionMask) -> ActionId {
    legal.nth(0).unwrap_or(ActionId::INVALID)
}

/// Pass when allowed, otherwise the lowest legal id.
pub fn pass_or_lowest(legal: ActionMask) -> ActionId {
    if legal.contains(ActionId::PASS) {
        ActionId::PASS
    } else {
        lowest_legal(legal)
    }
}

/// Four scripted seats sharing one script.
pub fn scripted<F>(script: F) -> [Box<dyn AiPlayer>; 4]
where
    F: Fn(&Observation, ActionMask) -> ActionId + Send + Sync + Clone + 'static,
{
    std::array::from_fn(|_| Box::new(ScriptedPlayer::new(script.clone())) as Box<dyn AiPlayer>)
}

/// Everyone passes; forced choices take the lowest legal id.
pub fn passers() -> [Box<dyn AiPlayer>; 4] {
    scripted(|_, legal| pass_or_lowest(legal))
}

/// `maker` orders up in round one and answers `alone` to the go-alone
/// question; everyone else passes and plays the lowest legal card.
pub fn maker_script(maker: Seat, alone: bool) -> [Box<dyn AiPlayer>; 4] {
    scripted(move |obs, legal| {
        if obs.player == maker && legal.contains(ActionId::ORDER_UP) {
            ActionId::ORDER_UP
        } else if legal.contains(ActionId::GO_ALONE_YES) {
            if alone {
                ActionId::GO_ALONE_YES
            } else {
                ActionId::GO_ALONE_NO
            }
        } else {
            pass_or_lowest(legal)
        }
    })
}

/// Step until `phase` is reached, failing after `limit` steps.
pub fn step_until(flow: &mut GameFlow, phase: Phase, limit: usize) {
    for _ in 0..limit {
        if flow.phase() == phase {
            return;
        }
        flow.step_hand().expect("step should succeed");
    }
    assert_eq!(flow.phase(), phase, "phase not reached in {limit} steps");
}
