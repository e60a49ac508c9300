//! RNG seed derivation utilities for deterministic simulations.
//!
//! A benchmark run takes one base seed; every game and every bot in it gets a
//! distinct seed derived from that base, so a run can be replayed exactly.

/// Derive the match seed for game `game_no` of a run.
pub fn derive_game_seed(base_seed: u64, game_no: u64) -> u64 {
    base_seed
        .wrapping_add(game_no.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(2) // keep game 0 distinct from the base seed
}

/// Derive a seed for the bot in `seat` from its game's match seed.
pub fn derive_ai_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64 + 1).wrapping_mul(0xBF58_476D_1CE4_E5B9))
        .wrapping_add(1)
}
