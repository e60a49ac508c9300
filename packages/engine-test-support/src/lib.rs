//! Shared helpers for engine and simulator tests.

pub mod logging;
