//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tripeaks_core::{GameSession, LevelDescription, Placement};

static INIT: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Filter comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// 6♣ covered by an open 5♣; 4♣ on the discard pile; 9♣ then 7♣ to draw.
pub fn small_level() -> LevelDescription {
    LevelDescription::new(1)
        .with_playfield(Placement::new(6, 0).at(100.0, 1000.0))
        .with_playfield(Placement::new(5, 0).at(150.0, 900.0).face_up(true))
        .with_stack(Placement::new(4, 0))
        .with_stack(Placement::new(9, 0))
        .with_stack(Placement::new(7, 0))
}

pub fn session_for(level: &LevelDescription) -> GameSession {
    init_tracing();
    let mut session = GameSession::default();
    session
        .start_level(level)
        .expect("test level should be valid");
    session
}
