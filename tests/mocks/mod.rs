//! Mock implementations for testing

pub mod reference_game;

pub use reference_game::{Countdown, CountdownMove, CountdownState};
