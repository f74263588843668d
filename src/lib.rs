#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::cards::{Card, PACK};
pub use domain::legal::legal_moves;
pub use domain::log::{LogEntry, MASK};
pub use domain::moves::{Move, PossibleMoves};
pub use domain::play::play_move;
pub use domain::state::{Game, OnTurn, Outcome, PlayerId, SEATS};
pub use errors::domain::{LogParseError, PlayError};
