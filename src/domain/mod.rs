//! Domain layer: pure game rules, turn state machine, and log codec.

pub mod cards;
pub mod cards_serde;
pub mod codec;
pub mod dealing;
pub mod legal;
pub mod log;
pub mod moves;
pub mod play;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_codec;

// Re-exports for ergonomics
pub use cards::{Card, PACK};
pub use legal::legal_moves;
pub use log::{LogEntry, MASK};
pub use moves::{Move, PossibleMoves};
pub use play::play_move;
pub use state::{Game, OnTurn, Outcome, PlayerId, SEATS};
