//! Typed failure kinds for the engine and the log codec.
//!
//! Every error is a rejection of a single call: the game it was raised
//! against is left exactly as it was, log included, and the caller decides
//! what (if anything) to do about it.

use thiserror::Error;

/// Rejection reasons for `play_move` and `draw`.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum PlayError {
    /// Caller is not the player currently on turn.
    #[error("not your turn")]
    NotYourTurn,
    /// Played card is not one of the two held cards.
    #[error("played card is not one of the two held cards")]
    IllegalCard,
    /// The rank required a target or rank nomination and none (or an
    /// incomplete one) was given.
    #[error("this card requires a nomination")]
    MissingNomination,
    /// Nominated player is eliminated, protected, not a recognized seat, or
    /// the nomination itself is not allowed (e.g. guessing a guard).
    #[error("nominated player or card is not a valid target")]
    InvalidTarget,
    /// A prince or king was played while keeping the countess.
    #[error("the countess must be discarded before a prince or king")]
    CountessForced,
    /// A prince discard needed a replacement draw with both the deck and
    /// the hidden discard exhausted. Unreachable from a full-pack deal;
    /// raised for inconsistent scripted decks and forged logs.
    #[error("no replacement card remains for a prince discard")]
    PackExhausted,
    /// No further play is possible. Signals terminal state, not a bug.
    #[error("the game is finished")]
    GameFinished,
}

/// Failures while rebuilding a game from a serialized log.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LogParseError {
    #[error("malformed log entry: {0:?}")]
    Malformed(String),
    #[error("unknown card value: {0:?}")]
    UnknownCard(String),
    #[error("deal entries do not match the seat order")]
    SeatMismatch,
    #[error("log is missing its deal entries")]
    TruncatedDeal,
    #[error("logged cards are not drawn from the fixed pack")]
    CardCountMismatch,
    #[error("replayed move rejected: {0}")]
    Replay(#[from] PlayError),
}
