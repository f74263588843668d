//! The move value type and per-card move sets.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::state::PlayerId;

/// A candidate or submitted move: which card to play, and, where the rank
/// demands it, a nominated target player and/or a nominated rank.
///
/// A targeting card carried with no nominations is a *bare discard*, legal
/// only when every remaining opponent is protected (the prince excepted,
/// which always takes a target, possibly the acting player).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    pub card: Card,
    pub nominated_player: Option<PlayerId>,
    pub nominated_card: Option<Card>,
}

impl Move {
    /// A move with no nominations.
    pub fn bare(player: impl Into<PlayerId>, card: Card) -> Self {
        Self {
            player: player.into(),
            card,
            nominated_player: None,
            nominated_card: None,
        }
    }

    /// A move nominating a target player.
    pub fn nominating(player: impl Into<PlayerId>, card: Card, target: impl Into<PlayerId>) -> Self {
        Self {
            player: player.into(),
            card,
            nominated_player: Some(target.into()),
            nominated_card: None,
        }
    }

    /// A move nominating a target player and a guessed rank (the guard).
    pub fn guessing(
        player: impl Into<PlayerId>,
        card: Card,
        target: impl Into<PlayerId>,
        guess: Card,
    ) -> Self {
        Self {
            player: player.into(),
            card,
            nominated_player: Some(target.into()),
            nominated_card: Some(guess),
        }
    }
}

/// All moves playable with one of the two held cards.
///
/// The two held cards always yield two independent sets, even when the cards
/// are the same rank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PossibleMoves {
    pub card: Card,
    pub moves: Vec<Move>,
}
