//! Text log serialization and deserialization-by-replay.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::cards::PACK;
use crate::domain::log::LogEntry;
use crate::domain::play;
use crate::domain::state::{Game, SEATS};
use crate::errors::domain::LogParseError;

impl Game {
    /// Canonical newline-joined log: the full-information form used for
    /// persistence and replay.
    pub fn serialize(&self) -> String {
        self.log
            .iter()
            .map(LogEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The log as `viewer` is entitled to see it: each entry independently
    /// obscured per the visibility rules in [`LogEntry::render_for`].
    pub fn serialize_for(&self, viewer: &str) -> String {
        self.log
            .iter()
            .map(|entry| entry.render_for(viewer))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rebuild a game from a canonical log by replaying it.
    ///
    /// Only recorded history is reproduced exactly. The unseen remainder of
    /// the pack was never revealed, so it is put in a fresh random order:
    /// draws beyond the end of the log may differ from the ones the original
    /// session would have made.
    pub fn load(seats: [&str; SEATS], log: &str) -> Result<Game, LogParseError> {
        Self::load_with_rng(seats, log, &mut rand::rng())
    }

    /// [`Game::load`] with a caller-supplied RNG for the unseen remainder.
    pub fn load_with_rng<R: Rng + ?Sized>(
        seats: [&str; SEATS],
        log: &str,
        rng: &mut R,
    ) -> Result<Game, LogParseError> {
        let entries = log
            .lines()
            .map(LogEntry::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if entries.len() < SEATS {
            return Err(LogParseError::TruncatedDeal);
        }
        let (deal, rest) = entries.split_at(SEATS);

        let mut dealt = Vec::with_capacity(SEATS);
        for (entry, seat) in deal.iter().zip(seats) {
            let LogEntry::Pickup { player, card } = entry else {
                return Err(LogParseError::TruncatedDeal);
            };
            if player.as_str() != seat {
                return Err(LogParseError::SeatMismatch);
            }
            dealt.push(*card);
        }

        let mut drawn = Vec::new();
        let mut plays = Vec::new();
        for entry in rest {
            match entry {
                LogEntry::Pickup { card, .. } => drawn.push(*card),
                LogEntry::Play(mv) => plays.push(mv.clone()),
                // Discards and reveals are regenerated by the replay.
                LogEntry::Discard { .. } | LogEntry::Reveal { .. } => {}
            }
        }

        let mut remainder = PACK.to_vec();
        for card in dealt.iter().chain(drawn.iter()) {
            let Some(pos) = remainder.iter().position(|c| c == card) else {
                return Err(LogParseError::CardCountMismatch);
            };
            remainder.swap_remove(pos);
        }
        remainder.shuffle(rng);
        // The remainder can be empty: a game that ended with a prince
        // resolved at deck exhaustion recorded the hidden discard itself as
        // a pickup, leaving nothing to set aside.
        let hidden = remainder.pop();

        let mut deck = dealt;
        deck.extend(drawn);
        deck.extend(remainder);

        let mut game = Game::start(seats, deck, hidden);
        for mv in &plays {
            play::play_move(&mut game, mv)?;
        }
        Ok(game)
    }
}
