//! Log entries: canonical tokens, per-viewer obscuring, and token parsing.
//!
//! Token grammar, one entry per line:
//!
//! - pickup: `player:rank`
//! - play: `player,rank,nominatedPlayer,nominatedRank` (empty fields for
//!   absent nominations)
//! - discard: `player-rank`
//! - reveal: `shower;seer;rank`
//!
//! An obscured rank renders as the single placeholder [`MASK`].

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::moves::Move;
use crate::domain::state::PlayerId;
use crate::errors::domain::LogParseError;

/// Placeholder for a rank the viewer is not entitled to see.
pub const MASK: char = '?';

/// One match event. Entries are append-only and each is independently
/// renderable and obscurable.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum LogEntry {
    /// A player gained a card: the deal, a turn draw, or a prince replacement.
    Pickup { player: PlayerId, card: Card },
    /// A move was resolved.
    Play(Move),
    /// A card left a hand face-up, through elimination or a forced exchange.
    Discard { player: PlayerId, card: Card },
    /// One player privately showed their card to another.
    Reveal {
        shower: PlayerId,
        seer: PlayerId,
        card: Card,
    },
}

impl LogEntry {
    /// Canonical token, full information.
    pub fn render(&self) -> String {
        match self {
            LogEntry::Pickup { player, card } => format!("{player}:{card}"),
            LogEntry::Play(mv) => {
                let nominated_player = mv.nominated_player.as_deref().unwrap_or("");
                let nominated_card = mv
                    .nominated_card
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                format!(
                    "{},{},{},{}",
                    mv.player, mv.card, nominated_player, nominated_card
                )
            }
            LogEntry::Discard { player, card } => format!("{player}-{card}"),
            LogEntry::Reveal { shower, seer, card } => format!("{shower};{seer};{card}"),
        }
    }

    /// Token as `viewer` is entitled to see it.
    ///
    /// Plays and discards are public actions and always render in full.
    /// A pickup is visible only to its owner; a reveal only to the two
    /// players involved. Everything else has the rank masked.
    pub fn render_for(&self, viewer: &str) -> String {
        if self.visible_to(viewer) {
            return self.render();
        }
        match self {
            LogEntry::Pickup { player, .. } => format!("{player}:{MASK}"),
            LogEntry::Reveal { shower, seer, .. } => format!("{shower};{seer};{MASK}"),
            LogEntry::Play(_) | LogEntry::Discard { .. } => self.render(),
        }
    }

    pub fn visible_to(&self, viewer: &str) -> bool {
        match self {
            LogEntry::Pickup { player, .. } => player == viewer,
            LogEntry::Reveal { shower, seer, .. } => shower == viewer || seer == viewer,
            LogEntry::Play(_) | LogEntry::Discard { .. } => true,
        }
    }

    /// Parse one canonical line. Obscured lines do not parse: a masked rank
    /// is not a card, and only full-information logs can be replayed.
    pub fn parse(line: &str) -> Result<LogEntry, LogParseError> {
        if line.contains(';') {
            let mut fields = line.split(';');
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(shower), Some(seer), Some(card), None) => Ok(LogEntry::Reveal {
                    shower: shower.to_string(),
                    seer: seer.to_string(),
                    card: parse_card(card)?,
                }),
                _ => Err(LogParseError::Malformed(line.to_string())),
            }
        } else if line.contains(',') {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 4 {
                return Err(LogParseError::Malformed(line.to_string()));
            }
            let nominated_player = if fields[2].is_empty() {
                None
            } else {
                Some(fields[2].to_string())
            };
            let nominated_card = if fields[3].is_empty() {
                None
            } else {
                Some(parse_card(fields[3])?)
            };
            Ok(LogEntry::Play(Move {
                player: fields[0].to_string(),
                card: parse_card(fields[1])?,
                nominated_player,
                nominated_card,
            }))
        } else if let Some((player, card)) = line.split_once(':') {
            Ok(LogEntry::Pickup {
                player: player.to_string(),
                card: parse_card(card)?,
            })
        } else if let Some((player, card)) = line.split_once('-') {
            Ok(LogEntry::Discard {
                player: player.to_string(),
                card: parse_card(card)?,
            })
        } else {
            Err(LogParseError::Malformed(line.to_string()))
        }
    }
}

fn parse_card(token: &str) -> Result<Card, LogParseError> {
    token
        .parse::<u8>()
        .ok()
        .and_then(Card::from_value)
        .ok_or_else(|| LogParseError::UnknownCard(token.to_string()))
}
