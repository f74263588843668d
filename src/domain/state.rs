//! The game container and turn state machine.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::domain::cards::Card;
use crate::domain::log::LogEntry;
use crate::errors::domain::PlayError;

pub type PlayerId = String;

/// Number of seats in a game.
pub const SEATS: usize = 4;

/// The two cards a player holds while their move decision is pending.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OnTurn {
    pub player: PlayerId,
    /// The card held when the turn began.
    pub held: Card,
    /// The card just drawn.
    pub drawn: Card,
}

/// Final standing, computed exactly once when the game finishes. Survivors
/// tied at the winning rank are all co-winners, in turn order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Outcome {
    pub winning_card: Card,
    pub winners: Vec<PlayerId>,
}

/// A match in progress: mutated in place by each accepted move, never
/// partially rolled back. A rejected move leaves every field untouched.
///
/// Single-threaded by contract: callers hosting concurrent players against
/// one game must serialize their calls themselves. Independent games share
/// nothing and run freely in parallel.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    /// Future turn order, excluding any player currently on turn.
    pub(crate) players: Vec<PlayerId>,
    /// Current card per live player. Eliminated players are removed.
    pub(crate) hands: HashMap<PlayerId, Card>,
    /// Players shielded from targeted effects until their own next turn.
    pub(crate) protected: HashSet<PlayerId>,
    pub(crate) eliminated: HashSet<PlayerId>,
    /// Remaining cards, drawn from the front.
    pub(crate) deck: VecDeque<Card>,
    /// The card set aside unseen at the deal; the fallback draw when a
    /// prince effect resolves against an empty deck.
    pub(crate) hidden_discard: Option<Card>,
    pub(crate) on_turn: Option<OnTurn>,
    pub(crate) log: Vec<LogEntry>,
    pub(crate) outcome: Option<Outcome>,
}

impl Game {
    /// Deal the front of `deck` to the seats in order, then draw for the
    /// first player. If no draw is possible the game finishes immediately.
    pub(crate) fn start(seats: [&str; SEATS], deck: Vec<Card>, hidden_discard: Option<Card>) -> Self {
        let mut game = Game {
            players: seats.iter().map(|s| s.to_string()).collect(),
            hands: HashMap::new(),
            protected: HashSet::new(),
            eliminated: HashSet::new(),
            deck: deck.into(),
            hidden_discard,
            on_turn: None,
            log: Vec::new(),
            outcome: None,
        };
        for seat in seats {
            let card = game
                .deck
                .pop_front()
                .expect("deck must hold a card for every seat");
            game.hands.insert(seat.to_string(), card);
            game.log.push(LogEntry::Pickup {
                player: seat.to_string(),
                card,
            });
        }
        if game.draw().is_err() {
            game.finish();
        }
        game
    }

    /// Begin the next turn: pop the next player from the queue, draw the top
    /// card, clear that player's protection, and set the on-turn snapshot.
    ///
    /// Fails with [`PlayError::GameFinished`] when the deck is empty or at
    /// most one player survives.
    pub(crate) fn draw(&mut self) -> Result<(), PlayError> {
        debug_assert!(self.on_turn.is_none(), "draw while a move decision is pending");
        if self.players.len() <= 1 {
            return Err(PlayError::GameFinished);
        }
        let Some(drawn) = self.deck.pop_front() else {
            return Err(PlayError::GameFinished);
        };
        let player = self.players.remove(0);
        self.protected.remove(&player);
        let held = self.hands[&player];
        debug!(player = %player, ?drawn, "turn begins");
        self.log.push(LogEntry::Pickup {
            player: player.clone(),
            card: drawn,
        });
        self.on_turn = Some(OnTurn { player, held, drawn });
        Ok(())
    }

    /// Compute the outcome. A no-op if it was already computed.
    pub(crate) fn finish(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let mut best: Option<Outcome> = None;
        for player in &self.players {
            let card = self.hands[player];
            match &mut best {
                Some(outcome) if card > outcome.winning_card => {
                    outcome.winning_card = card;
                    outcome.winners.clear();
                    outcome.winners.push(player.clone());
                }
                Some(outcome) if card == outcome.winning_card => {
                    outcome.winners.push(player.clone());
                }
                Some(_) => {}
                None => {
                    best = Some(Outcome {
                        winning_card: card,
                        winners: vec![player.clone()],
                    });
                }
            }
        }
        debug!(outcome = ?best, "game finished");
        self.outcome = best;
    }

    pub(crate) fn eliminate(&mut self, player: &str) {
        self.players.retain(|p| p != player);
        self.hands.remove(player);
        self.protected.remove(player);
        self.eliminated.insert(player.to_string());
    }

    /// Live players in turn order, the on-turn player (if any) first.
    pub fn live_players(&self) -> Vec<&str> {
        let mut live: Vec<&str> = Vec::with_capacity(self.players.len() + 1);
        if let Some(on_turn) = &self.on_turn {
            live.push(&on_turn.player);
        }
        live.extend(self.players.iter().map(String::as_str));
        live
    }

    /// Opponents of the on-turn player that may currently be targeted.
    pub fn open_opponents(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| !self.protected.contains(*p))
            .map(String::as_str)
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        let deck_exhausted = self.on_turn.is_none() && self.deck.is_empty();
        deck_exhausted || self.live_players().len() <= 1
    }

    pub fn on_turn(&self) -> Option<&OnTurn> {
        self.on_turn.as_ref()
    }

    pub fn on_turn_player(&self) -> Option<&str> {
        self.on_turn.as_ref().map(|t| t.player.as_str())
    }

    /// Raw hand lookup. Masking for viewers happens in the log codec; any
    /// further per-viewer policy is the caller's responsibility.
    pub fn hand_of(&self, player: &str) -> Option<Card> {
        self.hands.get(player).copied()
    }

    pub fn is_protected(&self, player: &str) -> bool {
        self.protected.contains(player)
    }

    pub fn is_eliminated(&self, player: &str) -> bool {
        self.eliminated.contains(player)
    }

    /// Winners in turn order; empty while unfinished (or when nobody
    /// survived the final move).
    pub fn winners(&self) -> Vec<&str> {
        self.outcome
            .as_ref()
            .map(|o| o.winners.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn winning_card(&self) -> Option<Card> {
        self.outcome.as_ref().map(|o| o.winning_card)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }
}
