//! Move resolution: validate a submitted move, then apply its effect.
//!
//! Resolution is split into a pure validation pass and an infallible
//! application pass. Side entries (discards, reveals, replacement pickups)
//! are buffered during application and committed to the log after the play
//! entry itself, so a rejected move cannot leave partial state behind and
//! the log order is stable.

use tracing::debug;

use crate::domain::cards::Card;
use crate::domain::log::LogEntry;
use crate::domain::moves::Move;
use crate::domain::state::{Game, PlayerId};
use crate::errors::domain::PlayError;

/// Resolve a move for the player on turn.
///
/// On success the move and its side entries are logged, the turn rotates
/// (or the game finishes and winners are computed), and the next player's
/// draw is performed. On failure the game is left byte-for-byte unchanged
/// and the same player may retry with a corrected move.
pub fn play_move(game: &mut Game, mv: &Move) -> Result<(), PlayError> {
    let Some(on_turn) = game.on_turn.clone() else {
        return Err(PlayError::GameFinished);
    };
    if mv.player != on_turn.player {
        return Err(PlayError::NotYourTurn);
    }
    if mv.card != on_turn.held && mv.card != on_turn.drawn {
        return Err(PlayError::IllegalCard);
    }
    let kept = if mv.card == on_turn.held {
        on_turn.drawn
    } else {
        on_turn.held
    };

    validate(game, mv, kept)?;
    apply(game, mv, on_turn.player, kept);
    Ok(())
}

/// Rank-specific nomination rules. Pure: no mutation on any path.
fn validate(game: &Game, mv: &Move, kept: Card) -> Result<(), PlayError> {
    let all_protected = game.open_opponents().is_empty();
    let target = mv.nominated_player.as_deref();
    match mv.card {
        Card::Guard => match target {
            None => {
                // A bare discard is legal only when every opponent is
                // protected, and carries no nominations at all: a guess
                // with no target is half a nomination.
                if !all_protected || mv.nominated_card.is_some() {
                    return Err(PlayError::MissingNomination);
                }
                Ok(())
            }
            Some(t) => {
                check_opponent(game, t)?;
                match mv.nominated_card {
                    None => Err(PlayError::MissingNomination),
                    // You cannot guard a guard.
                    Some(Card::Guard) => Err(PlayError::InvalidTarget),
                    Some(_) => Ok(()),
                }
            }
        },
        Card::Priest | Card::Baron => match target {
            None if all_protected => Ok(()),
            None => Err(PlayError::MissingNomination),
            Some(t) => check_opponent(game, t),
        },
        Card::Handmaid | Card::Countess | Card::Princess => Ok(()),
        Card::Prince => {
            if kept == Card::Countess {
                return Err(PlayError::CountessForced);
            }
            // No bare-discard fallback: the prince always takes a target,
            // and that target may be yourself.
            let target = match target {
                None => return Err(PlayError::MissingNomination),
                Some(t) if t == mv.player => t,
                Some(t) => {
                    check_opponent(game, t)?;
                    t
                }
            };
            let discarded = if target == mv.player {
                kept
            } else {
                game.hands[target]
            };
            // A non-princess discard must be replaced, and there may be
            // nothing left to replace it with.
            if discarded != Card::Princess
                && game.deck.is_empty()
                && game.hidden_discard.is_none()
            {
                return Err(PlayError::PackExhausted);
            }
            Ok(())
        }
        Card::King => {
            if kept == Card::Countess {
                return Err(PlayError::CountessForced);
            }
            match target {
                None if all_protected => Ok(()),
                None => Err(PlayError::MissingNomination),
                Some(t) => check_opponent(game, t),
            }
        }
    }
}

fn check_opponent(game: &Game, target: &str) -> Result<(), PlayError> {
    if !game.players.iter().any(|p| p == target) {
        return Err(PlayError::InvalidTarget);
    }
    if game.protected.contains(target) {
        return Err(PlayError::InvalidTarget);
    }
    Ok(())
}

/// Resolve a validated move. Infallible: every error path was rejected in
/// [`validate`], so mutation here commits fully.
fn apply(game: &mut Game, mv: &Move, player: PlayerId, mut kept: Card) {
    let mut side: Vec<LogEntry> = Vec::new();
    let mut actor_out = false;

    match mv.card {
        Card::Guard => {
            if let (Some(target), Some(guess)) = (mv.nominated_player.as_deref(), mv.nominated_card)
            {
                let target_card = game.hands[target];
                if guess == target_card {
                    side.push(LogEntry::Discard {
                        player: target.to_string(),
                        card: target_card,
                    });
                    game.eliminate(target);
                }
            }
        }
        Card::Priest => {
            if let Some(target) = mv.nominated_player.as_deref() {
                side.push(LogEntry::Reveal {
                    shower: target.to_string(),
                    seer: player.clone(),
                    card: game.hands[target],
                });
            }
        }
        Card::Baron => {
            if let Some(target) = mv.nominated_player.as_deref() {
                let target_card = game.hands[target];
                if kept > target_card {
                    side.push(LogEntry::Discard {
                        player: target.to_string(),
                        card: target_card,
                    });
                    game.eliminate(target);
                } else if target_card > kept {
                    // The play is still logged, but the actor is out and
                    // will not be re-queued.
                    side.push(LogEntry::Discard {
                        player: player.clone(),
                        card: kept,
                    });
                    actor_out = true;
                }
                // Equal ranks: no effect.
            }
        }
        Card::Handmaid => {
            game.protected.insert(player.clone());
        }
        Card::Prince => {
            if let Some(target) = mv.nominated_player.as_deref() {
                if target == player {
                    side.push(LogEntry::Discard {
                        player: player.clone(),
                        card: kept,
                    });
                    if kept == Card::Princess {
                        actor_out = true;
                    } else {
                        let card = replacement(game);
                        side.push(LogEntry::Pickup {
                            player: player.clone(),
                            card,
                        });
                        kept = card;
                    }
                } else {
                    let discarded = game.hands[target];
                    side.push(LogEntry::Discard {
                        player: target.to_string(),
                        card: discarded,
                    });
                    if discarded == Card::Princess {
                        game.eliminate(target);
                    } else {
                        let card = replacement(game);
                        side.push(LogEntry::Pickup {
                            player: target.to_string(),
                            card,
                        });
                        game.hands.insert(target.to_string(), card);
                    }
                }
            }
        }
        Card::King => {
            if let Some(target) = mv.nominated_player.as_deref() {
                let target_card = game.hands[target];
                game.hands.insert(target.to_string(), kept);
                kept = target_card;
            }
        }
        Card::Countess => {
            // A free discard; its rule lives in the prince/king validation.
        }
        Card::Princess => {
            actor_out = true;
        }
    }

    debug!(player = %player, card = ?mv.card, actor_out, "move resolved");
    game.log.push(LogEntry::Play(mv.clone()));
    game.log.append(&mut side);

    if actor_out {
        game.hands.remove(&player);
        game.eliminated.insert(player.clone());
    } else {
        game.hands.insert(player.clone(), kept);
        game.players.push(player);
    }
    game.on_turn = None;

    if game.is_finished() {
        game.finish();
    } else {
        // An unfinished game has a non-empty deck and at least two live
        // players, so this draw cannot fail.
        let drawn = game.draw();
        debug_assert!(drawn.is_ok());
    }
}

/// Replacement card for a prince discard: the deck front, or, at deck
/// exhaustion, the hidden discard. Validation rejects the play when neither
/// remains, so a card is always available here.
fn replacement(game: &mut Game) -> Card {
    match game.deck.pop_front() {
        Some(card) => card,
        None => game
            .hidden_discard
            .take()
            .expect("replacement availability was validated"),
    }
}
