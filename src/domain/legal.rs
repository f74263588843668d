//! Legal-move enumeration for the player on turn.
//!
//! This is a pure function of the game state and must stay in lock-step
//! with the validation in `play`: every move enumerated here is accepted
//! there, and every accepted move shape is enumerated here.

use crate::domain::cards::Card;
use crate::domain::moves::{Move, PossibleMoves};
use crate::domain::state::Game;

/// Every move playable with either held card, as two independent per-card
/// sets (two sets even when the held cards are the same rank). `None` when
/// no move decision is pending.
pub fn legal_moves(game: &Game) -> Option<(PossibleMoves, PossibleMoves)> {
    let on_turn = game.on_turn()?;
    let first = PossibleMoves {
        card: on_turn.held,
        moves: moves_for_card(game, &on_turn.player, on_turn.held, on_turn.drawn),
    };
    let second = PossibleMoves {
        card: on_turn.drawn,
        moves: moves_for_card(game, &on_turn.player, on_turn.drawn, on_turn.held),
    };
    Some((first, second))
}

/// Moves for one of the two held cards; `other` is the card that would be
/// kept, consulted for the countess rule and the prince's self-target
/// discard.
fn moves_for_card(game: &Game, player: &str, card: Card, other: Card) -> Vec<Move> {
    // Keeping the countess forbids playing a prince or king outright. The
    // countess discard itself is enumerated by the other card's set.
    if matches!(card, Card::Prince | Card::King) && other == Card::Countess {
        return Vec::new();
    }
    let open = game.open_opponents();
    match card {
        Card::Guard => {
            if open.is_empty() {
                return vec![Move::bare(player, card)];
            }
            // Any unprotected opponent crossed with any guessable rank.
            // Nothing stops a guess that is already face-up on the table.
            let mut moves = Vec::new();
            for target in &open {
                for guess in Card::ALL {
                    if guess != Card::Guard {
                        moves.push(Move::guessing(player, card, *target, guess));
                    }
                }
            }
            moves
        }
        Card::Priest | Card::Baron | Card::King => {
            if open.is_empty() {
                // All opponents protected: the card becomes a bare discard.
                return vec![Move::bare(player, card)];
            }
            open.iter()
                .map(|target| Move::nominating(player, card, *target))
                .collect()
        }
        Card::Prince => {
            // Always a target, and yourself is always among them, but a
            // non-princess discard needs a replacement card to remain.
            let replaceable = !game.deck.is_empty() || game.hidden_discard.is_some();
            std::iter::once((player, other))
                .chain(open.iter().map(|t| (*t, game.hands[*t])))
                .filter(|&(_, discarded)| replaceable || discarded == Card::Princess)
                .map(|(target, _)| Move::nominating(player, card, target))
                .collect()
        }
        Card::Handmaid | Card::Countess | Card::Princess => vec![Move::bare(player, card)],
    }
}
