// Proptest generators and playout helpers shared by the property tests.

use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::Card;
use crate::domain::legal::legal_moves;
use crate::domain::moves::Move;
use crate::domain::state::Game;

pub const SEATS4: [&str; 4] = ["a", "b", "c", "d"];

/// Generate a random rank.
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        Just(Card::Guard),
        Just(Card::Priest),
        Just(Card::Baron),
        Just(Card::Handmaid),
        Just(Card::Prince),
        Just(Card::King),
        Just(Card::Countess),
        Just(Card::Princess),
    ]
}

/// A seat name, or a name nobody sits at.
pub fn seat_or_outsider() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("a"), Just("b"), Just("c"), Just("d"), Just("z")]
}

/// An arbitrary, mostly-illegal move shape.
pub fn arbitrary_move() -> impl Strategy<Value = Move> {
    (
        seat_or_outsider(),
        card(),
        proptest::option::of(seat_or_outsider()),
        proptest::option::of(card()),
    )
        .prop_map(|(player, card, nominated_player, nominated_card)| Move {
            player: player.to_string(),
            card,
            nominated_player: nominated_player.map(str::to_string),
            nominated_card,
        })
}

/// Fresh four-seat game dealt from a seeded RNG.
pub fn seeded_game(seed: u64) -> Game {
    Game::with_rng(SEATS4, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// A uniformly random legal move, or `None` once the game is finished.
pub fn random_legal_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Move> {
    let (first, second) = legal_moves(game)?;
    let mut all = first.moves;
    all.extend(second.moves);
    all.choose(rng).cloned()
}
