//! Pack shuffling and fresh-game construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::cards::{Card, PACK};
use crate::domain::state::{Game, SEATS};

/// The full pack in a fresh random order.
pub fn shuffled_pack<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = PACK.to_vec();
    deck.shuffle(rng);
    deck
}

impl Game {
    /// Fresh game: shuffled pack, one card set aside unseen, one card dealt
    /// to each seat, and the first draw performed.
    pub fn new(seats: [&str; SEATS]) -> Self {
        Self::with_rng(seats, &mut rand::rng())
    }

    /// Fresh game dealt from the given RNG, for deterministic setups.
    pub fn with_rng<R: Rng + ?Sized>(seats: [&str; SEATS], rng: &mut R) -> Self {
        let mut deck = shuffled_pack(rng);
        let hidden = deck.remove(0);
        Self::start(seats, deck, Some(hidden))
    }

    /// Game dealt from a known deck with an optional known hidden discard,
    /// for scripted setups and tests.
    ///
    /// With no hidden discard the pack can run dry: a prince play needing a
    /// replacement card once both draw sources are exhausted is rejected
    /// with `PlayError::PackExhausted`.
    ///
    /// # Panics
    ///
    /// Panics if `deck` holds fewer cards than there are seats.
    pub fn with_deck(seats: [&str; SEATS], deck: Vec<Card>, hidden_discard: Option<Card>) -> Self {
        Self::start(seats, deck, hidden_discard)
    }
}
