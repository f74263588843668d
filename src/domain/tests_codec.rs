use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::Card;
use crate::domain::log::LogEntry;
use crate::domain::play::play_move;
use crate::domain::state::Game;
use crate::domain::test_gens;
use crate::errors::domain::{LogParseError, PlayError};

const SEATS4: [&str; 4] = ["a", "b", "c", "d"];

fn play(game: &mut Game, token: &str) {
    match LogEntry::parse(token) {
        Ok(LogEntry::Play(mv)) => play_move(game, &mv).expect("scripted move must be legal"),
        other => panic!("not a play token {token:?}: {other:?}"),
    }
}

fn assert_replay_matches(game: &Game) {
    let reloaded = Game::load(SEATS4, &game.serialize()).expect("own log must replay");
    assert_eq!(reloaded.live_players(), game.live_players());
    assert_eq!(reloaded.winners(), game.winners());
    assert_eq!(reloaded.winning_card(), game.winning_card());
    assert_eq!(reloaded.is_finished(), game.is_finished());
    assert_eq!(reloaded.on_turn(), game.on_turn());
    for player in game.live_players() {
        assert_eq!(reloaded.hand_of(player), game.hand_of(player));
    }
    for player in SEATS4 {
        assert_eq!(reloaded.is_protected(player), game.is_protected(player));
    }
    assert_eq!(reloaded.serialize(), game.serialize());
}

#[test]
fn round_trip_of_a_finished_game() {
    let deck = vec![
        Card::Guard,
        Card::Priest,
        Card::Guard,
        Card::Priest,
        Card::Guard,
        Card::Baron,
        Card::Baron,
    ];
    let mut game = Game::with_deck(SEATS4, deck, None);
    play(&mut game, "a,1,b,2");
    play(&mut game, "c,1,d,2");
    play(&mut game, "a,1,c,3");
    assert!(game.is_finished());
    assert_replay_matches(&game);
}

#[test]
fn round_trip_of_a_game_in_progress() {
    let deck = vec![
        Card::Handmaid,
        Card::Baron,
        Card::Guard,
        Card::Countess,
        Card::Prince,
        Card::Prince,
        Card::Guard,
        Card::Guard,
        Card::Handmaid,
        Card::King,
    ];
    let mut game = Game::with_deck(SEATS4, deck, None);
    play(&mut game, "a,4,,");
    play(&mut game, "b,3,c,");
    assert!(!game.is_finished());
    assert_replay_matches(&game);
}

#[test]
fn round_trip_of_a_random_full_pack_game() {
    // A full playout from a seeded deal, so deck-exhaustion endings and the
    // hidden-discard fallback are exercised against a complete pack.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut game = test_gens::seeded_game(7);
    while let Some(mv) = test_gens::random_legal_move(&game, &mut rng) {
        play_move(&mut game, &mv).unwrap();
    }
    assert!(game.is_finished());
    assert_replay_matches(&game);
}

#[test]
fn reveal_entries_are_masked_for_bystanders() {
    let deck = vec![
        Card::Priest,
        Card::Baron,
        Card::Guard,
        Card::Guard,
        Card::Guard,
    ];
    let mut game = Game::with_deck(SEATS4, deck, None);
    play(&mut game, "a,2,b,");
    assert_eq!(game.serialize(), "a:2\nb:3\nc:1\nd:1\na:1\na,2,b,\nb;a;3");

    // Both parties to the reveal see the card; nobody else does.
    assert_eq!(
        game.serialize_for("a"),
        "a:2\nb:?\nc:?\nd:?\na:1\na,2,b,\nb;a;3"
    );
    assert_eq!(
        game.serialize_for("b"),
        "a:?\nb:3\nc:?\nd:?\na:?\na,2,b,\nb;a;3"
    );
    assert_eq!(
        game.serialize_for("c"),
        "a:?\nb:?\nc:1\nd:?\na:?\na,2,b,\nb;a;?"
    );
    assert_eq!(
        game.serialize_for("d"),
        "a:?\nb:?\nc:?\nd:1\na:?\na,2,b,\nb;a;?"
    );
}

#[test]
fn load_rejects_broken_logs() {
    assert_eq!(
        Game::load(SEATS4, "").unwrap_err(),
        LogParseError::TruncatedDeal
    );
    assert_eq!(
        Game::load(SEATS4, "a:1\nb:2\nc:3").unwrap_err(),
        LogParseError::TruncatedDeal
    );
    // A play token where a deal entry belongs.
    assert_eq!(
        Game::load(SEATS4, "a,1,b,2\nb:1\nc:1\nd:1").unwrap_err(),
        LogParseError::TruncatedDeal
    );
    assert_eq!(
        Game::load(SEATS4, "a:1\nb:1\nd:1\nc:1").unwrap_err(),
        LogParseError::SeatMismatch
    );
    assert_eq!(
        Game::load(SEATS4, "a:1\nb:1\nc:1\nd:1\ngarbage").unwrap_err(),
        LogParseError::Malformed("garbage".into())
    );
    // Obscured logs are not replayable.
    assert_eq!(
        Game::load(SEATS4, "a:?\nb:1\nc:1\nd:1").unwrap_err(),
        LogParseError::UnknownCard("?".into())
    );
    // Six guards cannot come from the fixed pack.
    assert_eq!(
        Game::load(SEATS4, "a:1\nb:1\nc:1\nd:1\na:1\na:1").unwrap_err(),
        LogParseError::CardCountMismatch
    );
}

#[test]
fn load_rejects_a_log_that_overdraws_the_pack() {
    // Every pack card appears as a pickup, so nothing is left to set aside
    // as the hidden discard; the final prince then has no replacement card
    // to hand out. The log parses and replays legally up to that point, and
    // load must reject it rather than fall over.
    let log = "a:4\nb:4\nc:2\nd:2\n\
               a:1\na,1,b,8\nb:1\nb,1,a,8\nc:1\nc,1,a,8\nd:1\nd,1,a,8\n\
               a:1\na,1,b,8\nb:3\nb,4,,\nc:3\nc,2,a,\nd:5\nd,2,a,\n\
               a:5\na,4,,\nb:6\nb,6,c,\nc:7\nc,7,,\nd:8\nd,5,c,";
    assert_eq!(
        Game::load(SEATS4, log).unwrap_err(),
        LogParseError::Replay(PlayError::PackExhausted)
    );
}

#[test]
fn load_rejects_an_illegal_recorded_move() {
    assert_eq!(
        Game::load(SEATS4, "a:1\nb:1\nc:1\nd:1\na:2\nb,4,,").unwrap_err(),
        LogParseError::Replay(PlayError::NotYourTurn)
    );
}
