//! Log output tests: warnings mark caller mistakes, not expected input.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use freecell_engine::cards::{Card, Deck, Suit, DECK_SIZE};
use freecell_engine::core::TableConfig;
use freecell_engine::game::FreecellGame;
use freecell_engine::zones::ZoneId;

struct Recorder {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install() {
    INIT.call_once(|| {
        log::set_logger(&RECORDER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Records at `level` whose message contains `needle`.
///
/// Tests share one logger and run concurrently, so each test looks for
/// messages only it can produce.
fn count(level: Level, needle: &str) -> usize {
    RECORDER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, message)| *l == level && message.contains(needle))
        .count()
}

#[test]
fn test_art_pack_junk_is_not_a_warning() {
    install();
    let mut codes: Vec<String> = Deck::standard().cards().iter().map(|c| c.code()).collect();
    codes.push("H15".to_string());
    codes.push("JOKER".to_string());

    let deck = Deck::from_codes(&codes);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(count(Level::Warn, "rank 15"), 0);
    assert_eq!(count(Level::Debug, "H15"), 1);
}

#[test]
fn test_bad_rank_from_caller_warns() {
    install();
    assert!(Card::try_new(17, Suit::Clubs).is_err());
    assert_eq!(count(Level::Warn, "rank 17"), 1);
}

#[test]
fn test_blank_deck_warns_once_per_session() {
    install();
    let mut game = FreecellGame::new(TableConfig::new().with_deck("").with_seed(3)).unwrap();
    game.restart().unwrap();

    for zone in (0..8u8).map(ZoneId::Tableau) {
        for &card in game.snapshot().pile(zone).unwrap() {
            assert!(game.config().card_asset_path(card).starts_with("Decks/Standard/"));
        }
    }

    assert_eq!(game.config().deck_name, "Standard");
    assert_eq!(count(Level::Warn, "no deck selected"), 1);
}
