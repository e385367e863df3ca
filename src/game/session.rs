//! A playable session: engine plus deck source plus table settings.
//!
//! The engine only judges clicks. `FreecellGame` adds what a table needs
//! around it: where the next deck comes from, which seed produced it, and
//! how many deals have happened.

use super::engine::SolitaireEngine;
use super::outcome::{MoveOutcome, Target};
use super::snapshot::Snapshot;
use crate::cards::{Card, Deck};
use crate::core::{EngineError, GameRng, TableConfig};
use crate::zones::ZoneId;

/// Supplies decks to deal.
///
/// Implementations must return 52 distinct cards for the deal to succeed.
pub trait DeckSource {
    /// Produce the next deck to deal.
    fn next_deck(&mut self) -> Deck;

    /// Seed behind the decks, if they are reproducible.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Seeded shuffles of the standard deck.
///
/// Deal n of a given seed is always the same permutation.
#[derive(Clone, Debug)]
pub struct ShuffledDecks {
    rng: GameRng,
    seed: u64,
}

impl ShuffledDecks {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("deal"),
            seed,
        }
    }
}

impl DeckSource for ShuffledDecks {
    fn next_deck(&mut self) -> Deck {
        let mut stream = self.rng.fork();
        Deck::shuffled(&mut stream)
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

/// A game session.
///
/// ```
/// use freecell_engine::core::TableConfig;
/// use freecell_engine::game::FreecellGame;
///
/// let mut game = FreecellGame::new(TableConfig::new().with_seed(7)).unwrap();
/// assert_eq!(game.deal_number(), 1);
/// assert_eq!(game.snapshot().card_count(), 52);
///
/// game.restart().unwrap();
/// assert_eq!(game.deal_number(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FreecellGame<S = ShuffledDecks> {
    config: TableConfig,
    source: S,
    engine: SolitaireEngine,
    deal_number: u32,
}

impl FreecellGame<ShuffledDecks> {
    /// Start a session with seeded shuffles.
    ///
    /// Uses `config.seed`, or a random seed when none is set.
    pub fn new(config: TableConfig) -> Result<Self, EngineError> {
        let seed = config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        Self::with_source(config, ShuffledDecks::new(seed))
    }
}

impl<S: DeckSource> FreecellGame<S> {
    /// Start a session with a custom deck source and deal the first game.
    ///
    /// A blank deck name in `config` is replaced by the standard deck.
    pub fn with_source(config: TableConfig, source: S) -> Result<Self, EngineError> {
        let mut game = Self {
            config: config.normalized(),
            source,
            engine: SolitaireEngine::new(),
            deal_number: 0,
        };
        game.deal_next()?;
        Ok(game)
    }

    /// Throw the current game away and deal the next deck.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.deal_next()
    }

    fn deal_next(&mut self) -> Result<(), EngineError> {
        let deck = self.source.next_deck();
        self.engine.restart(deck.into_cards())?;
        self.deal_number += 1;
        log::info!(
            "deal {} (seed {:?}, deck {})",
            self.deal_number,
            self.source.seed(),
            self.config.deck_name()
        );
        Ok(())
    }

    pub fn select_or_act(&mut self, target: Target) -> MoveOutcome {
        self.engine.select_or_act(target)
    }

    pub fn click_card(&mut self, card: Card) -> MoveOutcome {
        self.engine.click_card(card)
    }

    pub fn click_slot(&mut self, zone: ZoneId) -> MoveOutcome {
        self.engine.click_slot(zone)
    }

    /// Debug "simulate win".
    pub fn force_win(&mut self) {
        self.engine.force_win();
    }

    #[must_use]
    pub fn engine(&self) -> &SolitaireEngine {
        &self.engine
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }

    /// Deals so far, including the current one.
    #[must_use]
    pub fn deal_number(&self) -> u32 {
        self.deal_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShortDecks;

    impl DeckSource for ShortDecks {
        fn next_deck(&mut self) -> Deck {
            Deck::from_codes(["C01", "C02"])
        }
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = FreecellGame::new(TableConfig::new().with_seed(11)).unwrap();
        let b = FreecellGame::new(TableConfig::new().with_seed(11)).unwrap();

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.seed(), Some(11));
    }

    #[test]
    fn test_restart_deals_a_new_layout() {
        let mut game = FreecellGame::new(TableConfig::new().with_seed(11)).unwrap();
        let first = game.snapshot();

        game.restart().unwrap();

        assert_ne!(game.snapshot(), first);
        assert_eq!(game.deal_number(), 2);
        assert!(game.engine().check_invariants().is_ok());
    }

    #[test]
    fn test_random_seed_is_reported() {
        let game = FreecellGame::new(TableConfig::new()).unwrap();
        assert!(game.seed().is_some());
    }

    #[test]
    fn test_bad_source_fails() {
        let result = FreecellGame::with_source(TableConfig::new(), ShortDecks);
        assert_eq!(
            result.err(),
            Some(EngineError::DeckSize { expected: 52, actual: 2 })
        );
    }
}
