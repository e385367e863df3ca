//! Deck generation.
//!
//! The engine never builds its own cards; a deck collaborator hands it a
//! shuffled sequence. `Deck` is that collaborator. It can produce the
//! standard 52 cards directly, or derive them from the face images of an
//! art pack (`C01`..`S13`, plus jokers that are ignored).

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of cards awaiting the deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52 standard cards, suit-major, Ace first within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A standard deck in random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Build a deck from art-pack asset names.
    ///
    /// Jokers and names that are not card codes are skipped. A result that
    /// is not exactly 52 cards is returned as-is (and logged); `deal` is
    /// what rejects it.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for code in codes {
            let code = code.as_ref();
            if code.to_ascii_uppercase().contains("JOKER") {
                continue;
            }
            match Card::from_code(code) {
                Ok(card) => cards.push(card),
                Err(_) => log::debug!("skipping non-card asset {:?}", code),
            }
        }

        if cards.len() != DECK_SIZE {
            log::warn!("art pack produced {} cards instead of {}", cards.len(), DECK_SIZE);
        }

        Self { cards }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Hand the sequence over to the deal.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
