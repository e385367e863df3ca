//! Caller contract violations.
//!
//! Player mistakes (illegal moves, clicks on blocked cards) are never
//! errors; they come back as `MoveOutcome::Rejected`. `EngineError` is
//! reserved for bugs in the code driving the engine: malformed cards,
//! malformed decks, unknown card codes.

use std::fmt;

use crate::cards::Card;
use crate::zones::ZoneId;

/// Error returned when a collaborator breaks the engine's contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Rank outside `1..=13`.
    InvalidRank(u8),

    /// Text that is not a card code like `H01` or `S13`.
    InvalidCardCode(String),

    /// `deal` received the wrong number of cards.
    DeckSize { expected: usize, actual: usize },

    /// `deal` received the same card twice.
    DuplicateCard(Card),

    /// A zone address outside the 4 freecells / 4 foundations / 8 tableaus.
    UnknownZone(ZoneId),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidRank(rank) => {
                write!(f, "invalid rank {} (expected 1..=13)", rank)
            }
            EngineError::InvalidCardCode(code) => write!(f, "invalid card code {:?}", code),
            EngineError::DeckSize { expected, actual } => {
                write!(f, "deck has {} cards, expected {}", actual, expected)
            }
            EngineError::DuplicateCard(card) => write!(f, "duplicate card {} in deck", card),
            EngineError::UnknownZone(zone) => write!(f, "no such zone {}", zone),
        }
    }
}

impl std::error::Error for EngineError {}
