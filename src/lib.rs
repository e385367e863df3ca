//! # freecell-engine
//!
//! A FreeCell solitaire rules engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: No rendering, audio, timing or input capture. A
//!    presentation layer resolves a click to a card or slot and asks the
//!    engine; the engine answers with a `MoveOutcome`.
//!
//! 2. **Outcomes, Not Callbacks**: Every state transition is reported as a
//!    return value, so the engine is testable without wiring listeners.
//!
//! 3. **Indexed Locations**: Each card's container is a hash lookup, kept
//!    in step with the piles on every move.
//!
//! ## Architecture
//!
//! - **Single mutator**: Every mutation takes `&mut self`. Share an engine
//!   across threads only behind a lock so one click is handled at a time.
//!
//! - **Persistent Data Structures**: Piles are `im` vectors, so snapshots
//!   for rendering are O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, table configuration, errors
//! - `cards`: Card model and deck generation
//! - `zones`: Container addresses and card locations
//! - `rules`: Move legality
//! - `game`: Engine, outcomes, snapshots, sessions

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, TableConfig};

pub use crate::cards::{Card, Color, Deck, Rank, Suit, DECK_SIZE};

pub use crate::zones::{ZoneId, ZoneKind, ZoneManager};

pub use crate::game::{
    DeckSource, FreecellGame, MoveOutcome, MoveRecord, ShuffledDecks, Snapshot, SolitaireEngine,
    Target,
};
