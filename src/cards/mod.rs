//! Card model and deck generation.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (rank, suit) identity
//! - `Rank`: Validated 1..=13 rank
//! - `Suit` / `Color`: Suit enumeration and derived color
//! - `Deck`: The deck collaborator that feeds the deal

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
