//! Core engine types: RNG, configuration, errors.
//!
//! These are the pieces every other module leans on. None of them know
//! FreeCell rules.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{TableConfig, DEFAULT_BACKGROUND_NAME, DEFAULT_DECK_NAME};
pub use error::EngineError;
pub use rng::GameRng;
