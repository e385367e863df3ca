//! The solitaire engine and the session around it.
//!
//! ## Key Types
//!
//! - `SolitaireEngine`: Table, selection state machine, win detection
//! - `Target` / `MoveOutcome`: One click in, one judgment out
//! - `Snapshot`: Read-only view for rendering
//! - `FreecellGame`: Engine + deck source + table settings

pub mod engine;
pub mod outcome;
pub mod session;
pub mod snapshot;

pub use engine::{SolitaireEngine, DEAL_LAYOUT};
pub use outcome::{MoveOutcome, MoveRecord, Target};
pub use session::{DeckSource, FreecellGame, ShuffledDecks};
pub use snapshot::Snapshot;
