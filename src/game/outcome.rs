//! Click targets and the engine's judgment of them.
//!
//! The presentation layer resolves a pointer event to a `Target` and
//! feeds it to `SolitaireEngine::select_or_act`. The returned
//! `MoveOutcome` carries everything needed to animate the result; the
//! engine never calls back into the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::zones::ZoneId;

/// What the player clicked: a card, or an empty/slot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Card(Card),
    Slot(ZoneId),
}

/// A completed relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub card: Card,
    pub from: ZoneId,
    pub to: ZoneId,
    /// Position of the card in `to`, bottom = 0.
    pub index: usize,
}

/// Result of one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The card is now selected.
    Selected { card: Card },

    /// The selected card was clicked again and is no longer selected.
    Deselected { card: Card },

    /// The selected card moved; selection cleared.
    Moved(MoveRecord),

    /// The selected card moved and completed the last foundation.
    WonAfterMove(MoveRecord),

    /// Nothing moved. `card` is the selection that was dropped, or `None`
    /// when the click was a no-op (nothing selected, blocked card, game over).
    Rejected { card: Option<Card> },
}

impl MoveOutcome {
    /// Rejection of a selected card.
    #[must_use]
    pub const fn rejected(card: Card) -> Self {
        MoveOutcome::Rejected { card: Some(card) }
    }

    /// A click that changed nothing.
    #[must_use]
    pub const fn noop() -> Self {
        MoveOutcome::Rejected { card: None }
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, MoveOutcome::Rejected { card: None })
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected { .. })
    }

    /// The relocation, if a card moved.
    #[must_use]
    pub fn moved(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Moved(record) | MoveOutcome::WonAfterMove(record) => Some(record),
            _ => None,
        }
    }

    /// The card this outcome is about, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match *self {
            MoveOutcome::Selected { card } | MoveOutcome::Deselected { card } => Some(card),
            MoveOutcome::Moved(record) | MoveOutcome::WonAfterMove(record) => Some(record.card),
            MoveOutcome::Rejected { card } => card,
        }
    }
}
