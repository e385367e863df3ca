//! Zone addresses.
//!
//! FreeCell has a fixed table: 4 freecells, 4 foundations (one per suit)
//! and 8 tableau columns. A `ZoneId` names one of those 16 containers.
//! Indices are not checked at construction; `is_valid` tells whether an
//! address exists on the table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Number of freecells.
pub const FREECELL_COUNT: usize = 4;

/// Number of foundations (one per suit).
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 8;

/// Container kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Freecell,
    Foundation,
    Tableau,
}

/// Address of one container on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// Freecell slot, `0..4`.
    Freecell(u8),
    /// Foundation pile for a suit.
    Foundation(Suit),
    /// Tableau column, `0..8`.
    Tableau(u8),
}

impl ZoneId {
    #[must_use]
    pub const fn kind(self) -> ZoneKind {
        match self {
            ZoneId::Freecell(_) => ZoneKind::Freecell,
            ZoneId::Foundation(_) => ZoneKind::Foundation,
            ZoneId::Tableau(_) => ZoneKind::Tableau,
        }
    }

    /// Index within its kind (suit index for foundations).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ZoneId::Freecell(i) | ZoneId::Tableau(i) => i as usize,
            ZoneId::Foundation(suit) => suit.index(),
        }
    }

    /// Whether this address exists on the table.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            ZoneId::Freecell(i) => (i as usize) < FREECELL_COUNT,
            ZoneId::Foundation(_) => true,
            ZoneId::Tableau(i) => (i as usize) < TABLEAU_COUNT,
        }
    }

    /// Maximum cards the container can hold. `None` for tableau columns.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            ZoneId::Freecell(_) => Some(1),
            ZoneId::Foundation(_) => Some(13),
            ZoneId::Tableau(_) => None,
        }
    }

    /// All 16 containers: freecells, foundations, then tableaus.
    pub fn all() -> impl Iterator<Item = ZoneId> {
        let freecells = (0..FREECELL_COUNT as u8).map(ZoneId::Freecell);
        let foundations = Suit::ALL.into_iter().map(ZoneId::Foundation);
        let tableaus = (0..TABLEAU_COUNT as u8).map(ZoneId::Tableau);
        freecells.chain(foundations).chain(tableaus)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Freecell(i) => write!(f, "Freecell({})", i),
            ZoneId::Foundation(suit) => write!(f, "Foundation({})", suit),
            ZoneId::Tableau(i) => write!(f, "Tableau({})", i),
        }
    }
}
