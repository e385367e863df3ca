//! Read-only table view for rendering.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::zones::{ZoneId, ZoneManager, FOUNDATION_COUNT, FREECELL_COUNT, TABLEAU_COUNT};

/// Contents of every container plus selection and outcome.
///
/// Taking a snapshot is O(1): piles are persistent vectors shared with the
/// engine until either side changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub freecells: [Vector<Card>; FREECELL_COUNT],
    /// Indexed by `Suit::index`.
    pub foundations: [Vector<Card>; FOUNDATION_COUNT],
    pub tableaus: [Vector<Card>; TABLEAU_COUNT],
    pub selected: Option<Card>,
    pub won: bool,
}

impl Snapshot {
    pub(crate) fn capture(zones: &ZoneManager, selected: Option<Card>, won: bool) -> Self {
        Self {
            freecells: zones.freecells().clone(),
            foundations: zones.foundations().clone(),
            tableaus: zones.tableaus().clone(),
            selected,
            won,
        }
    }

    /// Contents of one zone, bottom to top.
    #[must_use]
    pub fn pile(&self, zone: ZoneId) -> Option<&Vector<Card>> {
        match zone {
            ZoneId::Freecell(i) => self.freecells.get(i as usize),
            ZoneId::Foundation(suit) => self.foundations.get(suit.index()),
            ZoneId::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    /// Cards across all containers.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.freecells
            .iter()
            .chain(&self.foundations)
            .chain(&self.tableaus)
            .map(Vector::len)
            .sum()
    }

    /// Freecell or foundation top, starred when selected.
    fn cell(&self, card: Option<&Card>) -> String {
        match card {
            None => "[   ]".to_string(),
            Some(card) if self.selected == Some(*card) => format!("*{}*", card.code()),
            Some(card) => format!("[{}]", card.code()),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pile in &self.freecells {
            write!(f, "{} ", self.cell(pile.last()))?;
        }
        write!(f, "  ")?;
        for suit in Suit::ALL {
            write!(f, "{} ", self.cell(self.foundations[suit.index()].last()))?;
        }
        writeln!(f)?;

        let depth = self.tableaus.iter().map(Vector::len).max().unwrap_or(0);
        for row in 0..depth {
            for column in &self.tableaus {
                match column.get(row) {
                    Some(card) if self.selected == Some(*card) => write!(f, "*{}* ", card.code())?,
                    Some(card) => write!(f, " {}  ", card.code())?,
                    None => write!(f, "      ")?,
                }
            }
            writeln!(f)?;
        }

        if self.won {
            writeln!(f, "won")?;
        }
        Ok(())
    }
}
