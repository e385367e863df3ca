//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns the 16 container sequences and a back-reference
//! map from each card to the zone holding it. Both are updated together on
//! every placement and move, so "where is card X" is a hash lookup rather
//! than a scan of every container.
//!
//! Sequences are bottom-to-top: index 0 is the bottom card, the last
//! element is the top (the only accessible card).
//!
//! The manager enforces ownership (a card is in exactly one zone) but not
//! game rules; callers check legality before moving.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};

use super::zone::{ZoneId, FOUNDATION_COUNT, FREECELL_COUNT, TABLEAU_COUNT};
use crate::cards::{Card, Suit};
use crate::core::EngineError;

/// Container contents plus card locations.
///
/// Piles are `im::Vector`s so cloning the manager (for snapshots) is O(1).
///
/// ```
/// use freecell_engine::cards::{Card, Rank, Suit};
/// use freecell_engine::zones::{ZoneId, ZoneManager};
///
/// let mut zones = ZoneManager::new();
/// let king = Card::new(Rank::KING, Suit::Spades);
///
/// zones.place(king, ZoneId::Tableau(0)).unwrap();
/// assert_eq!(zones.get_zone(king), Some(ZoneId::Tableau(0)));
///
/// zones.move_card(king, ZoneId::Freecell(2));
/// assert_eq!(zones.top_card(ZoneId::Freecell(2)), Some(king));
/// assert_eq!(zones.zone_size(ZoneId::Tableau(0)), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    freecells: [Vector<Card>; FREECELL_COUNT],
    foundations: [Vector<Card>; FOUNDATION_COUNT],
    tableaus: [Vector<Card>; TABLEAU_COUNT],

    /// Card locations: card -> zone
    locations: FxHashMap<Card, ZoneId>,
}

impl ZoneManager {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a zone, bottom to top. `None` if the zone doesn't exist.
    #[must_use]
    pub fn pile(&self, zone: ZoneId) -> Option<&Vector<Card>> {
        match zone {
            ZoneId::Freecell(i) => self.freecells.get(i as usize),
            ZoneId::Foundation(suit) => self.foundations.get(suit.index()),
            ZoneId::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    fn pile_mut(&mut self, zone: ZoneId) -> Option<&mut Vector<Card>> {
        match zone {
            ZoneId::Freecell(i) => self.freecells.get_mut(i as usize),
            ZoneId::Foundation(suit) => self.foundations.get_mut(suit.index()),
            ZoneId::Tableau(i) => self.tableaus.get_mut(i as usize),
        }
    }

    /// Put a card that is not yet on the table on top of a zone.
    ///
    /// Fails if the card is already placed or the zone doesn't exist.
    pub fn place(&mut self, card: Card, zone: ZoneId) -> Result<(), EngineError> {
        if self.locations.contains_key(&card) {
            return Err(EngineError::DuplicateCard(card));
        }
        let pile = self.pile_mut(zone).ok_or(EngineError::UnknownZone(zone))?;
        pile.push_back(card);
        self.locations.insert(card, zone);
        Ok(())
    }

    /// Move a card onto the top of `dest`.
    ///
    /// Returns the source zone and the card's index in `dest`, or `None`
    /// if the card isn't on the table or `dest` doesn't exist.
    pub fn move_card(&mut self, card: Card, dest: ZoneId) -> Option<(ZoneId, usize)> {
        let from = self.locations.get(&card).copied()?;
        if !dest.is_valid() {
            return None;
        }

        let source = self.pile_mut(from)?;
        let position = source.index_of(&card)?;
        source.remove(position);

        let target = self.pile_mut(dest)?;
        target.push_back(card);
        let index = target.len() - 1;

        self.locations.insert(card, dest);
        Some((from, index))
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: Card) -> Option<ZoneId> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is on the table.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.locations.contains_key(&card)
    }

    /// Get the top card of a zone (last in the sequence).
    #[must_use]
    pub fn top_card(&self, zone: ZoneId) -> Option<Card> {
        self.pile(zone)?.last().copied()
    }

    /// Whether nothing is stacked above this card.
    #[must_use]
    pub fn is_on_top(&self, card: Card) -> bool {
        self.get_zone(card)
            .and_then(|zone| self.top_card(zone))
            .is_some_and(|top| top == card)
    }

    /// Number of cards in a zone (0 for zones that don't exist).
    #[must_use]
    pub fn zone_size(&self, zone: ZoneId) -> usize {
        self.pile(zone).map_or(0, Vector::len)
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn freecells(&self) -> &[Vector<Card>; FREECELL_COUNT] {
        &self.freecells
    }

    #[must_use]
    pub fn foundations(&self) -> &[Vector<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    #[must_use]
    pub fn tableaus(&self) -> &[Vector<Card>; TABLEAU_COUNT] {
        &self.tableaus
    }

    /// First broken structural invariant, if any.
    ///
    /// Checks that piles and the location map agree card-for-card, that no
    /// card appears twice, that freecells hold at most one card and that
    /// every foundation is an Ace-up run of its own suit.
    #[must_use]
    pub fn invariant_violation(&self) -> Option<String> {
        let mut seen = FxHashSet::default();

        for zone in ZoneId::all() {
            let Some(pile) = self.pile(zone) else {
                continue;
            };
            for &card in pile {
                if !seen.insert(card) {
                    return Some(format!("{} appears more than once", card));
                }
                if self.locations.get(&card) != Some(&zone) {
                    return Some(format!("{} is in {} but indexed elsewhere", card, zone));
                }
            }
            if let Some(capacity) = zone.capacity() {
                if pile.len() > capacity {
                    return Some(format!("{} holds {} cards", zone, pile.len()));
                }
            }
        }

        if seen.len() != self.locations.len() {
            return Some(format!(
                "{} cards indexed but {} on the table",
                self.locations.len(),
                seen.len()
            ));
        }

        for suit in Suit::ALL {
            let pile = &self.foundations[suit.index()];
            for (i, card) in pile.iter().enumerate() {
                if card.suit() != suit || usize::from(card.rank().value()) != i + 1 {
                    return Some(format!("{} out of sequence on {}", card, ZoneId::Foundation(suit)));
                }
            }
        }

        None
    }
}
