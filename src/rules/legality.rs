//! FreeCell move legality.
//!
//! Pure predicates over container tops. None of them check that the
//! moving card is itself on top of its source; the engine only ever
//! hands them a selected card, and only top cards can be selected.

use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::zones::{ZoneId, ZoneManager, FREECELL_COUNT};

/// Destinations for one card. Rarely more than a handful.
pub type Destinations = SmallVec<[ZoneId; 8]>;

/// Whether `card` may sit directly on `base` in a tableau column:
/// one rank lower, opposite color.
#[must_use]
pub fn can_stack_on(card: Card, base: Card) -> bool {
    card.rank().value() + 1 == base.rank().value() && card.is_red() != base.is_red()
}

/// Whether `card` may go on a foundation whose top is `top`:
/// an Ace on an empty pile, otherwise the next rank of the same suit.
#[must_use]
pub fn can_follow_on_foundation(card: Card, top: Option<Card>) -> bool {
    match top {
        None => card.rank() == Rank::ACE,
        Some(top) => card.suit() == top.suit() && card.rank().value() == top.rank().value() + 1,
    }
}

/// A freecell accepts any card while empty.
#[must_use]
pub fn can_move_to_freecell(zones: &ZoneManager, index: u8) -> bool {
    let zone = ZoneId::Freecell(index);
    zone.is_valid() && zones.zone_size(zone) == 0
}

/// Check the card's own-suit foundation.
#[must_use]
pub fn can_move_to_foundation(zones: &ZoneManager, card: Card) -> bool {
    can_follow_on_foundation(card, zones.top_card(ZoneId::Foundation(card.suit())))
}

/// An empty column takes only a King; otherwise the stacking rule applies.
#[must_use]
pub fn can_move_to_tableau(zones: &ZoneManager, card: Card, column: u8) -> bool {
    let zone = ZoneId::Tableau(column);
    if !zone.is_valid() {
        return false;
    }
    match zones.top_card(zone) {
        None => card.rank() == Rank::KING,
        Some(top) => can_stack_on(card, top),
    }
}

/// Dispatch on the destination kind.
///
/// A foundation destination is checked against the card's own suit,
/// regardless of which foundation was named.
#[must_use]
pub fn can_place(zones: &ZoneManager, card: Card, dest: ZoneId) -> bool {
    match dest {
        ZoneId::Freecell(i) => can_move_to_freecell(zones, i),
        ZoneId::Foundation(_) => can_move_to_foundation(zones, card),
        ZoneId::Tableau(i) => can_move_to_tableau(zones, card, i),
    }
}

/// Where a card would go without an explicit target: its foundation if
/// legal, else the first empty freecell.
#[must_use]
pub fn auto_destination(zones: &ZoneManager, card: Card) -> Option<ZoneId> {
    if can_move_to_foundation(zones, card) {
        return Some(ZoneId::Foundation(card.suit()));
    }
    (0..FREECELL_COUNT as u8)
        .find(|&i| can_move_to_freecell(zones, i))
        .map(ZoneId::Freecell)
}

/// Every zone `card` could legally move to, in `ZoneId::all` order.
///
/// The card's current zone is never listed, and only its own foundation
/// is considered.
#[must_use]
pub fn legal_destinations(zones: &ZoneManager, card: Card) -> Destinations {
    let current = zones.get_zone(card);
    ZoneId::all()
        .filter(|&zone| Some(zone) != current)
        .filter(|&zone| match zone {
            ZoneId::Foundation(suit) => suit == card.suit(),
            _ => true,
        })
        .filter(|&zone| can_place(zones, card, zone))
        .collect()
}
