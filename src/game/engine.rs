//! The FreeCell rules engine.
//!
//! `SolitaireEngine` owns the table, the current selection and the win
//! flag. It is driven by one call per resolved player click and answers
//! each with a `MoveOutcome`; it performs no I/O and never waits.
//!
//! ## Selection state machine
//!
//! | Selected | Click            | Result                                   |
//! |----------|------------------|------------------------------------------|
//! | none     | top card         | `Selected`                               |
//! | none     | blocked card     | no-op                                    |
//! | none     | slot             | no-op                                    |
//! | A        | A                | `Deselected`                             |
//! | A        | tableau top B    | move A onto B, or `Rejected`             |
//! | A        | other card       | `Rejected`                               |
//! | A        | slot             | move A to that zone, or `Rejected`       |
//! | any      | anything, if won | no-op                                    |
//!
//! Every branch that starts with a selection ends with none.

use log::{debug, error, info, trace, warn};

use super::outcome::{MoveOutcome, MoveRecord, Target};
use super::snapshot::Snapshot;
use crate::cards::{Card, DECK_SIZE};
use crate::core::EngineError;
use crate::rules;
use crate::zones::{ZoneId, ZoneKind, ZoneManager, TABLEAU_COUNT};

/// Cards dealt to each tableau column: 7 to the first four, 6 to the rest.
pub const DEAL_LAYOUT: [usize; TABLEAU_COUNT] = [7, 7, 7, 7, 6, 6, 6, 6];

/// FreeCell rules engine.
///
/// ```
/// use freecell_engine::cards::Deck;
/// use freecell_engine::game::{MoveOutcome, SolitaireEngine};
/// use freecell_engine::zones::ZoneId;
///
/// let mut engine = SolitaireEngine::new();
/// engine.deal(Deck::standard().into_cards()).unwrap();
///
/// // Column 0 holds A..7 of Clubs; the 7 is on top.
/// let top = engine.top_card(ZoneId::Tableau(0)).unwrap();
/// assert!(matches!(engine.click_card(top), MoveOutcome::Selected { .. }));
///
/// let outcome = engine.click_slot(ZoneId::Freecell(0));
/// assert_eq!(outcome.moved().unwrap().to, ZoneId::Freecell(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SolitaireEngine {
    zones: ZoneManager,
    selected: Option<Card>,
    won: bool,
}

impl SolitaireEngine {
    /// Create an engine with an empty table. Call `deal` before playing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a fresh game.
    ///
    /// Consumes exactly 52 distinct cards: the first 7 go bottom-to-top into
    /// column 0, the next 7 into column 1, and so on per `DEAL_LAYOUT`.
    /// Clears freecells, foundations, selection and the win flag.
    ///
    /// A deck of the wrong size or with a repeated card is rejected and
    /// the current game is left untouched.
    pub fn deal(&mut self, cards: Vec<Card>) -> Result<(), EngineError> {
        if cards.len() != DECK_SIZE {
            error!("refusing to deal {} cards", cards.len());
            return Err(EngineError::DeckSize {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }

        let mut zones = ZoneManager::new();
        let mut cards = cards.into_iter();
        for (column, &count) in DEAL_LAYOUT.iter().enumerate() {
            for card in cards.by_ref().take(count) {
                zones.place(card, ZoneId::Tableau(column as u8)).map_err(|e| {
                    error!("refusing to deal: {}", e);
                    e
                })?;
            }
        }

        self.zones = zones;
        self.selected = None;
        self.won = false;
        debug!("dealt {} cards", self.zones.total_cards());
        self.debug_check();
        Ok(())
    }

    /// Start over with a new deck. Same contract as `deal`.
    pub fn restart(&mut self, cards: Vec<Card>) -> Result<(), EngineError> {
        info!("restarting game");
        self.deal(cards)
    }

    /// Handle one resolved click.
    pub fn select_or_act(&mut self, target: Target) -> MoveOutcome {
        if self.won {
            trace!("game over, ignoring {:?}", target);
            return MoveOutcome::noop();
        }

        let outcome = match (self.selected, target) {
            (None, Target::Card(card)) => self.select(card),
            (None, Target::Slot(_)) => MoveOutcome::noop(),
            (Some(selected), Target::Card(card)) if selected == card => {
                self.selected = None;
                debug!("deselected {}", card);
                MoveOutcome::Deselected { card }
            }
            (Some(selected), Target::Card(card)) => {
                self.selected = None;
                self.move_onto_card(selected, card)
            }
            (Some(selected), Target::Slot(zone)) => {
                self.selected = None;
                self.move_to_slot(selected, zone)
            }
        };

        self.debug_check();
        outcome
    }

    /// Click on a card.
    pub fn click_card(&mut self, card: Card) -> MoveOutcome {
        self.select_or_act(Target::Card(card))
    }

    /// Click on a container slot.
    pub fn click_slot(&mut self, zone: ZoneId) -> MoveOutcome {
        self.select_or_act(Target::Slot(zone))
    }

    fn select(&mut self, card: Card) -> MoveOutcome {
        if !self.zones.is_on_top(card) {
            trace!("{} is blocked or not on the table", card);
            return MoveOutcome::noop();
        }
        self.selected = Some(card);
        debug!("selected {}", card);
        MoveOutcome::Selected { card }
    }

    /// Dropping on a card only ever means "onto that tableau column".
    fn move_onto_card(&mut self, card: Card, target: Card) -> MoveOutcome {
        let column = match self.zones.get_zone(target) {
            Some(zone @ ZoneId::Tableau(_)) if self.zones.top_card(zone) == Some(target) => zone,
            _ => {
                trace!("rejected {} -> {}: not a tableau top", card, target);
                return MoveOutcome::rejected(card);
            }
        };
        self.try_move(card, column)
    }

    fn move_to_slot(&mut self, card: Card, zone: ZoneId) -> MoveOutcome {
        if !zone.is_valid() {
            warn!("click on nonexistent {}", zone);
            return MoveOutcome::rejected(card);
        }
        // Any foundation slot means the card's own foundation.
        let dest = match zone.kind() {
            ZoneKind::Foundation => ZoneId::Foundation(card.suit()),
            _ => zone,
        };
        self.try_move(card, dest)
    }

    fn try_move(&mut self, card: Card, dest: ZoneId) -> MoveOutcome {
        if !rules::can_place(&self.zones, card, dest) {
            return self.reject(card, dest);
        }
        let Some(record) = self.move_card(card, dest) else {
            return self.reject(card, dest);
        };
        if self.check_win() {
            info!("game won with {}", card);
            MoveOutcome::WonAfterMove(record)
        } else {
            MoveOutcome::Moved(record)
        }
    }

    fn reject(&self, card: Card, dest: ZoneId) -> MoveOutcome {
        trace!("rejected {} -> {}", card, dest);
        MoveOutcome::rejected(card)
    }

    /// Relocate a card. Legality must already be checked.
    fn move_card(&mut self, card: Card, dest: ZoneId) -> Option<MoveRecord> {
        let (from, index) = self.zones.move_card(card, dest)?;
        debug!("moved {} from {} to {}", card, from, dest);
        Some(MoveRecord {
            card,
            from,
            to: dest,
            index,
        })
    }

    fn check_win(&mut self) -> bool {
        let complete = self.zones.foundations().iter().all(|pile| pile.len() == 13);
        if complete {
            self.won = true;
        }
        self.won
    }

    /// Mark the game as won without moving any cards.
    ///
    /// Debug hook for exercising the win presentation. Clears selection.
    pub fn force_win(&mut self) {
        if self.won {
            return;
        }
        info!("win forced");
        self.selected = None;
        self.won = true;
    }

    // === Queries ===

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn selected(&self) -> Option<Card> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selected == Some(card)
    }

    /// Where a card currently is.
    #[must_use]
    pub fn location_of(&self, card: Card) -> Option<ZoneId> {
        self.zones.get_zone(card)
    }

    #[must_use]
    pub fn top_card(&self, zone: ZoneId) -> Option<Card> {
        self.zones.top_card(zone)
    }

    /// Whether a card is selectable (nothing stacked on it).
    #[must_use]
    pub fn is_on_top(&self, card: Card) -> bool {
        self.zones.is_on_top(card)
    }

    /// Zone an automatic move of `card` would target: its foundation if
    /// legal, else the first empty freecell. Does not move anything.
    #[must_use]
    pub fn auto_destination(&self, card: Card) -> Option<ZoneId> {
        if !self.zones.is_on_top(card) {
            return None;
        }
        rules::auto_destination(&self.zones, card)
    }

    /// Zones a click could send `card` to. Empty unless the card can be
    /// selected and the game is still running.
    #[must_use]
    pub fn legal_destinations(&self, card: Card) -> rules::Destinations {
        if self.won || !self.zones.is_on_top(card) {
            return rules::Destinations::new();
        }
        rules::legal_destinations(&self.zones, card)
    }

    /// Table contents for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.zones, self.selected, self.won)
    }

    /// Read access to the containers.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// Verify the table invariants.
    ///
    /// A dealt table holds all 52 cards exactly once, freecells hold at most
    /// one card, foundations are Ace-up runs of their suit, and the
    /// selection (if any) is a top card.
    pub fn check_invariants(&self) -> Result<(), String> {
        if let Some(violation) = self.zones.invariant_violation() {
            return Err(violation);
        }
        let total = self.zones.total_cards();
        if total != 0 && total != DECK_SIZE {
            return Err(format!("{} cards on the table", total));
        }
        if let Some(card) = self.selected {
            if !self.zones.is_on_top(card) {
                return Err(format!("selected {} is not on top", card));
            }
        }
        Ok(())
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.check_invariants(), Ok(()), "table invariant broken");
    }
}
