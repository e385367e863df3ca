//! Table configuration.
//!
//! Deck art and background selection belong to the presentation layer,
//! not to the rules. The engine only reads `seed`; the rest is carried
//! here so a single value can be handed to the deck collaborator and the
//! renderer.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Deck used when none (or a blank name) is configured.
pub const DEFAULT_DECK_NAME: &str = "Standard";

/// Background used when none is configured.
pub const DEFAULT_BACKGROUND_NAME: &str = "Red1";

/// Settings for one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Art pack folder under `Decks/`.
    pub deck_name: String,

    /// Background image name.
    pub background_name: String,

    /// Shuffle seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_name: DEFAULT_DECK_NAME.to_string(),
            background_name: DEFAULT_BACKGROUND_NAME.to_string(),
            seed: None,
        }
    }
}

impl TableConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the art pack.
    #[must_use]
    pub fn with_deck(mut self, name: impl Into<String>) -> Self {
        self.deck_name = name.into();
        self
    }

    /// Set the background.
    #[must_use]
    pub fn with_background(mut self, name: impl Into<String>) -> Self {
        self.background_name = name.into();
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective deck name, falling back to the standard deck when blank.
    #[must_use]
    pub fn deck_name(&self) -> &str {
        if self.deck_name.trim().is_empty() {
            DEFAULT_DECK_NAME
        } else {
            &self.deck_name
        }
    }

    /// Replace a blank deck name with the standard deck.
    ///
    /// Sessions call this once at start, so a missing deck is reported once.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.deck_name.trim().is_empty() {
            log::warn!("no deck selected, falling back to {}", DEFAULT_DECK_NAME);
            self.deck_name = DEFAULT_DECK_NAME.to_string();
        }
        self
    }

    /// Asset path of a card face in the configured art pack.
    #[must_use]
    pub fn card_asset_path(&self, card: Card) -> String {
        format!("Decks/{}/{}", self.deck_name(), card.code())
    }
}
