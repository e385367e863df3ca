//! Zone system for card locations.
//!
//! FreeCell's containers are fixed: 4 freecells, 4 foundations and 8
//! tableau columns. This module addresses them and tracks which card is
//! where.
//!
//! ## Key Types
//!
//! - `ZoneId`: Address of one container
//! - `ZoneKind`: Freecell / foundation / tableau
//! - `ZoneManager`: Container contents plus the card -> zone index

pub mod manager;
pub mod zone;

pub use manager::ZoneManager;
pub use zone::{ZoneId, ZoneKind, FOUNDATION_COUNT, FREECELL_COUNT, TABLEAU_COUNT};
