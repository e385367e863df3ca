//! FreeCell rules.
//!
//! Legality is a set of pure predicates over the table; the engine asks
//! them before every move and never moves a card they reject.

pub mod legality;

pub use legality::{
    auto_destination, can_follow_on_foundation, can_move_to_foundation, can_move_to_freecell,
    can_move_to_tableau, can_place, can_stack_on, legal_destinations, Destinations,
};
