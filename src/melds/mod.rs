//! Melds: validity predicates and the shared table.
//!
//! ## Key Types
//!
//! - `is_valid_set`, `can_extend`, `can_extend_multiple`,
//!   `hand_contains_valid_set_using_card`: Pure predicates
//! - `Meld`, `MeldEntry`: One owner-tagged set on the table
//! - `Table`: Append-only list of melds with first-match insertion

pub mod validator;
pub mod table;

pub use validator::{
    can_extend, can_extend_multiple, hand_contains_valid_set_using_card, is_valid_set, set_kind,
    SetKind, MAX_SEARCH_SET_SIZE, MIN_SET_SIZE,
};
pub use table::{Meld, MeldEntry, Placement, Table};
