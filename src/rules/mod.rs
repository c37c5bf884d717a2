//! Rules: action reducers and legality checks.
//!
//! Reducers are pure: `(round, actor, arguments) -> Result<Round, ActionError>`.
//! They never mutate their input and never perform I/O. The host is
//! expected to apply at most one action per round at a time against its
//! latest snapshot.

pub mod reducers;
pub mod legality;

pub use reducers::{discard, draw, lay_down, pick_up_discards, reorder_hand};
pub use legality::{
    can_discard, can_draw, can_lay_down, legal_pickup_indices, pickup_is_legal,
};
