//! Property-merge engine.
//!
//! Applies a bulk update to a destination property mapping according to a
//! selected [`UpdateMode`], using a donor mapping (or a bare key list, for
//! removal) as the source of truth. The destination is mutated in place;
//! each single-key operation reports an [`Outcome`].
//!
//! # Modes
//!
//! - `add` — copy a donor value only where the destination lacks the key.
//! - `remove` — delete the key.
//! - `overwrite` — unconditionally take the donor value.
//! - `toggle` — flip the key's presence (remove if present, add if absent).

pub mod apply;
pub mod types;

pub use apply::{
    add_property, overwrite_property, remove_property, toggle_property, update_obj_props,
    update_obj_props_value,
};
pub use types::{Donor, Outcome, UpdateError, UpdateMode};
