//! dom-kit - Element and property update utilities.
//!
//! The core is a property-merge engine ([`prop_update`]): given a
//! destination property mapping and a donor mapping (or a key list, for
//! removal), it applies one of four update modes — add, remove, overwrite,
//! toggle — key by key, reporting a per-key [`prop_update::Outcome`].
//!
//! Around the engine sit its two specialized consumers — a CSS style
//! declaration codec ([`style`]) and a class-token codec ([`class_list`]) —
//! plus an in-memory document/element model with a typed updater ([`dom`]),
//! and small clipboard ([`clipboard`]) and JSON-fetch ([`fetch`]) helpers.

pub mod class_list;
pub mod clipboard;
pub mod dom;
pub mod fetch;
pub mod prop_update;
pub mod style;

/// Leaf helpers (cloning, object accessors, randomness, circular
/// indexing), re-exported so the whole toolkit is reachable from one
/// namespace.
pub use dom_kit_util as util;

// Re-exports for convenience
pub use class_list::{apply_class, parse_class_string, ClassValue};
pub use clipboard::{copy_text, copy_to_clipboard, selected_text, ClipboardError};
pub use dom::{
    new_element, toggle_visible, update_element, Document, DomError, ElemKey, ElemRef, Element,
    ElementId, ElementUpdate, StyleValue,
};
pub use fetch::{fetch_json, fetch_json_blocking, FetchError};
pub use prop_update::{
    add_property, overwrite_property, remove_property, toggle_property, update_obj_props,
    update_obj_props_value, Donor, Outcome, UpdateError, UpdateMode,
};
pub use style::{camel_to_kebab, merge_style_strings, parse_style_string, style_map_to_string};
