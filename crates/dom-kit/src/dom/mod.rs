//! In-memory document/element model and its updaters.

mod node;
mod update;

pub use node::{Document, ElemRef, Element, ElementId};
pub use update::{
    new_element, toggle_visible, update_element, DomError, ElemKey, ElementUpdate, StyleValue,
};
