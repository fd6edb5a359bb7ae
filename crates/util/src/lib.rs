//! dom-kit-util - Leaf helpers for dom-kit
//!
//! Stateless helpers with no DOM knowledge: deep cloning of JSON values,
//! object predicates and accessors, random selection, and circular slice
//! indexing.

pub mod arrays;
pub mod json_clone;
pub mod obj;
pub mod random;

// Re-exports for convenience
pub use arrays::{item_by_offset, remove_item_by_value, wrapped_index};
pub use json_clone::deep_clone;
pub use obj::{is_object, obj_values, obj_values_value};
pub use random::{Random, SeededRandom};
