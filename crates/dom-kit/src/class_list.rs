//! Class-token codec and class-list mutators.
//!
//! Class strings are comma- or space-delimited; already-split token lists
//! pass through unchanged. Tokens are applied to an element's `class`
//! attribute one at a time under add/remove/toggle — `overwrite` has no
//! class-list meaning.

use crate::dom::{Document, ElementId};
use crate::prop_update::UpdateMode;

/// A class specification: a raw string or a pre-split token list.
#[derive(Debug, Clone)]
pub enum ClassValue {
    Str(String),
    List(Vec<String>),
}

impl ClassValue {
    /// The individual class tokens, splitting strings on commas and
    /// whitespace.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            ClassValue::Str(s) => parse_class_string(s),
            ClassValue::List(list) => list.clone(),
        }
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<Vec<String>> for ClassValue {
    fn from(list: Vec<String>) -> Self {
        ClassValue::List(list)
    }
}

impl From<&[&str]> for ClassValue {
    fn from(list: &[&str]) -> Self {
        ClassValue::List(list.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Split a comma/space-delimited class string into tokens. Runs of
/// delimiters collapse.
///
/// ```
/// use dom_kit::class_list::parse_class_string;
///
/// assert_eq!(parse_class_string("btn, btn-primary  active"),
///            vec!["btn", "btn-primary", "active"]);
/// ```
pub fn parse_class_string(classes: &str) -> Vec<String> {
    classes
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Apply one class token to an element under `mode`.
///
/// `Overwrite` leaves the element untouched (traced at `debug` level);
/// only three of the four modes apply to class lists.
pub fn apply_class(mode: UpdateMode, token: &str, doc: &mut Document, id: ElementId) {
    match mode {
        UpdateMode::Add => doc.element_mut(id).add_class(token),
        UpdateMode::Remove => doc.element_mut(id).remove_class(token),
        UpdateMode::Toggle => doc.element_mut(id).toggle_class(token),
        UpdateMode::Overwrite => {
            tracing::debug!(token, "overwrite is not a class-list mode");
        }
    }
}
