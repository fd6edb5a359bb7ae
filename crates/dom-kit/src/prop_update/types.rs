//! Core types for the property-merge engine.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum UpdateError {
    #[error("UNKNOWN_MODE: {0}")]
    UnknownMode(String),
}

// ── Update mode ───────────────────────────────────────────────────────────

/// The per-key merge policy, applied uniformly across a batch of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Add,
    Remove,
    Overwrite,
    Toggle,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMode::Add => "add",
            UpdateMode::Remove => "remove",
            UpdateMode::Overwrite => "overwrite",
            UpdateMode::Toggle => "toggle",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, UpdateError> {
        match s {
            "add" => Ok(UpdateMode::Add),
            "remove" => Ok(UpdateMode::Remove),
            "overwrite" => Ok(UpdateMode::Overwrite),
            "toggle" => Ok(UpdateMode::Toggle),
            other => Err(UpdateError::UnknownMode(other.to_string())),
        }
    }

    /// Class lists support add/remove/toggle only; `overwrite` has no
    /// class-list meaning.
    pub fn applies_to_classes(&self) -> bool {
        !matches!(self, UpdateMode::Overwrite)
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────

/// Per-key merge outcome.
///
/// Add/remove/overwrite report `Success`/`Failure`; toggle reports
/// `Added`/`Removed`/`Failure`. [`Outcome::as_str`] yields the legacy
/// sentinel text (`"success"`, `"failure"`, `"added"`, `"removed"`) for
/// callers that branch on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    Added,
    Removed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Added => "added",
            Outcome::Removed => "removed",
        }
    }

    /// Everything except `Failure` counts as a successful application.
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failure)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Donor ─────────────────────────────────────────────────────────────────

/// The source side of a bulk update: a property mapping, or a bare key list
/// (meaningful for [`UpdateMode::Remove`] only).
#[derive(Debug, Clone, Copy)]
pub enum Donor<'a> {
    Object(&'a Map<String, Value>),
    Keys(&'a [String]),
}

impl<'a> From<&'a Map<String, Value>> for Donor<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Donor::Object(map)
    }
}

impl<'a> From<&'a [String]> for Donor<'a> {
    fn from(keys: &'a [String]) -> Self {
        Donor::Keys(keys)
    }
}

impl<'a> From<&'a Vec<String>> for Donor<'a> {
    fn from(keys: &'a Vec<String>) -> Self {
        Donor::Keys(keys)
    }
}
