//! Per-key applicators and the bulk updater.

use serde_json::{Map, Value};

use super::types::{Donor, Outcome, UpdateMode};

// ── Single-key operations ─────────────────────────────────────────────────

/// Copy `donor[key]` into `dest` only when `key` is absent. Never
/// overwrites.
///
/// `Success` when `dest` and the donor agree on the key afterwards —
/// either the value was just copied, or it already matched. A key that is
/// present with a different value reports `Failure` and leaves `dest`
/// untouched.
pub fn add_property(
    key: &str,
    dest: &mut Map<String, Value>,
    donor: &Map<String, Value>,
) -> Outcome {
    if !dest.contains_key(key) {
        if let Some(value) = donor.get(key) {
            dest.insert(key.to_owned(), value.clone());
        }
    }
    if dest.get(key) == donor.get(key) {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}

/// Delete `key` from `dest` if present.
///
/// `Success` when the key is absent afterwards, which for a map is always.
pub fn remove_property(key: &str, dest: &mut Map<String, Value>) -> Outcome {
    dest.remove(key);
    if dest.contains_key(key) {
        Outcome::Failure
    } else {
        Outcome::Success
    }
}

/// Unconditionally set `dest[key]` to the donor's value. A donor miss
/// clears the key.
///
/// `Success` when the two sides compare equal afterwards.
pub fn overwrite_property(
    key: &str,
    dest: &mut Map<String, Value>,
    donor: &Map<String, Value>,
) -> Outcome {
    match donor.get(key) {
        Some(value) => {
            dest.insert(key.to_owned(), value.clone());
        }
        None => {
            dest.remove(key);
        }
    }
    if dest.get(key) == donor.get(key) {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}

/// Flip the key's presence: present ⇒ remove (reporting `Removed`),
/// absent ⇒ add (reporting `Added`).
///
/// Toggling twice with the same donor restores `dest` for the key.
pub fn toggle_property(
    key: &str,
    dest: &mut Map<String, Value>,
    donor: &Map<String, Value>,
) -> Outcome {
    if dest.contains_key(key) {
        match remove_property(key, dest) {
            Outcome::Success => Outcome::Removed,
            _ => Outcome::Failure,
        }
    } else {
        match add_property(key, dest, donor) {
            Outcome::Success => Outcome::Added,
            _ => Outcome::Failure,
        }
    }
}

fn apply_one(
    mode: UpdateMode,
    key: &str,
    dest: &mut Map<String, Value>,
    donor: &Map<String, Value>,
) -> Outcome {
    match mode {
        UpdateMode::Add => add_property(key, dest, donor),
        UpdateMode::Remove => remove_property(key, dest),
        UpdateMode::Overwrite => overwrite_property(key, dest, donor),
        UpdateMode::Toggle => toggle_property(key, dest, donor),
    }
}

// ── Bulk updater ──────────────────────────────────────────────────────────

/// Apply `mode` for every donor key, mutating `dest` in place.
///
/// With a [`Donor::Keys`] donor only [`UpdateMode::Remove`] is meaningful;
/// any other mode leaves `dest` untouched. That path is silent at the API
/// surface and traced at `debug` level.
pub fn update_obj_props(dest: &mut Map<String, Value>, donor: Donor<'_>, mode: UpdateMode) {
    match donor {
        Donor::Object(map) => {
            for key in map.keys() {
                apply_one(mode, key, dest, map);
            }
        }
        Donor::Keys(keys) if mode == UpdateMode::Remove => {
            for key in keys {
                remove_property(key, dest);
            }
        }
        Donor::Keys(_) => {
            tracing::debug!(mode = mode.as_str(), "key-list donor ignored for non-remove mode");
        }
    }
}

/// Dynamic-shaped entry point: object donors merge under any mode, array
/// donors (of key strings) remove under [`UpdateMode::Remove`], and any
/// other donor shape is a no-op.
pub fn update_obj_props_value(dest: &mut Map<String, Value>, donor: &Value, mode: UpdateMode) {
    match donor {
        Value::Object(map) => update_obj_props(dest, Donor::Object(map), mode),
        Value::Array(items) if mode == UpdateMode::Remove => {
            for key in items.iter().filter_map(Value::as_str) {
                remove_property(key, dest);
            }
        }
        _ => {
            tracing::debug!(mode = mode.as_str(), "donor shape not usable for this mode");
        }
    }
}
