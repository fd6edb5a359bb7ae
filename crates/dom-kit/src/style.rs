//! CSS style-declaration codec and engine-backed merge.
//!
//! A declaration string like `"color: black; font-size: 10px;"` parses into
//! a property mapping and serializes back out of one. Serialization converts
//! camelCase keys to kebab-case; parsing keeps keys exactly as written, so
//! the round trip is deliberately asymmetric: `{fontSize: "13px"}` comes
//! back as `{"font-size": "13px"}`.

use serde_json::{Map, Value};

use crate::prop_update::{update_obj_props, Donor, UpdateMode};

/// Convert a camelCase property name to kebab-case
/// (`fontSize` → `font-size`).
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Parse a `"prop: value; prop: value;"` declaration string into a property
/// mapping, preserving declaration order.
///
/// Keys keep the case they were written in. Fragments without a colon are
/// dropped; a later declaration of the same property wins.
pub fn parse_style_string(style: &str) -> Map<String, Value> {
    let mut out = Map::new();
    for decl in style.split(';') {
        if let Some((key, value)) = decl.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            out.insert(key.to_owned(), Value::String(value.trim().to_owned()));
        }
    }
    out
}

/// Serialize a property mapping back into a declaration string: one
/// `"key: value; "` pair per property in insertion order, camelCase keys
/// converted to kebab-case, surrounding whitespace trimmed.
///
/// ```
/// use serde_json::json;
/// use dom_kit::style::style_map_to_string;
///
/// let styles = json!({"color": "black", "fontSize": "13px"});
/// assert_eq!(
///     style_map_to_string(styles.as_object().unwrap()),
///     "color: black; font-size: 13px;"
/// );
/// ```
pub fn style_map_to_string(styles: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (key, value) in styles {
        out.push_str(&camel_to_kebab(key));
        out.push_str(": ");
        out.push_str(&css_value(value));
        out.push_str("; ");
    }
    out.trim().to_owned()
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Merge two declaration strings through the property engine: parse both,
/// run [`update_obj_props`] with `mode`, re-serialize.
pub fn merge_style_strings(dest: &str, donor: &str, mode: UpdateMode) -> String {
    let mut dest_map = parse_style_string(dest);
    let donor_map = parse_style_string(donor);
    update_obj_props(&mut dest_map, Donor::Object(&donor_map), mode);
    style_map_to_string(&dest_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("fontSize"), "font-size");
        assert_eq!(camel_to_kebab("borderTopColor"), "border-top-color");
        assert_eq!(camel_to_kebab("color"), "color");
    }

    #[test]
    fn test_parse_style_string() {
        let parsed = parse_style_string("color: black; font-size: 10px;");
        assert_eq!(parsed.get("color"), Some(&json!("black")));
        assert_eq!(parsed.get("font-size"), Some(&json!("10px")));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_tolerates_irregular_spacing() {
        let parsed = parse_style_string("color:black;font-size:  10px ;");
        assert_eq!(parsed.get("color"), Some(&json!("black")));
        assert_eq!(parsed.get("font-size"), Some(&json!("10px")));
    }

    #[test]
    fn test_parse_drops_colonless_fragments() {
        let parsed = parse_style_string("color: red; nonsense; ;");
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(parse_style_string("").is_empty());
    }

    #[test]
    fn test_serialize_converts_camel_case() {
        let styles = json!({"color": "black", "fontSize": "13px"});
        assert_eq!(
            style_map_to_string(styles.as_object().unwrap()),
            "color: black; font-size: 13px;"
        );
    }

    #[test]
    fn test_round_trip_keeps_kebab_keys() {
        // The asymmetry is part of the contract: camelCase keys serialize
        // as kebab-case and stay kebab-case on re-parse.
        let styles = json!({"color": "black", "fontSize": "13px"});
        let serialized = style_map_to_string(styles.as_object().unwrap());
        let reparsed = parse_style_string(&serialized);

        assert_eq!(reparsed.get("color"), Some(&json!("black")));
        assert_eq!(reparsed.get("font-size"), Some(&json!("13px")));
        assert!(!reparsed.contains_key("fontSize"));
    }

    #[test]
    fn test_serialize_preserves_insertion_order() {
        let mut styles = Map::new();
        styles.insert("z-index".to_string(), json!("2"));
        styles.insert("color".to_string(), json!("red"));
        assert_eq!(style_map_to_string(&styles), "z-index: 2; color: red;");
    }

    #[test]
    fn test_merge_style_strings_overwrite() {
        let merged = merge_style_strings(
            "color: black; font-size: 10px;",
            "color: red;",
            UpdateMode::Overwrite,
        );
        assert_eq!(merged, "color: red; font-size: 10px;");
    }

    #[test]
    fn test_merge_style_strings_add_never_clobbers() {
        let merged = merge_style_strings(
            "color: black;",
            "color: red; font-size: 10px;",
            UpdateMode::Add,
        );
        assert_eq!(merged, "color: black; font-size: 10px;");
    }

    #[test]
    fn test_merge_style_strings_toggle() {
        let merged = merge_style_strings(
            "color: black;",
            "color: black; font-size: 10px;",
            UpdateMode::Toggle,
        );
        assert_eq!(merged, "font-size: 10px;");
    }
}
