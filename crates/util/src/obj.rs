use serde_json::{Map, Value};

/// Check whether a JSON value is a plain object (not null, not an array).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dom_kit_util::obj::is_object;
///
/// assert!(is_object(&json!({"a": 1})));
/// assert!(!is_object(&json!(null)));
/// assert!(!is_object(&json!([1, 2, 3])));
/// ```
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Collect the values of a property mapping, in key order.
pub fn obj_values(obj: &Map<String, Value>) -> Vec<Value> {
    obj.values().cloned().collect()
}

/// Collect the values of a JSON value, if it is an object.
/// Returns an empty vector for non-object values.
pub fn obj_values_value(value: &Value) -> Vec<Value> {
    match value {
        Value::Object(obj) => obj_values(obj),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_object() {
        assert!(is_object(&json!({})));
        assert!(is_object(&json!({"foo": "bar"})));

        assert!(!is_object(&json!(null)));
        assert!(!is_object(&json!(42)));
        assert!(!is_object(&json!("string")));
        assert!(!is_object(&json!([1, 2, 3])));
    }

    #[test]
    fn test_obj_values() {
        let mut obj = Map::new();
        obj.insert("a".to_string(), json!(1));
        obj.insert("b".to_string(), json!("two"));

        assert_eq!(obj_values(&obj), vec![json!(1), json!("two")]);
    }

    #[test]
    fn test_obj_values_value() {
        assert_eq!(
            obj_values_value(&json!({"a": 1, "b": 2})),
            vec![json!(1), json!(2)]
        );
        assert!(obj_values_value(&json!([1, 2])).is_empty());
        assert!(obj_values_value(&json!(null)).is_empty());
    }
}
