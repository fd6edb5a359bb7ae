use serde_json::{Map, Value};

/// Creates a deep clone of any JSON value.
///
/// Every nested array and object is rebuilt, so the result shares no
/// structure with the input. Equivalent to a serialize/parse round trip
/// without going through a string representation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dom_kit_util::json_clone::deep_clone;
///
/// let original = json!({"styles": {"color": "black"}, "order": [1, 2, 3]});
/// let cloned = deep_clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(key, val)| (key.clone(), deep_clone(val)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clone_scalars() {
        for value in [json!(null), json!(true), json!(42), json!("hello")] {
            assert_eq!(deep_clone(&value), value);
        }
    }

    #[test]
    fn test_clone_nested() {
        let value = json!({
            "array": [1, 2, {"nested": true}],
            "object": {"a": "b"},
            "scalar": 42
        });
        assert_eq!(deep_clone(&value), value);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = json!({"arr": [1, 2, 3]});
        let mut cloned = deep_clone(&original);

        cloned["arr"].as_array_mut().unwrap().push(json!(4));
        assert_eq!(original["arr"].as_array().unwrap().len(), 3);
    }
}
