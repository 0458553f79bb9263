//! Null-safe traversal of untyped JSON
//!
//! Upstream records are walked by key path. A missing key, or an intermediate
//! value that is not an object, ends the walk with `None`. Nothing here panics.

use serde_json::Value;

/// Follow `path` through nested objects.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Render a scalar JSON value as text.
///
/// Strings are returned as-is, numbers and booleans through their JSON
/// representation. Null, arrays and objects have no text form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text found at `path`, if the value there is a scalar.
pub fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    get_path(value, path).and_then(scalar_text)
}

/// First path in `paths` that yields text.
pub fn first_text(value: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| text_at(value, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_path_nested() {
        let value = json!({"location": {"address": {"addressLocality": "Gent"}}});
        assert_eq!(
            get_path(&value, &["location", "address", "addressLocality"]),
            Some(&json!("Gent"))
        );
    }

    #[test]
    fn test_get_path_empty_path_is_identity() {
        let value = json!({"a": 1});
        assert_eq!(get_path(&value, &[]), Some(&value));
    }

    #[test]
    fn test_get_path_missing_intermediate() {
        let value = json!({"location": {}});
        assert_eq!(get_path(&value, &["location", "address", "addressLocality"]), None);
    }

    #[test]
    fn test_get_path_through_non_object() {
        let value = json!({"name": "Concert", "list": [1, 2]});
        assert_eq!(get_path(&value, &["name", "nl"]), None);
        assert_eq!(get_path(&value, &["list", "0"]), None);
        assert_eq!(get_path(&json!(null), &["anything"]), None);
    }

    #[test]
    fn test_text_at_scalars() {
        let value = json!({"s": "x", "n": 42, "b": true, "z": null, "o": {"k": 1}});
        assert_eq!(text_at(&value, &["s"]), Some("x".to_string()));
        assert_eq!(text_at(&value, &["n"]), Some("42".to_string()));
        assert_eq!(text_at(&value, &["b"]), Some("true".to_string()));
        assert_eq!(text_at(&value, &["z"]), None);
        assert_eq!(text_at(&value, &["o"]), None);
    }

    #[test]
    fn test_first_text_order() {
        let value = json!({"name": {"en": "Concert", "fr": "Concert FR"}});
        assert_eq!(
            first_text(&value, &[&["name", "nl"], &["name", "en"], &["name", "fr"]]),
            Some("Concert".to_string())
        );
        assert_eq!(first_text(&value, &[&["name", "de"]]), None);
    }
}
