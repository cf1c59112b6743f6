// Lookup helpers for the service's loosely-shaped JSON. The same value may
// come back bare (`{"id": ...}`) or wrapped (`{"data": {"id": ...}}`), so
// callers list candidate paths in priority order and take the first hit.

use serde_json::Value;

/// A path of object keys, outermost first.
pub type Path<'a> = &'a [&'a str];

/// Returns the first candidate path that resolves to a present value.
///
/// `null`, `false` and empty strings count as absent, so a wrapper that
/// carries `"id": ""` does not shadow a populated fallback.
pub fn extract<'v>(value: &'v Value, candidates: &[Path<'_>]) -> Option<&'v Value> {
    candidates
        .iter()
        .filter_map(|path| lookup(value, path))
        .find(|found| is_present(found))
}

/// Like [`extract`], rendered as text. Strings are returned as-is and
/// numbers in decimal form; other types do not match.
pub fn extract_text(value: &Value, candidates: &[Path<'_>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|path| lookup(value, path))
        .filter(|found| is_present(found))
        .find_map(as_text)
}

/// Text at one exact path, with no presence filtering: an empty string is
/// returned as an empty string. `null` and non-scalar values do not match.
pub fn text_at(value: &Value, path: Path<'_>) -> Option<String> {
    lookup(value, path).and_then(as_text)
}

fn lookup<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(value, |current, key| current.as_object()?.get(*key))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID_PATHS: &[Path<'static>] = &[&["id"], &["data", "id"]];

    #[test]
    fn test_bare_value_wins() {
        let body = json!({"id": "top", "data": {"id": "nested"}});
        assert_eq!(extract_text(&body, ID_PATHS).as_deref(), Some("top"));
    }

    #[test]
    fn test_nested_fallback() {
        let body = json!({"data": {"id": "vid123"}});
        assert_eq!(extract_text(&body, ID_PATHS).as_deref(), Some("vid123"));
    }

    #[test]
    fn test_empty_and_null_are_skipped() {
        let body = json!({"id": "", "data": {"id": "vid9"}});
        assert_eq!(extract_text(&body, ID_PATHS).as_deref(), Some("vid9"));

        let body = json!({"id": null});
        assert_eq!(extract(&body, ID_PATHS), None);
    }

    #[test]
    fn test_numeric_id_as_text() {
        let body = json!({"id": 42});
        assert_eq!(extract_text(&body, ID_PATHS).as_deref(), Some("42"));
    }

    #[test]
    fn test_non_object_wrapper_is_ignored() {
        let body = json!({"data": ["not", "an", "object"]});
        assert_eq!(extract(&body, ID_PATHS), None);

        let body = json!("just a string");
        assert_eq!(extract(&body, ID_PATHS), None);
    }

    #[test]
    fn test_no_candidates_match() {
        let body = json!({"foo": "bar"});
        assert_eq!(extract_text(&body, ID_PATHS), None);
    }

    #[test]
    fn test_text_at_keeps_empty_strings() {
        let body = json!({"id": "", "n": 3, "x": null});
        assert_eq!(text_at(&body, &["id"]).as_deref(), Some(""));
        assert_eq!(text_at(&body, &["n"]).as_deref(), Some("3"));
        assert_eq!(text_at(&body, &["x"]), None);
        assert_eq!(text_at(&body, &["missing"]), None);
    }

    #[test]
    fn test_extract_returns_structured_values() {
        let body = json!({"avatars": [{"id": "a1"}]});
        let found = extract(&body, &[&["data"], &["avatars"]]).unwrap();
        assert!(found.is_array());
    }
}
