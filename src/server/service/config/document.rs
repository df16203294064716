//! Nested path assignment on JSON documents.

use serde_json::{Map, Value};

/// Splits a bracket-path field name into its segments.
///
/// `A[B][C]` becomes `["A", "B", "C"]` and a plain `A` becomes `["A"]`. Returns `None`
/// for malformed names: empty segments, unbalanced brackets or text between groups.
pub fn parse_bracket_path(name: &str) -> Option<Vec<String>> {
    let (head, mut rest) = match name.find('[') {
        Some(index) => name.split_at(index),
        None => (name, ""),
    };
    if head.is_empty() || head.contains(']') {
        return None;
    }

    let mut segments = vec![head.to_string()];
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let end = inner.find(']')?;
        let segment = &inner[..end];
        if segment.is_empty() || segment.contains('[') {
            return None;
        }
        segments.push(segment.to_string());
        rest = &inner[end + 1..];
    }

    Some(segments)
}

/// Renders segments back into bracket notation, the inverse of `parse_bracket_path`.
pub fn format_bracket_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for (index, segment) in segments.iter().enumerate() {
        if index == 0 {
            path.push_str(segment.as_ref());
        } else {
            path.push('[');
            path.push_str(segment.as_ref());
            path.push(']');
        }
    }
    path
}

/// Assigns `value` at `path`, creating intermediate maps as needed.
///
/// Any non-map value found on the way (including the root) is replaced by a map.
/// An empty path replaces the whole document.
pub fn set_path<S: AsRef<str>>(doc: &mut Value, path: &[S], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        *doc = value;
        return;
    };

    if !doc.is_object() {
        *doc = Value::Object(Map::new());
    }
    if let Value::Object(map) = doc {
        if rest.is_empty() {
            map.insert(first.as_ref().to_string(), value);
        } else {
            let child = map
                .entry(first.as_ref())
                .or_insert_with(|| Value::Object(Map::new()));
            set_path(child, rest, value);
        }
    }
}

/// Reads the value at `path`, if every segment exists.
pub fn get_path<'a, S: AsRef<str>>(doc: &'a Value, path: &[S]) -> Option<&'a Value> {
    path.iter()
        .try_fold(doc, |current, segment| current.get(segment.as_ref()))
}
