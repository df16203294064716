//! Typed coercion of decoded form values.
//!
//! Form submissions only carry strings. After the structural decode, every leaf is
//! converted according to its key: identifiers and rates become integers, multipliers
//! and percentages become floats and checkbox flags become booleans. Values that are
//! already typed are left alone, so running the pass twice is the same as running it
//! once.

use serde_json::{Number, Value};

use crate::server::{
    error::form::FormError,
    service::config::document::{format_bracket_path, get_path, set_path},
};

/// Token a checked HTML checkbox submits.
pub const FLAG_TRUE: &str = "on";

/// Boolean settings rendered as checkboxes. Unchecked boxes are not submitted at all.
pub const FLAG_PATHS: [[&str; 2]; 3] = [
    ["BOOSTER_MULTIPLIER_CONFIG", "ENABLED"],
    ["REGULAR_USER_ROLE_CREATION", "ENABLED"],
    ["CUSTOM_ROLE_CONFIG", "ALLOW_GRADIENT"],
];

/// Top-level keys holding free-form text keyed by admin-chosen names.
const FREE_TEXT_KEYS: [&str; 2] = ["MESSAGES", "FOOTER_MESSAGES"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Channel, role or thread id. Blank becomes null.
    Identifier,
    /// List of role ids.
    IdentifierList,
    /// Whole-number rate or price. Blank becomes null.
    Integer,
    /// Multiplier or percentage.
    Float,
    /// Checkbox; true only for `FLAG_TRUE`.
    Flag,
    Text,
}

/// Classifies a document path by its leaf key.
pub fn field_kind<S: AsRef<str>>(path: &[S]) -> FieldKind {
    if FLAG_PATHS.iter().any(|flag| {
        flag.len() == path.len() && flag.iter().zip(path).all(|(a, b)| *a == b.as_ref())
    }) {
        return FieldKind::Flag;
    }

    let Some(key) = path.last().map(|segment| segment.as_ref()) else {
        return FieldKind::Text;
    };

    match key {
        "MESSAGES_PER_COIN" | "REACTIONS_PER_COIN" | "MIN_BOOST_COUNT" | "PRICE" => {
            FieldKind::Integer
        }
        "CUSTOM_ROLE_PING_ROLES" => FieldKind::IdentifierList,
        key if key.ends_with("_IDS") => FieldKind::IdentifierList,
        key if key.ends_with("_ID") => FieldKind::Identifier,
        key if key.ends_with("MULTIPLIER")
            || key.ends_with("PERCENT")
            || key.ends_with("PERCENTAGE") =>
        {
            FieldKind::Float
        }
        _ => FieldKind::Text,
    }
}

/// Coerces every leaf of a decoded document and materializes missing flags as `false`.
///
/// # Returns
/// - `Ok(())` - Document coerced in place
/// - `Err(FormError)` - A numeric field held something that is not a number; the
///   error names the field in bracket notation
pub fn coerce_document(doc: &mut Value) -> Result<(), FormError> {
    let mut path = Vec::new();
    coerce_children(doc, &mut path)?;

    for flag in FLAG_PATHS {
        if !matches!(get_path(doc, &flag), Some(Value::Bool(_))) {
            set_path(doc, &flag, Value::Bool(false));
        }
    }

    Ok(())
}

fn coerce_children(value: &mut Value, path: &mut Vec<String>) -> Result<(), FormError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if path.is_empty() && FREE_TEXT_KEYS.contains(&key.as_str()) {
                    continue;
                }
                path.push(key.clone());
                coerce_entry(child, path)?;
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter_mut().enumerate() {
                path.push(index.to_string());
                coerce_entry(child, path)?;
                path.pop();
            }
        }
        _ => {}
    }
    Ok(())
}

fn coerce_entry(value: &mut Value, path: &mut Vec<String>) -> Result<(), FormError> {
    match field_kind(path.as_slice()) {
        FieldKind::Text => coerce_children(value, path),
        FieldKind::Flag => {
            if !value.is_boolean() {
                *value = Value::Bool(value.as_str() == Some(FLAG_TRUE));
            }
            Ok(())
        }
        FieldKind::IdentifierList => coerce_identifier_list(value, path),
        kind => {
            if let Value::String(raw) = value {
                *value = coerce_scalar(kind, raw, &format_bracket_path(path.as_slice()))?;
            }
            Ok(())
        }
    }
}

fn coerce_identifier_list(value: &mut Value, path: &[String]) -> Result<(), FormError> {
    let field = format_bracket_path(path);
    match value {
        Value::Array(items) => {
            let mut ids = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(raw) if raw.trim().is_empty() => {}
                    Value::String(raw) => ids.push(parse_identifier(
                        raw,
                        &format!("{}[{}]", field, index),
                    )?),
                    Value::Null => {}
                    other => ids.push(other.clone()),
                }
            }
            *items = ids;
        }
        Value::String(raw) if raw.trim().is_empty() => *value = Value::Array(Vec::new()),
        Value::String(raw) => *value = Value::Array(vec![parse_identifier(raw, &field)?]),
        Value::Null => *value = Value::Array(Vec::new()),
        _ => {}
    }
    Ok(())
}

fn coerce_scalar(kind: FieldKind, raw: &str, field: &str) -> Result<Value, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match kind {
        FieldKind::Identifier => parse_identifier(trimmed, field),
        FieldKind::Integer => parse_integer(trimmed, field).map(Value::from),
        FieldKind::Float => trimmed
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| FormError::InvalidNumber {
                field: field.to_string(),
                value: raw.to_string(),
            }),
        _ => Ok(Value::String(raw.to_string())),
    }
}

/// Parses a Discord id into a JSON number.
pub fn parse_identifier(raw: &str, field: &str) -> Result<Value, FormError> {
    parse_snowflake(raw, field).map(Value::from)
}

/// Parses a Discord id, naming `field` on failure.
pub fn parse_snowflake(raw: &str, field: &str) -> Result<u64, FormError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| FormError::InvalidInteger {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parses a signed whole number such as a rate or a price.
pub fn parse_integer(raw: &str, field: &str) -> Result<i64, FormError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidInteger {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
