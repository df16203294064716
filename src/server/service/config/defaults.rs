//! Canonical top-level keys of a guild configuration document.
//!
//! Readers never branch on whether these keys exist: `apply_defaults` fills every
//! missing one with an empty container and leaves everything else untouched,
//! including keys this dashboard does not know about.

use serde_json::{json, Map, Value};

/// Keys guaranteed on every loaded document, with their empty defaults.
pub fn default_entries() -> [(&'static str, Value); 8] {
    [
        ("MESSAGES", json!({})),
        ("FOOTER_MESSAGES", json!({})),
        (
            "CURRENCY_RATES",
            json!({ "default": {}, "categories": {}, "channels": {} }),
        ),
        ("CUSTOM_ROLE_CONFIG", json!({})),
        ("QNA_DATA", json!([])),
        ("BOOSTER_MULTIPLIER_CONFIG", json!({})),
        ("REGULAR_USER_ROLE_CREATION", json!({})),
        ("CUSTOM_ROLE_PING_ROLES", json!([])),
    ]
}

/// Subkeys of `CURRENCY_RATES` defaulted even when the parent already exists.
const CURRENCY_RATE_SCOPES: [&str; 3] = ["default", "categories", "channels"];

/// Fills in every missing canonical key.
///
/// A document that is not a JSON object is treated as empty. Present values are
/// never replaced, except a `CURRENCY_RATES` that is not an object, which cannot
/// hold its required subkeys. Idempotent.
pub fn apply_defaults(doc: Value) -> Value {
    let mut map = match doc {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for (key, default) in default_entries() {
        map.entry(key).or_insert(default);
    }

    if let Some(rates) = map.get_mut("CURRENCY_RATES") {
        if !rates.is_object() {
            *rates = Value::Object(Map::new());
        }
        if let Value::Object(rates) = rates {
            for scope in CURRENCY_RATE_SCOPES {
                rates.entry(scope).or_insert_with(|| json!({}));
            }
        }
    }

    Value::Object(map)
}

/// Builds the document to persist from a freshly decoded one.
///
/// Every top-level key the decoder produced is kept exactly as decoded. Stored keys
/// the decoder did not touch are carried over, then missing canonical keys are
/// defaulted.
pub fn merge_for_write(decoded: Value, stored: &Value) -> Value {
    let mut merged = match decoded {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if let Value::Object(stored) = stored {
        for (key, value) in stored {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    apply_defaults(Value::Object(merged))
}
