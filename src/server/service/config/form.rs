//! Configuration form decoding.
//!
//! The editor posts a flat list of `name=value` pairs. Names come in three shapes:
//!
//! - a fixed allow-list of top-level scalars (`SHOP_CHANNEL_ID`, `CURRENCY_NAME`, ...)
//! - bracket paths such as `CURRENCY_RATES[default][MESSAGES_PER_COIN]`
//! - repeated groups submitted as parallel `name[]` arrays, zipped by position
//!
//! Decoding is a pure function of the submitted pairs.

use serde_json::{json, Map, Value};

use crate::server::{
    error::form::FormError,
    model::shop_role::ShopRoleRow,
    service::config::{
        coerce::{coerce_document, parse_identifier, parse_integer, parse_snowflake},
        document::{parse_bracket_path, set_path},
    },
};

/// Top-level keys accepted as plain field names. A blank submission is written as
/// null so it clears the stored value; a field that is not submitted is left out.
pub const FLAT_FIELDS: [&str; 6] = [
    "SHOP_CHANNEL_ID",
    "LEADERBOARD_THREAD_ID",
    "LEADERBOARD_CHANNEL_ID",
    "LOG_CHANNEL_ID",
    "CURRENCY_NAME",
    "CURRENCY_EMOJI",
];

/// Submitted form fields in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Last value submitted under `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value of the repeated field `name[]`, in submission order.
    pub fn list(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| field.strip_suffix("[]") == Some(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Result of decoding a configuration form.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedConfig {
    /// The configuration document, coerced and with every row group present.
    pub document: Value,
    /// Submitted shop role rows, in order. Not part of the stored document.
    pub shop_roles: Vec<ShopRoleRow>,
}

/// Decodes a submitted configuration form.
///
/// Row groups are always emitted, so an editor with every row removed clears the
/// group instead of leaving the stored one in place. Group output replaces anything
/// a bracket path wrote at the same location.
///
/// # Returns
/// - `Ok(DecodedConfig)` - Fully coerced document plus shop role rows
/// - `Err(FormError)` - A numeric field is malformed; nothing should be persisted
pub fn decode(form: &FormSubmission) -> Result<DecodedConfig, FormError> {
    let mut document = Value::Object(Map::new());

    for name in FLAT_FIELDS {
        if let Some(value) = form.value(name) {
            let leaf = match value.trim() {
                "" => Value::Null,
                value => Value::String(value.to_string()),
            };
            set_path(&mut document, &[name], leaf);
        }
    }

    for (name, value) in form.fields() {
        if !name.contains('[') || name.ends_with("[]") {
            continue;
        }
        let Some(path) = parse_bracket_path(name) else {
            continue;
        };
        let leaf = if value.trim().is_empty() {
            Value::Null
        } else {
            Value::String(value.clone())
        };
        set_path(&mut document, &path, leaf);
    }

    let categories = decode_rate_rows(form, "category")?;
    set_path(&mut document, &["CURRENCY_RATES", "categories"], categories);

    let channels = decode_rate_rows(form, "channel")?;
    set_path(&mut document, &["CURRENCY_RATES", "channels"], channels);

    set_path(&mut document, &["QNA_DATA"], decode_qna_rows(form));

    let ping_roles = decode_id_list(form, "custom_role_ping_roles")?;
    set_path(&mut document, &["CUSTOM_ROLE_PING_ROLES"], ping_roles);

    coerce_document(&mut document)?;

    Ok(DecodedConfig {
        document,
        shop_roles: decode_shop_role_rows(form)?,
    })
}

fn row_field(group: &str, index: usize) -> String {
    format!("{}[{}]", group, index)
}

fn optional_integer(raw: Option<&&str>, field: &str) -> Result<Value, FormError> {
    match raw.map(|value| value.trim()) {
        None | Some("") => Ok(Value::Null),
        Some(value) => parse_integer(value, field).map(Value::from),
    }
}

/// Zips `<prefix>_id[]`, `<prefix>_messages_per_coin[]` and
/// `<prefix>_reactions_per_coin[]` into a map keyed by id. Rows with a blank id are
/// skipped.
fn decode_rate_rows(form: &FormSubmission, prefix: &str) -> Result<Value, FormError> {
    let ids_field = format!("{}_id", prefix);
    let messages_field = format!("{}_messages_per_coin", prefix);
    let reactions_field = format!("{}_reactions_per_coin", prefix);

    let ids = form.list(&ids_field);
    let messages = form.list(&messages_field);
    let reactions = form.list(&reactions_field);

    let mut rates = Map::new();
    for (index, id) in ids.iter().enumerate() {
        if id.trim().is_empty() {
            continue;
        }
        let id = parse_identifier(id, &row_field(&ids_field, index))?;

        rates.insert(
            id.to_string(),
            json!({
                "MESSAGES_PER_COIN": optional_integer(
                    messages.get(index),
                    &row_field(&messages_field, index),
                )?,
                "REACTIONS_PER_COIN": optional_integer(
                    reactions.get(index),
                    &row_field(&reactions_field, index),
                )?,
            }),
        );
    }

    Ok(Value::Object(rates))
}

/// Zips the QnA arrays into a list of entries. The label is the row's presence
/// sentinel.
fn decode_qna_rows(form: &FormSubmission) -> Value {
    let labels = form.list("qna_label");
    let emojis = form.list("qna_emoji");
    let descriptions = form.list("qna_description");
    let answers = form.list("qna_answer");

    let text = |values: &[&str], index: usize| -> String {
        values
            .get(index)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    let entries = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.trim().is_empty())
        .map(|(index, label)| {
            json!({
                "label": label.trim(),
                "emoji": text(emojis.as_slice(), index),
                "description": text(descriptions.as_slice(), index),
                "answer": text(answers.as_slice(), index),
            })
        })
        .collect();

    Value::Array(entries)
}

fn decode_id_list(form: &FormSubmission, name: &str) -> Result<Value, FormError> {
    let mut ids = Vec::new();
    for (index, raw) in form.list(name).iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        ids.push(parse_identifier(raw, &row_field(name, index))?);
    }
    Ok(Value::Array(ids))
}

/// Zips the shop role arrays into rows, one per submitted name.
///
/// Rows are passed through even when blank; the reconciler decides which ones count.
fn decode_shop_role_rows(form: &FormSubmission) -> Result<Vec<ShopRoleRow>, FormError> {
    let ids = form.list("shop_role_id");
    let names = form.list("shop_role_name");
    let prices = form.list("shop_role_price");
    let colors = form.list("shop_role_color");

    let mut rows = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let role_id = match ids.get(index).map(|id| id.trim()) {
            None | Some("") => None,
            Some(id) => Some(parse_snowflake(id, &row_field("shop_role_id", index))?),
        };
        let price = match prices.get(index).map(|price| price.trim()) {
            None | Some("") => None,
            Some(price) => Some(parse_integer(price, &row_field("shop_role_price", index))?),
        };

        rows.push(ShopRoleRow {
            role_id,
            name: name.trim().to_string(),
            price,
            color: colors
                .get(index)
                .map(|color| color.trim().to_string())
                .unwrap_or_default(),
        });
    }

    Ok(rows)
}
