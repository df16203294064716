use thiserror::Error;

/// Validation failures raised while decoding a configuration form.
///
/// Any of these aborts the whole decode; nothing from the submission is persisted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// A field that must hold a whole number (ids, rates, prices) does not.
    #[error("'{value}' is not a valid whole number for field {field}")]
    InvalidInteger {
        /// Offending field in bracket notation, e.g. `CURRENCY_RATES[default][MESSAGES_PER_COIN]`
        field: String,
        value: String,
    },

    /// A multiplier or percentage field is not a finite decimal number.
    #[error("'{value}' is not a valid number for field {field}")]
    InvalidNumber { field: String, value: String },
}

impl FormError {
    /// Field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInteger { field, .. } | Self::InvalidNumber { field, .. } => field,
        }
    }
}
