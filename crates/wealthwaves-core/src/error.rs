use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WealthError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    /// A user-facing form rule was broken. `reason` is the remediation text
    /// shown next to the field; `allowed` carries any permitted values
    /// (e.g. phone digit counts).
    #[error("Validation failed: {field} — {reason}")]
    Validation {
        field: String,
        reason: String,
        allowed: Vec<u32>,
    },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Value out of range: {field} = {value}")]
    OutOfRange { field: String, value: Decimal },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl WealthError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WealthError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WealthError::Validation {
            field: field.into(),
            reason: reason.into(),
            allowed: Vec::new(),
        }
    }

    /// Text suitable for showing next to the offending form field.
    pub fn user_message(&self) -> String {
        match self {
            WealthError::InvalidInput { reason, .. } | WealthError::Validation { reason, .. } => {
                reason.clone()
            }
            WealthError::FinancialImpossibility(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Field name the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            WealthError::InvalidInput { field, .. }
            | WealthError::Validation { field, .. }
            | WealthError::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WealthError {
    fn from(e: serde_json::Error) -> Self {
        WealthError::SerializationError(e.to_string())
    }
}
