use std::fmt::Display;

use thiserror::Error;

/// Core error type shared across the arraygen crates.
///
/// Every contract violation maps to the single `InvalidParameter` kind so
/// callers match on one shape: which parameter, which constraint, and the
/// offending value rendered as text.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter violates its contract.
    #[error("parameter '{name}' {constraint}: value '{value}' is invalid")]
    InvalidParameter {
        name: String,
        constraint: String,
        value: String,
    },
}

impl Error {
    /// Build an `InvalidParameter` from any displayable offending value.
    pub fn invalid_parameter(
        name: &str,
        constraint: impl Into<String>,
        value: impl Display,
    ) -> Self {
        Error::InvalidParameter {
            name: name.to_string(),
            constraint: constraint.into(),
            value: value.to_string(),
        }
    }

    /// Like [`Error::invalid_parameter`], but renders composite offending
    /// values (chance lists, count lists) as JSON.
    pub fn invalid_composite(
        name: &str,
        constraint: impl Into<String>,
        value: &impl serde::Serialize,
    ) -> Self {
        let rendered =
            serde_json::to_string(value).unwrap_or_else(|_| "<unrepresentable>".to_string());
        Error::InvalidParameter {
            name: name.to_string(),
            constraint: constraint.into(),
            value: rendered,
        }
    }
}

/// Convenience alias for results returned by the arraygen crates.
pub type Result<T> = std::result::Result<T, Error>;
