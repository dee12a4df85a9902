//! Common error types for the utility modules
//!
//! Most utilities in this crate are total: they return a best-effort value
//! and never fail. The few that can fail return [`CommonResult`], and the
//! failure is always one of two kinds:
//!
//! | Kind | Variant | Raised by |
//! |------|---------|-----------|
//! | **Invalid input** | `InvalidInput` | unparseable dates, zero chunk size, zero cache capacity, bad helper config |
//! | **Serialization** | `Serialization` | deep clone round trips, memoize cache keys |
//!
//! Functions that degrade silently (for example `capitalize("")` returning
//! an empty string, or `format_date` passing unknown tokens through) keep
//! doing so. Error styles are deliberately not unified across functions.
//!
//! ## Composing with module-specific errors
//!
//! ```rust,ignore
//! #[derive(Debug, thiserror::Error)]
//! pub enum ConfigError {
//!     #[error("Failed to parse helper config: {0}")]
//!     Parse(String),
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//! ```

use std::fmt;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Error variants shared by every utility module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Input that a utility refuses to process
    InvalidInput { field: String, message: String, value: Option<String> },

    /// Serialization or deserialization errors
    Serialization { message: String, format: Option<String> },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message, value } => {
                if let Some(value) = value {
                    write!(f, "Invalid input for '{}' ({}): {}", field, value, message)
                } else {
                    write!(f, "Invalid input for '{}': {}", field, message)
                }
            }
            Self::Serialization { message, format } => {
                if let Some(format) = format {
                    write!(f, "Serialization error ({}): {}", format, message)
                } else {
                    write!(f, "Serialization error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl CommonError {
    /// Create an invalid input error
    pub fn invalid_input<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidInput { field: field.into(), message: message.into(), value: None }
    }

    /// Create an invalid input error carrying the rejected value
    pub fn invalid_input_with_value<F: Into<String>, M: Into<String>, V: Into<String>>(
        field: F,
        message: M,
        value: V,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }

    /// Create a simple serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization { message: message.into(), format: None }
    }

    /// Create a serialization error for a specific format
    pub fn serialization_format<S: Into<String>, F: Into<String>>(format: F, message: S) -> Self {
        Self::Serialization { message: message.into(), format: Some(format.into()) }
    }

    /// Whether this error was caused by caller input
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_format("JSON", err.to_string())
    }
}
