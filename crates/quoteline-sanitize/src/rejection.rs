//! Reasons a row is dropped.

use quoteline_types::CoercionError;
use thiserror::Error;

/// Price row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    Close,
    /// Traded volume.
    Volume,
}

impl Field {
    /// Returns the field name as it appears in output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a row was dropped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A required field was absent.
    #[error("missing {0}")]
    Missing(Field),

    /// A field could not be coerced to a number.
    #[error("invalid {field}: {source}")]
    Invalid {
        /// The offending field.
        field: Field,
        /// The coercion failure.
        source: CoercionError,
    },

    /// A price that must be strictly positive (and finite) was not.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// The offending field.
        field: Field,
        /// The value that was rejected.
        value: f64,
    },
}

impl Rejection {
    /// Returns the field the rejection refers to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Missing(field) | Self::Invalid { field, .. } | Self::NotPositive { field, .. } => {
                *field
            }
        }
    }
}
