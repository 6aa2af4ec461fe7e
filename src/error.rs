//! Error type for the fallible helpers.

use thiserror::Error;

/// Failures surfaced by [`objects`](crate::objects) and [`arrays`](crate::arrays).
///
/// Every other operation in the crate is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required value was absent.
    ///
    /// Raised only by the `require_non_null*` family.
    #[error("{}", null_reference_display(.message))]
    NullReference {
        /// Caller-supplied detail message, empty by default.
        message: String,
    },

    /// The operation is deliberately not implemented.
    ///
    /// Raised only by single-precision float hashing.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl Error {
    /// Builds a [`NullReference`](Self::NullReference) error.
    #[must_use]
    pub fn null_reference(message: impl Into<String>) -> Self {
        Self::NullReference {
            message: message.into(),
        }
    }

    /// Returns `true` for [`NullReference`](Self::NullReference).
    #[must_use]
    pub const fn is_null_reference(&self) -> bool {
        matches!(self, Self::NullReference { .. })
    }

    /// Returns `true` for [`Unsupported`](Self::Unsupported).
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

const fn null_reference_display(message: &str) -> &str {
    if message.is_empty() {
        "required value is absent"
    } else {
        message
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
