//! Error types for topology operations

use thiserror::Error;

/// Failures raised by the hierarchy traversal guard.
///
/// These never originate from a visit callback; callback errors are handed
/// back to the caller untouched. The caller's error type absorbs these
/// through `From<HierarchyError>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// An interface appeared again below itself while descending
    #[error("Cycle detected in interface hierarchy at {interface_name:?}")]
    CycleDetected { interface_name: String },

    /// Descent went deeper than the configured limit
    #[error("Interface hierarchy deeper than {limit} levels at {interface_name:?}")]
    DepthLimitExceeded { interface_name: String, limit: usize },
}

/// Errors that can occur in topology operations
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Lookup produced no result
    #[error("{what} not found")]
    NotFound { what: String },

    /// Hierarchy traversal aborted by its guard
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    /// Record could not be decoded
    #[error("Invalid interface record: {0}")]
    InvalidRecord(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TopologyError {
    /// Creates a not found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Wraps a failure to encode records.
    ///
    /// The `From<serde_json::Error>` conversion is for decoding and treats
    /// data errors as bad records, so encoders use this instead.
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }

    /// Returns true for [`TopologyError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, TopologyError::NotFound { .. })
    }

    /// Returns true when traversal stopped on a parent-reference cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(
            self,
            TopologyError::Hierarchy(HierarchyError::CycleDetected { .. })
        )
    }
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;

impl From<serde_json::Error> for TopologyError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            TopologyError::InvalidRecord(err.to_string())
        } else {
            TopologyError::Serialization(err.to_string())
        }
    }
}
