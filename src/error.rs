//! Error type for grid index configuration and queries

use std::fmt;

/// Errors reported by [`GridIndex`](crate::GridIndex) and [`GridConfig`](crate::GridConfig)
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum GridError {
    /// A configuration value was rejected
    ///
    /// The previous configuration is left intact.
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Value that failed validation
        value: f64,
        /// Why the value is invalid
        reason: &'static str,
    },

    /// The operation needs state the index does not have
    ///
    /// Raised by `query` on a key that was never added, was deleted, or was
    /// dropped by `clear_all`. Re-add the key before querying it.
    InvalidState {
        /// Description of the missing state
        reason: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => write!(f, "invalid {parameter} {value}: {reason}"),
            Self::InvalidState { reason } => write!(f, "invalid state: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GridError>;
