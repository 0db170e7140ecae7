use thiserror::Error;

use crate::enums::AbstractLevel;

/// Errors produced by the resolvers and the hierarchy builder.
#[derive(Debug, Error)]
pub enum GarError {
    /// A type code or free-form name has no matching reference entry.
    ///
    /// Recoverable by the caller: either the registry introduced a new code
    /// (reference tables need an update) or the consumer passed a bad key.
    /// Never silently defaulted.
    #[error("no {what} entry for key {key:?}")]
    NotFound { what: &'static str, key: String },

    /// A resolver was invoked for an abstract level outside its domain.
    ///
    /// This is a caller error, not a data error.
    #[error("level {level} is outside this resolver's accepted domain")]
    InvalidLevel { level: AbstractLevel },

    /// Structural violation while flattening a hierarchy chain.
    ///
    /// Carries the hierarchy id so the failing registry record can be
    /// identified and reprocessed without stopping a batch consumer.
    #[error("failed to flatten hierarchy {hierarchy_id}: {reason}")]
    BuildFailed { hierarchy_id: i64, reason: String },
}

impl GarError {
    /// Shorthand for a [`GarError::NotFound`] with a displayable key.
    pub fn not_found(what: &'static str, key: impl ToString) -> Self {
        GarError::NotFound {
            what,
            key: key.to_string(),
        }
    }

    /// Shorthand for a [`GarError::BuildFailed`].
    pub fn build_failed(hierarchy_id: i64, reason: impl Into<String>) -> Self {
        GarError::BuildFailed {
            hierarchy_id,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GarError>;
