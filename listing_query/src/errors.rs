use crate::query_builder::criteria::FilterKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Invalid value for filter '{key}': {reason}")]
    InvalidFilterValue { key: FilterKey, reason: String },

    #[error("Invalid limit: {0} (must be a positive integer)")]
    InvalidLimit(i64),
}

impl QueryError {
    /// Malformed input for a recognized filter key
    pub fn invalid_filter(key: FilterKey, reason: impl Into<String>) -> Self {
        Self::InvalidFilterValue {
            key,
            reason: reason.into(),
        }
    }

    /// The filter key that caused the error, if any
    pub fn filter_key(&self) -> Option<FilterKey> {
        match self {
            Self::InvalidFilterValue { key, .. } => Some(*key),
            Self::InvalidLimit(_) => None,
        }
    }
}
