//! Error types for the LodgeHaus crate
//!
//! This module contains all error types that can be returned by LodgeHaus operations.

use config::ConfigError;
use listing_query::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LodgeHausError {
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Driver failure while running a statement. The driver error is kept as-is.
    #[error("Query execution error in {operation}: {source}")]
    QueryExecution {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LodgeHausError {
    pub fn query_execution(operation: &'static str, source: sqlx::Error) -> Self {
        Self::QueryExecution { operation, source }
    }

    /// The underlying driver error, if this came from the database
    pub fn driver_error(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Connection(e) | Self::QueryExecution { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_query::FilterKey;

    #[test]
    fn test_query_execution_keeps_driver_error() {
        let err = LodgeHausError::query_execution("search_properties", sqlx::Error::RowNotFound);
        assert!(matches!(err.driver_error(), Some(sqlx::Error::RowNotFound)));
        assert!(err.to_string().starts_with("Query execution error in search_properties"));
    }

    #[test]
    fn test_invalid_query_from_builder_error() {
        let err: LodgeHausError =
            QueryError::invalid_filter(FilterKey::OwnerId, "'x' is not an integer").into();
        assert!(err.driver_error().is_none());
        assert_eq!(
            err.to_string(),
            "Invalid query: Invalid value for filter 'owner_id': 'x' is not an integer"
        );
    }
}
