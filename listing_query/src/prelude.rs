//! Convenience re-exports for common listing-query usage

// Error types
pub use crate::errors::QueryError;

// Query building
pub use crate::query_builder::{
    build_guest_reservations_query,
    build_property_filter_query,
    validate_limit,
    FilterCriteria,
    FilterKey,
    PropertyFilterQuery,
    Statement,
    DEFAULT_LIMIT,
};

pub use serde_json::{json, Value};
