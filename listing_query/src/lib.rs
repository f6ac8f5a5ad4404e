//! Listing Query - filtered property search statements for LodgeHaus
//!
//! This crate turns optional search criteria into a single parameterized
//! PostgreSQL statement and its ordered parameter list. It performs no I/O.

pub mod errors;
pub mod prelude;
pub mod query_builder;

pub use errors::QueryError;
pub use query_builder::{
    build_guest_reservations_query,
    build_property_filter_query,
    is_provided,
    FilterCriteria,
    FilterKey,
    PropertyFilterQuery,
    Statement,
    DEFAULT_LIMIT,
};
