//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod binder;
pub mod builder;
pub mod compiler;
pub mod criteria;
pub mod filter;
pub mod ordering;
pub mod reservations;
pub mod sql_generation;



pub use binder::{ParameterBinder, Placeholder};
pub use builder::{
    build_property_filter_query, validate_limit, PropertyFilterQuery, Statement, DEFAULT_LIMIT,
};
pub use compiler::ClauseCompiler;
pub use criteria::{is_provided, ActiveFilter, FilterCriteria, FilterKey};
pub use filter::{Clause, ClauseGroup, QueryOperator};
pub use ordering::SortOrder;
pub use reservations::{build_guest_reservations_query, GUEST_RESERVATION_TEMPLATE};
pub use sql_generation::{SqlGenerator, StatementTemplate, PROPERTY_LISTING_TEMPLATE};
