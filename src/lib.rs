//! # LodgeHaus
//!
//! PostgreSQL data-access layer for a short-term property rental service: user
//! lookups, property and reservation queries, and a filtered listing search built
//! from optional criteria with correctly numbered bound parameters.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lodgehaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "lightbnb".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let lodgehaus = LodgeHaus::new(config).await?;
//!     let listings = lodgehaus.listings();
//!
//!     let criteria = FilterCriteria::new().city("van").minimum_rating(4);
//!     for listing in listings.search_properties(&criteria, Some(5)).await? {
//!         println!("{} ({:?})", listing.property.title, listing.average_rating);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod store;
pub mod traits;

pub use crate::core::LodgeHaus;
pub use errors::LodgeHausError;
pub use store::ListingStore;
pub use traits::{PropertyCatalog, UserDirectory};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, QueryConfig};

// Re-export the query builder crate
pub use listing_query;

pub use async_trait;
pub use sqlx;
