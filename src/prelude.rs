//! Convenience re-exports for common LodgeHaus usage
//!
//! ```rust
//! use lodgehaus::prelude::*;
//! ```

// Core LodgeHaus components
pub use crate::core::LodgeHaus;
pub use crate::errors::LodgeHausError;
pub use crate::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
pub use crate::store::ListingStore;
pub use crate::traits::{PropertyCatalog, UserDirectory};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, QueryConfig};

// Query building
pub use listing_query::prelude::*;

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;

pub use sqlx::{FromRow, PgPool};
