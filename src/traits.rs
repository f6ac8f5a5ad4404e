//! Trait definitions
//!
//! This module defines the data-access operations exposed to callers.

use crate::errors::LodgeHausError;
use crate::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
use async_trait::async_trait;
use listing_query::FilterCriteria;

/// User lookups and registration
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by email, ignoring case
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, LodgeHausError>;

    /// Find a user by id
    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, LodgeHausError>;

    /// Insert a user and return the stored row
    async fn add_user(&self, user: NewUser) -> Result<User, LodgeHausError>;
}

/// Property listings and reservations
#[async_trait]
pub trait PropertyCatalog: Send + Sync {
    /// Search listings. `limit` falls back to the configured default.
    async fn search_properties(
        &self,
        criteria: &FilterCriteria,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, LodgeHausError>;

    /// Insert a property and return the stored row
    async fn add_property(&self, property: NewProperty) -> Result<Property, LodgeHausError>;

    /// Reservations made by a guest, earliest first
    async fn get_guest_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, LodgeHausError>;
}
