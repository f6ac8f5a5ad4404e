//! Core LodgeHaus functionality
//!
//! This module contains the main LodgeHaus struct, which owns the connection
//! pool and hands out stores bound to it.

use sqlx::PgPool;
use std::time::Duration;

use crate::errors::LodgeHausError;
use crate::store::ListingStore;
use config::{AppConfig, DatabaseConfig, QueryConfig};

/// Owns the database pool and the query defaults
#[derive(Debug, Clone)]
pub struct LodgeHaus {
    pool: PgPool,
    query_config: QueryConfig,
}

impl LodgeHaus {
    /// Create new LodgeHaus with database connection and default query settings
    pub async fn new(config: DatabaseConfig) -> Result<Self, LodgeHausError> {
        Self::connect(config, QueryConfig::default()).await
    }

    /// Create from a full application configuration
    pub async fn from_config(config: AppConfig) -> Result<Self, LodgeHausError> {
        config.validate()?;
        Self::connect(config.database, config.query).await
    }

    async fn connect(
        config: DatabaseConfig,
        query_config: QueryConfig,
    ) -> Result<Self, LodgeHausError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options
            .connect(&connection_string)
            .await
            .map_err(LodgeHausError::Connection)?;

        debug_log!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "database pool ready"
        );

        Ok(Self::with_pool(pool, query_config))
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool, query_config: QueryConfig) -> Self {
        Self { pool, query_config }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn query_config(&self) -> &QueryConfig {
        &self.query_config
    }

    /// Store for users, properties and reservations sharing this pool
    pub fn listings(&self) -> ListingStore {
        ListingStore::new(self.pool.clone(), self.query_config.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), LodgeHausError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| LodgeHausError::query_execution("health_check", e))?;
        Ok(())
    }
}
