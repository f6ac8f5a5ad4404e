//! Listing store
//!
//! Executes statements against the pool and maps rows into models. Driver
//! failures are returned as [`LodgeHausError::QueryExecution`] with the
//! original `sqlx::Error` attached.

use crate::errors::LodgeHausError;
use crate::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
use crate::traits::{PropertyCatalog, UserDirectory};
use async_trait::async_trait;
use config::QueryConfig;
use listing_query::{
    build_guest_reservations_query, FilterCriteria, PropertyFilterQuery, Statement,
};
use sqlx::PgPool;
use sqlx::postgres::PgRow;

const GET_USER_BY_EMAIL_SQL: &str = "SELECT * FROM users WHERE LOWER(email) = LOWER($1)";

const GET_USER_BY_ID_SQL: &str = "SELECT * FROM users WHERE id = $1";

const INSERT_USER_SQL: &str =
    "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *";

const INSERT_PROPERTY_SQL: &str = "INSERT INTO properties (\
     owner_id, title, description, thumbnail_photo_url, cover_photo_url, cost_per_night, \
     street, city, province, post_code, country, \
     parking_spaces, number_of_bathrooms, number_of_bedrooms\
     ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING *";

// Integers that fit INT4 bind as INT4 so they compare cleanly against INTEGER columns.
macro_rules! bind_json_param {
    ($query:expr, $param:expr) => {
        match $param {
            serde_json::Value::String(s) => $query.bind(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => $query.bind(b),
            serde_json::Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

/// Data-access store for users, properties and reservations
#[derive(Debug, Clone)]
pub struct ListingStore {
    db_pool: PgPool,
    query_config: QueryConfig,
}

impl ListingStore {
    pub fn new(db_pool: PgPool, query_config: QueryConfig) -> Self {
        Self {
            db_pool,
            query_config,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.db_pool
    }

    fn effective_limit(&self, limit: Option<i64>) -> i64 {
        limit.unwrap_or(self.query_config.default_limit)
    }

    /// Run a built statement and map every row
    async fn fetch_statement<T>(
        &self,
        operation: &'static str,
        statement: Statement,
    ) -> Result<Vec<T>, LodgeHausError>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let Statement { sql, params } = statement;
        debug_log!(operation, params = params.len(), "executing: {}", sql);

        let mut query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            query = bind_json_param!(query, param);
        }

        let rows = query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| LodgeHausError::query_execution(operation, e))?;

        trace_log!(operation, rows = rows.len(), "statement returned");
        Ok(rows)
    }
}

#[async_trait]
impl UserDirectory for ListingStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, LodgeHausError> {
        debug_log!("get_user_with_email");
        sqlx::query_as::<_, User>(GET_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| LodgeHausError::query_execution("get_user_with_email", e))
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, LodgeHausError> {
        debug_log!(id, "get_user_with_id");
        sqlx::query_as::<_, User>(GET_USER_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| LodgeHausError::query_execution("get_user_with_id", e))
    }

    async fn add_user(&self, user: NewUser) -> Result<User, LodgeHausError> {
        let created = sqlx::query_as::<_, User>(INSERT_USER_SQL)
            .bind(user.name)
            .bind(user.email)
            .bind(user.password)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| LodgeHausError::query_execution("add_user", e))?;

        debug_log!(id = created.id, "user created");
        Ok(created)
    }
}

#[async_trait]
impl PropertyCatalog for ListingStore {
    async fn search_properties(
        &self,
        criteria: &FilterCriteria,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, LodgeHausError> {
        let statement = PropertyFilterQuery::new(criteria.clone())
            .limit(self.effective_limit(limit))
            .build_statement()?;

        self.fetch_statement("search_properties", statement).await
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property, LodgeHausError> {
        let created = sqlx::query_as::<_, Property>(INSERT_PROPERTY_SQL)
            .bind(property.owner_id)
            .bind(property.title)
            .bind(property.description)
            .bind(property.thumbnail_photo_url)
            .bind(property.cover_photo_url)
            .bind(property.cost_per_night)
            .bind(property.street)
            .bind(property.city)
            .bind(property.province)
            .bind(property.post_code)
            .bind(property.country)
            .bind(property.parking_spaces)
            .bind(property.number_of_bathrooms)
            .bind(property.number_of_bedrooms)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| LodgeHausError::query_execution("add_property", e))?;

        debug_log!(id = created.id, owner_id = created.owner_id, "property created");
        Ok(created)
    }

    async fn get_guest_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, LodgeHausError> {
        let statement = build_guest_reservations_query(guest_id, self.effective_limit(limit))?;
        self.fetch_statement("get_guest_reservations", statement).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_property_placeholders() {
        for index in 1..=14 {
            assert!(INSERT_PROPERTY_SQL.contains(&format!("${}", index)));
        }
        assert!(!INSERT_PROPERTY_SQL.contains("$15"));
        assert!(INSERT_PROPERTY_SQL.contains("(owner_id, title,"));
        assert!(INSERT_PROPERTY_SQL.contains("number_of_bedrooms) VALUES"));
    }

    #[test]
    fn test_user_lookup_ignores_email_case() {
        assert!(GET_USER_BY_EMAIL_SQL.contains("LOWER(email) = LOWER($1)"));
    }

    #[tokio::test]
    async fn test_invalid_criteria_fail_before_touching_the_pool() {
        // connect_lazy never opens a connection until a query runs
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://nobody@localhost:1/none")
            .unwrap();
        let store = ListingStore::new(pool, QueryConfig::default());

        let criteria = FilterCriteria::new().minimum_price_per_night("a lot");
        let err = store.search_properties(&criteria, None).await.unwrap_err();
        assert!(matches!(err, LodgeHausError::InvalidQuery(_)));

        let err = store.get_guest_reservations(1, Some(0)).await.unwrap_err();
        assert!(matches!(err, LodgeHausError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn test_effective_limit_uses_config_default() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://nobody@localhost:1/none")
            .unwrap();
        let store = ListingStore::new(pool, QueryConfig::new(25));

        assert_eq!(store.effective_limit(None), 25);
        assert_eq!(store.effective_limit(Some(3)), 3);
    }
}
