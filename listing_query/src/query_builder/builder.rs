//! Property listing query builder
//!
//! Produces the statement text and its ordered parameters for a property
//! search. Pure: no I/O, no shared state, every call starts from scratch.

use crate::errors::QueryError;
use crate::query_builder::binder::ParameterBinder;
use crate::query_builder::compiler::ClauseCompiler;
use crate::query_builder::criteria::FilterCriteria;
use crate::query_builder::sql_generation::{SqlGenerator, PROPERTY_LISTING_TEMPLATE};
use serde_json::Value;

/// Result size used when the caller does not pass one
pub const DEFAULT_LIMIT: i64 = 10;

/// SQL text with `$n` placeholders and the values they refer to
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Reject zero and negative limits
pub fn validate_limit(limit: i64) -> Result<i64, QueryError> {
    if limit > 0 {
        Ok(limit)
    } else {
        Err(QueryError::InvalidLimit(limit))
    }
}

/// Query builder for filtered property listings
#[derive(Debug, Clone)]
pub struct PropertyFilterQuery {
    criteria: FilterCriteria,
    limit: i64,
}

impl PropertyFilterQuery {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the maximum number of rows
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Build the statement. Filter values are validated before anything is assembled.
    pub fn build_statement(&self) -> Result<Statement, QueryError> {
        let limit = validate_limit(self.limit)?;

        let active = self.criteria.normalize();
        let mut binder = ParameterBinder::new();
        let clauses = ClauseCompiler::compile_all(&active, &mut binder)?;

        // Bound after every filter so its index is always the last one.
        let limit_placeholder = binder.bind(limit);

        let sql = SqlGenerator::assemble(&PROPERTY_LISTING_TEMPLATE, &clauses, limit_placeholder);

        Ok(Statement {
            sql,
            params: binder.into_values(),
        })
    }

    /// Build complete query parts (SQL, Values)
    pub fn build(&self) -> Result<(String, Vec<Value>), QueryError> {
        self.build_statement().map(Statement::into_parts)
    }
}

/// Build the filtered property listing statement for `criteria`
pub fn build_property_filter_query(
    criteria: &FilterCriteria,
    limit: i64,
) -> Result<(String, Vec<Value>), QueryError> {
    PropertyFilterQuery::new(criteria.clone()).limit(limit).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_limit() {
        let (sql, params) = PropertyFilterQuery::new(FilterCriteria::new()).build().unwrap();
        assert!(sql.ends_with("LIMIT $1"));
        assert_eq!(params, vec![json!(DEFAULT_LIMIT)]);
    }

    #[test]
    fn test_invalid_limit() {
        assert_eq!(validate_limit(1), Ok(1));
        assert_eq!(
            build_property_filter_query(&FilterCriteria::new(), 0),
            Err(QueryError::InvalidLimit(0))
        );
        assert_eq!(
            build_property_filter_query(&FilterCriteria::new(), -5),
            Err(QueryError::InvalidLimit(-5))
        );
    }

    #[test]
    fn test_invalid_filter_fails_before_assembly() {
        let criteria = FilterCriteria::new().city("van").owner_id("someone");
        let err = build_property_filter_query(&criteria, 10).unwrap_err();
        assert!(matches!(err, QueryError::InvalidFilterValue { .. }));
        assert_eq!(err.to_string(), "Invalid value for filter 'owner_id': 'someone' is not an integer");
    }

    #[test]
    fn test_statement_into_parts() {
        let statement = PropertyFilterQuery::new(FilterCriteria::new().owner_id(3))
            .limit(2)
            .build_statement()
            .unwrap();

        assert!(statement.sql.contains("WHERE properties.owner_id = $1"));
        let (sql, params) = statement.clone().into_parts();
        assert_eq!(sql, statement.sql);
        assert_eq!(params, vec![json!(3), json!(2)]);
    }
}
