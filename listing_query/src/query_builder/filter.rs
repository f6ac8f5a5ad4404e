//! Clause types
//!
//! A clause is a single parameterized predicate that belongs either before
//! grouping (WHERE) or after aggregation (HAVING).

use crate::query_builder::binder::Placeholder;

/// Comparison operators used by listing filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,    // =
    Gte,   // >=
    Lte,   // <=
    ILike, // ILIKE (case insensitive)
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Gte => ">=",
            QueryOperator::Lte => "<=",
            QueryOperator::ILike => "ILIKE",
        }
    }
}

/// Where a clause is evaluated relative to GROUP BY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseGroup {
    /// Pre-aggregation, rendered under WHERE
    Where,
    /// Post-aggregation, rendered under HAVING
    Having,
}

/// `<expression> <operator> <placeholder>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub group: ClauseGroup,
    pub expression: &'static str,
    pub operator: QueryOperator,
    pub placeholder: Placeholder,
}

impl Clause {
    pub fn new(
        group: ClauseGroup,
        expression: &'static str,
        operator: QueryOperator,
        placeholder: Placeholder,
    ) -> Self {
        Self {
            group,
            expression,
            operator,
            placeholder,
        }
    }

    pub fn to_sql(&self) -> String {
        format!(
            "{} {} {}",
            self.expression,
            self.operator.to_sql(),
            self.placeholder
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::binder::ParameterBinder;

    #[test]
    fn test_operator_to_sql() {
        assert_eq!(QueryOperator::Eq.to_sql(), "=");
        assert_eq!(QueryOperator::Gte.to_sql(), ">=");
        assert_eq!(QueryOperator::Lte.to_sql(), "<=");
        assert_eq!(QueryOperator::ILike.to_sql(), "ILIKE");
    }

    #[test]
    fn test_clause_to_sql() {
        let mut binder = ParameterBinder::new();
        binder.bind("%van%");
        let placeholder = binder.bind(4);

        let clause = Clause::new(
            ClauseGroup::Having,
            "AVG(rating)",
            QueryOperator::Gte,
            placeholder,
        );
        assert_eq!(clause.to_sql(), "AVG(rating) >= $2");
        assert_eq!(clause.group, ClauseGroup::Having);
    }
}
