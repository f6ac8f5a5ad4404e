//! Statement assembly
//!
//! Joins compiled clauses into the fixed statement skeleton. Empty clause
//! groups drop their keyword entirely.

use crate::query_builder::binder::Placeholder;
use crate::query_builder::filter::{Clause, ClauseGroup};
use crate::query_builder::ordering::SortOrder;

/// Fixed parts of a grouped, ordered and limited SELECT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTemplate {
    /// SELECT ... FROM ... JOIN ...
    pub base: &'static str,
    pub group_by: &'static [&'static str],
    pub order_by: &'static [(&'static str, SortOrder)],
}

/// Properties joined with their reviews, cheapest first
pub const PROPERTY_LISTING_TEMPLATE: StatementTemplate = StatementTemplate {
    base: "SELECT properties.*, AVG(rating)::float8 AS average_rating \
           FROM properties \
           JOIN property_reviews ON properties.id = property_reviews.property_id",
    group_by: &["properties.id"],
    order_by: &[("properties.cost_per_night", SortOrder::Asc)],
};

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build the full statement text
    pub fn assemble(template: &StatementTemplate, clauses: &[Clause], limit: Placeholder) -> String {
        let parts = [
            template.base.to_string(),
            Self::build_clause_group("WHERE", clauses, ClauseGroup::Where),
            Self::build_group_by_clause(template.group_by),
            Self::build_clause_group("HAVING", clauses, ClauseGroup::Having),
            Self::build_order_clause(template.order_by),
            Self::build_limit_clause(limit),
        ];

        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `<keyword> a AND b ...` for the clauses of one group, or "" when it has none
    pub fn build_clause_group(keyword: &str, clauses: &[Clause], group: ClauseGroup) -> String {
        let conditions: Vec<String> = clauses
            .iter()
            .filter(|clause| clause.group == group)
            .map(Clause::to_sql)
            .collect();

        if conditions.is_empty() {
            String::new()
        } else {
            format!("{} {}", keyword, conditions.join(" AND "))
        }
    }

    pub fn build_group_by_clause(fields: &[&str]) -> String {
        if fields.is_empty() {
            return String::new();
        }
        format!("GROUP BY {}", fields.join(", "))
    }

    pub fn build_order_clause(order_by: &[(&str, SortOrder)]) -> String {
        if order_by.is_empty() {
            return String::new();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    pub fn build_limit_clause(limit: Placeholder) -> String {
        format!("LIMIT {}", limit)
    }
}
