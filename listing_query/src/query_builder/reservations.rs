//! Guest reservation statement
//!
//! Fixed shape: one guest id and a limit. Shares the assembler and the limit
//! rule with the listing search but not its criteria handling.

use crate::errors::QueryError;
use crate::query_builder::binder::ParameterBinder;
use crate::query_builder::builder::{validate_limit, Statement};
use crate::query_builder::filter::{Clause, ClauseGroup, QueryOperator};
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::sql_generation::{SqlGenerator, StatementTemplate};

/// A guest's reservations with the rating of the reserved property, earliest first
pub const GUEST_RESERVATION_TEMPLATE: StatementTemplate = StatementTemplate {
    base: "SELECT reservations.id, reservations.property_id, properties.title, \
           properties.thumbnail_photo_url, properties.cost_per_night, \
           reservations.start_date, reservations.end_date, \
           AVG(rating)::float8 AS average_rating \
           FROM reservations \
           JOIN properties ON reservations.property_id = properties.id \
           JOIN property_reviews ON properties.id = property_reviews.property_id",
    group_by: &["properties.id", "reservations.id"],
    order_by: &[("reservations.start_date", SortOrder::Asc)],
};

pub fn build_guest_reservations_query(guest_id: i32, limit: i64) -> Result<Statement, QueryError> {
    let limit = validate_limit(limit)?;

    let mut binder = ParameterBinder::new();
    let guest = Clause::new(
        ClauseGroup::Where,
        "reservations.guest_id",
        QueryOperator::Eq,
        binder.bind(guest_id),
    );
    let limit_placeholder = binder.bind(limit);

    Ok(Statement {
        sql: SqlGenerator::assemble(&GUEST_RESERVATION_TEMPLATE, &[guest], limit_placeholder),
        params: binder.into_values(),
    })
}
