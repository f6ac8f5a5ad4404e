//! Clause compilation
//!
//! Turns active filters into clauses, coercing each raw value to the scalar the
//! column expects and binding it through the shared [`ParameterBinder`].

use crate::errors::QueryError;
use crate::query_builder::binder::ParameterBinder;
use crate::query_builder::criteria::{ActiveFilter, FilterKey};
use crate::query_builder::filter::{Clause, ClauseGroup, QueryOperator};
use serde_json::{Number, Value};

pub const CITY_FIELD: &str = "properties.city";
pub const OWNER_FIELD: &str = "properties.owner_id";
pub const COST_FIELD: &str = "properties.cost_per_night";
pub const AVERAGE_RATING_EXPR: &str = "AVG(rating)";

/// Prices arrive in major units and are stored in minor units
const MINOR_UNITS_PER_MAJOR: i64 = 100;

pub struct ClauseCompiler;

impl ClauseCompiler {
    /// Compile filters in the order given, binding one value per clause
    pub fn compile_all(
        filters: &[ActiveFilter<'_>],
        binder: &mut ParameterBinder,
    ) -> Result<Vec<Clause>, QueryError> {
        filters
            .iter()
            .map(|filter| Self::compile(filter, binder))
            .collect()
    }

    /// Compile a single filter. The value is coerced before anything is bound.
    pub fn compile(
        filter: &ActiveFilter<'_>,
        binder: &mut ParameterBinder,
    ) -> Result<Clause, QueryError> {
        let key = filter.key;

        let clause = match key {
            FilterKey::City => {
                let pattern = format!("%{}%", coerce_text(key, filter.value)?);
                Clause::new(
                    ClauseGroup::Where,
                    CITY_FIELD,
                    QueryOperator::ILike,
                    binder.bind(pattern),
                )
            }
            FilterKey::OwnerId => {
                let owner_id = coerce_integer(key, filter.value)?;
                Clause::new(
                    ClauseGroup::Where,
                    OWNER_FIELD,
                    QueryOperator::Eq,
                    binder.bind(owner_id),
                )
            }
            FilterKey::MinimumPricePerNight => {
                let cents = coerce_minor_units(key, filter.value)?;
                Clause::new(
                    ClauseGroup::Where,
                    COST_FIELD,
                    QueryOperator::Gte,
                    binder.bind(cents),
                )
            }
            FilterKey::MaximumPricePerNight => {
                let cents = coerce_minor_units(key, filter.value)?;
                Clause::new(
                    ClauseGroup::Where,
                    COST_FIELD,
                    QueryOperator::Lte,
                    binder.bind(cents),
                )
            }
            FilterKey::MinimumRating => {
                let rating = coerce_number(key, filter.value)?;
                Clause::new(
                    ClauseGroup::Having,
                    AVERAGE_RATING_EXPR,
                    QueryOperator::Gte,
                    binder.bind(Value::Number(rating)),
                )
            }
        };

        Ok(clause)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn coerce_text(key: FilterKey, value: &Value) -> Result<String, QueryError> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        other => Err(QueryError::invalid_filter(
            key,
            format!("expected a string, got {}", describe(other)),
        )),
    }
}

fn coerce_integer(key: FilterKey, value: &Value) -> Result<i64, QueryError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| QueryError::invalid_filter(key, format!("expected an integer, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| QueryError::invalid_filter(key, format!("'{}' is not an integer", s))),
        other => Err(QueryError::invalid_filter(
            key,
            format!("expected an integer, got {}", describe(other)),
        )),
    }
}

/// Numeric value as-is. Numeric strings are parsed, integers staying integers.
fn coerce_number(key: FilterKey, value: &Value) -> Result<Number, QueryError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Ok(Number::from(i));
            }
            s.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .ok_or_else(|| QueryError::invalid_filter(key, format!("'{}' is not a number", s)))
        }
        other => Err(QueryError::invalid_filter(
            key,
            format!("expected a number, got {}", describe(other)),
        )),
    }
}

/// Major currency units to whole minor units
fn coerce_minor_units(key: FilterKey, value: &Value) -> Result<i64, QueryError> {
    let number = coerce_number(key, value)?;

    let cents = if let Some(major) = number.as_i64() {
        major.checked_mul(MINOR_UNITS_PER_MAJOR)
    } else {
        number
            .as_f64()
            .map(|major| (major * MINOR_UNITS_PER_MAJOR as f64).round())
            .filter(|cents| cents.is_finite() && cents.abs() < i64::MAX as f64)
            .map(|cents| cents as i64)
    };

    match cents {
        Some(cents) if cents < 0 => Err(QueryError::invalid_filter(
            key,
            format!("price cannot be negative, got {}", number),
        )),
        Some(cents) => Ok(cents),
        None => Err(QueryError::invalid_filter(
            key,
            format!("price {} is out of range", number),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compile_one(key: FilterKey, value: Value) -> Result<(Clause, Vec<Value>), QueryError> {
        let mut binder = ParameterBinder::new();
        let clause = ClauseCompiler::compile(&ActiveFilter { key, value: &value }, &mut binder)?;
        Ok((clause, binder.into_values()))
    }

    #[test]
    fn test_city_is_wrapped_in_wildcards() {
        let (clause, values) = compile_one(FilterKey::City, json!("van")).unwrap();
        assert_eq!(clause.to_sql(), "properties.city ILIKE $1");
        assert_eq!(clause.group, ClauseGroup::Where);
        assert_eq!(values, vec![json!("%van%")]);
    }

    #[test]
    fn test_owner_id_accepts_numeric_string() {
        let (clause, values) = compile_one(FilterKey::OwnerId, json!("42")).unwrap();
        assert_eq!(clause.to_sql(), "properties.owner_id = $1");
        assert_eq!(values, vec![json!(42)]);
    }

    #[test]
    fn test_price_converted_to_minor_units() {
        let (clause, values) = compile_one(FilterKey::MinimumPricePerNight, json!(50)).unwrap();
        assert_eq!(clause.to_sql(), "properties.cost_per_night >= $1");
        assert_eq!(values, vec![json!(5000)]);

        let (clause, values) = compile_one(FilterKey::MaximumPricePerNight, json!("120.5")).unwrap();
        assert_eq!(clause.to_sql(), "properties.cost_per_night <= $1");
        assert_eq!(values, vec![json!(12050)]);
    }

    #[test]
    fn test_zero_price_is_bound() {
        let (_, values) = compile_one(FilterKey::MinimumPricePerNight, json!(0)).unwrap();
        assert_eq!(values, vec![json!(0)]);
    }

    #[test]
    fn test_rating_goes_to_having_unmodified() {
        let (clause, values) = compile_one(FilterKey::MinimumRating, json!(4)).unwrap();
        assert_eq!(clause.group, ClauseGroup::Having);
        assert_eq!(clause.to_sql(), "AVG(rating) >= $1");
        assert_eq!(values, vec![json!(4)]);

        let (_, values) = compile_one(FilterKey::MinimumRating, json!("3.5")).unwrap();
        assert_eq!(values, vec![json!(3.5)]);
    }

    #[test]
    fn test_invalid_values_name_the_key() {
        let err = compile_one(FilterKey::MinimumPricePerNight, json!("cheap")).unwrap_err();
        assert_eq!(err.filter_key(), Some(FilterKey::MinimumPricePerNight));

        let err = compile_one(FilterKey::OwnerId, json!(1.5)).unwrap_err();
        assert_eq!(err.filter_key(), Some(FilterKey::OwnerId));

        let err = compile_one(FilterKey::City, json!(12)).unwrap_err();
        assert_eq!(err.filter_key(), Some(FilterKey::City));

        let err = compile_one(FilterKey::MinimumRating, json!("NaN")).unwrap_err();
        assert_eq!(err.filter_key(), Some(FilterKey::MinimumRating));

        let err = compile_one(FilterKey::MinimumRating, json!([4])).unwrap_err();
        assert!(err.to_string().contains("minimum_rating"));
    }

    #[test]
    fn test_price_bounds_are_checked() {
        let err = compile_one(FilterKey::MaximumPricePerNight, json!(-10)).unwrap_err();
        assert_eq!(err.filter_key(), Some(FilterKey::MaximumPricePerNight));

        let err = compile_one(FilterKey::MinimumPricePerNight, json!(i64::MAX)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
