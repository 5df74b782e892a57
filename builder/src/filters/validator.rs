use qbuilder_parser::{
    parse_date_comparison, parse_interval, parse_number, parse_number_comparison,
    tokens::NOT_NULL_MARKER,
};
use tracing::warn;

use crate::{
    errors::{msg, Error, Result},
    query::{ColumnFilter, FilterKind, Slot},
    schema::{Catalog, ColumnType},
};

/// Turns what the user typed into a column's filter box into a typed filter.
pub struct FilterValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> FilterValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Fails with a validation error when `input` does not fit the column's declared type, and
    /// with a not-found error when the column does not exist.
    pub fn validate(
        &self,
        table: &str,
        column: &str,
        input: &str,
        table_alias: Option<&str>,
    ) -> Result<ColumnFilter> {
        let column_type = self.catalog.column_type(table, column)?;
        let kind = classify(column_type, input)?;
        Ok(ColumnFilter::new(
            Slot::new(table, column, table_alias),
            kind,
            input,
        ))
    }
}

pub fn classify(column_type: &ColumnType, input: &str) -> Result<FilterKind> {
    if input.is_empty() || input == NOT_NULL_MARKER {
        return Ok(FilterKind::Null {
            negated: input == NOT_NULL_MARKER,
        });
    }

    if column_type.is_numeric() {
        if let Ok(comparison) = parse_number_comparison(input) {
            return Ok(FilterKind::NumberComparison {
                operator: comparison.operator,
                number: comparison.number,
            });
        }
        return parse_number(input)
            .map(|value| FilterKind::Plain { value })
            .map_err(|_| Error::Validation(msg::invalid_number()));
    }

    if column_type.is_temporal() {
        if let Ok(interval) = parse_interval(input) {
            return Ok(FilterKind::TimestampInterval {
                operator: interval.operator_or_default(),
                sign: interval.sign_or_default(),
                amount: interval.amount,
                unit: interval.unit,
            });
        }
        return parse_date_comparison(input)
            .map(|comparison| FilterKind::TimestampDate {
                operator: comparison.operator_or_default(),
                date: comparison.date,
            })
            .map_err(|_| Error::Validation(msg::invalid_timestamp()));
    }

    if !column_type.is_text() {
        warn!(%column_type, "no validation for column type, treating input as text");
    }
    Ok(FilterKind::Plain {
        value: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use qbuilder_parser::ast::{Date, Operator, Sign, TimeUnit};

    use crate::tests::test_utils::test_catalog;

    use super::*;

    fn kind(column_type: &str, input: &str) -> Result<FilterKind> {
        classify(&ColumnType::from(column_type), input)
    }

    #[test]
    fn test_null_filters() {
        assert_eq!(kind("int", ""), Ok(FilterKind::Null { negated: false }));
        assert_eq!(kind("datetime", "!"), Ok(FilterKind::Null { negated: true }));
        assert_eq!(kind("varchar", "!"), Ok(FilterKind::Null { negated: true }));
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(
            kind("int", ">= 5"),
            Ok(FilterKind::NumberComparison {
                operator: Operator::Gte,
                number: "5".to_string()
            })
        );
        assert_eq!(
            kind("decimal", "-1.5"),
            Ok(FilterKind::Plain {
                value: "-1.5".to_string()
            })
        );
        assert_eq!(
            kind("tinyint", "abc"),
            Err(Error::Validation("Invalid number".to_string()))
        );
        for loose in [".5", "5.", "+5", "1e3"] {
            assert_eq!(
                kind("decimal", loose),
                Ok(FilterKind::Plain {
                    value: loose.to_string()
                })
            );
        }
        assert!(kind("number", "5 6").is_err());
        assert!(kind("int", "> .5").is_err());
    }

    #[test]
    fn test_interval_defaults() {
        assert_eq!(
            kind("datetime", "+2h"),
            Ok(FilterKind::TimestampInterval {
                operator: Operator::Lt,
                sign: Sign::Plus,
                amount: 2,
                unit: TimeUnit::Hour
            })
        );
        assert_eq!(
            kind("timestamp(6)", "-50s"),
            Ok(FilterKind::TimestampInterval {
                operator: Operator::Gt,
                sign: Sign::Minus,
                amount: 50,
                unit: TimeUnit::Second
            })
        );
        assert_eq!(
            kind("datetime", "<= 3d"),
            Ok(FilterKind::TimestampInterval {
                operator: Operator::Lte,
                sign: Sign::Plus,
                amount: 3,
                unit: TimeUnit::Day
            })
        );
    }

    #[test]
    fn test_date_input() {
        assert_eq!(
            kind("datetime", "2024-01-31"),
            Ok(FilterKind::TimestampDate {
                operator: Operator::Eq,
                date: Date {
                    year: 2024,
                    month: 1,
                    day: 31
                }
            })
        );
        assert_eq!(
            kind("datetime", "yesterday"),
            Err(Error::Validation("Invalid timestamp expression".to_string()))
        );
    }

    #[test]
    fn test_text_and_unknown_types_are_plain() {
        assert_eq!(
            kind("varchar", "O'Brien"),
            Ok(FilterKind::Plain {
                value: "O'Brien".to_string()
            })
        );
        assert_eq!(
            kind("enum('a','b')", "a"),
            Ok(FilterKind::Plain {
                value: "a".to_string()
            })
        );
    }

    #[test]
    fn test_validate_keeps_input_and_slot() {
        let catalog = test_catalog();
        let validator = FilterValidator::new(&catalog);
        let filter = validator
            .validate("nq_draw", "owner_id", " > 3", Some("d2"))
            .unwrap();
        assert_eq!(filter.slot, Slot::new("nq_draw", "owner_id", Some("d2")));
        assert_eq!(filter.input_value, " > 3");
        assert!(matches!(
            validator.validate("nq_draw", "nope", "1", None),
            Err(Error::NotFound(_))
        ));
    }
}
