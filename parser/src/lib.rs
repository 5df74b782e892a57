mod parser;

pub mod ast;
pub mod tokens;

use chumsky::Parser;
use parser::{complete, date_comparison, interval, loose_number, number_comparison};

/// A plain number such as `42`, `-7`, `3.25`, `.5` or `1e3`, returned as typed.
pub fn parse_number(input: &str) -> Result<String, String> {
    complete(loose_number())
        .parse(input)
        .map_err(|_| "Invalid number".to_string())
}

pub fn parse_number_comparison(input: &str) -> Result<ast::NumberComparison, String> {
    complete(number_comparison())
        .parse(input)
        .map_err(|_| "Invalid number comparison".to_string())
}

pub fn parse_interval(input: &str) -> Result<ast::Interval, String> {
    complete(interval())
        .parse(input)
        .map_err(|_| "Invalid interval".to_string())
}

pub fn parse_date_comparison(input: &str) -> Result<ast::DateComparison, String> {
    complete(date_comparison())
        .parse(input)
        .map_err(|_| "Invalid date".to_string())
}

#[cfg(test)]
mod tests {
    use super::ast::*;
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Ok("42".to_string()));
        assert_eq!(parse_number(" -3.25 "), Ok("-3.25".to_string()));
        assert_eq!(parse_number("007"), Ok("007".to_string()));
        assert!(parse_number("abc").is_err());
        assert!(parse_number("4 2").is_err());
        assert_eq!(parse_number(".5"), Ok(".5".to_string()));
        assert_eq!(parse_number("5."), Ok("5.".to_string()));
        assert_eq!(parse_number("+5"), Ok("+5".to_string()));
        assert_eq!(parse_number("1e3"), Ok("1e3".to_string()));
        assert_eq!(parse_number("-2.5E-4"), Ok("-2.5E-4".to_string()));
        assert!(parse_number(".").is_err());
        assert!(parse_number("1e").is_err());
        assert!(parse_number("--1").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_parse_number_comparison() {
        assert_eq!(
            parse_number_comparison(">= 5"),
            Ok(NumberComparison {
                operator: Operator::Gte,
                number: "5".to_string()
            })
        );
        assert_eq!(
            parse_number_comparison("<>-1.5"),
            Ok(NumberComparison {
                operator: Operator::Neq,
                number: "-1.5".to_string()
            })
        );
        assert!(parse_number_comparison("5").is_err());
        assert!(parse_number_comparison("> .5").is_err());
        assert!(parse_number_comparison("=> 5").is_err());
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(
            parse_interval("+2h"),
            Ok(Interval {
                operator: None,
                sign: Some(Sign::Plus),
                amount: 2,
                unit: TimeUnit::Hour,
            })
        );
        assert_eq!(
            parse_interval("<= - 3 d"),
            Ok(Interval {
                operator: Some(Operator::Lte),
                sign: Some(Sign::Minus),
                amount: 3,
                unit: TimeUnit::Day,
            })
        );
        assert_eq!(
            parse_interval("10y").map(|i| i.unit),
            Ok(TimeUnit::Year)
        );
        assert!(parse_interval("2w").is_err());
        assert!(parse_interval("+h").is_err());
        assert!(parse_interval("99999999999999999999999s").is_err());
    }

    #[test]
    fn test_parse_date_comparison() {
        assert_eq!(
            parse_date_comparison("2024-02-29"),
            Ok(DateComparison {
                operator: None,
                date: Date {
                    year: 2024,
                    month: 2,
                    day: 29
                }
            })
        );
        assert_eq!(
            parse_date_comparison("< 2023-12-01").map(|d| d.operator),
            Ok(Some(Operator::Lt))
        );
        assert!(parse_date_comparison("2024-2-29").is_err());
        assert!(parse_date_comparison("2024-02-29 10:00").is_err());
    }
}
