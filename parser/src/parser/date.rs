use chumsky::{prelude::*, text::*};

use crate::ast::{Date, DateComparison};
use crate::tokens::*;

use super::operator::operator;
use super::utils::*;

pub fn date() -> impl Psr<Date> {
    digits_exactly(4)
        .then_ignore(just(DATE_SEPARATOR))
        .then(digits_exactly(2))
        .then_ignore(just(DATE_SEPARATOR))
        .then(digits_exactly(2))
        .map(|((year, month), day)| Date { year, month, day })
        .labelled("date")
}

pub fn date_comparison() -> impl Psr<DateComparison> {
    operator()
        .or_not()
        .then_ignore(whitespace())
        .then(date())
        .map(|(operator, date)| DateComparison { operator, date })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date() {
        assert_eq!(
            date().parse("1999-12-31"),
            Ok(Date {
                year: 1999,
                month: 12,
                day: 31
            })
        );
        assert_eq!(
            date().parse("2001-02-03").map(|d| d.to_iso()),
            Ok("2001-02-03".to_string())
        );
        assert!(date().parse("99-12-31").is_err());
    }
}
