use chumsky::{prelude::*, text::*};

use crate::ast::NumberComparison;
use crate::tokens::*;

use super::operator::operator;
use super::utils::*;

fn number() -> impl Psr<String> {
    just(SIGN_MINUS)
        .or_not()
        .chain::<char, _, _>(digits::<char, Simple<char>>(10))
        .chain::<char, _, _>(
            just(DECIMAL_POINT)
                .chain(digits::<char, Simple<char>>(10))
                .or_not()
                .map(Option::unwrap_or_default),
        )
        .collect::<String>()
        .labelled("number")
}

fn sign() -> impl Psr<char> {
    just(SIGN_PLUS).or(just(SIGN_MINUS))
}

/// Anything a user would type as a standalone number: an optional sign, digits on either side of
/// an optional decimal point, and an optional exponent (`+5`, `.5`, `5.`, `1e3`).
pub fn loose_number() -> impl Psr<String> {
    let fraction = just(DECIMAL_POINT).chain::<char, _, _>(
        digits::<char, Simple<char>>(10)
            .or_not()
            .map(Option::unwrap_or_default),
    );
    let mantissa = digits::<char, Simple<char>>(10)
        .chain::<char, _, _>(fraction.or_not().map(Option::unwrap_or_default))
        .or(just(DECIMAL_POINT).chain::<char, _, _>(digits::<char, Simple<char>>(10)));
    let exponent = just(EXPONENT)
        .or(just(EXPONENT.to_ascii_uppercase()))
        .chain::<char, _, _>(sign().or_not())
        .chain::<char, _, _>(digits::<char, Simple<char>>(10));
    sign()
        .or_not()
        .chain::<char, _, _>(mantissa)
        .chain::<char, _, _>(exponent.or_not().map(Option::unwrap_or_default))
        .collect::<String>()
        .labelled("number")
}

pub fn number_comparison() -> impl Psr<NumberComparison> {
    operator()
        .then_ignore(whitespace())
        .then(number())
        .map(|(operator, number)| NumberComparison { operator, number })
}
