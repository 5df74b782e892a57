use chumsky::{prelude::*, text::*};

use crate::ast::{Interval, Sign, TimeUnit};
use crate::tokens::*;

use super::operator::operator;
use super::utils::*;

fn sign() -> impl Psr<Sign> {
    just(SIGN_PLUS)
        .to(Sign::Plus)
        .or(just(SIGN_MINUS).to(Sign::Minus))
}

fn time_unit() -> impl Psr<TimeUnit> {
    choice((
        just(UNIT_SECOND).to(TimeUnit::Second),
        just(UNIT_MINUTE).to(TimeUnit::Minute),
        just(UNIT_HOUR).to(TimeUnit::Hour),
        just(UNIT_DAY).to(TimeUnit::Day),
        just(UNIT_YEAR).to(TimeUnit::Year),
    ))
    .labelled("time unit")
}

/// `[operator] [sign] amount unit`, with optional whitespace between the parts.
pub fn interval() -> impl Psr<Interval> {
    operator()
        .or_not()
        .then_ignore(whitespace())
        .then(sign().or_not())
        .then_ignore(whitespace())
        .then(unsigned_integer())
        .then_ignore(whitespace())
        .then(time_unit())
        .map(|(((operator, sign), amount), unit)| Interval {
            operator,
            sign,
            amount,
            unit,
        })
        .labelled("interval")
}
