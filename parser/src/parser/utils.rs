use chumsky::{prelude::*, text::*};

/// `Psr` is an abbreviation for "Parser". This is abbreviated because it is used in many places,
/// and we don't want it to conflict with Chumsky's `Parser` trait.
///
/// This is a utility type to reduce code duplication in types. It would be easier to write as
/// follows:
///
/// ```rs
/// pub type Psr<T> = Parser<char, T, Error = Simple<char>> + Clone + 'static;
/// ```
///
/// However, we can't do that without [trait aliases][1].
///
/// [1]: https://github.com/rust-lang/rust/issues/41517
pub trait Psr<T>: Parser<char, T, Error = Simple<char>> + Clone + 'static {}
impl<S, T> Psr<T> for S where S: Parser<char, T, Error = Simple<char>> + Clone + 'static {}

/// Wraps a parser so that it must consume the whole input, ignoring surrounding whitespace.
pub fn complete<T: 'static>(parser: impl Psr<T>) -> impl Psr<T> {
    whitespace()
        .ignore_then(parser)
        .then_ignore(whitespace())
        .then_ignore(end())
}

pub fn exactly(s: &str) -> impl Psr<String> {
    just(s.chars().collect::<Vec<char>>()).collect::<String>()
}

pub fn digits_exactly(digit_count: usize) -> impl Psr<u32> {
    filter(char::is_ascii_digit)
        .repeated()
        .exactly(digit_count)
        .collect::<String>()
        .from_str()
        .unwrapped()
}

pub fn unsigned_integer() -> impl Psr<u64> {
    digits::<char, Simple<char>>(10).try_map(|v: String, span| {
        v.parse::<u64>()
            .map_err(|_| Simple::custom(span, "integer out of range"))
    })
}
