use chumsky::prelude::*;

use crate::ast::Operator;
use crate::tokens::*;

use super::utils::*;

pub fn operator() -> impl Psr<Operator> {
    choice((
        // Two character
        exactly(COMPARE_GTE).to(Operator::Gte),
        exactly(COMPARE_LTE).to(Operator::Lte),
        exactly(COMPARE_NEQ).to(Operator::Neq),
        // One character
        exactly(COMPARE_GT).to(Operator::Gt),
        exactly(COMPARE_LT).to(Operator::Lt),
        exactly(COMPARE_EQ).to(Operator::Eq),
    ))
    .labelled("operator")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_prefers_longest_match() {
        assert_eq!(operator().parse(">="), Ok(Operator::Gte));
        assert_eq!(operator().parse("<>"), Ok(Operator::Neq));
        assert_eq!(operator().parse("<"), Ok(Operator::Lt));
        assert_eq!(operator().parse("="), Ok(Operator::Eq));
        assert!(operator().parse("!").is_err());
    }
}
