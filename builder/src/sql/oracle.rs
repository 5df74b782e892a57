use qbuilder_parser::ast::Date;

use super::{dialect::Dialect, markup::Markup};

const DATE_FORMAT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oracle();

impl Dialect for Oracle {
    fn name(&self) -> &'static str {
        "Oracle"
    }

    fn now(&self) -> &'static str {
        "sysdate"
    }

    /// Oracle wants the interval amount as a string: `INTERVAL '2' HOUR`.
    fn interval_amount(&self, amount: u64, markup: Markup) -> String {
        markup.string_literal(&self.quote_string(&amount.to_string()))
    }

    fn truncate_to_date(&self, expr: &str) -> String {
        format!("TRUNC({expr})")
    }

    fn date(&self, date: &Date, markup: Markup) -> String {
        let literal = markup.string_literal(&self.quote_string(&date.to_iso()));
        let format = markup.string_literal(&self.quote_string(DATE_FORMAT));
        format!("TO_DATE({literal},{format})")
    }
}
