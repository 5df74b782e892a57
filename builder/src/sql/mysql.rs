use qbuilder_parser::ast::Date;

use super::{dialect::Dialect, markup::Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MySql();

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn now(&self) -> &'static str {
        "NOW()"
    }

    fn interval_amount(&self, amount: u64, markup: Markup) -> String {
        markup.number(&amount.to_string())
    }

    fn truncate_to_date(&self, expr: &str) -> String {
        format!("DATE({expr})")
    }

    fn date(&self, date: &Date, markup: Markup) -> String {
        markup.string_literal(&self.quote_string(&date.to_iso()))
    }
}
