use qbuilder_parser::ast::Date;

use crate::errors::{msg, Error, Result};

use super::{markup::Markup, MySql, Oracle};

/// The engine-specific parts of the generated SQL. Only date and time syntax differs between the
/// supported engines.
pub trait Dialect {
    fn name(&self) -> &'static str;

    /// Quote a string for use in SQL.
    fn quote_string(&self, string: &str) -> String {
        format!("'{}'", string.replace('\'', "''"))
    }

    /// The expression for the current point in time
    fn now(&self) -> &'static str;

    /// Render the amount of an `INTERVAL` literal
    fn interval_amount(&self, amount: u64, markup: Markup) -> String;

    /// Render an expression truncating a timestamp to its date
    fn truncate_to_date(&self, expr: &str) -> String;

    /// Render a date literal
    fn date(&self, date: &Date, markup: Markup) -> String;
}

/// `"MySQL"` (any case) selects MySQL syntax, `"Oracle"` selects Oracle syntax.
pub fn dialect_from_name(name: &str) -> Result<Box<dyn Dialect>> {
    match name.to_ascii_lowercase().as_str() {
        "mysql" => Ok(Box::new(MySql())),
        "oracle" => Ok(Box::new(Oracle())),
        _ => Err(Error::Config(msg::unknown_dialect(name))),
    }
}
