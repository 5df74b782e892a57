/// One level of sub query nesting
pub const INDENT_SPACER: &str = "    ";

/// Lines up continuation items under the first item after `SELECT `.
pub const SELECT_ITEM_SEPARATOR: &str = "\n     , ";

/// Lines up continuation items under the first item after `GROUP BY `.
pub const GROUP_BY_ITEM_SEPARATOR: &str = "\n       , ";

/// Replaced with the joined table's alias in join variant filters.
pub const JOIN_ALIAS_PLACEHOLDER: &str = "{alias}";

pub const COUNT_ALIAS: &str = "total";
