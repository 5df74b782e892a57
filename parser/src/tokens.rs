pub const COMPARE_EQ: &str = "=";
pub const COMPARE_NEQ: &str = "<>";
pub const COMPARE_GT: &str = ">";
pub const COMPARE_GTE: &str = ">=";
pub const COMPARE_LT: &str = "<";
pub const COMPARE_LTE: &str = "<=";

pub const SIGN_PLUS: char = '+';
pub const SIGN_MINUS: char = '-';

pub const DECIMAL_POINT: char = '.';
pub const EXPONENT: char = 'e';
pub const DATE_SEPARATOR: char = '-';

pub const UNIT_SECOND: char = 's';
pub const UNIT_MINUTE: char = 'm';
pub const UNIT_HOUR: char = 'h';
pub const UNIT_DAY: char = 'd';
pub const UNIT_YEAR: char = 'y';

/// Typed alone into a filter input, this means "IS NOT NULL". An empty input means "IS NULL".
pub const NOT_NULL_MARKER: &str = "!";
