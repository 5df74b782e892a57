use qbuilder_parser::ast::{Date, Operator, Sign, TimeUnit};
use serde::Serialize;

/// The column a filter applies to. Filters sharing a slot are rendered as one group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub table: String,
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_alias: Option<String>,
}

impl Slot {
    pub fn new(table: &str, column: &str, table_alias: Option<&str>) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
            table_alias: table_alias.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum FilterKind {
    /// Equality with a raw value; quoting depends on the column type.
    #[serde(rename = "PLAIN")]
    Plain { value: String },
    /// `IS NULL`, or `IS NOT NULL` when negated
    #[serde(rename = "NULL_FILTER")]
    Null { negated: bool },
    #[serde(rename = "NUMBER_COMPARISON")]
    NumberComparison { operator: Operator, number: String },
    /// Comparison against now plus or minus an interval
    #[serde(rename = "TIMESTAMP_INTERVAL")]
    TimestampInterval {
        operator: Operator,
        sign: Sign,
        amount: u64,
        unit: TimeUnit,
    },
    /// Comparison of the column's date part against a calendar date
    #[serde(rename = "TIMESTAMP_DATE_FILTER")]
    TimestampDate { operator: Operator, date: Date },
}

impl FilterKind {
    /// Equality-like filters on one column are alternatives rather than constraints.
    pub fn is_alternative(&self) -> bool {
        matches!(self, FilterKind::Plain { .. } | FilterKind::Null { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilter {
    #[serde(flatten)]
    pub slot: Slot,
    #[serde(flatten)]
    pub kind: FilterKind,
    /// What the user typed, kept for editing the filter later
    pub input_value: String,
}

impl ColumnFilter {
    pub fn new(slot: Slot, kind: FilterKind, input_value: &str) -> Self {
        Self {
            slot,
            kind,
            input_value: input_value.to_string(),
        }
    }

    /// Whether both filters constrain the same slot in the same way. The typed input is
    /// ignored: `5` and ` 5` are the same filter.
    pub fn same_filter(&self, other: &ColumnFilter) -> bool {
        self.slot == other.slot && self.kind == other.kind
    }
}
