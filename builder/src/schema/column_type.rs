use std::fmt;

/// The declared type of a column, as far as filtering and quoting care about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    TinyInt,
    Decimal,
    Number,
    Varchar,
    Varchar2,
    Blob,
    Clob,
    /// Any `timestamp...` declaration, e.g. `timestamp(6) with time zone`.
    Timestamp,
    Datetime,
    /// Anything else. Treated leniently as text.
    Other(String),
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Int | ColumnType::TinyInt | ColumnType::Decimal | ColumnType::Number
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Timestamp | ColumnType::Datetime)
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ColumnType::Varchar | ColumnType::Varchar2 | ColumnType::Blob | ColumnType::Clob
        )
    }
}

impl From<&str> for ColumnType {
    fn from(declared: &str) -> Self {
        let normalized = declared.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "int" => ColumnType::Int,
            "tinyint" => ColumnType::TinyInt,
            "decimal" => ColumnType::Decimal,
            "number" => ColumnType::Number,
            "varchar" => ColumnType::Varchar,
            "varchar2" => ColumnType::Varchar2,
            "blob" => ColumnType::Blob,
            "clob" => ColumnType::Clob,
            "datetime" => ColumnType::Datetime,
            t if t.starts_with("timestamp") => ColumnType::Timestamp,
            _ => ColumnType::Other(declared.to_string()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ColumnType::Int => "int",
            ColumnType::TinyInt => "tinyint",
            ColumnType::Decimal => "decimal",
            ColumnType::Number => "number",
            ColumnType::Varchar => "varchar",
            ColumnType::Varchar2 => "varchar2",
            ColumnType::Blob => "blob",
            ColumnType::Clob => "clob",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Datetime => "datetime",
            ColumnType::Other(declared) => declared,
        };
        write!(f, "{name}")
    }
}
