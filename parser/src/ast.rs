use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    Neq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
}

impl Operator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Sign {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Year,
}

impl TimeUnit {
    pub fn as_sql(&self) -> &'static str {
        match self {
            TimeUnit::Second => "SECOND",
            TimeUnit::Minute => "MINUTE",
            TimeUnit::Hour => "HOUR",
            TimeUnit::Day => "DAY",
            TimeUnit::Year => "YEAR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn to_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// `>= 5`, `<> -1.5`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberComparison {
    pub operator: Operator,
    /// Kept as text so that the literal is rendered exactly as it was typed.
    pub number: String,
}

/// A point in time relative to now, e.g. `+2h`, `-50s` or `>= 3d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub operator: Option<Operator>,
    pub sign: Option<Sign>,
    pub amount: u64,
    pub unit: TimeUnit,
}

impl Interval {
    pub fn sign_or_default(&self) -> Sign {
        self.sign.unwrap_or(Sign::Plus)
    }

    /// Without an explicit operator, `+n` means "before now plus n" and `-n` means "after now
    /// minus n".
    pub fn operator_or_default(&self) -> Operator {
        self.operator.unwrap_or(match self.sign_or_default() {
            Sign::Plus => Operator::Lt,
            Sign::Minus => Operator::Gt,
        })
    }
}

/// `2024-01-31` or `< 2024-01-31`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateComparison {
    pub operator: Option<Operator>,
    pub date: Date,
}

impl DateComparison {
    pub fn operator_or_default(&self) -> Operator {
        self.operator.unwrap_or(Operator::Eq)
    }
}
