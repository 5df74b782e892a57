use serde::{Deserialize, Serialize};

use super::filter::ColumnFilter;

/// One level of the query being built. Nested levels live in `sub_query`, owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Table in the `FROM` clause
    pub table: String,
    /// Explicit projection. Empty means `SELECT *`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<ColumnSelect>,
    #[serde(rename = "leftJoin", skip_serializing_if = "Vec::is_empty")]
    pub left_joins: Vec<LeftJoin>,
    #[serde(rename = "where", skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ColumnFilter>,
    /// `WHERE <filter column> IN (<sub query>)`
    #[serde(flatten)]
    pub sub_query: Option<SubQuery>,
    /// Adds `COUNT(1) AS total` and groups by the selected columns.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub aggregate: bool,
}

impl Query {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: vec![],
            left_joins: vec![],
            filters: vec![],
            sub_query: None,
            aggregate: false,
        }
    }

    pub fn has_left_joins(&self) -> bool {
        !self.left_joins.is_empty()
    }
}

/// The filter column and the nested query are set and cleared together, so they travel as one
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuery {
    #[serde(rename = "subqueryFilterColumn")]
    pub filter_column: String,
    #[serde(rename = "sub")]
    pub query: Box<Query>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSelect {
    pub table: String,
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_alias: Option<String>,
}

impl ColumnSelect {
    pub fn new(table: &str, column: &str, manual_alias: Option<&str>) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
            manual_alias: manual_alias.map(str::to_string),
        }
    }
}

/// `LEFT JOIN target [alias] ON target.column = source.column [AND <join variant filter>]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeftJoin {
    pub source_table: String,
    pub source_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_table_alias: Option<String>,
    pub target_table: String,
    pub target_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_table_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_variant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_variant_filter: Option<String>,
}

impl LeftJoin {
    pub fn new(source_table: &str, source_column: &str, target_table: &str, target_column: &str) -> Self {
        Self {
            source_table: source_table.to_string(),
            source_column: source_column.to_string(),
            source_table_alias: None,
            target_table: target_table.to_string(),
            target_column: target_column.to_string(),
            target_table_alias: None,
            join_variant_name: None,
            join_variant_filter: None,
        }
    }

    pub fn connects(
        &self,
        source_table: &str,
        target_table: &str,
        source_alias: Option<&str>,
        target_alias: Option<&str>,
    ) -> bool {
        self.source_table == source_table
            && self.target_table == target_table
            && self.source_table_alias.as_deref() == source_alias
            && self.target_table_alias.as_deref() == target_alias
    }
}
