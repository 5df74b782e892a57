use tracing::warn;

use crate::{
    query::Query,
    schema::{Catalog, ColumnType},
    sql::Markup,
    Options,
};

use super::constants::INDENT_SPACER;

/// What rendering one level of a query needs to know about its surroundings.
pub struct RenderContext<'a> {
    pub options: &'a Options,
    pub catalog: &'a Catalog,
    level: usize,
    /// Set when the query has joins. Column references are then prefixed with their table.
    qualified: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a Options, catalog: &'a Catalog) -> Self {
        Self {
            options,
            catalog,
            level: 0,
            qualified: false,
        }
    }

    /// The context for rendering `query` at this context's level.
    pub fn for_query(&self, query: &Query) -> Self {
        Self {
            options: self.options,
            catalog: self.catalog,
            level: self.level,
            qualified: query.has_left_joins(),
        }
    }

    /// The context for a sub query nested inside this one.
    pub fn nested(&self) -> Self {
        Self {
            options: self.options,
            catalog: self.catalog,
            level: self.level + 1,
            qualified: false,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_qualified(&self) -> bool {
        self.qualified
    }

    pub fn markup(&self) -> Markup {
        self.options.markup
    }

    pub fn indent(&self) -> String {
        INDENT_SPACER.repeat(self.level)
    }

    /// `schema.table`, or the bare table name without a schema
    pub fn table_reference(&self, table: &str) -> String {
        match &self.options.schema_name {
            Some(schema) => format!("{schema}.{table}"),
            None => table.to_string(),
        }
    }

    /// The host's alias for `table`, falling back to the alias declared in the schema.
    pub fn alias_for(&self, table: &str) -> Option<String> {
        self.options
            .alias_resolver
            .as_ref()
            .and_then(|resolver| resolver.alias_for(table))
            .or_else(|| self.catalog.declared_alias(table).map(str::to_string))
    }

    /// `schema.table alias`. An explicit alias wins over the resolved one.
    pub fn table_with_alias(&self, table: &str, explicit_alias: Option<&str>) -> String {
        let reference = self.table_reference(table);
        match explicit_alias.map(str::to_string).or_else(|| self.alias_for(table)) {
            Some(alias) => format!("{reference} {alias}"),
            None => reference,
        }
    }

    /// What a column of `table` is prefixed with: the explicit alias, the resolved alias, or the
    /// table reference itself.
    pub fn table_qualifier(&self, table: &str, explicit_alias: Option<&str>) -> String {
        explicit_alias
            .map(str::to_string)
            .or_else(|| self.alias_for(table))
            .unwrap_or_else(|| self.table_reference(table))
    }

    pub fn column(&self, table: &str, explicit_alias: Option<&str>, column: &str) -> String {
        let name = self.markup().column(column);
        if self.qualified {
            format!("{}.{name}", self.table_qualifier(table, explicit_alias))
        } else {
            name
        }
    }

    /// Unknown columns render like text columns.
    pub fn column_type(&self, table: &str, column: &str) -> ColumnType {
        self.catalog
            .column_type(table, column)
            .cloned()
            .unwrap_or_else(|_| {
                warn!(table, column, "rendering filter on a column missing from the schema");
                ColumnType::Other(String::new())
            })
    }
}
