use tracing::debug;

use crate::{
    errors::{msg, Error, Result},
    filters::FilterValidator,
    formatter::Formatter,
    query::{ColumnFilter, LeftJoin, QueryState},
    schema::Catalog,
    Options,
};

use super::command::{Applied, Command};

/// The composition root: one catalog, one set of options and the query state of one page.
///
/// Names coming in with commands are checked against the catalog and replaced by their canonical
/// spelling before the state is touched. User input is validated before the state is touched too,
/// so a failed command leaves the session exactly as it was.
pub struct Session {
    pub(super) catalog: Catalog,
    pub(super) options: Options,
    pub(super) state: QueryState,
}

impl Session {
    pub fn new(catalog: Catalog, options: Options) -> Self {
        Self {
            catalog,
            options,
            state: QueryState::new(),
        }
    }

    pub fn from_schema_json(schema_json: &str, options: Options) -> Result<Self> {
        Ok(Self::new(Catalog::from_json(schema_json)?, options))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn sql(&self) -> String {
        Formatter::new(&self.options, &self.catalog).render(self.state.query())
    }

    /// The current query as JSON, `null` when there is none.
    pub fn state_json(&self) -> Result<String> {
        serde_json::to_string(&self.state.query()).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn apply(&mut self, command: Command) -> Result<Applied> {
        debug!(%command, "applying command");
        match &command {
            Command::ClearState => self.state.clear_state(),
            Command::SelectTable { table } => {
                let table = self.table_name(table)?;
                self.state.select_table(&table);
            }
            Command::SelectTableWithFilter {
                table,
                column,
                input,
            } => {
                let filter = self.validate(table, column, input, None)?;
                let table = filter.slot.table.clone();
                self.state.select_table_with_filter(&table, filter);
            }
            Command::AddFilter {
                table,
                column,
                table_alias,
                input,
            } => {
                let filter = self.validate(table, column, input, table_alias.as_deref())?;
                self.state.add_filter(filter)?;
            }
            Command::AddFilterToSubQuery { column, input } => {
                let sub_table = self
                    .state
                    .query()
                    .ok_or_else(|| Error::State(msg::no_query()))?
                    .sub_query
                    .as_ref()
                    .map(|sub| sub.query.table.clone())
                    .ok_or_else(|| Error::State(msg::no_sub_query()))?;
                let filter = self.validate(&sub_table, column, input, None)?;
                self.state.add_filter_to_sub_query(filter)?;
            }
            Command::RemoveFilter {
                table,
                column,
                table_alias,
                input,
            } => {
                let filter = self.validate(table, column, input, table_alias.as_deref())?;
                self.state.remove_filter(&filter)?;
            }
            Command::ReplaceFilter {
                table,
                column,
                table_alias,
                old_input,
                new_input,
            } => {
                let old = self.validate(table, column, old_input, table_alias.as_deref())?;
                let new = self.validate(table, column, new_input, table_alias.as_deref())?;
                self.state.replace_filter(&old, new)?;
            }
            Command::AddLeftJoin(join) => {
                let join = self.canonical_join(join)?;
                self.state.add_left_join(join)?;
            }
            Command::RemoveLeftJoin {
                source_table,
                target_table,
                source_table_alias,
                target_table_alias,
            } => {
                let source_table = self.table_name(source_table)?;
                let target_table = self.table_name(target_table)?;
                self.state.remove_left_join(
                    &source_table,
                    &target_table,
                    source_table_alias.as_deref(),
                    target_table_alias.as_deref(),
                )?;
            }
            Command::AddColumnSelect {
                table,
                column,
                alias,
            } => {
                let (table, column) = self.column_name(table, column)?;
                self.state.add_column_select(&table, &column, alias.as_deref())?;
            }
            Command::ClearColumnSelects => self.state.clear_column_selects()?,
            Command::SetAggregate { aggregate } => self.state.set_aggregate(*aggregate)?,
            Command::AddSuperQuery {
                column,
                parent_table,
                parent_column,
            } => {
                let current = self.state.current_selected_table()?.to_string();
                let (_, column) = self.column_name(&current, column)?;
                let (parent_table, parent_column) = self.column_name(parent_table, parent_column)?;
                self.state
                    .add_super_query(&column, &parent_table, &parent_column)?;
            }
            Command::AddSubQuery {
                column,
                child_table,
                child_column,
            } => {
                let current = self.state.current_selected_table()?.to_string();
                let (_, column) = self.column_name(&current, column)?;
                let (child_table, child_column) = self.column_name(child_table, child_column)?;
                self.state.add_sub_query(&column, &child_table, &child_column)?;
            }
        }
        Ok(Applied {
            description: command.to_string(),
            sql: self.sql(),
        })
    }

    fn table_name(&self, table: &str) -> Result<String> {
        Ok(self.catalog.resolve_table(&self.options, table)?.name.clone())
    }

    fn column_name(&self, table: &str, column: &str) -> Result<(String, String)> {
        let table = self.catalog.resolve_table(&self.options, table)?;
        let column = table.resolve_column(&self.options, column)?;
        Ok((table.name.clone(), column.to_string()))
    }

    fn validate(
        &self,
        table: &str,
        column: &str,
        input: &str,
        table_alias: Option<&str>,
    ) -> Result<ColumnFilter> {
        let (table, column) = self.column_name(table, column)?;
        FilterValidator::new(&self.catalog).validate(&table, &column, input, table_alias)
    }

    fn canonical_join(&self, join: &LeftJoin) -> Result<LeftJoin> {
        let (source_table, source_column) = self.column_name(&join.source_table, &join.source_column)?;
        let (target_table, target_column) = self.column_name(&join.target_table, &join.target_column)?;
        Ok(LeftJoin {
            source_table,
            source_column,
            target_table,
            target_column,
            ..join.clone()
        })
    }
}
