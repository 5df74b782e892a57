//! Read-only views of the session used by the page to decide which menu entries to show.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::{
    errors::Result,
    query::{ColumnFilter, LeftJoin, Slot},
    schema::TableReference,
};

use super::session::Session;

const CLASS_PAST: &str = "rc-past";
const CLASS_NEW: &str = "rc-new";

/// A table whose columns can be selected, under one of the aliases it appears with in the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectableTable {
    pub table: String,
    pub manual_alias: Option<String>,
}

impl Session {
    /// The root table without alias, then every table connected by a left join, each listed once
    /// per alias it is joined under. Tables keep the order in which they first appear.
    pub fn selected_table_alias_pairs(&self) -> Result<Vec<SelectableTable>> {
        let root = self.state.current_selected_table()?;
        let mut aliases_by_table = IndexMap::<&str, IndexSet<Option<&str>>>::new();
        aliases_by_table.entry(root).or_default().insert(None);
        for join in self.left_joins() {
            aliases_by_table
                .entry(&join.source_table)
                .or_default()
                .insert(join.source_table_alias.as_deref());
            aliases_by_table
                .entry(&join.target_table)
                .or_default()
                .insert(join.target_table_alias.as_deref());
        }
        Ok(aliases_by_table
            .into_iter()
            .flat_map(|(table, aliases)| {
                aliases.into_iter().map(move |alias| SelectableTable {
                    table: table.to_string(),
                    manual_alias: alias.map(str::to_string),
                })
            })
            .collect())
    }

    pub fn has_filter_on_column(&self, table: &str, column: &str, table_alias: Option<&str>) -> bool {
        !self.filters_for(table, column, table_alias).is_empty()
    }

    /// The top-level filters on one slot, in the order they were added.
    pub fn filters_for(&self, table: &str, column: &str, table_alias: Option<&str>) -> Vec<&ColumnFilter> {
        let slot = Slot::new(table, column, table_alias);
        self.state
            .query()
            .map(|q| q.filters.iter().filter(|f| f.slot == slot).collect())
            .unwrap_or_default()
    }

    /// Whether to offer restricting the current table by a WHERE-IN sub query.
    pub fn show_where_in_action(&self) -> bool {
        self.options.show_where_in_button && !self.state.has_where_in_clause()
    }

    /// The CSS class for a related table: whether the user has been there before.
    pub fn related_column_class(&self, table: &str) -> &'static str {
        if self.state.past_columns().iter().any(|c| c.table == table) {
            CLASS_PAST
        } else {
            CLASS_NEW
        }
    }

    pub fn related_references(&self, table: &str) -> Result<Vec<TableReference>> {
        let table = self.catalog.resolve_table(&self.options, table)?;
        self.catalog.related_references(&table.name)
    }

    /// Every left join that could be added to the current query.
    ///
    /// A reference can only be joined along its join variants when it was reached in reverse,
    /// i.e. the table declaring the variants is the one being joined in. Each variant is offered
    /// until a left join with that variant exists between the same two tables. Any other reference
    /// is offered as a plain join unless both of its tables are already part of the query.
    pub fn possible_left_joins(&self) -> Result<Vec<LeftJoin>> {
        let tables = self.state.collect_top_level_tables()?;
        let existing = self.left_joins();
        let mut candidates = vec![];
        for table in &tables {
            for reference in self.catalog.related_references(table)? {
                candidates.extend(join_candidates(&reference, &tables, existing));
            }
        }
        Ok(candidates)
    }

    fn left_joins(&self) -> &[LeftJoin] {
        self.state
            .query()
            .map(|q| q.left_joins.as_slice())
            .unwrap_or_default()
    }
}

fn join_candidates(
    reference: &TableReference,
    tables: &IndexSet<String>,
    existing: &[LeftJoin],
) -> Vec<LeftJoin> {
    let plain = LeftJoin::new(
        &reference.source_table,
        &reference.source_column,
        &reference.target_table,
        &reference.target_column,
    );
    if !reference.can_apply_join_variants() {
        if tables.contains(&reference.source_table) && tables.contains(&reference.target_table) {
            return vec![];
        }
        return vec![plain];
    }
    reference
        .join_variants
        .iter()
        .filter(|variant| {
            !existing.iter().any(|join| {
                join.source_table == reference.source_table
                    && join.target_table == reference.target_table
                    && join.join_variant_name.as_deref() == Some(variant.name.as_str())
            })
        })
        .map(|variant| LeftJoin {
            target_table_alias: variant.alias.clone(),
            join_variant_name: Some(variant.name.clone()),
            join_variant_filter: Some(variant.filter.clone()),
            ..plain.clone()
        })
        .collect()
}
