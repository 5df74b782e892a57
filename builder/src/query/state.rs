use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::errors::{msg, Error, Result};

use super::filter::ColumnFilter;
use super::query::{ColumnSelect, LeftJoin, Query, SubQuery};

/// A column the user has interacted with during the session, kept for UI highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PastColumn {
    pub table: String,
    pub column: String,
}

impl PastColumn {
    pub fn new(table: &str, column: &str) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Current {
    #[default]
    Empty,
    Active(Query),
}

/// The query under construction plus the history of touched columns.
///
/// Every mutation other than [`QueryState::select_table`] and
/// [`QueryState::select_table_with_filter`] needs an active query and fails with a state error
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    current: Current,
    past_columns: IndexSet<PastColumn>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> Option<&Query> {
        match &self.current {
            Current::Empty => None,
            Current::Active(query) => Some(query),
        }
    }

    fn query_mut(&mut self) -> Result<&mut Query> {
        match &mut self.current {
            Current::Empty => Err(Error::State(msg::no_query())),
            Current::Active(query) => Ok(query),
        }
    }

    pub fn past_columns(&self) -> &IndexSet<PastColumn> {
        &self.past_columns
    }

    fn touch(&mut self, table: &str, column: &str) {
        self.past_columns.insert(PastColumn::new(table, column));
    }

    /// Back to the empty state, forgetting the touched columns too.
    pub fn clear_state(&mut self) {
        debug!("clearing query");
        self.current = Current::Empty;
        self.past_columns.clear();
    }

    pub fn select_table(&mut self, table: &str) {
        debug!(table, "selecting table");
        self.current = Current::Active(Query::new(table));
        self.touch(table, "");
    }

    pub fn select_table_with_filter(&mut self, table: &str, filter: ColumnFilter) {
        debug!(table, column = %filter.slot.column, "selecting table with filter");
        self.touch(table, &filter.slot.column);
        let mut query = Query::new(table);
        query.filters.push(filter);
        self.current = Current::Active(query);
    }

    pub fn add_filter(&mut self, filter: ColumnFilter) -> Result<()> {
        debug!(table = %filter.slot.table, column = %filter.slot.column, "adding filter");
        let (table, column) = (filter.slot.table.clone(), filter.slot.column.clone());
        self.query_mut()?.filters.push(filter);
        self.touch(&table, &column);
        Ok(())
    }

    /// Adds a filter to the immediate sub query.
    pub fn add_filter_to_sub_query(&mut self, filter: ColumnFilter) -> Result<()> {
        debug!(column = %filter.slot.column, "adding filter to sub query");
        let sub_query = self
            .query_mut()?
            .sub_query
            .as_mut()
            .ok_or_else(|| Error::State(msg::no_sub_query()))?;
        let table = sub_query.query.table.clone();
        let column = filter.slot.column.clone();
        sub_query.query.filters.push(filter);
        self.touch(&table, &column);
        Ok(())
    }

    /// Removes the first filter equal to the given one.
    pub fn remove_filter(&mut self, filter: &ColumnFilter) -> Result<()> {
        debug!(table = %filter.slot.table, column = %filter.slot.column, "removing filter");
        let filters = &mut self.query_mut()?.filters;
        let index = filters
            .iter()
            .position(|f| f.same_filter(filter))
            .ok_or_else(|| Error::State(msg::filter_not_found(&filter.slot.table, &filter.slot.column)))?;
        filters.remove(index);
        Ok(())
    }

    /// Replaces the first filter equal to `old` in place, keeping its position.
    pub fn replace_filter(&mut self, old: &ColumnFilter, new: ColumnFilter) -> Result<()> {
        debug!(table = %old.slot.table, column = %old.slot.column, "replacing filter");
        let filters = &mut self.query_mut()?.filters;
        let existing = filters
            .iter_mut()
            .find(|f| f.same_filter(old))
            .ok_or_else(|| Error::State(msg::filter_not_found(&old.slot.table, &old.slot.column)))?;
        *existing = new;
        Ok(())
    }

    pub fn add_left_join(&mut self, join: LeftJoin) -> Result<()> {
        debug!(
            source = %join.source_table,
            target = %join.target_table,
            variant = ?join.join_variant_name,
            "adding left join"
        );
        let target = join.target_table.clone();
        self.query_mut()?.left_joins.push(join);
        self.touch(&target, "");
        Ok(())
    }

    pub fn remove_left_join(
        &mut self,
        source_table: &str,
        target_table: &str,
        source_alias: Option<&str>,
        target_alias: Option<&str>,
    ) -> Result<()> {
        debug!(source = source_table, target = target_table, "removing left join");
        let joins = &mut self.query_mut()?.left_joins;
        let index = joins
            .iter()
            .position(|j| j.connects(source_table, target_table, source_alias, target_alias))
            .ok_or_else(|| Error::State(msg::left_join_not_found(source_table, target_table)))?;
        joins.remove(index);
        Ok(())
    }

    pub fn add_column_select(&mut self, table: &str, column: &str, manual_alias: Option<&str>) -> Result<()> {
        debug!(table, column, alias = ?manual_alias, "adding column select");
        self.query_mut()?
            .select
            .push(ColumnSelect::new(table, column, manual_alias));
        self.touch(table, column);
        Ok(())
    }

    pub fn clear_column_selects(&mut self) -> Result<()> {
        debug!("clearing column selects");
        self.query_mut()?.select.clear();
        Ok(())
    }

    pub fn set_aggregate(&mut self, aggregate: bool) -> Result<()> {
        debug!(aggregate, "setting aggregate");
        self.query_mut()?.aggregate = aggregate;
        Ok(())
    }

    /// Wraps the current query: `SELECT * FROM parent WHERE parent_column IN (SELECT column FROM
    /// current ...)`. The wrapped query loses its projection and aggregation in favour of the
    /// single linking column.
    pub fn add_super_query(&mut self, column: &str, parent_table: &str, parent_column: &str) -> Result<()> {
        debug!(column, parent_table, parent_column, "adding super query");
        let Current::Active(mut inner) = std::mem::take(&mut self.current) else {
            return Err(Error::State(msg::no_query()));
        };
        inner.select = vec![ColumnSelect::new(&inner.table, column, None)];
        inner.aggregate = false;
        let inner_table = inner.table.clone();
        let mut outer = Query::new(parent_table);
        outer.sub_query = Some(SubQuery {
            filter_column: parent_column.to_string(),
            query: Box::new(inner),
        });
        self.current = Current::Active(outer);
        self.touch(&inner_table, column);
        Ok(())
    }

    /// Restricts the current query to rows whose `column` appears in `child_table.child_column`.
    /// Replaces any existing sub query.
    pub fn add_sub_query(&mut self, column: &str, child_table: &str, child_column: &str) -> Result<()> {
        debug!(column, child_table, child_column, "adding sub query");
        let mut child = Query::new(child_table);
        child.select = vec![ColumnSelect::new(child_table, child_column, None)];
        self.query_mut()?.sub_query = Some(SubQuery {
            filter_column: column.to_string(),
            query: Box::new(child),
        });
        self.touch(child_table, child_column);
        Ok(())
    }

    pub fn current_selected_table(&self) -> Result<&str> {
        self.query()
            .map(|q| q.table.as_str())
            .ok_or_else(|| Error::State(msg::no_query()))
    }

    /// The root table followed by every table a left join connects, without duplicates.
    pub fn collect_top_level_tables(&self) -> Result<IndexSet<String>> {
        let query = self.query().ok_or_else(|| Error::State(msg::no_query()))?;
        let mut tables = IndexSet::new();
        tables.insert(query.table.clone());
        for join in &query.left_joins {
            tables.insert(join.source_table.clone());
            tables.insert(join.target_table.clone());
        }
        Ok(tables)
    }

    pub fn has_where_in_clause(&self) -> bool {
        self.query().map_or(false, |q| q.sub_query.is_some())
    }

    pub fn has_column_select(&self, table: &str, column: &str, manual_alias: Option<&str>) -> bool {
        self.query().map_or(false, |q| {
            q.select.iter().any(|s| {
                s.table == table && s.column == column && s.manual_alias.as_deref() == manual_alias
            })
        })
    }

    pub fn has_any_column_select(&self) -> bool {
        self.query().map_or(false, |q| !q.select.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{FilterKind, Slot};

    use super::*;

    fn plain(table: &str, column: &str, value: &str) -> ColumnFilter {
        ColumnFilter::new(
            Slot::new(table, column, None),
            FilterKind::Plain {
                value: value.to_string(),
            },
            value,
        )
    }

    #[test]
    fn test_mutations_need_a_query() {
        let mut state = QueryState::new();
        assert!(matches!(state.add_filter(plain("t", "c", "1")), Err(Error::State(_))));
        assert!(matches!(state.set_aggregate(true), Err(Error::State(_))));
        assert!(matches!(state.add_super_query("id", "p", "id"), Err(Error::State(_))));
        assert!(state.query().is_none());
        assert!(state.current_selected_table().is_err());
    }

    #[test]
    fn test_select_table_replaces_query() {
        let mut state = QueryState::new();
        state.select_table("a");
        state.add_filter(plain("a", "x", "1")).unwrap();
        state.select_table("b");
        let query = state.query().unwrap();
        assert_eq!(query.table, "b");
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_remove_filter_removes_first_match_only() {
        let mut state = QueryState::new();
        state.select_table("t");
        state.add_filter(plain("t", "c", "1")).unwrap();
        state.add_filter(plain("t", "c", "2")).unwrap();
        state.add_filter(plain("t", "c", "1")).unwrap();
        state.remove_filter(&plain("t", "c", "1")).unwrap();
        let values: Vec<&str> = state
            .query()
            .unwrap()
            .filters
            .iter()
            .map(|f| f.input_value.as_str())
            .collect();
        assert_eq!(values, ["2", "1"]);
    }

    #[test]
    fn test_remove_missing_filter_fails() {
        let mut state = QueryState::new();
        state.select_table("t");
        let result = state.remove_filter(&plain("t", "c", "1"));
        assert!(matches!(result, Err(Error::State(_))));
    }

    #[test]
    fn test_replace_filter_keeps_position() {
        let mut state = QueryState::new();
        state.select_table("t");
        state.add_filter(plain("t", "a", "1")).unwrap();
        state.add_filter(plain("t", "b", "2")).unwrap();
        state
            .replace_filter(&plain("t", "a", "1"), plain("t", "a", "3"))
            .unwrap();
        let filters = &state.query().unwrap().filters;
        assert_eq!(filters[0].input_value, "3");
        assert_eq!(filters[1].input_value, "2");
    }

    #[test]
    fn test_super_query_wraps_current_query() {
        let mut state = QueryState::new();
        state.select_table("child");
        state.add_column_select("child", "name", None).unwrap();
        state.set_aggregate(true).unwrap();
        state.add_filter(plain("child", "x", "1")).unwrap();
        state.add_super_query("parent_id", "parent", "id").unwrap();

        let outer = state.query().unwrap();
        assert_eq!(outer.table, "parent");
        let sub = outer.sub_query.as_ref().unwrap();
        assert_eq!(sub.filter_column, "id");
        assert_eq!(sub.query.table, "child");
        assert_eq!(sub.query.select, vec![ColumnSelect::new("child", "parent_id", None)]);
        assert!(!sub.query.aggregate);
        assert_eq!(sub.query.filters.len(), 1);
        assert!(state.has_where_in_clause());
    }

    #[test]
    fn test_sub_query_filter_goes_to_sub_query() {
        let mut state = QueryState::new();
        state.select_table("parent");
        assert!(matches!(
            state.add_filter_to_sub_query(plain("child", "x", "1")),
            Err(Error::State(_))
        ));
        state.add_sub_query("id", "child", "parent_id").unwrap();
        state.add_filter_to_sub_query(plain("child", "x", "1")).unwrap();
        let outer = state.query().unwrap();
        assert!(outer.filters.is_empty());
        assert_eq!(outer.sub_query.as_ref().unwrap().query.filters.len(), 1);
        assert!(state.past_columns().contains(&PastColumn::new("child", "x")));
    }

    #[test]
    fn test_left_joins_and_top_level_tables() {
        let mut state = QueryState::new();
        state.select_table("a");
        state.add_left_join(LeftJoin::new("a", "b_id", "b", "id")).unwrap();
        state.add_left_join(LeftJoin::new("a", "c_id", "c", "id")).unwrap();
        state.add_left_join(LeftJoin::new("c", "b_id", "b", "id")).unwrap();
        let tables: Vec<String> = state.collect_top_level_tables().unwrap().into_iter().collect();
        assert_eq!(tables, ["a", "b", "c"]);

        state.remove_left_join("a", "c", None, None).unwrap();
        assert_eq!(state.query().unwrap().left_joins.len(), 2);
        assert!(state.remove_left_join("a", "c", None, None).is_err());
    }

    #[test]
    fn test_column_selects() {
        let mut state = QueryState::new();
        state.select_table("t");
        assert!(!state.has_any_column_select());
        state.add_column_select("t", "a", Some("x")).unwrap();
        assert!(state.has_column_select("t", "a", Some("x")));
        assert!(!state.has_column_select("t", "a", None));
        state.clear_column_selects().unwrap();
        assert!(!state.has_any_column_select());
    }

    #[test]
    fn test_clear_state_resets_everything() {
        let mut state = QueryState::new();
        state.select_table_with_filter("t", plain("t", "c", "1"));
        assert!(state.past_columns().contains(&PastColumn::new("t", "c")));
        state.clear_state();
        assert!(state.query().is_none());
        assert!(state.past_columns().is_empty());
    }
}
