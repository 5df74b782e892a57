use itertools::Itertools;
use tracing::trace;

use crate::{
    filters::render_predicate,
    query::{group_filters, ColumnFilter, ColumnSelect, FilterGroup, LeftJoin, Query, SubQuery},
    sql::{
        expr::{condition_set, SqlExpr, SqlExprPrecedence},
        Markup,
    },
};

use super::{
    constants::{COUNT_ALIAS, GROUP_BY_ITEM_SEPARATOR, JOIN_ALIAS_PLACEHOLDER, SELECT_ITEM_SEPARATOR},
    context::RenderContext,
};

pub trait Render {
    fn render(&self, cx: &RenderContext) -> String;
}

impl Render for Query {
    fn render(&self, cx: &RenderContext) -> String {
        trace!(table = %self.table, level = cx.level(), "rendering query");
        let cx = cx.for_query(self);
        let markup = cx.markup();
        let indent = cx.indent();
        let newline = format!("\n{indent}");

        let columns = self.select.iter().map(|s| s.render(&cx)).collect_vec();
        let projection = if self.aggregate {
            columns
                .iter()
                .cloned()
                .chain([count_total(markup)])
                .join(SELECT_ITEM_SEPARATOR)
        } else if columns.is_empty() {
            markup.star()
        } else {
            columns.join(SELECT_ITEM_SEPARATOR)
        };
        let mut sql = format!("{indent}{} {projection}", markup.keyword("SELECT"));

        let from = if cx.is_qualified() {
            cx.table_with_alias(&self.table, None)
        } else {
            cx.table_reference(&self.table)
        };
        sql.push_str(&format!("{newline}{} {from}", markup.keyword("FROM")));

        for join in &self.left_joins {
            sql.push_str(&newline);
            sql.push_str(&join.render(&cx));
        }

        let mut conditions = vec![];
        if let Some(sub_query) = &self.sub_query {
            conditions.push(render_where_in(&self.table, sub_query, &cx));
        }
        let groups = group_filters(&self.filters);
        let condition_count = conditions.len() + groups.len();
        for group in &groups {
            let mut expr = render_group(group, &cx);
            if condition_count > 1 {
                expr = expr.for_precedence(SqlExprPrecedence::LogicalAnd);
            }
            conditions.push(expr.to_string());
        }
        for (i, condition) in conditions.iter().enumerate() {
            let keyword = if i == 0 {
                markup.keyword("WHERE")
            } else {
                format!("  {}", markup.keyword("AND"))
            };
            sql.push_str(&format!("{newline}{keyword} {condition}"));
        }

        if self.aggregate && !columns.is_empty() {
            sql.push_str(&format!(
                "{newline}{} {}",
                markup.keyword("GROUP BY"),
                columns.join(GROUP_BY_ITEM_SEPARATOR)
            ));
        }
        sql
    }
}

impl Render for ColumnSelect {
    fn render(&self, cx: &RenderContext) -> String {
        cx.column(&self.table, self.manual_alias.as_deref(), &self.column)
    }
}

impl Render for LeftJoin {
    fn render(&self, cx: &RenderContext) -> String {
        let markup = cx.markup();
        let target_alias = self.target_table_alias.as_deref();
        let source_alias = self.source_table_alias.as_deref();
        let keyword = removable_join_keyword(self, markup);
        let target = cx.table_with_alias(&self.target_table, target_alias);
        let on = format!(
            "{} = {}",
            cx.column(&self.target_table, target_alias, &self.target_column),
            cx.column(&self.source_table, source_alias, &self.source_column),
        );
        let variant_filter = self
            .join_variant_filter
            .as_ref()
            .map(|filter| {
                let qualifier = cx.table_qualifier(&self.target_table, target_alias);
                let filter = filter.replace(JOIN_ALIAS_PLACEHOLDER, &qualifier);
                format!(" {} {}", markup.keyword("AND"), markup.escape(&filter))
            })
            .unwrap_or_default();
        format!(
            "{keyword} {target}\n{}  {} {on}{variant_filter}",
            cx.indent(),
            markup.keyword("ON"),
        )
    }
}

fn render_filter(filter: &ColumnFilter, cx: &RenderContext) -> SqlExpr {
    let slot = &filter.slot;
    let column = cx.column(&slot.table, slot.table_alias.as_deref(), &slot.column);
    let column_type = cx.column_type(&slot.table, &slot.column);
    render_predicate(
        &filter.kind,
        &column_type,
        &column,
        cx.options.dialect.as_ref(),
        cx.markup(),
    )
}

fn render_group(group: &FilterGroup, cx: &RenderContext) -> SqlExpr {
    let keyword = cx.markup().keyword(group.conjunction.as_sql());
    condition_set(
        group.filters.iter().map(|f| render_filter(f, cx)),
        group.conjunction,
        &keyword,
    )
}

fn render_where_in(table: &str, sub_query: &SubQuery, cx: &RenderContext) -> String {
    let markup = cx.markup();
    format!(
        "{} {} (\n{}\n{})",
        cx.column(table, None, &sub_query.filter_column),
        markup.keyword("IN"),
        sub_query.query.render(&cx.nested()),
        cx.indent(),
    )
}

fn count_total(markup: Markup) -> String {
    markup.keyword(&format!(
        "COUNT({}) AS {}",
        markup.number("1"),
        markup.text(COUNT_ALIAS)
    ))
}

/// In HTML, the `LEFT JOIN` keyword carries the identity of its join so that the page can offer to
/// remove it.
fn removable_join_keyword(join: &LeftJoin, markup: Markup) -> String {
    let keyword = markup.keyword("LEFT JOIN");
    match markup {
        Markup::Plain => keyword,
        Markup::Html => {
            let attribute = |name: &str, value: &Option<String>| {
                value
                    .as_ref()
                    .map(|v| format!(r#" data-{name}="{}""#, escape_attribute(v)))
                    .unwrap_or_default()
            };
            format!(
                r#"<span class="lj" data-src-table="{}" data-trg-table="{}"{}{}>{keyword}</span>"#,
                escape_attribute(&join.source_table),
                escape_attribute(&join.target_table),
                attribute("src-alias", &join.source_table_alias),
                attribute("trg-alias", &join.target_table_alias),
            )
        }
    }
}

fn escape_attribute(value: &str) -> String {
    Markup::Html.escape(value).replace('"', "&quot;")
}
