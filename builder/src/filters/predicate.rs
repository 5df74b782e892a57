use crate::{
    query::FilterKind,
    schema::ColumnType,
    sql::{expr::SqlExpr, Dialect, Markup},
};

/// Renders `<column> <predicate>` for one filter. `column` is the already qualified and decorated
/// column reference.
pub fn render_predicate(
    kind: &FilterKind,
    column_type: &ColumnType,
    column: &str,
    dialect: &dyn Dialect,
    markup: Markup,
) -> SqlExpr {
    let content = match kind {
        FilterKind::Plain { value } => {
            let literal = if column_type.is_numeric() {
                markup.number(&markup.escape(value))
            } else {
                markup.string_literal(&dialect.quote_string(value))
            };
            format!("{column} = {literal}")
        }
        FilterKind::Null { negated: false } => format!("{column} {}", markup.keyword("IS NULL")),
        FilterKind::Null { negated: true } => format!("{column} {}", markup.keyword("IS NOT NULL")),
        FilterKind::NumberComparison { operator, number } => format!(
            "{column} {} {}",
            markup.operator(*operator),
            markup.number(number)
        ),
        FilterKind::TimestampInterval {
            operator,
            sign,
            amount,
            unit,
        } => format!(
            "{column} {} {} {} {} {} {}",
            markup.operator(*operator),
            dialect.now(),
            sign.as_sql(),
            markup.keyword("INTERVAL"),
            dialect.interval_amount(*amount, markup),
            unit.as_sql()
        ),
        FilterKind::TimestampDate { operator, date } => format!(
            "{} {} {}",
            dialect.truncate_to_date(column),
            markup.operator(*operator),
            dialect.date(date, markup)
        ),
    };
    SqlExpr::comparison(content)
}
