use std::fmt::{Display, Formatter};

use crate::query::Conjunction;

#[derive(Debug, Default, Clone)]
pub struct SqlExpr {
    pub content: String,
    pub precedence: SqlExprPrecedence,
}

impl SqlExpr {
    pub fn comparison(content: String) -> SqlExpr {
        SqlExpr {
            content,
            precedence: SqlExprPrecedence::Comparison,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn parenthesize(&mut self) {
        self.content = format!("({})", self.content);
        self.precedence = SqlExprPrecedence::Atom;
    }

    pub fn for_precedence(mut self, precedence: SqlExprPrecedence) -> SqlExpr {
        if precedence > self.precedence {
            self.parenthesize();
        }
        self
    }
}

impl Display for SqlExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SqlExprPrecedence {
    /// A literal value, a column name, a function call, or parentheses.
    #[default]
    Atom = 0,
    /// `=` `<>` `>` `>=` `<` `<=` `IS` `IS NOT` `IN`
    Comparison = -3,
    /// `AND`
    LogicalAnd = -5,
    /// `OR`
    LogicalOr = -6,
}

/// A set of conditions joined by `AND` or `OR`. `keyword` is the already decorated conjunction.
pub fn condition_set(
    conditions: impl IntoIterator<Item = SqlExpr>,
    conjunction: Conjunction,
    keyword: &str,
) -> SqlExpr {
    let precedence = match conjunction {
        Conjunction::And => SqlExprPrecedence::LogicalAnd,
        Conjunction::Or => SqlExprPrecedence::LogicalOr,
    };
    let separator = format!(" {keyword} ");
    SqlExpr {
        content: conditions
            .into_iter()
            .filter(|e| !e.is_empty())
            .map(|c| c.for_precedence(precedence).content)
            .collect::<Vec<_>>()
            .join(&separator),
        precedence,
    }
}
