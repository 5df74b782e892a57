use qbuilder_parser::ast::Operator;

/// How the generated SQL is decorated. `Html` wraps keywords, literals and identifiers in
/// `<span class="sql-...">` elements for syntax highlighting and escapes text for HTML; `Plain`
/// produces bare SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    #[default]
    Html,
    Plain,
}

impl Markup {
    fn span(&self, class: &str, content: &str) -> String {
        match self {
            Markup::Html => format!(r#"<span class="{class}">{content}</span>"#),
            Markup::Plain => content.to_string(),
        }
    }

    pub fn keyword(&self, content: &str) -> String {
        self.span("sql-keyword", content)
    }

    pub fn number(&self, content: &str) -> String {
        self.span("sql-number", content)
    }

    /// Wraps text that is already valid SQL, e.g. an alias or a quoted literal.
    pub fn text(&self, content: &str) -> String {
        self.span("sql-text", content)
    }

    pub fn column(&self, name: &str) -> String {
        self.span("sql-column", name)
    }

    pub fn star(&self) -> String {
        self.span("sql-star", "*")
    }

    /// Escapes text so it survives being placed in HTML. `>` is harmless in text nodes.
    pub fn escape(&self, content: &str) -> String {
        match self {
            Markup::Html => content.replace('&', "&amp;").replace('<', "&lt;"),
            Markup::Plain => content.to_string(),
        }
    }

    /// A string literal already quoted for SQL
    pub fn string_literal(&self, quoted: &str) -> String {
        self.text(&self.escape(quoted))
    }

    pub fn operator(&self, operator: Operator) -> String {
        self.escape(operator.as_sql())
    }
}
