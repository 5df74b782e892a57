use crate::{query::Query, schema::Catalog, Options};

use super::{context::RenderContext, rendering::Render};

/// Renders query state as SQL text. Rendering is a pure function of the query, the catalog and the
/// options.
pub struct Formatter<'a> {
    options: &'a Options,
    catalog: &'a Catalog,
}

impl<'a> Formatter<'a> {
    pub fn new(options: &'a Options, catalog: &'a Catalog) -> Self {
        Self { options, catalog }
    }

    /// An absent query renders as the empty string.
    pub fn render(&self, query: Option<&Query>) -> String {
        match query {
            None => String::new(),
            Some(query) => {
                let cx = RenderContext::new(self.options, self.catalog);
                format!("{};", query.render(&cx))
            }
        }
    }
}
