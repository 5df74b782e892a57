use indexmap::IndexMap;

use crate::{
    sql::{Dialect, Markup, Oracle},
    utils::FlexMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierResolution {
    Strict,
    #[default]
    Flexible,
}

/// Maps a table name to the alias it should be shown with. Supplied by the host page; any
/// `Fn(&str) -> Option<String>` closure will do.
pub trait AliasResolver {
    fn alias_for(&self, table: &str) -> Option<String>;
}

impl<F> AliasResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn alias_for(&self, table: &str) -> Option<String> {
        self(table)
    }
}

pub struct Options {
    pub dialect: Box<dyn Dialect>,
    /// Prefix for every table reference, e.g. `app` in `app.users`.
    pub schema_name: Option<String>,
    pub markup: Markup,
    pub identifier_resolution: IdentifierResolution,
    pub show_where_in_button: bool,
    /// When absent, the aliases declared in the schema descriptor are used.
    pub alias_resolver: Option<Box<dyn AliasResolver>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dialect: Box::new(Oracle()),
            schema_name: None,
            markup: Markup::default(),
            identifier_resolution: IdentifierResolution::default(),
            show_where_in_button: true,
            alias_resolver: None,
        }
    }
}

impl Options {
    pub fn resolve_identifier<'b, T>(
        &self,
        map: &'b IndexMap<String, T>,
        identifier: &str,
    ) -> Option<(&'b String, &'b T)> {
        match self.identifier_resolution {
            IdentifierResolution::Strict => map.get_key_value(identifier),
            IdentifierResolution::Flexible => map.flex_get_full(identifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_resolve_flexibly_by_default() {
        let options = Options::default();
        assert_eq!(options.identifier_resolution, IdentifierResolution::Flexible);

        let mut map = IndexMap::new();
        map.insert("nq_owner".to_string(), 1);
        assert_eq!(
            options.resolve_identifier(&map, "NQ Owner"),
            Some((&"nq_owner".to_string(), &1))
        );

        let strict = Options {
            identifier_resolution: IdentifierResolution::Strict,
            ..Options::default()
        };
        assert_eq!(strict.resolve_identifier(&map, "NQ Owner"), None);
        assert_eq!(
            strict.resolve_identifier(&map, "nq_owner"),
            Some((&"nq_owner".to_string(), &1))
        );
    }
}
