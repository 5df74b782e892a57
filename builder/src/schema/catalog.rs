use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{msg, Error, Result},
    Options,
};

use super::{
    column_type::ColumnType, primitive_schema::PrimitiveSchema, references::TableReference,
};

pub type TableName = String;
pub type ColumnName = String;

/// The tables the user can pick from. Immutable once built; owned by the composition root and
/// lent to everything that needs type or reference information.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: IndexMap<TableName, Table>,
}

#[derive(Debug, Clone)]
pub struct Table {
    pub name: TableName,
    /// Alias declared by the schema descriptor, used when the host supplies no alias resolver.
    pub alias: Option<String>,
    pub columns: IndexMap<ColumnName, ColumnType>,
    /// Keys are column names in this table. One column may reference several tables.
    pub references: IndexMap<ColumnName, Vec<Reference>>,
    /// Columns the menu shows emphasized
    pub highlights: Vec<ColumnName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub table: TableName,
    pub column: ColumnName,
    pub join_variants: Vec<JoinVariant>,
}

/// A named alternative condition for joining along a reference, e.g. only the `DEMO` rows of a
/// table with a discriminator column. `filter` may contain the placeholder `{alias}`, which is
/// replaced with the alias of the joined table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinVariant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub filter: String,
}

impl Catalog {
    pub fn from_json(schema_json: &str) -> Result<Self> {
        let primitive_schema = serde_json::from_str::<PrimitiveSchema>(schema_json)
            .map_err(|e| Error::Config(msg::invalid_schema_json(&e.to_string())))?;
        Catalog::try_from(primitive_schema)
    }

    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::NotFound(msg::unknown_table(name)))
    }

    /// Like [`Catalog::table`], but honors the identifier resolution configured in `options`.
    pub fn resolve_table(&self, options: &Options, name: &str) -> Result<&Table> {
        options
            .resolve_identifier(&self.tables, name)
            .map(|(_, table)| table)
            .ok_or_else(|| Error::NotFound(msg::unknown_table(name)))
    }

    pub fn all_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn columns(&self, table: &str) -> Result<&IndexMap<ColumnName, ColumnType>> {
        Ok(&self.table(table)?.columns)
    }

    pub fn column_type(&self, table: &str, column: &str) -> Result<&ColumnType> {
        self.table(table)?.column_type(column)
    }

    pub fn declared_alias(&self, table: &str) -> Option<&str> {
        self.tables.get(table).and_then(|t| t.alias.as_deref())
    }

    /// Outgoing references of `table`, one entry per referenced table and column.
    pub fn collect_all_references(&self, table: &str) -> Result<Vec<TableReference>> {
        let table = self.table(table)?;
        Ok(table.outgoing_references().collect())
    }

    /// References declared by other tables that point at `table`, in their declared direction.
    pub fn collect_references_to_table(&self, table: &str) -> Result<Vec<TableReference>> {
        let table = self.table(table)?;
        Ok(self
            .tables
            .values()
            .filter(|other| other.name != table.name)
            .flat_map(|other| other.outgoing_references())
            .filter(|reference| reference.target_table == table.name)
            .collect())
    }

    /// Every relationship reachable from `table`: its own references first, then the incoming
    /// ones turned around so that they also start at `table`.
    pub fn related_references(&self, table: &str) -> Result<Vec<TableReference>> {
        let mut references = self.collect_all_references(table)?;
        references.extend(
            self.collect_references_to_table(table)?
                .into_iter()
                .map(TableReference::into_reversed),
        );
        Ok(references)
    }
}

impl Table {
    pub fn column_type(&self, column: &str) -> Result<&ColumnType> {
        self.columns
            .get(column)
            .ok_or_else(|| Error::NotFound(msg::col_not_in_table(column, &self.name)))
    }

    /// Returns the canonical spelling of `column`.
    pub fn resolve_column(&self, options: &Options, column: &str) -> Result<&str> {
        options
            .resolve_identifier(&self.columns, column)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| Error::NotFound(msg::col_not_in_table(column, &self.name)))
    }

    fn outgoing_references(&self) -> impl Iterator<Item = TableReference> + '_ {
        self.references.iter().flat_map(move |(column, references)| {
            references.iter().map(move |reference| TableReference {
                source_table: self.name.clone(),
                source_column: column.clone(),
                target_table: reference.table.clone(),
                target_column: reference.column.clone(),
                join_variants: reference.join_variants.clone(),
                reversed: false,
            })
        })
    }
}

impl TryFrom<PrimitiveSchema> for Catalog {
    type Error = Error;

    fn try_from(primitive_schema: PrimitiveSchema) -> Result<Catalog> {
        let mut tables = IndexMap::<TableName, Table>::new();
        for (name, primitive_table) in primitive_schema.tables {
            let columns = primitive_table
                .columns
                .into_iter()
                .map(|(column, declared)| (column, ColumnType::from(declared.as_str())))
                .collect();
            let references = primitive_table
                .references
                .into_iter()
                .map(|(column, references)| {
                    let references = references
                        .into_vec()
                        .into_iter()
                        .map(|r| Reference {
                            table: r.table,
                            column: r.column,
                            join_variants: r
                                .join_variants
                                .into_iter()
                                .map(|v| JoinVariant {
                                    name: v.name,
                                    alias: v.alias,
                                    filter: v.filter,
                                })
                                .collect(),
                        })
                        .collect();
                    (column, references)
                })
                .collect();
            let table = Table {
                name: name.clone(),
                alias: primitive_table.alias,
                columns,
                references,
                highlights: primitive_table.highlights,
            };
            tables.insert(name, table);
        }

        for table in tables.values() {
            for column in &table.highlights {
                table.column_type(column)?;
            }
            for (column, references) in &table.references {
                table.column_type(column)?;
                for reference in references {
                    let target_exists = tables
                        .get(&reference.table)
                        .map_or(false, |t| t.columns.contains_key(&reference.column));
                    if !target_exists {
                        return Err(Error::Config(msg::unknown_reference_target(
                            &table.name,
                            column,
                        )));
                    }
                }
            }
        }

        Ok(Catalog { tables })
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::test_catalog;

    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let catalog = test_catalog();
        let names: Vec<&str> = catalog.all_tables().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["nq_owner", "nq_settings", "nq_draw", "nq_question", "nq_secret"]
        );
        assert_eq!(
            catalog.column_type("nq_draw", "created"),
            Ok(&ColumnType::Datetime)
        );
        assert_eq!(catalog.declared_alias("nq_owner"), Some("own"));
        assert_eq!(catalog.declared_alias("nq_settings"), None);
        assert_eq!(catalog.table("nq_secret").unwrap().highlights, ["type"]);
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        let catalog = test_catalog();
        assert!(matches!(catalog.table("nope"), Err(Error::NotFound(_))));
        assert!(matches!(
            catalog.column_type("nq_owner", "nope"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let json = r#"{
            "a": { "columns": { "id": "int", "b_id": "int" },
                   "references": { "b_id": [{ "table": "b", "column": "id" }] } }
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(Error::Config(_))));
    }

    #[test]
    fn test_single_reference_object_is_accepted() {
        let json = r#"{
            "a": { "columns": { "id": "int", "b_id": "int" },
                   "references": { "b_id": { "table": "b", "column": "id" } } },
            "b": { "columns": { "id": "int" } }
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.collect_all_references("a").unwrap().len(), 1);
    }

    #[test]
    fn test_related_references() {
        let catalog = test_catalog();
        let references = catalog.related_references("nq_owner").unwrap();
        let summary: Vec<(&str, &str, &str, &str, bool)> = references
            .iter()
            .map(|r| {
                (
                    r.source_column.as_str(),
                    r.target_table.as_str(),
                    r.target_column.as_str(),
                    r.source_table.as_str(),
                    r.reversed,
                )
            })
            .collect();
        assert_eq!(
            summary,
            [
                ("settings_id", "nq_settings", "id", "nq_owner", false),
                ("id", "nq_draw", "owner_id", "nq_owner", true),
                ("id", "nq_question", "owner_id", "nq_owner", true),
                ("id", "nq_secret", "owner_id", "nq_owner", true),
            ]
        );
        assert_eq!(references[3].join_variants.len(), 2);
        assert!(references[3].can_apply_join_variants());
    }
}
