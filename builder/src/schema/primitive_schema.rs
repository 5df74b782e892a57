use indexmap::IndexMap;
use serde::Deserialize;

/// The schema descriptor as supplied by the host page: table name to table definition, in
/// declaration order.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveSchema {
    pub tables: IndexMap<String, PrimitiveTable>,
}

#[derive(Debug, Deserialize)]
pub struct PrimitiveTable {
    #[serde(default)]
    pub alias: Option<String>,
    /// Column name to declared type
    pub columns: IndexMap<String, String>,
    #[serde(default)]
    pub references: IndexMap<String, PrimitiveReferences>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Older descriptors declare a single reference per column instead of a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveReferences {
    Many(Vec<PrimitiveReference>),
    One(PrimitiveReference),
}

impl PrimitiveReferences {
    pub fn into_vec(self) -> Vec<PrimitiveReference> {
        match self {
            PrimitiveReferences::Many(references) => references,
            PrimitiveReferences::One(reference) => vec![reference],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveReference {
    pub table: String,
    pub column: String,
    #[serde(default)]
    pub join_variants: Vec<PrimitiveJoinVariant>,
}

#[derive(Debug, Deserialize)]
pub struct PrimitiveJoinVariant {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub filter: String,
}
