use serde::Serialize;

use super::catalog::JoinVariant;

/// A foreign key relationship seen from one table. `reversed` is set when the relationship was
/// declared on the target table and is being followed backwards, i.e. the table holding the
/// foreign key would be newly joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub join_variants: Vec<JoinVariant>,
    pub reversed: bool,
}

impl TableReference {
    pub fn into_reversed(self) -> Self {
        Self {
            source_table: self.target_table,
            source_column: self.target_column,
            target_table: self.source_table,
            target_column: self.source_column,
            join_variants: self.join_variants,
            reversed: !self.reversed,
        }
    }

    /// Join variants only apply when the table declaring them is being joined in.
    pub fn can_apply_join_variants(&self) -> bool {
        self.reversed && !self.join_variants.is_empty()
    }
}
