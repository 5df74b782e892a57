mod catalog;
mod column_type;
mod primitive_schema;
mod references;

pub use catalog::{Catalog, JoinVariant, Reference, Table};
pub use column_type::ColumnType;
pub use references::TableReference;
