mod errors;
mod filters;
mod formatter;
mod options;
mod query;
mod schema;
mod session;
mod sql;
mod tests;
mod utils;

pub use errors::{Error, Result};
pub use filters::FilterValidator;
pub use formatter::Formatter;
pub use options::{AliasResolver, IdentifierResolution, Options};
pub use query::{
    infer_operator_for_columns, ColumnFilter, ColumnSelect, Conjunction, FilterKind, LeftJoin,
    PastColumn, Query, QueryState, Slot, SubQuery,
};
pub use schema::{Catalog, ColumnType, JoinVariant, Reference, Table, TableReference};
pub use session::{Applied, Command, SelectableTable, Session};
pub use sql::{dialect_from_name, Dialect, Markup, MySql, Oracle};

pub use qbuilder_parser::ast::{Date, Operator, Sign, TimeUnit};
