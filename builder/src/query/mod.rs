mod filter;
mod grouping;
mod query;
mod state;

pub use filter::{ColumnFilter, FilterKind, Slot};
pub use grouping::{group_filters, infer_operator_for_columns, Conjunction, FilterGroup};
pub use query::{ColumnSelect, LeftJoin, Query, SubQuery};
pub use state::{PastColumn, QueryState};
