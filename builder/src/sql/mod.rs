mod dialect;
mod markup;
mod mysql;
mod oracle;

pub mod expr;

pub use dialect::*;
pub use markup::*;
pub use mysql::*;
pub use oracle::*;
