use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The kind of an error that can occur while building or rendering a query.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// User input does not fit the declared type of the column it filters. Shown to the user; the
    /// query state is left untouched.
    #[error("{0}")]
    Validation(String),

    /// An operation was called in a state that does not allow it, e.g. adding a filter before
    /// any table was selected. This points to a bug in the calling sequence.
    #[error("Invalid query state: {0}")]
    State(String),

    /// A table or column name is not part of the catalog.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The schema descriptor or the options are malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
