//! Error types for statement rendering and execution

use std::fmt;

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Statement kind, used to tag validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Delete,
    Update,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Delete => f.write_str("delete"),
            StatementKind::Update => f.write_str("update"),
        }
    }
}

/// Errors raised while rendering a statement
#[derive(Debug, Error)]
pub enum Error {
    /// No table was given to the builder
    #[error("{statement} statements must specify a table")]
    MissingTable { statement: StatementKind },

    /// UPDATE without any SET assignment
    #[error("update statements must have at least one Set")]
    MissingRequiredColumns,

    /// DELETE or UPDATE without any WHERE fragment
    #[error("{statement} statements must have WHERE condition")]
    MissingWhereCondition { statement: StatementKind },

    /// A clause refused to render
    #[error("clause error: {0}")]
    Clause(String),

    #[error(transparent)]
    Format(#[from] fmt::Error),
}

impl Error {
    /// Create a clause error, for caller-defined clause kinds
    pub fn clause(message: impl Into<String>) -> Self {
        Self::Clause(message.into())
    }
}

/// Errors raised by the execute helpers.
///
/// Both variants are transparent: the render error or the executor's own
/// error is surfaced as is.
#[derive(Debug, Error)]
pub enum ExecError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Build(#[from] Error),

    #[error(transparent)]
    Executor(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::MissingTable {
            statement: StatementKind::Delete,
        };
        assert_eq!("delete statements must specify a table", err.to_string());
        let err = Error::MissingWhereCondition {
            statement: StatementKind::Update,
        };
        assert_eq!("update statements must have WHERE condition", err.to_string());
        assert_eq!(
            "update statements must have at least one Set",
            Error::MissingRequiredColumns.to_string()
        );
    }

    #[test]
    fn test_exec_error_is_transparent() {
        let err: ExecError<std::io::Error> = Error::MissingRequiredColumns.into();
        assert_eq!("update statements must have at least one Set", err.to_string());
        let err = ExecError::Executor(std::io::Error::other("connection reset"));
        assert_eq!("connection reset", err.to_string());
    }
}
