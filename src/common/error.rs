use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while parsing or executing a command.
///
/// Every variant is recoverable: the shell prints it and keeps reading input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DatabaseError {
    #[error("Table '{0}' does not exist")]
    #[diagnostic(code(ims::table_not_found), help("Run `SHOW TABLES` to list existing tables"))]
    TableNotFound(String),

    #[error("Table '{0}' already exists")]
    #[diagnostic(code(ims::table_exists))]
    TableAlreadyExists(String),

    #[error("Unsupported command: {0}")]
    #[diagnostic(code(ims::unsupported), help("Type `help` for the supported commands"))]
    UnsupportedCommand(String),

    #[error("Malformed predicate '{0}': expected a single `column = value` condition")]
    #[diagnostic(code(ims::malformed_predicate))]
    MalformedPredicate(String),

    #[error("{command} is missing its {field}")]
    #[diagnostic(code(ims::missing_field))]
    MissingField {
        command: &'static str,
        field: &'static str,
    },

    #[error("Invalid query: {0}")]
    #[diagnostic(code(ims::invalid_query))]
    InvalidQuery(String),

    #[error("Database lock poisoned: {0}")]
    #[diagnostic(code(ims::lock_poisoned))]
    LockPoisoned(String),
}

impl From<miette::Report> for DatabaseError {
    /// Recovers a typed error from a report raised by the lexer or parser.
    ///
    /// Reports that were not built from a [`DatabaseError`] become
    /// [`DatabaseError::InvalidQuery`].
    fn from(report: miette::Report) -> Self {
        match report.downcast::<DatabaseError>() {
            Ok(err) => err,
            Err(report) => DatabaseError::InvalidQuery(report.to_string()),
        }
    }
}
