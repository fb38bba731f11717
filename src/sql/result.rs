use crate::{core::types::Value, db::table::ColumnDef};

/// Outcome of a successfully executed statement.
///
/// Results stay structured until the outermost boundary renders them through
/// their `Display` implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    TableCreated {
        table: String,
    },
    RowsInserted {
        table: String,
        count: usize,
    },
    RowsUpdated {
        table: String,
        /// Rows selected by the predicate (or every row without one).
        matched: usize,
        /// Rows actually written.
        count: usize,
    },
    RowsDeleted {
        table: String,
        count: usize,
    },
    Rows(ResultSet),
    Tables(Vec<TableSummary>),
    Description(TableDescription),
}

impl QueryResult {
    /// Number of rows written by a mutating statement, `None` for reads.
    pub fn affected_rows(&self) -> Option<usize> {
        match self {
            QueryResult::RowsInserted { count, .. }
            | QueryResult::RowsUpdated { count, .. }
            | QueryResult::RowsDeleted { count, .. } => Some(*count),
            _ => None,
        }
    }
}

/// Projected rows of a `SELECT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Projected column names, in output order.
    pub columns: Vec<String>,

    /// One entry per matching row, aligned with `columns`.
    pub rows: Vec<Vec<Value>>,
}

/// One line of `SHOW TABLES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub row_count: usize,
}

/// Schema and size of a table, as reported by `DESCRIBE`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescription {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub row_count: usize,
}
