use strum::Display;

use crate::core::types::{DataType, Value};

use super::Projection;

/// A parsed command (top-level AST node), ready for the executor.
///
/// `WHERE` clauses are carried as raw predicate text; the row filter owns
/// their grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    ShowTables,
    Describe { table_name: String },
    Create(CreateStatement),
    Insert(InsertStatement),
    Select(SelectStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
}

/// Discriminator of a [`Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementKind {
    ShowTables,
    Describe,
    CreateTable,
    Insert,
    Select,
    Update,
    Delete,
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::ShowTables => StatementKind::ShowTables,
            Statement::Describe { .. } => StatementKind::Describe,
            Statement::Create(_) => StatementKind::CreateTable,
            Statement::Insert(_) => StatementKind::Insert,
            Statement::Select(_) => StatementKind::Select,
            Statement::Update(_) => StatementKind::Update,
            Statement::Delete(_) => StatementKind::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateStatement {
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table_name: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub table_name: String,
    pub projection: Projection,
    pub predicate: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table_name: String,
    pub column: String,
    pub value: Value,
    pub predicate: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table_name: String,
    pub predicate: Option<String>,
}
