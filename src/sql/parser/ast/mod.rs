pub(crate) mod statement;
pub(crate) mod target;

pub use statement::{
    ColumnConstraint, ColumnDefinition, CreateStatement, DeleteStatement, InsertStatement,
    SelectStatement, Statement, StatementKind, UpdateStatement,
};
pub use target::Projection;
