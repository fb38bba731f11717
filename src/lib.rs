//! IMS DB: a small in-memory relational store driven by a SQL dialect.
//!
//! Tables live only for the lifetime of a [`Database`]. Text commands go
//! through [`Database::execute`] and come back as a typed [`QueryResult`],
//! whose `Display` impl renders the text the [`shell`] prints.

pub(crate) mod common;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod sql;

pub mod shell;

pub use common::error::DatabaseError;
pub use crate::core::types::{DataType, Value};
pub use db::{database::Database, shared::SharedDatabase, table::*};
pub use sql::{
    executor::Executor,
    filter::{Predicate, filter_rows},
    parser::{
        SqlParser,
        ast::{
            ColumnConstraint, ColumnDefinition, CreateStatement, DeleteStatement,
            InsertStatement, Projection, SelectStatement, Statement, StatementKind,
            UpdateStatement,
        },
    },
    result::{QueryResult, ResultSet, TableDescription, TableSummary},
};
