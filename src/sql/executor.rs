use tracing::{debug, info};

use crate::{
    DatabaseError,
    core::types::Value,
    db::{
        database::Database,
        table::{ColumnDef, Row, Schema, Table, TableDef},
    },
    sql::{
        filter::filter_rows,
        parser::{
            ColumnConstraint, CreateStatement, DeleteStatement, InsertStatement, Projection,
            SelectStatement, Statement, UpdateStatement,
        },
        result::{QueryResult, ResultSet, TableDescription, TableSummary},
    },
};

/// Executes one parsed [`Statement`] against a borrowed [`Database`].
///
/// The executor holds no state of its own; every call is a single atomic
/// operation on the store. Expected failures (missing or duplicate tables,
/// malformed predicates) come back as [`DatabaseError`] values.
pub struct Executor<'db> {
    db: &'db mut Database,
}

impl<'db> Executor<'db> {
    pub fn new(db: &'db mut Database) -> Self {
        Self { db }
    }

    pub fn execute(&mut self, statement: Statement) -> Result<QueryResult, DatabaseError> {
        debug!(kind = %statement.kind(), "executing statement");

        match statement {
            Statement::ShowTables => Ok(self.show_tables()),
            Statement::Describe { table_name } => self.describe(&table_name),
            Statement::Create(create) => self.create_table(create),
            Statement::Insert(insert) => self.insert(insert),
            Statement::Select(select) => self.select(select),
            Statement::Update(update) => self.update(update),
            Statement::Delete(delete) => self.delete(delete),
        }
    }

    fn show_tables(&self) -> QueryResult {
        QueryResult::Tables(
            self.db
                .tables()
                .map(|table| TableSummary {
                    name: table.name().to_string(),
                    row_count: table.row_count(),
                })
                .collect(),
        )
    }

    fn describe(&self, table_name: &str) -> Result<QueryResult, DatabaseError> {
        let table = self.db.get_table(table_name)?;

        Ok(QueryResult::Description(TableDescription {
            name: table.name().to_string(),
            columns: table.schema().columns.clone(),
            row_count: table.row_count(),
        }))
    }

    fn create_table(&mut self, create: CreateStatement) -> Result<QueryResult, DatabaseError> {
        let columns = create
            .columns
            .into_iter()
            .map(|column| {
                let primary_key = column.constraints.contains(&ColumnConstraint::PrimaryKey);
                ColumnDef::new(&column.name, column.data_type, primary_key)
            })
            .collect();

        let table = self.db.create_table(&create.table_name, Schema::new(columns))?;
        info!(table = table.name(), columns = table.schema().columns.len(), "table created");

        Ok(QueryResult::TableCreated {
            table: table.name().to_string(),
        })
    }

    fn insert(&mut self, insert: InsertStatement) -> Result<QueryResult, DatabaseError> {
        let table = self.db.get_table_mut(&insert.table_name)?;

        let row = table.schema().build_row(insert.values);
        table.insert_row(row);

        Ok(QueryResult::RowsInserted {
            table: table.name().to_string(),
            count: 1,
        })
    }

    fn select(&self, select: SelectStatement) -> Result<QueryResult, DatabaseError> {
        let table = self.db.get_table(&select.table_name)?;
        let schema = table.schema();

        let targets = target_rows(table, select.predicate.as_deref())?;

        let columns = match select.projection {
            Projection::All => schema.column_names(),
            Projection::Columns(columns) => columns,
        };

        let indexes: Vec<Option<usize>> = columns
            .iter()
            .map(|column| schema.get_column_index(column))
            .collect();

        let rows = targets
            .into_iter()
            .map(|position| project(&table.rows()[position], &indexes))
            .collect();

        Ok(QueryResult::Rows(ResultSet { columns, rows }))
    }

    fn update(&mut self, update: UpdateStatement) -> Result<QueryResult, DatabaseError> {
        let table = self.db.get_table_mut(&update.table_name)?;

        let targets = target_rows(table, update.predicate.as_deref())?;
        let matched = targets.len();

        // Rows only carry the table's own columns
        let count = match table.schema().get_column_index(&update.column) {
            Some(index) => {
                let rows = table.rows_mut();
                let mut written = 0;
                for position in targets {
                    if rows[position].set_value(index, update.value.clone()) {
                        written += 1;
                    }
                }
                written
            }
            None => 0,
        };

        debug!(table = table.name(), matched, count, "rows updated");

        Ok(QueryResult::RowsUpdated {
            table: table.name().to_string(),
            matched,
            count,
        })
    }

    fn delete(&mut self, delete: DeleteStatement) -> Result<QueryResult, DatabaseError> {
        let table = self.db.get_table_mut(&delete.table_name)?;

        let targets = target_rows(table, delete.predicate.as_deref())?;
        let count = targets.len();

        let rows = table.rows_mut();
        let mut doomed = vec![false; rows.len()];
        for position in targets {
            doomed[position] = true;
        }

        let mut position = 0;
        rows.retain(|_| {
            let keep = !doomed[position];
            position += 1;
            keep
        });

        debug!(table = table.name(), count, "rows deleted");

        Ok(QueryResult::RowsDeleted {
            table: table.name().to_string(),
            count,
        })
    }
}

/// Positions targeted by an optional predicate: the matching rows, or all of them.
fn target_rows(table: &TableDef, predicate: Option<&str>) -> Result<Vec<usize>, DatabaseError> {
    match predicate {
        Some(predicate) => filter_rows(table.rows(), table.schema(), predicate),
        None => Ok((0..table.row_count()).collect()),
    }
}

/// Picks the projected values out of `row`; unknown columns read as NULL.
fn project(row: &Row, indexes: &[Option<usize>]) -> Vec<Value> {
    indexes
        .iter()
        .map(|index| {
            index
                .and_then(|index| row.get_value(index))
                .cloned()
                .unwrap_or(Value::Null)
        })
        .collect()
}
