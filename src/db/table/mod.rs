pub use column_def::ColumnDef;
pub use row::Row;
pub use schema::Schema;
pub use table_def::TableDef;

pub mod column_def;
pub mod row;
pub mod schema;
pub mod table_def;

/// Trait for table-like structures.
///
/// Defines the read side shared by the executor and the formatter, plus row
/// appends. Currently only implemented by [`TableDef`].
pub trait Table {
    /// Returns the table name.
    fn name(&self) -> &str;

    /// Returns the table's schema.
    fn schema(&self) -> &Schema;

    /// Returns the rows in insertion order.
    fn rows(&self) -> &[Row];

    /// Appends a row. The row must already match the schema's shape.
    fn insert_row(&mut self, row: Row);

    /// Number of rows currently stored.
    fn row_count(&self) -> usize {
        self.rows().len()
    }
}
