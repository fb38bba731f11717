use super::{Table, row::Row, schema::Schema};

/// A table (relation) with a name, a schema and its rows.
///
/// Rows live directly in the table, in insertion order. A `TableDef` is owned
/// by the [`Database`](crate::Database) that created it.
#[derive(Debug, Clone)]
pub struct TableDef {
    /// The canonical table name.
    pub(crate) name: String,

    /// The table's schema defining its columns.
    pub(crate) schema: Schema,

    /// The table's rows, in insertion order.
    pub(crate) rows: Vec<Row>,
}

impl TableDef {
    /// Creates a new, empty table with the given name and schema.
    pub fn new(name: String, schema: Schema) -> Self {
        Self {
            name,
            schema,
            rows: Vec::new(),
        }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }
}

impl Table for TableDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn insert_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}
