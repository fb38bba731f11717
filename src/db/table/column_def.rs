use crate::core::types::DataType;

/// Definition of a single column in a table schema.
///
/// Specifies the column name, its declared type, and whether it was declared
/// as the primary key. Column definitions never change once the table exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// The column name.
    pub name: String,

    /// The declared data type for values in this column.
    pub data_type: DataType,

    /// Whether the column was declared `PRIMARY KEY`.
    pub primary_key: bool,
}

impl ColumnDef {
    /// Creates a new column definition.
    pub fn new(name: &str, data_type: DataType, primary_key: bool) -> Self {
        Self {
            name: name.to_owned(),
            data_type,
            primary_key,
        }
    }
}
