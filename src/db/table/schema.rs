use super::{column_def::ColumnDef, row::Row};
use crate::core::types::Value;

/// A table schema defining the structure of rows.
///
/// A schema is an ordered list of column definitions. The order is the
/// default projection order and the positional mapping used by `INSERT`.
///
/// # Example
///
/// ```
/// use ims_db::{ColumnDef, DataType, Schema};
///
/// let schema = Schema::new(vec![
///     ColumnDef::new("id", DataType::Int, true),
///     ColumnDef::new("name", DataType::Varchar, false),
/// ]);
///
/// assert_eq!(schema.get_column_index("name"), Some(1));
/// assert_eq!(schema.get_column_index("price"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// The ordered list of column definitions.
    pub columns: Vec<ColumnDef>,
}

impl Schema {
    /// Creates a new schema from a vector of column definitions.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// Finds the index of a column by its exact name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.name.clone()).collect()
    }

    /// Builds a row by zipping the declared columns with positional values.
    ///
    /// Missing trailing values become [`Value::Null`]; values beyond the
    /// column count are dropped.
    pub fn build_row(&self, values: Vec<Value>) -> Row {
        let mut values = values.into_iter();
        let values = self
            .columns
            .iter()
            .map(|_| values.next().unwrap_or(Value::Null))
            .collect();

        Row::new(values)
    }

    /// Looks up the value of `column` in `row`, if the schema has that column.
    pub fn value_of<'r>(&self, row: &'r Row, column: &str) -> Option<&'r Value> {
        self.get_column_index(column)
            .and_then(|index| row.get_value(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DataType;

    fn products() -> Schema {
        Schema::new(vec![
            ColumnDef::new("id", DataType::Int, true),
            ColumnDef::new("name", DataType::Varchar, false),
            ColumnDef::new("price", DataType::Float, false),
        ])
    }

    #[test]
    fn test_build_row_pads_with_null() {
        let row = products().build_row(vec![Value::Int64(1)]);
        assert_eq!(row.values, vec![Value::Int64(1), Value::Null, Value::Null]);
    }

    #[test]
    fn test_build_row_ignores_excess_values() {
        let row = products().build_row(vec![
            Value::Int64(1),
            Value::from("Laptop"),
            Value::Float64(999.99),
            Value::from("surplus"),
        ]);
        assert_eq!(row.values.len(), 3);
        assert_eq!(row.get_value(2), Some(&Value::Float64(999.99)));
    }

    #[test]
    fn test_value_of() {
        let schema = products();
        let row = schema.build_row(vec![Value::Int64(7), Value::from("Mouse")]);

        assert_eq!(schema.value_of(&row, "name"), Some(&Value::from("Mouse")));
        assert_eq!(schema.value_of(&row, "price"), Some(&Value::Null));
        assert_eq!(schema.value_of(&row, "stock"), None);
    }

    #[test]
    fn test_column_names_keep_declaration_order() {
        assert_eq!(products().column_names(), vec!["id", "name", "price"]);
    }
}
