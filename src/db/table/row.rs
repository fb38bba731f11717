use crate::core::types::Value;

/// A row of data containing one value per schema column.
///
/// Values are positional: `values[i]` belongs to the table's `i`-th column.
/// Unset columns hold [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The ordered values in this row.
    pub values: Vec<Value>,
}

impl Row {
    /// Creates a new row from a vector of values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Gets a reference to the value at the given column index.
    pub fn get_value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Overwrites the value at `index`. Returns `false` if the row has no such slot.
    pub fn set_value(&mut self, index: usize, value: Value) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}
