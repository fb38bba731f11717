use std::str::FromStr;

use crate::{
    DatabaseError,
    db::table::{Row, Schema},
};

/// A single `column = literal` condition taken from a `WHERE` clause.
///
/// Matching is textual: a row matches when its value, rendered as text,
/// equals the literal exactly. `1` therefore matches the integer `1` but not
/// the float `1.0`. A null cell renders as `NULL` and matches that literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub literal: String,
}

impl FromStr for Predicate {
    type Err = DatabaseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || DatabaseError::MalformedPredicate(text.to_string());

        let (column, literal) = text.split_once('=').ok_or_else(malformed)?;

        // Exactly one `=` is allowed
        if literal.contains('=') {
            return Err(malformed());
        }

        let column = column.trim();
        if column.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            column: column.to_string(),
            literal: strip_quotes(literal.trim()).to_string(),
        })
    }
}

impl Predicate {
    /// Whether `row` satisfies the predicate under `schema`.
    ///
    /// A column the schema does not know never matches.
    pub fn matches(&self, row: &Row, schema: &Schema) -> bool {
        match schema.value_of(row, &self.column) {
            Some(value) => value.to_string() == self.literal,
            None => false,
        }
    }
}

/// Removes one pair of matching outer quotes, if present.
///
/// Quotes nested inside that pair stay in the literal, so `"'Milk'"` only
/// matches the text `'Milk'`.
fn strip_quotes(literal: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = literal
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }

    literal
}

/// Positions of the rows matching `predicate`, in table order.
pub fn filter_rows(
    rows: &[Row],
    schema: &Schema,
    predicate: &str,
) -> Result<Vec<usize>, DatabaseError> {
    let predicate = Predicate::from_str(predicate)?;

    Ok(rows
        .iter()
        .enumerate()
        .filter(|(_, row)| predicate.matches(row, schema))
        .map(|(index, _)| index)
        .collect())
}
