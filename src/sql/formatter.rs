//! Human-readable rendering of [`QueryResult`] values.

use std::fmt;

use super::result::{QueryResult, ResultSet, TableDescription, TableSummary};

const DESCRIBE_RULE_WIDTH: usize = 50;

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::TableCreated { table } => {
                write!(f, "✓ Table '{table}' created successfully.")
            }
            QueryResult::RowsInserted { table, count } => {
                let noun = if *count == 1 { "row" } else { "rows" };
                write!(f, "✓ {count} {noun} inserted into '{table}'.")
            }
            QueryResult::RowsUpdated { matched: 0, .. } => write!(f, "0 row(s) updated."),
            QueryResult::RowsUpdated { table, count, .. } => {
                write!(f, "✓ {count} row(s) updated in '{table}'.")
            }
            QueryResult::RowsDeleted { table, count } => {
                write!(f, "✓ {count} row(s) deleted from '{table}'.")
            }
            QueryResult::Rows(result_set) => f.write_str(&format_rows(result_set)),
            QueryResult::Tables(tables) => f.write_str(&format_tables(tables)),
            QueryResult::Description(description) => {
                f.write_str(&format_description(description))
            }
        }
    }
}

/// Renders a result set as a `" | "`-joined table with a header, a rule of
/// the header's width and a trailing row count.
pub fn format_rows(result_set: &ResultSet) -> String {
    if result_set.rows.is_empty() {
        return "No rows found.".to_string();
    }

    let header = result_set.columns.join(" | ");
    let rule = "-".repeat(header.chars().count());
    let mut output = vec![header, rule];

    for row in &result_set.rows {
        let values: Vec<String> = row.iter().map(ToString::to_string).collect();
        output.push(values.join(" | "));
    }

    output.push(format!("\n{} row(s) returned.", result_set.rows.len()));

    output.join("\n")
}

pub fn format_tables(tables: &[TableSummary]) -> String {
    if tables.is_empty() {
        return "No tables in database.".to_string();
    }

    let mut output = vec!["Tables in the database:".to_string()];
    output.extend(
        tables
            .iter()
            .map(|table| format!("- {} ({} rows)", table.name, table.row_count)),
    );

    output.join("\n")
}

pub fn format_description(description: &TableDescription) -> String {
    let rule = "-".repeat(DESCRIBE_RULE_WIDTH);

    let mut output = vec![
        format!("\nTable: {}", description.name),
        rule.clone(),
        format!("{:<20} {:<15} Constraints", "Column", "Type"),
        rule.clone(),
    ];

    for column in &description.columns {
        let constraints = if column.primary_key { "PRIMARY KEY" } else { "" };
        output.push(format!(
            "{:<20} {:<15} {}",
            column.name,
            column.data_type.to_string(),
            constraints
        ));
    }

    output.push(rule);
    output.push(format!("Total rows: {}", description.row_count));

    output.join("\n")
}
