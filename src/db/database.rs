use tracing::debug;

use crate::{
    DatabaseError,
    db::table::{Schema, TableDef},
    sql::{
        executor::Executor,
        parser::{SqlParser, Statement},
        result::QueryResult,
    },
};

/// The main database handle.
///
/// `Database` is the table store of IMS DB. It owns every table and its rows,
/// resolves table names case-insensitively, and executes SQL text through
/// [`Database::execute`].
///
/// Tables are kept in creation order. Names are stored lowercased, so the
/// canonical name of a table is always the lowercase form of the name it was
/// created with.
///
/// # Example
///
/// ```
/// use ims_db::Database;
///
/// let mut db = Database::new();
/// db.execute("CREATE TABLE Products (id INT PRIMARY KEY, name VARCHAR)").unwrap();
///
/// assert!(db.exists("PRODUCTS"));
/// assert_eq!(db.canonical_name("PrOdUcTs"), Some("products"));
/// ```
#[derive(Debug, Default)]
pub struct Database {
    /// All tables, in creation order.
    tables: Vec<TableDef>,
}

impl Database {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the tables in creation order.
    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.iter()
    }

    /// Finds the table whose name matches `name` case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&TableDef> {
        let wanted = name.to_lowercase();
        self.tables
            .iter()
            .find(|table| table.name.to_lowercase() == wanted)
    }

    /// Mutable counterpart of [`Database::resolve`].
    pub fn resolve_mut(&mut self, name: &str) -> Option<&mut TableDef> {
        let wanted = name.to_lowercase();
        self.tables
            .iter_mut()
            .find(|table| table.name.to_lowercase() == wanted)
    }

    /// The stored name of the table matching `name`.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.resolve(name).map(|table| table.name.as_str())
    }

    /// Checks if a table exists, ignoring case.
    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Creates a new, empty table stored under the lowercased `name`.
    ///
    /// Fails if any existing table matches the name case-insensitively; the
    /// existing table is left untouched.
    pub fn create_table(&mut self, name: &str, schema: Schema) -> Result<&TableDef, DatabaseError> {
        let name = name.to_lowercase();

        if self.exists(&name) {
            return Err(DatabaseError::TableAlreadyExists(name));
        }

        debug!(table = %name, "creating table");

        let index = self.tables.len();
        self.tables.push(TableDef::new(name, schema));

        Ok(&self.tables[index])
    }

    /// Gets an immutable reference to a table.
    pub fn get_table(&self, name: &str) -> Result<&TableDef, DatabaseError> {
        self.resolve(name)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))
    }

    /// Gets a mutable reference to a table.
    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut TableDef, DatabaseError> {
        self.resolve_mut(name)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))
    }

    /// Parses and executes one SQL command.
    ///
    /// The command goes through:
    /// 1. **Lexing** - Tokenize the SQL string
    /// 2. **Parsing** - Build a [`Statement`]
    /// 3. **Execution** - Apply it to the store and describe the outcome
    pub fn execute(&mut self, query: &str) -> Result<QueryResult, DatabaseError> {
        let statement = SqlParser::new(query).parse()?;
        self.execute_statement(statement)
    }

    /// Executes an already parsed statement.
    pub fn execute_statement(&mut self, statement: Statement) -> Result<QueryResult, DatabaseError> {
        Executor::new(self).execute(statement)
    }
}
