use std::sync::{Arc, Mutex};

use crate::{DatabaseError, db::database::Database, sql::result::QueryResult};

/// A cloneable handle that serializes access to one [`Database`].
///
/// Each call to [`SharedDatabase::execute`] holds the lock for the whole
/// command, from parsing through lookup, mutation and result construction, so
/// concurrent callers observe every command as a single step.
#[derive(Debug, Clone, Default)]
pub struct SharedDatabase {
    inner: Arc<Mutex<Database>>,
}

impl SharedDatabase {
    pub fn new(db: Database) -> Self {
        Self {
            inner: Arc::new(Mutex::new(db)),
        }
    }

    pub fn execute(&self, query: &str) -> Result<QueryResult, DatabaseError> {
        let mut db = self
            .inner
            .lock()
            .map_err(|e| DatabaseError::LockPoisoned(e.to_string()))?;

        db.execute(query)
    }

    /// Runs `f` with exclusive access to the underlying database.
    pub fn with_database<T>(&self, f: impl FnOnce(&mut Database) -> T) -> Result<T, DatabaseError> {
        let mut db = self
            .inner
            .lock()
            .map_err(|e| DatabaseError::LockPoisoned(e.to_string()))?;

        Ok(f(&mut db))
    }
}
