//! SQLite-backed storage gateway for the meal list.
//!
//! The gateway owns the single connection held for the lifetime of a
//! session. Every statement is parameterized and runs in autocommit mode,
//! so each mutation is durable by the time the call returns. Ordering is
//! delegated to [`crate::query::order_by`] so the gateway and the sort
//! translator agree on the name-ascending tie-break.
use std::path::Path;

use log::{debug, info, trace, warn};
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::query::{Direction, SortField, order_by};

/// A single favorite meal as stored in the `meals` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    /// Durable identity assigned by the store on insert; never reused.
    pub id: i64,
    pub name: String,
    /// Preparation time in minutes.
    pub prep_time: i64,
    /// Cost in whole currency units.
    pub cost: i64,
    /// Star rating.
    pub stars: i64,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unable to open meal store at '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
}

/// AUTOINCREMENT keeps deleted ids from ever being handed out again.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS meals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    prep_time INTEGER,
    cost INTEGER,
    stars INTEGER NOT NULL
)";

/// Gateway to the `meals` table.
pub struct MealStore {
    conn: Connection,
}

impl MealStore {
    /// Opens (or creates) the store at `path` and ensures the schema
    /// exists. Failure here is fatal for the session; callers report the
    /// error and exit without issuing further operations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.display().to_string(),
            source,
        })?;
        info!("meal store opened at '{}'", path.display());
        Self::bootstrap(conn)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// All meals ordered by the requested field, ties broken by name
    /// ascending. [`SortField::None`] orders by name alone.
    pub fn fetch_all(
        &self,
        field: SortField,
        direction: Direction,
    ) -> Result<Vec<Meal>, StorageError> {
        let sql = format!(
            "SELECT id, name, prep_time, cost, stars FROM meals ORDER BY {}",
            order_by(field, direction)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let meals = stmt
            .query_map([], |row| {
                Ok(Meal {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    prep_time: row.get(2)?,
                    cost: row.get(3)?,
                    stars: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        trace!("fetched {} meals ({sql})", meals.len());
        Ok(meals)
    }

    /// Persists a new meal and returns its assigned id.
    pub fn insert(
        &self,
        name: &str,
        prep_time: i64,
        cost: i64,
        stars: i64,
    ) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO meals (name, prep_time, cost, stars) VALUES (?1, ?2, ?3, ?4)",
            params![name, prep_time, cost, stars],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("inserted meal {id} ('{name}')");
        Ok(id)
    }

    /// Overwrites the mutable fields of the meal with this id; name and id
    /// are not editable. An absent id is a no-op.
    pub fn update(
        &self,
        id: i64,
        prep_time: i64,
        cost: i64,
        stars: i64,
    ) -> Result<(), StorageError> {
        let changed = self.conn.execute(
            "UPDATE meals SET prep_time = ?1, cost = ?2, stars = ?3 WHERE id = ?4",
            params![prep_time, cost, stars, id],
        )?;
        debug!("updated meal {id} ({changed} rows)");
        Ok(())
    }

    /// Removes the meal with this id. An absent id is a no-op.
    pub fn delete(&self, id: i64) -> Result<(), StorageError> {
        let changed = self
            .conn
            .execute("DELETE FROM meals WHERE id = ?1", params![id])?;
        debug!("deleted meal {id} ({changed} rows)");
        Ok(())
    }

    /// Releases the connection. Dropping the store has the same effect;
    /// this just surfaces a close failure instead of swallowing it.
    pub fn close(self) {
        if let Err((_, e)) = self.conn.close() {
            warn!("meal store did not close cleanly: {e}");
        }
    }
}
