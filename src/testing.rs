//! Test utilities for database setup.
//!
//! Reuses the authoritative schema and seed functions so tests never carry
//! their own copy of the tables.

use rusqlite::Connection;
use std::sync::MutexGuard;
use tempfile::TempDir;

use crate::db::{self, DbPool};

/// Test environment with a file-backed database in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    pub pool: DbPool,
}

impl TestEnv {
    /// Empty schema, no catalogue.
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let pool = db::init_db(&temp.path().join("learning.db"))?;
        Ok(Self { temp, pool })
    }

    /// Schema plus the built-in catalogue.
    pub fn seeded() -> rusqlite::Result<Self> {
        let env = Self::new()?;
        db::seed_catalogue(&env.conn())?;
        Ok(env)
    }

    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.pool.lock().expect("test database lock poisoned")
    }

    pub fn add_user(&self, user_id: &str) {
        db::ensure_user(&self.conn(), user_id).expect("failed to create test user");
    }

    /// Id of the chapter at the given ordering index.
    pub fn chapter_id(&self, order_index: i64) -> i64 {
        self.conn()
            .query_row(
                "SELECT id FROM chapters WHERE order_index = ?1",
                [order_index],
                |row| row.get(0),
            )
            .expect("no chapter at that ordering index")
    }
}
