pub mod chapters;
pub mod codec;
pub mod progress;
pub mod schema;
pub mod seed;
pub mod users;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export all public items from submodules
pub use chapters::*;
pub use codec::EncodedList;
pub use progress::*;
pub use schema::run_migrations;
pub use seed::seed_catalogue;
pub use users::*;

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }
}

/// Error returned when database lock cannot be acquired
#[derive(Debug, thiserror::Error)]
#[error("Database unavailable")]
pub struct DbLockError;

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, DbLockError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("Database mutex poisoned - a thread panicked while holding the lock");
    DbLockError
  })
}

/// Open (creating if needed) the database at `path` and bring the schema up.
fn open_connection(path: &Path) -> Result<Connection> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).log_warn("Could not create database directory");
  }

  let conn = Connection::open(path)?;
  conn.execute_batch("PRAGMA foreign_keys = ON;")?;
  run_migrations(&conn)?;
  tracing::info!("Database initialized at {}", path.display());
  Ok(conn)
}

pub fn init_db(path: &Path) -> Result<DbPool> {
  Ok(Arc::new(Mutex::new(open_connection(path)?)))
}

/// Open the store and install the built-in catalogue on first run.
/// Seeding failures are returned, never logged and skipped.
pub fn open_store(path: &Path) -> Result<DbPool> {
  let conn = open_connection(path)?;
  seed_catalogue(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}
