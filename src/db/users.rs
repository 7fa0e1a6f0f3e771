use chrono::Utc;
use rusqlite::{params, Connection, Result};

/// Create the user row if it doesn't exist yet. Returns true if it was created.
pub fn ensure_user(conn: &Connection, user_id: &str) -> Result<bool> {
  let inserted = conn.execute(
    "INSERT OR IGNORE INTO users (id, created_at) VALUES (?1, ?2)",
    params![user_id, Utc::now().to_rfc3339()],
  )?;
  Ok(inserted > 0)
}
