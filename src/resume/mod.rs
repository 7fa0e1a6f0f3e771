//! Resume-point resolution: where should a returning user continue?

pub mod rules;

use rusqlite::{Connection, Result};

use crate::db;
use crate::domain::ResumePoint;

pub use rules::{resolve, ProgressSnapshot, Resolution};

impl ProgressSnapshot {
  /// Read the catalogue and one user's progress from the store.
  pub fn load(conn: &Connection, user_id: &str) -> Result<Self> {
    Ok(Self {
      chapters: db::list_chapters(conn)?,
      records: db::list_user_progress(conn, user_id)?,
      question_counts: db::count_questions_by_chapter(conn)?,
    })
  }
}

pub fn resolve_for_user(conn: &Connection, user_id: &str) -> Result<Resolution> {
  let snapshot = ProgressSnapshot::load(conn, user_id)?;
  Ok(resolve(&snapshot))
}

/// The user's resume point, or None once everything is complete.
pub fn get_resume_point(conn: &Connection, user_id: &str) -> Result<Option<ResumePoint>> {
  resolve_for_user(conn, user_id).map(Resolution::into_resume_point)
}
