//! Per-user progress records.
//!
//! Every write is a single upsert against the
//! `UNIQUE(user_id, chapter_id, content_type)` constraint, so concurrent
//! saves for the same track resolve to one row (last writer wins).

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

use super::codec::EncodedList;
use crate::domain::{quiz_percentage, Chapter, ChapterWithProgress, ContentType, ProgressRecord};

/// Timestamp format for `updated_at`. Microsecond precision keeps ordering
/// meaningful for saves made within the same second.
fn now_timestamp() -> String {
  Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn save_video_progress(
  conn: &Connection,
  user_id: &str,
  chapter_id: i64,
  timestamp: f64,
  completed: bool,
) -> Result<()> {
  conn.execute(
    r#"
    INSERT INTO user_progress
      (user_id, chapter_id, content_type, video_timestamp, completed, updated_at)
    VALUES (?1, ?2, 'video', ?3, ?4, ?5)
    ON CONFLICT(user_id, chapter_id, content_type)
    DO UPDATE SET video_timestamp = excluded.video_timestamp,
                  completed = excluded.completed,
                  updated_at = excluded.updated_at
    "#,
    params![user_id, chapter_id, timestamp, completed, now_timestamp()],
  )?;
  tracing::debug!(user_id, chapter_id, timestamp, completed, "Saved video progress");
  Ok(())
}

pub fn save_quiz_progress(
  conn: &Connection,
  user_id: &str,
  chapter_id: i64,
  question_index: u32,
  answers: &[u32],
  completed: bool,
) -> Result<()> {
  conn.execute(
    r#"
    INSERT INTO user_progress
      (user_id, chapter_id, content_type, quiz_question_index, quiz_answers, completed, updated_at)
    VALUES (?1, ?2, 'quiz', ?3, ?4, ?5, ?6)
    ON CONFLICT(user_id, chapter_id, content_type)
    DO UPDATE SET quiz_question_index = excluded.quiz_question_index,
                  quiz_answers = excluded.quiz_answers,
                  completed = excluded.completed,
                  updated_at = excluded.updated_at
    "#,
    params![
      user_id,
      chapter_id,
      question_index,
      EncodedList(answers),
      completed,
      now_timestamp()
    ],
  )?;
  tracing::debug!(user_id, chapter_id, question_index, completed, "Saved quiz progress");
  Ok(())
}

const RECORD_COLUMNS: &str = "id, user_id, chapter_id, content_type, video_timestamp, \
   quiz_question_index, quiz_answers, completed, updated_at";

fn row_to_record(row: &Row) -> Result<ProgressRecord> {
  let content_type: String = row.get(3)?;
  let content_type = ContentType::parse(&content_type).ok_or_else(|| {
    rusqlite::Error::FromSqlConversionFailure(
      3,
      Type::Text,
      format!("unknown content type {:?}", content_type).into(),
    )
  })?;

  let updated_at: String = row.get(8)?;
  let updated_at = DateTime::parse_from_rfc3339(&updated_at)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

  let answers: EncodedList<Vec<u32>> = row.get(6)?;

  Ok(ProgressRecord {
    id: row.get(0)?,
    user_id: row.get(1)?,
    chapter_id: row.get(2)?,
    content_type,
    video_timestamp: row.get(4)?,
    quiz_question_index: row.get(5)?,
    quiz_answers: answers.into_inner(),
    completed: row.get(7)?,
    updated_at,
  })
}

pub fn get_progress(
  conn: &Connection,
  user_id: &str,
  chapter_id: i64,
  content_type: ContentType,
) -> Result<Option<ProgressRecord>> {
  conn
    .query_row(
      &format!(
        "SELECT {} FROM user_progress WHERE user_id = ?1 AND chapter_id = ?2 AND content_type = ?3",
        RECORD_COLUMNS
      ),
      params![user_id, chapter_id, content_type.as_str()],
      row_to_record,
    )
    .optional()
}

/// All of a user's records, most recently updated first
pub fn list_user_progress(conn: &Connection, user_id: &str) -> Result<Vec<ProgressRecord>> {
  let mut stmt = conn.prepare(&format!(
    "SELECT {} FROM user_progress WHERE user_id = ?1 ORDER BY updated_at DESC, id DESC",
    RECORD_COLUMNS
  ))?;
  let records = stmt
    .query_map(params![user_id], row_to_record)?
    .collect::<Result<Vec<_>>>()?;
  Ok(records)
}

/// Every chapter with the user's video and quiz progress. Tracks the user
/// hasn't touched report zero/false.
pub fn list_chapters_with_progress(
  conn: &Connection,
  user_id: &str,
) -> Result<Vec<ChapterWithProgress>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT
      c.id, c.title, c.description, c.video_url, c.order_index,
      COALESCE(vp.video_timestamp, 0) AS video_timestamp,
      COALESCE(vp.completed, 0) AS video_completed,
      COALESCE(qp.quiz_question_index, 0) AS quiz_index,
      COALESCE(qp.completed, 0) AS quiz_completed
    FROM chapters c
    LEFT JOIN user_progress vp
      ON c.id = vp.chapter_id AND vp.user_id = ?1 AND vp.content_type = 'video'
    LEFT JOIN user_progress qp
      ON c.id = qp.chapter_id AND qp.user_id = ?1 AND qp.content_type = 'quiz'
    ORDER BY c.order_index
    "#,
  )?;

  let chapters = stmt
    .query_map(params![user_id], |row| {
      let quiz_index: u32 = row.get(7)?;
      Ok(ChapterWithProgress {
        chapter: Chapter {
          id: row.get(0)?,
          title: row.get(1)?,
          description: row.get(2)?,
          video_url: row.get(3)?,
          order_index: row.get(4)?,
        },
        video_progress: row.get(5)?,
        video_completed: row.get(6)?,
        quiz_progress: quiz_percentage(quiz_index),
        quiz_completed: row.get(8)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(chapters)
}
