//! Read access to the chapter and quiz catalogue, plus the inserts used to
//! seed it.

use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use std::collections::HashMap;

use super::codec::EncodedList;
use crate::domain::{Chapter, ChapterDetail, QuizQuestion};

pub fn insert_chapter(
  conn: &Connection,
  title: &str,
  description: &str,
  video_url: &str,
  order_index: i64,
) -> Result<i64> {
  conn.execute(
    "INSERT INTO chapters (title, description, video_url, order_index) VALUES (?1, ?2, ?3, ?4)",
    params![title, description, video_url, order_index],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn insert_question(
  conn: &Connection,
  chapter_id: i64,
  question_text: &str,
  options: &[String],
  correct_option: u32,
  order_index: i64,
) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO quiz_questions (chapter_id, question_text, options, correct_option, order_index)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
    params![
      chapter_id,
      question_text,
      EncodedList(options),
      correct_option,
      order_index
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn chapter_count(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM chapters", [], |row| row.get(0))
}

fn row_to_chapter(row: &Row) -> Result<Chapter> {
  Ok(Chapter {
    id: row.get(0)?,
    title: row.get(1)?,
    description: row.get(2)?,
    video_url: row.get(3)?,
    order_index: row.get(4)?,
  })
}

fn row_to_question(row: &Row) -> Result<QuizQuestion> {
  let options: EncodedList<Vec<String>> = row.get(3)?;
  Ok(QuizQuestion {
    id: row.get(0)?,
    chapter_id: row.get(1)?,
    question_text: row.get(2)?,
    options: options.into_inner(),
    correct_option: row.get(4)?,
    order_index: row.get(5)?,
  })
}

/// All chapters, ordered by their ordering index
pub fn list_chapters(conn: &Connection) -> Result<Vec<Chapter>> {
  let mut stmt = conn.prepare(
    "SELECT id, title, description, video_url, order_index FROM chapters ORDER BY order_index",
  )?;
  let chapters = stmt
    .query_map([], row_to_chapter)?
    .collect::<Result<Vec<_>>>()?;
  Ok(chapters)
}

pub fn get_chapter(conn: &Connection, chapter_id: i64) -> Result<Option<Chapter>> {
  conn
    .query_row(
      "SELECT id, title, description, video_url, order_index FROM chapters WHERE id = ?1",
      params![chapter_id],
      row_to_chapter,
    )
    .optional()
}

/// Questions of one chapter, ordered by their ordering index
pub fn get_chapter_questions(conn: &Connection, chapter_id: i64) -> Result<Vec<QuizQuestion>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT id, chapter_id, question_text, options, correct_option, order_index
    FROM quiz_questions
    WHERE chapter_id = ?1
    ORDER BY order_index
    "#,
  )?;
  let questions = stmt
    .query_map(params![chapter_id], row_to_question)?
    .collect::<Result<Vec<_>>>()?;
  Ok(questions)
}

/// A chapter together with its quiz, or None for an unknown id
pub fn get_chapter_detail(conn: &Connection, chapter_id: i64) -> Result<Option<ChapterDetail>> {
  let Some(chapter) = get_chapter(conn, chapter_id)? else {
    return Ok(None);
  };
  let questions = get_chapter_questions(conn, chapter_id)?;
  Ok(Some(ChapterDetail { chapter, questions }))
}

/// Question count per chapter id. Chapters without questions are absent.
pub fn count_questions_by_chapter(conn: &Connection) -> Result<HashMap<i64, i64>> {
  let mut stmt =
    conn.prepare("SELECT chapter_id, COUNT(*) FROM quiz_questions GROUP BY chapter_id")?;
  let counts = stmt
    .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?
    .collect::<Result<HashMap<_, _>>>()?;
  Ok(counts)
}
