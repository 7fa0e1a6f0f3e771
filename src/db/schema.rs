use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS users (
      id TEXT PRIMARY KEY,
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS chapters (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      title TEXT NOT NULL,
      description TEXT NOT NULL DEFAULT '',
      video_url TEXT NOT NULL,
      order_index INTEGER NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS quiz_questions (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      chapter_id INTEGER NOT NULL,
      question_text TEXT NOT NULL,
      -- JSON array of option strings
      options TEXT NOT NULL,
      correct_option INTEGER NOT NULL,
      order_index INTEGER NOT NULL,
      FOREIGN KEY (chapter_id) REFERENCES chapters(id),
      UNIQUE(chapter_id, order_index)
    );

    CREATE TABLE IF NOT EXISTS user_progress (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      user_id TEXT NOT NULL,
      chapter_id INTEGER NOT NULL,
      content_type TEXT NOT NULL CHECK (content_type IN ('video', 'quiz')),
      video_timestamp REAL NOT NULL DEFAULT 0,
      quiz_question_index INTEGER NOT NULL DEFAULT 0,
      -- JSON array of selected option indices
      quiz_answers TEXT NOT NULL DEFAULT '[]',
      completed INTEGER NOT NULL DEFAULT 0,
      -- RFC 3339 UTC with microseconds; sorts chronologically as text
      updated_at TEXT NOT NULL,
      FOREIGN KEY (user_id) REFERENCES users(id),
      FOREIGN KEY (chapter_id) REFERENCES chapters(id),
      UNIQUE(user_id, chapter_id, content_type)
    );

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_quiz_questions_chapter ON quiz_questions(chapter_id);
    CREATE INDEX IF NOT EXISTS idx_user_progress_user ON user_progress(user_id, completed);
    "#,
  )
}
