use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
  pub id: i64,
  pub title: String,
  pub description: String,
  pub video_url: String,
  pub order_index: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
  pub id: i64,
  pub chapter_id: i64,
  pub question_text: String,
  /// Answer options in display order
  pub options: Vec<String>,
  /// Index into `options`
  pub correct_option: u32,
  pub order_index: i64,
}

/// A chapter annotated with one user's progress on both tracks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterWithProgress {
  #[serde(flatten)]
  pub chapter: Chapter,
  /// Last saved video position in seconds
  pub video_progress: f64,
  /// Quiz completion percentage (see `quiz_percentage`)
  pub quiz_progress: f64,
  pub video_completed: bool,
  pub quiz_completed: bool,
}

/// Quiz completion percentage for a question index.
///
/// The denominator is the nominal `QUIZ_QUESTIONS_PER_CHAPTER`, not the
/// chapter's real question count, so chapters with a different number of
/// questions report an approximate value.
pub fn quiz_percentage(question_index: u32) -> f64 {
  f64::from(question_index) / f64::from(crate::config::QUIZ_QUESTIONS_PER_CHAPTER) * 100.0
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterDetail {
  pub chapter: Chapter,
  pub questions: Vec<QuizQuestion>,
}
