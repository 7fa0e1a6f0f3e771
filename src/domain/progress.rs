use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which track of a chapter a progress record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
  Video,
  Quiz,
}

impl ContentType {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "video" => Some(Self::Video),
      "quiz" => Some(Self::Quiz),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Video => "video",
      Self::Quiz => "quiz",
    }
  }
}

/// One row of `user_progress`. At most one exists per
/// (user, chapter, content type).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRecord {
  pub id: i64,
  pub user_id: String,
  pub chapter_id: i64,
  pub content_type: ContentType,
  pub video_timestamp: f64,
  pub quiz_question_index: u32,
  /// Selected option index per answered question
  pub quiz_answers: Vec<u32>,
  pub completed: bool,
  pub updated_at: DateTime<Utc>,
}

/// Where a returning user should continue.
///
/// Video resume points carry `video_timestamp`; quiz resume points carry
/// `quiz_question_index` and `total_questions`. Fields that don't apply to
/// the content type are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumePoint {
  pub chapter_id: i64,
  pub chapter_title: String,
  pub content_type: ContentType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_timestamp: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub quiz_question_index: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_questions: Option<i64>,
}

impl ResumePoint {
  pub fn video(chapter_id: i64, chapter_title: impl Into<String>, timestamp: f64) -> Self {
    Self {
      chapter_id,
      chapter_title: chapter_title.into(),
      content_type: ContentType::Video,
      video_timestamp: Some(timestamp),
      quiz_question_index: None,
      total_questions: None,
    }
  }

  pub fn quiz(
    chapter_id: i64,
    chapter_title: impl Into<String>,
    question_index: u32,
    total_questions: i64,
  ) -> Self {
    Self {
      chapter_id,
      chapter_title: chapter_title.into(),
      content_type: ContentType::Quiz,
      video_timestamp: None,
      quiz_question_index: Some(question_index),
      total_questions: Some(total_questions),
    }
  }
}
