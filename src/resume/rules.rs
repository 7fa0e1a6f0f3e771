//! Resume-point rules.
//!
//! Each rule looks at a [`ProgressSnapshot`] and either claims the resume
//! point or passes. They are evaluated in a fixed order and the first match
//! wins:
//!
//! 1. the most recently updated incomplete record,
//! 2. the lowest-ordered chapter whose video is done but whose quiz was
//!    never started,
//! 3. the lowest-ordered chapter with no progress at all.
//!
//! If none match, the user has finished the course.

use std::collections::HashMap;

use crate::domain::{Chapter, ContentType, ProgressRecord, ResumePoint};

/// Everything the rules need to know about one user.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
  pub chapters: Vec<Chapter>,
  /// The user's progress records, in any order
  pub records: Vec<ProgressRecord>,
  /// Question count per chapter id; missing means zero
  pub question_counts: HashMap<i64, i64>,
}

impl ProgressSnapshot {
  fn chapter(&self, chapter_id: i64) -> Option<&Chapter> {
    self.chapters.iter().find(|c| c.id == chapter_id)
  }

  fn record(&self, chapter_id: i64, content_type: ContentType) -> Option<&ProgressRecord> {
    self
      .records
      .iter()
      .find(|r| r.chapter_id == chapter_id && r.content_type == content_type)
  }

  fn has_any_record(&self, chapter_id: i64) -> bool {
    self.records.iter().any(|r| r.chapter_id == chapter_id)
  }

  fn question_count(&self, chapter_id: i64) -> i64 {
    self.question_counts.get(&chapter_id).copied().unwrap_or(0)
  }
}

/// Outcome of resume-point resolution, tagged by the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
  InProgress(ResumePoint),
  NextQuiz(ResumePoint),
  NextChapter(ResumePoint),
  /// Every chapter's tracks are complete; there is nothing to resume.
  AllComplete,
}

impl Resolution {
  pub fn into_resume_point(self) -> Option<ResumePoint> {
    match self {
      Self::InProgress(point) | Self::NextQuiz(point) | Self::NextChapter(point) => Some(point),
      Self::AllComplete => None,
    }
  }
}

pub fn resolve(snapshot: &ProgressSnapshot) -> Resolution {
  in_progress(snapshot)
    .map(Resolution::InProgress)
    .or_else(|| next_quiz(snapshot).map(Resolution::NextQuiz))
    .or_else(|| next_chapter(snapshot).map(Resolution::NextChapter))
    .unwrap_or(Resolution::AllComplete)
}

/// Rule 1. Ties on `updated_at` go to the later-inserted row. Records for
/// chapters missing from the catalogue are ignored.
pub fn in_progress(snapshot: &ProgressSnapshot) -> Option<ResumePoint> {
  snapshot
    .records
    .iter()
    .filter(|r| !r.completed)
    .filter_map(|r| snapshot.chapter(r.chapter_id).map(|c| (r, c)))
    .max_by_key(|(r, _)| (r.updated_at, r.id))
    .map(|(record, chapter)| match record.content_type {
      ContentType::Video => {
        ResumePoint::video(chapter.id, &chapter.title, record.video_timestamp)
      }
      ContentType::Quiz => ResumePoint::quiz(
        chapter.id,
        &chapter.title,
        record.quiz_question_index,
        snapshot.question_count(chapter.id),
      ),
    })
}

/// Rule 2.
pub fn next_quiz(snapshot: &ProgressSnapshot) -> Option<ResumePoint> {
  snapshot
    .chapters
    .iter()
    .filter(|c| {
      snapshot
        .record(c.id, ContentType::Video)
        .is_some_and(|video| video.completed)
        && snapshot.record(c.id, ContentType::Quiz).is_none()
    })
    .min_by_key(|c| c.order_index)
    .map(|c| ResumePoint::quiz(c.id, &c.title, 0, snapshot.question_count(c.id)))
}

/// Rule 3.
pub fn next_chapter(snapshot: &ProgressSnapshot) -> Option<ResumePoint> {
  snapshot
    .chapters
    .iter()
    .filter(|c| !snapshot.has_any_record(c.id))
    .min_by_key(|c| c.order_index)
    .map(|c| ResumePoint::video(c.id, &c.title, 0.0))
}
