//! Progress endpoints: read the annotated catalogue and resume point, save
//! video and quiz progress.

use axum::{extract::State, Json};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::auth::UserId;
use crate::db;
use crate::domain::{ChapterWithProgress, ResumePoint};
use crate::error::{ApiError, ApiJson};
use crate::resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub chapters: Vec<ChapterWithProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_point: Option<ResumePoint>,
}

/// `resume_point` is always present, `null` once the course is finished.
#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume_point: Option<ResumePoint>,
}

/// Players also send `duration`; it is not stored and is ignored here.
#[derive(Debug, Deserialize)]
pub struct VideoProgressRequest {
    pub chapter_id: i64,
    /// Playback position in seconds
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub completed: bool,
}

impl VideoProgressRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if !self.timestamp.is_finite() || self.timestamp < 0.0 {
            return Err(ApiError::bad_request("Timestamp must be a non-negative number"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizProgressRequest {
    pub chapter_id: i64,
    #[serde(default)]
    pub question_index: u32,
    /// Selected option index per answered question; `null` means none yet
    #[serde(default)]
    pub answers: Option<Vec<u32>>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: &'static str,
}

impl SaveResponse {
    fn saved(message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            message,
        })
    }
}

/// Register the user on first write and make sure the chapter exists, so the
/// upsert can only fail for store reasons.
fn prepare_save(conn: &Connection, user: &UserId, chapter_id: i64) -> Result<(), ApiError> {
    if db::get_chapter(conn, chapter_id)?.is_none() {
        return Err(ApiError::not_found("Chapter not found"));
    }
    db::ensure_user(conn, user.as_str())?;
    Ok(())
}

/// GET /api/progress
pub async fn get_progress(
    user: UserId,
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let conn = db::try_lock(&state.db)?;
    let chapters = db::list_chapters_with_progress(&conn, user.as_str())?;
    let resume_point = resume::get_resume_point(&conn, user.as_str())?;
    Ok(Json(ProgressResponse {
        chapters,
        resume_point,
    }))
}

/// GET /api/progress/resume
pub async fn get_resume_point(
    user: UserId,
    State(state): State<AppState>,
) -> Result<Json<ResumeResponse>, ApiError> {
    let conn = db::try_lock(&state.db)?;
    let resume_point = resume::get_resume_point(&conn, user.as_str())?;
    Ok(Json(ResumeResponse { resume_point }))
}

/// POST /api/progress/video
pub async fn save_video_progress(
    user: UserId,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VideoProgressRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    request.validate()?;

    let conn = db::try_lock(&state.db)?;
    prepare_save(&conn, &user, request.chapter_id)?;
    db::save_video_progress(
        &conn,
        user.as_str(),
        request.chapter_id,
        request.timestamp,
        request.completed,
    )?;
    Ok(SaveResponse::saved("Video progress saved"))
}

/// POST /api/progress/quiz
pub async fn save_quiz_progress(
    user: UserId,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuizProgressRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let conn = db::try_lock(&state.db)?;
    prepare_save(&conn, &user, request.chapter_id)?;
    db::save_quiz_progress(
        &conn,
        user.as_str(),
        request.chapter_id,
        request.question_index,
        request.answers.as_deref().unwrap_or_default(),
        request.completed,
    )?;
    Ok(SaveResponse::saved("Quiz progress saved"))
}
