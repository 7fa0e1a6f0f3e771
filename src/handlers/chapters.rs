use axum::{extract::State, Json};

use crate::auth::UserId;
use crate::db;
use crate::domain::{Chapter, ChapterDetail};
use crate::error::{ApiError, ApiPath};
use crate::state::AppState;

/// GET /api/chapters
pub async fn list_chapters(
    _user: UserId,
    State(state): State<AppState>,
) -> Result<Json<Vec<Chapter>>, ApiError> {
    let conn = db::try_lock(&state.db)?;
    Ok(Json(db::list_chapters(&conn)?))
}

/// GET /api/chapters/{id}
pub async fn chapter_detail(
    _user: UserId,
    State(state): State<AppState>,
    ApiPath(chapter_id): ApiPath<i64>,
) -> Result<Json<ChapterDetail>, ApiError> {
    let conn = db::try_lock(&state.db)?;
    db::get_chapter_detail(&conn, chapter_id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Chapter not found"))
}
