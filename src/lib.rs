pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod paths;
pub mod resume;
pub mod state;

#[cfg(test)]
mod testing;

use axum::{routing::get, routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the HTTP application. Every route lives under `/api`.
pub fn app(state: AppState) -> Router {
  let api = Router::new()
    .route("/auth/login", post(auth::login))
    .route("/auth/logout", post(auth::logout))
    .route("/chapters", get(handlers::list_chapters))
    .route("/chapters/{id}", get(handlers::chapter_detail))
    .route("/progress", get(handlers::get_progress))
    .route("/progress/resume", get(handlers::get_resume_point))
    .route("/progress/video", post(handlers::save_video_progress))
    .route("/progress/quiz", post(handlers::save_quiz_progress));

  Router::new()
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
