use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use serde_json::{json, Value};
use tempfile::TempDir;

use resume_learning::db;
use resume_learning::state::AppState;

struct TestApp {
    _temp: TempDir,
    server: TestServer,
}

impl TestApp {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let pool = db::open_store(&temp.path().join("learning.db")).unwrap();
        let server = TestServer::new(resume_learning::app(AppState::new(pool))).unwrap();
        Self {
            _temp: temp,
            server,
        }
    }

    fn as_user(request: TestRequest, user: &'static str) -> TestRequest {
        request.add_header(
            HeaderName::from_static("x-user-id"),
            HeaderValue::from_static(user),
        )
    }

    async fn get(&self, path: &str, user: &'static str) -> Value {
        let response = Self::as_user(self.server.get(path), user).await;
        response.assert_status(StatusCode::OK);
        response.json::<Value>()
    }

    async fn post(&self, path: &str, user: &'static str, body: Value) -> StatusCode {
        Self::as_user(self.server.post(path), user)
            .json(&body)
            .await
            .status_code()
    }

    async fn chapter_ids(&self, user: &'static str) -> Vec<i64> {
        self.get("/api/chapters", user)
            .await
            .as_array()
            .unwrap()
            .iter()
            .map(|chapter| chapter["id"].as_i64().unwrap())
            .collect()
    }
}

#[tokio::test]
async fn test_login_requires_user_id() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "user_id": "  " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "User ID is required");
}

#[tokio::test]
async fn test_login_and_logout() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "user_id": "alice" }))
        .await;
    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["user_id"], "alice");

    let response = app.server.post("/api/auth/logout").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["success"], true);
}

#[tokio::test]
async fn test_missing_user_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/progress/video")
        .json(&json!({ "chapter_id": 1, "timestamp": 3.0 }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"], "User not authenticated");

    app.server
        .get("/api/progress/resume")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_token_identifies_user() {
    let app = TestApp::new();

    app.server
        .get("/api/chapters")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Bearer alice"),
        )
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_bodies_are_bad_requests() {
    let app = TestApp::new();

    let response = TestApp::as_user(app.server.post("/api/progress/video"), "alice")
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid request body");

    let response = TestApp::as_user(app.server.post("/api/progress/video"), "alice").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid request body");

    let response = TestApp::as_user(app.server.post("/api/progress/video"), "alice")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid request body");

    let status = app
        .post(
            "/api/progress/video",
            "alice",
            json!({ "chapter_id": 1, "timestamp": -1.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let status = app
        .post(
            "/api/progress/quiz",
            "alice",
            json!({ "chapter_id": 1, "question_index": -2 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chapter_list_and_detail() {
    let app = TestApp::new();

    let chapters = app.get("/api/chapters", "alice").await;
    let chapters = chapters.as_array().unwrap();
    assert_eq!(chapters.len(), 3);
    let orders: Vec<i64> = chapters
        .iter()
        .map(|c| c["order_index"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);

    let id = chapters[0]["id"].as_i64().unwrap();
    let detail = app.get(&format!("/api/chapters/{}", id), "alice").await;
    assert_eq!(detail["chapter"]["id"], id);
    let questions = detail["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_chapter_detail_errors() {
    let app = TestApp::new();

    let response = TestApp::as_user(app.server.get("/api/chapters/9999"), "alice").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Chapter not found");

    TestApp::as_user(app.server.get("/api/chapters/abc"), "alice")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_new_user_resumes_at_first_video() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    let body = app.get("/api/progress/resume", "alice").await;
    let point = &body["resume_point"];
    assert_eq!(point["chapter_id"], ids[0]);
    assert_eq!(point["content_type"], "video");
    assert_eq!(point["video_timestamp"], 0.0);
}

#[tokio::test]
async fn test_partial_video_resumes_at_timestamp() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    let status = app
        .post(
            "/api/progress/video",
            "alice",
            json!({ "chapter_id": ids[1], "timestamp": 95.5, "duration": 600.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = app.get("/api/progress/resume", "alice").await;
    let point = &body["resume_point"];
    assert_eq!(point["chapter_id"], ids[1]);
    assert_eq!(point["content_type"], "video");
    assert_eq!(point["video_timestamp"], 95.5);
}

#[tokio::test]
async fn test_completed_video_resumes_at_quiz() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    let status = app
        .post(
            "/api/progress/video",
            "alice",
            json!({ "chapter_id": ids[0], "timestamp": 596.0, "completed": true }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = app.get("/api/progress/resume", "alice").await;
    let point = &body["resume_point"];
    assert_eq!(point["chapter_id"], ids[0]);
    assert_eq!(point["content_type"], "quiz");
    assert_eq!(point["quiz_question_index"], 0);
    assert_eq!(point["total_questions"], 5);
}

#[tokio::test]
async fn test_progress_overview_percentages() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    app.post(
        "/api/progress/video",
        "alice",
        json!({ "chapter_id": ids[0], "timestamp": 596.0, "completed": true }),
    )
    .await;
    app.post(
        "/api/progress/quiz",
        "alice",
        json!({ "chapter_id": ids[0], "question_index": 2, "answers": [1, 0] }),
    )
    .await;

    let body = app.get("/api/progress", "alice").await;
    let first = &body["chapters"][0];
    assert_eq!(first["video_progress"], 596.0);
    assert_eq!(first["video_completed"], true);
    assert_eq!(first["quiz_progress"], 40.0);
    assert_eq!(first["quiz_completed"], false);
    assert_eq!(body["chapters"][1]["video_progress"], 0.0);

    let point = &body["resume_point"];
    assert_eq!(point["content_type"], "quiz");
    assert_eq!(point["quiz_question_index"], 2);
}

#[tokio::test]
async fn test_all_complete_has_null_resume_point() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    for id in &ids {
        app.post(
            "/api/progress/video",
            "alice",
            json!({ "chapter_id": id, "timestamp": 600.0, "completed": true }),
        )
        .await;
        app.post(
            "/api/progress/quiz",
            "alice",
            json!({
                "chapter_id": id,
                "question_index": 5,
                "answers": [0, 1, 2, 3, 0],
                "completed": true,
            }),
        )
        .await;
    }

    let body = app.get("/api/progress/resume", "alice").await;
    assert!(body["resume_point"].is_null());

    let body = app.get("/api/progress", "alice").await;
    assert!(body.get("resume_point").is_none());
}

#[tokio::test]
async fn test_quiz_save_accepts_null_answers() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    let status = app
        .post(
            "/api/progress/quiz",
            "alice",
            json!({ "chapter_id": ids[0], "question_index": 1, "answers": null }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = app.get("/api/progress/resume", "alice").await;
    assert_eq!(body["resume_point"]["content_type"], "quiz");
    assert_eq!(body["resume_point"]["quiz_question_index"], 1);
}

#[tokio::test]
async fn test_unknown_chapter_save_is_not_found() {
    let app = TestApp::new();

    let status = app
        .post(
            "/api/progress/video",
            "alice",
            json!({ "chapter_id": 9999, "timestamp": 1.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let status = app
        .post("/api/progress/quiz", "alice", json!({ "chapter_id": 9999 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_progress_is_isolated_per_user() {
    let app = TestApp::new();
    let ids = app.chapter_ids("alice").await;

    app.post(
        "/api/progress/video",
        "alice",
        json!({ "chapter_id": ids[2], "timestamp": 42.0 }),
    )
    .await;

    let body = app.get("/api/progress/resume", "bob").await;
    assert_eq!(body["resume_point"]["chapter_id"], ids[0]);
    assert_eq!(body["resume_point"]["video_timestamp"], 0.0);
}
