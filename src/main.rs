use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resume_learning::{config, db, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "resume_learning=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_database_path();
  let pool = db::open_store(&db_path).expect("Failed to initialize database");

  let app = resume_learning::app(AppState::new(pool));

  let port = config::server_port();
  let bind_addr = config::server_bind_addr(port);
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", port);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
