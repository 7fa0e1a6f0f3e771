//! Application state shared by all handlers.

use crate::db::DbPool;

#[derive(Clone)]
pub struct AppState {
    /// The single store connection, shared across requests
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
