//! Application configuration.
//!
//! Values come from `config.toml` first, then environment variables (a
//! `.env` file is honoured), then the defaults below.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
    server: Option<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    port: Option<u16>,
}

const CONFIG_FILE: &str = "config.toml";

fn parse_config(contents: &str) -> Option<AppConfig> {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", CONFIG_FILE, e);
            None
        }
    }
}

fn read_config_file() -> AppConfig {
    std::fs::read_to_string(CONFIG_FILE)
        .ok()
        .and_then(|contents| parse_config(&contents))
        .unwrap_or_default()
}

// ==================== Database Configuration ====================

/// Load database path with priority: config.toml > DATABASE_PATH > default
pub fn load_database_path() -> PathBuf {
    let _ = dotenvy::dotenv();

    if let Some(path) = read_config_file().database.and_then(|db| db.path) {
        tracing::info!("Using database from {}: {}", CONFIG_FILE, path);
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from(paths::db_path());
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Server port with priority: config.toml > PORT > default
pub fn server_port() -> u16 {
    let _ = dotenvy::dotenv();

    if let Some(port) = read_config_file().server.and_then(|s| s.port) {
        return port;
    }

    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// Get the full server bind address
pub fn server_bind_addr(port: u16) -> String {
    format!("{}:{}", SERVER_ADDR, port)
}

// ==================== API Configuration ====================

/// Header carrying the caller's user id on protected endpoints
pub const USER_ID_HEADER: &str = "x-user-id";

/// Nominal number of questions per chapter quiz, used as the denominator of
/// the quiz progress percentage regardless of the chapter's real count.
pub const QUIZ_QUESTIONS_PER_CHAPTER: u32 = 5;
