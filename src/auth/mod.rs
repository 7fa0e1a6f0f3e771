//! User identification: the login endpoints and the `UserId` extractor.

pub mod handlers;
pub mod middleware;

pub use handlers::{login, logout};
pub use middleware::UserId;
