//! Caller identification.
//!
//! There are no credentials: the client names its user in the `X-User-ID`
//! header (or as a bearer token) and the server takes it at its word.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::config::USER_ID_HEADER;
use crate::error::ApiError;
use crate::state::AppState;

/// The identified caller.
/// Add this as a handler parameter to require a user id.
/// Rejects with `ApiError::Unauthorized` when none is supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pull the caller's user id out of the request headers.
pub fn user_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let explicit = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let bearer = || {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    explicit.or_else(bearer).map(str::to_string)
}

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        user_id_from_headers(&parts.headers)
            .map(UserId)
            .ok_or(ApiError::Unauthorized)
    }
}
