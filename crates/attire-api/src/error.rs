//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Domain failures carry their own status. Everything else is collapsed to
/// a generic 500: the source is logged, and no internal detail reaches the
/// caller.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("missing user identity")]
  Unauthorized,

  #[error("outfit not found")]
  NotFound,

  #[error("access denied")]
  Forbidden,

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<attire_core::Error> for ApiError {
  fn from(e: attire_core::Error) -> Self {
    use attire_core::Error;
    match e {
      Error::NotFound(_) => ApiError::NotFound,
      Error::Forbidden(_) => ApiError::Forbidden,
      e @ Error::RatingOutOfRange(_) => ApiError::BadRequest(e.to_string()),
      Error::Store(source) => ApiError::Internal(source),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
      }
      ApiError::NotFound => (StatusCode::NOT_FOUND, "Outfit not found".to_string()),
      ApiError::Forbidden => (StatusCode::FORBIDDEN, "Access denied".to_string()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Internal server error".to_string(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
