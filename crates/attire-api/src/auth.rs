//! Request identity.
//!
//! Authentication happens upstream; the fronting gateway verifies the
//! session and forwards the user id in the `x-user-id` header. This
//! extractor only surfaces that identity to handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

/// Header carrying the verified user id, set by the gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user on whose behalf a request runs.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    let user_id = parts
      .headers
      .get(USER_ID_HEADER)
      .and_then(|v| v.to_str().ok())
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .ok_or(ApiError::Unauthorized)?;

    Ok(CurrentUser(user_id.to_string()))
  }
}
