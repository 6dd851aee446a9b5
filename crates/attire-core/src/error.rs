//! Error types for `attire-core`.

use thiserror::Error;
use uuid::Uuid;

/// Domain-level failures for outfit operations.
///
/// `NotFound` and `Forbidden` reach the HTTP layer with their specific
/// status; everything else collapses to a generic internal error there.
#[derive(Debug, Error)]
pub enum Error {
  #[error("outfit not found: {0}")]
  NotFound(Uuid),

  #[error("access denied to outfit {0}")]
  Forbidden(Uuid),

  #[error("rating {0} is outside the 1-5 scale")]
  RatingOutOfRange(u8),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
