//! Feedback records attached to outfits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::{Error, Result};

/// How the user characterised their feedback.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackCategory {
  Like,
  Dislike,
  Comment,
}

/// A stored feedback record.
///
/// One row per submission; rows are never updated or deleted here. The
/// owning outfit additionally carries the latest record as `last_feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
  pub feedback_id: Uuid,
  pub outfit_id:   Uuid,
  pub user_id:     String,
  /// 1-5 scale.
  pub rating:      u8,
  pub category:    FeedbackCategory,
  pub comment:     Option<String>,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::OutfitStore::record_feedback`].
/// `feedback_id` and `created_at` are set by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone)]
pub struct NewFeedback {
  pub outfit_id: Uuid,
  pub user_id:   String,
  pub rating:    u8,
  pub category:  FeedbackCategory,
  pub comment:   Option<String>,
}

impl NewFeedback {
  /// Ratings are a 1-5 scale.
  pub fn validate(&self) -> Result<()> {
    if !(1..=5).contains(&self.rating) {
      return Err(Error::RatingOutOfRange(self.rating));
    }
    Ok(())
  }
}
