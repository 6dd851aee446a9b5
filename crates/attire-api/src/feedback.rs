//! Handler for `POST /feedback`.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use attire_core::{
  event::{AnalyticsEvent, EventKind},
  feedback::{FeedbackCategory, NewFeedback},
  store::{OutfitStore, fetch_owned},
};

use crate::{AppState, auth::CurrentUser, error::ApiError};

/// JSON body accepted by `POST /feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
  pub outfit_id:     Uuid,
  /// 1-5 scale.
  pub rating:        u8,
  pub feedback_type: FeedbackCategory,
  pub comment:       Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
  pub message:     String,
  pub feedback_id: Uuid,
}

/// `POST /feedback` — attach a new feedback record to an owned outfit.
///
/// The outfit document keeps only the latest feedback; earlier submissions
/// survive as standalone records. The record insert and the outfit update
/// are two separate store calls — concurrent submissions race and the last
/// writer wins.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  CurrentUser(user_id): CurrentUser,
  Json(body): Json<FeedbackBody>,
) -> Result<Json<FeedbackResponse>, ApiError>
where
  S: OutfitStore + Clone + Send + Sync + 'static,
{
  fetch_owned(state.store.as_ref(), body.outfit_id, &user_id).await?;

  let input = NewFeedback {
    outfit_id: body.outfit_id,
    user_id:   user_id.clone(),
    rating:    body.rating,
    category:  body.feedback_type,
    comment:   body.comment,
  };
  input.validate()?;

  let feedback = state
    .store
    .record_feedback(input)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  state
    .store
    .set_last_feedback(body.outfit_id, &feedback)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  state.analytics.record(AnalyticsEvent::new(
    &user_id,
    EventKind::OutfitFeedbackSubmitted,
    json!({
      "outfit_id": body.outfit_id,
      "rating": feedback.rating,
      "feedback_type": feedback.category,
      "has_comment": feedback.comment.is_some(),
    }),
  ));

  tracing::info!(
    outfit_id = %body.outfit_id,
    feedback_id = %feedback.feedback_id,
    "outfit feedback submitted",
  );

  Ok(Json(FeedbackResponse {
    message:     "Feedback submitted successfully".to_string(),
    feedback_id: feedback.feedback_id,
  }))
}
