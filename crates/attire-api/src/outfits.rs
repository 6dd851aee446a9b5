//! Handlers for the outfit read and delete endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/` | Optional `?limit` (default 1000) and `?offset` |
//! | `GET`    | `/:outfit_id` | 404 unknown, 403 foreign |
//! | `DELETE` | `/:outfit_id` | Permanent; no cascade to feedback rows |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use attire_core::{
  event::{AnalyticsEvent, EventKind},
  outfit::{Outfit, WardrobeItem},
  resolve::resolve_items,
  store::{OutfitStore, fetch_owned},
};

use crate::{AppState, auth::CurrentUser, error::ApiError};

/// Default result cap for listings; bounds cost on large histories without
/// hiding outfits for realistic wardrobes.
const DEFAULT_LIST_LIMIT: usize = 1000;

// ─── Representation ──────────────────────────────────────────────────────────

/// Wire form of an outfit with its item references resolved.
#[derive(Debug, Serialize)]
pub struct OutfitResponse {
  pub id:               Uuid,
  pub name:             String,
  pub style:            String,
  pub mood:             String,
  pub items:            Vec<WardrobeItem>,
  pub occasion:         String,
  pub confidence_score: f64,
  pub reasoning:        String,
  #[serde(rename = "createdAt")]
  pub created_at:       DateTime<Utc>,
}

impl OutfitResponse {
  fn from_resolved(outfit: Outfit, items: Vec<WardrobeItem>) -> Self {
    Self {
      id: outfit.outfit_id,
      name: outfit.name,
      style: outfit.style,
      mood: outfit.mood,
      items,
      occasion: outfit.occasion,
      confidence_score: outfit.confidence_score,
      reasoning: outfit.reasoning,
      created_at: outfit.created_at,
    }
  }
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /:outfit_id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  CurrentUser(user_id): CurrentUser,
  Path(outfit_id): Path<Uuid>,
) -> Result<Json<OutfitResponse>, ApiError>
where
  S: OutfitStore + Clone + Send + Sync + 'static,
{
  let outfit = fetch_owned(state.store.as_ref(), outfit_id, &user_id).await?;

  let items = resolve_items(state.store.as_ref(), &outfit.items, &user_id).await;

  state.analytics.record(AnalyticsEvent::new(
    &user_id,
    EventKind::OutfitViewed,
    json!({ "outfit_id": outfit_id, "occasion": outfit.occasion }),
  ));

  Ok(Json(OutfitResponse::from_resolved(outfit, items)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub limit:  Option<usize>,
  #[serde(default)]
  pub offset: usize,
}

/// `GET /?limit=<n>&offset=<n>` — the requester's outfit history, in
/// store-native order.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  CurrentUser(user_id): CurrentUser,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<OutfitResponse>>, ApiError>
where
  S: OutfitStore + Clone + Send + Sync + 'static,
{
  let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

  let outfits = state
    .store
    .list_outfits(&user_id, limit, params.offset)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  let mut responses = Vec::with_capacity(outfits.len());
  for outfit in outfits {
    let items = resolve_items(state.store.as_ref(), &outfit.items, &user_id).await;
    responses.push(OutfitResponse::from_resolved(outfit, items));
  }

  state.analytics.record(AnalyticsEvent::new(
    &user_id,
    EventKind::OutfitsListed,
    json!({
      "outfit_count": responses.len(),
      "limit": limit,
      "offset": params.offset,
    }),
  ));

  Ok(Json(responses))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub message: String,
}

/// `DELETE /:outfit_id` — permanent removal. Feedback records survive.
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  CurrentUser(user_id): CurrentUser,
  Path(outfit_id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: OutfitStore + Clone + Send + Sync + 'static,
{
  let outfit = fetch_owned(state.store.as_ref(), outfit_id, &user_id).await?;

  state
    .store
    .delete_outfit(outfit_id)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  state.analytics.record(AnalyticsEvent::new(
    &user_id,
    EventKind::OutfitDeleted,
    json!({ "outfit_id": outfit_id, "occasion": outfit.occasion }),
  ));

  tracing::info!(outfit_id = %outfit_id, "outfit deleted");

  Ok(Json(DeleteResponse {
    message: "Outfit deleted successfully".to_string(),
  }))
}
