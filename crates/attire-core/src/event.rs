//! Analytics events and the sink they are delivered to.
//!
//! The analytics backend is an external concern. Handlers hand events to an
//! injected [`AnalyticsSink`] and never observe delivery failures; a sink
//! must not fail the request that produced the event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

/// Event discriminant; snake_case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
  OutfitViewed,
  OutfitsListed,
  OutfitFeedbackSubmitted,
  OutfitDeleted,
}

/// A single analytics event. `metadata` is event-specific JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
  pub user_id:     String,
  pub kind:        EventKind,
  pub metadata:    Value,
  pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
  pub fn new(user_id: impl Into<String>, kind: EventKind, metadata: Value) -> Self {
    Self {
      user_id: user_id.into(),
      kind,
      metadata,
      occurred_at: Utc::now(),
    }
  }
}

/// Destination for analytics events. Delivery is fire-and-forget.
pub trait AnalyticsSink: Send + Sync {
  fn record(&self, event: AnalyticsEvent);
}

/// Sink that emits events as structured tracing records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
  fn record(&self, event: AnalyticsEvent) {
    tracing::info!(
      target: "attire::analytics",
      user_id = %event.user_id,
      kind = %event.kind,
      metadata = %event.metadata,
      "analytics event",
    );
  }
}
