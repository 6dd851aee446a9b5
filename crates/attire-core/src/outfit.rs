//! Outfit documents and the item references they carry.
//!
//! An outfit's item list is stored as a mix of inline objects and bare
//! wardrobe document ids; [`ItemRef`] gives each shape an explicit case.
//! Resolution into full [`WardrobeItem`]s happens in [`crate::resolve`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::feedback::Feedback;

// ─── Wardrobe items ──────────────────────────────────────────────────────────

/// A wardrobe item document.
///
/// All fields are lenient on input so that partial inline objects inside an
/// outfit's item list still deserialise; fields beyond the known set are
/// preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
  #[serde(default)]
  pub id:        String,
  #[serde(default)]
  pub name:      String,
  /// Item category, e.g. "top", "shoes". Wire name `type`.
  #[serde(default, rename = "type")]
  pub kind:      String,
  #[serde(default, rename = "imageUrl")]
  pub image_url: Option<String>,
  /// Any further document fields; round-tripped untouched.
  #[serde(flatten)]
  pub extra:     serde_json::Map<String, Value>,
}

impl WardrobeItem {
  fn placeholder(id: String, name: &str) -> Self {
    Self {
      id,
      name: name.to_string(),
      kind: "unknown".to_string(),
      image_url: None,
      extra: serde_json::Map::new(),
    }
  }

  /// Placeholder for an id with no wardrobe document behind it.
  pub fn missing(id: &str) -> Self {
    Self::placeholder(id.to_string(), "Item not found")
  }

  /// Placeholder for an id whose lookup failed.
  pub fn load_error(id: &str) -> Self {
    Self::placeholder(id.to_string(), "Error loading item")
  }

  /// Placeholder for a reference that is neither an id nor an object.
  /// The offending value is stringified into the id field.
  pub fn invalid(value: &Value) -> Self {
    Self::placeholder(value.to_string(), "Invalid item")
  }
}

// ─── Item references ─────────────────────────────────────────────────────────

/// A single entry in an outfit's item list.
///
/// Decoded untagged: a JSON string is a wardrobe id, a JSON object is an
/// inline item, and anything else falls through to [`ItemRef::Other`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
  /// A bare wardrobe document id.
  Id(String),
  /// An already-resolved item embedded in the outfit document.
  Inline(WardrobeItem),
  /// Anything else; resolves to an invalid-item placeholder.
  Other(Value),
}

// ─── Outfits ─────────────────────────────────────────────────────────────────

/// A saved outfit combination.
///
/// Created by the generation pipeline; this service reads, lists, and
/// deletes outfits and attaches feedback. Attaching feedback is the only
/// mutation and also sets `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
  pub outfit_id:        Uuid,
  /// Owning user; every operation checks this against the requester.
  pub user_id:          String,
  pub name:             String,
  pub style:            String,
  pub mood:             String,
  pub items:            Vec<ItemRef>,
  pub occasion:         String,
  pub confidence_score: f64,
  pub reasoning:        String,
  /// Latest feedback only; overwritten on every submission.
  pub last_feedback:    Option<Feedback>,
  pub created_at:       DateTime<Utc>,
  pub updated_at:       Option<DateTime<Utc>>,
}
