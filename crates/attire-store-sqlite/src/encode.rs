//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Open-shaped fields (item
//! references, last feedback, wardrobe documents) are stored as compact
//! JSON. UUIDs are stored as hyphenated lowercase strings.

use attire_core::{
  feedback::{Feedback, FeedbackCategory},
  outfit::Outfit,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── FeedbackCategory ────────────────────────────────────────────────────────

pub fn encode_category(c: FeedbackCategory) -> String { c.to_string() }

pub fn decode_category(s: &str) -> Result<FeedbackCategory> { Ok(s.parse()?) }

// ─── Feedback ────────────────────────────────────────────────────────────────

pub fn encode_feedback(f: &Feedback) -> Result<String> {
  Ok(serde_json::to_string(f)?)
}

pub fn decode_feedback(s: &str) -> Result<Feedback> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw column values read directly from an `outfits` row.
pub struct RawOutfit {
  pub outfit_id:        String,
  pub user_id:          String,
  pub name:             String,
  pub style:            String,
  pub mood:             String,
  pub items_json:       String,
  pub occasion:         String,
  pub confidence_score: f64,
  pub reasoning:        String,
  pub last_feedback:    Option<String>,
  pub created_at:       String,
  pub updated_at:       Option<String>,
}

impl RawOutfit {
  /// Column order must match the SELECT lists in `store.rs`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      outfit_id:        row.get(0)?,
      user_id:          row.get(1)?,
      name:             row.get(2)?,
      style:            row.get(3)?,
      mood:             row.get(4)?,
      items_json:       row.get(5)?,
      occasion:         row.get(6)?,
      confidence_score: row.get(7)?,
      reasoning:        row.get(8)?,
      last_feedback:    row.get(9)?,
      created_at:       row.get(10)?,
      updated_at:       row.get(11)?,
    })
  }

  pub fn into_outfit(self) -> Result<Outfit> {
    Ok(Outfit {
      outfit_id:        decode_uuid(&self.outfit_id)?,
      user_id:          self.user_id,
      name:             self.name,
      style:            self.style,
      mood:             self.mood,
      items:            serde_json::from_str(&self.items_json)?,
      occasion:         self.occasion,
      confidence_score: self.confidence_score,
      reasoning:        self.reasoning,
      last_feedback:    self
        .last_feedback
        .as_deref()
        .map(decode_feedback)
        .transpose()?,
      created_at:       decode_dt(&self.created_at)?,
      updated_at:       self.updated_at.as_deref().map(decode_dt).transpose()?,
    })
  }
}
