//! [`SqliteStore`] — the SQLite implementation of [`OutfitStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use attire_core::{
  feedback::{Feedback, NewFeedback},
  outfit::{Outfit, WardrobeItem},
  store::OutfitStore,
};

use crate::{
  Error, Result,
  encode::{
    RawOutfit, decode_category, decode_dt, decode_uuid, encode_category,
    encode_dt, encode_feedback, encode_uuid,
  },
  schema::SCHEMA,
};

const OUTFIT_COLUMNS: &str = "outfit_id, user_id, name, style, mood, \
   items_json, occasion, confidence_score, reasoning, last_feedback, \
   created_at, updated_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Attire document store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// All feedback rows for an outfit, oldest first. Not part of the
  /// [`OutfitStore`] trait — the HTTP layer never reads these rows; they
  /// exist for offline analysis and as the only feedback history kept.
  pub async fn list_feedback(&self, outfit_id: Uuid) -> Result<Vec<Feedback>> {
    let id_str = encode_uuid(outfit_id);

    let raws: Vec<(String, String, String, u8, String, Option<String>, String)> =
      self
        .conn
        .call(move |conn| {
          let mut stmt = conn.prepare(
            "SELECT feedback_id, outfit_id, user_id, rating, category,
                    comment, created_at
             FROM outfit_feedback
             WHERE outfit_id = ?1
             ORDER BY rowid",
          )?;
          let rows = stmt
            .query_map(rusqlite::params![id_str], |row| {
              Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
              ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
          Ok(rows)
        })
        .await?;

    raws
      .into_iter()
      .map(
        |(feedback_id, outfit_id, user_id, rating, category, comment, created_at)| {
          Ok(Feedback {
            feedback_id: decode_uuid(&feedback_id)?,
            outfit_id:   decode_uuid(&outfit_id)?,
            user_id,
            rating,
            category:    decode_category(&category)?,
            comment,
            created_at:  decode_dt(&created_at)?,
          })
        },
      )
      .collect()
  }
}

// ─── OutfitStore impl ────────────────────────────────────────────────────────

impl OutfitStore for SqliteStore {
  type Error = Error;

  // ── Outfits ───────────────────────────────────────────────────────────────

  async fn put_outfit(&self, outfit: Outfit) -> Result<()> {
    let outfit_id_str = encode_uuid(outfit.outfit_id);
    let user_id       = outfit.user_id.clone();
    let name          = outfit.name.clone();
    let style         = outfit.style.clone();
    let mood          = outfit.mood.clone();
    let items_json    = serde_json::to_string(&outfit.items)?;
    let occasion      = outfit.occasion.clone();
    let confidence    = outfit.confidence_score;
    let reasoning     = outfit.reasoning.clone();
    let feedback_json = outfit
      .last_feedback
      .as_ref()
      .map(encode_feedback)
      .transpose()?;
    let created_str   = encode_dt(outfit.created_at);
    let updated_str   = outfit.updated_at.map(encode_dt);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO outfits (
             outfit_id, user_id, name, style, mood, items_json,
             occasion, confidence_score, reasoning, last_feedback,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
          rusqlite::params![
            outfit_id_str,
            user_id,
            name,
            style,
            mood,
            items_json,
            occasion,
            confidence,
            reasoning,
            feedback_json,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get_outfit(&self, id: Uuid) -> Result<Option<Outfit>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawOutfit> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {OUTFIT_COLUMNS} FROM outfits WHERE outfit_id = ?1"),
              rusqlite::params![id_str],
              RawOutfit::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawOutfit::into_outfit).transpose()
  }

  async fn list_outfits(
    &self,
    user_id: &str,
    limit: usize,
    offset: usize,
  ) -> Result<Vec<Outfit>> {
    let user       = user_id.to_owned();
    let limit_val  = limit as i64;
    let offset_val = offset as i64;

    let raws: Vec<RawOutfit> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {OUTFIT_COLUMNS} FROM outfits
           WHERE user_id = ?1
           ORDER BY rowid
           LIMIT ?2 OFFSET ?3"
        ))?;
        let rows = stmt
          .query_map(
            rusqlite::params![user, limit_val, offset_val],
            RawOutfit::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawOutfit::into_outfit).collect()
  }

  async fn delete_outfit(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM outfits WHERE outfit_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Wardrobe items ────────────────────────────────────────────────────────

  async fn put_item(&self, item: WardrobeItem) -> Result<()> {
    let item_id  = item.id.clone();
    let doc_json = serde_json::to_string(&item)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO wardrobe_items (item_id, doc_json) VALUES (?1, ?2)",
          rusqlite::params![item_id, doc_json],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get_item(&self, id: &str) -> Result<Option<WardrobeItem>> {
    let id_str = id.to_owned();

    let doc: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT doc_json FROM wardrobe_items WHERE item_id = ?1",
              rusqlite::params![id_str],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    doc
      .as_deref()
      .map(|s| Ok(serde_json::from_str(s)?))
      .transpose()
  }

  // ── Feedback ──────────────────────────────────────────────────────────────

  async fn record_feedback(&self, input: NewFeedback) -> Result<Feedback> {
    let feedback = Feedback {
      feedback_id: Uuid::new_v4(),
      outfit_id:   input.outfit_id,
      user_id:     input.user_id,
      rating:      input.rating,
      category:    input.category,
      comment:     input.comment,
      created_at:  Utc::now(),
    };

    let id_str        = encode_uuid(feedback.feedback_id);
    let outfit_id_str = encode_uuid(feedback.outfit_id);
    let user_id       = feedback.user_id.clone();
    let rating        = feedback.rating as i64;
    let category_str  = encode_category(feedback.category);
    let comment       = feedback.comment.clone();
    let at_str        = encode_dt(feedback.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO outfit_feedback (
             feedback_id, outfit_id, user_id, rating, category, comment, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            outfit_id_str,
            user_id,
            rating,
            category_str,
            comment,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(feedback)
  }

  async fn set_last_feedback(
    &self,
    outfit_id: Uuid,
    feedback: &Feedback,
  ) -> Result<()> {
    let id_str        = encode_uuid(outfit_id);
    let feedback_json = encode_feedback(feedback)?;
    let updated_str   = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE outfits SET last_feedback = ?2, updated_at = ?3
           WHERE outfit_id = ?1",
          rusqlite::params![id_str, feedback_json, updated_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
