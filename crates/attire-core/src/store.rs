//! The `OutfitStore` trait and the shared ownership gate.
//!
//! The trait is implemented by storage backends (e.g.
//! `attire-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::{
  Error, Result,
  feedback::{Feedback, NewFeedback},
  outfit::{Outfit, WardrobeItem},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the document store holding outfits, wardrobe items, and
/// feedback records.
pub trait OutfitStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Outfits ───────────────────────────────────────────────────────────

  /// Write a full outfit document (insert or replace). Outfit creation
  /// happens in the generation pipeline, which shares this store.
  fn put_outfit(
    &self,
    outfit: Outfit,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve an outfit by id. Returns `None` if not found.
  fn get_outfit(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Outfit>, Self::Error>> + Send + '_;

  /// List outfits owned by `user_id` in store-native order, applying
  /// `offset` then `limit`.
  fn list_outfits<'a>(
    &'a self,
    user_id: &'a str,
    limit: usize,
    offset: usize,
  ) -> impl Future<Output = Result<Vec<Outfit>, Self::Error>> + Send + 'a;

  /// Remove an outfit permanently. Removing an id that is already gone is
  /// not an error; existence checks belong to the caller.
  fn delete_outfit(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Wardrobe items ────────────────────────────────────────────────────

  /// Write a wardrobe item document keyed by `item.id`.
  fn put_item(
    &self,
    item: WardrobeItem,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve a wardrobe item by document id. Returns `None` if not found.
  fn get_item<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<WardrobeItem>, Self::Error>> + Send + 'a;

  // ── Feedback ──────────────────────────────────────────────────────────

  /// Persist a new feedback record and return it. `feedback_id` and
  /// `created_at` are assigned by the store.
  fn record_feedback(
    &self,
    input: NewFeedback,
  ) -> impl Future<Output = Result<Feedback, Self::Error>> + Send + '_;

  /// Overwrite the outfit's `last_feedback` and bump `updated_at`. Prior
  /// feedback on the outfit is discarded; the standalone record written by
  /// [`OutfitStore::record_feedback`] is the only trace kept.
  fn set_last_feedback<'a>(
    &'a self,
    outfit_id: Uuid,
    feedback: &'a Feedback,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── Ownership gate ──────────────────────────────────────────────────────────

/// Fetch an outfit and verify it belongs to `user_id`.
///
/// Every read/mutate/delete operation goes through this gate: absent
/// records surface as [`Error::NotFound`] and ownership mismatches as
/// [`Error::Forbidden`], without leaking the record either way.
pub async fn fetch_owned<S>(
  store: &S,
  outfit_id: Uuid,
  user_id: &str,
) -> Result<Outfit>
where
  S: OutfitStore,
{
  let outfit = store
    .get_outfit(outfit_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound(outfit_id))?;

  if outfit.user_id != user_id {
    return Err(Error::Forbidden(outfit_id));
  }

  Ok(outfit)
}
