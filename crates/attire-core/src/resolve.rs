//! Best-effort resolution of outfit item references.
//!
//! Outfit documents store their item list as a mix of inline objects and
//! bare wardrobe ids. Resolution substitutes a fixed-shape placeholder for
//! anything that cannot be turned into a full item, so the caller always
//! receives one object per reference.

use crate::{
  outfit::{ItemRef, WardrobeItem},
  store::OutfitStore,
};

/// Resolve `refs` into full wardrobe items, order preserved.
///
/// Never fails: unknown ids, store errors, and malformed entries all
/// produce placeholder items. `user_id` is used only for log context.
pub async fn resolve_items<S>(
  store: &S,
  refs: &[ItemRef],
  user_id: &str,
) -> Vec<WardrobeItem>
where
  S: OutfitStore,
{
  let mut resolved = Vec::with_capacity(refs.len());

  for item in refs {
    match item {
      ItemRef::Inline(item) => resolved.push(item.clone()),
      ItemRef::Id(id) => match store.get_item(id).await {
        Ok(Some(mut item)) => {
          // Wardrobe documents do not embed their own id.
          item.id = id.clone();
          resolved.push(item);
        }
        Ok(None) => {
          tracing::warn!(
            item_id = %id,
            user_id = %user_id,
            "item not found in wardrobe",
          );
          resolved.push(WardrobeItem::missing(id));
        }
        Err(e) => {
          tracing::error!(
            item_id = %id,
            user_id = %user_id,
            error = %e,
            "failed to fetch wardrobe item",
          );
          resolved.push(WardrobeItem::load_error(id));
        }
      },
      ItemRef::Other(value) => {
        tracing::warn!(
          user_id = %user_id,
          value = %value,
          "unexpected item reference shape",
        );
        resolved.push(WardrobeItem::invalid(value));
      }
    }
  }

  resolved
}

#[cfg(test)]
mod tests {
  use std::{collections::HashMap, sync::Mutex};

  use serde_json::json;
  use uuid::Uuid;

  use super::*;
  use crate::{
    feedback::{Feedback, NewFeedback},
    outfit::Outfit,
  };

  /// Wardrobe-only store; the outfit and feedback methods are unreachable
  /// in these tests.
  #[derive(Default)]
  struct MemStore {
    items: Mutex<HashMap<String, WardrobeItem>>,
  }

  impl OutfitStore for MemStore {
    type Error = std::convert::Infallible;

    async fn put_outfit(&self, _outfit: Outfit) -> Result<(), Self::Error> {
      unreachable!()
    }

    async fn get_outfit(&self, _id: Uuid) -> Result<Option<Outfit>, Self::Error> {
      unreachable!()
    }

    async fn list_outfits(
      &self,
      _user_id: &str,
      _limit: usize,
      _offset: usize,
    ) -> Result<Vec<Outfit>, Self::Error> {
      unreachable!()
    }

    async fn delete_outfit(&self, _id: Uuid) -> Result<(), Self::Error> {
      unreachable!()
    }

    async fn put_item(&self, item: WardrobeItem) -> Result<(), Self::Error> {
      self.items.lock().unwrap().insert(item.id.clone(), item);
      Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<WardrobeItem>, Self::Error> {
      Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn record_feedback(
      &self,
      _input: NewFeedback,
    ) -> Result<Feedback, Self::Error> {
      unreachable!()
    }

    async fn set_last_feedback(
      &self,
      _outfit_id: Uuid,
      _feedback: &Feedback,
    ) -> Result<(), Self::Error> {
      unreachable!()
    }
  }

  /// Store whose wardrobe lookups always fail.
  struct FailingStore;

  impl OutfitStore for FailingStore {
    type Error = std::io::Error;

    async fn put_outfit(&self, _outfit: Outfit) -> Result<(), Self::Error> {
      unreachable!()
    }

    async fn get_outfit(&self, _id: Uuid) -> Result<Option<Outfit>, Self::Error> {
      unreachable!()
    }

    async fn list_outfits(
      &self,
      _user_id: &str,
      _limit: usize,
      _offset: usize,
    ) -> Result<Vec<Outfit>, Self::Error> {
      unreachable!()
    }

    async fn delete_outfit(&self, _id: Uuid) -> Result<(), Self::Error> {
      unreachable!()
    }

    async fn put_item(&self, _item: WardrobeItem) -> Result<(), Self::Error> {
      unreachable!()
    }

    async fn get_item(&self, _id: &str) -> Result<Option<WardrobeItem>, Self::Error> {
      Err(std::io::Error::other("wardrobe offline"))
    }

    async fn record_feedback(
      &self,
      _input: NewFeedback,
    ) -> Result<Feedback, Self::Error> {
      unreachable!()
    }

    async fn set_last_feedback(
      &self,
      _outfit_id: Uuid,
      _feedback: &Feedback,
    ) -> Result<(), Self::Error> {
      unreachable!()
    }
  }

  fn item(id: &str, name: &str) -> WardrobeItem {
    WardrobeItem {
      id:        id.to_string(),
      name:      name.to_string(),
      kind:      "top".to_string(),
      image_url: None,
      extra:     serde_json::Map::new(),
    }
  }

  #[tokio::test]
  async fn mixed_list_resolves_in_order() {
    let store = MemStore::default();
    store
      .put_item(item("id-present", "Blue oxford shirt"))
      .await
      .unwrap();

    let refs = vec![
      ItemRef::Id("id-present".to_string()),
      ItemRef::Inline(WardrobeItem {
        name: "X".to_string(),
        ..Default::default()
      }),
      ItemRef::Id("id-missing".to_string()),
      ItemRef::Other(json!(123)),
    ];

    let resolved = resolve_items(&store, &refs, "user-1").await;

    assert_eq!(resolved.len(), 4);
    assert_eq!(resolved[0].name, "Blue oxford shirt");
    assert_eq!(resolved[0].id, "id-present");
    assert_eq!(resolved[1].name, "X");
    assert_eq!(resolved[2].name, "Item not found");
    assert_eq!(resolved[2].id, "id-missing");
    assert_eq!(resolved[3].name, "Invalid item");
    assert_eq!(resolved[3].id, "123");
  }

  #[tokio::test]
  async fn found_item_gets_the_id_stamped_in() {
    let store = MemStore::default();
    // Wardrobe docs are stored without their own id.
    store
      .put_item(WardrobeItem {
        id: "w-9".to_string(),
        name: "Suede loafers".to_string(),
        kind: "shoes".to_string(),
        ..Default::default()
      })
      .await
      .unwrap();

    let resolved =
      resolve_items(&store, &[ItemRef::Id("w-9".to_string())], "user-1").await;
    assert_eq!(resolved[0].id, "w-9");
    assert_eq!(resolved[0].kind, "shoes");
  }

  #[tokio::test]
  async fn store_error_degrades_to_placeholder() {
    let refs = vec![ItemRef::Id("id-1".to_string())];
    let resolved = resolve_items(&FailingStore, &refs, "user-1").await;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "Error loading item");
    assert_eq!(resolved[0].id, "id-1");
  }

  #[tokio::test]
  async fn empty_input_yields_empty_output() {
    let store = MemStore::default();
    let resolved = resolve_items(&store, &[], "user-1").await;
    assert!(resolved.is_empty());
  }
}
