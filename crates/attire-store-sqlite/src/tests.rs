//! Integration tests for `SqliteStore` against an in-memory database.

use attire_core::{
  feedback::{FeedbackCategory, NewFeedback},
  outfit::{ItemRef, Outfit, WardrobeItem},
  store::OutfitStore,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn outfit(user_id: &str, name: &str) -> Outfit {
  Outfit {
    outfit_id:        Uuid::new_v4(),
    user_id:          user_id.to_string(),
    name:             name.to_string(),
    style:            "casual".to_string(),
    mood:             "relaxed".to_string(),
    items:            vec![
      ItemRef::Id("w-1".to_string()),
      ItemRef::Inline(WardrobeItem {
        name: "Grey beanie".to_string(),
        ..Default::default()
      }),
    ],
    occasion:         "Work".to_string(),
    confidence_score: 0.82,
    reasoning:        "Warm neutrals for an overcast day".to_string(),
    last_feedback:    None,
    created_at:       Utc::now(),
    updated_at:       None,
  }
}

fn feedback_input(outfit_id: Uuid, user_id: &str, rating: u8) -> NewFeedback {
  NewFeedback {
    outfit_id,
    user_id: user_id.to_string(),
    rating,
    category: FeedbackCategory::Like,
    comment: None,
  }
}

// ─── Outfits ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_and_get_outfit_round_trip() {
  let s = store().await;
  let o = outfit("user-1", "Rainy day layers");

  s.put_outfit(o.clone()).await.unwrap();

  let fetched = s.get_outfit(o.outfit_id).await.unwrap().unwrap();
  assert_eq!(fetched.outfit_id, o.outfit_id);
  assert_eq!(fetched.user_id, "user-1");
  assert_eq!(fetched.name, "Rainy day layers");
  assert_eq!(fetched.occasion, "Work");
  assert_eq!(fetched.confidence_score, 0.82);
  assert!(fetched.last_feedback.is_none());
  assert!(fetched.updated_at.is_none());

  // Item references survive with their shapes intact.
  assert_eq!(fetched.items.len(), 2);
  assert!(matches!(&fetched.items[0], ItemRef::Id(id) if id == "w-1"));
  assert!(
    matches!(&fetched.items[1], ItemRef::Inline(item) if item.name == "Grey beanie")
  );
}

#[tokio::test]
async fn get_outfit_missing_returns_none() {
  let s = store().await;
  let result = s.get_outfit(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn put_outfit_replaces_existing_document() {
  let s = store().await;
  let mut o = outfit("user-1", "First name");
  s.put_outfit(o.clone()).await.unwrap();

  o.name = "Second name".to_string();
  s.put_outfit(o.clone()).await.unwrap();

  let fetched = s.get_outfit(o.outfit_id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "Second name");
  assert_eq!(s.list_outfits("user-1", 1000, 0).await.unwrap().len(), 1);
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_outfits_filters_by_owner() {
  let s = store().await;
  s.put_outfit(outfit("alice", "a-1")).await.unwrap();
  s.put_outfit(outfit("bob", "b-1")).await.unwrap();
  s.put_outfit(outfit("alice", "a-2")).await.unwrap();

  let listed = s.list_outfits("alice", 1000, 0).await.unwrap();
  assert_eq!(listed.len(), 2);
  assert!(listed.iter().all(|o| o.user_id == "alice"));
}

#[tokio::test]
async fn list_outfits_applies_offset_then_limit() {
  let s = store().await;
  for i in 0..5 {
    s.put_outfit(outfit("user-1", &format!("outfit-{i}")))
      .await
      .unwrap();
  }

  let page = s.list_outfits("user-1", 2, 1).await.unwrap();
  let names: Vec<_> = page.iter().map(|o| o.name.as_str()).collect();
  assert_eq!(names, ["outfit-1", "outfit-2"]);
}

#[tokio::test]
async fn list_outfits_preserves_insertion_order() {
  let s = store().await;
  for i in 0..3 {
    s.put_outfit(outfit("user-1", &format!("outfit-{i}")))
      .await
      .unwrap();
  }

  let listed = s.list_outfits("user-1", 1000, 0).await.unwrap();
  let names: Vec<_> = listed.iter().map(|o| o.name.as_str()).collect();
  assert_eq!(names, ["outfit-0", "outfit-1", "outfit-2"]);
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_outfit_removes_the_document() {
  let s = store().await;
  let o = outfit("user-1", "Short-lived");
  s.put_outfit(o.clone()).await.unwrap();

  s.delete_outfit(o.outfit_id).await.unwrap();
  assert!(s.get_outfit(o.outfit_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_outfit_twice_is_not_an_error() {
  let s = store().await;
  let o = outfit("user-1", "Short-lived");
  s.put_outfit(o.clone()).await.unwrap();

  s.delete_outfit(o.outfit_id).await.unwrap();
  s.delete_outfit(o.outfit_id).await.unwrap();
}

#[tokio::test]
async fn delete_outfit_keeps_feedback_rows() {
  let s = store().await;
  let o = outfit("user-1", "With feedback");
  s.put_outfit(o.clone()).await.unwrap();
  s.record_feedback(feedback_input(o.outfit_id, "user-1", 4))
    .await
    .unwrap();

  s.delete_outfit(o.outfit_id).await.unwrap();

  let remaining = s.list_feedback(o.outfit_id).await.unwrap();
  assert_eq!(remaining.len(), 1);
}

// ─── Wardrobe items ──────────────────────────────────────────────────────────

#[tokio::test]
async fn put_and_get_item_round_trip() {
  let s = store().await;
  let item = WardrobeItem {
    id:        "w-1".to_string(),
    name:      "Linen shirt".to_string(),
    kind:      "top".to_string(),
    image_url: Some("https://img/w-1.jpg".to_string()),
    extra:     [("color".to_string(), json!("white"))].into_iter().collect(),
  };

  s.put_item(item.clone()).await.unwrap();

  let fetched = s.get_item("w-1").await.unwrap().unwrap();
  assert_eq!(fetched, item);
}

#[tokio::test]
async fn get_item_missing_returns_none() {
  let s = store().await;
  assert!(s.get_item("nope").await.unwrap().is_none());
}

// ─── Feedback ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_feedback_assigns_id_and_timestamp() {
  let s = store().await;
  let o = outfit("user-1", "Rated");
  s.put_outfit(o.clone()).await.unwrap();

  let first = s
    .record_feedback(feedback_input(o.outfit_id, "user-1", 4))
    .await
    .unwrap();
  let second = s
    .record_feedback(feedback_input(o.outfit_id, "user-1", 2))
    .await
    .unwrap();

  assert_ne!(first.feedback_id, second.feedback_id);
  assert_eq!(first.rating, 4);
  assert_eq!(first.category, FeedbackCategory::Like);

  let all = s.list_feedback(o.outfit_id).await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].feedback_id, first.feedback_id);
  assert_eq!(all[1].feedback_id, second.feedback_id);
}

#[tokio::test]
async fn set_last_feedback_overwrites_and_bumps_updated_at() {
  let s = store().await;
  let o = outfit("user-1", "Rated");
  s.put_outfit(o.clone()).await.unwrap();

  let first = s
    .record_feedback(feedback_input(o.outfit_id, "user-1", 5))
    .await
    .unwrap();
  s.set_last_feedback(o.outfit_id, &first).await.unwrap();

  let second = s
    .record_feedback(feedback_input(o.outfit_id, "user-1", 1))
    .await
    .unwrap();
  s.set_last_feedback(o.outfit_id, &second).await.unwrap();

  let fetched = s.get_outfit(o.outfit_id).await.unwrap().unwrap();
  let last = fetched.last_feedback.expect("last feedback set");
  assert_eq!(last.feedback_id, second.feedback_id);
  assert_eq!(last.rating, 1);
  assert!(fetched.updated_at.is_some());
}
