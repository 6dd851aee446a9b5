//! JSON REST API for Attire.
//!
//! Exposes an axum [`Router`] backed by any [`attire_core::store::OutfitStore`].
//! Identity arrives pre-resolved from the fronting gateway (see
//! [`auth::CurrentUser`]); TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/outfits", attire_api::outfit_router(state))
//! ```

pub mod auth;
pub mod error;
pub mod feedback;
pub mod outfits;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;

use attire_core::{event::AnalyticsSink, store::OutfitStore};

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
///
/// Every field has a default, so the server starts with no config file at
/// all; `ATTIRE_*` environment variables and CLI flags override the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8000,
      store_path: PathBuf::from("attire.db"),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: OutfitStore> {
  pub store:     Arc<S>,
  pub analytics: Arc<dyn AnalyticsSink>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised outfit router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn outfit_router<S>(state: AppState<S>) -> Router<()>
where
  S: OutfitStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(outfits::list::<S>))
    .route("/feedback", post(feedback::submit::<S>))
    .route(
      "/{outfit_id}",
      get(outfits::get_one::<S>).delete(outfits::delete_one::<S>),
    )
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
