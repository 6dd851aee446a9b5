//! Attire API server binary.
//!
//! Configuration is layered: built-in defaults, then `config.toml` (or the
//! path given with `--config`), then `ATTIRE_*` environment variables, then
//! CLI flags. Authentication is handled by the fronting gateway, which
//! forwards the verified identity in the `x-user-id` header.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use attire_api::{AppState, ServerConfig, outfit_router};
use attire_core::event::TracingSink;
use attire_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Attire outfit API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the configured listen port.
  #[arg(short, long)]
  port: Option<u16>,

  /// Override the configured SQLite store path.
  #[arg(long)]
  store_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = load_config(&cli)?;

  let store_path = expand_tilde(&cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(store = %store_path.display(), "store opened");

  let state = AppState {
    store:     Arc::new(store),
    analytics: Arc::new(TracingSink),
  };

  let app = axum::Router::new()
    .nest("/api/outfits", outfit_router(state))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", cfg.host, cfg.port);
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app).await.context("server error")
}

/// Layer file, environment, and CLI sources into a [`ServerConfig`].
fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
  let mut builder = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("ATTIRE"));

  if let Some(port) = cli.port {
    builder = builder.set_override("port", i64::from(port))?;
  }
  if let Some(path) = &cli.store_path {
    builder = builder.set_override("store_path", path.to_string_lossy().as_ref())?;
  }

  builder
    .build()
    .context("failed to read config file")?
    .try_deserialize()
    .context("invalid server configuration")
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
