//! HTTP read/write surface over the cutting table, mirroring the
//! external dashboard API: all rows as JSON with ISO dates and HH:MM
//! times, one POST endpoint for appending a record.

pub mod handlers;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::store::RecordStore;
use axum::Router;
use axum::http::HeaderMap;
use axum::routing::get;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone)]
pub struct ApiState {
    /// All table access goes through this mutex, so overlapping appends
    /// are serialized instead of racing on the read-modify-write cycle.
    pub store: Arc<Mutex<RecordStore>>,
    pub cfg: Arc<Config>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route(
            "/entries",
            get(handlers::get_entries).post(handlers::post_entry),
        )
        .route("/clients", get(handlers::get_clients))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Resolve the caller's role from the `X-API-Key` header.
/// Config stores SHA-256 digests, never the keys themselves; an empty
/// digest disables that role entirely.
pub fn authenticate(headers: &HeaderMap, cfg: &Config) -> AppResult<Role> {
    let key = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    let digest = sha256_hex(key);

    if !cfg.operator_key_sha256.is_empty() && digest == cfg.operator_key_sha256 {
        return Ok(Role::Operator);
    }
    if !cfg.supervisor_key_sha256.is_empty() && digest == cfg.supervisor_key_sha256 {
        return Ok(Role::Supervisor);
    }

    Err(AppError::InvalidApiKey)
}

pub fn sha256_hex(input: &str) -> String {
    let hash = Sha256::digest(input.as_bytes());
    hash.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Run the API server until killed.
pub fn serve(cfg: Config, addr_override: Option<String>) -> AppResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cutlog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cfg.operator_key_sha256.is_empty() && cfg.supervisor_key_sha256.is_empty() {
        tracing::warn!(
            "no API key digests configured; every request will be rejected \
             (set operator_key_sha256 / supervisor_key_sha256 in {})",
            Config::config_file().display()
        );
    }

    let addr = addr_override.unwrap_or_else(|| cfg.listen_addr.clone());

    let store = RecordStore::new(&cfg.data_file);
    store.initialize()?;

    let state = ApiState {
        store: Arc::new(Mutex::new(store)),
        cfg: Arc::new(cfg),
    };

    let app = router(state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("cutlog API listening on {}", listener.local_addr()?);
        axum::serve(listener, app).await?;
        Ok::<(), AppError>(())
    })
}
