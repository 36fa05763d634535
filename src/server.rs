//! HTTP Server and Scrape Handling
//!
//! This module implements the Prometheus exporter HTTP server.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing `/metrics`, `/health`, and `/` endpoints
//! - **Scrape on demand**: every `GET /metrics` runs the full collection pipeline
//!   against Snipe-IT; nothing is cached between scrapes
//! - **State Management**: Shared state (config, metrics, client) using Arc for thread-safety
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Health check (returns 200 if the last scrape succeeded, 503 otherwise)
//!
//! # Concurrency
//!
//! Scrapes are serialized by an async mutex. A second scrape arriving while one is
//! in progress waits for it to finish and then runs its own pipeline.
//!
//! # Error Handling
//!
//! Any Snipe-IT API failure aborts the scrape: `/metrics` answers 500 with the error
//! and `snipeit_up` drops to 0. The server keeps running and the next scrape starts
//! from scratch.

use crate::collectors::{self, CollectionContext};
use crate::config::Config;
use crate::metrics::MetricsCollector;
use crate::snipeit::SnipeItClient;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    metrics: MetricsCollector,
    client: Arc<SnipeItClient>,
    scrape_lock: Arc<Mutex<()>>,
}

/// Build the exporter's router
pub fn router(config: Config) -> anyhow::Result<Router> {
    let metrics = MetricsCollector::new()?;
    let client = Arc::new(SnipeItClient::new(
        &config.snipeit,
        config.metrics.page_limit,
    )?);

    let state = AppState {
        config: Arc::new(config),
        metrics,
        client,
        scrape_lock: Arc::new(Mutex::new(())),
    };

    Ok(Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state))
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let app = router(config)?;

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run one full scrape and render the result
async fn scrape(state: &AppState) -> anyhow::Result<String> {
    let _guard = state.scrape_lock.lock().await;
    let started = Instant::now();

    let ctx = CollectionContext {
        client: &state.client,
        config: &state.config.metrics,
    };

    match collectors::collect_inventory(&ctx).await {
        Ok(inventory) => {
            let samples = state.metrics.publish(&inventory);
            let elapsed = started.elapsed().as_secs_f64();
            state.metrics.up.set(1.0);
            state.metrics.scrape_duration_seconds.set(elapsed);
            info!("Scrape finished: {} samples in {:.3}s", samples, elapsed);
        }
        Err(e) => {
            state.metrics.up.set(0.0);
            return Err(e.into());
        }
    }

    state.metrics.render()
}

async fn root_handler() -> impl IntoResponse {
    axum::response::Html(
        r#"<html>
<head><title>Snipe-IT Exporter</title></head>
<body>
<h1>Snipe-IT Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#,
    )
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match scrape(&state).await {
        Ok(metrics) => metrics.into_response(),
        Err(e) => {
            error!("Failed to collect metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error collecting metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let up_value = state.metrics.up.get();

    if up_value > 0.0 {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Snipe-IT API unreachable")
    }
}
