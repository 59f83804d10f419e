// src/api/mod.rs — Development HTTP server for the dashboard

pub mod handlers;
pub mod types;

use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::dashboard::{page, Dashboard};
use crate::data::MetricsTable;
use crate::infra::config::{Config, ServerConfig};
use crate::infra::errors::Result;

/// Shared, read-only state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub table: Arc<MetricsTable>,
    pub dashboard: Arc<Dashboard>,
    /// The page HTML, rendered once at startup.
    pub page: Arc<String>,
}

impl ApiState {
    /// Validate the table, build every figure and render the page.
    pub fn new(table: MetricsTable, config: &Config) -> Result<Self> {
        table.validate()?;
        let dashboard = Dashboard::build_titled(&table, &config.page.title);
        let page = page::render(&dashboard, &config.page)?;
        Ok(Self {
            table: Arc::new(table),
            dashboard: Arc::new(dashboard),
            page: Arc::new(page),
        })
    }
}

/// Build the axum router with all routes. The page and its data share one
/// origin, so no CORS headers are sent.
pub fn build_router(state: ApiState, debug: bool) -> Router {
    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/api/v1/figures", get(handlers::list_figures))
        .route("/api/v1/figures/{id}", get(handlers::get_figure))
        .route("/api/v1/data", get(handlers::get_data))
        .route("/api/v1/health", get(handlers::health))
        .with_state(state);

    if debug {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Bind and serve until the process is killed.
pub async fn start_server(config: &ServerConfig, state: ApiState) -> anyhow::Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard running on http://{addr}/");
    if config.debug {
        tracing::info!("Debug mode: request tracing on");
    }

    axum::serve(listener, build_router(state, config.debug)).await?;
    Ok(())
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_until<F>(
    listener: tokio::net::TcpListener,
    state: ApiState,
    debug: bool,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state, debug))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
