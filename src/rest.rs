// Copyright 2026 Cashmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP front end.
//!
//! A thin axum layer over [`Client`]: every search request performs one full
//! extraction pass against a freshly rendered page and answers with the
//! tagged collection, optionally sorted.

use crate::client::Client;
use crate::config::Config;
use crate::renderer::Renderer;
use crate::types::{Currency, Region, SortOrder};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// State shared by all requests: the long-lived browser and the config.
pub struct AppState {
    pub renderer: Arc<dyn Renderer>,
    pub config: Config,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    region: Option<String>,
    currency: Option<String>,
    sort: Option<String>,
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(search))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    info!("search: {params:?}");

    let currency = params.currency.map(Currency::from).unwrap_or_default();
    let region = params.region.map(Region::from).unwrap_or_default();

    let client = Client::new(Arc::clone(&state.renderer), state.config.clone());
    let mut branches = match client.branches(currency, region).await {
        Ok(b) => b,
        Err(e) => {
            error!("search failed: {e:#}");
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    if let Some(order) = params.sort.as_deref().and_then(SortOrder::from_param) {
        branches.sort(order);
    }

    (StatusCode::OK, Json(branches)).into_response()
}

/// Serve the REST API until the process exits.
pub async fn start(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
