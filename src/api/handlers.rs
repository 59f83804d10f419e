// src/api/handlers.rs

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::api::{types::*, ApiState};

/// GET / — The dashboard page.
pub async fn index(State(state): State<ApiState>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

/// GET /api/v1/figures — Every tab with its figure, in display order.
pub async fn list_figures(State(state): State<ApiState>) -> Response {
    let figures: Vec<FigureResponse<'_>> = state
        .dashboard
        .tabs
        .iter()
        .map(|t| FigureResponse {
            id: t.id,
            label: t.label,
            figure: &t.figure,
        })
        .collect();
    Json(figures).into_response()
}

/// GET /api/v1/figures/{id} — One tab's figure.
pub async fn get_figure(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    match state.dashboard.tab(&id) {
        Ok(tab) => Json(FigureResponse {
            id: tab.id,
            label: tab.label,
            figure: &tab.figure,
        })
        .into_response(),
        Err(e) => {
            tracing::debug!("figure lookup failed: {e}");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/data — The metrics table as JSON rows.
pub async fn get_data(State(state): State<ApiState>) -> Response {
    Json(state.table.rows()).into_response()
}

/// GET /api/v1/health — Simple health check.
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tabs: state.dashboard.tabs.len(),
    })
}
