// src/api/types.rs

use serde::Serialize;

use crate::chart::Figure;

/// Tab summary with its figure, as returned by the figures endpoints.
#[derive(Debug, Serialize)]
pub struct FigureResponse<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub figure: &'a Figure,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tabs: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
