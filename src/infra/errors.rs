// src/infra/errors.rs — Error types for findash

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    // Data invariants
    #[error("Table has {count} rows for year {year}")]
    DuplicateYear { year: u16, count: usize },

    #[error("Years out of order: {previous} is followed by {next}")]
    YearOrder { previous: u16, next: u16 },

    #[error("Non-finite value in '{column}' for {year}")]
    NonFinite { column: &'static str, year: u16 },

    #[error("Table is empty")]
    EmptyTable,

    // Lookup
    #[error("Tab '{id}' not found")]
    TabNotFound { id: String },

    // Infra
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
