// src/cli/serve.rs — Start the dashboard server

use crate::api::{self, ApiState};
use crate::data::MetricsTable;
use crate::infra::config::Config;

/// Build the dashboard from the built-in table and serve it until the
/// process is interrupted.
pub async fn run_serve(config: &Config) -> anyhow::Result<()> {
    let state = ApiState::new(MetricsTable::new(), config)?;
    tracing::info!(
        tabs = state.dashboard.tabs.len(),
        years = state.table.rows().len(),
        "dashboard ready"
    );
    api::start_server(&config.server, state).await
}
