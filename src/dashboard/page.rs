// src/dashboard/page.rs — HTML page rendering (minijinja)

use minijinja::{context, Environment};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::infra::config::PageConfig;
use crate::infra::errors::Result;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

#[derive(Serialize)]
struct TabContext<'a> {
    id: &'a str,
    label: &'a str,
    figure_json: String,
}

/// Render the full dashboard page: heading, tab bar, and one chart panel per
/// tab with its figure embedded as JSON.
pub fn render(dashboard: &Dashboard, page: &PageConfig) -> Result<String> {
    let mut env = Environment::new();
    // The `.html` name turns on HTML auto-escaping.
    env.add_template("page.html", PAGE_TEMPLATE)?;

    let tabs = dashboard
        .tabs
        .iter()
        .map(|tab| {
            Ok(TabContext {
                id: tab.id,
                label: tab.label,
                figure_json: embed_json(&serde_json::to_string(&tab.figure)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let html = env.get_template("page.html")?.render(context! {
        title => dashboard.title,
        plotly_js => page.plotly_js,
        tabs => tabs,
    })?;
    Ok(html)
}

/// Keep JSON inside a `<script>` element from closing it early.
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
