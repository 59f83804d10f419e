// src/cli/export.rs — Data export command
//
// Writes the figures (JSON/YAML), the raw table (CSV) or the standalone
// page (HTML) without starting a server.

use crate::cli::ExportFormat;
use crate::dashboard::{page, Dashboard};
use crate::data::MetricsTable;
use crate::infra::config::Config;

/// Render the export for `format` as a string.
pub fn render_export(format: ExportFormat, config: &Config) -> anyhow::Result<String> {
    let table = MetricsTable::new();
    table.validate()?;

    let output = match format {
        ExportFormat::Csv => table.to_csv(),
        ExportFormat::Json => {
            let dashboard = Dashboard::build_titled(&table, &config.page.title);
            serde_json::to_string_pretty(&dashboard)?
        }
        ExportFormat::Yaml => {
            let dashboard = Dashboard::build_titled(&table, &config.page.title);
            serde_yml::to_string(&dashboard)?
        }
        ExportFormat::Html => {
            let dashboard = Dashboard::build_titled(&table, &config.page.title);
            page::render(&dashboard, &config.page)?
        }
    };
    Ok(output)
}

/// Export dashboard data to a file or stdout.
pub fn run_export(format: ExportFormat, output: Option<&str>, config: &Config) -> anyhow::Result<()> {
    let output_str = render_export(format, config)?;

    if let Some(path) = output {
        std::fs::write(path, &output_str)?;
        println!("Exported {:?} to {}", format, path);
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_has_all_tabs() {
        let out = render_export(ExportFormat::Json, &Config::default()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["title"], "Company Performance Dashboard");
        assert_eq!(v["tabs"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_yaml_export() {
        let out = render_export(ExportFormat::Yaml, &Config::default()).unwrap();
        assert!(out.contains("sales-overview"));
        assert!(out.contains("Inventory Turnover Ratio"));
    }

    #[test]
    fn test_csv_export() {
        let out = render_export(ExportFormat::Csv, &Config::default()).unwrap();
        assert!(out.starts_with("Year,"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        run_export(
            ExportFormat::Html,
            Some(path.to_str().unwrap()),
            &Config::default(),
        )
        .unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
