// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dashboard::DEFAULT_TITLE;
use crate::infra::errors::Result;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Development mode: request tracing and debug-level logs.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8050,
            debug: true,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    /// Script URL of the plotly.js bundle the page loads.
    pub plotly_js: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            plotly_js: "https://cdn.plot.ly/plotly-2.35.2.min.js".into(),
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>, debug: bool) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if debug {
            self.server.debug = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.server.host, "127.0.0.1");
        assert_eq!(c.server.port, 8050);
        assert!(c.server.debug);
        assert_eq!(c.page.title, DEFAULT_TITLE);
        assert!(c.page.plotly_js.starts_with("https://"));
    }

    #[test]
    fn test_addr() {
        assert_eq!(ServerConfig::default().addr(), "127.0.0.1:8050");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8050);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 9000
debug = false

[page]
title = "Annual Report"
plotly_js = "/static/plotly.min.js"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.debug);
        assert_eq!(config.page.title, "Annual Report");
        assert_eq!(config.page.plotly_js, "/static/plotly.min.js");
    }

    #[test]
    fn test_overrides() {
        let c = Config::default().with_overrides(Some("0.0.0.0".into()), Some(1234), false);
        assert_eq!(c.server.addr(), "0.0.0.0:1234");
        assert!(c.server.debug);

        let mut quiet = Config::default();
        quiet.server.debug = false;
        let c = quiet.with_overrides(None, None, true);
        assert!(c.server.debug);
        assert_eq!(c.server.port, 8050);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost = \"localhost\"\nport = 8123\ndebug = true").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.page.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
