// src/infra/paths.rs — Config file location
//
// FINDASH_HOME overrides everything. Otherwise config lives in ~/.findash/.

use std::path::PathBuf;

/// Returns the FINDASH_HOME override, if set.
fn findash_home() -> Option<PathBuf> {
    std::env::var_os("FINDASH_HOME").map(PathBuf::from)
}

/// Configuration directory: $FINDASH_HOME/ or ~/.findash/
///
/// `None` when neither the override nor a home directory is available.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = findash_home() {
        return Some(home);
    }
    directories::BaseDirs::new().map(|b| b.home_dir().join(".findash"))
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}
