use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::StoreConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Template written by `slate init`. Commented entries document the
/// available overrides without activating them.
pub const CONFIG_TOML_TEMPLATE: &str = r##"[store]
name = "{name}"

# --- UI Customization ---
# Uncomment and edit to override defaults.

[ui]
# theme = "dark"              # "light" or "dark" (default when no preference saved)
#
# [ui.colors]
# background = "#121212"
# surface = "#1E1E1E"
# text = "#E0E0E0"
# text_secondary = "#757575"
# primary = "#5C6BC0"
# button_text = "#FFFFFF"
"##;

/// Read config.toml from the store directory.
/// A missing file yields the default config.
pub fn read_config(store_dir: &Path) -> Result<StoreConfig, ConfigError> {
    let path = store_dir.join("config.toml");
    if !path.exists() {
        return Ok(StoreConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Write the initial config.toml with the given store name.
pub fn write_initial_config(store_dir: &Path, name: &str) -> Result<(), ConfigError> {
    let path = store_dir.join("config.toml");
    let content = CONFIG_TOML_TEMPLATE.replace("{name}", name);
    fs::write(&path, content)?;
    Ok(())
}
