use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Parsed `config.toml` from the store directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreInfo,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[store]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Display name shown in the TUI header.
    #[serde(default = "default_store_name")]
    pub name: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        StoreInfo {
            name: default_store_name(),
        }
    }
}

fn default_store_name() -> String {
    "todo".to_string()
}

/// `[ui]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Default theme when no preference has been persisted ("light" or "dark").
    #[serde(default)]
    pub theme: Option<String>,
    /// Hex color overrides keyed by palette slot, e.g. `background = "#121212"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.name, "todo");
        assert!(config.ui.theme.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: StoreConfig = toml::from_str(
            r##"
[store]
name = "groceries"

[ui]
theme = "light"

[ui.colors]
background = "#F4F5F7"
primary = "#3F51B5"
"##,
        )
        .unwrap();

        assert_eq!(config.store.name, "groceries");
        assert_eq!(config.ui.theme.as_deref(), Some("light"));
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#F4F5F7")
        );
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: StoreConfig = toml::from_str("[ui]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.store.name, "todo");
        assert_eq!(config.ui.theme.as_deref(), Some("dark"));
    }
}
