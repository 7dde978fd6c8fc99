use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Theme overrides loaded from a TOML file passed via `--theme`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Hex color overrides keyed by theme slot name, e.g.
    /// `background = "#0C001B"` under a `[colors]` table
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read theme file: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load theme overrides from a TOML file
pub fn load_theme_config(path: &Path) -> Result<ThemeConfig, ConfigError> {
    let source = std::fs::read_to_string(path)?;
    let config: ThemeConfig = toml::from_str(&source)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_config() {
        let config: ThemeConfig = toml::from_str(
            r##"
            [colors]
            background = "#000000"
            highlight = "#FB4196"
            "##,
        )
        .unwrap();
        assert_eq!(config.colors.get("background").map(String::as_str), Some("#000000"));
        assert_eq!(config.colors.get("highlight").map(String::as_str), Some("#FB4196"));
    }

    #[test]
    fn test_empty_theme_config_is_valid() {
        let config: ThemeConfig = toml::from_str("").unwrap();
        assert!(config.colors.is_empty());
    }
}
