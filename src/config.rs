use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/driver.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DriverConfig {
    pub window: WindowSettings,
    /// Key name -> legacy code overrides layered over the built-in keymap.
    pub bindings: HashMap<String, u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "snakehost".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            bindings: HashMap::new(),
        }
    }
}

impl DriverConfig {
    /// Load driver configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<DriverConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    DriverConfig::default()
                }
            },
            Err(err) => {
                if path == Path::new(DEFAULT_CONFIG_PATH) {
                    tracing::debug!("No config at {}: {err}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                DriverConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = DriverConfig::load_from_path(Path::new("/nonexistent/driver.toml"));
        assert_eq!(cfg.window.title, "snakehost");
        assert_eq!(cfg.window.width, 1200);
        assert!(cfg.bindings.is_empty());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let toml = r#"
            [window]
            title = "snake"

            [bindings]
            KeyP = 80
        "#;
        let cfg: DriverConfig = toml::from_str(toml).expect("config should parse");
        assert_eq!(cfg.window.title, "snake");
        assert_eq!(cfg.window.width, 1200);
        assert_eq!(cfg.bindings.get("KeyP"), Some(&80));
    }
}
