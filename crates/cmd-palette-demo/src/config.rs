//! Demo configuration
//!
//! Configuration loaded from a .cmd-palette-demo.toml file.

use cmd_palette::PaletteConfig;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".cmd-palette-demo.toml";

/// Demo configuration loaded from .cmd-palette-demo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Palette settings, passed straight through to the widget
    pub palette: PaletteConfig,
}

impl DemoConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded demo config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default demo config");
        Self::default()
    }
}

/// Load config file content from CWD first, then home directory
fn load_config_file() -> Option<String> {
    // Try current directory first
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    // Try home directory
    if let Some(home_config) = env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
    {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    None
}
