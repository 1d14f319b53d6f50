//! Palette configuration.

use serde::{Deserialize, Serialize};

/// Host-supplied configuration.
///
/// Every field has a default, so partial config files work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Placeholder text shown while the search input is empty.
    pub placeholder: String,
    /// Whether per-command hotkeys are bound globally at all.
    pub register_hotkeys: bool,
    /// Whether the palette starts out visible.
    pub visible: bool,
    /// Suppress the breadcrumb line when rendering.
    pub hide_breadcrumbs: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type a command or search...".to_string(),
            register_hotkeys: true,
            visible: false,
            hide_breadcrumbs: false,
        }
    }
}
