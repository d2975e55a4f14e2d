use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stores user-configurable CLI preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    /// Display currency code shown next to amounts. Amounts themselves are
    /// plain numbers; the code is a formatting hint only.
    pub currency: String,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_list: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for lists. Defaults under the app home.
    pub default_list_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for backups. Defaults under the app home.
    pub default_backup_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-KE".into(),
            currency: "KES".into(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            last_opened_list: None,
            default_list_root: None,
            default_backup_root: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_list_root(&self, base: &Path) -> PathBuf {
        if let Some(path) = &self.default_list_root {
            return path.clone();
        }
        base.join("lists")
    }

    pub fn resolve_backup_root(&self, base: &Path) -> PathBuf {
        if let Some(path) = &self.default_backup_root {
            return path.clone();
        }
        base.join("backups")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
