use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub watch: WatchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Extension root holding `icons/` and `default-icons/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults_dir: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub seed_bundled_icons: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            root: None,
            defaults_dir: None,
            seed_bundled_icons: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "default_theme_file_name")]
    pub file_name: String,
}

fn default_theme_file_name() -> String {
    "iconified-icon-theme.json".to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            file_name: default_theme_file_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    200
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl WatchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl AppSettings {
    /// Load settings from `config_path`, writing the defaults there on first use
    pub fn load(config_path: &Path) -> AppResult<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let settings: AppSettings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            let settings = AppSettings::default();
            settings.save(config_path)?;
            tracing::info!("Wrote default settings to {}", config_path.display());
            Ok(settings)
        }
    }

    pub fn save(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let settings: AppSettings = toml::from_str("").unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.theme.file_name, "iconified-icon-theme.json");
        assert_eq!(settings.watch.debounce(), Duration::from_millis(200));
        assert!(settings.general.seed_bundled_icons);
        assert!(settings.general.root.is_none());
    }

    #[test]
    fn test_partial_file() {
        let settings: AppSettings = toml::from_str(
            "[general]\nroot = \"/opt/ext\"\n\n[watch]\ndebounce_ms = 50\n",
        )
        .unwrap();
        assert_eq!(settings.general.root, Some(PathBuf::from("/opt/ext")));
        assert_eq!(settings.watch.debounce_ms, 50);
        assert_eq!(settings.theme, ThemeSettings::default());
    }

    #[test]
    fn test_load_writes_defaults_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let first = AppSettings::load(&path).unwrap();
        assert!(path.exists());

        let mut changed = first.clone();
        changed.watch.debounce_ms = 1000;
        changed.general.defaults_dir = Some(PathBuf::from("/srv/defaults"));
        changed.save(&path).unwrap();

        let reloaded = AppSettings::load(&path).unwrap();
        assert_eq!(reloaded, changed);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[watch]\ndebounce_ms = \"soon\"\n").unwrap();

        let err = AppSettings::load(&path).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
