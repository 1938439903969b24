use crate::config::{self, AppSettings, DefaultIcons, IconPaths, CONFIG_FILE_NAME};
use crate::error::AppResult;
use std::path::PathBuf;

/// Resolved settings and locations for one run
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: AppSettings,
    pub root: PathBuf,
    pub paths: IconPaths,
    pub defaults: DefaultIcons,
}

impl AppState {
    /// Load settings (from `config_path`, or the user config dir) and resolve
    /// paths. `root` overrides the configured extension root.
    pub fn load(config_path: Option<PathBuf>, root: Option<PathBuf>) -> AppResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => config::get_config_dir()?.join(CONFIG_FILE_NAME),
        };
        let settings = AppSettings::load(&config_path)?;
        Self::from_settings(settings, root)
    }

    pub fn from_settings(settings: AppSettings, root: Option<PathBuf>) -> AppResult<Self> {
        let root = match root.or_else(|| settings.general.root.clone()) {
            Some(root) => root,
            None => config::get_default_root()?,
        };

        let paths = IconPaths::under_root(&root, &settings.theme.file_name);
        let defaults = DefaultIcons {
            dir: settings
                .general
                .defaults_dir
                .clone()
                .unwrap_or_else(|| root.join("default-icons")),
            use_bundled: settings.general.seed_bundled_icons,
        };

        Ok(Self {
            settings,
            root,
            paths,
            defaults,
        })
    }
}
