pub mod settings;

pub use settings::*;

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Directory (under the icons dir) holding file icons
pub const FILE_ICONS_DIR: &str = "file-icons";

/// Directory (under the icons dir) holding folder icons
pub const FOLDER_ICONS_DIR: &str = "folder-icons";

/// Get the Iconified config directory
pub fn get_config_dir() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .ok_or_else(|| AppError::Config("Could not find config directory".into()))?
        .join("iconified");

    Ok(config_dir)
}

/// Get the default extension root, used when neither the CLI nor the
/// settings name one
pub fn get_default_root() -> AppResult<PathBuf> {
    let root = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
        .ok_or_else(|| AppError::Config("Could not find data directory".into()))?
        .join("iconified");

    Ok(root)
}

/// Locations the synthesizer reads from and writes to.
///
/// Passed explicitly to every routine that touches the icon directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub icons_dir: PathBuf,
    pub file_icons: PathBuf,
    pub folder_icons: PathBuf,
    pub theme_file: PathBuf,
}

impl IconPaths {
    pub fn new(icons_dir: impl Into<PathBuf>, theme_file_name: &str) -> Self {
        let icons_dir = icons_dir.into();
        Self {
            file_icons: icons_dir.join(FILE_ICONS_DIR),
            folder_icons: icons_dir.join(FOLDER_ICONS_DIR),
            theme_file: icons_dir.join(theme_file_name),
            icons_dir,
        }
    }

    /// Layout used by an extension root: `<root>/icons/...`
    pub fn under_root(root: &Path, theme_file_name: &str) -> Self {
        Self::new(root.join("icons"), theme_file_name)
    }
}

/// Where default icons are copied from when an icon directory is first created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultIcons {
    pub dir: PathBuf,
    /// Install the icons compiled into the binary when `dir` has nothing to copy
    pub use_bundled: bool,
}

impl DefaultIcons {
    pub fn file_icons(&self) -> PathBuf {
        self.dir.join(FILE_ICONS_DIR)
    }

    pub fn folder_icons(&self) -> PathBuf {
        self.dir.join(FOLDER_ICONS_DIR)
    }
}
