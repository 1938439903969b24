use crate::config::IconPaths;
use crate::error::{AppError, AppResult};
use crate::theme::{self, RegenerateOutcome};
use std::path::Path;
use std::str::FromStr;

/// The named actions exposed to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCommand {
    OpenFileIconsFolder,
    OpenFolderIconsFolder,
    RefreshIcons,
}

impl IconCommand {
    pub const ALL: [IconCommand; 3] = [
        IconCommand::OpenFileIconsFolder,
        IconCommand::OpenFolderIconsFolder,
        IconCommand::RefreshIcons,
    ];

    pub fn id(self) -> &'static str {
        match self {
            IconCommand::OpenFileIconsFolder => "iconified.openFileIconsFolder",
            IconCommand::OpenFolderIconsFolder => "iconified.openFolderIconsFolder",
            IconCommand::RefreshIcons => "iconified.refreshIcons",
        }
    }

    /// Run the command, returning the message to show the user
    pub fn execute(self, paths: &IconPaths) -> AppResult<String> {
        match self {
            IconCommand::OpenFileIconsFolder => {
                open_file_icons_folder(paths)?;
                Ok(format!("Opened {}", paths.file_icons.display()))
            }
            IconCommand::OpenFolderIconsFolder => {
                open_folder_icons_folder(paths)?;
                Ok(format!("Opened {}", paths.folder_icons.display()))
            }
            IconCommand::RefreshIcons => {
                refresh_icons(paths)?;
                Ok("Custom icons refreshed!".to_string())
            }
        }
    }
}

impl FromStr for IconCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| AppError::UnknownCommand(s.to_string()))
    }
}

impl std::fmt::Display for IconCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Open the file-icons directory in the system file manager
pub fn open_file_icons_folder(paths: &IconPaths) -> AppResult<()> {
    open_in_file_manager(&paths.file_icons)
}

/// Open the folder-icons directory in the system file manager
pub fn open_folder_icons_folder(paths: &IconPaths) -> AppResult<()> {
    open_in_file_manager(&paths.folder_icons)
}

/// Regenerate the theme now
pub fn refresh_icons(paths: &IconPaths) -> AppResult<RegenerateOutcome> {
    let outcome = theme::regenerate(paths)?;
    if !outcome.written {
        tracing::info!("Icon theme already up to date");
    }
    Ok(outcome)
}

fn open_in_file_manager(path: &Path) -> AppResult<()> {
    if !path.is_dir() {
        return Err(AppError::MissingDirectory(path.to_path_buf()));
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer").arg(path).spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
    }

    tracing::debug!("Opened {} in file manager", path.display());
    Ok(())
}
