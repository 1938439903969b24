pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod watcher;

use cli::{Cli, CliCommand};
use commands::IconCommand;
use error::AppResult;
use state::AppState;
use theme::RegenerateOutcome;
use watcher::WatchOptions;

/// Bring the icon directories into shape and generate the theme once
pub fn activate(state: &AppState) -> AppResult<RegenerateOutcome> {
    bootstrap::ensure_directories(&state.paths, &state.defaults)?;
    theme::regenerate(&state.paths)
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> AppResult<()> {
    let state = AppState::load(cli.config, cli.root)?;
    tracing::debug!("Iconified root: {}", state.root.display());

    match cli.command {
        CliCommand::Generate => {
            let outcome = activate(&state)?;
            println!(
                "{} icon definition(s) -> {}",
                outcome.definitions,
                state.paths.theme_file.display()
            );
        }
        CliCommand::Watch { debounce_ms } => {
            activate(&state)?;
            let debounce = debounce_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| state.settings.watch.debounce());
            println!(
                "Iconified activated! Drop icons into {} or {}",
                state.paths.file_icons.display(),
                state.paths.folder_icons.display()
            );
            watcher::watch_and_regenerate(&state.paths, WatchOptions { debounce })?;
        }
        CliCommand::Refresh => execute(IconCommand::RefreshIcons, &state)?,
        CliCommand::OpenFileIcons => execute(IconCommand::OpenFileIconsFolder, &state)?,
        CliCommand::OpenFolderIcons => execute(IconCommand::OpenFolderIconsFolder, &state)?,
        CliCommand::Run { id } => execute(id.parse()?, &state)?,
        CliCommand::Paths => {
            println!("root:         {}", state.root.display());
            println!("file icons:   {}", state.paths.file_icons.display());
            println!("folder icons: {}", state.paths.folder_icons.display());
            println!("theme:        {}", state.paths.theme_file.display());
            println!("defaults:     {}", state.defaults.dir.display());
        }
    }

    Ok(())
}

fn execute(command: IconCommand, state: &AppState) -> AppResult<()> {
    tracing::debug!("Running {}", command);
    let message = command.execute(&state.paths)?;
    println!("{}", message);
    Ok(())
}
