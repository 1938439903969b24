use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Custom file and folder icons for your editor
#[derive(Parser, Debug)]
#[command(name = "iconified", version, about)]
pub struct Cli {
    /// Extension root holding `icons/` and `default-icons/`
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Create the icon directories if needed and generate the theme once
    Generate,
    /// Generate the theme, then regenerate it whenever the icons change
    Watch {
        /// Override the configured debounce window
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,
    },
    /// Regenerate the theme now
    Refresh,
    /// Open the file icons directory
    OpenFileIcons,
    /// Open the folder icons directory
    OpenFolderIcons,
    /// Run a command by id, e.g. `iconified.refreshIcons`
    Run { id: String },
    /// Print the resolved locations
    Paths,
}
